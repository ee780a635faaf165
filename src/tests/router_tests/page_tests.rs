// src/tests/router_tests/page_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with_file, OFFERS_DOC};
use http::Method;

#[test]
fn home_page_lists_active_offers() {
    let (state, path) = state_with_file("home", OFFERS_DOC);

    let resp = handle(request(Method::GET, "/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    std::fs::remove_file(path).ok();

    assert!(body.contains("Lakeshore East"));
    assert!(body.contains("Brickell Heights"));
    assert!(!body.contains("Wolf Point"), "inactive offer should be hidden");

    assert!(body.contains("$1,250.00 - $1,600.00 / mo"));
    assert!(body.contains("$2,400.00 / mo"));
    assert!(body.contains("Savings: $150.00"));
    assert!(!body.contains("Savings: $0.00"));
    assert!(body.contains("id=\"offersContainer\""));
}

#[test]
fn fragment_filters_case_insensitively() {
    let (state, path) = state_with_file("fragment", OFFERS_DOC);

    let upper = body_string(handle(request(Method::GET, "/offers?q=MIAMI"), &state).unwrap());
    let lower = body_string(handle(request(Method::GET, "/offers?q=miami"), &state).unwrap());
    std::fs::remove_file(path).ok();

    assert_eq!(upper, lower);
    assert!(lower.contains("Brickell Heights"));
    assert!(!lower.contains("Lakeshore East"));
    assert!(!lower.contains("<html"), "fragment should not carry the layout");
}

#[test]
fn query_is_url_decoded() {
    let (state, path) = state_with_file("decode", OFFERS_DOC);

    let body = body_string(handle(request(Method::GET, "/offers?q=Lakeshore%20East"), &state).unwrap());
    let plus = body_string(handle(request(Method::GET, "/offers?q=lakeshore+east"), &state).unwrap());
    std::fs::remove_file(path).ok();

    assert!(body.contains("Lakeshore East"));
    assert_eq!(body, plus);
}

#[test]
fn no_match_shows_empty_state() {
    let (state, path) = state_with_file("empty", OFFERS_DOC);

    let resp = handle(request(Method::GET, "/offers?q=boston"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    std::fs::remove_file(path).ok();

    assert!(body.contains("No active offers found."));
}

#[test]
fn broken_document_shows_neutral_error() {
    let (state, path) = state_with_file("broken", "{ not json");

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    std::fs::remove_file(path).ok();

    assert!(body.contains("We could not load the offers right now"));
    assert!(!body.contains("expected"), "parse detail leaked: {body}");
    assert!(!body.contains("No active offers found."));
}

#[test]
fn unknown_route_is_not_found() {
    let (state, path) = state_with_file("notfound", OFFERS_DOC);

    let res = handle(request(Method::GET, "/admin"), &state);
    std::fs::remove_file(path).ok();

    match res {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}
