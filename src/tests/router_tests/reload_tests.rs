use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with_file, OFFERS_DOC};
use http::Method;
use serde_json::Value;

#[test]
fn reload_replaces_offers() {
    let (state, path) = state_with_file("reload", OFFERS_DOC);

    std::fs::write(
        &path,
        r#"[{"id": "tp-1", "building_name": "Tampa Bay Lofts", "city": "Tampa", "monthly_rent_min": 1500}]"#,
    )
    .unwrap();

    let resp = handle(request(Method::POST, "/reload"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        mime::APPLICATION_JSON.as_ref()
    );
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["offers"], 1);

    let body = body_string(handle(request(Method::GET, "/offers"), &state).unwrap());
    std::fs::remove_file(path).ok();

    assert!(body.contains("Tampa Bay Lofts"));
    assert!(!body.contains("Lakeshore East"), "reload should not merge");
}

#[test]
fn failed_reload_reports_error_once() {
    let (state, path) = state_with_file("reload_fail", OFFERS_DOC);
    std::fs::write(&path, r#"{"offers": "nope"}"#).unwrap();

    let resp = handle(request(Method::POST, "/reload"), &state).unwrap();
    assert_eq!(resp.status(), 502);

    let body = body_string(handle(request(Method::GET, "/offers"), &state).unwrap());
    std::fs::remove_file(path).ok();

    assert!(!body.contains("Lakeshore East"));
    assert_eq!(body.matches("col-12").count(), 1);
}

#[test]
fn reload_requires_post() {
    let (state, path) = state_with_file("reload_get", OFFERS_DOC);
    let res = handle(request(Method::GET, "/reload"), &state);
    std::fs::remove_file(path).ok();
    assert!(res.is_err());
}
