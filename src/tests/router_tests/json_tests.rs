use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with_file, temp_offers_path, OFFERS_DOC};
use crate::controller::{ListSettings, OfferListController};
use crate::loader::FileSource;
use crate::state::AppState;
use http::Method;
use serde_json::Value;

#[test]
fn json_returns_display_records() {
    let (state, path) = state_with_file("json", OFFERS_DOC);

    let resp = handle(request(Method::GET, "/offers.json?q=chi"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    std::fs::remove_file(path).ok();

    assert_eq!(json["status"], "ok");
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["kind"], "offer");
    assert_eq!(records[0]["id"], "lse-1");
    assert_eq!(records[0]["badge"], "IL");
    assert_eq!(records[0]["rent_label"], "$1,250.00 - $1,600.00 / mo");
}

#[test]
fn json_empty_result_is_sentinel_record() {
    let (state, path) = state_with_file("json_empty", OFFERS_DOC);

    let resp = handle(request(Method::GET, "/offers.json?q=zzz"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    std::fs::remove_file(path).ok();

    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["kind"], "no_results");
}

#[test]
fn json_reports_missing_source_without_detail() {
    let path = temp_offers_path("json_missing");
    let source = FileSource::new(&path);
    let mut controller = OfferListController::new(ListSettings::default());
    assert!(controller.load(&source).is_err());
    let state = AppState::new(controller, Box::new(source));

    let resp = handle(request(Method::GET, "/offers.json"), &state).unwrap();
    assert_eq!(resp.status(), 503);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();

    assert_eq!(json["status"], "error");
    let message = json["message"].as_str().unwrap();
    assert!(!message.contains(&*path.to_string_lossy()));
    assert!(json.get("records").is_none());
}
