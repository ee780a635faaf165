use crate::controller::{ListSettings, OfferListController};
use crate::loader::FileSource;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const OFFERS_DOC: &str = r#"[
    {
        "id": "lse-1",
        "building_name": "Lakeshore East",
        "location": "400 E Randolph St",
        "city": "Chicago",
        "rooms_bathrooms": "1 bd / 1 ba",
        "monthly_rent_min": 1250,
        "monthly_rent_max": 1600,
        "monthly_savings": 150,
        "discount_type": "6 weeks free",
        "photo_url": "https://img.example.com/lse.jpg",
        "offer_url": "https://deals.example.com/lse",
        "is_active": true
    },
    {
        "id": "wp-1",
        "building_name": "Wolf Point",
        "location": "343 W Wolf Point Plaza",
        "city": "Chicago",
        "rooms_bathrooms": "Studio / 1 ba",
        "monthly_rent_min": 1900,
        "discount_type": "1 month free",
        "is_active": false
    },
    {
        "id": "bh-1",
        "building_name": "Brickell Heights",
        "location": "55 SW 9th St",
        "city": "Miami",
        "rooms_bathrooms": "2 bd / 2 ba",
        "monthly_rent_min": 2400,
        "monthly_rent_max": 2400,
        "monthly_savings": 0,
        "discount_type": "Reduced deposit"
    }
]"#;

/// Unique temp path so parallel tests don't share files
pub fn temp_offers_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "offer_board_{tag}_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// State backed by a temp file holding `body`. Loads once, like startup does.
pub fn state_with_file(tag: &str, body: &str) -> (AppState, PathBuf) {
    let path = temp_offers_path(tag);
    std::fs::write(&path, body).expect("write offers fixture");

    let source = FileSource::new(&path);
    let mut controller = OfferListController::new(ListSettings::default());
    let _ = controller.load(&source);

    (AppState::new(controller, Box::new(source)), path)
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
