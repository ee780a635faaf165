use crate::controller::LoadState;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::state::AppState;
use crate::templates::{pages, HtmlSurface};
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use tracing::{info, warn};

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);
    let query = params.get("q").map(String::as_str).unwrap_or("");

    match (method, path) {
        ("GET", "/") => offers_page(state, query),
        ("GET", "/offers") => offers_fragment(state, query),
        ("GET", "/offers.json") => offers_json(state, query),
        ("POST", "/reload") => reload(state),
        _ => Err(ServerError::NotFound),
    }
}

fn offers_page(state: &AppState, query: &str) -> ResultResp {
    let controller = state.controller()?;
    let locale = controller.settings().locale;

    let mut surface = HtmlSurface::new(locale);
    controller.render(query, &mut surface);

    let loaded_at = match controller.state() {
        LoadState::Loaded { at } => Some(*at),
        _ => None,
    };

    html_response(pages::offers_page(query, surface.into_markup(), loaded_at, locale))
}

/// htmx target: just the cards.
fn offers_fragment(state: &AppState, query: &str) -> ResultResp {
    let controller = state.controller()?;

    let mut surface = HtmlSurface::new(controller.settings().locale);
    controller.on_query_change(query, &mut surface);

    html_response(surface.into_markup())
}

fn offers_json(state: &AppState, query: &str) -> ResultResp {
    let controller = state.controller()?;

    match controller.display_records(query) {
        Ok(records) => json_response(
            200,
            &json!({ "status": "ok", "query": query, "records": records }),
        ),
        Err(message) => json_response(503, &json!({ "status": "error", "message": message })),
    }
}

fn reload(state: &AppState) -> ResultResp {
    match state.reload()? {
        Ok(count) => {
            info!(count, "offers reloaded");
            json_response(200, &json!({ "status": "ok", "offers": count }))
        }
        Err(e) => {
            warn!(error = %e, "reload failed");
            let locale = state.controller()?.settings().locale;
            json_response(
                502,
                &json!({ "status": "error", "message": e.user_message(locale) }),
            )
        }
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
