// loader.rs
use crate::domain::{Offer, OfferCollection};
use crate::loader::models::RawOffer;
use crate::loader::LoadError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = concat!("offer_board/", env!("CARGO_PKG_VERSION"));

/// Somewhere an offers document can be read from.
pub trait OfferSource: Send + Sync {
    /// Returns the raw body. Any failure to retrieve it is a `LoadError::Transport`.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, used in logs and error detail.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::transport(url.as_str(), None, e.to_string()))?;

        Ok(Self { client, url })
    }
}

impl OfferSource for HttpSource {
    fn fetch(&self) -> Result<String, LoadError> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| LoadError::transport(self.describe(), None, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("non-success status");
            return Err(LoadError::transport(
                self.describe(),
                Some(status.as_u16()),
                reason,
            ));
        }

        resp.text().map_err(|e| {
            LoadError::transport(self.describe(), Some(status.as_u16()), e.to_string())
        })
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// The static file case: offers.json shipped next to the binary.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OfferSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| LoadError::transport(self.describe(), None, e.to_string()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks a source for a configured location.
/// `http(s)://` goes over the network, `file://` and bare paths are read from disk.
pub fn source_from_location(
    location: &str,
    timeout: Duration,
) -> Result<Box<dyn OfferSource>, LoadError> {
    match Url::parse(location) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            Ok(Box::new(HttpSource::new(url, timeout)?))
        }
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| LoadError::transport(location, None, "invalid file URL"))?;
            Ok(Box::new(FileSource::new(path)))
        }
        Ok(url) if url.scheme().len() > 1 => Err(LoadError::transport(
            location,
            None,
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        // Relative paths and Windows drive letters ("C:\...") land here.
        _ => Ok(Box::new(FileSource::new(location))),
    }
}

/// Fetches and parses the whole collection. One attempt, no retry.
pub fn load(source: &dyn OfferSource) -> Result<OfferCollection, LoadError> {
    let name = source.describe();
    info!(source = %name, "loading offers");

    let body = source.fetch()?;
    let collection = parse_offers(&name, &body)?;

    info!(
        source = %name,
        total = collection.len(),
        active = collection.active_count(),
        "offers loaded"
    );
    Ok(collection)
}

/// Turns a document body into a collection.
///
/// The document as a whole must be a JSON array; bad elements inside it are
/// logged and skipped so one typo does not blank the page.
pub fn parse_offers(source_name: &str, body: &str) -> Result<OfferCollection, LoadError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| LoadError::format(source_name, e.to_string()))?;

    let arr = match data {
        Value::Array(arr) => arr,
        other => {
            return Err(LoadError::format(
                source_name,
                format!("expected a JSON array at the top level, found {}", json_kind(&other)),
            ))
        }
    };

    let mut seen_ids = HashSet::new();
    let mut offers = Vec::with_capacity(arr.len());

    for (index, value) in arr.into_iter().enumerate() {
        // serde would also accept a positional array here
        if !value.is_object() {
            warn!(
                source = %source_name,
                index,
                kind = json_kind(&value),
                "skipping offer that is not an object"
            );
            continue;
        }

        let raw: RawOffer = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    source = %source_name,
                    index,
                    error = %e,
                    "skipping offer with unreadable fields"
                );
                continue;
            }
        };

        let offer = match Offer::from_raw(&raw) {
            Ok(offer) => offer,
            Err(reason) => {
                warn!(source = %source_name, index, %reason, "skipping invalid offer");
                continue;
            }
        };

        if !seen_ids.insert(offer.id.clone()) {
            warn!(source = %source_name, index, id = %offer.id, "skipping duplicate offer id");
            continue;
        }

        offers.push(offer);
    }

    Ok(OfferCollection::new(offers))
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
