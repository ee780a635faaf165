// src/domain/offer.rs

use crate::loader::models::RawOffer;
use serde_json::Value;
use tracing::warn;

/// A rental offer after coercion, ready for filtering and display.
/// Acts as the boundary between the hand-edited JSON document and the rest of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: String,

    pub building_name: String,
    pub location: String,
    pub city: String,
    pub rooms_bathrooms: String,
    pub discount_type: String,
    pub photo_url: String,
    pub offer_url: String,

    pub monthly_rent_min: f64,
    /// `None` when absent or zero.
    pub monthly_rent_max: Option<f64>,
    /// `None` when absent or zero.
    pub monthly_savings: Option<f64>,

    /// `None` means the document did not say; treated as active.
    pub is_active: Option<bool>,
}

impl Offer {
    /// Builds an `Offer` from the loose JSON model.
    /// Fails only when the record cannot be identified or priced.
    pub fn from_raw(raw: &RawOffer) -> Result<Self, String> {
        let id = raw
            .id
            .as_ref()
            .and_then(coerce_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty id")?;

        let monthly_rent_min = raw
            .monthly_rent_min
            .as_ref()
            .and_then(coerce_amount)
            .ok_or_else(|| format!("Offer {id}: missing or non-numeric monthly_rent_min"))?;

        for (field, value) in unreadable_fields(raw) {
            warn!(id = %id, field, value = %value, "unreadable value, treating as absent");
        }

        let text = |v: &Option<Value>| v.as_ref().and_then(coerce_text).unwrap_or_default();

        // Zero means "not set" for both of these in the source data.
        let optional_amount = |v: &Option<Value>| {
            v.as_ref()
                .and_then(coerce_amount)
                .filter(|amount| *amount != 0.0)
        };

        Ok(Offer {
            building_name: text(&raw.building_name),
            location: text(&raw.location),
            city: text(&raw.city),
            rooms_bathrooms: text(&raw.rooms_bathrooms),
            discount_type: text(&raw.discount_type),
            photo_url: text(&raw.photo_url),
            offer_url: text(&raw.offer_url),
            monthly_rent_min,
            monthly_rent_max: optional_amount(&raw.monthly_rent_max),
            monthly_savings: optional_amount(&raw.monthly_savings),
            is_active: raw.is_active.as_ref().and_then(coerce_flag),
            id,
        })
    }

    /// Absent flag counts as active.
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }
}

/// The loaded offers, in document order. Replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferCollection {
    offers: Vec<Offer>,
}

impl OfferCollection {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.offers.iter().filter(|o| o.is_active()).count()
    }
}

/// Optional fields that are present but could not be coerced.
/// `null` never lands here: serde maps it to `None`.
fn unreadable_fields(raw: &RawOffer) -> Vec<(&'static str, &Value)> {
    let mut out = Vec::new();

    for (field, value) in [
        ("monthly_rent_max", &raw.monthly_rent_max),
        ("monthly_savings", &raw.monthly_savings),
    ] {
        if let Some(v) = value.as_ref().filter(|v| coerce_amount(v).is_none()) {
            out.push((field, v));
        }
    }

    if let Some(v) = raw.is_active.as_ref().filter(|v| coerce_flag(v).is_none()) {
        out.push(("is_active", v));
    }

    out
}

fn coerce_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accepts JSON numbers and strings like "1250", "1,250.00" or "$1,250".
fn coerce_amount(v: &Value) -> Option<f64> {
    let amount = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| *c != ',' && *c != '$')
                .collect();
            cleaned.trim().parse::<f64>().ok()?
        }
        _ => return None,
    };

    amount.is_finite().then_some(amount)
}

fn coerce_flag(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        _ => None,
    }
}
