// src/domain/filter.rs

use crate::domain::offer::{Offer, OfferCollection};
use std::cmp::Ordering;
use std::str::FromStr;

/// Presentation order of the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Cities A to Z, cheapest first within a city. Ties keep document order.
    #[default]
    CityThenRent,
    /// Document order.
    Source,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city_rent" | "city" => Ok(SortOrder::CityThenRent),
            "source" | "insertion" => Ok(SortOrder::Source),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

/// The inputs that decide which offers are visible.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferQuery {
    pub text: String,
    pub active_only: bool,
    pub sort: SortOrder,
}

impl Default for OfferQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            active_only: true,
            sort: SortOrder::default(),
        }
    }
}

impl OfferQuery {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

/// Derives the visible set from the loaded collection.
///
/// - inactive offers (`is_active == false`) are dropped when `active_only` is set
/// - the query matches case-insensitively against city, building name and location
/// - an empty (or whitespace-only) query matches everything
///
/// Never touches the collection; returns a fresh `Vec` each call.
pub fn visible_offers<'a>(collection: &'a OfferCollection, query: &OfferQuery) -> Vec<&'a Offer> {
    let needle = query.text.trim().to_lowercase();

    let mut visible: Vec<&Offer> = collection
        .offers()
        .iter()
        .filter(|offer| !query.active_only || offer.is_active())
        .filter(|offer| needle.is_empty() || matches_query(offer, &needle))
        .collect();

    if query.sort == SortOrder::CityThenRent {
        // sort_by is stable, so equal keys stay in document order
        visible.sort_by(|a, b| compare_city_then_rent(a, b));
    }

    visible
}

fn matches_query(offer: &Offer, needle: &str) -> bool {
    [&offer.city, &offer.building_name, &offer.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare_city_then_rent(a: &Offer, b: &Offer) -> Ordering {
    a.city
        .to_lowercase()
        .cmp(&b.city.to_lowercase())
        .then_with(|| a.monthly_rent_min.total_cmp(&b.monthly_rent_min))
}
