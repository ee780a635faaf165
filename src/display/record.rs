use crate::display::{format_usd, BadgeMap, Locale};
use crate::domain::Offer;
use serde::Serialize;

/// Everything a card needs, already formatted. Built fresh on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferCard {
    pub id: String,
    pub building_name: String,
    pub location: String,
    pub city: String,
    pub rooms_bathrooms: String,
    pub discount_type: String,
    pub photo_url: String,
    pub offer_url: String,

    /// "$1,250.00 / mo" or "$1,250.00 - $1,600.00 / mo"
    pub rent_label: String,
    /// Present only when the offer saves money.
    pub savings_label: Option<String>,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRecord {
    Offer(OfferCard),
    /// Stands in for an empty visible set so the view always has one thing to draw.
    NoResults { message: String },
}

pub fn to_display_record(offer: &Offer, badges: &BadgeMap) -> OfferCard {
    OfferCard {
        id: offer.id.clone(),
        building_name: offer.building_name.clone(),
        location: offer.location.clone(),
        city: offer.city.clone(),
        rooms_bathrooms: offer.rooms_bathrooms.clone(),
        discount_type: offer.discount_type.clone(),
        photo_url: offer.photo_url.clone(),
        offer_url: offer.offer_url.clone(),
        rent_label: rent_label(offer),
        savings_label: offer
            .monthly_savings
            .filter(|s| *s > 0.0)
            .map(|s| format!("Savings: {}", format_usd(s))),
        badge: badges.code_for(&offer.city).to_string(),
    }
}

/// Projects the visible set. Never returns an empty `Vec`.
pub fn to_display_records(
    visible: &[&Offer],
    badges: &BadgeMap,
    locale: Locale,
) -> Vec<DisplayRecord> {
    if visible.is_empty() {
        return vec![DisplayRecord::NoResults {
            message: locale.no_offers().to_string(),
        }];
    }

    visible
        .iter()
        .map(|offer| DisplayRecord::Offer(to_display_record(offer, badges)))
        .collect()
}

fn rent_label(offer: &Offer) -> String {
    let min = offer.monthly_rent_min;
    match offer.monthly_rent_max {
        Some(max) if max > 0.0 && max != min => {
            format!("{} - {} / mo", format_usd(min), format_usd(max))
        }
        _ => format!("{} / mo", format_usd(min)),
    }
}
