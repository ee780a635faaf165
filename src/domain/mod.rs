pub mod filter;
pub mod offer;

pub use filter::{visible_offers, OfferQuery, SortOrder};
pub use offer::{Offer, OfferCollection};
