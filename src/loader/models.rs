use serde::Deserialize;
use serde_json::Value;

// offer
//  ├── id
//  ├── building_name
//  ├── location
//  ├── city
//  ├── rooms_bathrooms
//  ├── monthly_rent_min
//  ├── monthly_rent_max
//  ├── monthly_savings
//  ├── discount_type
//  ├── photo_url
//  ├── offer_url
//  └── is_active

/// One element of the offers array exactly as it arrives.
///
/// Every field is kept as a loose `Value` because the document is hand-edited
/// and types drift (numeric ids, rents written as strings, etc.).
/// `Offer::from_raw` does the coercion.
#[derive(Debug, Default, Deserialize)]
pub struct RawOffer {
    pub id: Option<Value>,
    pub building_name: Option<Value>,
    pub location: Option<Value>,
    pub city: Option<Value>,
    pub rooms_bathrooms: Option<Value>,

    pub monthly_rent_min: Option<Value>,
    pub monthly_rent_max: Option<Value>,
    pub monthly_savings: Option<Value>,

    pub discount_type: Option<Value>,
    pub photo_url: Option<Value>,
    pub offer_url: Option<Value>,

    pub is_active: Option<Value>,
}
