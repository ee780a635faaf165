pub mod badge;
pub mod currency;
pub mod locale;
pub mod record;
pub mod surface;

pub use badge::BadgeMap;
pub use currency::format_usd;
pub use locale::Locale;
pub use record::{to_display_record, to_display_records, DisplayRecord, OfferCard};
pub use surface::PresentationSurface;
