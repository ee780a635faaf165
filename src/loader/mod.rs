mod loader;
mod loader_error;
pub mod models;

pub use loader::{load, source_from_location, FileSource, OfferSource};
pub use loader_error::LoadError;
