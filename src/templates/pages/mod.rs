pub mod home;

pub use home::offers_page;
