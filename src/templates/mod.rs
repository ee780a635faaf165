pub mod components;
pub mod html_surface;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use html_surface::HtmlSurface;
pub use layouts::desktop::desktop_layout;
