use crate::display::DisplayRecord;

/// Whatever draws the offers. The controller calls exactly one method per render.
pub trait PresentationSurface {
    fn render_list(&mut self, records: &[DisplayRecord]);

    fn render_empty_state(&mut self, message: &str);

    /// `message` is already localized and free of technical detail.
    fn render_error(&mut self, message: &str);
}
