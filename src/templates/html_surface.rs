use crate::display::{DisplayRecord, Locale, PresentationSurface};
use crate::templates::components::{empty_state, load_error, offer_card};
use maud::{html, Markup};

/// Renders into maud markup. Each render replaces what was there before.
pub struct HtmlSurface {
    locale: Locale,
    markup: Option<Markup>,
}

impl HtmlSurface {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            markup: None,
        }
    }

    /// The last rendered markup, or nothing if render was never called.
    pub fn into_markup(self) -> Markup {
        self.markup.unwrap_or_else(|| html! {})
    }
}

impl PresentationSurface for HtmlSurface {
    fn render_list(&mut self, records: &[DisplayRecord]) {
        let locale = self.locale;
        self.markup = Some(html! {
            @for record in records {
                @match record {
                    DisplayRecord::Offer(card) => { (offer_card(card, locale)) }
                    DisplayRecord::NoResults { message } => { (empty_state(message)) }
                }
            }
        });
    }

    fn render_empty_state(&mut self, message: &str) {
        self.markup = Some(empty_state(message));
    }

    fn render_error(&mut self, message: &str) {
        self.markup = Some(load_error(message));
    }
}
