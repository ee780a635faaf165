// templates/pages/home.rs

use crate::display::Locale;
use crate::templates::{
    components::{search_box, LIST_TARGET_ID},
    desktop_layout,
};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub fn offers_page(
    query: &str,
    list: Markup,
    loaded_at: Option<DateTime<Utc>>,
    locale: Locale,
) -> Markup {
    desktop_layout(
        "Rental Offers",
        locale,
        html! {
            (search_box(query, locale))

            div class="row" id=(LIST_TARGET_ID) {
                (list)
            }

            @if let Some(at) = loaded_at {
                footer class="text-muted small text-end mb-4" {
                    "Updated " (at.format("%Y-%m-%d %H:%M UTC"))
                }
            }
        },
    )
}
