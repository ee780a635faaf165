use crate::display::{Locale, OfferCard};
use maud::{html, Markup};

pub const LIST_TARGET_ID: &str = "offersContainer";

/// Text box that swaps the list as the visitor types, 300ms after the last keystroke.
pub fn search_box(query: &str, locale: Locale) -> Markup {
    html! {
        form class="mb-4" method="get" action="/" role="search" {
            input
                type="search"
                class="form-control form-control-lg"
                name="q"
                value=(query)
                placeholder=(locale.search_placeholder())
                autocomplete="off"
                hx-get="/offers"
                hx-trigger="input changed delay:300ms, search"
                hx-target={ "#" (LIST_TARGET_ID) }
                hx-swap="innerHTML";
        }
    }
}

pub fn offer_card(card: &OfferCard, locale: Locale) -> Markup {
    html! {
        div class="col-lg-4 col-md-6 mb-4" {
            div class="card h-100 shadow-sm border-0" {
                img src=(card.photo_url) class="card-img-top" alt=(card.building_name) style="height: 200px; object-fit: cover;";
                div class="card-body d-flex flex-column" {
                    div class="d-flex justify-content-between align-items-start" {
                        h5 class="card-title" { (card.building_name) }
                        span class="badge bg-secondary" title=(card.city) { (card.badge) }
                    }
                    p class="card-text text-muted mb-1" { (card.location) }
                    p class="card-text rooms-bath" { (card.rooms_bathrooms) }
                    h6 class="price-range" { (card.rent_label) }
                    span class="badge bg-success mb-2" { (card.discount_type) }
                    @if let Some(savings) = &card.savings_label {
                        p class="savings-text" { (savings) }
                    }
                    div class="mt-auto" {
                        a href=(card.offer_url) target="_blank" rel="noopener" class="btn btn-primary w-100" { (locale.view_deal()) }
                    }
                }
            }
        }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        div class="col-12" {
            p class="text-center text-muted" { (message) }
        }
    }
}

pub fn load_error(message: &str) -> Markup {
    html! {
        div class="col-12" {
            div class="text-center" style="margin-top: 50px;" {
                p style="color: #555;" { (message) }
            }
        }
    }
}
