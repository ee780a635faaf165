use crate::display::Locale;
use maud::{html, Markup, DOCTYPE};

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, locale: Locale, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale.html_lang()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                script src=(HTMX_JS) defer {};
            }
            body class="bg-light" {
                header class="navbar navbar-dark bg-dark mb-4" {
                    div class="container" {
                        a class="navbar-brand" href="/" { (title) }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
