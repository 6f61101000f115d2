use maud::{html, Markup};

pub mod error;
pub mod widgets;

pub use error::error_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

pub fn page_title(text: &str) -> Markup {
    html! {
        h1 style="text-align: center; color: #ffffff;" { (text) }
    }
}

pub fn accent_rule() -> Markup {
    html! { hr class="accent"; }
}
