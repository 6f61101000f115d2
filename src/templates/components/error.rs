use crate::errors::ServerError;
use maud::{html, Markup};

/// Shown in place of a page whose pipeline failed. The sidebar stays usable.
pub fn error_card(err: &ServerError) -> Markup {
    let heading = match err {
        ServerError::DataSource(_) => "This page's data could not be loaded",
        ServerError::BadRequest(_) => "Invalid filter value",
        _ => "This page could not be rendered",
    };

    html! {
        section class="card error" style="border-left: 4px solid #dc2626;" {
            h3 { (heading) }
            p { code { (err.to_string()) } }
            p { a href="/" { "Reset filters" } }
        }
    }
}
