// templates/pages/intro.rs

use crate::templates::components::page_title;
use maud::{html, Markup};

const TOOLS: [(&str, &str); 4] = [
    ("Rust", "Data loading, filtering and aggregation of the listing extracts."),
    ("csv + serde", "Reading the pre-computed CSV extracts into typed tables."),
    ("maud", "Server-rendered pages and SVG charts."),
    ("Leaflet", "Interactive marker and heat maps."),
];

pub fn intro_page() -> Markup {
    html! {
        (page_title("Airbnb Analysis"))

        div style="text-align: center; margin: 1.5rem 0;" {
            img src="/static/Airbnb.jpg" alt="Airbnb" width="350";
        }

        div style="text-align: left;" {
            h3 { "Tools Used" }
            ul style="font-size: 16px;" {
                @for (tool, purpose) in TOOLS {
                    li { b { (tool) } ": " (purpose) }
                }
            }
        }

        p { "Pick a view from the sidebar to explore the listings." }

        div class="credits" style="text-align: right;" {
            p style="font-size: 16px; margin-bottom: 0;" { "Submitted by" }
            p style="font-size: 18px;" { b { "N. Senthamizh Priya" } }
        }
    }
}
