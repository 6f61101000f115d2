// src/views/correlation.rs
use crate::config::DashboardConfig;
use crate::data::schema::columns::*;
use crate::data::schema::{SourceSchema, CORRELATION};
use crate::data::Table;
use crate::errors::ServerError;
use crate::params::Params;
use crate::pipeline::{correlate, CorrelationMatrix};
use crate::render::heatmap;
use crate::templates::components::{card, page_title};
use maud::{html, Markup};

use super::View;

/// (title, columns) for each heatmap, in page order.
pub const PANELS: [(&str, &[&str]); 3] = [
    (
        "Price and Rating vs Nights and Rooms count",
        &[PRICE, RATING, MIN_NIGHTS, MAX_NIGHTS, BEDROOMS, BATHROOMS],
    ),
    (
        "Price and Review scores",
        &[RATING, REVIEW_COUNT, CLEANLINESS, COMMUNICATION, LOCATION_SCORE, PRICE_VALUE],
    ),
    (
        "Price and Availability",
        &[PRICE, SUPERHOST, REVIEW_COUNT, RATING],
    ),
];

pub struct CorrelationView;

impl View for CorrelationView {
    const SOURCE: &'static SourceSchema = &CORRELATION;
    type Widgets = ();
    type Output = Vec<(&'static str, CorrelationMatrix)>;

    fn derive_widgets(_table: &Table, _params: &Params) -> Result<(), ServerError> {
        Ok(())
    }

    fn compute(table: &Table, _widgets: &()) -> Result<Self::Output, ServerError> {
        PANELS
            .iter()
            .map(|(title, columns)| Ok::<_, ServerError>((*title, correlate(table, columns)?)))
            .collect()
    }

    fn render(_widgets: &(), out: &Self::Output, _config: &DashboardConfig) -> Markup {
        html! {
            (page_title("Correlation Heatmaps"))
            @for (title, matrix) in out {
                (card(title, heatmap(title, matrix)))
            }
        }
    }
}
