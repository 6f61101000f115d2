// src/views/mod.rs
//
// Each dashboard page is a `View`: one CSV extract, widget derivation,
// computation and rendering. `run` drives those stages in order, from a fresh
// load, on every request.

use crate::config::DashboardConfig;
use crate::data::{self, SourceSchema, Table};
use crate::errors::ServerError;
use crate::params::Params;
use crate::session::PageId;
use crate::templates::pages::intro_page;
use maud::Markup;
use tracing::debug;

pub mod availability;
pub mod correlation;
pub mod geospatial;
pub mod location;
pub mod price;
pub mod superhost;

pub use availability::AvailabilityView;
pub use correlation::CorrelationView;
pub use geospatial::GeospatialView;
pub use location::LocationView;
pub use price::PriceView;
pub use superhost::SuperhostView;

pub trait View {
    const SOURCE: &'static SourceSchema;

    /// Current widget values, validated against the loaded table.
    type Widgets;
    /// Filtered and aggregated tables ready for the renderer.
    type Output;

    fn derive_widgets(table: &Table, params: &Params) -> Result<Self::Widgets, ServerError>;

    fn compute(table: &Table, widgets: &Self::Widgets) -> Result<Self::Output, ServerError>;

    fn render(widgets: &Self::Widgets, output: &Self::Output, config: &DashboardConfig) -> Markup;
}

/// Everything up to the renderer: widget state and computed tables.
pub fn evaluate<V: View>(
    config: &DashboardConfig,
    params: &Params,
) -> Result<(V::Widgets, V::Output), ServerError> {
    let table = data::load(&config.data_dir, V::SOURCE)?;
    let widgets = V::derive_widgets(&table, params)?;
    let output = V::compute(&table, &widgets)?;
    debug!(source = V::SOURCE.file, "pipeline computed");
    Ok((widgets, output))
}

pub fn run<V: View>(config: &DashboardConfig, params: &Params) -> Result<Markup, ServerError> {
    let (widgets, output) = evaluate::<V>(config, params)?;
    Ok(V::render(&widgets, &output, config))
}

/// Render the one page the session points at.
pub fn dispatch(
    page: PageId,
    config: &DashboardConfig,
    params: &Params,
) -> Result<Markup, ServerError> {
    match page {
        PageId::Introduction => Ok(intro_page()),
        PageId::Geospatial => run::<GeospatialView>(config, params),
        PageId::Price => run::<PriceView>(config, params),
        PageId::Location => run::<LocationView>(config, params),
        PageId::Correlation => run::<CorrelationView>(config, params),
        PageId::Superhost => run::<SuperhostView>(config, params),
        PageId::Availability => run::<AvailabilityView>(config, params),
    }
}
