// src/views/availability.rs
use crate::config::DashboardConfig;
use crate::data::schema::columns::{
    AVAILABILITY_30, AVAILABILITY_365, AVAILABILITY_60, AVAILABILITY_90, COUNTRY, ROOM_TYPE,
};
use crate::data::schema::{SourceSchema, AVAILABILITY_DATA};
use crate::data::Table;
use crate::errors::ServerError;
use crate::params::Params;
use crate::pipeline::{aggregate, mean_by, AggregateResult, Measure, SingleSelect};
use crate::render::BarChart;
use crate::templates::components::widgets::{single_select, widget_form};
use crate::templates::components::{card, page_title};
use crate::views::View;
use maud::{html, Markup};

const WINDOWS: [Measure<'static>; 4] = [
    Measure::Mean(AVAILABILITY_30),
    Measure::Mean(AVAILABILITY_60),
    Measure::Mean(AVAILABILITY_90),
    Measure::Mean(AVAILABILITY_365),
];

pub struct AvailabilityView;

#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityWidgets {
    pub country: SingleSelect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityOutput {
    /// Mean open days per window, one cluster per room type.
    pub windows_by_room: AggregateResult,
    /// Mean yearly availability per country, most available first.
    pub yearly_by_country: AggregateResult,
}

impl View for AvailabilityView {
    const SOURCE: &'static SourceSchema = &AVAILABILITY_DATA;
    type Widgets = AvailabilityWidgets;
    type Output = AvailabilityOutput;

    fn derive_widgets(table: &Table, params: &Params) -> Result<AvailabilityWidgets, ServerError> {
        Ok(AvailabilityWidgets {
            country: SingleSelect::derive(
                "country",
                "Select country",
                table.distinct(table.column(COUNTRY)?),
                params,
            ),
        })
    }

    fn compute(table: &Table, w: &AvailabilityWidgets) -> Result<AvailabilityOutput, ServerError> {
        let in_country = match w.country.value() {
            Some(c) => table.where_eq(table.column(COUNTRY)?, c),
            None => table.filter(|_| false),
        };
        Ok(AvailabilityOutput {
            windows_by_room: aggregate(&in_country, ROOM_TYPE, &WINDOWS)?,
            yearly_by_country: mean_by(table, COUNTRY, AVAILABILITY_365)?.sort_descending(),
        })
    }

    fn render(w: &AvailabilityWidgets, out: &AvailabilityOutput, _config: &DashboardConfig) -> Markup {
        let country = w.country.value().unwrap_or_default();

        html! {
            (page_title("Availability"))

            (widget_form(html! {
                (single_select(&w.country, true))
            }))

            (card(&format!("Availability windows in {country}"),
                BarChart::new(format!("Open days by Room type in {country}"), &out.windows_by_room)
                    .axes("Room Type", "Average available days")
                    .render()))

            (card("Yearly availability",
                BarChart::new("Average Availability 365 by Country", &out.yearly_by_country)
                    .axes("Average available days", "Country")
                    .horizontal()
                    .value_labels()
                    .render()))
        }
    }
}
