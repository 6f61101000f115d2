// src/views/location.rs
use crate::config::DashboardConfig;
use crate::data::schema::columns::{CITY, COUNTRY, PRICE, SUBURB};
use crate::data::schema::{SourceSchema, PRICE_DATA};
use crate::data::Table;
use crate::errors::ServerError;
use crate::params::Params;
use crate::pipeline::{mean_by, AggregateResult, SingleSelect};
use crate::render::BarChart;
use crate::templates::components::widgets::{display_button, single_select, widget_form};
use crate::templates::components::{card, page_title};
use crate::views::View;
use maud::{html, Markup};

pub struct LocationView;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationWidgets {
    pub country: SingleSelect,
    /// Offers only the cities of the selected country.
    pub city: SingleSelect,
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationOutput {
    /// Mean price per suburb of the selected city, most expensive first.
    pub suburbs: AggregateResult,
}

/// Distinct cities among rows of `country`.
pub fn cities_of(table: &Table, country: &str) -> Result<Vec<String>, ServerError> {
    let in_country = table.where_eq(table.column(COUNTRY)?, country);
    Ok(in_country.distinct(in_country.column(CITY)?))
}

impl LocationWidgets {
    fn scope(&self) -> Option<(&str, &str)> {
        Some((self.country.value()?, self.city.value()?))
    }
}

impl View for LocationView {
    const SOURCE: &'static SourceSchema = &PRICE_DATA;
    type Widgets = LocationWidgets;
    type Output = LocationOutput;

    fn derive_widgets(table: &Table, params: &Params) -> Result<LocationWidgets, ServerError> {
        let country = SingleSelect::derive(
            "country",
            "Select your country",
            table.distinct(table.column(COUNTRY)?),
            params,
        );
        let cities = match country.value() {
            Some(c) => cities_of(table, c)?,
            None => Vec::new(),
        };
        let city = SingleSelect::derive("city", "Select your city", cities, params);

        Ok(LocationWidgets {
            country,
            city,
            display: params.flag("display"),
        })
    }

    fn compute(table: &Table, w: &LocationWidgets) -> Result<LocationOutput, ServerError> {
        let rows = match w.scope() {
            Some((country, city)) => table
                .where_eq(table.column(COUNTRY)?, country)
                .where_eq(table.column(CITY)?, city),
            None => table.filter(|_| false),
        };
        Ok(LocationOutput {
            suburbs: mean_by(&rows, SUBURB, PRICE)?.sort_descending(),
        })
    }

    fn render(w: &LocationWidgets, out: &LocationOutput, _config: &DashboardConfig) -> Markup {
        let (country, city) = w.scope().unwrap_or_default();

        html! {
            (page_title("Prices by suburbs"))

            (widget_form(html! {
                (single_select(&w.country, true))
                (single_select(&w.city, false))
                (display_button("Display the suburb prices"))
            }))

            @if w.display {
                (card("Suburb ranking",
                    BarChart::new(format!("Average Price of Suburbs in {city}({country})"), &out.suburbs)
                        .axes("Average Price", "Suburbs")
                        .horizontal()
                        .value_labels()
                        .render()))
            }
        }
    }
}
