// src/views/price.rs
//
// Four independent panels over the price extract. Each panel has its own
// selector and computes its own mean, even where two panels group the same
// way.

use crate::config::DashboardConfig;
use crate::data::schema::columns::{COUNTRY, PRICE, PROPERTY_TYPE, ROOM_TYPE};
use crate::data::schema::{SourceSchema, PRICE_DATA};
use crate::data::Table;
use crate::errors::ServerError;
use crate::params::Params;
use crate::pipeline::{mean_by, AggregateResult, SingleSelect};
use crate::render::BarChart;
use crate::templates::components::widgets::{single_select, widget_form};
use crate::templates::components::{accent_rule, card, page_title};
use crate::views::View;
use maud::{html, Markup};

pub struct PriceView;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceWidgets {
    pub room_type: SingleSelect,
    pub room_country: SingleSelect,
    pub property_type: SingleSelect,
    pub property_country: SingleSelect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceOutput {
    /// Mean price per country for the selected room type.
    pub by_country_for_room: AggregateResult,
    /// Mean price per room type in the selected country.
    pub by_room_in_country: AggregateResult,
    pub by_country_for_property: AggregateResult,
    pub by_property_in_country: AggregateResult,
}

fn selected_rows(table: &Table, column: &str, selected: Option<&str>) -> Result<Table, ServerError> {
    let col = table.column(column)?;
    Ok(match selected {
        Some(value) => table.where_eq(col, value),
        None => table.filter(|_| false),
    })
}

/// Mean `Price` by `group` over the rows where `column` equals `selected`,
/// groups in ascending key order.
fn panel(
    table: &Table,
    column: &str,
    selected: Option<&str>,
    group: &str,
) -> Result<AggregateResult, ServerError> {
    mean_by(&selected_rows(table, column, selected)?, group, PRICE)
}

/// Like [`panel`], but bars keep the order in which their keys first appear
/// in the selected rows.
fn panel_in_row_order(
    table: &Table,
    column: &str,
    selected: Option<&str>,
    group: &str,
) -> Result<AggregateResult, ServerError> {
    let rows = selected_rows(table, column, selected)?;
    let order = rows.distinct(rows.column(group)?);
    Ok(mean_by(&rows, group, PRICE)?.ordered_by(&order))
}

impl View for PriceView {
    const SOURCE: &'static SourceSchema = &PRICE_DATA;
    type Widgets = PriceWidgets;
    type Output = PriceOutput;

    fn derive_widgets(table: &Table, params: &Params) -> Result<PriceWidgets, ServerError> {
        let countries = table.distinct(table.column(COUNTRY)?);
        Ok(PriceWidgets {
            room_type: SingleSelect::derive(
                "room_type",
                "Select Room type",
                table.distinct(table.column(ROOM_TYPE)?),
                params,
            ),
            room_country: SingleSelect::derive(
                "room_country",
                "Select country",
                countries.clone(),
                params,
            ),
            property_type: SingleSelect::derive(
                "property_type",
                "Select Property type",
                table.distinct(table.column(PROPERTY_TYPE)?),
                params,
            ),
            property_country: SingleSelect::derive(
                "property_country",
                "Select Country",
                countries,
                params,
            ),
        })
    }

    fn compute(table: &Table, w: &PriceWidgets) -> Result<PriceOutput, ServerError> {
        Ok(PriceOutput {
            by_country_for_room: panel(table, ROOM_TYPE, w.room_type.value(), COUNTRY)?,
            by_room_in_country: panel_in_row_order(table, COUNTRY, w.room_country.value(), ROOM_TYPE)?,
            by_country_for_property: panel(table, PROPERTY_TYPE, w.property_type.value(), COUNTRY)?,
            by_property_in_country: panel_in_row_order(
                table,
                COUNTRY,
                w.property_country.value(),
                PROPERTY_TYPE,
            )?,
        })
    }

    fn render(w: &PriceWidgets, out: &PriceOutput, _config: &DashboardConfig) -> Markup {
        let room = w.room_type.value().unwrap_or_default();
        let room_country = w.room_country.value().unwrap_or_default();
        let property = w.property_type.value().unwrap_or_default();
        let property_country = w.property_country.value().unwrap_or_default();

        html! {
            (page_title("Country-wise Price Trends: Room and Property Type Insights"))
            (accent_rule())

            (widget_form(html! {
                (single_select(&w.room_type, true))
                (single_select(&w.room_country, true))
                (single_select(&w.property_type, true))
                (single_select(&w.property_country, true))
            }))

            div class="grid-2" {
                (card(&format!("Prices of {room}"),
                    BarChart::new(format!("Prices of {room}"), &out.by_country_for_room)
                        .axes("Country", "Average Price")
                        .render()))
                (card("Room Type Prices",
                    BarChart::new(format!("Room Prices by Type in {room_country}"), &out.by_room_in_country)
                        .axes("Room Type", "Price")
                        .render()))
            }

            (accent_rule())

            div class="grid-2" {
                (card(&format!("Prices of {property}"),
                    BarChart::new(format!("Prices of {property}"), &out.by_country_for_property)
                        .axes("Country", "Average Price")
                        .render()))
                (card("Property Prices",
                    BarChart::new(format!("Property Prices by Type in {property_country}"), &out.by_property_in_country)
                        .axes("Property Type", "Price")
                        .render()))
            }
        }
    }
}
