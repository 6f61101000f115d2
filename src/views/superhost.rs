// src/views/superhost.rs
use crate::config::DashboardConfig;
use crate::data::schema::columns::{COUNTRY, HOST_LISTINGS, RATING, REVIEW_COUNT, SUPERHOST};
use crate::data::schema::{SourceSchema, SUPERHOST_DATA};
use crate::data::Table;
use crate::errors::ServerError;
use crate::params::Params;
use crate::pipeline::{split_by_flag, AggregateResult, Measure, MultiSelect};
use crate::render::{BarChart, ScatterPlot, ScatterPoint};
use crate::templates::components::widgets::{multi_select, submit_button, widget_form};
use crate::templates::components::{card, page_title};
use crate::views::View;
use maud::{html, Markup};
use std::collections::BTreeSet;

pub const HOST_LABELS: [&str; 2] = ["Superhost", "Regular host"];

pub struct SuperhostView;

#[derive(Debug, Clone, PartialEq)]
pub struct SuperhostWidgets {
    pub countries: MultiSelect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuperhostOutput {
    pub listing_counts: AggregateResult,
    pub host_listings: AggregateResult,
    /// Review count against rating; `series` indexes [`HOST_LABELS`].
    pub reviews_vs_rating: Vec<ScatterPoint>,
}

impl View for SuperhostView {
    const SOURCE: &'static SourceSchema = &SUPERHOST_DATA;
    type Widgets = SuperhostWidgets;
    type Output = SuperhostOutput;

    fn derive_widgets(table: &Table, params: &Params) -> Result<SuperhostWidgets, ServerError> {
        Ok(SuperhostWidgets {
            countries: MultiSelect::derive(
                "country",
                "Select countries",
                table.distinct(table.column(COUNTRY)?),
                params,
            ),
        })
    }

    fn compute(table: &Table, w: &SuperhostWidgets) -> Result<SuperhostOutput, ServerError> {
        let selected: BTreeSet<String> = w.countries.selected_set();
        let country = table.column(COUNTRY)?;
        let rows = table.filter(|row| {
            selected.is_empty() || row[country].as_text().is_some_and(|c| selected.contains(c))
        });

        let flag = rows.column(SUPERHOST)?;
        let reviews = rows.column(REVIEW_COUNT)?;
        let rating = rows.column(RATING)?;
        let reviews_vs_rating = rows
            .rows()
            .iter()
            .filter_map(|row| {
                Some(ScatterPoint {
                    x: row[reviews].as_number()?,
                    y: row[rating].as_number()?,
                    series: if row[flag].as_flag()? { 0 } else { 1 },
                })
            })
            .collect();

        Ok(SuperhostOutput {
            listing_counts: split_by_flag(&rows, COUNTRY, SUPERHOST, HOST_LABELS, Measure::Count)?,
            host_listings: split_by_flag(
                &rows,
                COUNTRY,
                SUPERHOST,
                HOST_LABELS,
                Measure::Mean(HOST_LISTINGS),
            )?,
            reviews_vs_rating,
        })
    }

    fn render(w: &SuperhostWidgets, out: &SuperhostOutput, _config: &DashboardConfig) -> Markup {
        let series: Vec<String> = HOST_LABELS.iter().map(|s| s.to_string()).collect();

        html! {
            (page_title("Superhost Insights"))

            (widget_form(html! {
                (multi_select(&w.countries))
                (submit_button("Apply"))
            }))

            div class="grid-2" {
                (card("Listings by host status",
                    BarChart::new("Listings per Country", &out.listing_counts)
                        .axes("Country", "Listings")
                        .render()))
                (card("Host portfolio size",
                    BarChart::new("Average Host Listings count", &out.host_listings)
                        .axes("Country", "Average listings per host")
                        .render()))
            }

            (card("Reviews and ratings", ScatterPlot {
                title: "Review count vs Rating",
                x_label: "Review count",
                y_label: "Rating",
                series: &series,
                points: &out.reviews_vs_rating,
            }.render()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_table;

    const CSV: &str = "Country,Super host,Host Listings count,Review count,Rating\n\
        Spain,True,4,120,4.9\n\
        Spain,False,1,3,4.1\n\
        Spain,True,2,80,4.7\n\
        Brazil,False,10,15,4.3\n\
        Brazil,,1,0,\n";

    fn table() -> Table {
        read_table(&SUPERHOST_DATA, CSV.as_bytes()).unwrap()
    }

    #[test]
    fn splits_counts_and_means_by_host_status() {
        let t = table();
        let w = SuperhostView::derive_widgets(&t, &Params::default()).unwrap();
        let out = SuperhostView::compute(&t, &w).unwrap();

        assert_eq!(out.listing_counts.value("Spain", 0), Some(2.0));
        assert_eq!(out.listing_counts.value("Spain", 1), Some(1.0));
        assert_eq!(out.listing_counts.value("Brazil", 0), None);
        assert_eq!(out.host_listings.value("Spain", 0), Some(3.0));
        assert_eq!(out.host_listings.value("Brazil", 1), Some(10.0));
        assert_eq!(out.reviews_vs_rating.len(), 4);
    }

    #[test]
    fn country_selection_restricts_every_chart() {
        let t = table();
        let params = Params::from_query(Some("country=Brazil"));
        let w = SuperhostView::derive_widgets(&t, &params).unwrap();
        let out = SuperhostView::compute(&t, &w).unwrap();

        assert_eq!(out.listing_counts.keys(), vec!["Brazil"]);
        assert_eq!(out.reviews_vs_rating.len(), 1);
        assert_eq!(out.reviews_vs_rating[0].series, 1);
    }
}
