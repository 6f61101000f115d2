// src/views/geospatial.rs
use crate::config::DashboardConfig;
use crate::data::schema::columns::{
    CITY, COUNTRY, LATITUDE, LONGITUDE, PRICE, RATING, ROOM_TYPE, SUBURB,
};
use crate::data::schema::{SourceSchema, GEOSPATIAL};
use crate::data::Table;
use crate::errors::ServerError;
use crate::params::Params;
use crate::pipeline::{FilterCriteria, MultiSelect, NumberInput, NumericRange, RangeSlider};
use crate::render::{leaflet_assets, leaflet_map, MapLayer, MapPoint};
use crate::templates::components::widgets::{
    display_button, multi_select, number_input, range_slider, widget_form,
};
use crate::templates::components::{card, page_title};
use crate::views::View;
use maud::{html, Markup};

pub struct GeospatialView;

#[derive(Debug, Clone, PartialEq)]
pub struct GeospatialWidgets {
    pub countries: MultiSelect,
    pub room_types: MultiSelect,
    pub min_price: NumberInput,
    pub max_price: NumberInput,
    pub rating: RangeSlider,
    pub display: bool,
}

impl GeospatialWidgets {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            countries: self.countries.selected_set(),
            room_types: self.room_types.selected_set(),
            price: NumericRange::new(self.min_price.value, self.max_price.value),
            rating: self.rating.value,
        }
    }
}

/// A listing as read from the extract, before any coordinate fix-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPin {
    pub latitude: f64,
    pub longitude: f64,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeospatialOutput {
    pub listings: Table,
    pub pins: Vec<ListingPin>,
}

fn observed(table: &Table, column: &str) -> Result<NumericRange, ServerError> {
    let col = table.column(column)?;
    Ok(table
        .observed_range(col)
        .map(|(lo, hi)| NumericRange::covering(lo, hi))
        .unwrap_or(NumericRange::new(0.0, 0.0)))
}

fn rating_text(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}

impl View for GeospatialView {
    const SOURCE: &'static SourceSchema = &GEOSPATIAL;
    type Widgets = GeospatialWidgets;
    type Output = GeospatialOutput;

    fn derive_widgets(table: &Table, params: &Params) -> Result<GeospatialWidgets, ServerError> {
        let price = observed(table, PRICE)?;
        let rating = observed(table, RATING)?;

        Ok(GeospatialWidgets {
            countries: MultiSelect::derive(
                "country",
                "Select countries",
                table.distinct(table.column(COUNTRY)?),
                params,
            ),
            room_types: MultiSelect::derive(
                "room_type",
                "Select Room type",
                table.distinct(table.column(ROOM_TYPE)?),
                params,
            ),
            min_price: NumberInput::derive("min_price", "Minimum price", price, price.min, params)?,
            max_price: NumberInput::derive("max_price", "Maximum price", price, price.max, params)?,
            rating: RangeSlider::derive("rating", "Select rating range", rating, params)?,
            display: params.flag("display"),
        })
    }

    fn compute(table: &Table, widgets: &GeospatialWidgets) -> Result<GeospatialOutput, ServerError> {
        let listings = widgets.criteria().apply(table)?;

        let [country, city, suburb, price, rating, room_type, lat, lon] =
            [COUNTRY, CITY, SUBURB, PRICE, RATING, ROOM_TYPE, LATITUDE, LONGITUDE]
                .map(|c| listings.column(c));
        let (country, city, suburb, price, rating, room_type, lat, lon) = (
            country?, city?, suburb?, price?, rating?, room_type?, lat?, lon?,
        );

        let pins = listings
            .rows()
            .iter()
            .filter_map(|row| {
                let latitude = row[lat].as_number()?;
                let longitude = row[lon].as_number()?;
                let popup = html! {
                    b { "Country:" } " " (row[country].to_string()) br;
                    b { "City:" } " " (row[city].to_string()) br;
                    b { "Suburb:" } " " (row[suburb].to_string()) br;
                    b { "Price:" } " " (row[price].to_string()) br;
                    b { "Rating:" } " " (row[rating].as_number().map(rating_text).unwrap_or_default()) br;
                    b { "Room type:" } " " (row[room_type].to_string()) br;
                };
                Some(ListingPin {
                    latitude,
                    longitude,
                    popup: popup.into_string(),
                })
            })
            .collect();

        Ok(GeospatialOutput { listings, pins })
    }

    fn render(w: &GeospatialWidgets, out: &GeospatialOutput, config: &DashboardConfig) -> Markup {
        let geo = &config.geospatial;
        let points: Vec<MapPoint> = out
            .pins
            .iter()
            .map(|p| {
                let (lat, lon) = if geo.coordinates_swapped {
                    (p.longitude, p.latitude)
                } else {
                    (p.latitude, p.longitude)
                };
                MapPoint {
                    lat,
                    lon,
                    popup: p.popup.clone(),
                }
            })
            .collect();

        html! {
            (page_title("Geospatial Visualisation"))

            (widget_form(html! {
                (multi_select(&w.countries))
                (multi_select(&w.room_types))
                (number_input(&w.min_price))
                (number_input(&w.max_price))
                (range_slider(&w.rating))
                (display_button("Display Map"))
            }))

            @if w.display {
                p { (out.listings.len()) " listings match the current filters." }
                (leaflet_assets())
                (card("Map with Markers", leaflet_map("listing-markers", MapLayer::Markers, geo.zoom, &points)))
                (card("Listings Heatmap", leaflet_map("listing-heat", MapLayer::Heat, geo.zoom, &points)))
            }
        }
    }
}
