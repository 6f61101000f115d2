// src/data/schema.rs

/// How the cells of a column are parsed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    /// Boolean that may be blank (e.g. superhost status).
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text,
    }
}

const fn number(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Number,
    }
}

const fn flag(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Flag,
    }
}

/// A CSV extract and the columns every page expects to find in it.
/// Columns outside the list are kept as text.
#[derive(Debug)]
pub struct SourceSchema {
    pub file: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl SourceSchema {
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .map(|c| c.kind)
    }
}

pub mod columns {
    pub const COUNTRY: &str = "Country";
    pub const CITY: &str = "City";
    pub const SUBURB: &str = "Suburb";
    pub const ROOM_TYPE: &str = "Room type";
    pub const PROPERTY_TYPE: &str = "Property type";
    pub const PRICE: &str = "Price";
    pub const RATING: &str = "Rating";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const SUPERHOST: &str = "Super host";
    pub const HOST_LISTINGS: &str = "Host Listings count";
    pub const REVIEW_COUNT: &str = "Review count";
    pub const MIN_NIGHTS: &str = "Minimum nights";
    pub const MAX_NIGHTS: &str = "Maximum nights";
    pub const BEDROOMS: &str = "Bedroom count";
    pub const BATHROOMS: &str = "Bathroom count";
    pub const CLEANLINESS: &str = "Cleanliness score";
    pub const COMMUNICATION: &str = "Communication score";
    pub const LOCATION_SCORE: &str = "Location score";
    pub const PRICE_VALUE: &str = "Pricevalue score";
    pub const AVAILABILITY_30: &str = "Availability 30";
    pub const AVAILABILITY_60: &str = "Availability 60";
    pub const AVAILABILITY_90: &str = "Availability 90";
    pub const AVAILABILITY_365: &str = "Availability 365";
}

use columns::*;

pub const GEOSPATIAL: SourceSchema = SourceSchema {
    file: "Geospatial_data.csv",
    columns: &[
        text(COUNTRY),
        text(CITY),
        text(SUBURB),
        text(ROOM_TYPE),
        number(PRICE),
        number(RATING),
        number(LATITUDE),
        number(LONGITUDE),
    ],
};

pub const PRICE_DATA: SourceSchema = SourceSchema {
    file: "Price_data.csv",
    columns: &[
        text(COUNTRY),
        text(CITY),
        text(SUBURB),
        text(ROOM_TYPE),
        text(PROPERTY_TYPE),
        number(PRICE),
    ],
};

pub const CORRELATION: SourceSchema = SourceSchema {
    file: "Corelation_data.csv",
    columns: &[
        number(PRICE),
        number(RATING),
        number(MIN_NIGHTS),
        number(MAX_NIGHTS),
        number(BEDROOMS),
        number(BATHROOMS),
        number(REVIEW_COUNT),
        number(CLEANLINESS),
        number(COMMUNICATION),
        number(LOCATION_SCORE),
        number(PRICE_VALUE),
        flag(SUPERHOST),
    ],
};

pub const SUPERHOST_DATA: SourceSchema = SourceSchema {
    file: "Superhost_data.csv",
    columns: &[
        text(COUNTRY),
        flag(SUPERHOST),
        number(HOST_LISTINGS),
        number(REVIEW_COUNT),
        number(RATING),
    ],
};

pub const AVAILABILITY_DATA: SourceSchema = SourceSchema {
    file: "Availability_data.csv",
    columns: &[
        text(COUNTRY),
        text(ROOM_TYPE),
        number(AVAILABILITY_30),
        number(AVAILABILITY_60),
        number(AVAILABILITY_90),
        number(AVAILABILITY_365),
    ],
};
