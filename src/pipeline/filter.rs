// src/pipeline/filter.rs
use crate::data::schema::columns::{COUNTRY, PRICE, RATING, ROOM_TYPE};
use crate::data::{Cell, Table};
use crate::errors::ServerError;
use std::collections::BTreeSet;

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Whole-number bounds wide enough to hold every observed value.
    pub fn covering(lo: f64, hi: f64) -> Self {
        Self::new(lo.floor(), hi.ceil())
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Row predicates built from the current widget values.
/// An empty set means "no restriction" for that column.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub countries: BTreeSet<String>,
    pub room_types: BTreeSet<String>,
    pub price: NumericRange,
    pub rating: NumericRange,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            countries: BTreeSet::new(),
            room_types: BTreeSet::new(),
            price: NumericRange::unbounded(),
            rating: NumericRange::unbounded(),
        }
    }
}

impl FilterCriteria {
    pub fn apply(&self, table: &Table) -> Result<Table, ServerError> {
        let country = table.column(COUNTRY)?;
        let room_type = table.column(ROOM_TYPE)?;
        let price = table.column(PRICE)?;
        let rating = table.column(RATING)?;

        Ok(table.filter(|row| {
            admits(&self.countries, &row[country])
                && admits(&self.room_types, &row[room_type])
                && within(self.price, &row[price])
                && within(self.rating, &row[rating])
        }))
    }
}

fn admits(selected: &BTreeSet<String>, cell: &Cell) -> bool {
    selected.is_empty() || cell.as_text().is_some_and(|v| selected.contains(v))
}

// Blank numbers never satisfy a range.
fn within(range: NumericRange, cell: &Cell) -> bool {
    cell.as_number().is_some_and(|v| range.contains(v))
}
