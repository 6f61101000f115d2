// src/data/table.rs
use crate::errors::ServerError;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Flag(bool),
    Empty,
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell. Flags count as 1.0 / 0.0 so they can take
    /// part in correlations.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Cell::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Flag(b) => write!(f, "{b}"),
            Cell::Empty => Ok(()),
        }
    }
}

pub type Row = Vec<Cell>;

/// An in-memory CSV extract. Rows are immutable once loaded; filtering
/// produces a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    #[cfg(test)]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column. Asking for a column the extract does not
    /// carry is a bug in the page, not in the data.
    pub fn column(&self, name: &str) -> Result<usize, ServerError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                ServerError::Configuration(format!("{} has no column '{name}'", self.name))
            })
    }

    pub fn filter<F>(&self, keep: F) -> Table
    where
        F: Fn(&[Cell]) -> bool,
    {
        Table {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Rows whose text cell in `col` equals `value`.
    pub fn where_eq(&self, col: usize, value: &str) -> Table {
        self.filter(|row| row[col].as_text() == Some(value))
    }

    /// Distinct text values of a column in order of first appearance.
    pub fn distinct(&self, col: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter_map(|row| row[col].as_text())
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }

    pub fn numbers(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row[col].as_number())
    }

    /// Smallest and largest value of a numeric column, ignoring blanks.
    pub fn observed_range(&self, col: usize) -> Option<(f64, f64)> {
        self.numbers(col).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
