// src/pipeline/aggregate.rs
use crate::data::Table;
use crate::errors::ServerError;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure<'a> {
    /// Arithmetic mean of a numeric column, blanks ignored.
    Mean(&'a str),
    /// Number of rows in the group.
    Count,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateGroup {
    pub key: String,
    /// One value per series; `None` when the group has nothing to average.
    pub values: Vec<Option<f64>>,
}

/// A summary table keyed by one categorical column.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub series: Vec<String>,
    pub groups: Vec<AggregateGroup>,
}

impl AggregateResult {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn value(&self, key: &str, series: usize) -> Option<f64> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .and_then(|g| g.values.get(series).copied().flatten())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    pub fn max_value(&self) -> Option<f64> {
        self.groups
            .iter()
            .flat_map(|g| g.values.iter().flatten())
            .copied()
            .reduce(f64::max)
    }

    /// Reorder groups to follow `keys`; keys missing from `keys` go last.
    pub fn ordered_by(mut self, keys: &[String]) -> Self {
        self.groups
            .sort_by_key(|g| keys.iter().position(|k| *k == g.key).unwrap_or(keys.len()));
        self
    }

    /// Rank groups by their first series, largest first. Groups without a
    /// value go last; ties keep key order.
    pub fn sort_descending(mut self) -> Self {
        self.groups.sort_by(|a, b| {
            match (a.values.first().copied().flatten(), b.values.first().copied().flatten()) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Acc {
    sum: f64,
    n: usize,
    rows: usize,
}

impl Acc {
    fn finish(self, measure: Measure<'_>) -> Option<f64> {
        match measure {
            Measure::Count => Some(self.rows as f64),
            Measure::Mean(_) if self.n == 0 => None,
            Measure::Mean(_) => Some(self.sum / self.n as f64),
        }
    }
}

/// Group rows by `key` and compute each measure per group. Groups come back
/// in ascending key order; rows with a blank key are dropped.
pub fn aggregate(
    table: &Table,
    key: &str,
    measures: &[Measure<'_>],
) -> Result<AggregateResult, ServerError> {
    let key_col = table.column(key)?;
    let value_cols = measures
        .iter()
        .map(|m| match m {
            Measure::Mean(col) => table.column(col).map(Some),
            Measure::Count => Ok(None),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut groups: BTreeMap<&str, Vec<Acc>> = BTreeMap::new();
    for row in table.rows() {
        let Some(k) = row[key_col].as_text() else {
            continue;
        };
        let accs = groups
            .entry(k)
            .or_insert_with(|| vec![Acc::default(); measures.len()]);
        for (acc, col) in accs.iter_mut().zip(&value_cols) {
            acc.rows += 1;
            if let Some(v) = col.and_then(|c| row[c].as_number()) {
                acc.sum += v;
                acc.n += 1;
            }
        }
    }

    Ok(AggregateResult {
        series: measures.iter().map(|m| series_name(*m)).collect(),
        groups: groups
            .into_iter()
            .map(|(k, accs)| AggregateGroup {
                key: k.to_string(),
                values: accs
                    .into_iter()
                    .zip(measures)
                    .map(|(acc, m)| acc.finish(*m))
                    .collect(),
            })
            .collect(),
    })
}

pub fn mean_by(table: &Table, key: &str, value: &str) -> Result<AggregateResult, ServerError> {
    aggregate(table, key, &[Measure::Mean(value)])
}

/// Like [`aggregate`] with a single measure, but split into one series per
/// value of a flag column (`labels` = [when true, when false]). Rows with a
/// blank flag are left out.
pub fn split_by_flag(
    table: &Table,
    key: &str,
    flag: &str,
    labels: [&str; 2],
    measure: Measure<'_>,
) -> Result<AggregateResult, ServerError> {
    let flag_col = table.column(flag)?;
    let halves = [true, false].map(|wanted| {
        let part = table.filter(|row| row[flag_col].as_flag() == Some(wanted));
        aggregate(&part, key, &[measure])
    });
    let [yes, no] = halves;
    let (yes, no) = (yes?, no?);

    let mut keys: Vec<&str> = yes.keys();
    keys.extend(no.keys());
    keys.sort_unstable();
    keys.dedup();

    Ok(AggregateResult {
        series: labels.iter().map(|l| l.to_string()).collect(),
        groups: keys
            .into_iter()
            .map(|k| AggregateGroup {
                key: k.to_string(),
                values: vec![yes.value(k, 0), no.value(k, 0)],
            })
            .collect(),
    })
}

fn series_name(measure: Measure<'_>) -> String {
    match measure {
        Measure::Mean(col) => col.to_string(),
        Measure::Count => "Count".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Cell;

    fn listings() -> Table {
        let rows = [
            ("Spain", Some(true), Some(80.0)),
            ("Australia", Some(false), Some(120.0)),
            ("Spain", Some(false), Some(100.0)),
            ("Australia", Some(true), Some(180.0)),
            ("Brazil", None, None),
        ];
        Table::new(
            "t.csv",
            vec!["Country".into(), "Super host".into(), "Price".into()],
            rows.iter()
                .map(|(c, f, p)| {
                    vec![
                        Cell::Text(c.to_string()),
                        f.map(Cell::Flag).unwrap_or(Cell::Empty),
                        p.map(Cell::Number).unwrap_or(Cell::Empty),
                    ]
                })
                .collect(),
        )
    }

    #[test]
    fn group_mean_matches_arithmetic_mean() {
        let r = mean_by(&listings(), "Country", "Price").unwrap();
        assert_eq!(r.keys(), vec!["Australia", "Brazil", "Spain"]);
        assert_eq!(r.value("Australia", 0), Some(150.0));
        assert_eq!(r.value("Spain", 0), Some(90.0));
        assert_eq!(r.value("Brazil", 0), None);
    }

    #[test]
    fn ranking_is_non_increasing() {
        let r = mean_by(&listings(), "Country", "Price")
            .unwrap()
            .sort_descending();
        assert_eq!(r.keys(), vec!["Australia", "Spain", "Brazil"]);
        let values: Vec<f64> = r.groups.iter().filter_map(|g| g.values[0]).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn groups_can_follow_first_appearance() {
        let t = listings();
        let order = t.distinct(t.column("Country").unwrap());
        let r = mean_by(&t, "Country", "Price").unwrap().ordered_by(&order);
        assert_eq!(r.keys(), vec!["Spain", "Australia", "Brazil"]);
        assert_eq!(r.value("Spain", 0), Some(90.0));
    }

    #[test]
    fn count_includes_blank_values() {
        let r = aggregate(&listings(), "Country", &[Measure::Count]).unwrap();
        assert_eq!(r.value("Brazil", 0), Some(1.0));
        assert_eq!(r.value("Spain", 0), Some(2.0));
        assert_eq!(r.series, vec!["Count"]);
    }

    #[test]
    fn flag_split_skips_blank_flags() {
        let r = split_by_flag(
            &listings(),
            "Country",
            "Super host",
            ["Superhost", "Regular host"],
            Measure::Count,
        )
        .unwrap();
        assert_eq!(r.keys(), vec!["Australia", "Spain"]);
        assert_eq!(r.value("Spain", 0), Some(1.0));
        assert_eq!(r.value("Spain", 1), Some(1.0));
        assert_eq!(r.series, vec!["Superhost", "Regular host"]);
    }

    #[test]
    fn empty_table_gives_empty_result() {
        let t = listings().filter(|_| false);
        assert!(mean_by(&t, "Country", "Price").unwrap().is_empty());
    }
}
