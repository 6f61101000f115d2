// src/pipeline/correlation.rs
use crate::data::Table;
use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major, `labels.len()` squared. `None` where the coefficient is
    /// undefined (constant column or fewer than two paired values).
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

/// Pearson correlation for every pair of `columns`, using the rows where both
/// values are present.
pub fn correlate(table: &Table, columns: &[&str]) -> Result<CorrelationMatrix, ServerError> {
    let idx = columns
        .iter()
        .map(|c| table.column(c))
        .collect::<Result<Vec<_>, _>>()?;

    let values = idx
        .iter()
        .map(|&a| {
            idx.iter()
                .map(|&b| {
                    let pairs: Vec<(f64, f64)> = table
                        .rows()
                        .iter()
                        .filter_map(|row| Some((row[a].as_number()?, row[b].as_number()?)))
                        .collect();
                    pearson(&pairs)
                })
                .collect()
        })
        .collect();

    Ok(CorrelationMatrix {
        labels: columns.iter().map(|c| c.to_string()).collect(),
        values,
    })
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let (mx, my) = pairs
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let (mx, my) = (mx / n, my / n);

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}
