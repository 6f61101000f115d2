// src/data/loader.rs
use crate::data::data_error::DataSourceError;
use crate::data::schema::{ColumnKind, SourceSchema};
use crate::data::table::{Cell, Table};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read `schema.file` from `data_dir` and validate it against the schema.
/// Extracts are small and static, so every render reads them again.
pub fn load(data_dir: &Path, schema: &SourceSchema) -> Result<Table, DataSourceError> {
    let path = data_dir.join(schema.file);
    let file = File::open(&path).map_err(|source| DataSourceError::Unreadable {
        path: path.clone(),
        source,
    })?;
    let table = read_table(schema, file)?;
    debug!(file = schema.file, rows = table.len(), "loaded extract");
    Ok(table)
}

pub fn read_table<R: Read>(schema: &SourceSchema, reader: R) -> Result<Table, DataSourceError> {
    let csv_err = |source| DataSourceError::Csv {
        file: schema.file.to_string(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    for expected in schema.columns {
        if !headers.iter().any(|h| h == expected.name) {
            return Err(DataSourceError::MissingColumn {
                file: schema.file.to_string(),
                column: expected.name.to_string(),
            });
        }
    }

    let kinds: Vec<ColumnKind> = headers
        .iter()
        .map(|h| schema.kind_of(h).unwrap_or(ColumnKind::Text))
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row = record
            .iter()
            .zip(&kinds)
            .zip(&headers)
            .map(|((raw, kind), column)| {
                parse_cell(raw, *kind).ok_or_else(|| DataSourceError::Malformed {
                    file: schema.file.to_string(),
                    line,
                    column: column.clone(),
                    value: raw.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    Ok(Table::new(schema.file, headers, rows))
}

fn parse_cell(raw: &str, kind: ColumnKind) -> Option<Cell> {
    if raw.is_empty() {
        return Some(Cell::Empty);
    }

    match kind {
        ColumnKind::Text => Some(Cell::Text(raw.to_string())),
        _ if is_missing(raw) => Some(Cell::Empty),
        ColumnKind::Number => raw.parse::<f64>().ok().map(Cell::Number),
        ColumnKind::Flag => match raw.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "1" | "1.0" => Some(Cell::Flag(true)),
            "false" | "f" | "no" | "0" | "0.0" => Some(Cell::Flag(false)),
            _ => None,
        },
    }
}

/// Markers the extracts use for a missing value (the usual dataframe NA set).
const MISSING_MARKERS: [&str; 17] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "None", "n/a", "null", "NaN",
];

fn is_missing(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("nan") || MISSING_MARKERS.iter().any(|m| *m == raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::{SUPERHOST_DATA, PRICE_DATA};

    #[test]
    fn parses_typed_cells() {
        let csv = "Country,Super host,Host Listings count,Review count,Rating\n\
                   Spain,True,3,10,4.5\n\
                   Spain,,1,0,\n";
        let table = read_table(&SUPERHOST_DATA, csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][1], Cell::Flag(true));
        assert_eq!(table.rows()[0][4], Cell::Number(4.5));
        assert_eq!(table.rows()[1][1], Cell::Empty);
        assert_eq!(table.rows()[1][4], Cell::Empty);
    }

    #[test]
    fn missing_schema_column_is_reported() {
        let csv = "Country,City,Suburb,Room type,Price\nSpain,Madrid,Sol,Private room,40\n";
        let err = read_table(&PRICE_DATA, csv.as_bytes()).unwrap_err();

        match err {
            DataSourceError::MissingColumn { column, .. } => assert_eq!(column, "Property type"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_price_is_malformed() {
        let csv = "Country,City,Suburb,Room type,Property type,Price\n\
                   Spain,Madrid,Sol,Private room,Apartment,cheap\n";
        let err = read_table(&PRICE_DATA, csv.as_bytes()).unwrap_err();

        match err {
            DataSourceError::Malformed {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, "Price");
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_columns_are_kept_as_text() {
        let csv = ",Country,City,Suburb,Room type,Property type,Price\n\
                   0,Spain,Madrid,Sol,Private room,Apartment,40\n";
        let table = read_table(&PRICE_DATA, csv.as_bytes()).unwrap();

        assert_eq!(table.headers()[0], "");
        assert_eq!(table.rows()[0][0], Cell::Text("0".into()));
    }

    #[test]
    fn missing_markers_read_as_blank() {
        for marker in ["NA", "N/A", "null", "NULL", "#N/A", "None", "<NA>", "NaN", "nan", "-nan"] {
            let csv = format!(
                "Country,Super host,Host Listings count,Review count,Rating\n\
                 Spain,{marker},2,{marker},4.5\n"
            );
            let table = read_table(&SUPERHOST_DATA, csv.as_bytes())
                .unwrap_or_else(|e| panic!("{marker}: {e}"));

            assert_eq!(table.rows()[0][1], Cell::Empty, "flag {marker}");
            assert_eq!(table.rows()[0][3], Cell::Empty, "number {marker}");
            assert_eq!(table.rows()[0][4], Cell::Number(4.5));
        }
    }

    #[test]
    fn missing_price_is_left_out_of_the_mean() {
        let csv = "Country,City,Suburb,Room type,Property type,Price\n\
                   Spain,Madrid,Sol,Private room,Apartment,40\n\
                   Spain,Madrid,Sol,Private room,Apartment,NA\n\
                   Spain,Madrid,Sol,Private room,Apartment,60\n";
        let table = read_table(&PRICE_DATA, csv.as_bytes()).unwrap();
        let means = crate::pipeline::mean_by(&table, "Country", "Price").unwrap();
        assert_eq!(means.value("Spain", 0), Some(50.0));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path(), &PRICE_DATA).unwrap_err();
        assert!(matches!(err, DataSourceError::Unreadable { .. }));
    }
}
