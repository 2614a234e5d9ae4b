use super::{CellValue, Row};
use std::collections::HashMap;

/// Cell contents read as missing values.
const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];
const TRUE_VALUES: [&str; 3] = ["True", "TRUE", "true"];
const FALSE_VALUES: [&str; 3] = ["False", "FALSE", "false"];

#[derive(Debug, thiserror::Error)]
pub enum TabularError {
    #[error("No columns to parse from file")]
    NoColumns,
    #[error("Error tokenizing data. Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("unable to read tabular content: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
    Empty,
}

pub(super) fn parse(content: &[u8]) -> Result<(Vec<String>, Vec<Row>), TabularError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let columns = unique_column_names(reader.headers()?.iter());
    if columns.is_empty() {
        return Err(TabularError::NoColumns);
    }

    let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > columns.len() {
            return Err(TabularError::TooManyFields {
                line: record.position().map_or(0, |p| p.line()),
                expected: columns.len(),
                found: record.len(),
            });
        }

        let mut cells: Vec<Option<String>> = record
            .iter()
            .map(|cell| (!NA_VALUES.contains(&cell)).then(|| cell.to_owned()))
            .collect();
        cells.resize(columns.len(), None);
        raw_rows.push(cells);
    }

    let kinds: Vec<ColumnKind> = (0..columns.len())
        .map(|index| infer_kind(raw_rows.iter().map(|cells| cells[index].as_deref())))
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|cells| {
            Row::new(
                columns
                    .iter()
                    .zip(&kinds)
                    .zip(cells)
                    .map(|((name, kind), cell)| (name.clone(), to_cell_value(*kind, cell)))
                    .collect(),
            )
        })
        .collect();

    Ok((columns, rows))
}

/// Blank header names become `Unnamed: <position>` and repeated ones get a `.N`
/// suffix, so every column keeps its own non-empty key.
fn unique_column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    headers
        .enumerate()
        .map(|(index, header)| {
            let header = if header.trim().is_empty() {
                format!("Unnamed: {index}")
            } else {
                header.to_owned()
            };
            let count = seen.entry(header.clone()).or_insert(0);
            let name = if *count == 0 {
                header
            } else {
                format!("{header}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    if TRUE_VALUES.contains(&value) {
        Some(true)
    } else if FALSE_VALUES.contains(&value) {
        Some(false)
    } else {
        None
    }
}

fn infer_kind<'a>(cells: impl Iterator<Item = Option<&'a str>>) -> ColumnKind {
    let mut present = false;
    let mut missing = false;
    let mut all_integers = true;
    let mut all_floats = true;
    let mut all_bools = true;

    for cell in cells {
        match cell {
            None => missing = true,
            Some(raw) => {
                present = true;
                let trimmed = raw.trim();
                all_integers &= trimmed.parse::<i64>().is_ok();
                // Non-finite numbers cannot be stored as table numbers.
                all_floats &= trimmed.parse::<f64>().map_or(false, f64::is_finite);
                all_bools &= parse_bool(trimmed).is_some();
            }
        }
    }

    match (present, missing) {
        (false, _) => ColumnKind::Empty,
        _ if all_integers && !missing => ColumnKind::Integer,
        _ if all_floats => ColumnKind::Float,
        _ if all_bools => ColumnKind::Bool,
        _ => ColumnKind::Text,
    }
}

fn to_cell_value(kind: ColumnKind, cell: Option<String>) -> CellValue {
    let raw = match cell {
        Some(raw) => raw,
        None => return CellValue::Null,
    };

    let trimmed = raw.trim();
    let parsed = match kind {
        ColumnKind::Integer => trimmed.parse().ok().map(CellValue::Integer),
        ColumnKind::Float => trimmed.parse().ok().map(CellValue::Float),
        ColumnKind::Bool => parse_bool(trimmed).map(CellValue::Bool),
        ColumnKind::Empty => Some(CellValue::Null),
        ColumnKind::Text => None,
    };

    parsed.unwrap_or(CellValue::Text(raw))
}
