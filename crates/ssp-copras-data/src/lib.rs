use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ssp_copras_core::{CoprasError, CriterionType, DecisionMatrix};
use thiserror::Error;

pub mod report;

pub use report::*;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Copras(#[from] CoprasError),
}

/// Alternatives scored on criteria, together with each criterion's type.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub index_name: String,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub matrix: DecisionMatrix,
    pub types: Vec<CriterionType>,
}

/// JSON layout of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    #[serde(default = "default_index_name")]
    pub index_name: String,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub types: Vec<f64>,
    pub matrix: Vec<Vec<f64>>,
}

fn default_index_name() -> String {
    "Alternative".to_string()
}

impl TryFrom<DatasetFile> for Dataset {
    type Error = DataError;

    fn try_from(file: DatasetFile) -> Result<Self, Self::Error> {
        let matrix = DecisionMatrix::from_rows(file.matrix)?;
        let types = file
            .types
            .into_iter()
            .map(CriterionType::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            file.index_name,
            file.alternatives,
            file.criteria,
            matrix,
            types,
        )
    }
}

impl Dataset {
    pub fn new(
        index_name: String,
        alternatives: Vec<String>,
        criteria: Vec<String>,
        matrix: DecisionMatrix,
        types: Vec<CriterionType>,
    ) -> Result<Self, DataError> {
        if alternatives.len() != matrix.rows() {
            return Err(DataError::InvalidInput(format!(
                "{} alternative names for {} matrix rows",
                alternatives.len(),
                matrix.rows()
            )));
        }
        if criteria.len() != matrix.cols() {
            return Err(DataError::InvalidInput(format!(
                "{} criterion names for {} matrix columns",
                criteria.len(),
                matrix.cols()
            )));
        }
        if types.len() != matrix.cols() {
            return Err(DataError::InvalidInput(format!(
                "{} criterion types for {} matrix columns",
                types.len(),
                matrix.cols()
            )));
        }
        Ok(Self {
            index_name,
            alternatives,
            criteria,
            matrix,
            types,
        })
    }

    pub fn to_file(&self) -> DatasetFile {
        DatasetFile {
            index_name: self.index_name.clone(),
            alternatives: self.alternatives.clone(),
            criteria: self.criteria.clone(),
            types: self.types.iter().map(|t| t.sign()).collect(),
            matrix: self.matrix.rows_iter().map(<[f64]>::to_vec).collect(),
        }
    }
}

/// Loads a dataset, choosing the format from the file extension (`.json`, otherwise CSV).
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json(&text)
    } else {
        parse_csv(&text)
    }
}

pub fn parse_json(text: &str) -> Result<Dataset, DataError> {
    let file: DatasetFile = serde_json::from_str(text)?;
    Dataset::try_from(file)
}

/// Parses the tabular layout: a header row (`index,C1,..,Cn`), one row per
/// alternative, and a final row holding the criterion types (`1` / `-1`).
///
/// Fields are split on commas and trimmed; quoting is not supported.
pub fn parse_csv(text: &str) -> Result<Dataset, DataError> {
    let mut records = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, raw)| (line, raw.split(',').map(str::trim).collect::<Vec<_>>()));

    let (header_line, header) = records.next().ok_or(DataError::Parse {
        line: 1,
        message: "missing header row".to_string(),
    })?;
    let Some((index_name, criteria)) = header.split_first() else {
        return Err(parse_error(header_line, "empty header row"));
    };
    if criteria.is_empty() {
        return Err(parse_error(header_line, "header names no criteria"));
    }
    let n = criteria.len();

    let mut body = Vec::new();
    for (line, fields) in records {
        let Some((name, values)) = fields.split_first() else {
            continue;
        };
        if values.len() != n {
            return Err(parse_error(
                line,
                &format!("expected {n} values, found {}", values.len()),
            ));
        }
        let values = values
            .iter()
            .map(|v| {
                v.parse::<f64>()
                    .map_err(|e| parse_error(line, &format!("invalid number {v:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        body.push((line, (*name).to_string(), values));
    }

    let Some((types_line, _, type_values)) = body.pop() else {
        return Err(parse_error(header_line, "missing criterion type row"));
    };
    if body.is_empty() {
        return Err(parse_error(types_line, "no alternatives before the type row"));
    }
    let types = type_values
        .into_iter()
        .map(|v| CriterionType::try_from(v).map_err(|e| parse_error(types_line, &e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    let (alternatives, rows): (Vec<String>, Vec<Vec<f64>>) =
        body.into_iter().map(|(_, name, values)| (name, values)).unzip();

    Dataset::new(
        (*index_name).to_string(),
        alternatives,
        criteria.iter().map(|c| (*c).to_string()).collect(),
        DecisionMatrix::from_rows(rows)?,
        types,
    )
}

fn parse_error(line: usize, message: &str) -> DataError {
    DataError::Parse {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Country,C1,C2,C3\n\
                          A1,10,0.5,3\n\
                          \n\
                          A2,20,0.25,4\n\
                          A3,15,0.75,1\n\
                          Type,1,-1,1\n";

    #[test]
    fn parses_header_rows_and_type_row() {
        let ds = parse_csv(SAMPLE).unwrap();
        assert_eq!(ds.index_name, "Country");
        assert_eq!(ds.alternatives, vec!["A1", "A2", "A3"]);
        assert_eq!(ds.criteria, vec!["C1", "C2", "C3"]);
        assert_eq!(ds.matrix.rows(), 3);
        assert_eq!(ds.matrix.get(1, 1), Some(0.25));
        assert_eq!(
            ds.types,
            vec![
                CriterionType::Profit,
                CriterionType::Cost,
                CriterionType::Profit
            ]
        );
    }

    #[test]
    fn reports_line_of_bad_field() {
        let text = "Country,C1,C2\nA1,1,2\nA2,x,3\nType,1,-1\n";
        match parse_csv(text) {
            Err(DataError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_short_rows_and_bad_types() {
        assert!(parse_csv("Country,C1,C2\nA1,1\nType,1,-1\n").is_err());
        match parse_csv("Country,C1,C2\nA1,1,2\nType,1,0\n") {
            Err(DataError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(parse_csv("Country,C1,C2\nType,1,-1\n").is_err());
        assert!(parse_csv("").is_err());
    }

    #[test]
    fn json_round_trips_through_dataset_file() {
        let ds = parse_csv(SAMPLE).unwrap();
        let json = serde_json::to_string(&ds.to_file()).unwrap();
        assert_eq!(parse_json(&json).unwrap(), ds);
    }

    #[test]
    fn json_name_counts_must_match_matrix() {
        let json = r#"{"alternatives":["A1"],"criteria":["C1","C2"],"types":[1,-1],
                      "matrix":[[1,2],[3,4]]}"#;
        assert!(matches!(parse_json(json), Err(DataError::InvalidInput(_))));
    }

    #[test]
    fn load_dataset_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("data.csv");
        fs::write(&csv_path, SAMPLE).unwrap();
        let ds = load_dataset(&csv_path).unwrap();

        let json_path = dir.path().join("data.json");
        fs::write(&json_path, serde_json::to_vec_pretty(&ds.to_file()).unwrap()).unwrap();
        assert_eq!(load_dataset(&json_path).unwrap(), ds);
    }
}
