use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ssp_copras_core::{Ranking, Weights};

use crate::DataError;

/// A labelled table written as CSV: one header row, then one row per label.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub index_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<(String, Vec<String>)>,
}

impl ResultTable {
    pub fn weights(criteria: &[String], weights: &Weights) -> Self {
        Self {
            index_name: String::new(),
            columns: criteria.to_vec(),
            rows: vec![(
                "Weights".to_string(),
                weights.as_slice().iter().map(f64::to_string).collect(),
            )],
        }
    }

    pub fn utility_and_rank(alternatives: &[String], utility: &[f64], rank: &Ranking) -> Self {
        Self {
            index_name: String::new(),
            columns: vec!["Utility".to_string(), "Rank".to_string()],
            rows: alternatives
                .iter()
                .zip(utility)
                .zip(rank.as_slice())
                .map(|((name, u), r)| (name.clone(), vec![u.to_string(), r.to_string()]))
                .collect(),
        }
    }

    /// One column per coefficient, `values[k][i]` being alternative `i` at coefficient `k`.
    pub fn per_coefficient<T: ToString>(
        alternatives: &[String],
        coefficients: &[f64],
        values: &[impl AsRef<[T]>],
    ) -> Self {
        let rows = alternatives
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let cells = values
                    .iter()
                    .map(|column| {
                        column
                            .as_ref()
                            .get(i)
                            .map(ToString::to_string)
                            .unwrap_or_default()
                    })
                    .collect();
                (name.clone(), cells)
            })
            .collect();
        Self {
            index_name: String::new(),
            columns: coefficients.iter().map(|s| format_coefficient(*s)).collect(),
            rows,
        }
    }

    pub fn compared(alternatives: &[String], full: &Ranking, reduced: &Ranking) -> Self {
        Self {
            index_name: String::new(),
            columns: vec![
                "Full compensation".to_string(),
                "Reduced compensation".to_string(),
            ],
            rows: alternatives
                .iter()
                .zip(full.as_slice().iter().zip(reduced.as_slice()))
                .map(|(name, (f, r))| (name.clone(), vec![f.to_string(), r.to_string()]))
                .collect(),
        }
    }

    pub fn to_csv_string(&self) -> String {
        let mut out = String::new();
        push_record(
            &mut out,
            std::iter::once(self.index_name.as_str())
                .chain(self.columns.iter().map(String::as_str)),
        );
        for (label, cells) in &self.rows {
            push_record(
                &mut out,
                std::iter::once(label.as_str()).chain(cells.iter().map(String::as_str)),
            );
        }
        out
    }

    pub fn write_to(&self, mut writer: impl Write) -> Result<(), DataError> {
        writer.write_all(self.to_csv_string().as_bytes())?;
        Ok(())
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), DataError> {
        let path = path.as_ref();
        ensure_parent(path)?;
        fs::write(path, self.to_csv_string())?;
        Ok(())
    }
}

/// Machine-readable summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub weighting: String,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub weights: Vec<f64>,
    pub utility: Vec<f64>,
    pub rank: Vec<usize>,
    pub coefficients: Vec<f64>,
    pub reduced_rank: Vec<usize>,
    pub rank_changes: Vec<String>,
}

pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), DataError> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Column label for a coefficient, rounded to six decimals.
pub fn format_coefficient(s: f64) -> String {
    ((s * 1e6).round() / 1e6).to_string()
}

fn ensure_parent(path: &Path) -> Result<(), DataError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let line = fields.map(escape_field).collect::<Vec<_>>().join(",");
    out.push_str(&line);
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssp_copras_core::rank_descending;

    fn names() -> Vec<String> {
        vec!["A1".to_string(), "A2".to_string()]
    }

    #[test]
    fn utility_table_layout() {
        let rank = rank_descending(&[0.5, 1.0]).unwrap();
        let table = ResultTable::utility_and_rank(&names(), &[0.5, 1.0], &rank);
        assert_eq!(table.to_csv_string(), ",Utility,Rank\nA1,0.5,2\nA2,1,1\n");
    }

    #[test]
    fn coefficient_columns_are_rounded() {
        let table = ResultTable::per_coefficient(
            &names(),
            &[0.0, 0.15000000000000002],
            &[vec![1, 2], vec![2, 1]],
        );
        assert_eq!(table.to_csv_string(), ",0,0.15\nA1,1,2\nA2,2,1\n");
    }

    #[test]
    fn weights_row_and_escaping() {
        let criteria = vec!["price, net".to_string(), "quality".to_string()];
        let w = Weights::new(vec![0.25, 0.75]).unwrap();
        let table = ResultTable::weights(&criteria, &w);
        assert_eq!(
            table.to_csv_string(),
            ",\"price, net\",quality\nWeights,0.25,0.75\n"
        );
    }

    #[test]
    fn compared_pairs_both_rankings() {
        let full = rank_descending(&[1.0, 0.5]).unwrap();
        let reduced = rank_descending(&[0.5, 1.0]).unwrap();
        let table = ResultTable::compared(&names(), &full, &reduced);
        assert_eq!(
            table.to_csv_string(),
            ",Full compensation,Reduced compensation\nA1,1,2\nA2,2,1\n"
        );
    }

    #[test]
    fn writes_files_creating_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("weights.csv");
        let w = Weights::new(vec![1.0]).unwrap();
        ResultTable::weights(&["C1".to_string()], &w)
            .write_csv(&path)
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ",C1\nWeights,1\n");

        let summary_path = dir.path().join("summary.json");
        let summary = RunSummary {
            weighting: "gini".to_string(),
            alternatives: names(),
            criteria: vec!["C1".to_string()],
            weights: vec![1.0],
            utility: vec![0.5, 1.0],
            rank: vec![2, 1],
            coefficients: vec![0.0, 1.0],
            reduced_rank: vec![2, 1],
            rank_changes: vec![],
        };
        write_json(&summary_path, &summary).unwrap();
        let back: RunSummary =
            serde_json::from_slice(&fs::read(&summary_path).unwrap()).unwrap();
        assert_eq!(back, summary);
    }
}
