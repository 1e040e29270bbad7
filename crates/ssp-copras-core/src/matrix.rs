use crate::error::{ComputationError, CoprasError, ValidationError};

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionType {
    Profit,
    Cost,
}

impl CriterionType {
    pub const fn sign(self) -> f64 {
        match self {
            Self::Profit => 1.0,
            Self::Cost => -1.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Profit => "profit",
            Self::Cost => "cost",
        }
    }
}

impl TryFrom<f64> for CriterionType {
    type Error = CoprasError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Self::Profit)
        } else if value == -1.0 {
            Ok(Self::Cost)
        } else {
            Err(ValidationError::InvalidCriterionType { value }.into())
        }
    }
}

impl TryFrom<i32> for CriterionType {
    type Error = CoprasError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

/// Rejects type vectors that do not contain both a profit and a cost criterion.
pub fn ensure_mixed_types(types: &[CriterionType]) -> Result<(), CoprasError> {
    for kind in [CriterionType::Profit, CriterionType::Cost] {
        if !types.contains(&kind) {
            return Err(ValidationError::MissingCriterionKind { kind: kind.label() }.into());
        }
    }
    Ok(())
}

/// Row-major `m x n` matrix: alternatives in rows, criteria in columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DecisionMatrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, CoprasError> {
        if rows == 0 || cols == 0 {
            return Err(ValidationError::EmptyMatrix.into());
        }
        let expected = rows * cols;
        if data.len() != expected {
            return Err(ValidationError::DimensionMismatch {
                what: "matrix data",
                expected,
                found: data.len(),
            }
            .into());
        }
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::NonFinite {
                row: pos / cols,
                col: pos % cols,
            }
            .into());
        }
        Ok(Self { rows, cols, data })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, CoprasError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(ValidationError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                }
                .into());
            }
            data.extend(row);
        }
        Self::new(row_count, cols, data)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.rows_iter().nth(row)
    }

    pub fn rows_iter(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.cols)
    }

    /// Values of column `col` top to bottom. Empty when `col` is out of range.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        let take = if col < self.cols { self.rows } else { 0 };
        self.data
            .iter()
            .skip(col)
            .step_by(self.cols)
            .take(take)
            .copied()
    }

    pub fn column_sum(&self, col: usize) -> f64 {
        self.column(col).sum()
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn column_mean(&self, col: usize) -> f64 {
        self.column_sum(col) / self.rows as f64
    }

    pub fn map_indexed(&self, mut f: impl FnMut(usize, usize, f64) -> f64) -> Self {
        let cols = self.cols;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(pos, &v)| f(pos / cols, pos % cols, v))
            .collect();
        Self {
            rows: self.rows,
            cols,
            data,
        }
    }

    pub fn scale_column(&self, col: usize, factor: f64) -> Result<Self, CoprasError> {
        self.check_col(col)?;
        Self::new(
            self.rows,
            self.cols,
            self.map_indexed(|_, j, v| if j == col { v * factor } else { v })
                .data,
        )
    }

    pub fn with_entry(&self, row: usize, col: usize, value: f64) -> Result<Self, CoprasError> {
        self.check_col(col)?;
        if row >= self.rows {
            return Err(ValidationError::DimensionMismatch {
                what: "row index",
                expected: self.rows,
                found: row,
            }
            .into());
        }
        Self::new(
            self.rows,
            self.cols,
            self.map_indexed(|i, j, v| if i == row && j == col { value } else { v })
                .data,
        )
    }

    pub fn ensure_non_negative(&self) -> Result<(), CoprasError> {
        match self.data.iter().position(|&v| v < 0.0) {
            Some(pos) => Err(ValidationError::NegativeEntry {
                row: pos / self.cols,
                col: pos % self.cols,
                value: self.data.get(pos).copied().unwrap_or_default(),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn check_col(&self, col: usize) -> Result<(), CoprasError> {
        if col >= self.cols {
            return Err(ValidationError::CriterionIndexOutOfRange {
                index: col,
                count: self.cols,
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weights(Vec<f64>);

impl Weights {
    pub fn new(values: Vec<f64>) -> Result<Self, CoprasError> {
        if values.is_empty() {
            return Err(ValidationError::EmptyMatrix.into());
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ValidationError::NegativeWeight { index, value }.into());
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSum { sum }.into());
        }
        Ok(Self(values))
    }

    pub fn normalized(raw: Vec<f64>) -> Result<Self, CoprasError> {
        let sum: f64 = raw.iter().sum();
        if sum == 0.0 || !sum.is_finite() {
            return Err(ComputationError::NonFinite {
                stage: "weight normalization",
            }
            .into());
        }
        Self::new(raw.into_iter().map(|v| v / sum).collect())
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn equal(n: usize) -> Result<Self, CoprasError> {
        Self::normalized(vec![1.0 / n.max(1) as f64; n])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompensationCoefficient {
    Uniform(f64),
    PerCriterion(Vec<f64>),
}

impl CompensationCoefficient {
    /// Broadcasts to `n` criteria, checking every value lies in `[0, 1]`.
    pub fn resolve(&self, n: usize) -> Result<Vec<f64>, CoprasError> {
        let values = match self {
            Self::Uniform(s) => vec![*s; n],
            Self::PerCriterion(values) => {
                if values.len() != n {
                    return Err(ValidationError::DimensionMismatch {
                        what: "compensation coefficient",
                        expected: n,
                        found: values.len(),
                    }
                    .into());
                }
                values.clone()
            }
        };
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(ValidationError::CoefficientOutOfRange { index, value }.into());
        }
        Ok(values)
    }
}

/// Whether criteria may fully compensate each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Compensation {
    #[default]
    Full,
    Reduced(CompensationCoefficient),
}

impl Compensation {
    pub const fn uniform(s: f64) -> Self {
        Self::Reduced(CompensationCoefficient::Uniform(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            CoprasError::Validation(ValidationError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        assert!(DecisionMatrix::from_rows(vec![]).is_err());
        let err = DecisionMatrix::from_rows(vec![vec![1.0, f64::NAN]]).unwrap_err();
        assert_eq!(
            err,
            CoprasError::Validation(ValidationError::NonFinite { row: 0, col: 1 })
        );
    }

    #[test]
    fn column_access_is_row_major_aware() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
            .unwrap();
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
        assert_eq!(m.column_sum(0), 9.0);
        assert_eq!(m.column_mean(1), 4.0);
        assert_eq!(m.get(2, 0), Some(5.0));
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.row(1), Some(&[3.0, 4.0][..]));
        assert_eq!(m.column(5).count(), 0);
    }

    #[test]
    fn scale_column_leaves_other_columns() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let scaled = m.scale_column(0, 10.0).unwrap();
        assert_eq!(scaled.as_slice(), &[10.0, 2.0, 30.0, 4.0]);
        assert!(m.scale_column(2, 1.0).is_err());
    }

    #[test]
    fn negative_entries_are_reported_with_position() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, -4.0]]).unwrap();
        assert_eq!(
            m.ensure_non_negative().unwrap_err(),
            CoprasError::Validation(ValidationError::NegativeEntry {
                row: 1,
                col: 1,
                value: -4.0
            })
        );
    }

    #[test]
    fn criterion_type_accepts_only_unit_signs() {
        assert_eq!(CriterionType::try_from(1).unwrap(), CriterionType::Profit);
        assert_eq!(CriterionType::try_from(-1.0).unwrap(), CriterionType::Cost);
        assert!(CriterionType::try_from(0).is_err());
        assert!(CriterionType::try_from(0.5).is_err());
    }

    #[test]
    fn mixed_types_required() {
        use CriterionType::{Cost, Profit};
        assert!(ensure_mixed_types(&[Profit, Cost]).is_ok());
        assert_eq!(
            ensure_mixed_types(&[Profit, Profit]).unwrap_err(),
            CoprasError::Validation(ValidationError::MissingCriterionKind { kind: "cost" })
        );
    }

    #[test]
    fn weights_must_sum_to_one() {
        assert!(Weights::new(vec![0.5, 0.5]).is_ok());
        assert!(Weights::new(vec![0.5, 0.4]).is_err());
        assert!(Weights::new(vec![1.5, -0.5]).is_err());
        let w = Weights::normalized(vec![2.0, 6.0]).unwrap();
        assert_eq!(w.as_slice(), &[0.25, 0.75]);
        assert!(Weights::normalized(vec![0.0, 0.0]).is_err());
    }

    #[test]
    fn coefficient_broadcasts_and_checks_range() {
        assert_eq!(
            CompensationCoefficient::Uniform(0.3).resolve(3).unwrap(),
            vec![0.3, 0.3, 0.3]
        );
        assert!(CompensationCoefficient::PerCriterion(vec![0.1]).resolve(2).is_err());
        assert_eq!(
            CompensationCoefficient::PerCriterion(vec![0.1, 1.2])
                .resolve(2)
                .unwrap_err(),
            CoprasError::Validation(ValidationError::CoefficientOutOfRange {
                index: 1,
                value: 1.2
            })
        );
    }
}
