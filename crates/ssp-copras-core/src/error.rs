use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("decision matrix must have at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("entry ({row}, {col}) is not a finite number")]
    NonFinite { row: usize, col: usize },

    #[error("{what} length mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("weights must sum to 1, got {sum}")]
    WeightSum { sum: f64 },

    #[error("weight {index} is negative or not finite: {value}")]
    NegativeWeight { index: usize, value: f64 },

    #[error("criterion type must be 1 (profit) or -1 (cost), got {value}")]
    InvalidCriterionType { value: f64 },

    #[error("compensation coefficient {index} must be within [0, 1], got {value}")]
    CoefficientOutOfRange { index: usize, value: f64 },

    #[error("entry ({row}, {col}) is negative: {value}")]
    NegativeEntry { row: usize, col: usize, value: f64 },

    #[error("at least one {kind} criterion is required")]
    MissingCriterionKind { kind: &'static str },

    #[error("at least {min} alternatives are required, found {found}")]
    TooFewAlternatives { found: usize, min: usize },

    #[error("criterion index {index} is out of range for {count} criteria")]
    CriterionIndexOutOfRange { index: usize, count: usize },

    #[error("sweep step must be within (0, 1], got {step}")]
    InvalidSweepStep { step: f64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputationError {
    #[error("column {col} sums to zero, linear normalization is undefined")]
    ZeroColumnSum { col: usize },

    #[error("cost aggregate is zero for alternative {alternative}")]
    ZeroCostAggregate { alternative: usize },

    #[error("gini coefficients sum to zero, every criterion is degenerate")]
    ZeroGiniSum,

    #[error("relative priority of alternative {alternative} is not positive ({value})")]
    NonPositivePriority { alternative: usize, value: f64 },

    #[error("non-finite value produced during {stage}")]
    NonFinite { stage: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoprasError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("computation error: {0}")]
    Computation(#[from] ComputationError),
}

impl CoprasError {
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub const fn is_computation(&self) -> bool {
        matches!(self, Self::Computation(_))
    }
}
