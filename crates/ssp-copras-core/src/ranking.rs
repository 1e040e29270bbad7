use crate::error::{ComputationError, CoprasError};

/// 1-based positions, one per alternative, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking(Vec<usize>);

impl Ranking {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn get(&self, alternative: usize) -> Option<usize> {
        self.0.get(alternative).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn leaders(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == 1)
            .map(|(i, _)| i)
            .collect()
    }
}

impl AsRef<[usize]> for Ranking {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Dense descending ranking: highest preference gets 1, ties share a rank and
/// the next distinct value takes the following integer.
pub fn rank_descending(preferences: &[f64]) -> Result<Ranking, CoprasError> {
    if preferences.iter().any(|v| v.is_nan()) {
        return Err(ComputationError::NonFinite { stage: "ranking" }.into());
    }

    let mut distinct = preferences.to_vec();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup();

    let ranks = preferences
        .iter()
        .map(|v| distinct.partition_point(|d| d > v) + 1)
        .collect();
    Ok(Ranking(ranks))
}
