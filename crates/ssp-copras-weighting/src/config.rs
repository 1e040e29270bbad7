use serde::{Deserialize, Serialize};

use crate::error::WeightingError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum WeightingConfig {
    /// Objective weights from each criterion's Gini coefficient.
    #[default]
    Gini,
    Equal,
    /// Externally supplied weights.
    Fixed { weights: Vec<f64> },
}

impl WeightingConfig {
    /// Builds a config from a method name and, for `fixed`, a comma-separated weight list.
    pub fn parse(method: &str, weights: Option<&str>) -> Result<Self, WeightingError> {
        match method.trim().to_ascii_lowercase().as_str() {
            "" | "gini" => Ok(Self::Gini),
            "equal" => Ok(Self::Equal),
            "fixed" => {
                let raw = weights
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| {
                        WeightingError::Config("fixed weighting requires a weight list".to_string())
                    })?;
                let weights = raw
                    .split(',')
                    .map(|part| {
                        part.trim().parse::<f64>().map_err(|e| {
                            WeightingError::Config(format!("invalid weight {part:?}: {e}"))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Fixed { weights })
            }
            other => Err(WeightingError::Config(format!(
                "unknown weighting method {other:?}, expected gini, equal or fixed"
            ))),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gini => "gini",
            Self::Equal => "equal",
            Self::Fixed { .. } => "fixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_names() {
        assert_eq!(WeightingConfig::parse("GINI", None).unwrap(), WeightingConfig::Gini);
        assert_eq!(WeightingConfig::parse(" equal ", None).unwrap(), WeightingConfig::Equal);
        assert_eq!(
            WeightingConfig::parse("fixed", Some("0.2, 0.8")).unwrap(),
            WeightingConfig::Fixed {
                weights: vec![0.2, 0.8]
            }
        );
    }

    #[test]
    fn fixed_needs_parseable_weights() {
        assert!(WeightingConfig::parse("fixed", None).is_err());
        assert!(WeightingConfig::parse("fixed", Some("0.2,abc")).is_err());
        assert!(WeightingConfig::parse("entropy", None).is_err());
    }

    #[test]
    fn deserializes_tagged_json() {
        let cfg: WeightingConfig =
            serde_json::from_str(r#"{"method":"fixed","weights":[0.3,0.7]}"#).unwrap();
        assert_eq!(cfg.name(), "fixed");
        let gini: WeightingConfig = serde_json::from_str(r#"{"method":"gini"}"#).unwrap();
        assert_eq!(gini, WeightingConfig::Gini);
    }
}
