//! Confidence tier mapping for row styling

/// Styling tier derived from a result's confidence percentage.
///
/// Lower bounds are inclusive: 80.0 is already Success, 60.0 is
/// already Warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    Success,
    Warning,
    Danger,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceTier::Success
        } else if confidence >= 60.0 {
            ConfidenceTier::Warning
        } else {
            ConfidenceTier::Danger
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Success => "success",
            ConfidenceTier::Warning => "warning",
            ConfidenceTier::Danger => "danger",
        }
    }

    /// Class name used on the confidence cell.
    pub fn text_class(&self) -> String {
        format!("text-{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_success_boundary_inclusive() {
        assert_eq!(
            ConfidenceTier::from_confidence(80.0),
            ConfidenceTier::Success
        );
        assert_eq!(
            ConfidenceTier::from_confidence(79.99),
            ConfidenceTier::Warning
        );
    }

    #[test]
    fn test_tier_warning_boundary_inclusive() {
        assert_eq!(
            ConfidenceTier::from_confidence(60.0),
            ConfidenceTier::Warning
        );
        assert_eq!(
            ConfidenceTier::from_confidence(59.99),
            ConfidenceTier::Danger
        );
    }

    #[test]
    fn test_tier_extremes() {
        assert_eq!(
            ConfidenceTier::from_confidence(100.0),
            ConfidenceTier::Success
        );
        assert_eq!(ConfidenceTier::from_confidence(0.0), ConfidenceTier::Danger);
    }

    #[test]
    fn test_text_class() {
        assert_eq!(
            ConfidenceTier::from_confidence(85.0).text_class(),
            "text-success"
        );
        assert_eq!(
            ConfidenceTier::from_confidence(45.0).text_class(),
            "text-danger"
        );
    }
}
