//! Batch/result alignment
//!
//! Rows are keyed by submission index, never by completion time. A
//! backend that returns a different number of results than files was
//! sent violates its contract; the client pairs up to the shorter
//! sequence instead of indexing out of range.

/// Pair each submitted file with its result, truncating to the
/// shorter side on a count mismatch.
pub fn align_results<F, R>(files: Vec<F>, results: Vec<R>) -> Vec<(F, R)> {
    files.into_iter().zip(results).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClassificationResult;

    fn result(disease: &str) -> ClassificationResult {
        ClassificationResult {
            disease: disease.to_string(),
            confidence: 50.0,
        }
    }

    #[test]
    fn test_align_equal_lengths_preserves_order() {
        let files = vec!["a.jpg", "b.jpg", "c.jpg"];
        let results = vec![result("Blight"), result("Common_Rust"), result("Healthy")];

        let pairs = align_results(files, results);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, "a.jpg");
        assert_eq!(pairs[0].1.disease, "Blight");
        assert_eq!(pairs[2].0, "c.jpg");
        assert_eq!(pairs[2].1.disease, "Healthy");
    }

    #[test]
    fn test_align_truncates_excess_results() {
        let files = vec!["a.jpg"];
        let results = vec![result("Blight"), result("Healthy")];

        let pairs = align_results(files, results);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1.disease, "Blight");
    }

    #[test]
    fn test_align_truncates_excess_files() {
        let files = vec!["a.jpg", "b.jpg", "c.jpg"];
        let results = vec![result("Blight")];

        let pairs = align_results(files, results);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "a.jpg");
    }

    #[test]
    fn test_align_empty_results() {
        let pairs = align_results(vec!["a.jpg"], Vec::<ClassificationResult>::new());
        assert!(pairs.is_empty());
    }
}
