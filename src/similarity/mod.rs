/*!
# Similarity Module

Fuzzy comparison of header bodies: both texts are normalized, then
scored with a matching-blocks sequence ratio in `[0, 1]`.
*/

pub mod matcher;
pub mod normalizer;

pub use matcher::{Match, SequenceMatcher};
pub use normalizer::normalize;

/// Similarity of `a` and `b` after normalization.
///
/// The ratio is order-sensitive for long inputs; callers pass the
/// candidate first and the reference second.
pub fn similarity(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(&normalize(a), &normalize(b)).ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosmetic_differences_are_ignored() {
        let boxed = "*****************\n* Copyright ACME 2010 *\n* All rights reserved *\n*****************";
        let plain = "Copyright ACME 2010\nAll rights reserved";
        assert_eq!(similarity(boxed, plain), 1.0);
    }

    #[test]
    fn test_year_change_stays_above_default_threshold() {
        let score = similarity(
            "Copyright ACME 2024\nAll rights reserved",
            "Copyright ACME 2010\nAll rights reserved",
        );
        assert!(score > 0.9 && score < 1.0, "score = {score}");
    }

    #[test]
    fn test_unrelated_headers_score_low() {
        let score = similarity(
            "Licensed under the Apache License, Version 2.0",
            "Copyright ACME 2010\nAll rights reserved",
        );
        assert!(score < 0.75, "score = {score}");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("// ---", "===="), 1.0);
        assert_eq!(similarity("text", ""), 0.0);
    }
}
