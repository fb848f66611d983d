//! Fuzzy string similarity on a 0-100 scale

/// Scores above this value count as a fuzzy match
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Case-insensitive similarity ratio between two strings, 0 to 100.
///
/// Normalized Levenshtein distance over Unicode scalar values, scaled and
/// rounded to the nearest integer. Identical strings (including two empty
/// ones) score 100.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let similarity = strsim::normalized_levenshtein(&a, &b);
    (similarity * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_and_case() {
        assert_eq!(ratio("factoring", "factoring"), 100);
        assert_eq!(ratio("Factoring", "FACTORING"), 100);
        assert_eq!(ratio("", ""), 100);
    }

    #[test]
    fn test_plural_is_close() {
        assert_eq!(ratio("Quadratics", "quadratic"), 90);
        assert!(ratio("Quadratics", "quadratic") > DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_unrelated_is_far() {
        assert!(ratio("geometry", "factoring") < 50);
        assert_eq!(ratio("", "slope"), 0);
        // surrounding whitespace counts as edits
        assert_eq!(ratio("   Slope   ", "slope"), 45);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // one edit in five characters
        assert_eq!(ratio("abcde", "abcdx"), 80);
        assert!(ratio("abcde", "abcdx") <= DEFAULT_THRESHOLD);

        // four edits in twenty-one characters
        let a = "abcdefghijklmnopqrstu";
        let b = "abcdefghijklmnopqWXYZ";
        assert_eq!(ratio(a, b), 81);
        assert!(ratio(a, b) > DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(ratio("Équation", "équation"), 100);
        // single substitution over eight scalar values, not bytes
        assert_eq!(ratio("équation", "equation"), 88);
        assert!(ratio("方程式", "方程") > 60);
    }
}
