use crate::models::reconstruction::ReconstructionResult;

/// Search query for a parsed reply: the keywords joined by single spaces, or
/// the reconstruction verbatim when there are no keywords (possibly empty).
pub fn compose_query(result: &ReconstructionResult) -> String {
    if result.keywords.is_empty() {
        result.reconstruction.clone()
    } else {
        result.keywords.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(reconstruction: &str, keywords: &[&str]) -> ReconstructionResult {
        ReconstructionResult {
            reconstruction: reconstruction.to_string(),
            explanations: vec![],
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_keywords_are_space_joined_in_order() {
        assert_eq!(
            compose_query(&result("Hello there", &["greeting", "slang"])),
            "greeting slang"
        );
    }

    #[test]
    fn test_keywords_win_over_reconstruction() {
        let q = compose_query(&result("ignored entirely", &["MySpace", "Top 8 drama"]));
        assert_eq!(q, "MySpace Top 8 drama");
    }

    #[test]
    fn test_reconstruction_used_verbatim_without_keywords() {
        assert_eq!(
            compose_query(&result("I cannot process this.", &[])),
            "I cannot process this."
        );
        assert_eq!(compose_query(&result("  padded  ", &[])), "  padded  ");
    }

    #[test]
    fn test_empty_everything_yields_empty_query() {
        assert_eq!(compose_query(&ReconstructionResult::default()), "");
    }
}
