// crates/infra/src/normalizer.rs
use media_split_ports::normalizer::ConditionNormalizer;

/// Default normalizer: lowercase, strip quoting, collapse whitespace runs to
/// a single space, and drop spaces that only separate punctuation
/// (`( expr )` and `width :` forms).
///
/// Breakpoint queries and rule conditions go through this identically, so
/// alias matching is insensitive to formatting variance.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceNormalizer;

impl ConditionNormalizer for WhitespaceNormalizer {
    fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let unquoted: String = lowered.chars().filter(|c| *c != '"' && *c != '\'').collect();
        let collapsed = unquoted.split_whitespace().collect::<Vec<_>>().join(" ");
        collapsed.replace("( ", "(").replace(" )", ")").replace(" :", ":")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_lowercases() {
        let normalizer = WhitespaceNormalizer;
        assert_eq!(
            normalizer.normalize("  ( MIN-WIDTH :  768px )  and\n(max-width: 1024px)"),
            "(min-width: 768px) and (max-width: 1024px)"
        );
    }

    #[test]
    fn strips_quotes() {
        let normalizer = WhitespaceNormalizer;
        assert_eq!(normalizer.normalize("screen and \"(min-width: 320px)\""), "screen and (min-width: 320px)");
    }

    #[test]
    fn equal_conditions_normalize_identically() {
        let normalizer = WhitespaceNormalizer;
        assert_eq!(
            normalizer.normalize("(max-width:600px)"),
            normalizer.normalize("(MAX-WIDTH:600px)")
        );
    }
}
