//! Yes/no intent classification for vote confirmation
//!
//! Matches whole tokens against per-language keyword sets. Raw substring
//! matching would read "number" as a refusal ("no") and is deliberately
//! not used here.

use crate::domain::speech::Language;

/// Classified confirmation response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmIntent {
    Affirm,
    Deny,
}

const AFFIRM_EN: &[&str] = &["yes", "yeah", "yep", "confirm", "correct"];
const DENY_EN: &[&str] = &["no", "nope", "cancel", "wrong"];

const AFFIRM_HI: &[&str] = &["हां", "हाँ", "जी", "haan", "yes"];
const DENY_HI: &[&str] = &["नहीं", "nahi", "no"];

impl ConfirmIntent {
    /// Classify a recognized transcript as an affirmative or negative
    /// response in the given language. Returns `None` when neither set
    /// matches; affirmative keywords take precedence when both appear.
    pub fn classify(transcript: &str, language: Language) -> Option<Self> {
        let (affirm, deny) = match language {
            Language::English => (AFFIRM_EN, DENY_EN),
            Language::Hindi => (AFFIRM_HI, DENY_HI),
        };

        let lowered = transcript.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .collect();

        if tokens.iter().any(|t| affirm.contains(t)) {
            Some(Self::Affirm)
        } else if tokens.iter().any(|t| deny.contains(t)) {
            Some(Self::Deny)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_affirmatives() {
        for text in ["yes", "Yes.", "yeah sure", "yes confirm this vote", "that is correct"] {
            assert_eq!(
                ConfirmIntent::classify(text, Language::English),
                Some(ConfirmIntent::Affirm),
                "expected affirm for {text:?}"
            );
        }
    }

    #[test]
    fn english_negatives() {
        for text in ["no", "No!", "nope", "cancel it", "that is wrong"] {
            assert_eq!(
                ConfirmIntent::classify(text, Language::English),
                Some(ConfirmIntent::Deny),
                "expected deny for {text:?}"
            );
        }
    }

    #[test]
    fn substrings_do_not_match() {
        // "number" contains "no", "know" ends with "now" — none are tokens
        assert_eq!(ConfirmIntent::classify("number two", Language::English), None);
        assert_eq!(ConfirmIntent::classify("i dont know", Language::English), None);
        assert_eq!(ConfirmIntent::classify("yesterday", Language::English), None);
    }

    #[test]
    fn hindi_affirmatives() {
        for text in ["हां", "जी हाँ", "haan", "जी"] {
            assert_eq!(
                ConfirmIntent::classify(text, Language::Hindi),
                Some(ConfirmIntent::Affirm),
                "expected affirm for {text:?}"
            );
        }
    }

    #[test]
    fn hindi_negatives() {
        assert_eq!(
            ConfirmIntent::classify("नहीं", Language::Hindi),
            Some(ConfirmIntent::Deny)
        );
        assert_eq!(
            ConfirmIntent::classify("nahi nahi", Language::Hindi),
            Some(ConfirmIntent::Deny)
        );
    }

    #[test]
    fn unclassifiable() {
        assert_eq!(ConfirmIntent::classify("", Language::English), None);
        assert_eq!(ConfirmIntent::classify("maybe later", Language::English), None);
        assert_eq!(ConfirmIntent::classify("क्या", Language::Hindi), None);
    }

    #[test]
    fn affirm_wins_over_deny() {
        assert_eq!(
            ConfirmIntent::classify("yes not no", Language::English),
            Some(ConfirmIntent::Affirm)
        );
    }
}
