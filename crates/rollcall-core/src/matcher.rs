//! Card matching predicate
//!
//! A card matches when the term is a substring of any of its searchable
//! fields. Names are compared lower-cased; emoji and years are compared as-is.

use crate::types::{CardAttributes, SearchTerm};

/// Returns true if `term` can be found in any of the card's fields.
///
/// Clauses are checked in a fixed order and the first hit wins. The result
/// is a plain OR, so the order only affects how much work is done.
pub fn matches(term: &SearchTerm, card: &CardAttributes) -> bool {
    let term = term.as_str();
    let folded = |field: &str| field.to_lowercase().contains(term);

    if folded(&card.name) {
        return true;
    }

    if card.emoji.contains(term) {
        return true;
    }

    let legal = &card.legal_name;
    if folded(&legal.first) {
        return true;
    }

    if legal.middle.as_deref().is_some_and(|middle| folded(middle)) {
        return true;
    }

    if folded(&legal.last) {
        return true;
    }

    card.years_marched.contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LegalName;

    fn card() -> CardAttributes {
        CardAttributes::new(
            "Alice Stone",
            "🥁",
            LegalName::new("Alice", "Stonemason").with_middle("Marie"),
            "2019, 2020",
        )
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(matches(&SearchTerm::new(""), &card()));
    }

    #[test]
    fn test_name_is_case_insensitive() {
        assert!(matches(&SearchTerm::new("ALICE S"), &card()));
    }

    #[test]
    fn test_emoji_matches() {
        assert!(matches(&SearchTerm::new("🥁"), &card()));
        assert!(!matches(&SearchTerm::new("🎺"), &card()));
    }

    #[test]
    fn test_middle_name_matches() {
        assert!(matches(&SearchTerm::new("marie"), &card()));
    }

    #[test]
    fn test_last_name_matches() {
        assert!(matches(&SearchTerm::new("mason"), &card()));
    }

    #[test]
    fn test_years_match() {
        assert!(matches(&SearchTerm::new("2020"), &card()));
        assert!(matches(&SearchTerm::new("19, 20"), &card()));
        assert!(!matches(&SearchTerm::new("2021"), &card()));
    }

    #[test]
    fn test_no_field_matches() {
        assert!(!matches(&SearchTerm::new("zzz"), &card()));
    }

    #[test]
    fn test_emoji_is_not_case_folded() {
        // Uppercase in the field never lines up with a lower-cased term.
        let attrs = CardAttributes::new("x", "OK", LegalName::new("a", "b"), "");
        assert!(!matches(&SearchTerm::new("OK"), &attrs));
        let lower = CardAttributes::new("x", "ok", LegalName::new("a", "b"), "");
        assert!(matches(&SearchTerm::new("OK"), &lower));
    }

    #[test]
    fn test_whitespace_term_is_not_trimmed() {
        assert!(matches(&SearchTerm::new(" "), &card()));
        let single_word = CardAttributes::new("Cher", "", LegalName::new("Cher", "X"), "2019");
        assert!(!matches(&SearchTerm::new(" "), &single_word));
    }
}
