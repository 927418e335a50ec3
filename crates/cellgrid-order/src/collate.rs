//! Locale-aware string collation.
//!
//! Strings are compared in three passes, each only consulted when the
//! previous one ties:
//!
//! 1. Primary: transliterated to ASCII and case-folded, so accents and case
//!    are ignored (`"émile"` sits next to `"Emile"`, `"b"` after `"A"`).
//! 2. Case: lowercase before uppercase at the first differing position.
//! 3. Raw: plain code point order, which keeps the result a total order.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Compares two strings the way a reader scanning a sorted column expects.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use cellgrid_order::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("Émile", "Ezra"), Ordering::Less);
/// assert_eq!(collate("a", "A"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_primary() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(collate("équipe", "ezra"), Ordering::Less);
        assert_eq!(collate("Ömer", "Oz"), Ordering::Less);
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Team", "team"), Ordering::Greater);
    }

    #[test]
    fn distinct_strings_never_equal() {
        assert_ne!(collate("e", "é"), Ordering::Equal);
        assert_eq!(collate("e", "é"), collate("é", "e").reverse());
    }

    #[test]
    fn identical_strings_equal() {
        assert_eq!(collate("Finance", "Finance"), Ordering::Equal);
        assert_eq!(collate("", ""), Ordering::Equal);
    }

    #[test]
    fn empty_sorts_first() {
        assert_eq!(collate("", "a"), Ordering::Less);
    }
}
