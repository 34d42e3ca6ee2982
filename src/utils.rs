//! Common utility functions shared across the codebase.

use std::cmp::Ordering;

/// Compares two keys in an order close to a locale-aware collation.
///
/// Characters are grouped into punctuation/whitespace, digits and letters
/// (in that order). Letters compare case-insensitively first; when two keys
/// differ only by case, lowercase sorts before uppercase. Raw code point
/// order breaks any remaining tie, so the ordering is total.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use i18nhelp::utils::locale_compare;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("about", "About"), Ordering::Less);
/// assert_eq!(locale_compare("_hidden", "1st"), Ordering::Less);
/// assert_eq!(locale_compare("item2", "item10"), Ordering::Greater);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Sort key behind [`locale_compare`].
///
/// Compared as a tuple: the lowercased characters tagged with their class,
/// then one case flag per lowercased character (0 unless the source
/// character is uppercase), then the raw string. Characters whose lowercase
/// form expands (`İ` becomes `i` plus a combining dot) repeat their flag, so
/// both parts stay aligned and the order is total.
pub fn collation_key(s: &str) -> (Vec<(u8, char)>, Vec<u8>, String) {
    let mut primary = Vec::with_capacity(s.len());
    let mut case = Vec::with_capacity(s.len());
    for c in s.chars() {
        let flag = u8::from(c.is_uppercase());
        for lower in c.to_lowercase() {
            primary.push((char_class(lower), lower));
            case.push(flag);
        }
    }
    (primary, case, s.to_string())
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}
