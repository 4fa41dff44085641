//! Name normalization for player page URLs.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fold a name part to the accent-free lowercase letters used in player URLs.
///
/// Accents are removed by canonical decomposition ("Dončić" becomes "doncic");
/// anything that is not an ASCII letter afterwards (spaces, apostrophes,
/// hyphens, periods) is dropped.
pub fn normalize_name_part(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
