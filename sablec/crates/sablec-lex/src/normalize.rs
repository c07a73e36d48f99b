//! Identifier normalization.
//!
//! Identifiers are compared after Unicode Normalization Form KC, so
//! compatibility-equivalent spellings (`µ` MICRO SIGN and `μ` GREEK SMALL
//! LETTER MU, fraktur `𝔘` and `U`, the `ﬁ` ligature and `fi`) name the same
//! binding.
//!
//! Normalization is total over input the classifier accepted and idempotent:
//! `normalize_str(normalize_str(s)) == normalize_str(s)`.

use std::borrow::Cow;

use sablec_util::Symbol;
use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

/// Returns the NFKC form of `raw`.
///
/// ASCII text and text whose NFKC quick check answers `Yes` are returned
/// borrowed; only text that may change is run through the full algorithm.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use sablec_lex::normalize::normalize_str;
///
/// assert!(matches!(normalize_str("plain_ascii"), Cow::Borrowed(_)));
/// assert_eq!(normalize_str("µ"), "μ");
/// assert_eq!(normalize_str("𝔘𝔫𝔦𝔠𝔬𝔡𝔢"), "Unicode");
/// ```
pub fn normalize_str(raw: &str) -> Cow<'_, str> {
    if raw.is_ascii() {
        return Cow::Borrowed(raw);
    }
    match is_nfkc_quick(raw.chars()) {
        IsNormalized::Yes => Cow::Borrowed(raw),
        IsNormalized::No | IsNormalized::Maybe => {
            let normalized: String = raw.nfkc().collect();
            if normalized == raw {
                Cow::Borrowed(raw)
            } else {
                Cow::Owned(normalized)
            }
        },
    }
}

/// Normalizes `raw` and interns the result.
///
/// ```
/// use sablec_lex::normalize::normalize;
///
/// assert_eq!(normalize("µ"), normalize("μ"));
/// assert_eq!(normalize("ﬁle").as_str(), "file");
/// ```
pub fn normalize(raw: &str) -> Symbol {
    Symbol::intern(&normalize_str(raw))
}

/// Returns true if `raw` is already in NFKC.
pub fn is_normalized(raw: &str) -> bool {
    matches!(normalize_str(raw), Cow::Borrowed(_))
}
