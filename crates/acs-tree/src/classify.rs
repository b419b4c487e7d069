//! The variable-code grammar.
//!
//! A classifiable code is `<group>_<line><suffix>`, anchored over the whole
//! string and case-sensitive: the group token is two uppercase letters and
//! two digits, optionally followed by a short trailing qualifier (`DP02`,
//! `DP02P` and the Puerto Rico `DP02PR` form all classify); the line number
//! is exactly four digits; the suffix is one of the eight known measure
//! suffixes. Anything else is not classifiable, which is expected for
//! geography predicate entries like `for` and `in`.

use std::sync::LazyLock;

use regex::Regex;

use acs_model::{Measure, ParsedCode};

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<group>[A-Z]{2}\d{2}[A-Z]{0,2})_(?P<line>\d{4})(?P<suffix>PEA|PMA|EA|MA|PE|PM|E|M)$")
        .expect("invalid variable code regex")
});

/// Match a raw variable code against the grammar.
///
/// `None` means "not classifiable", which is not an error: such entries are
/// silently excluded from families, the tree, and the indexes.
pub fn classify(code: &str) -> Option<ParsedCode> {
    let caps = CODE_REGEX.captures(code)?;
    let measure = Measure::from_suffix(&caps["suffix"])?;
    Some(ParsedCode {
        group: caps["group"].to_string(),
        line: caps["line"].to_string(),
        measure,
    })
}

/// The family base for a code, when the code classifies.
pub fn base_for_code(code: &str) -> Option<String> {
    classify(code).map(|parsed| parsed.base())
}
