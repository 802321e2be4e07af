use regex::Regex;

lazy_static::lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref SHEET_UNSAFE: Regex = Regex::new(r"[^a-zA-Z0-9 ]+").unwrap();
}

/// Replaces every run of characters outside `[a-zA-Z0-9 ]` with a single `_`.
/// Excel refuses several symbols in sheet names, so booster names go through this.
pub fn replace_special_characters(input: &str) -> String {
    SHEET_UNSAFE.replace_all(input, "_").into_owned()
}

/// All maximal runs of ASCII digits, in order of appearance.
pub fn digit_runs(input: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(input).map(|m| m.as_str()).collect()
}
