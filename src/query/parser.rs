//! # Query Option Parser
//!
//! Turns the raw `$filter` / `$select` / `$top` / `$skip` query-string pairs
//! into [`QueryOptions`]. Parsing is total: unknown keys, empty values and
//! unusable numbers all mean "no restriction".

use std::collections::HashMap;

use super::filter::FilterExpr;
use super::pagination::Window;
use super::projection::Projection;

pub const FILTER_OPTION: &str = "$filter";
pub const SELECT_OPTION: &str = "$select";
pub const TOP_OPTION: &str = "$top";
pub const SKIP_OPTION: &str = "$skip";

/// Parsed system query options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Predicate clauses (None = keep all)
    pub filter: Option<FilterExpr>,

    /// Fields to keep (None = full records)
    pub select: Option<Projection>,

    pub window: Window,
}

impl QueryOptions {
    /// Parse query options from query-string pairs
    ///
    /// Keys are case-sensitive. An empty value is the same as an absent key.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let mut options = Self::default();

        for (key, value) in params {
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                FILTER_OPTION => options.filter = Some(FilterExpr::parse(value)),
                SELECT_OPTION => options.select = Some(Projection::parse(value)),
                TOP_OPTION => options.window.top = parse_count(value),
                SKIP_OPTION => options.window.skip = parse_count(value),
                _ => {}
            }
        }

        options
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(FilterExpr::parse(filter));
        self
    }

    pub fn with_select(mut self, select: &str) -> Self {
        self.select = Some(Projection::parse(select));
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.window.top = Some(top);
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.window.skip = Some(skip);
        self
    }
}

/// Parse the integer at the start of `input`
///
/// Leading whitespace and one sign are allowed; anything after the digits is
/// ignored (`"12abc"` is 12). Values out of `i64` range saturate. Returns
/// `None` when there are no leading digits.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(trimmed.starts_with(|c| c == '+' || c == '-'));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_len == 0 {
        return None;
    }

    let literal = &trimmed[..sign_len + digit_len];
    let saturated = if trimmed.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    };
    Some(literal.parse().unwrap_or(saturated))
}

/// `$top` / `$skip` value; negatives count as absent
fn parse_count(value: &str) -> Option<usize> {
    parse_int_prefix(value).and_then(|n| usize::try_from(n).ok())
}
