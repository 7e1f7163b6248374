//! # Filter Expressions
//!
//! `$filter` support is a deliberately small subset of OData: one numeric
//! `Price gt <number>` clause and one `Category eq '<literal>'` clause. The
//! parser turns the raw string into tagged [`FilterClause`] values so the
//! engine never looks at the text again.
//!
//! Anything outside that subset (other fields, other operators, `and`, `or`,
//! `not`) is ignored rather than rejected. A filter string can never fail.

use serde_json::Value;

use crate::catalog::{Record, CATEGORY_FIELD, PRICE_FIELD};

/// Marker for the numeric comparison clause
const PRICE_GT: &str = "Price gt";

/// Marker for the equality clause
const CATEGORY_EQ: &str = "Category eq";

/// A single parsed predicate
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    /// `field gt threshold`
    ///
    /// A NaN threshold (unparseable number) matches no record, as does a
    /// record whose field is missing or not numeric.
    GreaterThan { field: String, threshold: f64 },

    /// `field eq 'literal'`
    ///
    /// Case-sensitive string equality. With no literal, only records that
    /// lack the field match.
    Equals {
        field: String,
        literal: Option<String>,
    },
}

impl FilterClause {
    pub fn greater_than(field: impl Into<String>, threshold: f64) -> Self {
        Self::GreaterThan {
            field: field.into(),
            threshold,
        }
    }

    pub fn equals(field: impl Into<String>, literal: Option<String>) -> Self {
        Self::Equals {
            field: field.into(),
            literal,
        }
    }

    /// Field this clause tests
    pub fn field(&self) -> &str {
        match self {
            Self::GreaterThan { field, .. } | Self::Equals { field, .. } => field,
        }
    }

    /// Check if a record satisfies this clause
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::GreaterThan { field, threshold } => {
                record.number(field).is_some_and(|value| value > *threshold)
            }
            Self::Equals { field, literal } => match (record.get(field), literal) {
                (Some(Value::String(value)), Some(literal)) => value == literal,
                (None, None) => true,
                _ => false,
            },
        }
    }
}

/// Clauses combined with AND, evaluated in parse order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterExpr {
    clauses: Vec<FilterClause>,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Parse a raw `$filter` string
    ///
    /// `Price gt` takes the number at the start of the text following the
    /// marker; trailing text is ignored, so `Price gt 100 and ...` reads 100.
    /// `Category eq` takes the first single-quoted literal anywhere in the
    /// expression. The price clause always precedes the category clause.
    pub fn parse(input: &str) -> Self {
        let mut expr = Self::new();

        if let Some(pos) = input.find(PRICE_GT) {
            let operand = input[pos + PRICE_GT.len()..].trim();
            let threshold = parse_float_prefix(operand).unwrap_or(f64::NAN);
            expr = expr.and(FilterClause::greater_than(PRICE_FIELD, threshold));
        }

        if input.contains(CATEGORY_EQ) {
            expr = expr.and(FilterClause::equals(
                CATEGORY_FIELD,
                first_quoted_literal(input),
            ));
        }

        expr
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Check if a record satisfies every clause
    pub fn matches(&self, record: &Record) -> bool {
        self.clauses.iter().all(|c| c.matches(record))
    }
}

/// Text between the first `'` and the next `'` (or end of input)
fn first_quoted_literal(input: &str) -> Option<String> {
    input.split('\'').nth(1).map(str::to_string)
}

/// Parse the longest decimal number at the start of `input`
///
/// Accepts an optional sign, digits with at most one `.`, an optional
/// exponent, or `Infinity`. Returns `None` when no digit is found.
fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
