//! Birth dates with partially known components.

use std::cmp::Ordering;

use serde::Serialize;

/// Year, month and day of birth, each possibly unknown.
///
/// Ordered chronologically component by component. A missing component sorts
/// after any present value, so `1990-??` comes after `1990-12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BirthDate {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
}

impl BirthDate {
    pub fn new(year: Option<i64>, month: Option<i64>, day: Option<i64>) -> Self {
        Self { year, month, day }
    }
}

fn nulls_last(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for BirthDate {
    fn cmp(&self, other: &Self) -> Ordering {
        nulls_last(self.year, other.year)
            .then_with(|| nulls_last(self.month, other.month))
            .then_with(|| nulls_last(self.day, other.day))
    }
}

impl PartialOrd for BirthDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let part = |v: Option<i64>, width: usize| match v {
            Some(n) => format!("{:0width$}", n, width = width),
            None => "?".repeat(width),
        };
        write!(f, "{}-{}-{}", part(self.year, 4), part(self.month, 2), part(self.day, 2))
    }
}
