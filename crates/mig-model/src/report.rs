use serde::{Serialize, Serializer};

/// A uniformly-shaped row that can be written as one line of a report.
///
/// `HEADERS` lists the column names in the same order the row serializes its
/// fields, so a header line can be written even when there are no rows.
pub trait ReportRow: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Writes a percentage with exactly two decimal digits.
pub fn serialize_pct<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{value:.2}"))
}
