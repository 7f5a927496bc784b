use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

/// A typed cell value pulled out of a record for display and sorting.
///
/// Ordering is the natural ordering of the contained type. Integers and floats
/// compare numerically with each other; any other mix of kinds orders by kind
/// so the comparator stays total.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Text(_) => 2,
            Self::Timestamp(_) => 3,
        }
    }
}

/// Folds `-0.0` into `0.0` so both compare equal to `Int(0)`.
const fn normalized(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}

/// Exact integer-float comparison. The integer is never cast to `f64`, which
/// rounds above 2^53.
#[allow(clippy::cast_possible_truncation)]
fn cmp_int_float(a: i64, b: f64) -> Ordering {
    if b.is_nan() {
        // Matches `total_cmp`: negative NaN sorts below every number.
        return if b.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if b.is_infinite() {
        return if b > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    let floor = b.floor();
    // Saturates beyond the i128 range, which no i64 can reach.
    match i128::from(a).cmp(&(floor as i128)) {
        Ordering::Equal if b > floor => Ordering::Less,
        ordering => ordering,
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => normalized(*a).total_cmp(&normalized(*b)),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_orders_lexicographically() {
        assert!(FieldValue::from("Amy") < FieldValue::from("Bob"));
        assert!(FieldValue::from("Zed") > FieldValue::from("Bob"));
    }

    #[test]
    fn test_numbers_order_numerically() {
        assert!(FieldValue::Int(9) < FieldValue::Int(10));
        assert!(FieldValue::Float(2.5) < FieldValue::Int(3));
        assert!(FieldValue::Int(3) < FieldValue::Float(3.5));
    }

    #[test]
    fn test_large_ints_compare_exactly_against_floats() {
        let above = FieldValue::Int(9_007_199_254_740_993);
        let float = FieldValue::Float(9_007_199_254_740_992.0);
        let exact = FieldValue::Int(9_007_199_254_740_992);

        assert!(above > float);
        assert_eq!(float, exact);
        assert!(above > exact);

        let mut values = vec![above.clone(), float.clone(), exact.clone()];
        values.sort();
        assert_eq!(values[2], above);
    }

    #[test]
    fn test_fractional_and_special_floats_against_ints() {
        assert!(FieldValue::Int(-1) < FieldValue::Float(-0.5));
        assert!(FieldValue::Float(-0.5) < FieldValue::Int(0));
        assert_eq!(FieldValue::Int(0), FieldValue::Float(-0.0));
        assert_eq!(FieldValue::Float(-0.0), FieldValue::Float(0.0));
        assert!(FieldValue::Int(i64::MAX) < FieldValue::Float(f64::INFINITY));
        assert!(FieldValue::Int(i64::MIN) > FieldValue::Float(f64::NEG_INFINITY));
        assert!(FieldValue::Int(i64::MAX) < FieldValue::Float(1e300));
        assert!(FieldValue::Int(i64::MAX) < FieldValue::Float(f64::NAN.copysign(1.0)));
    }

    #[test]
    fn test_timestamps_order_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2023, 9, 15, 14, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2023, 10, 26, 10, 0, 0).unwrap();
        assert!(FieldValue::from(earlier) < FieldValue::from(later));
    }

    #[test]
    fn test_mixed_kinds_are_totally_ordered() {
        let mut values = vec![
            FieldValue::from("b"),
            FieldValue::Int(1),
            FieldValue::Bool(true),
            FieldValue::from("a"),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                FieldValue::Bool(true),
                FieldValue::Int(1),
                FieldValue::from("a"),
                FieldValue::from("b"),
            ]
        );
    }
}
