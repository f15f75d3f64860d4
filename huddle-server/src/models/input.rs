//! Raw request values
//!
//! HTML forms send every value as text while JSON bodies carry real numbers
//! and booleans. [`RawValue`] accepts either so validation sees one shape.

use serde::Deserialize;

/// A scalar from a form field or a JSON body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// True for an empty string, the form encoding of "no value".
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Read the value as a 32-bit integer.
    ///
    /// Whole floats are accepted from JSON and from text alike; text is
    /// parsed after trimming.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(n) => i32::try_from(*n).ok(),
            Self::Float(f) => whole_i32(*f),
            Self::Text(s) => {
                let s = s.trim();
                s.parse().ok().or_else(|| s.parse::<f64>().ok().and_then(whole_i32))
            }
            Self::Bool(_) => None,
        }
    }

    /// Checkbox semantics: `"on"` (what browsers send), `"true"` or JSON `true`.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Text(s) => s == "on" || s.eq_ignore_ascii_case("true"),
            Self::Float(_) => false,
        }
    }
}

fn whole_i32(f: f64) -> Option<i32> {
    (f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64).then_some(f as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_from_text_and_json() {
        assert_eq!(RawValue::Text("42".into()).as_i32(), Some(42));
        assert_eq!(RawValue::Text(" 7 ".into()).as_i32(), Some(7));
        assert_eq!(RawValue::Int(3).as_i32(), Some(3));
        assert_eq!(RawValue::Float(5.0).as_i32(), Some(5));
        assert_eq!(RawValue::Float(5.5).as_i32(), None);
        assert_eq!(RawValue::Text("abc".into()).as_i32(), None);
        assert_eq!(RawValue::Int(i64::MAX).as_i32(), None);
    }

    #[test]
    fn whole_numbers_read_the_same_from_text_and_json() {
        assert_eq!(RawValue::Text("2.0".into()).as_i32(), Some(2));
        assert_eq!(RawValue::Float(2.0).as_i32(), Some(2));
        assert_eq!(RawValue::Text("2.5".into()).as_i32(), None);
        assert_eq!(RawValue::Text("NaN".into()).as_i32(), None);
        assert_eq!(RawValue::Text("inf".into()).as_i32(), None);
        assert_eq!(RawValue::Text("1e20".into()).as_i32(), None);
    }

    #[test]
    fn checkbox_values() {
        assert!(RawValue::Text("on".into()).is_checked());
        assert!(RawValue::Text("TRUE".into()).is_checked());
        assert!(RawValue::Bool(true).is_checked());
        assert!(!RawValue::Bool(false).is_checked());
        assert!(!RawValue::Text("off".into()).is_checked());
        assert!(!RawValue::Text(String::new()).is_checked());
    }

    #[test]
    fn deserializes_untagged_from_json() {
        let v: RawValue = serde_json::from_str("12").unwrap();
        assert_eq!(v, RawValue::Int(12));
        let v: RawValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, RawValue::Bool(true));
        let v: RawValue = serde_json::from_str("\"on\"").unwrap();
        assert_eq!(v, RawValue::Text("on".into()));
    }
}
