//! Common request types
//!
//! The admin page posts HTML form values, so numeric fields arrive either as
//! JSON numbers or as strings. [`NumberLike`] accepts both.

use serde::{Deserialize, Deserializer, Serialize};

/// A JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberLike {
    /// `true` for an empty or whitespace-only string
    pub fn is_blank(&self) -> bool {
        matches!(self, NumberLike::Text(s) if s.trim().is_empty())
    }

    /// Value as a float, `None` if blank or not numeric
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberLike::Int(n) => *n as f64,
            NumberLike::Float(f) => *f,
            NumberLike::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Value as a non-negative integer, `None` if blank, negative or fractional
    pub fn as_u64(&self) -> Option<u64> {
        if let NumberLike::Int(n) = self {
            return u64::try_from(*n).ok();
        }
        if let NumberLike::Text(s) = self
            && let Ok(n) = s.trim().parse::<u64>()
        {
            return Some(n);
        }
        let f = self.as_f64()?;
        (f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
    }
}

/// `deserialize_with` helper: explicit `null` becomes `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<i64> for NumberLike {
    fn from(n: i64) -> Self {
        NumberLike::Int(n)
    }
}

impl From<f64> for NumberLike {
    fn from(f: f64) -> Self {
        NumberLike::Float(f)
    }
}

impl From<&str> for NumberLike {
    fn from(s: &str) -> Self {
        NumberLike::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> NumberLike {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        assert_eq!(parse("3"), NumberLike::Int(3));
        assert_eq!(parse("2.5"), NumberLike::Float(2.5));
        assert_eq!(parse("\"12\""), NumberLike::Text("12".into()));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(parse("\" 9.9 \"").as_f64(), Some(9.9));
        assert_eq!(parse("7").as_f64(), Some(7.0));
        assert_eq!(parse("\"abc\"").as_f64(), None);
        assert_eq!(parse("\"\"").as_f64(), None);
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(parse("4").as_u64(), Some(4));
        assert_eq!(parse("\"15\"").as_u64(), Some(15));
        assert_eq!(parse("5.0").as_u64(), Some(5));
        assert_eq!(parse("-1").as_u64(), None);
        assert_eq!(parse("1.5").as_u64(), None);
    }

    #[test]
    fn test_blank() {
        assert!(parse("\"  \"").is_blank());
        assert!(!parse("0").is_blank());
    }
}
