use std::collections::BTreeMap;

/// A parameter mapping, as fed to [`build_base_string`](crate::build_base_string).
pub type Params = BTreeMap<String, Value>;

/// Parameters received from the platform, keyed by their full (prefixed) names.
pub type InboundParameters = BTreeMap<String, String>;

/// A parameter value: either a single item or an ordered list of items.
///
/// Sequences are emitted as one `key=element` pair per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<String>),
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Scalar(s.clone())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Scalar(f.to_string())
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Scalar(n.to_string())
                }
            }
        )*
    };
}

scalar_from_int!(i32, i64, u32, u64, usize);

impl<T: ToString> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from("x"), Value::Scalar("x".to_string()));
        assert_eq!(Value::from(42u64), Value::Scalar("42".to_string()));
        assert_eq!(Value::from(-3i32), Value::Scalar("-3".to_string()));
    }

    #[test]
    fn test_sequence_conversion() {
        assert_eq!(
            Value::from(vec![3, 1, 2]),
            Value::Sequence(vec!["3".to_string(), "1".to_string(), "2".to_string()])
        );
    }
}
