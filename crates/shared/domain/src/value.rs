//! Typed resource values and conversions into caller types.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key → value content of one loaded bundle.
pub type BundleEntries = FxHashMap<String, ResourceValue>;

/// A single resource entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<ResourceValue>),
}

impl ResourceValue {
    /// Short type label used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
        }
    }
}

impl From<&str> for ResourceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ResourceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ResourceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ResourceValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ResourceValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<ResourceValue>> From<Vec<T>> for ResourceValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Conversion from a stored [`ResourceValue`] into the type a caller asked for.
///
/// Conversions are strict: text never parses into numbers and numbers never
/// stringify. Integers widen into floats; narrowing fails when out of range.
pub trait FromResource: Sized {
    /// Label of the target type, reported on mismatches.
    const EXPECTED: &'static str;

    fn from_resource(value: &ResourceValue) -> Option<Self>;
}

impl FromResource for ResourceValue {
    const EXPECTED: &'static str = "any";

    fn from_resource(value: &ResourceValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromResource for String {
    const EXPECTED: &'static str = "text";

    fn from_resource(value: &ResourceValue) -> Option<Self> {
        value.as_str().map(ToOwned::to_owned)
    }
}

impl FromResource for bool {
    const EXPECTED: &'static str = "bool";

    fn from_resource(value: &ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

macro_rules! integer_from_resource {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromResource for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_resource(value: &ResourceValue) -> Option<Self> {
                    match value {
                        ResourceValue::Integer(number) => <$ty>::try_from(*number).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integer_from_resource!(i64, i32, u32, u64, usize);

impl FromResource for f64 {
    const EXPECTED: &'static str = "f64";

    #[allow(clippy::cast_precision_loss)]
    fn from_resource(value: &ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::Float(number) => Some(*number),
            ResourceValue::Integer(number) => Some(*number as Self),
            _ => None,
        }
    }
}

impl FromResource for f32 {
    const EXPECTED: &'static str = "f32";

    #[allow(clippy::cast_possible_truncation)]
    fn from_resource(value: &ResourceValue) -> Option<Self> {
        f64::from_resource(value).map(|number| number as Self)
    }
}

impl<T: FromResource> FromResource for Vec<T> {
    const EXPECTED: &'static str = "list";

    fn from_resource(value: &ResourceValue) -> Option<Self> {
        match value {
            ResourceValue::List(items) => items.iter().map(T::from_resource).collect(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_scalar_conversions() {
        let text = ResourceValue::from("42");
        assert_eq!(String::from_resource(&text).as_deref(), Some("42"));
        assert_eq!(i64::from_resource(&text), None);

        let number = ResourceValue::from(42_i64);
        assert_eq!(i32::from_resource(&number), Some(42));
        assert_eq!(f64::from_resource(&number), Some(42.0));
        assert_eq!(String::from_resource(&number), None);
        assert_eq!(bool::from_resource(&ResourceValue::Bool(true)), Some(true));
    }

    #[test]
    fn integer_narrowing_is_checked() {
        assert_eq!(u32::from_resource(&ResourceValue::Integer(-1)), None);
        assert_eq!(i32::from_resource(&ResourceValue::Integer(i64::MAX)), None);
        assert_eq!(usize::from_resource(&ResourceValue::Integer(7)), Some(7));
    }

    #[test]
    fn lists_convert_elementwise() {
        let list = ResourceValue::from(vec!["a", "b"]);
        assert_eq!(Vec::<String>::from_resource(&list), Some(vec!["a".to_owned(), "b".to_owned()]));
        assert_eq!(Vec::<i64>::from_resource(&list), None);
    }

    #[test]
    fn display_renders_nested_lists() {
        let value = ResourceValue::List(vec![
            ResourceValue::from("x"),
            ResourceValue::from(vec![1_i64, 2]),
            ResourceValue::Bool(false),
        ]);
        assert_eq!(value.to_string(), "[x, [1, 2], false]");
    }

    #[test]
    fn deserializes_untagged_json() {
        let value: ResourceValue = serde_json::from_str(r#"["a", 1, 2.5, true]"#).unwrap();
        assert_eq!(
            value,
            ResourceValue::List(vec![
                ResourceValue::from("a"),
                ResourceValue::Integer(1),
                ResourceValue::Float(2.5),
                ResourceValue::Bool(true),
            ])
        );
    }
}
