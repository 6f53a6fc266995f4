//! Typed-value model and CLI-token conversion.
//!
//! Protocol payloads are dynamically typed; command-line input is string
//! only. This module defines the [`Value`] sum type used for every payload
//! field and the conversion functions that turn CLI tokens into values.
//!
//! Conversion is one-directional (string to value), total, and follows a
//! fixed precedence: integer, then float, then boolean, then the null
//! sentinel, with a string fallback. A token never fails to convert.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// The token recognized as the null sentinel.
const NULL_LITERAL: &str = "null";

/// An ordered sequence of payload values.
pub type List = Vec<Value>;

/// A keyed collection of payload values.
///
/// Backed by a `BTreeMap` so iteration order is deterministic across runs,
/// which keeps serialized output stable for interop comparison.
pub type Dict = BTreeMap<String, Value>;

// ============================================================================
// Value
// ============================================================================

/// A dynamically typed protocol payload value.
///
/// Token conversion only ever produces the five scalar variants; the
/// [`List`](Value::List) and [`Map`](Value::Map) variants exist so a
/// message's wire form (a heterogeneous array) is itself expressible as a
/// value tree.
///
/// # Examples
///
/// ```
/// use wampcheck_core::value::{convert, Value};
///
/// assert_eq!(convert("7"), Value::Integer(7));
/// assert_eq!(convert("off"), Value::String("off".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null sentinel.
    Null,

    /// A boolean literal (`true` or `false`).
    Bool(bool),

    /// A base-10 signed 64-bit integer.
    Integer(i64),

    /// A floating-point numeral (fractional component or exponent).
    Float(f64),

    /// Any token that matches none of the other variants.
    String(String),

    /// An ordered sequence of values.
    List(List),

    /// A keyed collection of values.
    Map(Dict),
}

impl Value {
    /// Returns the name of this value's variant.
    ///
    /// Used for diagnostics; never part of the wire format.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::List(items) => write!(f, "<list of {}>", items.len()),
            Self::Map(entries) => write!(f, "<map of {}>", entries.len()),
        }
    }
}

// Serialization is structural: scalars map directly, null maps to the
// format's nil, lists and maps recurse. Conversion is one-directional, so
// no Deserialize implementation is provided.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Convert a single CLI token into a typed value.
///
/// Parse attempts are tried in a fixed order and the first success wins:
///
/// 1. base-10 signed integer
/// 2. floating-point numeral
/// 3. boolean literal (`true`/`false`, case-sensitive)
/// 4. the null sentinel (`null`)
/// 5. string fallback, token unchanged
///
/// The function is pure and total: every token yields exactly one variant
/// and no token is an error. Partial matches fall through (`"42abc"` fails
/// the integer parse entirely and becomes a string).
#[must_use]
pub fn convert(token: &str) -> Value {
    if let Ok(integer) = token.parse::<i64>() {
        return Value::Integer(integer);
    }
    if let Ok(float) = token.parse::<f64>() {
        return Value::Float(float);
    }
    if let Ok(flag) = token.parse::<bool>() {
        return Value::Bool(flag);
    }
    if token == NULL_LITERAL {
        return Value::Null;
    }
    Value::String(token.to_owned())
}

/// Convert an ordered sequence of CLI tokens into an argument list.
///
/// Order is preserved. Empty input yields an empty (not absent) list; the
/// present-versus-absent distinction is applied later by
/// [`normalize_payload`].
#[must_use]
pub fn convert_list(tokens: &[String]) -> List {
    tokens.iter().map(|token| convert(token)).collect()
}

/// Convert `key=value` pairs into an argument map.
///
/// Values are converted with [`convert`]; keys stay strings. A duplicated
/// key keeps the last value supplied.
#[must_use]
pub fn convert_map(pairs: &[(String, String)]) -> Dict {
    pairs
        .iter()
        .map(|(key, value)| (key.clone(), convert(value)))
        .collect()
}

/// Apply the empty-defaulting rule to a converted payload.
///
/// Some wire encodings distinguish "field omitted" from "field present but
/// empty", and protocol conformance requires omission when the caller
/// supplied nothing. When both the argument list and the argument map are
/// empty, both become absent; when either is non-empty, both are passed
/// through as-is.
#[must_use]
pub fn normalize_payload(args: List, kwargs: Dict) -> (Option<List>, Option<Dict>) {
    if args.is_empty() && kwargs.is_empty() {
        (None, None)
    } else {
        (Some(args), Some(kwargs))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    mod convert_tests {
        use super::*;

        #[test]
        fn test_integer_wins_over_float() {
            assert_eq!(convert("42"), Value::Integer(42));
            assert_eq!(convert("-7"), Value::Integer(-7));
            assert_eq!(convert("0"), Value::Integer(0));
        }

        #[test]
        fn test_float_requires_fraction_or_exponent() {
            assert_eq!(convert("4.2"), Value::Float(4.2));
            assert_eq!(convert("-0.5"), Value::Float(-0.5));
            assert_eq!(convert("1e3"), Value::Float(1000.0));
        }

        #[test]
        fn test_boolean_literals_are_case_sensitive() {
            assert_eq!(convert("true"), Value::Bool(true));
            assert_eq!(convert("false"), Value::Bool(false));
            assert_eq!(convert("True"), Value::String("True".to_string()));
            assert_eq!(convert("FALSE"), Value::String("FALSE".to_string()));
        }

        #[test]
        fn test_null_sentinel() {
            assert_eq!(convert("null"), Value::Null);
            assert_eq!(convert("NULL"), Value::String("NULL".to_string()));
            assert_eq!(convert("nil"), Value::String("nil".to_string()));
        }

        #[test]
        fn test_partial_numeric_match_falls_through() {
            assert_eq!(convert("42abc"), Value::String("42abc".to_string()));
            assert_eq!(convert("4.2.1"), Value::String("4.2.1".to_string()));
            assert_eq!(convert("0x10"), Value::String("0x10".to_string()));
        }

        #[test]
        fn test_whitespace_is_not_trimmed() {
            assert_eq!(convert(" 42"), Value::String(" 42".to_string()));
            assert_eq!(convert("42 "), Value::String("42 ".to_string()));
        }

        #[test]
        fn test_empty_token_is_a_string() {
            assert_eq!(convert(""), Value::String(String::new()));
        }

        #[test]
        fn test_integer_overflow_becomes_float() {
            // Larger than i64::MAX, so the integer parse fails and the
            // float parse succeeds.
            let converted = convert("9223372036854775808");
            assert!(matches!(converted, Value::Float(_)));
        }
    }

    mod list_and_map_tests {
        use super::*;

        #[test]
        fn test_convert_list_preserves_order() {
            let tokens = vec![
                "arg1".to_string(),
                "42".to_string(),
                "true".to_string(),
                "null".to_string(),
            ];
            let list = convert_list(&tokens);
            assert_eq!(
                list,
                vec![
                    Value::String("arg1".to_string()),
                    Value::Integer(42),
                    Value::Bool(true),
                    Value::Null,
                ]
            );
        }

        #[test]
        fn test_convert_list_empty_yields_empty() {
            assert_eq!(convert_list(&[]), Vec::<Value>::new());
        }

        #[test]
        fn test_convert_map_converts_values() {
            let pairs = vec![
                ("retries".to_string(), "3".to_string()),
                ("mode".to_string(), "fast".to_string()),
            ];
            let map = convert_map(&pairs);
            assert_eq!(map.get("retries"), Some(&Value::Integer(3)));
            assert_eq!(map.get("mode"), Some(&Value::String("fast".to_string())));
        }

        #[test]
        fn test_convert_map_last_write_wins() {
            let pairs = vec![
                ("timeout".to_string(), "10".to_string()),
                ("timeout".to_string(), "20".to_string()),
            ];
            let map = convert_map(&pairs);
            assert_eq!(map.len(), 1);
            assert_eq!(map.get("timeout"), Some(&Value::Integer(20)));
        }

        #[test]
        fn test_map_iteration_is_deterministic() {
            let pairs = vec![
                ("zebra".to_string(), "1".to_string()),
                ("apple".to_string(), "2".to_string()),
                ("mango".to_string(), "3".to_string()),
            ];
            let map = convert_map(&pairs);
            let keys: Vec<&String> = map.keys().collect::<Vec<_>>();
            assert_eq!(keys, vec!["apple", "mango", "zebra"]);
        }
    }

    mod normalize_tests {
        use super::*;

        #[test]
        fn test_both_empty_become_absent() {
            let (args, kwargs) = normalize_payload(Vec::new(), Dict::new());
            assert!(args.is_none());
            assert!(kwargs.is_none());
        }

        #[test]
        fn test_nonempty_args_keep_both_present() {
            let (args, kwargs) = normalize_payload(vec![Value::Integer(1)], Dict::new());
            assert_eq!(args, Some(vec![Value::Integer(1)]));
            assert_eq!(kwargs, Some(Dict::new()));
        }

        #[test]
        fn test_nonempty_kwargs_keep_both_present() {
            let mut map = Dict::new();
            map.insert("k".to_string(), Value::Bool(true));
            let (args, kwargs) = normalize_payload(Vec::new(), map.clone());
            assert_eq!(args, Some(Vec::new()));
            assert_eq!(kwargs, Some(map));
        }
    }

    mod serialize_tests {
        use super::*;

        #[test]
        fn test_scalars_serialize_to_json() {
            assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
            assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
            assert_eq!(serde_json::to_string(&Value::Integer(-3)).unwrap(), "-3");
            assert_eq!(serde_json::to_string(&Value::Float(4.2)).unwrap(), "4.2");
            assert_eq!(
                serde_json::to_string(&Value::String("hi".to_string())).unwrap(),
                "\"hi\""
            );
        }

        #[test]
        fn test_nested_structure_serializes_to_json() {
            let mut map = Dict::new();
            map.insert("mode".to_string(), Value::String("fast".to_string()));
            let value = Value::List(vec![Value::Integer(1), Value::Map(map)]);
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                r#"[1,{"mode":"fast"}]"#
            );
        }

        #[test]
        fn test_type_name() {
            assert_eq!(Value::Null.type_name(), "null");
            assert_eq!(Value::Integer(1).type_name(), "integer");
            assert_eq!(Value::List(Vec::new()).type_name(), "list");
        }
    }
}
