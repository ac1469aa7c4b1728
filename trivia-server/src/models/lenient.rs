//! Integer fields that browsers may send as numeric strings
//!
//! Form controls hand back `"3"` where the API expects `3`. These helpers
//! accept either shape for id-like fields and reject everything else.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

impl IntOrText {
    fn into_i32<E: serde::de::Error>(self) -> Result<i32, E> {
        let value = match self {
            Self::Int(n) => n,
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got '{}'", s)))?,
        };
        i32::try_from(value).map_err(|_| E::custom(format!("integer {} out of range", value)))
    }
}

/// Deserialize an `i32` from a JSON integer or numeric string.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrText::deserialize(deserializer)?.into_i32()
}

/// Like [`lenient_i32`], with `null` mapping to `None`.
///
/// Pair with `#[serde(default)]` so an absent key is also `None`.
pub fn lenient_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrText>::deserialize(deserializer)?
        .map(IntOrText::into_i32)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Required {
        #[serde(deserialize_with = "lenient_i32")]
        id: i32,
    }

    #[derive(Debug, Deserialize)]
    struct Optional {
        #[serde(default, deserialize_with = "lenient_opt_i32")]
        id: Option<i32>,
    }

    #[test]
    fn accepts_integers_and_numeric_strings() {
        let r: Required = serde_json::from_value(json!({"id": 4})).unwrap();
        assert_eq!(r.id, 4);

        let r: Required = serde_json::from_value(json!({"id": " 7 "})).unwrap();
        assert_eq!(r.id, 7);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(serde_json::from_value::<Required>(json!({"id": "seven"})).is_err());
        assert!(serde_json::from_value::<Required>(json!({"id": 1.5})).is_err());
        assert!(serde_json::from_value::<Required>(json!({"id": [1]})).is_err());
        assert!(serde_json::from_value::<Required>(json!({"id": 5_000_000_000_i64})).is_err());
    }

    #[test]
    fn optional_handles_null_and_absent() {
        let o: Optional = serde_json::from_value(json!({})).unwrap();
        assert_eq!(o.id, None);

        let o: Optional = serde_json::from_value(json!({"id": null})).unwrap();
        assert_eq!(o.id, None);

        let o: Optional = serde_json::from_value(json!({"id": "2"})).unwrap();
        assert_eq!(o.id, Some(2));

        assert!(serde_json::from_value::<Optional>(json!({"id": "x"})).is_err());
    }
}
