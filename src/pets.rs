//! Pet records accepted by the add endpoints.
//!
//! The three variants share one wire shape: `{"name": "...", "type": "..."}`.
//! Missing or `null` fields decode to empty strings; nothing is validated or
//! stored.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /cats/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Cat {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
}

/// Body of `POST /dogs/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Dog {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
}

/// Body of `POST /hamsters/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Hamster {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_is_renamed_on_the_wire() {
        let cat: Cat = serde_json::from_str(r#"{"name":"Tom","type":"tabby"}"#).unwrap();
        assert_eq!(cat.name, "Tom");
        assert_eq!(cat.kind, "tabby");

        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Tom", "type": "tabby"}));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let dog: Dog = serde_json::from_str("{}").unwrap();
        assert_eq!(dog, Dog::default());
    }

    #[test]
    fn null_fields_read_as_empty() {
        let cat: Cat = serde_json::from_str(r#"{"name":null,"type":"tabby"}"#).unwrap();
        assert_eq!(cat.name, "");
        assert_eq!(cat.kind, "tabby");
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Hamster>(r#"{"name":42}"#).is_err());
    }
}
