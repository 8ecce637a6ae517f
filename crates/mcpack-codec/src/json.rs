//! Structured JSON strategy.
//!
//! Every attribute that is not `None` is written. Absent keys and explicit
//! nulls decode to the attribute's default. Unrecognized keys are kept in the
//! item's `extra` map and written back after the modeled attributes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use mcpack_types::{ItemKind, JsonObject, Recipe};

use crate::error::{CodecError, CodecResult};

/// Encode a JSON item, pretty-printed with `indent` spaces.
pub(crate) fn encode<T: Serialize>(
    kind: ItemKind,
    item: &T,
    extra: &JsonObject,
    fields: &[&str],
    indent: usize,
) -> CodecResult<Vec<u8>> {
    if let Some(key) = extra.keys().find(|k| fields.contains(&k.as_str())) {
        return Err(CodecError::unencodable(
            kind,
            format!("extra key {key:?} shadows a modeled attribute"),
        ));
    }
    let value =
        serde_json::to_value(item).map_err(|e| CodecError::unencodable(kind, e.to_string()))?;
    write_pretty(&value, indent).map_err(|e| CodecError::unencodable(kind, e.to_string()))
}

/// Recipe-specific schema checks, then the generic encoder.
pub(crate) fn encode_recipe(recipe: &Recipe, indent: usize) -> CodecResult<Vec<u8>> {
    let kind = ItemKind::Recipe;
    if !(recipe.result.is_object() || recipe.result.is_string()) {
        return Err(CodecError::unencodable(
            kind,
            "result must be an object or a string",
        ));
    }
    if let Some(xp) = recipe.experience {
        if !xp.is_finite() {
            return Err(CodecError::unencodable(
                kind,
                format!("experience must be finite, got {xp}"),
            ));
        }
    }
    encode(kind, recipe, &recipe.extra, Recipe::FIELDS, indent)
}

/// Decode a JSON item. The document root must be an object.
pub(crate) fn decode<T: DeserializeOwned>(kind: ItemKind, data: &[u8]) -> CodecResult<T> {
    let value: Value =
        serde_json::from_slice(data).map_err(|e| CodecError::malformed(kind, e.to_string()))?;
    if !value.is_object() {
        return Err(CodecError::malformed(
            kind,
            format!("root must be an object, got {}", json_type_name(&value)),
        ));
    }
    serde_json::from_value(value).map_err(|e| CodecError::malformed(kind, e.to_string()))
}

/// Serialize any value with a configurable indent width.
pub fn write_pretty<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpack_types::{Advancement, TagItem};
    use serde_json::json;

    #[test]
    fn four_space_indent() {
        let out = write_pretty(&json!({"a": 1}), 4).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn array_root_rejected() {
        let err = decode::<TagItem>(ItemKind::BlockTag, b"[1, 2]").unwrap_err();
        assert!(matches!(err, CodecError::Malformed { kind: ItemKind::BlockTag, .. }));
    }

    #[test]
    fn invalid_syntax_rejected() {
        let err = decode::<Advancement>(ItemKind::Advancement, b"{\"criteria\": ").unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
    }

    #[test]
    fn wrong_field_type_rejected() {
        let err = decode::<TagItem>(ItemKind::ItemTag, br#"{"values": 3}"#).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
    }

    #[test]
    fn shadowing_extra_rejected() {
        let mut tag = TagItem::new(["a:b"]);
        tag.extra.insert("values".into(), json!([]));
        let err = encode(ItemKind::BlockTag, &tag, &tag.extra, TagItem::FIELDS, 4).unwrap_err();
        assert!(matches!(err, CodecError::Unencodable { .. }));
    }

    #[test]
    fn recipe_result_type_checked() {
        let recipe = Recipe {
            result: json!(42),
            ..Recipe::default()
        };
        let err = encode_recipe(&recipe, 4).unwrap_err();
        assert!(matches!(err, CodecError::Unencodable { kind: ItemKind::Recipe, .. }));
    }

    #[test]
    fn recipe_experience_must_be_finite() {
        let recipe = Recipe {
            experience: Some(f64::NAN),
            ..Recipe::default()
        };
        assert!(encode_recipe(&recipe, 4).is_err());
    }

    #[test]
    fn recipe_string_result_accepted() {
        let recipe = Recipe {
            recipe_type: "stonecutting".into(),
            result: json!("minecraft:stone_slab"),
            count: Some(2),
            ..Recipe::default()
        };
        let bytes = encode_recipe(&recipe, 2).unwrap();
        let back: Recipe = decode(ItemKind::Recipe, &bytes).unwrap();
        assert_eq!(back, recipe);
    }
}
