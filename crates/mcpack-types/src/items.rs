use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// JSON object attribute.
pub type JsonObject = Map<String, Value>;

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_object<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Value::Object(JsonObject::new())),
        other => Ok(other),
    }
}

/// `type` of a loot table that omits it.
pub const DEFAULT_LOOT_TABLE_TYPE: &str = "generic";
/// `type` of a recipe that omits it.
pub const DEFAULT_RECIPE_TYPE: &str = "crafting_shaped";

fn null_as_loot_table_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .unwrap_or_else(|| DEFAULT_LOOT_TABLE_TYPE.into()))
}

fn null_as_recipe_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| DEFAULT_RECIPE_TYPE.into()))
}

// ---------------------------------------------------------------------------
// Advancement
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Advancement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub criteria: JsonObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<JsonObject>,
    /// Keys this version does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Advancement {
    /// Keys modeled by this struct.
    pub const FIELDS: &'static [&'static str] =
        &["display", "parent", "criteria", "requirements", "rewards"];
}

impl Default for Advancement {
    fn default() -> Self {
        Self {
            display: None,
            parent: None,
            criteria: JsonObject::new(),
            requirements: None,
            rewards: None,
            extra: JsonObject::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Function
// ---------------------------------------------------------------------------

/// A command function. Stored on disk as its raw body text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Function {
    pub body: String,
}

impl Function {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

// ---------------------------------------------------------------------------
// LootTable
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LootTable {
    #[serde(deserialize_with = "null_as_default")]
    pub pools: Vec<Value>,
    #[serde(rename = "type", deserialize_with = "null_as_loot_table_type")]
    pub table_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl LootTable {
    pub const FIELDS: &'static [&'static str] = &["pools", "type", "functions"];

    pub fn new(pools: Vec<Value>) -> Self {
        Self {
            pools,
            ..Self::default()
        }
    }
}

impl Default for LootTable {
    fn default() -> Self {
        Self {
            pools: Vec::new(),
            table_type: DEFAULT_LOOT_TABLE_TYPE.into(),
            functions: None,
            extra: JsonObject::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    #[serde(rename = "type", deserialize_with = "null_as_recipe_type")]
    pub recipe_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pattern: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub key: JsonObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Value>>,
    /// Either an item object or a bare item id string.
    #[serde(deserialize_with = "null_as_empty_object")]
    pub result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookingtime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Recipe {
    pub const FIELDS: &'static [&'static str] = &[
        "type",
        "group",
        "pattern",
        "key",
        "ingredient",
        "ingredients",
        "result",
        "experience",
        "cookingtime",
        "count",
    ];
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            recipe_type: DEFAULT_RECIPE_TYPE.into(),
            group: None,
            pattern: Vec::new(),
            key: JsonObject::new(),
            ingredient: None,
            ingredients: None,
            result: Value::Object(JsonObject::new()),
            experience: None,
            cookingtime: None,
            count: None,
            extra: JsonObject::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Attributes shared by block, item, fluid and function tags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagItem {
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub replace: bool,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl TagItem {
    pub const FIELDS: &'static [&'static str] = &["values", "replace"];

    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn replacing(mut self) -> Self {
        self.replace = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loot_table_defaults() {
        let table = LootTable::default();
        assert_eq!(table.table_type, "generic");
        assert!(table.pools.is_empty());
        assert!(table.functions.is_none());
    }

    #[test]
    fn recipe_defaults() {
        let recipe = Recipe::default();
        assert_eq!(recipe.recipe_type, "crafting_shaped");
        assert_eq!(recipe.result, json!({}));
        assert!(recipe.count.is_none());
    }

    #[test]
    fn absent_fields_take_defaults() {
        let recipe: Recipe = serde_json::from_value(json!({"type": "smelting"})).unwrap();
        assert_eq!(recipe.recipe_type, "smelting");
        assert!(recipe.pattern.is_empty());
        assert_eq!(recipe.result, json!({}));
    }

    #[test]
    fn explicit_nulls_accepted() {
        let adv: Advancement = serde_json::from_value(json!({
            "parent": null,
            "criteria": null,
            "rewards": null,
        }))
        .unwrap();
        assert_eq!(adv, Advancement::default());
    }

    #[test]
    fn null_loot_table_type_is_generic() {
        let table: LootTable = serde_json::from_value(json!({"type": null, "pools": []})).unwrap();
        assert_eq!(table.table_type, "generic");
        assert_eq!(table, LootTable::default());
    }

    #[test]
    fn null_recipe_type_is_crafting_shaped() {
        let recipe: Recipe =
            serde_json::from_value(json!({"type": null, "result": "minecraft:stick"})).unwrap();
        assert_eq!(recipe.recipe_type, "crafting_shaped");
        assert_eq!(recipe.result, json!("minecraft:stick"));
    }

    #[test]
    fn none_fields_omitted() {
        let value = serde_json::to_value(Advancement::default()).unwrap();
        assert_eq!(value, json!({"criteria": {}}));
    }

    #[test]
    fn unknown_keys_preserved() {
        let input = json!({"values": ["minecraft:stone"], "required": false});
        let tag: TagItem = serde_json::from_value(input).unwrap();
        assert_eq!(tag.extra.get("required"), Some(&json!(false)));
        let back = serde_json::to_value(&tag).unwrap();
        assert_eq!(back, json!({"values": ["minecraft:stone"], "replace": false, "required": false}));
    }

    #[test]
    fn tag_builder() {
        let tag = TagItem::new(["a:b", "c:d"]).replacing();
        assert_eq!(tag.values, vec!["a:b", "c:d"]);
        assert!(tag.replace);
    }
}
