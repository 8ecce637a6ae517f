//! Mapping between [`Structure`] and its binary tag compound.
//!
//! Root layout:
//!
//! ```text
//! DataVersion: Int
//! author:      String
//! size:        List<Int>  (exactly 3)
//! palette:     List<Compound{Name: String, Properties?: Compound}>
//! palettes:    List<List<Compound{...}>>
//! blocks:      List<Compound{state: Int, pos: List<Int>, nbt?: Compound}>
//! entities:    List<Compound{pos: List<Double>, blockPos: List<Int>, nbt?: Compound}>
//! ```

use mcpack_nbt::{Compound, Tag};
use mcpack_types::{Block, BlockState, Entity, ItemKind, Structure};
use tracing::debug;

use crate::error::{CodecError, CodecResult};

const KIND: ItemKind = ItemKind::Structure;

const ROOT_FIELDS: &[&str] = &[
    "DataVersion",
    "author",
    "size",
    "palette",
    "palettes",
    "blocks",
    "entities",
];

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

pub(crate) fn to_compound(structure: &Structure) -> CodecResult<Compound> {
    if structure.size.len() != 3 {
        return Err(CodecError::unencodable(
            KIND,
            format!("size must have 3 entries, got {}", structure.size.len()),
        ));
    }
    if let Some(key) = structure
        .extra
        .keys()
        .find(|k| ROOT_FIELDS.contains(&k.as_str()))
    {
        return Err(CodecError::unencodable(
            KIND,
            format!("extra key {key:?} shadows a modeled attribute"),
        ));
    }

    let mut root = structure.extra.clone();
    root.insert("DataVersion".into(), Tag::Int(structure.data_version));
    root.insert("author".into(), Tag::String(structure.author.clone()));
    root.insert("size".into(), Tag::int_list(&structure.size));
    root.insert("palette".into(), palette_tag(&structure.palette));
    root.insert(
        "palettes".into(),
        Tag::List(structure.palettes.iter().map(|p| palette_tag(p)).collect()),
    );
    root.insert(
        "blocks".into(),
        Tag::List(structure.blocks.iter().map(block_tag).collect()),
    );
    root.insert(
        "entities".into(),
        Tag::List(structure.entities.iter().map(entity_tag).collect()),
    );
    Ok(root)
}

fn palette_tag(states: &[BlockState]) -> Tag {
    Tag::List(
        states
            .iter()
            .map(|state| {
                let mut c = Compound::new();
                c.insert("Name".into(), Tag::String(state.name.clone()));
                if !state.properties.is_empty() {
                    c.insert("Properties".into(), Tag::Compound(state.properties.clone()));
                }
                Tag::Compound(c)
            })
            .collect(),
    )
}

fn block_tag(block: &Block) -> Tag {
    let mut c = Compound::new();
    c.insert("state".into(), Tag::Int(block.state));
    c.insert("pos".into(), Tag::int_list(&block.pos));
    if !block.nbt.is_empty() {
        c.insert("nbt".into(), Tag::Compound(block.nbt.clone()));
    }
    Tag::Compound(c)
}

fn entity_tag(entity: &Entity) -> Tag {
    let mut c = Compound::new();
    c.insert("pos".into(), Tag::double_list(&entity.pos));
    c.insert("blockPos".into(), Tag::int_list(&entity.block_pos));
    if !entity.nbt.is_empty() {
        c.insert("nbt".into(), Tag::Compound(entity.nbt.clone()));
    }
    Tag::Compound(c)
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

pub(crate) fn from_compound(mut root: Compound) -> CodecResult<Structure> {
    let mut structure = Structure::default();

    if let Some(tag) = root.remove("DataVersion") {
        structure.data_version = expect_int(&tag, "DataVersion")?;
    }
    if let Some(tag) = root.remove("author") {
        structure.author = expect_str(&tag, "author")?.to_string();
    }
    if let Some(tag) = root.remove("size") {
        structure.size = int_list(&tag, "size")?;
        if structure.size.len() != 3 {
            return Err(CodecError::malformed(
                KIND,
                format!("size must have 3 entries, got {}", structure.size.len()),
            ));
        }
    }
    if let Some(tag) = root.remove("palette") {
        structure.palette = palette(&tag, "palette")?;
    }
    if let Some(tag) = root.remove("palettes") {
        structure.palettes = expect_list(&tag, "palettes")?
            .iter()
            .map(|p| palette(p, "palettes[]"))
            .collect::<CodecResult<_>>()?;
    }
    if let Some(tag) = root.remove("blocks") {
        structure.blocks = expect_list(&tag, "blocks")?
            .iter()
            .map(block)
            .collect::<CodecResult<_>>()?;
    }
    if let Some(tag) = root.remove("entities") {
        structure.entities = expect_list(&tag, "entities")?
            .iter()
            .map(entity)
            .collect::<CodecResult<_>>()?;
    }

    structure.extra = root;
    Ok(structure)
}

fn palette(tag: &Tag, field: &str) -> CodecResult<Vec<BlockState>> {
    expect_list(tag, field)?
        .iter()
        .map(|entry| -> CodecResult<BlockState> {
            let c = expect_compound(entry, field)?;
            let mut state = BlockState::default();
            for (key, value) in c {
                match key.as_str() {
                    "Name" => state.name = expect_str(value, "Name")?.to_string(),
                    "Properties" => state.properties = expect_compound(value, "Properties")?.clone(),
                    other => debug!(field, key = other, "dropping unmodeled block state key"),
                }
            }
            Ok(state)
        })
        .collect()
}

fn block(tag: &Tag) -> CodecResult<Block> {
    let c = expect_compound(tag, "blocks[]")?;
    let mut block = Block::default();
    for (key, value) in c {
        match key.as_str() {
            "state" => block.state = expect_int(value, "state")?,
            "pos" => block.pos = int_list(value, "pos")?,
            "nbt" => block.nbt = expect_compound(value, "nbt")?.clone(),
            other => debug!(key = other, "dropping unmodeled block key"),
        }
    }
    Ok(block)
}

fn entity(tag: &Tag) -> CodecResult<Entity> {
    let c = expect_compound(tag, "entities[]")?;
    let mut entity = Entity::default();
    for (key, value) in c {
        match key.as_str() {
            "pos" => {
                entity.pos = expect_list(value, "pos")?
                    .iter()
                    .map(|t| {
                        t.as_double()
                            .ok_or_else(|| mismatch("pos[]", "double", t))
                    })
                    .collect::<CodecResult<_>>()?
            }
            "blockPos" => entity.block_pos = int_list(value, "blockPos")?,
            "nbt" => entity.nbt = expect_compound(value, "nbt")?.clone(),
            other => debug!(key = other, "dropping unmodeled entity key"),
        }
    }
    Ok(entity)
}

fn mismatch(field: &str, expected: &str, actual: &Tag) -> CodecError {
    CodecError::malformed(
        KIND,
        format!("{field}: expected {expected}, found {}", actual.tag_type()),
    )
}

fn expect_int(tag: &Tag, field: &str) -> CodecResult<i32> {
    tag.as_int().ok_or_else(|| mismatch(field, "int", tag))
}

fn expect_str<'a>(tag: &'a Tag, field: &str) -> CodecResult<&'a str> {
    tag.as_str().ok_or_else(|| mismatch(field, "string", tag))
}

fn expect_list<'a>(tag: &'a Tag, field: &str) -> CodecResult<&'a [Tag]> {
    tag.as_list().ok_or_else(|| mismatch(field, "list", tag))
}

fn expect_compound<'a>(tag: &'a Tag, field: &str) -> CodecResult<&'a Compound> {
    tag.as_compound().ok_or_else(|| mismatch(field, "compound", tag))
}

fn int_list(tag: &Tag, field: &str) -> CodecResult<Vec<i32>> {
    expect_list(tag, field)?
        .iter()
        .map(|t| expect_int(t, field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Structure {
        let mut command = Compound::new();
        command.insert("Command".into(), Tag::from("say hi"));

        let mut structure = Structure::new([1, 2, 1]);
        structure.author = "alex".into();
        structure.palette = vec![
            BlockState::new("minecraft:command_block"),
            BlockState::new("minecraft:stone_button").with_property("face", "floor"),
        ];
        structure.blocks = vec![
            Block {
                nbt: command,
                ..Block::new(0, [0, 0, 0])
            },
            Block::new(1, [0, 1, 0]),
        ];
        structure.entities = vec![Entity {
            pos: vec![0.5, 1.0, 0.5],
            block_pos: vec![0, 1, 0],
            nbt: Compound::new(),
        }];
        structure
    }

    #[test]
    fn compound_roundtrip() {
        let structure = sample();
        let root = to_compound(&structure).unwrap();
        assert_eq!(from_compound(root).unwrap(), structure);
    }

    #[test]
    fn empty_optional_compounds_omitted() {
        let root = to_compound(&sample()).unwrap();
        let blocks = root["blocks"].as_list().unwrap();
        assert!(blocks[0].as_compound().unwrap().contains_key("nbt"));
        assert!(!blocks[1].as_compound().unwrap().contains_key("nbt"));
        let palette = root["palette"].as_list().unwrap();
        assert!(!palette[0].as_compound().unwrap().contains_key("Properties"));
    }

    #[test]
    fn size_must_have_three_entries() {
        let structure = Structure {
            size: vec![1, 2],
            ..Structure::default()
        };
        let err = to_compound(&structure).unwrap_err();
        assert!(matches!(err, CodecError::Unencodable { .. }));
    }

    #[test]
    fn decoded_size_must_have_three_entries() {
        for size in [vec![], vec![Tag::Int(1), Tag::Int(2)], vec![Tag::Int(1); 4]] {
            let mut root = to_compound(&Structure::default()).unwrap();
            root.insert("size".into(), Tag::List(size));
            let err = from_compound(root).unwrap_err();
            assert!(matches!(err, CodecError::Malformed { .. }), "{err}");
        }
    }

    #[test]
    fn wrong_width_is_malformed() {
        let mut root = to_compound(&Structure::default()).unwrap();
        root.insert("DataVersion".into(), Tag::Long(1519));
        let err = from_compound(root).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let structure = from_compound(Compound::new()).unwrap();
        assert_eq!(structure, Structure::default());
    }

    #[test]
    fn unknown_root_keys_preserved() {
        let mut root = to_compound(&Structure::default()).unwrap();
        root.insert("Custom".into(), Tag::Byte(1));
        let structure = from_compound(root.clone()).unwrap();
        assert_eq!(structure.extra.get("Custom"), Some(&Tag::Byte(1)));
        assert_eq!(to_compound(&structure).unwrap(), root);
    }
}
