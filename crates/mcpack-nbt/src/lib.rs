//! Binary tag format for mcpack.
//!
//! The typed, length-prefixed document format used for structure files.
//!
//! # Architecture
//!
//! - **Tag** (`tag`): typed values; integer width and signedness are part of
//!   the variant, never inferred from the numeric value
//! - **NbtWriter**: big-endian serializer, rejects values the format cannot hold
//! - **NbtReader**: bounds-checked parser with a nesting limit
//! - **NbtFile**: root name + compound + gzip framing

pub mod error;
pub mod file;
pub mod reader;
pub mod tag;
pub mod writer;

pub use error::{NbtError, NbtResult};
pub use file::{Compression, NbtFile};
pub use reader::{NbtReader, MAX_DEPTH};
pub use tag::{Compound, Tag, TagType};
pub use writer::NbtWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf() -> impl Strategy<Value = Tag> {
        prop_oneof![
            any::<i8>().prop_map(Tag::Byte),
            any::<i16>().prop_map(Tag::Short),
            any::<i32>().prop_map(Tag::Int),
            any::<i64>().prop_map(Tag::Long),
            (-1.0e6f32..1.0e6).prop_map(Tag::Float),
            (-1.0e12f64..1.0e12).prop_map(Tag::Double),
            "[a-zA-Z0-9 _:]{0,24}".prop_map(Tag::String),
            prop::collection::vec(any::<i8>(), 0..8).prop_map(Tag::ByteArray),
            prop::collection::vec(any::<i32>(), 0..8).prop_map(Tag::IntArray),
            prop::collection::vec(any::<i64>(), 0..8).prop_map(Tag::LongArray),
        ]
    }

    fn tag() -> impl Strategy<Value = Tag> {
        leaf().prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(Tag::Compound),
                prop::collection::vec(any::<i32>(), 0..6).prop_map(|v| Tag::int_list(&v)),
            ]
        })
    }

    proptest! {
        #[test]
        fn document_roundtrip_preserves_widths(
            root in prop::collection::btree_map("[a-zA-Z]{1,8}", tag(), 0..8)
        ) {
            let file = NbtFile::new(root).with_compression(Compression::None);
            let decoded = NbtFile::from_bytes(&file.to_bytes().unwrap()).unwrap();
            prop_assert_eq!(decoded.root, file.root);
        }

        #[test]
        fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..64)) {
            let _ = NbtReader::new(&data).read_root();
        }
    }

    #[test]
    fn structure_shaped_document() {
        let mut state = Compound::new();
        state.insert("Name".into(), Tag::from("minecraft:stone"));

        let mut root = Compound::new();
        root.insert("DataVersion".into(), Tag::Int(1519));
        root.insert("size".into(), Tag::int_list(&[1, 2, 3]));
        root.insert("palette".into(), Tag::List(vec![Tag::Compound(state)]));

        let bytes = NbtFile::new(root.clone()).to_bytes().unwrap();
        let decoded = NbtFile::from_bytes(&bytes).unwrap().root;

        let size = decoded["size"].as_list().unwrap();
        assert_eq!(size, &[Tag::Int(1), Tag::Int(2), Tag::Int(3)]);
        assert_eq!(decoded["DataVersion"].tag_type(), TagType::Int);
        assert_eq!(decoded, root);
    }
}
