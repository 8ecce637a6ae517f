use crate::error::{NbtError, NbtResult};
use crate::reader::MAX_DEPTH;
use crate::tag::{Compound, Tag, TagType};

/// Serializes tags into the big-endian binary format.
#[derive(Debug, Default)]
pub struct NbtWriter {
    buf: Vec<u8>,
}

impl NbtWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a complete document: the root compound under `name`.
    pub fn write_root(mut self, name: &str, root: &Compound) -> NbtResult<Vec<u8>> {
        self.buf.push(TagType::Compound.id());
        self.write_string(name)?;
        self.write_compound(root, 1)?;
        Ok(self.buf)
    }

    fn write_string(&mut self, value: &str) -> NbtResult<()> {
        let len = u16::try_from(value.len()).map_err(|_| NbtError::StringTooLong(value.len()))?;
        self.buf.extend_from_slice(&len.to_be_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    fn write_len(&mut self, len: usize, what: &'static str) -> NbtResult<()> {
        let len = i32::try_from(len).map_err(|_| NbtError::TooManyElements(what))?;
        self.buf.extend_from_slice(&len.to_be_bytes());
        Ok(())
    }

    /// Nesting is counted the same way the reader counts it, so anything
    /// written here reads back.
    fn write_compound(&mut self, compound: &Compound, depth: usize) -> NbtResult<()> {
        if depth > MAX_DEPTH {
            return Err(NbtError::NestingTooDeep(MAX_DEPTH));
        }
        for (name, tag) in compound {
            self.buf.push(tag.tag_type().id());
            self.write_string(name)?;
            self.write_payload(tag, depth)?;
        }
        self.buf.push(TagType::End.id());
        Ok(())
    }

    fn write_list(&mut self, items: &[Tag], depth: usize) -> NbtResult<()> {
        if depth + 1 > MAX_DEPTH {
            return Err(NbtError::NestingTooDeep(MAX_DEPTH));
        }
        let element = items.first().map(Tag::tag_type).unwrap_or(TagType::End);
        if let Some(odd) = items.iter().find(|t| t.tag_type() != element) {
            return Err(NbtError::HeterogeneousList {
                expected: element.name(),
                actual: odd.tag_type().name(),
            });
        }
        self.buf.push(element.id());
        self.write_len(items.len(), "list")?;
        for item in items {
            self.write_payload(item, depth + 1)?;
        }
        Ok(())
    }

    fn write_payload(&mut self, tag: &Tag, depth: usize) -> NbtResult<()> {
        match tag {
            Tag::Byte(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Tag::Short(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Tag::Int(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Tag::Long(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Tag::Float(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Tag::Double(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Tag::ByteArray(values) => {
                self.write_len(values.len(), "byte array")?;
                self.buf.extend(values.iter().map(|b| *b as u8));
            }
            Tag::String(s) => self.write_string(s)?,
            Tag::List(items) => self.write_list(items, depth)?,
            Tag::Compound(c) => self.write_compound(c, depth + 1)?,
            Tag::IntArray(values) => {
                self.write_len(values.len(), "int array")?;
                for v in values {
                    self.buf.extend_from_slice(&v.to_be_bytes());
                }
            }
            Tag::LongArray(values) => {
                self.write_len(values.len(), "long array")?;
                for v in values {
                    self.buf.extend_from_slice(&v.to_be_bytes());
                }
            }
        }
        Ok(())
    }
}
