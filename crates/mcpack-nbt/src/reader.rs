use crate::error::{NbtError, NbtResult};
use crate::tag::{Compound, Tag, TagType};

/// Maximum compound/list nesting, root included. Enforced by both the
/// reader and the writer; the recursion stays well inside a 2 MiB stack.
pub const MAX_DEPTH: usize = 128;

/// Parses the big-endian binary format from an uncompressed byte slice.
#[derive(Debug)]
pub struct NbtReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> NbtReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read a complete document. Returns the root name and compound.
    ///
    /// The root must be a compound and must consume the whole input.
    pub fn read_root(mut self) -> NbtResult<(String, Compound)> {
        let type_id = self.read_u8()?;
        let ty = self.tag_type(type_id)?;
        if ty != TagType::Compound {
            return Err(NbtError::RootNotCompound(ty.name()));
        }
        let name = self.read_string()?;
        let root = self.read_compound(1)?;
        let rest = self.data.len() - self.pos;
        if rest > 0 {
            return Err(NbtError::TrailingBytes(rest));
        }
        Ok((name, root))
    }

    fn take(&mut self, n: usize) -> NbtResult<&'a [u8]> {
        let available = self.data.len() - self.pos;
        if n > available {
            return Err(NbtError::Truncated {
                offset: self.pos,
                needed: n - available,
            });
        }
        let data = self.data;
        let slice = &data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> NbtResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn read_u8(&mut self) -> NbtResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn tag_type(&self, type_id: u8) -> NbtResult<TagType> {
        TagType::from_id(type_id).ok_or(NbtError::UnknownTagType {
            type_id,
            offset: self.pos.saturating_sub(1),
        })
    }

    fn read_len(&mut self) -> NbtResult<usize> {
        let offset = self.pos;
        let length = i32::from_be_bytes(self.take_array()?);
        if length < 0 {
            return Err(NbtError::NegativeLength { length, offset });
        }
        Ok(length as usize)
    }

    fn read_string(&mut self) -> NbtResult<String> {
        let len = u16::from_be_bytes(self.take_array()?) as usize;
        let offset = self.pos;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| NbtError::InvalidString { offset })
    }

    fn read_compound(&mut self, depth: usize) -> NbtResult<Compound> {
        if depth > MAX_DEPTH {
            return Err(NbtError::TooDeep(MAX_DEPTH));
        }
        let mut compound = Compound::new();
        loop {
            let type_id = self.read_u8()?;
            let ty = self.tag_type(type_id)?;
            if ty == TagType::End {
                return Ok(compound);
            }
            let name = self.read_string()?;
            let tag = self.read_payload(ty, depth)?;
            compound.insert(name, tag);
        }
    }

    fn read_payload(&mut self, ty: TagType, depth: usize) -> NbtResult<Tag> {
        let tag = match ty {
            TagType::End => {
                return Err(NbtError::UnknownTagType {
                    type_id: 0,
                    offset: self.pos,
                })
            }
            TagType::Byte => Tag::Byte(i8::from_be_bytes(self.take_array()?)),
            TagType::Short => Tag::Short(i16::from_be_bytes(self.take_array()?)),
            TagType::Int => Tag::Int(i32::from_be_bytes(self.take_array()?)),
            TagType::Long => Tag::Long(i64::from_be_bytes(self.take_array()?)),
            TagType::Float => Tag::Float(f32::from_be_bytes(self.take_array()?)),
            TagType::Double => Tag::Double(f64::from_be_bytes(self.take_array()?)),
            TagType::ByteArray => {
                let len = self.read_len()?;
                Tag::ByteArray(self.take(len)?.iter().map(|b| *b as i8).collect())
            }
            TagType::String => Tag::String(self.read_string()?),
            TagType::List => {
                if depth + 1 > MAX_DEPTH {
                    return Err(NbtError::TooDeep(MAX_DEPTH));
                }
                let element_id = self.read_u8()?;
                let element = self.tag_type(element_id)?;
                let len = self.read_len()?;
                if element == TagType::End && len > 0 {
                    return Err(NbtError::UnknownTagType {
                        type_id: 0,
                        offset: self.pos,
                    });
                }
                // Bound the reservation by what the input could possibly hold.
                let mut items = Vec::with_capacity(len.min(self.data.len() - self.pos));
                for _ in 0..len {
                    items.push(self.read_payload(element, depth + 1)?);
                }
                Tag::List(items)
            }
            TagType::Compound => Tag::Compound(self.read_compound(depth + 1)?),
            TagType::IntArray => {
                let len = self.read_len()?;
                let bytes = self.take(len.saturating_mul(4))?;
                Tag::IntArray(
                    bytes
                        .chunks_exact(4)
                        .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                )
            }
            TagType::LongArray => {
                let len = self.read_len()?;
                let bytes = self.take(len.saturating_mul(8))?;
                Tag::LongArray(
                    bytes
                        .chunks_exact(8)
                        .map(|c| {
                            let mut arr = [0u8; 8];
                            arr.copy_from_slice(c);
                            i64::from_be_bytes(arr)
                        })
                        .collect(),
                )
            }
        };
        Ok(tag)
    }
}
