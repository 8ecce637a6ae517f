use mcpack_nbt::Compound;

/// Data version written into new structures.
pub const DATA_VERSION: i32 = 1519;

/// A block state in a structure palette.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockState {
    /// Namespaced block id, e.g. `minecraft:stone`.
    pub name: String,
    /// Block state properties; written only when non-empty.
    pub properties: Compound,
}

impl BlockState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Compound::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .insert(key.into(), mcpack_nbt::Tag::String(value.into()));
        self
    }
}

/// A placed block: palette index plus position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub state: i32,
    pub pos: Vec<i32>,
    /// Block entity data; written only when non-empty.
    pub nbt: Compound,
}

impl Block {
    pub fn new(state: i32, pos: [i32; 3]) -> Self {
        Self {
            state,
            pos: pos.to_vec(),
            nbt: Compound::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    pub pos: Vec<f64>,
    pub block_pos: Vec<i32>,
    pub nbt: Compound,
}

/// A structure template.
#[derive(Clone, Debug, PartialEq)]
pub struct Structure {
    pub data_version: i32,
    pub author: String,
    /// Extent along x, y, z. Must hold exactly three entries.
    pub size: Vec<i32>,
    pub palette: Vec<BlockState>,
    /// Alternative palettes, one list of states each.
    pub palettes: Vec<Vec<BlockState>>,
    pub blocks: Vec<Block>,
    pub entities: Vec<Entity>,
    /// Root keys this version does not model, written back unchanged.
    pub extra: Compound,
}

impl Structure {
    pub fn new(size: [i32; 3]) -> Self {
        Self {
            size: size.to_vec(),
            ..Self::default()
        }
    }
}

impl Default for Structure {
    fn default() -> Self {
        Self {
            data_version: DATA_VERSION,
            author: String::new(),
            size: vec![0, 0, 0],
            palette: Vec::new(),
            palettes: Vec::new(),
            blocks: Vec::new(),
            entities: Vec::new(),
            extra: Compound::new(),
        }
    }
}
