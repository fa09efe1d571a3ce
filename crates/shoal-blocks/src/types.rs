use std::collections::BTreeMap;
use std::fmt;

/// Identity and properties of one block kind, immutable once constructed.
///
/// Properties are kept in an ordered map so that equality and iteration are
/// deterministic across builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockState {
    namespace: String,
    id: String,
    properties: BTreeMap<String, String>,
}

pub const DEFAULT_NAMESPACE: &str = "minecraft";

impl BlockState {
    /// Creates a state from a plain id (`"water"`) or a namespaced one
    /// (`"minecraft:water"`). A missing namespace defaults to `minecraft`.
    pub fn new(id: &str) -> Self {
        let (namespace, id) = match id.split_once(':') {
            Some((ns, rest)) => (ns.to_string(), rest.to_string()),
            None => (DEFAULT_NAMESPACE.to_string(), id.to_string()),
        };
        Self {
            namespace,
            id,
            properties: BTreeMap::new(),
        }
    }

    /// Adds a string property (builder style, consumed before first use).
    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Namespaced id, e.g. `minecraft:water`.
    pub fn full_id(&self) -> String {
        format!("{}:{}", self.namespace, self.id)
    }

    #[inline]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|s| s.as_str())
    }

    #[inline]
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}

/// One voxel instance: a state snapshot plus positional light data and the
/// world layer's verdict on whether this block culls adjacent faces.
///
/// The culling flag has to come from outside the core; it cannot be derived
/// from the bare state without the full model/shape catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub state: BlockState,
    /// Emitted block light, 0..=15.
    pub block_light: u8,
    /// Sky light reaching this position, 0..=15.
    pub sky_light: u8,
    /// True if this block fully occludes the faces of its neighbors.
    pub culls_neighbor_faces: bool,
}

impl Block {
    pub fn new(state: BlockState) -> Self {
        Self {
            state,
            block_light: 0,
            sky_light: 0,
            culls_neighbor_faces: false,
        }
    }

    /// The out-of-world / empty-cell sentinel: open sky above air.
    pub fn air() -> Self {
        Self {
            state: BlockState::new("air"),
            block_light: 0,
            sky_light: 15,
            culls_neighbor_faces: false,
        }
    }

    pub fn with_lights(mut self, block_light: u8, sky_light: u8) -> Self {
        self.block_light = block_light;
        self.sky_light = sky_light;
        self
    }

    pub fn with_culling(mut self, culls: bool) -> Self {
        self.culls_neighbor_faces = culls;
        self
    }
}

/// The six axis directions, in the fixed face-emission order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

/// Read-only window into the world around one implicit origin block.
///
/// Implementations must answer for at least the 3x3x3 neighborhood around the
/// origin (x,z in -1..=1, y in 0..=1 plus the six axis neighbors); positions
/// outside the world must yield [`Block::air`] rather than fail.
pub trait BlockContext {
    /// Block at the given offset relative to the origin.
    fn relative(&self, dx: i32, dy: i32, dz: i32) -> Block;

    /// Block one step in the given direction from the origin.
    fn relative_dir(&self, dir: Direction) -> Block {
        let (dx, dy, dz) = dir.delta();
        self.relative(dx, dy, dz)
    }
}
