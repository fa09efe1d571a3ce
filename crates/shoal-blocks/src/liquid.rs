use thiserror::Error;

use super::config::LiquidCatalog;
use super::types::{Block, BlockState};

/// Fill level of a source/full liquid block.
pub const SOURCE_LEVEL: u8 = 0;
/// Fill levels at or above this mark a falling/full liquid column.
pub const FALLING_LEVEL: u8 = 8;

/// The `level` property exists but does not parse as a non-negative integer.
/// This is corrupt upstream world data and must not be silently defaulted.
#[derive(Debug, Error)]
#[error("malformed `level` block property: {value:?}")]
pub struct MalformedLevel {
    pub value: String,
    #[source]
    pub source: std::num::ParseIntError,
}

/// Classifies blocks relative to one origin liquid.
///
/// "Same liquid" means the origin's own id, or anything waterlogged: a kelp
/// stalk inside a water column is water as far as the surface is concerned.
pub struct LiquidClassifier<'a> {
    origin: &'a BlockState,
    catalog: &'a LiquidCatalog,
}

impl<'a> LiquidClassifier<'a> {
    pub fn new(origin: &'a BlockState, catalog: &'a LiquidCatalog) -> Self {
        Self { origin, catalog }
    }

    /// True if `candidate` belongs to the origin's liquid family.
    pub fn is_same_liquid(&self, candidate: &BlockState) -> bool {
        if candidate.id() == self.origin.id() {
            return true;
        }
        self.is_waterlogged(candidate)
    }

    /// True if the state is waterlogged: either its id is in the configured
    /// always-waterlogged set, or its `waterlogged` property is `"true"`.
    pub fn is_waterlogged(&self, state: &BlockState) -> bool {
        if self.catalog.is_waterlogged_id(&state.full_id()) {
            return true;
        }
        state.property("waterlogged").unwrap_or("false") == "true"
    }

    /// Parses the `level` property; absent means [`SOURCE_LEVEL`].
    pub fn fill_level(&self, state: &BlockState) -> Result<u8, MalformedLevel> {
        match state.property("level") {
            None => Ok(SOURCE_LEVEL),
            Some(raw) => raw.parse::<u8>().map_err(|source| MalformedLevel {
                value: raw.to_string(),
                source,
            }),
        }
    }

    /// True if the block caps the height average at a corner: everything
    /// except the air family and the liquid family itself.
    pub fn blocks_height(&self, block: &Block) -> bool {
        if self.catalog.is_air_id(&block.state.full_id()) {
            return false;
        }
        !self.is_same_liquid(&block.state)
    }
}
