//! Facade crate for the liquid-surface mesher.
//!
//! Re-exports the block data model, geometry types, and the model builder so
//! that tile assemblers can depend on a single crate.
#![forbid(unsafe_code)]

pub use shoal_blocks::{
    Block, BlockContext, BlockState, Direction, LiquidCatalog, LiquidClassifier, LiquidsConfig,
    MalformedLevel,
};
pub use shoal_geom::{Vec2, Vec3, Vec4};
pub use shoal_model::{
    BlockStateModel, Face, HeightField, LiquidModelBuilder, LiquidModelError, RenderSettings,
    ResourcePack, TextureId,
};
