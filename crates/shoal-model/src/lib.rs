//! Liquid-surface mesh generation.
//!
//! Turns one liquid block plus a window of its neighbors into a small
//! triangle mesh with a representative flat color for low-detail tiles.
#![forbid(unsafe_code)]

pub mod face;
pub mod liquid;
pub mod model;
pub mod pack;

pub use face::{Face, TextureId};
pub use liquid::{HeightField, LiquidModelBuilder, LiquidModelError};
pub use model::BlockStateModel;
pub use pack::{RenderSettings, ResourcePack};
