use shoal_blocks::BlockContext;
use shoal_geom::{Vec3, Vec4};

use crate::face::TextureId;

/// Per-build render options, immutable for the duration of one build.
pub trait RenderSettings {
    /// Skip blocks that receive no sky light at all (cave culling).
    fn exclude_faces_without_sunlight(&self) -> bool;

    /// Strength of the neighbor-light shading, in `[0, 1]`. Zero disables
    /// shading entirely.
    fn light_shade_multiplier(&self) -> f32;
}

/// Texture and tint resolution, backed by a loaded resource pack.
pub trait ResourcePack {
    /// Atlas index for a texture name such as `block/water_still`.
    fn texture_index(&self, name: &str) -> Option<TextureId>;

    /// Representative average color of the texture, RGBA.
    fn texture_color(&self, name: &str) -> Option<Vec4>;

    /// Biome-averaged water tint around the context's origin block.
    fn biome_water_tint(&self, context: &dyn BlockContext) -> Vec3;
}
