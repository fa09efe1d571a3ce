use log::trace;
use thiserror::Error;

use shoal_blocks::liquid::{FALLING_LEVEL, SOURCE_LEVEL};
use shoal_blocks::{Block, BlockContext, BlockState, Direction, LiquidCatalog, LiquidClassifier};
use shoal_geom::{Vec2, Vec3};

use crate::face::{Face, TextureId, axis_vector};
use crate::model::BlockStateModel;
use crate::pack::{RenderSettings, ResourcePack};

/// Modeling units per block edge.
const BLOCK_SIZE: f32 = 16.0;
/// Resting surface height of a full, non-overflowing liquid column.
const SURFACE_HEIGHT: f32 = 14.0;
/// Surface drop per fill level.
const LEVEL_DROP: f32 = 1.9;
/// Defensive floor when a corner has no usable samples; see `corner_height`.
const FLOOR_HEIGHT: f32 = 3.0;
/// Inward face offset against z-fighting with waterlogged block models.
const FACE_INSET: f32 = 0.01;
/// Final uniform scale from modeling space to unit-block space.
const MODEL_SCALE: f32 = 1.0 / BLOCK_SIZE;

const MAX_LIGHT: f32 = 15.0;

#[derive(Debug, Error)]
pub enum LiquidModelError {
    /// The still-liquid texture is missing from the resource pack. Fatal for
    /// this block's build; no partial model is produced.
    #[error("no texture {name:?} in the resource pack")]
    NoSuchTexture { name: String },

    /// A `level` property in the sampled neighborhood failed to parse.
    #[error(transparent)]
    MalformedLevel(#[from] shoal_blocks::MalformedLevel),
}

/// Heights of the four top corners in `(0, 16]`, keyed by the horizontal
/// quadrant the corner touches: `[(-1,-1), (-1,0), (0,-1), (0,0)]` in
/// `(dx, dz)` order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeightField(pub [f32; 4]);

impl HeightField {
    #[inline]
    pub fn flat(height: f32) -> Self {
        Self([height; 4])
    }
}

/// Builds the mesh for one liquid block.
///
/// Constructed with an immutable snapshot of the origin state and three
/// read-only capabilities; `build` is called once and the builder discarded.
/// Holds no shared mutable state, so one builder per block may run on any
/// number of worker threads as long as the capabilities tolerate concurrent
/// reads.
pub struct LiquidModelBuilder<'a> {
    state: &'a BlockState,
    context: &'a dyn BlockContext,
    pack: &'a dyn ResourcePack,
    settings: &'a dyn RenderSettings,
    classifier: LiquidClassifier<'a>,
}

impl<'a> LiquidModelBuilder<'a> {
    pub fn new(
        state: &'a BlockState,
        context: &'a dyn BlockContext,
        pack: &'a dyn ResourcePack,
        settings: &'a dyn RenderSettings,
        catalog: &'a LiquidCatalog,
    ) -> Self {
        Self {
            state,
            context,
            pack,
            settings,
            classifier: LiquidClassifier::new(state, catalog),
        }
    }

    pub fn build(self) -> Result<BlockStateModel, LiquidModelError> {
        if self.settings.exclude_faces_without_sunlight()
            && self.context.relative(0, 0, 0).sky_light == 0
        {
            trace!("skipping sunless liquid block {}", self.state);
            return Ok(BlockStateModel::new());
        }

        let heights = self.height_field()?;
        self.assemble(heights)
    }

    /// Reconstructs the four top-corner heights of the surface quad.
    pub fn height_field(&self) -> Result<HeightField, LiquidModelError> {
        let level = self.classifier.fill_level(self.state)?;

        // A falling column, or a source with more liquid directly above, is
        // flush with the block above.
        if level >= FALLING_LEVEL
            || (level == SOURCE_LEVEL && self.is_liquid(&self.context.relative(0, 1, 0)))
        {
            return Ok(HeightField::flat(BLOCK_SIZE));
        }

        Ok(HeightField([
            self.corner_height(-1, 0, -1)?,
            self.corner_height(-1, 0, 0)?,
            self.corner_height(0, 0, -1)?,
            self.corner_height(0, 0, 0)?,
        ]))
    }

    /// Height of one corner, sampled over its 2x2 horizontal footprint.
    fn corner_height(&self, x: i32, y: i32, z: i32) -> Result<f32, LiquidModelError> {
        // Any liquid one level above the footprint means the column continues
        // upward and the corner is flush with it.
        for ix in x..=x + 1 {
            for iz in z..=z + 1 {
                if self.is_liquid(&self.context.relative(ix, y + 1, iz)) {
                    return Ok(BLOCK_SIZE);
                }
            }
        }

        let mut sum = 0.0f32;
        let mut count = 0u32;
        for ix in x..=x + 1 {
            for iz in z..=z + 1 {
                let block = self.context.relative(ix, y, iz);
                if self.is_liquid(&block) {
                    let level = self.classifier.fill_level(&block.state)?;
                    // An adjacent source pulls the corner to the canonical
                    // resting height.
                    if level == SOURCE_LEVEL {
                        return Ok(SURFACE_HEIGHT);
                    }
                    sum += SURFACE_HEIGHT - level as f32 * LEVEL_DROP;
                    count += 1;
                } else if !self.classifier.blocks_height(&block) {
                    // Open edge: dilutes the average without contributing.
                    count += 1;
                }
            }
        }

        // Unreachable through a consistent context (the origin cell itself is
        // liquid). Degenerate-case policy, deliberately silent.
        if sum == 0.0 || count == 0 {
            return Ok(FLOOR_HEIGHT);
        }
        Ok(sum / count as f32)
    }

    fn assemble(&self, heights: HeightField) -> Result<BlockStateModel, LiquidModelError> {
        let HeightField([h0, h1, h2, h3]) = heights;
        let c = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 16.0),
            Vec3::new(16.0, 0.0, 0.0),
            Vec3::new(16.0, 0.0, 16.0),
            Vec3::new(0.0, h0, 0.0),
            Vec3::new(0.0, h1, 16.0),
            Vec3::new(16.0, h2, 0.0),
            Vec3::new(16.0, h3, 16.0),
        ];

        let texture_name = still_texture_name(self.state.id());
        let texture =
            self.pack
                .texture_index(&texture_name)
                .ok_or_else(|| LiquidModelError::NoSuchTexture {
                    name: texture_name.clone(),
                })?;

        let tint = if self.state.id() == "water" {
            self.pack.biome_water_tint(self.context)
        } else {
            Vec3::ONE
        };
        let color = tint * self.face_light();

        let mut model = BlockStateModel::new();
        self.emit_face(&mut model, Direction::Down, c[0], c[2], c[3], c[1], color, texture);
        self.emit_face(&mut model, Direction::Up, c[5], c[7], c[6], c[4], color, texture);
        self.emit_face(&mut model, Direction::North, c[2], c[0], c[4], c[6], color, texture);
        self.emit_face(&mut model, Direction::South, c[1], c[3], c[7], c[5], color, texture);
        self.emit_face(&mut model, Direction::West, c[0], c[1], c[5], c[4], color, texture);
        self.emit_face(&mut model, Direction::East, c[3], c[2], c[6], c[7], color, texture);

        model.scale(MODEL_SCALE);

        let texture_color =
            self.pack
                .texture_color(&texture_name)
                .ok_or(LiquidModelError::NoSuchTexture {
                    name: texture_name,
                })?;
        // Map color is pre-lighting: texture average modulated by tint only.
        model.set_map_color(texture_color.mul_elem(tint.extend(1.0)));

        Ok(model)
    }

    /// Emits one quad (two triangles) unless the outward neighbor culls it.
    #[allow(clippy::too_many_arguments)]
    fn emit_face(
        &self,
        model: &mut BlockStateModel,
        dir: Direction,
        c0: Vec3,
        c1: Vec3,
        c2: Vec3,
        c3: Vec3,
        color: Vec3,
        texture: TextureId,
    ) {
        let neighbor = self.context.relative_dir(dir);
        if self.is_liquid(&neighbor) {
            return;
        }
        // The surface can peek out from under partial blocks, so the top face
        // is never opacity-culled.
        if dir != Direction::Up && neighbor.culls_neighbor_faces {
            return;
        }

        let uv = [
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
        ];
        let mut f1 = Face::new([c0, c1, c2], [uv[0], uv[1], uv[2]], texture, color);
        let mut f2 = Face::new([c0, c2, c3], [uv[0], uv[2], uv[3]], texture, color);

        // Nudge inward to avoid z-fighting with waterlogged block models.
        let inset = axis_vector(dir.opposite()) * FACE_INSET;
        f1.translate(inset);
        f2.translate(inset);

        model.add_face(f1);
        model.add_face(f2);
    }

    /// Flat light factor: the brightest of the six axis neighbors dominates,
    /// scaled by the shade multiplier. Intentionally a max, not an average.
    fn face_light(&self) -> f32 {
        let multiplier = self.settings.light_shade_multiplier();
        if multiplier <= 0.0 {
            return 1.0;
        }
        let mut light = 0.0f32;
        for dir in Direction::ALL {
            let block = self.context.relative_dir(dir);
            let level = block.block_light.max(block.sky_light) as f32 / MAX_LIGHT;
            let shaded = level * multiplier + (1.0 - multiplier);
            if shaded > light {
                light = shaded;
            }
        }
        light
    }

    #[inline]
    fn is_liquid(&self, block: &Block) -> bool {
        self.classifier.is_same_liquid(&block.state)
    }
}

/// Fixed naming convention for the still-liquid texture.
fn still_texture_name(liquid_id: &str) -> String {
    format!("block/{liquid_id}_still")
}
