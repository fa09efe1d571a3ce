//! End-to-end: mesh every liquid block of a small pond, the way an outer
//! per-column driver would.

use std::collections::HashMap;

use shoal::{
    Block, BlockContext, BlockState, LiquidCatalog, LiquidModelBuilder, RenderSettings,
    ResourcePack, TextureId, Vec3, Vec4,
};

struct World {
    blocks: HashMap<(i32, i32, i32), Block>,
}

/// View of the world centered on one block, as handed to a builder.
struct At<'a> {
    world: &'a World,
    origin: (i32, i32, i32),
}

impl BlockContext for At<'_> {
    fn relative(&self, dx: i32, dy: i32, dz: i32) -> Block {
        let (x, y, z) = self.origin;
        self.world
            .blocks
            .get(&(x + dx, y + dy, z + dz))
            .cloned()
            .unwrap_or_else(Block::air)
    }
}

struct Pack;

impl ResourcePack for Pack {
    fn texture_index(&self, name: &str) -> Option<TextureId> {
        (name == "block/water_still").then_some(TextureId(1))
    }

    fn texture_color(&self, name: &str) -> Option<Vec4> {
        (name == "block/water_still").then_some(Vec4::new(0.2, 0.3, 0.8, 1.0))
    }

    fn biome_water_tint(&self, _context: &dyn BlockContext) -> Vec3 {
        Vec3::new(0.3, 0.5, 0.9)
    }
}

struct Settings;

impl RenderSettings for Settings {
    fn exclude_faces_without_sunlight(&self) -> bool {
        false
    }

    fn light_shade_multiplier(&self) -> f32 {
        0.0
    }
}

#[test]
fn pond_blocks_mesh_within_invariants() {
    let mut blocks = HashMap::new();
    let source = BlockState::new("water").with_property("level", "0");
    let flowing = BlockState::new("water").with_property("level", "2");
    blocks.insert((0, 0, 0), Block::new(source.clone()).with_lights(0, 15));
    blocks.insert((1, 0, 0), Block::new(flowing.clone()).with_lights(0, 15));
    blocks.insert(
        (0, -1, 0),
        Block::new(BlockState::new("stone")).with_culling(true),
    );
    blocks.insert(
        (1, -1, 0),
        Block::new(BlockState::new("stone")).with_culling(true),
    );
    let world = World { blocks };
    let catalog = LiquidCatalog::default();
    let pack = Pack;
    let settings = Settings;

    for (origin, state) in [((0, 0, 0), &source), ((1, 0, 0), &flowing)] {
        let ctx = At {
            world: &world,
            origin,
        };
        let model = LiquidModelBuilder::new(state, &ctx, &pack, &settings, &catalog)
            .build()
            .unwrap();

        // Down face sits on culling stone, one side faces the other water
        // block: two of six quads culled.
        assert_eq!(model.faces().len(), 8);

        for p in model.faces().iter().flat_map(|f| f.positions.iter()) {
            assert!(p.x >= -0.001 && p.x <= 1.001);
            assert!(p.y >= -0.001 && p.y <= 1.001);
            assert!(p.z >= -0.001 && p.z <= 1.001);
        }

        // Map color: texture average times biome tint, pre-lighting.
        let mc = model.map_color();
        assert!((mc.x - 0.2 * 0.3).abs() < 1e-5);
        assert!((mc.y - 0.3 * 0.5).abs() < 1e-5);
        assert!((mc.z - 0.8 * 0.9).abs() < 1e-5);
    }

    // The flowing block leans on the source: its west rim sits at the
    // resting height, its east rim hangs lower.
    let ctx = At {
        world: &world,
        origin: (1, 0, 0),
    };
    let heights = LiquidModelBuilder::new(&flowing, &ctx, &pack, &settings, &catalog)
        .height_field()
        .unwrap()
        .0;
    assert_eq!(heights[0], 14.0);
    assert_eq!(heights[1], 14.0);
    assert!(heights[2] < 14.0);
    assert!(heights[3] < 14.0);
}
