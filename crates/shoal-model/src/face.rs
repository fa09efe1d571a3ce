use shoal_blocks::Direction;
use shoal_geom::{Vec2, Vec3};

/// Opaque atlas index resolved by the resource pack.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// One triangle in local block space (16 units per block before scaling).
///
/// All three vertices carry the same flat color; lighting is baked per face,
/// not interpolated.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub positions: [Vec3; 3],
    pub uvs: [Vec2; 3],
    pub texture: TextureId,
    pub color: Vec3,
}

impl Face {
    pub fn new(positions: [Vec3; 3], uvs: [Vec2; 3], texture: TextureId, color: Vec3) -> Self {
        Self {
            positions,
            uvs,
            texture,
            color,
        }
    }

    #[inline]
    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    #[inline]
    pub fn scale(&mut self, factor: f32) {
        for p in &mut self.positions {
            *p = *p * factor;
        }
    }
}

/// Unit vector pointing out of the given direction.
#[inline]
pub fn axis_vector(dir: Direction) -> Vec3 {
    let (dx, dy, dz) = dir.delta();
    Vec3::new(dx as f32, dy as f32, dz as f32)
}
