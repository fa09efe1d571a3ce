use shoal_geom::Vec4;

use crate::face::Face;

/// The mesh fragment for one block state: an ordered face list plus one
/// representative flat color for low-detail rendering tiers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockStateModel {
    faces: Vec<Face>,
    map_color: Vec4,
}

impl BlockStateModel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[inline]
    pub fn map_color(&self) -> Vec4 {
        self.map_color
    }

    pub fn set_map_color(&mut self, color: Vec4) {
        self.map_color = color;
    }

    /// Uniformly scales every vertex position.
    pub fn scale(&mut self, factor: f32) {
        for face in &mut self.faces {
            face.scale(factor);
        }
    }
}
