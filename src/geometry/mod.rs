//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

pub mod bounds;

pub use bounds::BoundingBox;
use crate::common::{Real, Row3u, Vec3};
use crate::error::Result;

/// Flat vertex and index arrays ready to upload to a rasterizer.
///
/// `positions` holds xyz triples and `colors` rgba quadruples, one per vertex in the same order.
/// `normals` is either empty or parallel to `positions`.
/// `indices` lists triangles as consecutive triples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    pub positions: Vec<Real>,
    pub colors: Vec<Real>,
    pub normals: Vec<Real>,
    pub indices: Vec<u16>,
}

/// Anything that can produce a fresh geometry buffer.
pub trait HasGeometry {
    fn geometry(&self) -> Result<GeometryBuffer>;
}

impl GeometryBuffer {
    pub fn with_capacity(nv: usize, nf: usize, normals: bool) -> Self {
        Self {
            positions: Vec::with_capacity(nv * 3),
            colors: Vec::with_capacity(nv * 4),
            normals: Vec::with_capacity(if normals { nv * 3 } else { 0 }),
            indices: Vec::with_capacity(nf * 3),
        }
    }

    pub fn vertex_count(&self) -> usize { self.positions.len() / 3 }
    pub fn triangle_count(&self) -> usize { self.indices.len() / 3 }
    pub fn has_normals(&self) -> bool { !self.normals.is_empty() }
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Appends one vertex and returns its index.
    pub fn push_vert(&mut self, p: &Vec3, c: [Real; 4]) -> usize {
        self.positions.extend_from_slice(&[p.x, p.y, p.z]);
        self.colors.extend_from_slice(&c);
        self.vertex_count() - 1
    }

    pub fn push_normal(&mut self, n: &Vec3) {
        self.normals.extend_from_slice(&[n.x, n.y, n.z]);
    }

    pub fn push_face(&mut self, i0: usize, i1: usize, i2: usize) {
        self.indices.extend_from_slice(&[i0 as u16, i1 as u16, i2 as u16]);
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.positions[i * 3], self.positions[i * 3 + 1], self.positions[i * 3 + 2])
    }

    pub fn normal(&self, i: usize) -> Option<Vec3> {
        if !self.has_normals() { return None; }
        Some(Vec3::new(self.normals[i * 3], self.normals[i * 3 + 1], self.normals[i * 3 + 2]))
    }

    pub fn color(&self, i: usize) -> [Real; 4] {
        [self.colors[i * 4], self.colors[i * 4 + 1], self.colors[i * 4 + 2], self.colors[i * 4 + 3]]
    }

    pub fn triangles(&self) -> impl Iterator<Item = Row3u> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn translate(&mut self, offset: &Vec3) {
        for p in self.positions.chunks_exact_mut(3) {
            p[0] += offset.x;
            p[1] += offset.y;
            p[2] += offset.z;
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        let ps = (0..self.vertex_count()).map(|i| self.position(i)).collect::<Vec<_>>();
        BoundingBox::new(ps.iter())
    }

    /// Panics when the parallel-array layout is broken. A failure here means
    /// index or vertex bookkeeping upstream is wrong, not that input was bad.
    pub fn assert_consistent(&self) {
        let nv = self.vertex_count();
        assert_eq!(self.positions.len() % 3, 0, "positions are not xyz triples");
        assert_eq!(self.colors.len(), nv * 4, "colors are not parallel to positions");
        assert!(self.normals.is_empty() || self.normals.len() == self.positions.len(), "normals are not parallel to positions");
        assert_eq!(self.indices.len() % 3, 0, "indices are not triangles");
        if let Some(&i) = self.indices.iter().find(|&&i| i as usize >= nv) {
            panic!("index {i} exceeds vertex count {nv}");
        }
    }
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    fn quad() -> GeometryBuffer {
        let mut g = GeometryBuffer::default();
        g.push_vert(&Vec3::new(0., 0., 0.), [0., 0., 0., 1.]);
        g.push_vert(&Vec3::new(1., 0., 0.), [1., 0., 0., 1.]);
        g.push_vert(&Vec3::new(1., 1., 0.), [0., 1., 0., 1.]);
        g.push_vert(&Vec3::new(0., 1., 0.), [0., 0., 1., 1.]);
        g.push_face(0, 1, 2);
        g.push_face(2, 3, 0);
        g
    }

    #[test]
    fn counts_and_accessors() {
        let g = quad();
        g.assert_consistent();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.triangle_count(), 2);
        assert_eq!(g.position(2), Vec3::new(1., 1., 0.));
        assert_eq!(g.color(1), [1., 0., 0., 1.]);
        assert_eq!(g.normal(0), None);
        assert_eq!(g.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [2, 3, 0]]);
    }

    #[test]
    fn translate_moves_every_position() {
        let mut g = quad();
        g.translate(&Vec3::new(0., 0., 5.));
        assert!((0..4).all(|i| g.position(i).z == 5.));
        let b = g.bounds();
        assert_eq!(b.min, Vec3::new(0., 0., 5.));
        assert_eq!(b.max, Vec3::new(1., 1., 5.));
    }

    #[test]
    #[should_panic(expected = "exceeds vertex count")]
    fn dangling_index_panics() {
        let mut g = quad();
        g.push_face(0, 1, 4);
        g.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "colors are not parallel")]
    fn missing_color_panics() {
        let mut g = quad();
        g.positions.extend_from_slice(&[2., 2., 2.]);
        g.assert_consistent();
    }
}
