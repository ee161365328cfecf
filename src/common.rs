//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use nalgebra::RowVector3;

pub type Real = f32;
pub type Vec3 = RowVector3<Real>;
pub type Row3u = [u16; 3];

/// Edge count used when a caller does not pick one.
pub const K_DEFAULT_EDGE_COUNT: usize = 12;
pub const K_MIN_EDGE_COUNT: usize = 3;
/// Upper bound on vertices a 16-bit index buffer can address.
pub const K_MAX_VERTS: usize = u16::MAX as usize + 1;
pub const K_PRECISION: Real = 1e-6;

pub const BLACK: [Real; 4] = [0., 0., 0., 1.];
pub const WHITE: [Real; 4] = [1., 1., 1., 1.];

pub fn gray(level: Real) -> [Real; 4] { [level, level, level, 1.] }

/// Vertex count of a capped cylinder with `n` edges, saturating at `usize::MAX`.
pub fn cylinder_vert_count(n: usize) -> usize { n.saturating_mul(6).saturating_add(2) }

/// Triangle count of a capped cylinder with `n` edges.
pub fn cylinder_face_count(n: usize) -> usize { n.saturating_mul(4) }

pub fn safe_normalize(v: Vec3) -> Vec3 {
    let l = v.norm();
    if l.is_finite() && l > K_PRECISION { v / l } else { Vec3::zeros() }
}

pub fn face_normal(p0: &Vec3, p1: &Vec3, p2: &Vec3) -> Vec3 {
    safe_normalize((p1 - p0).cross(&(p2 - p0)))
}

pub fn next_of(i: usize, n: usize) -> usize { (i + 1) % n }
