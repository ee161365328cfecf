//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

pub mod component;
pub mod craft;
pub mod cylinder;
pub mod template;

pub use component::*;
pub use craft::*;
pub use cylinder::*;
pub use template::*;

use log::warn;
use crate::common::K_MAX_VERTS;
use crate::error::{GeometryError, Result};
use crate::geometry::GeometryBuffer;

/// Concatenates buffers in order, shifting each part's indices by the
/// number of vertices emitted before it.
pub fn compose(gs: &[GeometryBuffer]) -> Result<GeometryBuffer> {
    let nv = gs.iter().map(|g| g.vertex_count()).sum::<usize>();
    let nf = gs.iter().map(|g| g.triangle_count()).sum::<usize>();
    if nv > K_MAX_VERTS { return Err(GeometryError::IndexOverflow { vertices: nv }); }

    let normals = gs.iter().all(|g| g.has_normals());
    if !normals && gs.iter().any(|g| g.has_normals()) {
        warn!("dropping normals: only some of {} parts carry them", gs.len());
    }

    let mut out = GeometryBuffer::with_capacity(nv, nf, normals);
    let mut offset = 0;
    for g in gs {
        out.positions.extend_from_slice(&g.positions);
        out.colors.extend_from_slice(&g.colors);
        if normals { out.normals.extend_from_slice(&g.normals); }
        out.indices.extend(g.indices.iter().map(|&i| (i as usize + offset) as u16));
        offset += g.vertex_count();
    }
    out.assert_consistent();
    Ok(out)
}
