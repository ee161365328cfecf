//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use std::f64::consts::TAU;
use log::{debug, warn};
use crate::common::*;
use crate::compose::template::UnitCylinderTemplate;
use crate::error::{GeometryError, Result};
use crate::geometry::{GeometryBuffer, HasGeometry};

/// Capped cylinder, or frustum when the radii differ.
/// The bottom center sits at the origin and the body extends along +z.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderSpec {
    pub height: Real,
    pub radius_bottom: Real,
    pub radius_top: Real,
    pub edge_count: usize,
    pub normals: bool,
}

impl CylinderSpec {
    pub fn new(height: Real, radius: Real) -> Self {
        Self {
            height,
            radius_bottom: radius,
            radius_top: radius,
            edge_count: K_DEFAULT_EDGE_COUNT,
            normals: false,
        }
    }

    pub fn frustum(height: Real, radius_bottom: Real, radius_top: Real) -> Self {
        Self { radius_top, ..Self::new(height, radius_bottom) }
    }

    pub fn with_edge_count(mut self, n: usize) -> Self { self.edge_count = n; self }
    pub fn with_normals(mut self, on: bool) -> Self { self.normals = on; self }

    pub fn vertex_count(&self) -> usize { cylinder_vert_count(self.edge_count) }
    pub fn triangle_count(&self) -> usize { cylinder_face_count(self.edge_count) }

    pub fn validate(&self) -> Result<()> {
        if self.edge_count < K_MIN_EDGE_COUNT {
            return Err(GeometryError::InvalidEdgeCount(self.edge_count));
        }
        if self.vertex_count() > K_MAX_VERTS {
            return Err(GeometryError::IndexOverflow { vertices: self.vertex_count() });
        }
        for (name, v) in [
            ("height", self.height),
            ("radius_bottom", self.radius_bottom),
            ("radius_top", self.radius_top),
        ] {
            if !v.is_finite() || v < 0. {
                return Err(GeometryError::InvalidDimension { name, value: v as f64 });
            }
            if v == 0. { warn!("cylinder {name} is zero, geometry will be degenerate"); }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<GeometryBuffer> {
        self.validate()?;
        let n = self.edge_count;
        let local;
        let tpl = if n == K_DEFAULT_EDGE_COUNT {
            UnitCylinderTemplate::shared()
        } else {
            local = UnitCylinderTemplate::new(n);
            &local
        };

        let sb = Vec3::new(self.radius_bottom, self.radius_bottom, 0.);
        let st = Vec3::new(self.radius_top, self.radius_top, self.height);
        let bs = tpl.bottom.iter().map(|p| p.component_mul(&sb)).collect::<Vec<_>>();
        let ts = tpl.top.iter().map(|p| p.component_mul(&st)).collect::<Vec<_>>();
        let bc = tpl.bottom_center.component_mul(&sb);
        let tc = tpl.top_center.component_mul(&st);

        let mut g = GeometryBuffer::with_capacity(self.vertex_count(), self.triangle_count(), self.normals);

        // caps share their center, perimeter gets its own copy per cap
        let ibc = g.push_vert(&bc, BLACK);
        for (i, p) in bs.iter().enumerate() { g.push_vert(p, gray((tpl.theta(i) / TAU) as Real)); }
        let itc = g.push_vert(&tc, BLACK);
        for (i, p) in ts.iter().enumerate() { g.push_vert(p, gray((tpl.theta(i) / TAU) as Real)); }

        if self.normals {
            let down = Vec3::new(0., 0., -1.);
            let up = Vec3::new(0., 0., 1.);
            for _ in 0..=n { g.push_normal(&down); }
            for _ in 0..=n { g.push_normal(&up); }
        }

        for i in 0..n {
            let j = next_of(i, n);
            g.push_face(ibc, ibc + 1 + j, ibc + 1 + i);
        }
        for i in 0..n {
            let j = next_of(i, n);
            g.push_face(itc, itc + 1 + i, itc + 1 + j);
        }

        // side quads: b_i, t_i, b_j, t_j
        for i in 0..n {
            let j = next_of(i, n);
            let s0 = g.push_vert(&bs[i], BLACK);
            let s1 = g.push_vert(&ts[i], BLACK);
            let s2 = g.push_vert(&bs[j], WHITE);
            let s3 = g.push_vert(&ts[j], WHITE);
            g.push_face(s0, s2, s3);
            g.push_face(s0, s3, s1);
            if self.normals {
                let nm = side_normal(&bs[i], &ts[i], &bs[j], &ts[j]);
                for _ in 0..4 { g.push_normal(&nm); }
            }
        }

        debug!("cylinder h={} rb={} rt={} n={}: {} verts, {} tris",
            self.height, self.radius_bottom, self.radius_top, n, g.vertex_count(), g.triangle_count());
        debug_assert_eq!(g.vertex_count(), self.vertex_count());
        debug_assert_eq!(g.triangle_count(), self.triangle_count());
        g.assert_consistent();
        Ok(g)
    }
}

impl HasGeometry for CylinderSpec {
    fn geometry(&self) -> Result<GeometryBuffer> { self.build() }
}

// One of the two triangles collapses when an end radius is zero.
fn side_normal(b0: &Vec3, t0: &Vec3, b1: &Vec3, t1: &Vec3) -> Vec3 {
    let n = face_normal(b0, b1, t1);
    if n != Vec3::zeros() { n } else { face_normal(b0, t1, t0) }
}

/// Builds a capped cylinder of `height` along +z with the given end radii.
pub fn build_cylinder(
    height: Real,
    radius_bottom: Real,
    radius_top: Real,
    edge_count: usize,
) -> Result<GeometryBuffer> {
    CylinderSpec::frustum(height, radius_bottom, radius_top)
        .with_edge_count(edge_count)
        .build()
}

#[cfg(test)]
mod cylinder_tests {
    use super::*;

    fn tri_normal(g: &GeometryBuffer, t: Row3u) -> Vec3 {
        let [a, b, c] = t.map(|i| g.position(i as usize));
        (b - a).cross(&(c - a))
    }

    #[test]
    fn default_cylinder_counts() {
        let g = CylinderSpec::new(2., 1.).build().unwrap();
        assert_eq!(g.vertex_count(), 74);
        assert_eq!(g.triangle_count(), 48);
        assert_eq!(g.colors.len(), 74 * 4);
        assert!(g.normals.is_empty());
    }

    #[test]
    fn frustum_scenario() {
        let g = build_cylinder(1., 1., 0.25, 12).unwrap();
        assert_eq!(g.vertex_count(), 74);
        assert_eq!(g.triangle_count(), 48);
        assert!(g.indices.iter().all(|&i| (i as usize) < 74));
        // top perimeter sample 0 at (rt, 0, h)
        assert!((g.position(14) - Vec3::new(0.25, 0., 1.)).norm() < 1e-6);
        assert!((g.position(1) - Vec3::new(1., 0., 0.)).norm() < 1e-6);
        assert_eq!(g.position(13), Vec3::new(0., 0., 1.));
    }

    #[test]
    fn layout_groups() {
        let n = 5;
        let g = build_cylinder(3., 2., 1., n).unwrap();
        assert_eq!(g.position(0), Vec3::zeros());
        for i in 1..=n { assert_eq!(g.position(i).z, 0.); }
        assert_eq!(g.position(n + 1), Vec3::new(0., 0., 3.));
        for i in n + 2..2 * n + 2 { assert_eq!(g.position(i).z, 3.); }
        // each side face repeats its bounding perimeter points
        for i in 0..n {
            let j = (i + 1) % n;
            let s = 2 * n + 2 + i * 4;
            assert_eq!(g.position(s), g.position(1 + i));
            assert_eq!(g.position(s + 1), g.position(n + 2 + i));
            assert_eq!(g.position(s + 2), g.position(1 + j));
            assert_eq!(g.position(s + 3), g.position(n + 2 + j));
        }
    }

    #[test]
    fn side_faces_use_own_copies() {
        let n = 6;
        let g = build_cylinder(1., 1., 1., n).unwrap();
        let first_side = 2 * n + 2;
        for (f, t) in g.triangles().enumerate() {
            let is_side = f >= 2 * n;
            assert!(t.iter().all(|&i| (i as usize >= first_side) == is_side));
        }
    }

    #[test]
    fn caps_wind_opposite_and_sides_face_out() {
        let n = 12;
        let g = build_cylinder(2., 1., 0.5, n).unwrap();
        let ts = g.triangles().collect::<Vec<_>>();
        for t in &ts[..n] { assert!(tri_normal(&g, *t).z < 0.); }
        for t in &ts[n..2 * n] { assert!(tri_normal(&g, *t).z > 0.); }
        for t in &ts[2 * n..] {
            let c = t.iter().fold(Vec3::zeros(), |acc, &i| acc + g.position(i as usize)) / 3.;
            let radial = Vec3::new(c.x, c.y, 0.);
            assert!(tri_normal(&g, *t).dot(&radial) > 0.);
        }
    }

    #[test]
    fn colors() {
        let n = 4;
        let g = build_cylinder(1., 1., 1., n).unwrap();
        assert_eq!(g.color(0), BLACK);
        assert_eq!(g.color(n + 1), BLACK);
        assert_eq!(g.color(1), gray(0.));
        assert_eq!(g.color(3), gray(0.5));
        let s = 2 * n + 2;
        assert_eq!(g.color(s), BLACK);
        assert_eq!(g.color(s + 1), BLACK);
        assert_eq!(g.color(s + 2), WHITE);
        assert_eq!(g.color(s + 3), WHITE);
    }

    #[test]
    fn flat_normals() {
        let n = 8;
        let g = CylinderSpec::new(1., 1.).with_edge_count(n).with_normals(true).build().unwrap();
        assert_eq!(g.normals.len(), g.positions.len());
        assert_eq!(g.normal(0), Some(Vec3::new(0., 0., -1.)));
        assert_eq!(g.normal(n), Some(Vec3::new(0., 0., -1.)));
        assert_eq!(g.normal(n + 1), Some(Vec3::new(0., 0., 1.)));
        for i in 0..n {
            let s = 2 * n + 2 + i * 4;
            let nm = g.normal(s).unwrap();
            assert!(nm.z.abs() < 1e-6);
            assert!((nm.norm() - 1.).abs() < 1e-5);
            for k in 1..4 { assert_eq!(g.normal(s + k), Some(nm)); }
        }
    }

    #[test]
    fn cone_normals_stay_finite() {
        for (rb, rt) in [(1., 0.), (0., 1.)] {
            let g = CylinderSpec::frustum(1., rb, rt).with_normals(true).build().unwrap();
            for i in 26..g.vertex_count() {
                let nm = g.normal(i).unwrap();
                assert!((nm.norm() - 1.).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn cone_keeps_top_slots() {
        let n = 10;
        let g = build_cylinder(2., 1., 0., n).unwrap();
        assert_eq!(g.vertex_count(), 2 + 6 * n);
        for i in n + 2..2 * n + 2 { assert_eq!(g.position(i), Vec3::new(0., 0., 2.)); }
    }

    #[test]
    fn degenerate_radius_is_accepted() {
        let n = 3;
        let g = build_cylinder(1., 0., 0., n).unwrap();
        assert_eq!(g.vertex_count(), 20);
        assert!((0..g.vertex_count()).all(|i| { let p = g.position(i); p.x == 0. && p.y == 0. }));
    }

    #[test]
    fn zero_height_is_accepted() {
        let n = 9;
        let g = build_cylinder(0., 1., 0.5, n).unwrap();
        assert_eq!(g.vertex_count(), 2 + 6 * n);
        assert_eq!(g.triangle_count(), 4 * n);
        for i in n + 1..2 * n + 2 { assert_eq!(g.position(i).z, 0.); }
        assert!((0..g.vertex_count()).all(|i| g.position(i).z == 0.));
    }

    #[test]
    fn negative_zero_is_accepted() {
        let g = build_cylinder(-0., 1., -0., 4).unwrap();
        assert_eq!(g.vertex_count(), 26);
        assert!(build_cylinder(1., -0., 1., 4).is_ok());
    }

    #[test]
    fn huge_edge_count_is_rejected() {
        for n in [usize::MAX / 6 + 1, usize::MAX / 2, usize::MAX] {
            assert_eq!(build_cylinder(1., 1., 1., n), Err(GeometryError::IndexOverflow { vertices: usize::MAX }));
        }
        let n = (K_MAX_VERTS - 2) / 6 + 1;
        assert_eq!(build_cylinder(1., 1., 1., n), Err(GeometryError::IndexOverflow { vertices: 2 + 6 * n }));
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(build_cylinder(1., 1., 1., 2), Err(GeometryError::InvalidEdgeCount(2)));
        assert_eq!(build_cylinder(-1., 1., 1., 12), Err(GeometryError::InvalidDimension { name: "height", value: -1. }));
        assert!(matches!(build_cylinder(1., -0.5, 1., 12), Err(GeometryError::InvalidDimension { name: "radius_bottom", .. })));
        assert!(matches!(build_cylinder(1., 1., Real::NAN, 12), Err(GeometryError::InvalidDimension { name: "radius_top", .. })));
        assert!(matches!(build_cylinder(1., 1., 1., 20_000), Err(GeometryError::IndexOverflow { vertices: 120_002 })));
    }

    #[test]
    fn largest_edge_count_fits_u16() {
        let n = (K_MAX_VERTS - 2) / 6;
        let g = build_cylinder(1., 1., 1., n).unwrap();
        assert!(g.vertex_count() <= K_MAX_VERTS);
        assert_eq!(*g.indices.iter().max().unwrap() as usize, g.vertex_count() - 1);
    }
}
