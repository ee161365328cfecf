//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use std::f64::consts::PI;
use std::sync::OnceLock;
use crate::common::{K_DEFAULT_EDGE_COUNT, Real, Vec3};

/// Perimeter samples of a unit cylinder: radius 1, bottom at z=0, top at z=1.
/// Instances are scaled per cylinder and never mutated.
#[derive(Clone, Debug)]
pub struct UnitCylinderTemplate {
    pub bottom: Vec<Vec3>,
    pub top: Vec<Vec3>,
    pub bottom_center: Vec3,
    pub top_center: Vec3,
}

static DEFAULT_TEMPLATE: OnceLock<UnitCylinderTemplate> = OnceLock::new();

impl UnitCylinderTemplate {
    pub fn new(n: usize) -> Self {
        let mut bottom = Vec::with_capacity(n);
        let mut top = Vec::with_capacity(n);
        for i in 0..n {
            let (s, c) = (2. * PI * (i as f64 / n as f64)).sin_cos();
            bottom.push(Vec3::new(c as Real, s as Real, 0.));
            top.push(Vec3::new(c as Real, s as Real, 1.));
        }
        Self {
            bottom,
            top,
            bottom_center: Vec3::new(0., 0., 0.),
            top_center: Vec3::new(0., 0., 1.),
        }
    }

    /// Shared table for the default edge count, built on first use.
    pub fn shared() -> &'static Self {
        DEFAULT_TEMPLATE.get_or_init(|| Self::new(K_DEFAULT_EDGE_COUNT))
    }

    pub fn edge_count(&self) -> usize { self.bottom.len() }

    /// Angle of perimeter sample `i`, in `[0, 2π)`.
    pub fn theta(&self, i: usize) -> f64 { 2. * PI * (i as f64 / self.edge_count() as f64) }
}
