//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use crate::common::{Real, Vec3};

/// Axis aligned box around a set of positions.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vec3::new(Real::MAX, Real::MAX, Real::MAX),
            max: Vec3::new(Real::MIN, Real::MIN, Real::MIN),
        }
    }
}

impl BoundingBox {
    pub fn new<'a>(pts: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut b = BoundingBox::default();
        for p in pts { b.union(p); }
        b
    }

    pub fn is_empty(&self) -> bool { self.min.x > self.max.x }
    pub fn size(&self) -> Vec3 { if self.is_empty() { Vec3::zeros() } else { self.max - self.min } }
    pub fn center(&self) -> Vec3 { if self.is_empty() { Vec3::zeros() } else { (self.max + self.min) * 0.5 } }

    pub fn union(&mut self, p: &Vec3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    pub fn contains(&self, p: &Vec3, eps: Real) -> bool {
        p.x >= self.min.x - eps && p.x <= self.max.x + eps &&
        p.y >= self.min.y - eps && p.y <= self.max.y + eps &&
        p.z >= self.min.z - eps && p.z <= self.max.z + eps
    }

    pub fn longest_dim(&self) -> usize {
        let s = self.size();
        if s.x > s.y && s.x > s.z { 0 }
        else if s.y > s.z { 1 }
        else { 2 }
    }
}
