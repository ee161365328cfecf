//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use crate::common::Vec3;
use crate::compose::cylinder::CylinderSpec;
use crate::error::Result;
use crate::geometry::{GeometryBuffer, HasGeometry};

/// Shape kinds a craft can be assembled from.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Cylinder(CylinderSpec),
}

impl HasGeometry for Shape {
    fn geometry(&self) -> Result<GeometryBuffer> {
        match self {
            Shape::Cylinder(c) => c.build(),
        }
    }
}

/// A shape placed at a local offset inside a craft.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    pub shape: Shape,
    pub offset: Vec3,
}

impl Component {
    pub fn new(shape: Shape, offset: Vec3) -> Self { Self { shape, offset } }

    pub fn cylinder(spec: CylinderSpec, offset: Vec3) -> Self {
        Self::new(Shape::Cylinder(spec), offset)
    }

    /// Geometry in the shape's own frame, before the offset is applied.
    pub fn local_geometry(&self) -> Result<GeometryBuffer> { self.shape.geometry() }
}

impl HasGeometry for Component {
    fn geometry(&self) -> Result<GeometryBuffer> {
        let mut g = self.local_geometry()?;
        g.translate(&self.offset);
        Ok(g)
    }
}
