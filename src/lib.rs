//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

pub mod common;
pub mod compose;
pub mod config;
pub mod coord;
pub mod error;
pub mod geometry;
pub mod session;

pub use crate::common::*;
pub use crate::compose::*;
pub use crate::config::BuildConfig;
pub use crate::coord::{Coord, Spherical};
pub use crate::error::{GeometryError, Result};
pub use crate::geometry::{BoundingBox, GeometryBuffer, HasGeometry};
pub use crate::session::SimulationState;

pub mod prelude {
    pub use crate::common::{Real, Vec3};
    pub use crate::compose::{build_cylinder, compose, Component, CylinderSpec, Shape, Spacecraft};
    pub use crate::config::BuildConfig;
    pub use crate::error::{GeometryError, Result};
    pub use crate::geometry::{GeometryBuffer, HasGeometry};
    pub use crate::session::SimulationState;
}

/// Stacks cylinder stages end to end along +z, bottom stage first.
/// Each `(height, radius_bottom, radius_top)` stage sits on top of the previous one.
pub fn stack_stages(name: &str, stages: &[(Real, Real, Real)], edge_count: usize) -> Result<Spacecraft> {
    let mut craft = Spacecraft::new(name);
    let mut z = 0.;
    for &(h, rb, rt) in stages {
        let spec = CylinderSpec::frustum(h, rb, rt).with_edge_count(edge_count);
        spec.validate()?;
        craft.add_component(std::sync::Arc::new(Component::cylinder(spec, Vec3::new(0., 0., z))));
        z += h;
    }
    Ok(craft)
}
