//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use log::{debug, info};
use crate::compose::{CylinderSpec, Spacecraft};
use crate::config::BuildConfig;
use crate::error::{GeometryError, Result};
use crate::geometry::GeometryBuffer;
use crate::common::Real;

/// Per-session state handed to whichever subsystem needs it.
/// Owns every craft, the active craft selection and the game clock.
#[derive(Debug)]
pub struct SimulationState {
    pub config: BuildConfig,
    crafts: Vec<Spacecraft>,
    active: Option<usize>,
    clock: f64,
}

impl SimulationState {
    pub fn new(config: BuildConfig) -> Result<Self> {
        config.validate()?;
        info!("session started: edge count {}, time warp {}", config.default_edge_count, config.time_warp);
        Ok(Self { config, crafts: vec![], active: None, clock: 0. })
    }

    /// Cylinder spec that uses the session's default edge count.
    pub fn cylinder(&self, height: Real, radius_bottom: Real, radius_top: Real) -> CylinderSpec {
        CylinderSpec::frustum(height, radius_bottom, radius_top).with_edge_count(self.config.default_edge_count)
    }

    /// Adds a craft and returns its index. The first craft becomes active.
    pub fn add_craft(&mut self, craft: Spacecraft) -> usize {
        self.crafts.push(craft);
        let i = self.crafts.len() - 1;
        if self.active.is_none() { self.active = Some(i); }
        i
    }

    pub fn craft_count(&self) -> usize { self.crafts.len() }

    pub fn craft(&self, index: usize) -> Result<&Spacecraft> {
        let len = self.crafts.len();
        self.crafts.get(index).ok_or(GeometryError::IndexOutOfRange { index, len })
    }

    pub fn craft_mut(&mut self, index: usize) -> Result<&mut Spacecraft> {
        let len = self.crafts.len();
        self.crafts.get_mut(index).ok_or(GeometryError::IndexOutOfRange { index, len })
    }

    pub fn set_active(&mut self, index: usize) -> Result<()> {
        self.craft(index)?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active(&self) -> Option<&Spacecraft> { self.active.map(|i| &self.crafts[i]) }

    pub fn active_geometry(&self) -> Result<Option<GeometryBuffer>> {
        self.active().map(|c| c.merged_geometry()).transpose()
    }

    pub fn clock(&self) -> f64 { self.clock }

    /// Moves the clock forward by `dt` scaled by the configured time warp.
    pub fn advance_clock(&mut self, dt: f64) -> Result<f64> {
        if !dt.is_finite() || dt < 0. { return Err(GeometryError::InvalidTimeStep(dt)); }
        self.clock += dt * self.config.time_warp;
        debug!("clock at {}", self.clock);
        Ok(self.clock)
    }
}
