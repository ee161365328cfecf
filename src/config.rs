//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use std::str::FromStr;
use crate::common::{K_DEFAULT_EDGE_COUNT, K_MIN_EDGE_COUNT};
use crate::error::{GeometryError, Result};

pub const ENV_EDGE_COUNT: &str = "CRAFTMESH_EDGE_COUNT";
pub const ENV_TIME_WARP: &str = "CRAFTMESH_TIME_WARP";

/// Defaults shared by the builder and the simulation session.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildConfig {
    /// Perimeter samples for cylinders that do not set their own.
    pub default_edge_count: usize,
    /// Multiplier applied to every clock step.
    pub time_warp: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_edge_count: K_DEFAULT_EDGE_COUNT,
            time_warp: 1.,
        }
    }
}

impl BuildConfig {
    /// Reads overrides from the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut conf = Self::default();
        if let Some(v) = lookup(ENV_EDGE_COUNT) { conf.default_edge_count = parse(ENV_EDGE_COUNT, &v)?; }
        if let Some(v) = lookup(ENV_TIME_WARP)  { conf.time_warp = parse(ENV_TIME_WARP, &v)?; }
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_edge_count < K_MIN_EDGE_COUNT {
            return Err(GeometryError::InvalidEdgeCount(self.default_edge_count));
        }
        if !self.time_warp.is_finite() || self.time_warp < 0. {
            return Err(GeometryError::Config(format!("time warp must be finite and non-negative, got {}", self.time_warp)));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &str, val: &str) -> Result<T> {
    val.trim().parse().map_err(|_| GeometryError::Config(format!("{key}: cannot parse '{val}'")))
}
