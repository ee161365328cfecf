//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use std::sync::Arc;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use crate::compose::compose;
use crate::compose::component::Component;
use crate::error::{GeometryError, Result};
use crate::geometry::{GeometryBuffer, HasGeometry};

/// Ordered list of components. List order is draw order, last is drawn on top.
/// Components are compared by identity, so the same `Arc` can't appear twice.
#[derive(Clone, Debug, Default)]
pub struct Spacecraft {
    pub name: String,
    parts: Vec<Arc<Component>>,
}

impl Spacecraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parts: vec![] }
    }

    pub fn len(&self) -> usize { self.parts.len() }
    pub fn is_empty(&self) -> bool { self.parts.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Component>> { self.parts.iter() }

    pub fn position_of(&self, c: &Arc<Component>) -> Option<usize> {
        self.parts.iter().position(|p| Arc::ptr_eq(p, c))
    }

    /// Appends `c`, moving it to the end if it is already present. Returns the new count.
    pub fn add_component(&mut self, c: Arc<Component>) -> usize {
        if let Some(i) = self.position_of(&c) { self.parts.remove(i); }
        self.parts.push(c);
        self.parts.len()
    }

    pub fn remove_component(&mut self, c: &Arc<Component>) -> Result<Arc<Component>> {
        let i = self.position_of(c).ok_or(GeometryError::ComponentNotFound)?;
        Ok(self.parts.remove(i))
    }

    pub fn remove_component_at(&mut self, index: usize) -> Result<Arc<Component>> {
        self.check_index(index)?;
        Ok(self.parts.remove(index))
    }

    pub fn get_component(&self, index: usize) -> Result<&Arc<Component>> {
        self.check_index(index)?;
        Ok(&self.parts[index])
    }

    pub fn first(&self) -> Result<&Arc<Component>> { self.get_component(0) }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.parts.len() {
            return Err(GeometryError::IndexOutOfRange { index, len: self.parts.len() });
        }
        Ok(())
    }

    /// Builds every component, places it at its offset and concatenates the
    /// results in list order with indices re-based onto the merged buffer.
    pub fn merged_geometry(&self) -> Result<GeometryBuffer> {
        #[cfg(feature = "rayon")]
        let parts = self.parts.par_iter().map(|c| c.geometry()).collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "rayon"))]
        let parts = self.parts.iter().map(|c| c.geometry()).collect::<Result<Vec<_>>>()?;

        let g = compose(&parts)?;
        debug!("craft '{}': {} components, {} verts, {} tris", self.name, self.len(), g.vertex_count(), g.triangle_count());
        Ok(g)
    }
}

impl HasGeometry for Spacecraft {
    fn geometry(&self) -> Result<GeometryBuffer> { self.merged_geometry() }
}
