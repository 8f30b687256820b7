/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Lock-step sampling of a parent motion with child motions riding on it
//!
//! Every iteration advances the parent and each child by the base step times
//! their own scale. The parent's delta is added to every child's delta, so
//! each child traces its own curve around the same moving centre.

use glam::DVec2;
use log::{debug, info};

use crate::trajectory::{Delta, Motion, Trajectory};

/// Consumer of the sampled paths, one layer per child
pub trait PathSink {
    /// Called once per layer before any deltas, with the absolute start
    fn move_to(&mut self, layer: usize, position: DVec2);

    fn line_by(&mut self, layer: usize, delta: Delta);
}

#[derive(Debug, Clone)]
struct Layer {
    motion: Motion,
    scale: f64,
}

#[derive(Debug, Clone)]
pub struct Composer {
    parent: Motion,
    parent_scale: f64,
    base_step: f64,
    children: Vec<Layer>,
}

impl Composer {
    pub fn new(parent: impl Into<Motion>, parent_scale: f64, base_step: f64) -> Self {
        Self {
            parent: parent.into(),
            parent_scale,
            base_step,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, motion: impl Into<Motion>, scale: f64) -> Self {
        self.add_child(motion, scale);
        self
    }

    /// Returns the layer index of the new child
    pub fn add_child(&mut self, motion: impl Into<Motion>, scale: f64) -> usize {
        self.children.push(Layer {
            motion: motion.into(),
            scale,
        });
        self.children.len() - 1
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn base_step(&self) -> f64 {
        self.base_step
    }

    pub fn parent(&self) -> &Motion {
        &self.parent
    }

    /// Absolute position of every child: parent position plus child position
    pub fn origins(&self) -> Vec<DVec2> {
        let centre = self.parent.position();
        self.children
            .iter()
            .map(|child| centre + child.motion.position())
            .collect()
    }

    /// One iteration, returning the combined delta of each child in layer order
    pub fn step(&mut self) -> Vec<Delta> {
        let parent_delta = self.parent.advance(self.base_step * self.parent_scale);
        let base_step = self.base_step;
        self.children
            .iter_mut()
            .map(|child| parent_delta + child.motion.advance(base_step * child.scale))
            .collect()
    }

    /// Seed every layer with its origin, then emit `iterations` rounds of deltas
    pub fn run<S: PathSink>(&mut self, iterations: usize, sink: &mut S) {
        debug!(
            "Sampling {} iterations for {} layers, base step {}",
            iterations,
            self.children.len(),
            self.base_step
        );
        for (layer, origin) in self.origins().into_iter().enumerate() {
            sink.move_to(layer, origin);
        }
        let threshold = (iterations / 10).max(1);
        for iteration in 0..iterations {
            if iteration % threshold == 0 {
                info!("{:3.0}% done.", 100.0 * iteration as f64 / iterations as f64);
            }
            for (layer, delta) in self.step().into_iter().enumerate() {
                sink.line_by(layer, delta);
            }
        }
    }
}

/// Keeps the emitted paths in memory
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    pub origins: Vec<DVec2>,
    pub deltas: Vec<Vec<Delta>>,
}

impl PathRecorder {
    fn ensure_layer(&mut self, layer: usize) {
        if self.deltas.len() <= layer {
            self.deltas.resize_with(layer + 1, Vec::new);
            self.origins.resize(layer + 1, DVec2::ZERO);
        }
    }

    /// Absolute end point of a layer's path
    pub fn end(&self, layer: usize) -> Option<DVec2> {
        let origin = *self.origins.get(layer)?;
        let deltas = self.deltas.get(layer)?;
        Some(deltas.iter().fold(origin, |position, delta| position + *delta))
    }
}

impl PathSink for PathRecorder {
    fn move_to(&mut self, layer: usize, position: DVec2) {
        self.ensure_layer(layer);
        self.origins[layer] = position;
    }

    fn line_by(&mut self, layer: usize, delta: Delta) {
        self.ensure_layer(layer);
        self.deltas[layer].push(delta);
    }
}
