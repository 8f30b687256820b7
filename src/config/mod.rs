/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Scene descriptions
//!
//! A scene is a parent motion, the child motions riding on it, and the clock
//! settings for sampling them. Scenes come from the built-in presets or from
//! a JSON file shaped like this:
//!
//! ```json
//! {
//!   "name": "square",
//!   "base_step": 0.5,
//!   "parent_scale": 1.0,
//!   "iterations": 8,
//!   "parent": { "kind": "waypoints", "nodes": [[0, 0, 1], [10, 0, 1], [10, 10, 1], [0, 10, 1]] },
//!   "children": [
//!     {
//!       "motion": { "kind": "elliptic", "rotation": 0.785, "x_length": 2, "y_length": 1 },
//!       "scale": 6.283,
//!       "style": { "stroke": "#00ff00", "stroke_width": 5 }
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::composer::Composer;
use crate::svg::PathStyle;
use crate::trajectory::{EllipticTrajectory, InterpolatedTrajectory, Motion};

pub mod error;
pub mod preset;

pub use error::ConfigError;
pub use preset::Preset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionConfig {
    Elliptic {
        rotation: f64,
        x_length: f64,
        y_length: f64,
    },
    /// Raw `[x, y, duration]` rows, checked when the motion is built
    Waypoints { nodes: Vec<Vec<f64>> },
}

impl MotionConfig {
    pub fn build(&self) -> Result<Motion, ConfigError> {
        let motion = match self {
            MotionConfig::Elliptic {
                rotation,
                x_length,
                y_length,
            } => EllipticTrajectory::new(*rotation, *x_length, *y_length)?.into(),
            MotionConfig::Waypoints { nodes } => InterpolatedTrajectory::from_values(nodes)?.into(),
        };
        Ok(motion)
    }

    /// The scaled step has to stay finite, and waypoint walks only run forwards
    fn check_scale(&self, what: &'static str, scale: f64, base_step: f64) -> Result<(), ConfigError> {
        let walks_waypoints = matches!(self, MotionConfig::Waypoints { .. });
        if !(scale * base_step).is_finite() || (walks_waypoints && scale < 0.0) {
            return Err(ConfigError::InvalidStep { what, value: scale });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildConfig {
    pub motion: MotionConfig,
    pub scale: f64,
    #[serde(default)]
    pub style: PathStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub base_step: f64,
    pub parent_scale: f64,
    pub iterations: usize,
    pub parent: MotionConfig,
    pub children: Vec<ChildConfig>,
}

fn default_name() -> String {
    "scene".to_string()
}

/// A validated scene, ready to be sampled
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    pub composer: Composer,
    pub styles: Vec<PathStyle>,
    pub iterations: usize,
}

impl SceneConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<Scene, ConfigError> {
        if !self.base_step.is_finite() || self.base_step <= 0.0 {
            return Err(ConfigError::InvalidStep {
                what: "base step",
                value: self.base_step,
            });
        }
        if self.children.is_empty() {
            return Err(ConfigError::NoChildren);
        }
        self.parent.check_scale("parent scale", self.parent_scale, self.base_step)?;
        let mut composer = Composer::new(self.parent.build()?, self.parent_scale, self.base_step);
        for child in &self.children {
            child.motion.check_scale("child scale", child.scale, self.base_step)?;
            composer.add_child(child.motion.build()?, child.scale);
        }
        Ok(Scene {
            name: self.name.clone(),
            composer,
            styles: self.children.iter().map(|child| child.style.clone()).collect(),
            iterations: self.iterations,
        })
    }
}
