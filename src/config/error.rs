/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt;
use std::io;

use crate::trajectory::TrajectoryError;

/// Error types that can occur while loading or building a scene
#[derive(Debug)]
pub enum ConfigError {
    /// The scene file could not be read
    Io(io::Error),
    /// The scene file is not valid scene JSON
    Json(serde_json::Error),
    /// A motion in the scene could not be constructed
    Trajectory(TrajectoryError),
    /// There is nothing to draw without child motions
    NoChildren,
    /// A step or scale that would stall or reverse a waypoint walk
    InvalidStep { what: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(error) => write!(f, "Could not read scene: {error}"),
            ConfigError::Json(error) => write!(f, "Invalid scene JSON: {error}"),
            ConfigError::Trajectory(error) => write!(f, "Invalid motion: {error}"),
            ConfigError::NoChildren => write!(f, "Scene has no child motions"),
            ConfigError::InvalidStep { what, value } => write!(f, "Invalid {what}: {value}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(error) => Some(error),
            ConfigError::Json(error) => Some(error),
            ConfigError::Trajectory(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl From<TrajectoryError> for ConfigError {
    fn from(error: TrajectoryError) -> Self {
        ConfigError::Trajectory(error)
    }
}
