/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt;

/// Error types that can occur while constructing a trajectory
#[derive(Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// A waypoint did not have exactly three values (x, y, duration)
    WrongArity { index: usize, found: usize },
    /// No waypoint has a positive duration, so the walk could never advance
    NoForwardProgress,
    /// A waypoint duration was below zero
    NegativeDuration { index: usize, duration: f64 },
    /// A coordinate, duration or ellipse parameter was NaN or infinite
    NonFinite { what: &'static str },
}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrajectoryError::WrongArity { index, found } => {
                write!(f, "Expected 3 values in waypoint {index}, found {found}")
            }
            TrajectoryError::NoForwardProgress => write!(
                f,
                "Waypoint list must contain at least one waypoint with non-zero duration"
            ),
            TrajectoryError::NegativeDuration { index, duration } => {
                write!(f, "Waypoint {index} has negative duration {duration}")
            }
            TrajectoryError::NonFinite { what } => write!(f, "Non-finite {what}"),
        }
    }
}

impl std::error::Error for TrajectoryError {}
