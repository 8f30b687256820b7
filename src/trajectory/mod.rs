/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Steppable trajectories
//!
//! A trajectory owns its own clock and position history. Advancing it by a
//! step moves the clock forward and reports how far the position moved, so a
//! path can be drawn from relative moves alone.

use glam::DVec2;

pub mod elliptic;
pub mod error;
pub mod interpolated;

pub use elliptic::EllipticTrajectory;
pub use error::TrajectoryError;
pub use interpolated::{InterpolatedTrajectory, Waypoint};

/// Displacement between the current and previous position of one trajectory
pub type Delta = DVec2;

pub trait Trajectory {
    /// Move the clock forward by `step` and return the change in position
    fn advance(&mut self, step: f64) -> Delta;

    fn position(&self) -> DVec2;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    Elliptic(EllipticTrajectory),
    Interpolated(InterpolatedTrajectory),
}

impl Trajectory for Motion {
    fn advance(&mut self, step: f64) -> Delta {
        match self {
            Motion::Elliptic(ellipse) => ellipse.advance(step),
            Motion::Interpolated(walk) => walk.advance(step),
        }
    }

    fn position(&self) -> DVec2 {
        match self {
            Motion::Elliptic(ellipse) => ellipse.position(),
            Motion::Interpolated(walk) => walk.position(),
        }
    }
}

impl From<EllipticTrajectory> for Motion {
    fn from(ellipse: EllipticTrajectory) -> Self {
        Motion::Elliptic(ellipse)
    }
}

impl From<InterpolatedTrajectory> for Motion {
    fn from(walk: InterpolatedTrajectory) -> Self {
        Motion::Interpolated(walk)
    }
}
