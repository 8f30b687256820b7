/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Rotated ellipse traced by an accumulating phase parameter

use std::f64::consts::PI;

use glam::DVec2;

use crate::trajectory::error::TrajectoryError;
use crate::trajectory::{Delta, Trajectory};

/// Phase bound, an integer multiple of the 2π period
pub const PHASE_WRAP: f64 = 1000.0 * PI;

#[derive(Clone, Debug, PartialEq)]
pub struct EllipticTrajectory {
    rotation: f64,
    x_length: f64,
    y_length: f64,
    phase: f64,
    current: DVec2,
    previous: DVec2,
}

impl EllipticTrajectory {
    /// Rotation is in radians from the +x axis, lengths are the ellipse's semi-axes
    pub fn new(rotation: f64, x_length: f64, y_length: f64) -> Result<Self, TrajectoryError> {
        if !rotation.is_finite() {
            return Err(TrajectoryError::NonFinite { what: "ellipse rotation" });
        }
        if !x_length.is_finite() || !y_length.is_finite() {
            return Err(TrajectoryError::NonFinite { what: "ellipse axis length" });
        }
        let mut ellipse = Self {
            rotation,
            x_length,
            y_length,
            phase: 0.0,
            current: DVec2::ZERO,
            previous: DVec2::ZERO,
        };
        ellipse.current = ellipse.point_at(0.0);
        ellipse.previous = ellipse.current;
        Ok(ellipse)
    }

    /// Parametric ellipse combined with a 2D rotation
    pub fn point_at(&self, t: f64) -> DVec2 {
        let (sin_t, cos_t) = t.sin_cos();
        let (sin_r, cos_r) = self.rotation.sin_cos();
        DVec2::new(
            self.x_length * cos_t * cos_r - self.y_length * sin_t * sin_r,
            self.x_length * cos_t * sin_r + self.y_length * sin_t * cos_r,
        )
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}

impl Trajectory for EllipticTrajectory {
    fn advance(&mut self, step: f64) -> Delta {
        self.phase += step;
        let next = self.point_at(self.phase);
        // one correction per step, steps are far smaller than the bound
        if self.phase >= PHASE_WRAP {
            self.phase -= PHASE_WRAP;
        } else if self.phase <= -PHASE_WRAP {
            self.phase += PHASE_WRAP;
        }
        self.previous = self.current;
        self.current = next;
        self.current - self.previous
    }

    fn position(&self) -> DVec2 {
        self.current
    }
}
