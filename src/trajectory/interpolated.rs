/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Cyclic walk through waypoints with linear interpolation
//!
//! Each waypoint carries the time it takes to travel to the next one, and the
//! list is treated as a cycle: the last waypoint travels back to the first.
//! A duration of zero passes straight through a waypoint, which is how cusps
//! are made. Durations also set the pace, so a long duration on a short
//! segment makes the walk linger there.

use glam::DVec2;

use crate::trajectory::error::TrajectoryError;
use crate::trajectory::{Delta, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub location: DVec2,
    pub duration: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64, duration: f64) -> Self {
        Self {
            location: DVec2::new(x, y),
            duration,
        }
    }

    /// Build from a raw `[x, y, duration]` row, `index` is only used for reporting
    pub fn from_values(index: usize, values: &[f64]) -> Result<Self, TrajectoryError> {
        match values {
            &[x, y, duration] => Ok(Self::new(x, y, duration)),
            _ => Err(TrajectoryError::WrongArity {
                index,
                found: values.len(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedTrajectory {
    waypoints: Vec<Waypoint>,
    index: usize,
    next_index: usize,
    elapsed: f64,
    target: f64,
    cycle: f64,
    current: DVec2,
    previous: DVec2,
}

impl InterpolatedTrajectory {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, TrajectoryError> {
        for (index, waypoint) in waypoints.iter().enumerate() {
            if !waypoint.location.is_finite() {
                return Err(TrajectoryError::NonFinite { what: "waypoint location" });
            }
            if !waypoint.duration.is_finite() {
                return Err(TrajectoryError::NonFinite { what: "waypoint duration" });
            }
            if waypoint.duration < 0.0 {
                return Err(TrajectoryError::NegativeDuration {
                    index,
                    duration: waypoint.duration,
                });
            }
        }
        if !waypoints.iter().any(|waypoint| waypoint.duration > 0.0) {
            return Err(TrajectoryError::NoForwardProgress);
        }
        let start = waypoints[0];
        let cycle = waypoints.iter().map(|waypoint| waypoint.duration).sum();
        Ok(Self {
            index: 0,
            next_index: 1 % waypoints.len(),
            elapsed: 0.0,
            target: start.duration,
            cycle,
            current: start.location,
            previous: start.location,
            waypoints,
        })
    }

    /// Build from raw rows, each of which must be exactly `[x, y, duration]`
    pub fn from_values<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, TrajectoryError> {
        let waypoints = rows
            .iter()
            .enumerate()
            .map(|(index, row)| Waypoint::from_values(index, row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(waypoints)
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Index of the waypoint the current segment starts from
    pub fn segment(&self) -> usize {
        self.index
    }

    /// Time spent so far in the current segment
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Sum of all durations, the time needed for one trip around the cycle
    pub fn cycle_duration(&self) -> f64 {
        self.cycle
    }

    fn go_to_next_index(&mut self) {
        self.index = self.next_index;
        self.next_index = (self.index + 1) % self.waypoints.len();
        self.target = self.waypoints[self.index].duration;
    }

    fn interpolate(&self) -> DVec2 {
        let start = self.waypoints[self.index].location;
        let end = self.waypoints[self.next_index].location;
        start + (end - start) * (self.elapsed / self.target)
    }
}

impl Trajectory for InterpolatedTrajectory {
    /// Steps are expected to be non-negative, a non-finite step leaves the walk in place
    fn advance(&mut self, step: f64) -> Delta {
        if !step.is_finite() {
            self.previous = self.current;
            return DVec2::ZERO;
        }
        // whole cycles land back where they started
        let step = if step >= self.cycle { step % self.cycle } else { step };
        // terminates because at least one duration is positive
        while self.target == 0.0 {
            self.go_to_next_index();
        }
        if self.elapsed + step >= self.target {
            let mut remaining = (step - (self.target - self.elapsed)).max(0.0);
            self.go_to_next_index();
            while remaining >= self.target {
                remaining = (remaining - self.target).max(0.0);
                self.go_to_next_index();
            }
            self.elapsed = remaining;
        } else {
            self.elapsed += step;
        }
        self.previous = self.current;
        self.current = self.interpolate();
        self.current - self.previous
    }

    fn position(&self) -> DVec2 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> InterpolatedTrajectory {
        InterpolatedTrajectory::from_values(&[
            [0.0, 0.0, 1.0],
            [10.0, 0.0, 1.0],
            [10.0, 10.0, 1.0],
            [0.0, 10.0, 1.0],
        ])
        .unwrap()
    }

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_starts_at_first_waypoint() {
        let walk = square();
        assert_eq!(walk.position(), DVec2::ZERO);
        assert_eq!(walk.segment(), 0);
        assert_eq!(walk.cycle_duration(), 4.0);
    }

    #[test]
    fn test_interpolates_within_segment() {
        let mut walk = square();
        let delta = walk.advance(0.25);
        assert_eq!(delta, DVec2::new(2.5, 0.0));
        let delta = walk.advance(0.5);
        assert_eq!(delta, DVec2::new(5.0, 0.0));
        assert_eq!(walk.position(), DVec2::new(7.5, 0.0));
    }

    #[test]
    fn test_square_closes_after_eight_half_steps() {
        let mut walk = square();
        let expected = [
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (10.0, 10.0),
            (5.0, 10.0),
            (0.0, 10.0),
            (0.0, 5.0),
            (0.0, 0.0),
        ];
        for (x, y) in expected {
            walk.advance(0.5);
            assert_eq!(walk.position(), DVec2::new(x, y));
        }
    }

    #[test]
    fn test_closed_loop_independent_of_step_size() {
        for (step, count) in [(4.0, 1), (0.25, 16), (0.1, 40), (0.001, 4000), (1.5, 8)] {
            let mut walk = square();
            let mut sum = DVec2::ZERO;
            for _ in 0..count {
                sum += walk.advance(step);
            }
            let expected_cycles = step * count as f64 / 4.0;
            assert!(
                (expected_cycles - expected_cycles.round()).abs() < 1e-9,
                "test setup must cover whole cycles"
            );
            assert!(
                walk.position().length() < 1e-6,
                "step {step} ended at {:?}",
                walk.position()
            );
            assert!(sum.length() < 1e-6);
        }
    }

    #[test]
    fn test_huge_step_folds_whole_cycles() {
        let mut walk = InterpolatedTrajectory::from_values(&[[0.0, 0.0, 1.0], [10.0, 0.0, 1.0]]).unwrap();
        // subtracting a duration from 1e17 no longer changes it
        walk.advance(1e17);
        assert_eq!(walk.position(), DVec2::ZERO);

        let mut walk = square();
        walk.advance(0.5);
        walk.advance(4.0 * 1e15 + 2.0);
        assert_eq!(walk.segment(), 2);
        assert!(close(walk.position(), DVec2::new(5.0, 10.0)));
    }

    #[test]
    fn test_non_finite_step_stays_put() {
        let mut walk = square();
        walk.advance(0.25);
        assert_eq!(walk.advance(f64::INFINITY), DVec2::ZERO);
        assert_eq!(walk.advance(f64::NAN), DVec2::ZERO);
        assert_eq!(walk.position(), DVec2::new(2.5, 0.0));
        assert_eq!(walk.advance(0.25), DVec2::new(2.5, 0.0));
    }

    #[test]
    fn test_overshoot_spans_several_segments() {
        let mut walk = square();
        walk.advance(2.75);
        assert_eq!(walk.segment(), 2);
        assert!((walk.elapsed() - 0.75).abs() < 1e-12);
        assert!(close(walk.position(), DVec2::new(2.5, 10.0)));
    }

    #[test]
    fn test_zero_duration_run_skipped_in_one_step() {
        let mut walk = InterpolatedTrajectory::from_values(&[
            [0.0, 0.0, 1.0],
            [5.0, 0.0, 0.0],
            [5.0, 5.0, 0.0],
            [10.0, 10.0, 2.0],
            [0.0, 10.0, 1.0],
        ])
        .unwrap();
        let delta = walk.advance(1.0);
        assert_eq!(walk.segment(), 3);
        assert_eq!(walk.elapsed(), 0.0);
        assert_eq!(walk.position(), DVec2::new(10.0, 10.0));
        assert_eq!(delta, DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_leading_zero_durations_skipped_before_stepping() {
        let mut walk = InterpolatedTrajectory::from_values(&[
            [3.0, 3.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 2.0],
            [4.0, 0.0, 2.0],
        ])
        .unwrap();
        assert_eq!(walk.position(), DVec2::new(3.0, 3.0));
        walk.advance(1.0);
        assert_eq!(walk.segment(), 2);
        assert_eq!(walk.position(), DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_stationary_pause() {
        // stops at the origin for a while before moving on
        let mut walk =
            InterpolatedTrajectory::from_values(&[[0.0, 0.0, 5.0], [0.0, 0.0, 1.0], [1.0, 1.0, 1.0]])
                .unwrap();
        for _ in 0..5 {
            assert_eq!(walk.advance(1.0), DVec2::ZERO);
        }
        assert_eq!(walk.advance(0.5), DVec2::new(0.5, 0.5));
    }

    #[test]
    fn test_single_waypoint_stays_put() {
        let mut walk = InterpolatedTrajectory::from_values(&[[2.0, 3.0, 1.0]]).unwrap();
        for _ in 0..7 {
            assert_eq!(walk.advance(0.3), DVec2::ZERO);
        }
        assert_eq!(walk.position(), DVec2::new(2.0, 3.0));
    }

    #[test]
    fn test_all_zero_durations_rejected() {
        assert_eq!(
            InterpolatedTrajectory::from_values(&[[0.0, 0.0, 0.0]]),
            Err(TrajectoryError::NoForwardProgress)
        );
        let empty: [[f64; 3]; 0] = [];
        assert_eq!(
            InterpolatedTrajectory::from_values(&empty),
            Err(TrajectoryError::NoForwardProgress)
        );
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let rows = vec![vec![0.0, 0.0, 1.0], vec![1.0, 1.0]];
        assert_eq!(
            InterpolatedTrajectory::from_values(&rows),
            Err(TrajectoryError::WrongArity { index: 1, found: 2 })
        );
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = InterpolatedTrajectory::new(vec![
            Waypoint::new(0.0, 0.0, 1.0),
            Waypoint::new(1.0, 0.0, -1.0),
        ]);
        assert_eq!(
            result,
            Err(TrajectoryError::NegativeDuration { index: 1, duration: -1.0 })
        );
    }
}
