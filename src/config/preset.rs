/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::f64::consts::{FRAC_PI_4, PI};

use clap::ValueEnum;
use strum::{Display, EnumIter, EnumString};

use crate::config::{ChildConfig, MotionConfig, SceneConfig};
use crate::svg::PathStyle;

const ELLIPSE_SCALE: f64 = 2.0 * PI;
const PARENT_SCALE: f64 = 2.0;
const BASE_STEP: f64 = 0.005;
const ITERATIONS: usize = 200 * 15;

// straight-line segments have lower speed
const HEART_NODES: [[f64; 3]; 24] = [
    [1042.397, 0.0, 2.0],
    [222.128, 798.490, 1.0],
    [75.494, 1003.194, 1.0],
    [0.0, 1286.295, 1.0],
    [2.908, 1493.902, 1.0],
    [76.948, 1740.708, 1.0],
    [239.549, 1927.991, 1.0],
    [371.661, 2007.840, 1.0],
    [541.524, 2045.586, 1.0],
    [707.029, 2013.647, 1.0],
    [823.173, 1927.991, 1.0],
    [904.474, 1881.533, 1.0],
    [1042.397, 1871.370, 1.0],
    [1180.316, 1881.533, 1.0],
    [1261.617, 1927.991, 1.0],
    [1377.761, 2013.647, 1.0],
    [1543.266, 2045.586, 1.0],
    [1713.124, 2007.840, 1.0],
    [1845.240, 1927.991, 1.0],
    [2007.842, 1740.708, 1.0],
    [2081.886, 1493.902, 1.0],
    [2084.785, 1286.295, 1.0],
    [2009.291, 1003.194, 1.0],
    [1862.662, 798.490, 2.0],
];

const CROSS_NODES: [[f64; 3]; 4] = [
    [0.0, 0.0, 1.0],
    [2000.0, 2000.0, 1.0],
    [2000.0, 0.0, 1.0],
    [0.0, 2000.0, 1.0],
];

/// Built-in scenes: a waypoint parent with two crossed ellipses riding on it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter, EnumString, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    Heart,
    Cross,
}

impl Preset {
    pub fn description(self) -> &'static str {
        match self {
            Preset::Heart => "24-waypoint heart, slower along the straight bottom edges",
            Preset::Cross => "four corners visited crosswise",
        }
    }

    fn nodes(self) -> Vec<Vec<f64>> {
        let nodes: &[[f64; 3]] = match self {
            Preset::Heart => &HEART_NODES,
            Preset::Cross => &CROSS_NODES,
        };
        nodes.iter().map(|node| node.to_vec()).collect()
    }

    pub fn scene(self) -> SceneConfig {
        let ellipse = |rotation: f64, stroke: &str| ChildConfig {
            motion: MotionConfig::Elliptic {
                rotation,
                x_length: 200.0,
                y_length: 25.0,
            },
            scale: ELLIPSE_SCALE,
            style: PathStyle::new(stroke, 5.0),
        };
        SceneConfig {
            name: self.to_string(),
            base_step: BASE_STEP,
            parent_scale: PARENT_SCALE,
            iterations: ITERATIONS,
            parent: MotionConfig::Waypoints { nodes: self.nodes() },
            children: vec![
                ellipse(FRAC_PI_4, "#00ff00"),
                ellipse(3.0 * FRAC_PI_4, "#0000ff"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_preset_builds() {
        for preset in Preset::iter() {
            let scene = preset.scene().build().unwrap();
            assert_eq!(scene.composer.child_count(), 2);
            assert_eq!(scene.iterations, 3000);
            assert_eq!(scene.name, preset.to_string());
        }
    }

    #[test]
    fn test_names_parse_back() {
        for preset in Preset::iter() {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
        assert!("spiral".parse::<Preset>().is_err());
    }

    #[test]
    fn test_heart_cycle_duration() {
        let walk = crate::trajectory::InterpolatedTrajectory::from_values(&HEART_NODES).unwrap();
        assert_eq!(walk.cycle_duration(), 26.0);
    }
}
