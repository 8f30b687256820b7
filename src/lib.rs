/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

pub mod composer;
pub mod config;
pub mod svg;
pub mod trajectory;

pub use composer::{Composer, PathRecorder, PathSink};
pub use trajectory::{Delta, Motion, Trajectory};
