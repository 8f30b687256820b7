/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use glam::DVec2;
use log::info;
use serde::{Deserialize, Serialize};

use crate::composer::PathSink;
use crate::trajectory::Delta;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_string(),
            stroke_width: 5.0,
        }
    }
}

impl PathStyle {
    pub fn new(stroke: &str, stroke_width: f64) -> Self {
        Self {
            stroke: stroke.to_string(),
            stroke_width,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "stroke:{};fill:none;stroke-width:{};stroke-miterlimit:4;stroke-dasharray:none",
            self.stroke, self.stroke_width
        )
    }
}

#[derive(Debug, Clone)]
struct PathLayer {
    style: PathStyle,
    data: String,
    cursor: DVec2,
    min: DVec2,
    max: DVec2,
    started: bool,
}

impl PathLayer {
    fn new(style: PathStyle) -> Self {
        Self {
            style,
            data: String::new(),
            cursor: DVec2::ZERO,
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
            started: false,
        }
    }

    fn include(&mut self, point: DVec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

/// SVG drawing with one relative-move path per layer
#[derive(Debug, Clone)]
pub struct SvgDocument {
    name: String,
    layers: Vec<PathLayer>,
}

impl SvgDocument {
    pub fn new(name: &str, styles: Vec<PathStyle>) -> Self {
        Self {
            name: name.to_string(),
            layers: styles.into_iter().map(PathLayer::new).collect(),
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The `d` attribute of a layer's path
    pub fn path_data(&self, layer: usize) -> Option<&str> {
        self.layers.get(layer).map(|path| path.data.as_str())
    }

    /// Smallest box holding every point of every started path
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        self.layers
            .iter()
            .filter(|path| path.started)
            .fold(None, |bounds, path| match bounds {
                None => Some((path.min, path.max)),
                Some((min, max)) => Some((min.min(path.min), max.max(path.max))),
            })
    }

    fn layer_mut(&mut self, layer: usize) -> &mut PathLayer {
        if self.layers.len() <= layer {
            self.layers.resize_with(layer + 1, || PathLayer::new(PathStyle::default()));
        }
        &mut self.layers[layer]
    }

    /// The whole document as a string
    pub fn render(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let margin = self
            .layers
            .iter()
            .map(|path| path.style.stroke_width)
            .fold(0.0, f64::max);
        let (min, max) = self.bounds().unwrap_or((DVec2::ZERO, DVec2::ZERO));
        let corner = min - DVec2::splat(margin);
        let size = max - min + DVec2::splat(2.0 * margin);
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

        writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
        writeln!(out, "<!-- Created: {} -->", now)?;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="{:.4} {:.4} {:.4} {:.4}">"#,
            corner.x, corner.y, size.x, size.y
        )?;
        writeln!(out, "  <title>{}</title>", escape_xml(&self.name))?;
        for path in self.layers.iter().filter(|path| path.started) {
            writeln!(
                out,
                r#"  <path style="{}" d="{}"/>"#,
                escape_xml(&path.style.css()),
                path.data.trim_end()
            )?;
        }
        writeln!(out, "</svg>")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let mut file = BufWriter::new(File::create(path)?);
        self.write_to(&mut file)?;
        file.flush()?;
        info!(
            "Wrote {} paths to {}",
            self.layers.iter().filter(|layer| layer.started).count(),
            path.display()
        );
        Ok(())
    }
}

/// Text safe for element content and double-quoted attributes
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(character),
        }
    }
    escaped
}

impl PathSink for SvgDocument {
    fn move_to(&mut self, layer: usize, position: DVec2) {
        let path = self.layer_mut(layer);
        path.data.push_str(&format!("M {:.4} {:.4} ", position.x, position.y));
        path.cursor = position;
        path.started = true;
        path.include(position);
    }

    fn line_by(&mut self, layer: usize, delta: Delta) {
        let path = self.layer_mut(layer);
        path.data.push_str(&format!("l {:.4} {:.4} ", delta.x, delta.y));
        path.cursor += delta;
        let cursor = path.cursor;
        path.include(cursor);
    }
}
