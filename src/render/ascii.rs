//! Character-cell canvas for terminals
//!
//! Each cell covers one pixel horizontally and two vertically, which roughly
//! matches the shape of a terminal glyph, so circles stay round.

use crate::projection::Viewport;
use crate::render::{Affine, Canvas};
use nalgebra::Point2;
use std::f64::consts::TAU;
use std::fmt;

/// Vertical pixels per character cell
pub const CELL_ASPECT: f64 = 2.0;

/// A grid of characters implementing [`Canvas`]
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    transform: Affine,
    stack: Vec<Affine>,
}

impl AsciiCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
            transform: Affine::identity(),
            stack: Vec::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at a cell, if inside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    fn cell_for(&self, screen: Point2<f64>) -> Option<(usize, usize)> {
        let col = screen.x.floor();
        let row = (screen.y / CELL_ASPECT).floor();
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    fn plot_screen(&mut self, screen: Point2<f64>, glyph: char) {
        if let Some((col, row)) = self.cell_for(screen) {
            self.cells[row * self.cols + col] = glyph;
        }
    }

    fn plot(&mut self, p: Point2<f64>, glyph: char) {
        self.plot_screen(self.transform.apply(p), glyph);
    }
}

/// Glyph for a filled dot of the given on-screen radius
fn dot_glyph(radius: f64) -> char {
    if radius >= 4.0 {
        '@'
    } else if radius >= 3.0 {
        '*'
    } else {
        '+'
    }
}

/// Glyph approximating a line's direction in cell space
fn line_glyph(dx: f64, dy: f64) -> char {
    let (cx, cy) = (dx, dy / CELL_ASPECT);
    if cy.abs() < cx.abs() * 0.4 {
        '-'
    } else if cx.abs() < cy.abs() * 0.4 {
        '|'
    } else if (cx > 0.0) == (cy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

impl Canvas for AsciiCanvas {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.cols as f64, self.rows as f64 * CELL_ASPECT)
    }

    fn shows_controls(&self) -> bool {
        false
    }

    fn clear(&mut self, _color: &str) {
        self.cells.fill(' ');
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
    }

    fn scale(&mut self, factor: f64) {
        self.transform.scale(factor);
    }

    fn stroke_circle(&mut self, center: Point2<f64>, radius: f64, _color: &str, _line_width: f64) {
        let steps = (TAU * self.transform.apply_length(radius)).ceil().max(16.0) as usize;
        for i in 0..steps {
            let theta = TAU * i as f64 / steps as f64;
            self.plot(
                Point2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin()),
                '.',
            );
        }
    }

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, _color: &str, _alpha: f64) {
        let glyph = dot_glyph(self.transform.apply_length(radius));
        self.plot(center, glyph);
    }

    fn glow(&mut self, _center: Point2<f64>, _radius: f64, _color: &str) {}

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, _color: &str, _line_width: f64) {
        let a = self.transform.apply(from);
        let b = self.transform.apply(to);
        let d = b - a;
        let glyph = line_glyph(d.x, d.y);
        let steps = d.x.abs().max(d.y.abs() / CELL_ASPECT).ceil().max(1.0);
        if !steps.is_finite() {
            return;
        }
        // Endpoints are left for the dots drawn on top
        for i in 1..steps as usize {
            self.plot_screen(a + d * (i as f64 / steps), glyph);
        }
    }

    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, _color: &str, _alpha: f64) {
        let a = self.transform.apply(origin);
        let w = self.transform.apply_length(width);
        let h = self.transform.apply_length(height);
        let mut y = a.y;
        while y < a.y + h {
            let mut x = a.x;
            while x < a.x + w {
                self.plot_screen(Point2::new(x, y), ' ');
                x += 1.0;
            }
            y += CELL_ASPECT;
        }
    }

    fn text(&mut self, at: Point2<f64>, text: &str, _color: &str, _size: f64) {
        let start = self.transform.apply(at);
        for (i, ch) in text.chars().enumerate() {
            self.plot_screen(Point2::new(start.x + i as f64, start.y), ch);
        }
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
