//! A canvas that records draw calls in screen space

use crate::projection::Viewport;
use crate::render::{Affine, Canvas};
use nalgebra::Point2;

/// A draw call with its geometry already mapped through the transform stack
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: String,
    },
    StrokeCircle {
        center: Point2<f64>,
        radius: f64,
        color: String,
    },
    FillCircle {
        center: Point2<f64>,
        radius: f64,
        color: String,
        alpha: f64,
    },
    Glow {
        center: Point2<f64>,
        radius: f64,
        color: String,
    },
    Line {
        from: Point2<f64>,
        to: Point2<f64>,
        color: String,
    },
    FillRect {
        origin: Point2<f64>,
        width: f64,
        height: f64,
        color: String,
    },
    Text {
        at: Point2<f64>,
        text: String,
        color: String,
    },
}

/// Canvas that keeps every draw call instead of rasterising it
///
/// Used by tests and by hosts that forward draw lists elsewhere.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    viewport: Viewport,
    transform: Affine,
    stack: Vec<Affine>,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            transform: Affine::identity(),
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, keeping the transform state
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }
}

impl Canvas for RecordingCanvas {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, color: &str) {
        self.commands.push(DrawCommand::Clear {
            color: color.to_string(),
        });
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

    fn stroke_circle(&mut self, center: Point2<f64>, radius: f64, color: &str, _line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center: self.transform.apply(center),
            radius: self.transform.apply_length(radius),
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: &str, alpha: f64) {
        self.commands.push(DrawCommand::FillCircle {
            center: self.transform.apply(center),
            radius: self.transform.apply_length(radius),
            color: color.to_string(),
            alpha,
        });
    }

    fn glow(&mut self, center: Point2<f64>, radius: f64, color: &str) {
        self.commands.push(DrawCommand::Glow {
            center: self.transform.apply(center),
            radius: self.transform.apply_length(radius),
            color: color.to_string(),
        });
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: &str, _line_width: f64) {
        self.commands.push(DrawCommand::Line {
            from: self.transform.apply(from),
            to: self.transform.apply(to),
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: &str, _alpha: f64) {
        self.commands.push(DrawCommand::FillRect {
            origin: self.transform.apply(origin),
            width: self.transform.apply_length(width),
            height: self.transform.apply_length(height),
            color: color.to_string(),
        });
    }

    fn text(&mut self, at: Point2<f64>, text: &str, color: &str, _size: f64) {
        self.commands.push(DrawCommand::Text {
            at: self.transform.apply(at),
            text: text.to_string(),
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_screen_space() {
        let mut canvas = RecordingCanvas::new(200.0, 100.0);
        canvas.save();
        canvas.translate(10.0, 20.0);
        canvas.scale(2.0);
        canvas.fill_circle(Point2::new(5.0, 5.0), 3.0, "#fff", 1.0);
        canvas.restore();
        canvas.text(Point2::new(1.0, 1.0), "hi", "#fff", 10.0);

        assert_eq!(
            canvas.commands()[0],
            DrawCommand::FillCircle {
                center: Point2::new(20.0, 30.0),
                radius: 6.0,
                color: "#fff".to_string(),
                alpha: 1.0,
            }
        );
        assert_eq!(canvas.texts(), vec!["hi"]);
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.transform(), Affine::identity());
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut canvas = RecordingCanvas::new(10.0, 10.0);
        canvas.translate(3.0, 0.0);
        canvas.restore();
        canvas.line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), "#000", 1.0);
        assert!(matches!(
            canvas.take_commands()[0],
            DrawCommand::Line { from, .. } if from == Point2::new(3.0, 0.0)
        ));
        assert!(canvas.commands().is_empty());
    }
}
