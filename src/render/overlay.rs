//! Screen-space overlay layout: zoom buttons and the hover tooltip

use crate::projection::Viewport;
use crate::render::ProjectedBody;
use nalgebra::Point2;

const BUTTON_SIZE: f64 = 28.0;
const BUTTON_MARGIN: f64 = 12.0;
const BUTTON_GAP: f64 = 6.0;

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point2::new(x, y),
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point2<f64>) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }
}

/// Overlay buttons drawn in the top-right corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartButton {
    ZoomIn,
    ZoomOut,
    Reset,
}

impl ChartButton {
    pub fn label(&self) -> &'static str {
        match self {
            ChartButton::ZoomIn => "+",
            ChartButton::ZoomOut => "-",
            ChartButton::Reset => "1x",
        }
    }
}

/// Layout of the zoom buttons for a viewport
pub struct ZoomButtons;

impl ZoomButtons {
    /// Buttons stacked vertically in the top-right corner
    pub fn layout(viewport: &Viewport) -> [(ChartButton, Rect); 3] {
        let x = viewport.width - BUTTON_MARGIN - BUTTON_SIZE;
        let y = |slot: f64| BUTTON_MARGIN + slot * (BUTTON_SIZE + BUTTON_GAP);
        [
            (ChartButton::ZoomIn, Rect::new(x, y(0.0), BUTTON_SIZE, BUTTON_SIZE)),
            (ChartButton::ZoomOut, Rect::new(x, y(1.0), BUTTON_SIZE, BUTTON_SIZE)),
            (ChartButton::Reset, Rect::new(x, y(2.0), BUTTON_SIZE, BUTTON_SIZE)),
        ]
    }

    /// Button under a screen point, if any
    pub fn button_at(viewport: &Viewport, screen: Point2<f64>) -> Option<ChartButton> {
        Self::layout(viewport)
            .into_iter()
            .find(|(_, rect)| rect.contains(screen))
            .map(|(button, _)| button)
    }
}

/// Lines of text shown in the hover tooltip
pub fn tooltip_lines(body: &ProjectedBody) -> [String; 2] {
    [
        body.name.clone(),
        format!(
            "Alt {:.1}\u{00b0}  Az {:.1}\u{00b0}",
            body.horizontal.altitude, body.horizontal.azimuth
        ),
    ]
}

/// Compass label for an azimuth, to the nearest of eight points
pub fn compass_point(azimuth_deg: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let sector = ((azimuth_deg.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % 8;
    POINTS[sector]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Horizontal;
    use crate::render::BodyCategory;
    use rstest::rstest;

    #[test]
    fn test_button_hit_testing() {
        let vp = Viewport::new(800.0, 600.0);
        let layout = ZoomButtons::layout(&vp);
        for (button, rect) in layout {
            assert_eq!(ZoomButtons::button_at(&vp, rect.center()), Some(button));
        }
        assert_eq!(ZoomButtons::button_at(&vp, Point2::new(400.0, 300.0)), None);
    }

    #[rstest]
    #[case(0.0, "N")]
    #[case(359.0, "N")]
    #[case(44.0, "NE")]
    #[case(90.0, "E")]
    #[case(181.0, "S")]
    #[case(270.0, "W")]
    #[case(-45.0, "NW")]
    fn test_compass_point(#[case] azimuth: f64, #[case] expected: &str) {
        assert_eq!(compass_point(azimuth), expected);
    }

    #[test]
    fn test_tooltip_text() {
        let body = ProjectedBody {
            name: "Vega".to_string(),
            category: BodyCategory::Star,
            chart: Point2::new(0.0, 0.0),
            horizontal: Horizontal::new(42.26, 301.04),
            magnitude: 0.03,
        };
        let lines = tooltip_lines(&body);
        assert_eq!(lines[0], "Vega");
        assert_eq!(lines[1], "Alt 42.3\u{00b0}  Az 301.0\u{00b0}");
    }
}
