//! Draw a frame into a svg document

use std::fmt::{Display, Formatter};

use crate::config::Viewport;
use crate::draw::RenderBackend;
use crate::frame::FrameRenderPlan;
use crate::store::Point;

/// Radius of the dot drawn for every curve point
const CURVE_DOT_RADIUS: f64 = 0.5;

/// A complete svg document
pub struct SVG {
    /// `(x, y, width, height)` of the `viewBox` attribute
    pub view_box: (f64, f64, f64, f64),
    /// Elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    /// Append an element, it is drawn on top of all previous ones
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        Ok(())
    }
}

/// A filled or outlined circle, position in svg coordinates
pub struct Circle {
    /// Center
    pub center: (f64, f64),
    /// Radius
    pub radius: f64,
    /// Fill color, `None` draws only the outline
    pub fill: Option<&'static str>,
    /// Outline color
    pub stroke: &'static str,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\"",
            self.center.0,
            self.center.1,
            self.radius,
            self.fill.unwrap_or("none"),
            self.stroke
        )?;
        writeln!(f, "/>")?;
        Ok(())
    }
}

/// Colors used by [`SvgBackend`]
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Canvas background
    pub background: &'static str,
    /// Curve dots
    pub curve: &'static str,
    /// Control point markers
    pub marker: &'static str,
    /// Ring around the highlighted marker
    pub highlight: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: "black",
            curve: "white",
            marker: "white",
            highlight: "white",
        }
    }
}

/// [`RenderBackend`] writing every frame as a standalone svg document.
///
/// The editor's y axis points up while svg's points down, so points are flipped using the
/// viewport's height.
pub struct SvgBackend {
    viewport: Viewport,
    palette: Palette,
    document: String,
    frames: usize,
}

impl SvgBackend {
    /// Create a backend drawing onto a canvas of the given size
    pub fn new(viewport: Viewport) -> Self {
        SvgBackend {
            viewport,
            palette: Palette::default(),
            document: String::new(),
            frames: 0,
        }
    }

    /// Use different colors
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The document of the last drawn frame
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn position(&self, point: &Point) -> (f64, f64) {
        self.viewport.canvas_to_window(point)
    }

    /// Convert a plan into an svg document
    pub fn render(&self, plan: &FrameRenderPlan) -> SVG {
        let mut svg = SVG {
            view_box: (0.0, 0.0, self.viewport.width, self.viewport.height),
            elements: Vec::with_capacity(plan.curve.len() + 2 * plan.markers.len() + 1),
        };
        svg.add_elem(Background {
            width: self.viewport.width,
            height: self.viewport.height,
            color: self.palette.background,
        });

        for point in plan.curve.iter() {
            svg.add_elem(Circle {
                center: self.position(point),
                radius: CURVE_DOT_RADIUS,
                fill: Some(self.palette.curve),
                stroke: "none",
            });
        }

        for marker in plan.markers.iter() {
            let center = self.position(&marker.center);
            svg.add_elem(Circle {
                center,
                radius: marker.radius,
                fill: None,
                stroke: self.palette.marker,
            });
            if let Some(radius) = marker.highlight_radius {
                svg.add_elem(Circle {
                    center,
                    radius,
                    fill: None,
                    stroke: self.palette.highlight,
                });
            }
        }

        svg
    }
}

impl RenderBackend for SvgBackend {
    fn draw_frame(&mut self, plan: &FrameRenderPlan) {
        self.document = self.render(plan).to_string();
        self.frames += 1;
    }
}

struct Background {
    width: f64,
    height: f64,
    color: &'static str,
}

impl Display for Background {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width, self.height, self.color
        )
    }
}
