//! Replay trait and dispatch for stream consumers.

use crate::attr::{FillAttr, LineAttr, MarkerAttr, TextAttr};
use crate::error::ReplayError;
use crate::ops::OpKind;
use crate::painting::{Painting, Record};

/// Trait for consuming a recorded painting.
///
/// Implement this to drive your target (screen, SVG, remote canvas, ...).
/// Attribute callbacks arrive before the operation they style, in the
/// fixed order line, fill, marker, text. Coordinate slices are interleaved
/// x,y pairs.
pub trait PadRenderer {
    /// Adopt a line attribute snapshot.
    fn set_line_attr(&mut self, attr: LineAttr);

    /// Adopt a fill attribute snapshot.
    fn set_fill_attr(&mut self, attr: FillAttr);

    /// Adopt a marker attribute snapshot.
    fn set_marker_attr(&mut self, attr: MarkerAttr);

    /// Adopt a text attribute snapshot.
    fn set_text_attr(&mut self, attr: TextAttr);

    /// Connected line strip through the given points.
    fn poly_line(&mut self, xy: &[f32]);

    /// Hollow rectangle outline between two corners.
    fn rect(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Filled rectangle between two corners.
    fn fill_box(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Filled polygon over the given vertices.
    fn fill_area(&mut self, xy: &[f32]);

    /// Marker at each of the given points.
    fn poly_marker(&mut self, xy: &[f32]);

    /// Text anchored at (x, y).
    fn text(&mut self, x: f32, y: f32, text: &str);
}

/// Replay a painting's records, in order, against a renderer.
pub fn replay<R: PadRenderer>(painting: &Painting, renderer: &mut R) -> Result<(), ReplayError> {
    for record in painting.records() {
        match record {
            Record::LineAttr(a) => renderer.set_line_attr(*a),
            Record::FillAttr(a) => renderer.set_fill_attr(*a),
            Record::MarkerAttr(a) => renderer.set_marker_attr(*a),
            Record::TextAttr(a) => renderer.set_text_attr(*a),
            Record::Oper { kind, offset } => {
                let expected = kind.coord_count();
                let coords = painting
                    .coords()
                    .get(*offset..*offset + expected)
                    .ok_or_else(|| ReplayError::TruncatedCoords {
                        label: kind.label(),
                        expected,
                        available: painting.coords().len().saturating_sub(*offset),
                    })?;

                match kind {
                    OpKind::PolyLine(_) => renderer.poly_line(coords),
                    OpKind::Rect => renderer.rect(coords[0], coords[1], coords[2], coords[3]),
                    OpKind::FillBox => {
                        renderer.fill_box(coords[0], coords[1], coords[2], coords[3])
                    }
                    OpKind::FillArea(_) => renderer.fill_area(coords),
                    OpKind::PolyMarker(_) => renderer.poly_marker(coords),
                    OpKind::Text(text) => renderer.text(coords[0], coords[1], text),
                }
            }
        }
    }

    Ok(())
}
