//! The drawing-operation recorder.

use crate::attr::{mask, AttrState, FillAttr, LineAttr, MarkerAttr, TextAttr};
use crate::ops::OpKind;
use crate::painting::Painting;
use crate::types::Color;

/// How a box is painted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoxMode {
    /// Border only, using the line attributes.
    Hollow,
    /// Interior only, using the fill attributes.
    Filled,
}

/// Records abstract draw calls into an attached [`Painting`].
///
/// The painter holds the currently configured line/fill/marker/text
/// attributes and nothing else. Each draw call appends the attribute
/// snapshots its shape class needs, then the operation record, then fills
/// the reserved coordinate slots. With no painting attached every draw
/// call is a no-op.
///
/// Not safe for concurrent use against one painting: reservation and the
/// subsequent fill are separate steps on shared storage.
#[derive(Debug, Default)]
pub struct PadPainter {
    attrs: AttrState,
    painting: Option<Painting>,
}

impl PadPainter {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Attach a painting; subsequent draw calls append to it.
    pub fn set_painting(&mut self, painting: Painting) {
        self.painting = Some(painting);
    }

    /// Detach and return the painting, leaving the painter a no-op.
    pub fn take_painting(&mut self) -> Option<Painting> {
        self.painting.take()
    }

    /// The attached painting, if any.
    pub fn painting(&self) -> Option<&Painting> {
        self.painting.as_ref()
    }

    // ========================================================================
    // Attribute state
    // ========================================================================

    pub fn line_attr(&self) -> LineAttr {
        self.attrs.line
    }

    pub fn set_line_attr(&mut self, attr: LineAttr) {
        self.attrs.line = attr;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.attrs.line.width = width;
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.attrs.line.color = color;
    }

    pub fn set_line_style(&mut self, style: u16) {
        self.attrs.line.style = style;
    }

    pub fn fill_attr(&self) -> FillAttr {
        self.attrs.fill
    }

    pub fn set_fill_attr(&mut self, attr: FillAttr) {
        self.attrs.fill = attr;
    }

    pub fn set_fill_style(&mut self, style: u16) {
        self.attrs.fill.style = style;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.attrs.fill.color = color;
    }

    pub fn marker_attr(&self) -> MarkerAttr {
        self.attrs.marker
    }

    pub fn set_marker_attr(&mut self, attr: MarkerAttr) {
        self.attrs.marker = attr;
    }

    pub fn text_attr(&self) -> TextAttr {
        self.attrs.text
    }

    pub fn set_text_attr(&mut self, attr: TextAttr) {
        self.attrs.text = attr;
    }

    // ========================================================================
    // Core operation
    // ========================================================================

    /// Append the attribute records selected by `attr_mask` (fixed order:
    /// line, fill, marker, text), then the operation record, then reserve
    /// its coordinate slots.
    ///
    /// Returns `None` when no painting is attached; the caller then skips
    /// writing coordinates and the draw call is a no-op.
    fn store_operation(&mut self, kind: OpKind, attr_mask: u8) -> Option<&mut [f32]> {
        let painting = self.painting.as_mut()?;

        if attr_mask & mask::LINE != 0 {
            painting.add_line_attr(self.attrs.line);
        }
        if attr_mask & mask::FILL != 0 {
            painting.add_fill_attr(self.attrs.fill);
        }
        if attr_mask & mask::MARKER != 0 {
            painting.add_marker_attr(self.attrs.marker);
        }
        if attr_mask & mask::TEXT != 0 {
            painting.add_text_attr(self.attrs.text);
        }

        let count = kind.coord_count();
        painting.add_oper(kind);
        Some(painting.reserve(count))
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// Record a single line segment.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        if self.attrs.line.width <= 0.0 {
            return;
        }

        if let Some(buf) = self.store_operation(OpKind::PolyLine(2), mask::LINE) {
            buf[0] = x1;
            buf[1] = y1;
            buf[2] = x2;
            buf[3] = y2;
        }
    }

    /// Record a line given in normalized (0-1) coordinates.
    ///
    /// Translation to device coordinates is not implemented; the values
    /// are recorded as given.
    pub fn draw_line_ndc(&mut self, u1: f32, v1: f32, u2: f32, v2: f32) {
        if self.attrs.line.width <= 0.0 {
            return;
        }

        log::warn!("draw_line_ndc: normalized coordinates recorded untranslated");

        if let Some(buf) = self.store_operation(OpKind::PolyLine(2), mask::LINE) {
            buf[0] = u1;
            buf[1] = v1;
            buf[2] = u2;
            buf[3] = v2;
        }
    }

    /// Record a box between two corner points.
    pub fn draw_box(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, mode: BoxMode) {
        if self.attrs.line.width <= 0.0 && mode == BoxMode::Hollow {
            return;
        }

        let buf = match mode {
            BoxMode::Hollow => self.store_operation(OpKind::Rect, mask::LINE),
            BoxMode::Filled => self.store_operation(OpKind::FillBox, mask::FILL),
        };

        if let Some(buf) = buf {
            buf[0] = x1;
            buf[1] = y1;
            buf[2] = x2;
            buf[3] = y2;
        }
    }

    /// Record a filled polygon; the point count is the shorter of the two
    /// slices.
    pub fn draw_fill_area(&mut self, xs: &[f32], ys: &[f32]) {
        let n = xs.len().min(ys.len());
        if self.attrs.fill.style == 0 || n < 3 {
            return;
        }

        if let Some(buf) = self.store_operation(OpKind::FillArea(n as u32), mask::FILL) {
            for i in 0..n {
                buf[i * 2] = xs[i];
                buf[i * 2 + 1] = ys[i];
            }
        }
    }

    /// Record a polyline; the point count is the shorter of the two
    /// slices.
    pub fn draw_poly_line(&mut self, xs: &[f32], ys: &[f32]) {
        let n = xs.len().min(ys.len());
        if self.attrs.line.width <= 0.0 || n < 2 {
            return;
        }

        if let Some(buf) = self.store_operation(OpKind::PolyLine(n as u32), mask::LINE) {
            for i in 0..n {
                buf[i * 2] = xs[i];
                buf[i * 2 + 1] = ys[i];
            }
        }
    }

    /// Record a polyline given in normalized (0-1) coordinates.
    ///
    /// Translation to device coordinates is not implemented; the values
    /// are recorded as given.
    pub fn draw_poly_line_ndc(&mut self, us: &[f32], vs: &[f32]) {
        let n = us.len().min(vs.len());
        if self.attrs.line.width <= 0.0 || n < 2 {
            return;
        }

        log::warn!("draw_poly_line_ndc: normalized coordinates recorded untranslated");

        if let Some(buf) = self.store_operation(OpKind::PolyLine(n as u32), mask::LINE) {
            for i in 0..n {
                buf[i * 2] = us[i];
                buf[i * 2 + 1] = vs[i];
            }
        }
    }

    /// Record a marker at each point; the point count is the shorter of
    /// the two slices.
    pub fn draw_poly_marker(&mut self, xs: &[f32], ys: &[f32]) {
        let n = xs.len().min(ys.len());
        if n < 1 {
            return;
        }

        let attrs = mask::LINE | mask::MARKER;
        if let Some(buf) = self.store_operation(OpKind::PolyMarker(n as u32), attrs) {
            for i in 0..n {
                buf[i * 2] = xs[i];
                buf[i * 2 + 1] = ys[i];
            }
        }
    }

    /// Record text anchored at a point.
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        if let Some(buf) = self.store_operation(OpKind::Text(text.to_string()), mask::TEXT) {
            buf[0] = x;
            buf[1] = y;
        }
    }

    /// Record text anchored at a point in normalized (0-1) coordinates.
    ///
    /// Translation to device coordinates is not implemented; the values
    /// are recorded as given.
    pub fn draw_text_ndc(&mut self, u: f32, v: f32, text: &str) {
        log::warn!("draw_text_ndc: normalized coordinates recorded untranslated");

        if let Some(buf) = self.store_operation(OpKind::Text(text.to_string()), mask::TEXT) {
            buf[0] = u;
            buf[1] = v;
        }
    }

    /// Record wide-charset text.
    ///
    /// The content is not carried through the stream; a placeholder label
    /// is recorded in its place.
    pub fn draw_text_utf16(&mut self, x: f32, y: f32, _units: &[u16]) {
        if let Some(buf) = self.store_operation(OpKind::wide_text(), mask::TEXT) {
            buf[0] = x;
            buf[1] = y;
        }
    }

    /// Record wide-charset text in normalized (0-1) coordinates.
    ///
    /// Combines both limitations: untranslated coordinates and a
    /// placeholder in place of the content.
    pub fn draw_text_utf16_ndc(&mut self, u: f32, v: f32, _units: &[u16]) {
        log::warn!("draw_text_utf16_ndc: normalized coordinates recorded untranslated");

        if let Some(buf) = self.store_operation(OpKind::wide_text(), mask::TEXT) {
            buf[0] = u;
            buf[1] = v;
        }
    }

    /// Pixel blits have no stream representation; always a no-op.
    pub fn draw_pixels(&mut self, _pixels: &[u8], _width: u32, _height: u32, _dst_x: i32, _dst_y: i32) {
        log::debug!("draw_pixels: pixel blit ignored");
    }
}
