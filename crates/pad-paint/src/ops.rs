//! Typed operation records.
//!
//! Every operation is self-describing: the variant carries its point
//! count (or text), so the number of coordinate slots it owns in the
//! flat buffer is derivable without a separate length field.

/// Label recorded in place of wide/extended-charset text content.
///
/// The stream format carries UTF-8 only; UTF-16 input is not translated
/// and its content is dropped, with this placeholder marking the record.
pub const WIDE_TEXT_PLACEHOLDER: &str = "wchar_t";

/// The kind of a drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum OpKind {
    /// Connected line strip through n points.
    PolyLine(u32),
    /// Hollow rectangle outline, given as two corner points.
    Rect,
    /// Filled rectangle, given as two corner points.
    FillBox,
    /// Filled polygon with n vertices.
    FillArea(u32),
    /// Marker at each of n points.
    PolyMarker(u32),
    /// Text anchored at one point.
    Text(String),
}

impl OpKind {
    /// Number of coordinate slots the operation owns in the flat buffer.
    pub fn coord_count(&self) -> usize {
        match self {
            OpKind::PolyLine(n) | OpKind::FillArea(n) | OpKind::PolyMarker(n) => 2 * *n as usize,
            OpKind::Rect | OpKind::FillBox => 4,
            OpKind::Text(_) => 2,
        }
    }

    /// Self-describing label understood by stream consumers.
    ///
    /// Point-counted shapes encode their count in the label
    /// (e.g. `"pline:2"`); text carries its content (`"text:hi"`).
    pub fn label(&self) -> String {
        match self {
            OpKind::PolyLine(n) => format!("pline:{n}"),
            OpKind::Rect => "rect".to_string(),
            OpKind::FillBox => "bbox".to_string(),
            OpKind::FillArea(n) => format!("pfill:{n}"),
            OpKind::PolyMarker(n) => format!("pmark:{n}"),
            OpKind::Text(text) => format!("text:{text}"),
        }
    }

    /// Text record standing in for untranslated wide text.
    pub fn wide_text() -> Self {
        OpKind::Text(WIDE_TEXT_PLACEHOLDER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_counts() {
        assert_eq!(OpKind::PolyLine(2).coord_count(), 4);
        assert_eq!(OpKind::PolyLine(5).coord_count(), 10);
        assert_eq!(OpKind::Rect.coord_count(), 4);
        assert_eq!(OpKind::FillBox.coord_count(), 4);
        assert_eq!(OpKind::FillArea(3).coord_count(), 6);
        assert_eq!(OpKind::PolyMarker(1).coord_count(), 2);
        assert_eq!(OpKind::Text("hi".into()).coord_count(), 2);
    }

    #[test]
    fn labels() {
        assert_eq!(OpKind::PolyLine(2).label(), "pline:2");
        assert_eq!(OpKind::Rect.label(), "rect");
        assert_eq!(OpKind::FillBox.label(), "bbox");
        assert_eq!(OpKind::FillArea(3).label(), "pfill:3");
        assert_eq!(OpKind::PolyMarker(7).label(), "pmark:7");
        assert_eq!(OpKind::Text("hi".into()).label(), "text:hi");
    }

    #[test]
    fn wide_text_placeholder() {
        assert_eq!(OpKind::wide_text().label(), "text:wchar_t");
        assert_eq!(OpKind::wide_text().coord_count(), 2);
    }
}
