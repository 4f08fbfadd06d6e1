//! The painting session: owner of the append-only record stream.

use crate::attr::{FillAttr, LineAttr, MarkerAttr, TextAttr};
use crate::ops::OpKind;

/// One entry in the append-only stream.
///
/// Attribute records restyle the consumer; operation records reference a
/// span of the flat coordinate buffer starting at `offset` and running
/// for `kind.coord_count()` slots.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    LineAttr(LineAttr),
    FillAttr(FillAttr),
    MarkerAttr(MarkerAttr),
    TextAttr(TextAttr),
    Oper { kind: OpKind, offset: usize },
}

/// A growing sequence of drawing records plus their coordinate storage.
///
/// Records are created synchronously inside one draw call, appended once,
/// and never mutated afterward. The coordinate slots for an operation are
/// reserved up front via [`Painting::reserve`] and filled through the
/// returned slice before the next append.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Painting {
    records: Vec<Record>,
    coords: Vec<f32>,
}

impl Painting {
    /// Create an empty painting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line attribute snapshot.
    pub fn add_line_attr(&mut self, attr: LineAttr) {
        self.records.push(Record::LineAttr(attr));
    }

    /// Append a fill attribute snapshot.
    pub fn add_fill_attr(&mut self, attr: FillAttr) {
        self.records.push(Record::FillAttr(attr));
    }

    /// Append a marker attribute snapshot.
    pub fn add_marker_attr(&mut self, attr: MarkerAttr) {
        self.records.push(Record::MarkerAttr(attr));
    }

    /// Append a text attribute snapshot.
    pub fn add_text_attr(&mut self, attr: TextAttr) {
        self.records.push(Record::TextAttr(attr));
    }

    /// Append an operation record.
    ///
    /// Its coordinate span starts at the current end of the flat buffer;
    /// reserve the slots immediately after appending.
    pub fn add_oper(&mut self, kind: OpKind) {
        let offset = self.coords.len();
        self.records.push(Record::Oper { kind, offset });
    }

    /// Grow the coordinate buffer by `count` slots and return the
    /// writable tail.
    pub fn reserve(&mut self, count: usize) -> &mut [f32] {
        let at = self.coords.len();
        self.coords.resize(at + count, 0.0);
        &mut self.coords[at..]
    }

    /// All records, in append order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The flat coordinate buffer.
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Coordinate span of an operation record.
    ///
    /// Returns `None` for attribute records, and for an operation whose
    /// span outruns the buffer (possible only when the reservation step
    /// was skipped).
    pub fn coords_of(&self, record: &Record) -> Option<&[f32]> {
        match record {
            Record::Oper { kind, offset } => {
                self.coords.get(*offset..*offset + kind.coord_count())
            }
            _ => None,
        }
    }
}
