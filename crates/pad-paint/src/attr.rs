//! Attribute snapshots stamped onto the record stream.
//!
//! Each draw call names an attribute mask; the painter copies the current
//! snapshot of every selected class into the painting, always in the
//! fixed order line, fill, marker, text.

use crate::types::Color;

/// Bits selecting which attribute classes accompany an operation.
pub mod mask {
    pub const NONE: u8 = 0x00;
    pub const LINE: u8 = 0x01;
    pub const FILL: u8 = 0x02;
    pub const MARKER: u8 = 0x04;
    pub const TEXT: u8 = 0x08;
}

/// Line style at the moment of a draw call.
///
/// A width of zero or less makes line-drawn shapes invisible; the painter
/// skips them without recording anything.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineAttr {
    pub color: Color,
    pub width: f32,
    pub style: u16,
}

impl Default for LineAttr {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            style: 1,
        }
    }
}

/// Fill style at the moment of a draw call.
///
/// Style 0 means hollow; filled polygons with a hollow style are skipped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FillAttr {
    pub color: Color,
    pub style: u16,
}

impl Default for FillAttr {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            style: 1001, // solid
        }
    }
}

/// Marker style at the moment of a draw call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerAttr {
    pub color: Color,
    pub style: u16,
    pub size: f32,
}

impl Default for MarkerAttr {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: 1,
            size: 1.0,
        }
    }
}

/// Text style at the moment of a draw call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextAttr {
    pub color: Color,
    pub font: u16,
    pub size: f32,
    pub align: u16,
    pub angle: f32,
}

impl Default for TextAttr {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font: 42,
            size: 12.0,
            align: 11, // left-bottom
            angle: 0.0,
        }
    }
}

/// The full style state held by a painter.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AttrState {
    pub line: LineAttr,
    pub fill: FillAttr,
    pub marker: MarkerAttr,
    pub text: TextAttr,
}
