//! Encode a painting to bytes.

use crate::ops::OpKind;
use crate::painting::{Painting, Record};
use crate::types::Color;

/// Magic header: "PAD" + version byte.
pub const MAGIC: [u8; 4] = [b'P', b'A', b'D', 0x01];

// Record bytes, shared with decode.
pub(crate) mod cmd {
    pub const END: u8 = 0x00;

    pub const LINE_ATTR: u8 = 0x01;
    pub const FILL_ATTR: u8 = 0x02;
    pub const MARKER_ATTR: u8 = 0x03;
    pub const TEXT_ATTR: u8 = 0x04;

    pub const OPER_PLINE: u8 = 0x10;
    pub const OPER_RECT: u8 = 0x11;
    pub const OPER_BBOX: u8 = 0x12;
    pub const OPER_PFILL: u8 = 0x13;
    pub const OPER_PMARK: u8 = 0x14;
    pub const OPER_TEXT: u8 = 0x15;
}

/// Encode a painting to bytes.
pub fn encode(painting: &Painting) -> Vec<u8> {
    let mut out = Vec::with_capacity(64 + painting.coords().len() * 4);

    out.extend_from_slice(&MAGIC);

    for record in painting.records() {
        match record {
            Record::LineAttr(a) => {
                out.push(cmd::LINE_ATTR);
                write_color(&mut out, a.color);
                write_f32(&mut out, a.width);
                write_u16(&mut out, a.style);
            }
            Record::FillAttr(a) => {
                out.push(cmd::FILL_ATTR);
                write_color(&mut out, a.color);
                write_u16(&mut out, a.style);
            }
            Record::MarkerAttr(a) => {
                out.push(cmd::MARKER_ATTR);
                write_color(&mut out, a.color);
                write_u16(&mut out, a.style);
                write_f32(&mut out, a.size);
            }
            Record::TextAttr(a) => {
                out.push(cmd::TEXT_ATTR);
                write_color(&mut out, a.color);
                write_u16(&mut out, a.font);
                write_f32(&mut out, a.size);
                write_u16(&mut out, a.align);
                write_f32(&mut out, a.angle);
            }
            Record::Oper { kind, .. } => {
                let coords = painting.coords_of(record).unwrap_or(&[]);
                encode_oper(&mut out, kind, coords);
            }
        }
    }

    out.push(cmd::END);

    out
}

fn encode_oper(out: &mut Vec<u8>, kind: &OpKind, coords: &[f32]) {
    match kind {
        OpKind::PolyLine(n) => {
            out.push(cmd::OPER_PLINE);
            write_u32(out, *n);
        }
        OpKind::Rect => out.push(cmd::OPER_RECT),
        OpKind::FillBox => out.push(cmd::OPER_BBOX),
        OpKind::FillArea(n) => {
            out.push(cmd::OPER_PFILL);
            write_u32(out, *n);
        }
        OpKind::PolyMarker(n) => {
            out.push(cmd::OPER_PMARK);
            write_u32(out, *n);
        }
        OpKind::Text(text) => {
            out.push(cmd::OPER_TEXT);
            write_string(out, text);
        }
    }

    for &v in coords {
        write_f32(out, v);
    }
}

// ============================================================================
// Write helpers
// ============================================================================

fn write_f32(out: &mut Vec<u8>, v: f32) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn write_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn write_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn write_color(out: &mut Vec<u8>, c: Color) {
    out.push(c.r);
    out.push(c.g);
    out.push(c.b);
    out.push(c.a);
}

fn write_string(out: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    write_u32(out, bytes.len() as u32);
    out.extend_from_slice(bytes);
}
