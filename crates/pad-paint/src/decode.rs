//! Decode a painting from bytes.

use crate::attr::{FillAttr, LineAttr, MarkerAttr, TextAttr};
use crate::encode::{cmd, MAGIC};
use crate::error::DecodeError;
use crate::ops::OpKind;
use crate::painting::Painting;
use crate::types::Color;

/// Cursor over the encoded byte stream.
struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEnd);
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_f32(&mut self) -> Result<f32, DecodeError> {
        let bytes = self.take(4)?;
        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_color(&mut self) -> Result<Color, DecodeError> {
        let bytes = self.take(4)?;
        Ok(Color::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    fn read_string(&mut self) -> Result<String, DecodeError> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| DecodeError::InvalidString)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.pos + len > self.data.len() {
            return Err(DecodeError::UnexpectedEnd);
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}

/// Decode a painting from bytes.
pub fn decode(bytes: &[u8]) -> Result<Painting, DecodeError> {
    if bytes.len() < MAGIC.len() || bytes[..4] != MAGIC {
        return Err(DecodeError::InvalidMagic);
    }

    let mut decoder = Decoder::new(&bytes[4..]);
    let mut painting = Painting::new();

    loop {
        let record = decoder.read_u8()?;
        match record {
            cmd::END => break,

            cmd::LINE_ATTR => {
                let color = decoder.read_color()?;
                let width = decoder.read_f32()?;
                let style = decoder.read_u16()?;
                painting.add_line_attr(LineAttr { color, width, style });
            }
            cmd::FILL_ATTR => {
                let color = decoder.read_color()?;
                let style = decoder.read_u16()?;
                painting.add_fill_attr(FillAttr { color, style });
            }
            cmd::MARKER_ATTR => {
                let color = decoder.read_color()?;
                let style = decoder.read_u16()?;
                let size = decoder.read_f32()?;
                painting.add_marker_attr(MarkerAttr { color, style, size });
            }
            cmd::TEXT_ATTR => {
                let color = decoder.read_color()?;
                let font = decoder.read_u16()?;
                let size = decoder.read_f32()?;
                let align = decoder.read_u16()?;
                let angle = decoder.read_f32()?;
                painting.add_text_attr(TextAttr { color, font, size, align, angle });
            }

            cmd::OPER_PLINE => {
                let n = decoder.read_u32()?;
                read_oper(&mut decoder, &mut painting, OpKind::PolyLine(n))?;
            }
            cmd::OPER_RECT => read_oper(&mut decoder, &mut painting, OpKind::Rect)?,
            cmd::OPER_BBOX => read_oper(&mut decoder, &mut painting, OpKind::FillBox)?,
            cmd::OPER_PFILL => {
                let n = decoder.read_u32()?;
                read_oper(&mut decoder, &mut painting, OpKind::FillArea(n))?;
            }
            cmd::OPER_PMARK => {
                let n = decoder.read_u32()?;
                read_oper(&mut decoder, &mut painting, OpKind::PolyMarker(n))?;
            }
            cmd::OPER_TEXT => {
                let text = decoder.read_string()?;
                read_oper(&mut decoder, &mut painting, OpKind::Text(text))?;
            }

            other => return Err(DecodeError::InvalidRecord(other)),
        }
    }

    Ok(painting)
}

/// Append the operation and fill its reserved span from the stream.
fn read_oper(
    decoder: &mut Decoder<'_>,
    painting: &mut Painting,
    kind: OpKind,
) -> Result<(), DecodeError> {
    let count = kind.coord_count();
    painting.add_oper(kind);
    let buf = painting.reserve(count);
    for slot in buf.iter_mut() {
        *slot = decoder.read_f32()?;
    }
    Ok(())
}
