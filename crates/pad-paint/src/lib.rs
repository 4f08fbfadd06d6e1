//! # pad-paint - Drawing-Operation Recorder
//!
//! Records abstract 2D vector draw calls (lines, boxes, filled areas,
//! polylines, markers, text) as a compact, self-describing record stream
//! owned by a painting session, for later consumption by a rendering
//! surface.
//!
//! ## Overview
//!
//! - **Recording**: [`PadPainter`] entry points append attribute-tagged,
//!   size-prefixed records to an attached [`Painting`]
//! - **Serialization**: [`encode`] / [`decode`] round-trip a painting
//!   through a compact byte stream
//! - **Consumption**: implement [`PadRenderer`] and [`replay`] the stream
//!
//! Control flow is strictly one-directional: caller → painter → painting.
//! The painter holds no drawing state beyond the currently configured
//! line/fill/marker/text attributes; the painting owns the append-only
//! buffer. With no painting attached, every draw call is a documented
//! no-op.
//!
//! ## Example
//!
//! ```ignore
//! use pad_paint::{PadPainter, Painting};
//!
//! let mut painter = PadPainter::new();
//! painter.set_painting(Painting::new());
//!
//! painter.set_line_width(2.0);
//! painter.draw_line(0.0, 0.0, 100.0, 100.0);
//! painter.draw_text(10.0, 20.0, "title");
//!
//! let painting = painter.take_painting().unwrap();
//! let bytes = pad_paint::encode(&painting);
//! ```

mod attr;
mod decode;
mod encode;
mod error;
mod ops;
mod painter;
mod painting;
mod render;
mod types;

pub use attr::{mask, AttrState, FillAttr, LineAttr, MarkerAttr, TextAttr};
pub use decode::decode;
pub use encode::{encode, MAGIC};
pub use error::{DecodeError, ReplayError};
pub use ops::{OpKind, WIDE_TEXT_PLACEHOLDER};
pub use painter::{BoxMode, PadPainter};
pub use painting::{Painting, Record};
pub use render::{replay, PadRenderer};
pub use types::Color;
