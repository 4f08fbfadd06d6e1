//! End-to-end scenarios for the recorder, the byte stream, and replay.

use pad_paint::{
    decode, encode, replay, BoxMode, FillAttr, LineAttr, MarkerAttr, OpKind, PadPainter,
    PadRenderer, Painting, Record, TextAttr,
};

fn painter() -> PadPainter {
    let mut p = PadPainter::new();
    p.set_painting(Painting::new());
    p
}

fn coord_len(p: &PadPainter) -> usize {
    p.painting().map(|painting| painting.coords().len()).unwrap_or(0)
}

#[test]
fn disqualified_shapes_produce_zero_growth() {
    let mut p = painter();
    p.set_line_width(0.0);

    p.draw_line(0.0, 0.0, 5.0, 5.0);
    p.draw_poly_line(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]);
    p.draw_box(0.0, 0.0, 1.0, 1.0, BoxMode::Hollow);

    p.set_fill_style(0);
    p.draw_fill_area(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]);

    p.draw_poly_marker(&[], &[]);

    assert!(p.painting().unwrap().is_empty());
    assert_eq!(coord_len(&p), 0);
}

#[test]
fn slot_counts_match_shape_contracts() {
    let mut p = painter();

    p.draw_line(0.0, 0.0, 1.0, 1.0);
    assert_eq!(coord_len(&p), 4);

    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
    p.draw_poly_line(&xs, &ys);
    assert_eq!(coord_len(&p), 4 + 10);

    p.draw_text(2.0, 3.0, "hi");
    assert_eq!(coord_len(&p), 4 + 10 + 2);
}

#[test]
fn polygon_scenario() {
    let mut p = painter();
    p.set_fill_style(1);
    p.draw_fill_area(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]);

    let painting = p.take_painting().unwrap();
    let records = painting.records();
    assert_eq!(records.len(), 2);
    assert!(matches!(records[0], Record::FillAttr(_)));

    let Record::Oper { kind, .. } = &records[1] else {
        panic!("expected operation record");
    };
    assert_eq!(kind.label(), "pfill:3");
    assert_eq!(
        painting.coords_of(&records[1]),
        Some(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0][..])
    );
}

#[test]
fn text_scenario() {
    let mut p = painter();
    p.draw_text(2.0, 3.0, "hi");

    let painting = p.take_painting().unwrap();
    let records = painting.records();

    let Record::Oper { kind, .. } = &records[1] else {
        panic!("expected operation record");
    };
    assert_eq!(kind.label(), "text:hi");
    assert_eq!(painting.coords_of(&records[1]), Some(&[2.0, 3.0][..]));
}

#[test]
fn line_coordinates_roundtrip_in_order() {
    let mut p = painter();
    p.draw_line(1.0, 2.0, 3.0, 4.0);

    let painting = p.take_painting().unwrap();
    let oper = painting
        .records()
        .iter()
        .find(|r| matches!(r, Record::Oper { .. }))
        .unwrap();
    assert_eq!(painting.coords_of(oper), Some(&[1.0, 2.0, 3.0, 4.0][..]));
}

#[test]
fn attribute_order_is_line_then_marker() {
    let mut p = painter();
    p.draw_poly_marker(&[1.0, 2.0], &[3.0, 4.0]);

    let painting = p.take_painting().unwrap();
    let records = painting.records();
    assert!(matches!(records[0], Record::LineAttr(_)));
    assert!(matches!(records[1], Record::MarkerAttr(_)));
    assert!(matches!(
        records[2],
        Record::Oper { kind: OpKind::PolyMarker(2), .. }
    ));
}

#[test]
fn detached_painter_is_silent() {
    let mut p = PadPainter::new();
    p.draw_line(0.0, 0.0, 5.0, 5.0);
    p.draw_fill_area(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]);
    p.draw_text(1.0, 1.0, "hi");
    p.draw_pixels(&[255, 0, 0, 255], 1, 1, 0, 0);

    assert!(p.take_painting().is_none());
}

#[test]
fn attribute_snapshots_are_copied_not_shared() {
    let mut p = painter();
    p.set_line_width(2.0);
    p.draw_line(0.0, 0.0, 1.0, 1.0);
    p.set_line_width(5.0);
    p.draw_line(0.0, 0.0, 1.0, 1.0);

    let painting = p.take_painting().unwrap();
    let widths: Vec<f32> = painting
        .records()
        .iter()
        .filter_map(|r| match r {
            Record::LineAttr(a) => Some(a.width),
            _ => None,
        })
        .collect();
    assert_eq!(widths, vec![2.0, 5.0]);
}

/// Renderer that records calls as strings, for comparing replays.
#[derive(Default, PartialEq, Debug)]
struct TraceRenderer {
    calls: Vec<String>,
}

impl PadRenderer for TraceRenderer {
    fn set_line_attr(&mut self, attr: LineAttr) {
        self.calls.push(format!("line({}, {})", attr.width, attr.style));
    }
    fn set_fill_attr(&mut self, attr: FillAttr) {
        self.calls.push(format!("fill({})", attr.style));
    }
    fn set_marker_attr(&mut self, attr: MarkerAttr) {
        self.calls.push(format!("marker({}, {})", attr.style, attr.size));
    }
    fn set_text_attr(&mut self, attr: TextAttr) {
        self.calls.push(format!("textattr({}, {})", attr.font, attr.size));
    }
    fn poly_line(&mut self, xy: &[f32]) {
        self.calls.push(format!("poly_line({xy:?})"));
    }
    fn rect(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(format!("rect({x1}, {y1}, {x2}, {y2})"));
    }
    fn fill_box(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(format!("fill_box({x1}, {y1}, {x2}, {y2})"));
    }
    fn fill_area(&mut self, xy: &[f32]) {
        self.calls.push(format!("fill_area({xy:?})"));
    }
    fn poly_marker(&mut self, xy: &[f32]) {
        self.calls.push(format!("poly_marker({xy:?})"));
    }
    fn text(&mut self, x: f32, y: f32, text: &str) {
        self.calls.push(format!("text({x}, {y}, {text})"));
    }
}

fn sample_painting() -> Painting {
    let mut p = painter();
    p.set_line_width(2.0);
    p.draw_line(0.0, 0.0, 10.0, 10.0);
    p.draw_box(1.0, 1.0, 9.0, 9.0, BoxMode::Filled);
    p.draw_poly_marker(&[2.0, 4.0, 6.0], &[3.0, 5.0, 7.0]);
    p.draw_text(5.0, 5.0, "label");
    p.take_painting().unwrap()
}

#[test]
fn encode_decode_replay_equivalence() {
    let painting = sample_painting();
    let decoded = decode(&encode(&painting)).unwrap();

    let mut original = TraceRenderer::default();
    let mut roundtripped = TraceRenderer::default();
    replay(&painting, &mut original).unwrap();
    replay(&decoded, &mut roundtripped).unwrap();

    assert!(!original.calls.is_empty());
    assert_eq!(original, roundtripped);
}

#[test]
fn decoded_painting_equals_original() {
    let painting = sample_painting();
    assert_eq!(decode(&encode(&painting)).unwrap(), painting);
}
