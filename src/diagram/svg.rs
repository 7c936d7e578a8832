//! SVG backend

use std::fmt::Write;

use super::{ClockFace, Hand, Point, DIAL_RADIUS};

/// Unit-space half-width visible in the image
const EXTENT: f64 = 1.1;

/// Maps unit coordinates (y up) to pixel coordinates (y down)
struct Canvas {
    size: f64,
}

impl Canvas {
    fn x(&self, p: Point) -> f64 {
        (p.x + EXTENT) / (2.0 * EXTENT) * self.size
    }

    fn y(&self, p: Point) -> f64 {
        (EXTENT - p.y) / (2.0 * EXTENT) * self.size
    }

    fn scale(&self, length: f64) -> f64 {
        length / (2.0 * EXTENT) * self.size
    }
}

/// Render a complete SVG document
pub fn render(face: &ClockFace, size: u32) -> String {
    let canvas = Canvas {
        size: f64::from(size),
    };
    let center = Point { x: 0.0, y: 0.0 };
    let font_size = canvas.size / 16.0;
    let mut out = String::new();

    // fmt::Write on String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(
        out,
        r#"  <title>{}:{:02}</title>"#,
        face.hour, face.minute
    );
    let _ = writeln!(
        out,
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="black" stroke-width="2"/>"#,
        canvas.x(center),
        canvas.y(center),
        canvas.scale(DIAL_RADIUS)
    );

    for label in &face.labels {
        let _ = writeln!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{:.1}" font-weight="bold" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            canvas.x(label.position),
            canvas.y(label.position),
            font_size,
            label.number
        );
    }

    push_hand(&mut out, &canvas, &face.hour_hand, "black", 4);
    push_hand(&mut out, &canvas, &face.minute_hand, "red", 2);

    let _ = writeln!(
        out,
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="black"/>"#,
        canvas.x(center),
        canvas.y(center),
        canvas.size / 100.0
    );
    out.push_str("</svg>\n");

    out
}

fn push_hand(out: &mut String, canvas: &Canvas, hand: &Hand, color: &str, width: u32) {
    let center = Point { x: 0.0, y: 0.0 };
    let tip = hand.tip();
    let _ = writeln!(
        out,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
        canvas.x(center),
        canvas.y(center),
        canvas.x(tip),
        canvas.y(tip),
        color,
        width
    );
}
