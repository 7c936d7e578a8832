//! Character-grid backend for the terminal

use super::{ClockFace, Hand, Point, DIAL_RADIUS};

/// Rows per unit of radius
const ROWS_PER_UNIT: f64 = 10.0;
/// Terminal cells are roughly twice as tall as wide
const COLS_PER_ROW: f64 = 2.0;

const HEIGHT: usize = 23;
const WIDTH: usize = 45;
const CENTER_ROW: usize = HEIGHT / 2;
const CENTER_COL: usize = WIDTH / 2;

const DIAL: char = '.';
const HOUR: char = '#';
const MINUTE: char = '*';
const CENTER: char = 'O';

struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new() -> Self {
        Self {
            cells: vec![vec![' '; WIDTH]; HEIGHT],
        }
    }

    fn locate(p: Point) -> Option<(usize, usize)> {
        let row = (CENTER_ROW as f64 - p.y * ROWS_PER_UNIT).round();
        let col = (CENTER_COL as f64 + p.x * ROWS_PER_UNIT * COLS_PER_ROW).round();
        if row < 0.0 || col < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < HEIGHT && col < WIDTH).then_some((row, col))
    }

    fn plot(&mut self, p: Point, c: char) {
        if let Some((row, col)) = Self::locate(p) {
            self.cells[row][col] = c;
        }
    }

    fn write(&mut self, p: Point, s: &str) {
        if let Some((row, col)) = Self::locate(p) {
            for (i, c) in s.chars().enumerate() {
                if let Some(cell) = self.cells[row].get_mut(col + i) {
                    *cell = c;
                }
            }
        }
    }

    fn hand(&mut self, hand: &Hand, c: char) {
        let steps = (hand.length * ROWS_PER_UNIT * COLS_PER_ROW * 2.0).ceil() as usize;
        for i in 1..=steps {
            let t = hand.length * i as f64 / steps as f64;
            self.plot(Point::polar(t, hand.angle), c);
        }
    }

    fn into_string(self) -> String {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Sketch the clock face as text: `#` hour hand, `*` minute hand
pub fn render(face: &ClockFace) -> String {
    let mut grid = Grid::new();

    for step in 0..120 {
        grid.plot(Point::polar(DIAL_RADIUS, f64::from(step) * 3.0), DIAL);
    }
    for label in &face.labels {
        grid.write(label.position, &label.number.to_string());
    }

    grid.hand(&face.minute_hand, MINUTE);
    grid.hand(&face.hour_hand, HOUR);
    grid.plot(Point { x: 0.0, y: 0.0 }, CENTER);

    grid.into_string()
}
