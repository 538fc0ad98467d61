use crate::config::MarqueeConfig;
use crate::library::random::interface::RandomSource;
use egui::{Color32, FontId, Rect};

pub const SEPARATOR: &str = "   •   ";
const ROW_FONT_SIZE: f32 = 12.0;
const ROW_PADDING: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeRow {
    pub text: String,
    pub color: Color32,
    /// -1 or 1, sign of the travel.
    pub direction: f32,
    /// Seconds per loop.
    pub cycle: f32,
}

pub fn row_direction(r: f32) -> f32 {
    if r > 0.5 {
        -1.0
    } else {
        1.0
    }
}

/// Between 60 and 100 seconds per loop.
pub fn row_cycle(r: f32) -> f32 {
    r.max(0.6) * 100.0
}

/// Horizontal offset, as a percentage of the row width, `elapsed` seconds in.
pub fn x_percent(direction: f32, cycle: f32, elapsed: f32) -> f32 {
    if cycle <= 0.0 {
        return 0.0;
    }
    let phase = elapsed.rem_euclid(cycle) / cycle;
    (direction * -50.0 * phase) % 100.0
}

/// Left edge of the first of the two copies, in pixels from the row start.
/// Always within `[-copy_width, 0]` so the pair covers the row start.
pub fn row_offset(direction: f32, cycle: f32, elapsed: f32, copy_width: f32) -> f32 {
    if copy_width <= 0.0 {
        return 0.0;
    }
    let shift = x_percent(direction, cycle, elapsed) / 100.0 * (2.0 * copy_width);
    shift.rem_euclid(copy_width) - copy_width
}

pub fn row_text(word: &str, words_length: usize) -> String {
    vec![word; words_length].join(SEPARATOR)
}

/// Rows of repeated words drifting sideways forever.
pub struct Marquee {
    rows: Vec<MarqueeRow>,
}

impl Marquee {
    pub fn new(config: &MarqueeConfig, colors: &[Color32], random: &dyn RandomSource) -> Self {
        let rows = (0..config.rows)
            .map(|i| {
                let word = config
                    .words
                    .get(i % 2)
                    .or_else(|| config.words.first())
                    .map(String::as_str)
                    .unwrap_or_default();
                let color = if colors.is_empty() {
                    Color32::GRAY
                } else {
                    colors[i % colors.len()]
                };
                MarqueeRow {
                    text: row_text(word, config.words_length),
                    color,
                    direction: row_direction(random.next_unit()),
                    cycle: row_cycle(random.next_unit()),
                }
            })
            .collect();

        Self { rows }
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> &[MarqueeRow] {
        &self.rows
    }

    /// Paints every row into `rect`, each text laid out twice back to back
    /// so the wrap at -50% is seamless.
    pub fn paint(&self, ui: &egui::Ui, rect: Rect, elapsed: f32) {
        let painter = ui.painter_at(rect);
        let row_height = ROW_FONT_SIZE + 2.0 * ROW_PADDING;
        let total = row_height * self.rows.len() as f32;
        let top = rect.center().y - total / 2.0;

        for (i, row) in self.rows.iter().enumerate() {
            let galley = painter.layout_no_wrap(
                row.text.clone(),
                FontId::proportional(ROW_FONT_SIZE),
                row.color,
            );
            let copy_width = galley.size().x;
            let offset = row_offset(row.direction, row.cycle, elapsed, copy_width);
            let y = top + i as f32 * row_height + ROW_PADDING;

            for copy in [0.0, copy_width] {
                let pos = egui::pos2(rect.left() + offset + copy, y);
                painter.galley(pos, galley.clone(), row.color);
            }
        }
    }
}
