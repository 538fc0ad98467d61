use egui::{pos2, vec2, Color32, Painter, Pos2, Rect, Shape, Stroke};

pub const GRAY_100: Color32 = Color32::from_rgb(243, 244, 246);
pub const GRAY_200: Color32 = Color32::from_rgb(229, 231, 235);
pub const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);
pub const GRAY_500: Color32 = Color32::from_rgb(107, 114, 128);
pub const GRAY_700: Color32 = Color32::from_rgb(55, 65, 81);
pub const GRAY_800: Color32 = Color32::from_rgb(31, 41, 55);
pub const GREEN_300: Color32 = Color32::from_rgb(134, 239, 172);
pub const RED_300: Color32 = Color32::from_rgb(252, 165, 165);

/// Row colors of the background marquee.
pub const MARQUEE_COLORS: [Color32; 6] = [
    Color32::from_rgb(249, 168, 212),
    Color32::from_rgb(147, 197, 253),
    Color32::from_rgb(253, 224, 71),
    GREEN_300,
    Color32::from_rgb(216, 180, 254),
    RED_300,
];

pub const CAT_TILE: Color32 = Color32::from_rgb(251, 191, 36);
pub const DOG_TILE: Color32 = Color32::from_rgb(56, 189, 248);

const BAR_COUNT: usize = 12;
const BAR_WIDTH: f32 = 224.0;
const BAR_GAP: f32 = 4.0;
const BAR_ANGLE_DEG: f32 = -12.0;

pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Green above 50%, red otherwise.
pub fn score_color(score: f64) -> Color32 {
    if score > 50.0 {
        GREEN_300
    } else {
        RED_300
    }
}

pub fn rotate_about(point: Pos2, center: Pos2, angle_rad: f32) -> Pos2 {
    let (sin, cos) = angle_rad.sin_cos();
    let d = point - center;
    center + vec2(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

pub fn dashed_rect(painter: &Painter, rect: Rect, stroke: Stroke) {
    let points = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(Shape::dashed_line(&points, stroke, 4.0, 3.0));
}

/// Stack of thin tilted bars centered in `rect`, clipped to it.
pub fn bars(painter: &Painter, rect: Rect, color: Color32) {
    let painter = painter.with_clip_rect(rect);
    let center = rect.center();
    let total = (BAR_COUNT - 1) as f32 * BAR_GAP;
    let angle = BAR_ANGLE_DEG.to_radians();

    for i in 0..BAR_COUNT {
        let y = center.y - total / 2.0 + i as f32 * BAR_GAP;
        let a = rotate_about(pos2(center.x - BAR_WIDTH / 2.0, y), center, angle);
        let b = rotate_about(pos2(center.x + BAR_WIDTH / 2.0, y), center, angle);
        painter.line_segment([a, b], Stroke::new(2.0, color));
    }
}
