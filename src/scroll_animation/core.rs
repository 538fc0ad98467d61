use crate::library::random::interface::RandomSource;
use crate::scroll_animation::timeline::{Ease, Property, Props, Timeline};

/// Pixels the images travel past the viewport edge on exit.
pub const EXIT_OVERSHOOT: f32 = 200.0;
/// Delay between consecutive image exits, in timeline units.
pub const EXIT_STAGGER: f32 = 0.1;
/// How far below its resting place the revealed content starts.
pub const CONTENT_LIFT: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKind {
    Cat,
    Dog,
}

/// Cats and dogs alternate: cat 1, dog 1, cat 2, dog 2, ...
pub fn gallery_kind(index: usize) -> GalleryKind {
    if index % 2 == 0 {
        GalleryKind::Cat
    } else {
        GalleryKind::Dog
    }
}

pub fn gallery_label(index: usize) -> String {
    let number = index / 2 + 1;
    match gallery_kind(index) {
        GalleryKind::Cat => format!("cat {}", number),
        GalleryKind::Dog => format!("dog {}", number),
    }
}

/// Random start offsets in `[0, viewport_height - 2 * image_height)`,
/// or 0 when the viewport is too short for that range to exist.
pub fn initial_positions(
    random: &dyn RandomSource,
    count: usize,
    viewport_height: f32,
    image_height: f32,
) -> Vec<f32> {
    let range = viewport_height - 2.0 * image_height;
    (0..count)
        .map(|_| {
            let r = random.next_unit();
            if range <= 0.0 || !range.is_finite() {
                0.0
            } else {
                (r * range).clamp(0.0, just_below(range))
            }
        })
        .collect()
}

/// Largest float below a positive finite `value`.
fn just_below(value: f32) -> f32 {
    f32::from_bits(value.to_bits() - 1)
}

pub fn center_y(viewport_height: f32, image_height: f32) -> f32 {
    viewport_height / 2.0 - 0.75 * image_height
}

/// Even indices leave to the right, odd ones to the left.
pub fn exit_direction(index: usize) -> f32 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

pub fn exit_start(index: usize) -> f32 {
    1.0 + index as f32 * EXIT_STAGGER
}

pub fn content_start(count: usize) -> f32 {
    2.0 + count as f32 * EXIT_STAGGER
}

/// Targets `0..positions.len()` are the images, the one after them is the content.
pub fn build_timeline(
    positions: &[f32],
    viewport_width: f32,
    viewport_height: f32,
    image_height: f32,
) -> Timeline {
    let count = positions.len();
    let mut initial: Vec<Props> = positions
        .iter()
        .map(|&y| Props {
            x: 0.0,
            y,
            opacity: 1.0,
        })
        .collect();
    initial.push(Props {
        x: 0.0,
        y: 0.0,
        opacity: 0.0,
    });

    let mut timeline = Timeline::new(initial);

    let center = center_y(viewport_height, image_height);
    for i in 0..count {
        timeline.to(i, &[(Property::Y, center)], 1.0, Ease::Power1Out, 0.0);
    }

    for i in 0..count {
        timeline.to(
            i,
            &[
                (
                    Property::X,
                    exit_direction(i) * (viewport_width + EXIT_OVERSHOOT),
                ),
                (Property::Opacity, 0.0),
            ],
            1.0,
            Ease::Power1In,
            exit_start(i),
        );
    }

    timeline.from_to(
        count,
        &[(Property::Opacity, 0.0), (Property::Y, CONTENT_LIFT)],
        &[(Property::Opacity, 1.0), (Property::Y, 0.0)],
        1.0,
        Ease::Power2Out,
        content_start(count),
    );

    timeline
}
