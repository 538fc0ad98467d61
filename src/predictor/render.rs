use crate::image_classifier::interface::{format_percent, Prediction};
use crate::image_file::ImageFile;
use crate::paint;
use crate::predictor::core::{Event, State};
use egui::{vec2, Align2, FontId, Rect, Sense, Stroke};

pub const MAX_WIDTH: f32 = 448.0;
const TOP_HEIGHT: f32 = 32.0;
const BOTTOM_HEIGHT: f32 = 40.0;
const TUCK_TOP: f32 = 24.0;
const TUCK_BOTTOM: f32 = 32.0;
const PADDING: f32 = 16.0;

struct Preview {
    image: ImageFile,
    texture: Option<egui::TextureHandle>,
}

pub struct Render {
    preview: Option<Preview>,
}

impl Render {
    pub fn new() -> Self {
        Self { preview: None }
    }

    pub fn card_height(width: f32) -> f32 {
        let width = width.min(MAX_WIDTH);
        PADDING + TOP_HEIGHT + width * 9.0 / 16.0 + BOTTOM_HEIGHT + PADDING
    }

    /// Draws the upload card and returns the events raised by clicks.
    pub fn render(&mut self, ui: &mut egui::Ui, state: &State) -> Vec<Event> {
        let mut events = vec![];
        let ctx = ui.ctx().clone();

        let width = ui.available_width().min(MAX_WIDTH);
        let inner = width * 11.0 / 12.0;
        let preview_height = width * 9.0 / 16.0;
        let height = Self::card_height(width);
        let (card, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        let painter = ui.painter_at(card);

        painter.rect_filled(card, 16.0, paint::GRAY_100);

        let shown_top = ctx.animate_bool(ui.id().with("top"), state.image.is_some());
        let shown_bottom = ctx.animate_bool(
            ui.id().with("bottom"),
            state.loading || state.prediction.is_some(),
        );
        let dashed = Stroke::new(1.0, paint::GRAY_300);

        let top = Rect::from_min_size(
            card.center_top() + vec2(-inner / 2.0, PADDING + (1.0 - shown_top) * TUCK_TOP),
            vec2(inner, TOP_HEIGHT),
        );
        let preview = Rect::from_min_size(
            card.left_top() + vec2(0.0, PADDING + TOP_HEIGHT),
            vec2(width, preview_height),
        );
        let bottom = Rect::from_min_size(
            preview.center_bottom() + vec2(-inner / 2.0, -(1.0 - shown_bottom) * TUCK_BOTTOM),
            vec2(inner, BOTTOM_HEIGHT),
        );

        // top: file name
        let top_response = ui.interact(top, ui.id().with("choose_file"), Sense::click());
        paint::dashed_rect(&painter, top, dashed);
        let button = Rect::from_min_size(top.min, vec2(96.0, TOP_HEIGHT));
        painter.rect_filled(button, 0.0, paint::GRAY_200);
        painter.text(
            button.center(),
            Align2::CENTER_CENTER,
            "Choose File",
            FontId::proportional(11.0),
            paint::GRAY_800,
        );
        if let Some(image) = &state.image {
            painter.text(
                button.right_center() + vec2(16.0, 0.0),
                Align2::LEFT_CENTER,
                &image.name,
                FontId::proportional(11.0),
                paint::GRAY_800,
            );
        }
        if top_response.clicked() {
            events.push(Event::ChooseFileClicked);
        }

        // bottom: scores or spinner
        let bottom_response = ui.interact(bottom, ui.id().with("scores"), Sense::click());
        paint::dashed_rect(&painter, bottom, dashed);
        if state.loading {
            let spinner = Rect::from_center_size(bottom.center() - vec2(36.0, 0.0), vec2(14.0, 14.0));
            ui.put(spinner, egui::Spinner::new().size(14.0).color(paint::GRAY_700));
            painter.text(
                bottom.center() + vec2(6.0, 0.0),
                Align2::CENTER_CENTER,
                "Loading...",
                FontId::proportional(11.0),
                paint::GRAY_800,
            );
        } else if let Some(prediction) = state.visible_prediction() {
            render_scores(&painter, bottom, prediction);
        }
        if bottom_response.clicked() {
            events.push(Event::ChooseFileClicked);
        }

        // middle: preview or drop zone, drawn last so it covers tucked strips
        let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());
        painter.rect_filled(preview, 8.0, paint::GRAY_100);
        paint::dashed_rect(
            &painter,
            preview,
            Stroke::new(
                2.0,
                if hovering_files {
                    paint::GRAY_500
                } else {
                    paint::GRAY_300
                },
            ),
        );

        match &state.image {
            Some(image) => {
                if let Some(texture) = self.texture_for(&ctx, image) {
                    let fitted = fit_rect(preview.shrink(2.0), texture.size_vec2());
                    painter.image(
                        texture.id(),
                        fitted,
                        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                } else {
                    painter.text(
                        preview.center(),
                        Align2::CENTER_CENTER,
                        &image.name,
                        FontId::proportional(12.0),
                        paint::GRAY_500,
                    );
                }
            }
            None => {
                let response = ui.interact(preview, ui.id().with("drop_zone"), Sense::click());
                painter.text(
                    preview.center() - vec2(0.0, 10.0),
                    Align2::CENTER_CENTER,
                    "CLICK TO UPLOAD OR DRAG AND DROP",
                    FontId::proportional(13.0),
                    paint::GRAY_500,
                );
                painter.text(
                    preview.center() + vec2(0.0, 12.0),
                    Align2::CENTER_CENTER,
                    "PNG, JPG, JPEG, ETC",
                    FontId::proportional(10.0),
                    paint::GRAY_500,
                );
                if response.clicked() {
                    events.push(Event::ChooseFileClicked);
                }
            }
        }

        events
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        image: &ImageFile,
    ) -> Option<egui::TextureHandle> {
        let stale = match &self.preview {
            Some(preview) => &preview.image != image,
            None => true,
        };
        if stale {
            self.preview = Some(Preview {
                image: image.clone(),
                texture: decode(ctx, image),
            });
        }
        self.preview.as_ref().and_then(|p| p.texture.clone())
    }
}

fn render_scores(painter: &egui::Painter, rect: Rect, prediction: Prediction) {
    let (cat, dog) = rect.split_left_right_at_fraction(0.5);

    for (cell, label, score) in [(cat, "Cat", prediction.cat), (dog, "Dog", prediction.dog)] {
        paint::bars(painter, cell, paint::score_color(score));
        painter.text(
            cell.center(),
            Align2::CENTER_CENTER,
            format!("{}: {}%", label, format_percent(score)),
            FontId::proportional(13.0),
            paint::GRAY_800,
        );
    }
    painter.vline(
        rect.center().x,
        rect.y_range(),
        Stroke::new(1.0, paint::GRAY_300),
    );
}

fn decode(ctx: &egui::Context, image: &ImageFile) -> Option<egui::TextureHandle> {
    let decoded = image::load_from_memory(&image.bytes).ok()?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw());
    Some(ctx.load_texture(
        format!("preview-{}", image.name),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}

/// Largest rect with `size`'s aspect ratio inside `bounds`, never upscaled.
pub fn fit_rect(bounds: Rect, size: egui::Vec2) -> Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / size.x)
        .min(bounds.height() / size.y)
        .min(1.0);
    Rect::from_center_size(bounds.center(), size * scale)
}
