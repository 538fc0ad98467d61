use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::library::random::interface::RandomSource;
use crate::paint;
use crate::scroll_animation::core::{
    build_timeline, gallery_kind, gallery_label, initial_positions, GalleryKind,
};
use crate::scroll_animation::scroll_trigger::{ScrollSource, ScrollTrigger};
use crate::scroll_animation::timeline::{Props, Timeline};
use egui::{vec2, Align2, FontId, Rect, Vec2};
use std::sync::Arc;

const TITLE_HEIGHT: f32 = 48.0;
const FOOTER_HEIGHT: f32 = 28.0;
const STAGE_PADDING: f32 = 16.0;
const TILE_ASPECT: f32 = 96.0 / 136.0;

/// Scroll-driven gallery that clears away to reveal its child content.
/// Dropping it detaches its scroll trigger.
pub struct ScrollAnimation {
    logger: Arc<dyn Logger + Send + Sync>,
    scroll: ScrollSource,
    trigger: ScrollTrigger,
    positions: Vec<f32>,
    timeline: Timeline,
    viewport: Vec2,
    image_height: f32,
    scroll_distance: f32,
}

impl ScrollAnimation {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
        random: &dyn RandomSource,
        viewport: Vec2,
    ) -> Self {
        let logger = logger.with_namespace("scroll_animation");
        let scroll = ScrollSource::new();
        let trigger = ScrollTrigger::attach(&scroll, 0.0, config.scroll_distance);
        let positions = initial_positions(
            random,
            config.gallery_size,
            viewport.y,
            config.image_height,
        );
        let timeline = build_timeline(&positions, viewport.x, viewport.y, config.image_height);

        let _ = logger.info(&format!(
            "mounted {} images in {:?}, timeline {}",
            positions.len(),
            viewport,
            timeline.duration()
        ));

        Self {
            logger,
            scroll,
            trigger,
            positions,
            timeline,
            viewport,
            image_height: config.image_height,
            scroll_distance: config.scroll_distance,
        }
    }

    #[allow(dead_code)]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[allow(dead_code)]
    pub fn scroll_source(&self) -> &ScrollSource {
        &self.scroll
    }

    /// Timeline time for the current scroll position.
    pub fn time(&self) -> f32 {
        self.trigger.progress() * self.timeline.duration()
    }

    pub fn image_props(&self, index: usize) -> Props {
        self.timeline.props_at(index, self.time())
    }

    pub fn content_props(&self) -> Props {
        self.timeline.props_at(self.positions.len(), self.time())
    }

    /// Rebuilds the timeline for a new viewport; start positions stay as mounted.
    pub fn resize(&mut self, viewport: Vec2) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.timeline = build_timeline(&self.positions, viewport.x, viewport.y, self.image_height);
        let _ = self.logger.info(&format!("resized to {:?}", viewport));
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        let distance = self.scroll_distance;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                ui.set_min_height(viewport.height() + distance);
                self.resize(viewport.size());
                self.scroll.emit(viewport.min.y);

                // pinned: the stage always covers the visible part of the scroll area
                let stage = Rect::from_min_size(
                    ui.max_rect().min + viewport.min.to_vec2(),
                    viewport.size(),
                );
                self.paint_stage(ui, stage, add_contents);
            });
    }

    fn paint_stage(
        &self,
        ui: &mut egui::Ui,
        stage: Rect,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) {
        let painter = ui.painter_at(stage);
        painter.rect_filled(stage, 0.0, paint::GRAY_100);
        painter.text(
            stage.center_top() + vec2(0.0, TITLE_HEIGHT / 2.0),
            Align2::CENTER_CENTER,
            "CAT DOG CLASSIFIER",
            FontId::monospace(18.0),
            paint::GRAY_700,
        );

        let body = Rect::from_min_max(
            stage.min + vec2(STAGE_PADDING, TITLE_HEIGHT),
            stage.max - vec2(STAGE_PADDING, FOOTER_HEIGHT),
        );

        let content = self.content_props();
        if content.opacity > 0.0 {
            let content_rect = body.translate(vec2(0.0, content.y));
            ui.allocate_ui_at_rect(content_rect, |ui| {
                ui.set_clip_rect(stage);
                add_contents(ui);
            });
            // fade by veiling the content with the stage background
            painter.rect_filled(
                content_rect,
                0.0,
                paint::with_opacity(paint::GRAY_100, 1.0 - content.opacity),
            );
        }

        let count = self.positions.len();
        let tile = vec2(self.image_height * TILE_ASPECT, self.image_height);
        let spacing = if count > 1 {
            (body.width() - tile.x) / (count - 1) as f32
        } else {
            0.0
        };
        for i in 0..count {
            let props = self.image_props(i);
            if props.opacity <= 0.0 {
                continue;
            }
            let min = body.min + vec2(i as f32 * spacing + props.x, props.y);
            let rect = Rect::from_min_size(min, tile);
            let color = match gallery_kind(i) {
                GalleryKind::Cat => paint::CAT_TILE,
                GalleryKind::Dog => paint::DOG_TILE,
            };
            painter.rect_filled(rect, 8.0, paint::with_opacity(color, props.opacity));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                gallery_label(i),
                FontId::proportional(14.0),
                paint::with_opacity(paint::GRAY_800, props.opacity),
            );
        }

        painter.text(
            stage.center_bottom() - vec2(0.0, FOOTER_HEIGHT / 2.0),
            Align2::CENTER_CENTER,
            "scroll to classify",
            FontId::proportional(12.0),
            paint::GRAY_800,
        );
    }
}
