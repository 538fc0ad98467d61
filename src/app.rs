use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::library::random::interface::RandomSource;
use crate::paint::MARQUEE_COLORS;
use crate::predictor::main::Predictor;
use crate::predictor::render::{Render, MAX_WIDTH};
use crate::scroll_animation::main::ScrollAnimation;
use crate::text_animation::marquee::Marquee;
use egui::{vec2, Rect};
use std::sync::Arc;

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    random: Arc<dyn RandomSource + Send + Sync>,
    predictor: Predictor,
    marquee: Marquee,
    scroll_animation: Option<ScrollAnimation>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        random: Arc<dyn RandomSource + Send + Sync>,
        predictor: Predictor,
    ) -> Self {
        let marquee = Marquee::new(&config.marquee, &MARQUEE_COLORS, random.as_ref());

        Self {
            config,
            logger,
            random,
            predictor,
            marquee,
            scroll_animation: None,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.predictor.poll();
        let elapsed = ctx.input(|i| i.time) as f32;

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                // mounted on the first frame, once the viewport size is known
                let animation = self.scroll_animation.get_or_insert_with(|| {
                    ScrollAnimation::new(
                        &self.config,
                        self.logger.clone(),
                        self.random.as_ref(),
                        ui.available_size(),
                    )
                });

                let marquee = &self.marquee;
                let predictor = &mut self.predictor;
                animation.ui(ui, |ui| home(ui, marquee, predictor, elapsed));
            });

        // marquee never stops moving
        ctx.request_repaint();
    }
}

fn home(ui: &mut egui::Ui, marquee: &Marquee, predictor: &mut Predictor, elapsed: f32) {
    let area = ui.max_rect();
    marquee.paint(ui, area, elapsed);

    let width = area.width().min(MAX_WIDTH);
    let card = Rect::from_center_size(area.center(), vec2(width, Render::card_height(width)));
    ui.allocate_ui_at_rect(card, |ui| predictor.ui(ui));
}
