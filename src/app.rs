use std::time::Instant;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText};

use crate::color::ORANGE;
use crate::data::catalog::Catalog;
use crate::images::EguiImageLoader;
use crate::router::Route;
use crate::state::AppState;
use crate::ui::screens;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PuppyApp {
    pub state: AppState,
}

impl PuppyApp {
    pub fn new() -> anyhow::Result<Self> {
        let catalog = Catalog::seed().context("loading puppy catalog")?;
        log::info!("Loaded {} puppies", catalog.len());
        Ok(Self {
            state: AppState::new(catalog),
        })
    }
}

impl eframe::App for PuppyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick(Instant::now());

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.back();
        }

        let revision = self.state.router.revision();
        let route = self.state.router.current();
        let loader = EguiImageLoader::new(ctx);

        // ---- Bottom panel: rejected navigation ----
        if let Some(msg) = &self.state.status_message {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.label(RichText::new(msg).color(Color32::RED));
            });
        }

        // ---- Central panel: active screen ----
        let frame = match route {
            Route::Onboarding => egui::Frame::central_panel(&ctx.style()).fill(ORANGE),
            _ => egui::Frame::central_panel(&ctx.style()),
        };
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| match route {
            Route::Onboarding => screens::onboarding_screen(ui, &mut self.state),
            Route::PuppyList => screens::list_screen(ui, &mut self.state, &loader),
            Route::PuppyDetail { puppy_id } => {
                screens::detail_screen(ui, &mut self.state, &loader, puppy_id)
            }
        });

        // Redraw right away after a transition, otherwise wake up for the
        // next timer.
        if self.state.router.revision() != revision {
            ctx.request_repaint();
        } else if let Some(deadline) = self.state.router.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
