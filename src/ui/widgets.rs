use eframe::egui::{self, Color32, Response, RichText, Sense, Stroke, Ui, Vec2};

use crate::color::{DARK_GREY, GREY};
use crate::images::{ImageLoader, ImageState};
use crate::presenter::list::FilterChip;

const FADE_IN_SECS: f32 = 0.6;

// ---------------------------------------------------------------------------
// Remote image slot
// ---------------------------------------------------------------------------

/// Draw one remote image at `size`, or an inline placeholder for its state.
/// Returns the state that was drawn.
///
/// An image that is already cached on first sight shows at full opacity;
/// one that arrives later fades in.
pub fn image_slot(ui: &mut Ui, loader: &dyn ImageLoader, url: &str, size: Vec2) -> ImageState {
    let state = loader.load(url);
    let fade_id = ui.id().with(("image_fade", url));
    let alpha = ui.ctx().animate_bool_with_time(
        fade_id,
        matches!(state, ImageState::Success(_)),
        FADE_IN_SECS,
    );

    match &state {
        ImageState::Success(_) => {
            ui.add(
                egui::Image::new(url)
                    .fit_to_exact_size(size)
                    .tint(Color32::WHITE.gamma_multiply(alpha)),
            );
        }
        ImageState::Loading => {
            ui.add_sized(size, egui::Spinner::new());
        }
        ImageState::Error(reason) => {
            ui.add_sized(
                size,
                egui::Label::new(RichText::new("Error").color(Color32::RED)),
            )
            .on_hover_text(reason.as_str());
        }
        ImageState::Empty => {
            ui.add_sized(size, egui::Label::new(RichText::new("Empty").color(GREY)));
        }
    }
    state
}

// ---------------------------------------------------------------------------
// Small building blocks
// ---------------------------------------------------------------------------

/// Coloured pill with white text (list card badges).
pub fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    egui::Frame::default()
        .fill(fill)
        .rounding(8.0)
        .inner_margin(4.0)
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(text).small().color(Color32::WHITE));
        });
}

/// Label over value, used for the detail attribute row.
pub fn attribute_card(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style())
        .fill(Color32::WHITE)
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(60.0);
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(label).color(GREY));
                ui.label(RichText::new(value).strong().color(DARK_GREY));
            });
        });
}

/// One clickable chip of the horizontal strip.
pub fn filter_chip(
    ui: &mut Ui,
    loader: &dyn ImageLoader,
    chip: &FilterChip,
    fill: Color32,
) -> Response {
    let stroke = if chip.selected {
        Stroke::new(2.0, DARK_GREY)
    } else {
        Stroke::NONE
    };

    egui::Frame::default()
        .fill(fill)
        .stroke(stroke)
        .rounding(16.0)
        .inner_margin(4.0)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                image_slot(ui, loader, &chip.image_url, Vec2::splat(20.0));
                ui.label(RichText::new(&chip.breed).small().color(DARK_GREY));
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
