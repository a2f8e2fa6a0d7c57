use eframe::egui::{self, Color32, Response, RichText, ScrollArea, Sense, Ui, Vec2};

use crate::color::{BADGE_AGE, BADGE_COLOR, BADGE_SEX, DARK_GREY, GREY, ORANGE};
use crate::data::model::PuppyId;
use crate::images::ImageLoader;
use crate::presenter::detail::ADOPT_LABEL;
use crate::presenter::list::ListItem;
use crate::presenter::DetailView;
use crate::state::AppState;

use super::widgets::{attribute_card, badge, filter_chip, image_slot};

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

/// Splash screen. Moves on by itself once the onboarding timer fires.
pub fn onboarding_screen(ui: &mut Ui, state: &mut AppState) {
    let view = state.onboarding.view();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new(view.headline).size(32.0).strong().color(DARK_GREY));
        ui.add_space(16.0);
        ui.spinner();
        ui.add_space(24.0);
        if ui.button("Skip").clicked() {
            state.skip_onboarding();
        }
    });
}

// ---------------------------------------------------------------------------
// Puppy list
// ---------------------------------------------------------------------------

/// Header, decorative search box, breed strip, and the puppy cards.
pub fn list_screen(ui: &mut Ui, state: &mut AppState, loader: &dyn ImageLoader) {
    let view = state.list.view(&state.catalog);

    ui.label(RichText::new(view.headline).size(32.0).strong().color(DARK_GREY));
    ui.label(RichText::new(view.tagline).size(16.0).color(GREY));
    ui.add_space(16.0);

    // Search is not wired to anything.
    egui::Frame::group(ui.style())
        .fill(Color32::WHITE)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(view.search_hint).small().color(GREY));
        });
    ui.add_space(16.0);

    let mut toggled: Option<&str> = None;
    ScrollArea::horizontal()
        .id_salt("breed_strip")
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for chip in &view.chips {
                    let fill = state.breed_colors.color_for(&chip.breed);
                    if filter_chip(ui, loader, chip, fill).clicked() {
                        toggled = Some(&chip.breed);
                    }
                }
            });
        });
    if let Some(breed) = toggled {
        state.list.toggle_breed(breed);
    }
    if let Some(breed) = state.list.selected_breed() {
        ui.label(RichText::new(format!("Showing {breed} puppies")).small().color(GREY));
    }
    ui.add_space(8.0);

    let mut selected: Option<usize> = None;
    ScrollArea::vertical()
        .id_salt("puppy_list")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (position, item) in view.items.iter().enumerate() {
                if puppy_card(ui, loader, item).clicked() {
                    selected = Some(position);
                }
                ui.add_space(8.0);
            }
        });
    if let Some(position) = selected {
        state.select_puppy(position);
    }
}

fn puppy_card(ui: &mut Ui, loader: &dyn ImageLoader, item: &ListItem) -> Response {
    egui::Frame::group(ui.style())
        .fill(Color32::WHITE)
        .rounding(16.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui: &mut Ui| {
                image_slot(ui, loader, &item.image_url, Vec2::splat(96.0));
                ui.vertical(|ui: &mut Ui| {
                    ui.label(RichText::new(&item.name).size(20.0).color(DARK_GREY));
                    ui.label(RichText::new(&item.breed).small().color(GREY));
                    ui.add_space(12.0);
                    ui.horizontal(|ui: &mut Ui| {
                        badge(ui, &item.color, BADGE_COLOR);
                        badge(ui, &item.sex, BADGE_SEX);
                        badge(ui, &item.age_label, BADGE_AGE);
                    });
                });
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

// ---------------------------------------------------------------------------
// Puppy detail
// ---------------------------------------------------------------------------

/// One puppy's photo, attributes and the adopt button; an explicit empty
/// state when the id is unknown.
pub fn detail_screen(
    ui: &mut Ui,
    state: &mut AppState,
    loader: &dyn ImageLoader,
    puppy_id: PuppyId,
) {
    if ui.button("⬅ Back").clicked() {
        state.back();
        return;
    }
    ui.add_space(8.0);

    let fields = match state.detail.view(&state.catalog, puppy_id) {
        DetailView::Found(fields) => fields,
        DetailView::NotFound { puppy_id } => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading("Puppy not found");
                ui.label(RichText::new(format!("No puppy has id {puppy_id}.")).color(GREY));
            });
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let width = ui.available_width();
            image_slot(ui, loader, &fields.image_url, Vec2::new(width, 360.0));

            ui.horizontal(|ui: &mut Ui| {
                for (label, value) in fields.attributes() {
                    attribute_card(ui, label, value);
                }
            });

            ui.add_space(24.0);
            ui.label(RichText::new(&fields.name).size(24.0).color(DARK_GREY));
            ui.add_space(16.0);
            ui.label(RichText::new(fields.description).color(GREY));
            ui.add_space(24.0);

            let adopt = egui::Button::new(
                RichText::new(ADOPT_LABEL).size(18.0).strong().color(Color32::WHITE),
            )
            .fill(ORANGE);
            if ui.add_sized([width, 56.0], adopt).clicked() {
                state.detail.adopt(fields.id);
            }
        });
}
