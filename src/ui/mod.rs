//! User interface for the digital garden.
//!
//! This module contains the eframe application, the palette of draggable stars,
//! and the dialogs for writing and reading notes.
//!
//! # Module Organization
//!
//! - `state` - Persisted settings and the main GardenApp
//! - `canvas` - Garden layout, drop handling and note clicks
//! - `rendering` - Drawing the garden patch and stars

mod canvas;
mod rendering;
mod state;

pub use rendering::paint_star;
pub use state::{GardenApp, GardenSettings};

use crate::constants::{
    DEFAULT_GARDEN_HEIGHT, DEFAULT_GARDEN_WIDTH, DRAGGED_SWATCH_OPACITY, MAX_GARDEN_EXTENT,
    MIN_GARDEN_EXTENT, PALETTE_SWATCH_SIZE, SETTINGS_STORAGE_KEY,
};
use crate::error::GardenError;
use crate::types::MarkerVariant;
use eframe::egui;

/// Shown when a placement is confirmed without a message.
pub const EMPTY_MESSAGE_NOTICE: &str = "Please enter a message for your star!";

/// What the user chose in a dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Nothing was clicked
    None,
    /// Plant the pending star
    Confirm,
    /// Abandon the pending star
    Cancel,
    /// Close the open note
    DismissNote,
}

impl eframe::App for GardenApp {
    /// Persist UI settings between restarts. Markers are saved as they are planted.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.settings.to_json() {
            Ok(json) => storage.set_string(SETTINGS_STORAGE_KEY, json),
            Err(err) => log::error!("Failed to serialize settings: {err}"),
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `frame` - The eframe frame, which provides the persistent storage
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let visuals = if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("palette_bar").show(ctx, |ui| {
            self.draw_palette_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_garden(ui);
        });

        match self.draw_dialogs(ctx) {
            DialogAction::Confirm => match frame.storage_mut() {
                Some(storage) => self.confirm_placement(storage),
                None => {
                    let result = self.garden.confirm(&mut self.fallback_storage);
                    self.finish_confirm(result);
                }
            },
            DialogAction::Cancel => self.cancel_placement(),
            DialogAction::DismissNote => self.dismiss_note(),
            DialogAction::None => {}
        }

        self.draw_notice(ctx);
    }
}

impl GardenApp {
    /// Plants the pending star and persists the garden to `storage`.
    pub fn confirm_placement(&mut self, storage: &mut dyn eframe::Storage) {
        let result = self.garden.confirm(storage);
        self.finish_confirm(result);
    }

    /// Turns the outcome of a confirm into user feedback.
    fn finish_confirm(&mut self, result: Result<usize, GardenError>) {
        match result {
            Ok(_) => self.focus_draft = false,
            Err(GardenError::EmptyMessage) => {
                self.notice = Some(EMPTY_MESSAGE_NOTICE.to_string());
                self.focus_draft = true;
            }
            Err(err @ GardenError::Serialize(_)) => {
                self.notice = Some(format!("Your star was planted but could not be saved: {err}"));
            }
            Err(_) => {}
        }
    }

    /// Abandons the pending star.
    pub fn cancel_placement(&mut self) {
        if self.garden.cancel().is_ok() {
            self.focus_draft = false;
        }
    }

    /// Closes the open note.
    pub fn dismiss_note(&mut self) {
        if let Err(err) = self.garden.dismiss_note() {
            log::debug!("close ignored: {err}");
        }
    }

    /// Draws the header with the draggable star palette and settings.
    fn draw_palette_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Digital Garden");
            ui.separator();
            ui.label("Drag a star into the garden:");

            for variant in MarkerVariant::PALETTE {
                let id = egui::Id::new(("palette", variant.id()));
                let dragging = ui.ctx().is_being_dragged(id);
                ui.dnd_drag_source(id, variant.clone(), |ui| {
                    if dragging {
                        ui.set_opacity(DRAGGED_SWATCH_OPACITY);
                    }
                    let (rect, _) = ui.allocate_exact_size(
                        egui::Vec2::splat(PALETTE_SWATCH_SIZE),
                        egui::Sense::hover(),
                    );
                    paint_star(ui.painter(), rect.shrink(2.0), variant.color());
                })
                .response
                .on_hover_text(variant.id());
            }

            ui.separator();
            let planted = self.garden.store().len();
            ui.label(match planted {
                1 => "1 star planted".to_string(),
                n => format!("{n} stars planted"),
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if self.settings.dark_mode { "☀ Light" } else { "🌙 Dark" };
                if ui.button(label).clicked() {
                    self.settings.dark_mode = !self.settings.dark_mode;
                }
                ui.menu_button("Garden", |ui| self.draw_settings_menu(ui));
            });
        });
    }

    /// Controls for the garden's size and drop outline.
    fn draw_settings_menu(&mut self, ui: &mut egui::Ui) {
        let (width, height) = &mut self.settings.garden_size;
        ui.add(egui::Slider::new(width, MIN_GARDEN_EXTENT..=MAX_GARDEN_EXTENT).text("Width"));
        ui.add(egui::Slider::new(height, MIN_GARDEN_EXTENT..=MAX_GARDEN_EXTENT).text("Height"));
        ui.checkbox(&mut self.settings.show_drop_outline, "Outline while dragging");
        if ui.button("Reset size").clicked() {
            self.settings.garden_size = (DEFAULT_GARDEN_WIDTH, DEFAULT_GARDEN_HEIGHT);
        }
    }

    /// Draws whichever dialog the garden mode calls for and reports the user's choice.
    pub fn draw_dialogs(&mut self, ctx: &egui::Context) -> DialogAction {
        if self.garden.pending().is_some() {
            self.draw_message_dialog(ctx)
        } else if self.garden.viewed_marker().is_some() {
            self.draw_note_dialog(ctx)
        } else {
            DialogAction::None
        }
    }

    /// Dialog collecting the message for a pending star.
    fn draw_message_dialog(&mut self, ctx: &egui::Context) -> DialogAction {
        let mut action = DialogAction::None;
        let notice_open = self.notice.is_some();
        let focus = std::mem::take(&mut self.focus_draft);
        let Some(draft) = self.garden.draft_mut() else {
            return action;
        };

        egui::Window::new("Plant your star")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!notice_open, |ui| {
                    ui.label("Leave a message with your star:");
                    let response = ui.add(
                        egui::TextEdit::multiline(draft)
                            .desired_rows(3)
                            .hint_text("Write something…"),
                    );
                    if focus {
                        response.request_focus();
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Plant").clicked() {
                            action = DialogAction::Confirm;
                        }
                        if ui.button("Cancel").clicked() {
                            action = DialogAction::Cancel;
                        }
                    });

                    // Cmd/Ctrl+Enter plants, Escape cancels
                    if !notice_open {
                        ui.input(|i| {
                            if i.key_pressed(egui::Key::Enter) && i.modifiers.command {
                                action = DialogAction::Confirm;
                            } else if i.key_pressed(egui::Key::Escape) {
                                action = DialogAction::Cancel;
                            }
                        });
                    }
                });
            });
        action
    }

    /// Dialog showing the note of a planted star.
    fn draw_note_dialog(&mut self, ctx: &egui::Context) -> DialogAction {
        let mut action = DialogAction::None;
        let Some(marker) = self.garden.viewed_marker() else {
            return action;
        };

        egui::Window::new("A note from the garden")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::Vec2::splat(20.0), egui::Sense::hover());
                    paint_star(ui.painter(), rect, marker.variant.color());
                    ui.label(egui::RichText::new(&marker.message).size(16.0));
                });
                ui.add_space(8.0);
                if ui.button("Close").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    action = DialogAction::DismissNote;
                }
            });
        action
    }

    /// Blocking notification with an OK button.
    fn draw_notice(&mut self, ctx: &egui::Context) {
        let Some(text) = self.notice.clone() else {
            return;
        };
        egui::Window::new("Garden")
            .id(egui::Id::new("garden_notice"))
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -40.0))
            .show(ctx, |ui| {
                ui.label(text);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.notice = None;
                }
            });
    }
}
