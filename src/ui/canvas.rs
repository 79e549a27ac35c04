//! Garden canvas interaction.
//!
//! This module lays out the garden patch, receives stars dropped from the
//! palette and opens notes when a planted star is clicked.

use super::state::GardenApp;
use crate::error::GardenError;
use crate::placement::GardenRegion;
use crate::types::MarkerVariant;
use crate::view::{marker_at, project_to_view};
use eframe::egui;

/// Shown when a star is dropped outside the oval.
pub const OUTSIDE_GARDEN_NOTICE: &str = "Please drop the star inside the green garden patch!";

impl GardenApp {
    /// Computes the garden's screen rectangle, centered in the available space.
    ///
    /// The preferred size from the settings is shrunk to fit.
    pub fn layout_garden_rect(&self, available: egui::Rect) -> egui::Rect {
        let (width, height) = self.settings.garden_size;
        let size = egui::vec2(width.min(available.width()), height.min(available.height()));
        egui::Rect::from_center_size(available.center(), size)
    }

    /// Renders the garden and handles drops and clicks on it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_garden(&mut self, ui: &mut egui::Ui) {
        let rect = self.layout_garden_rect(ui.available_rect_before_wrap());
        let response = ui.allocate_rect(rect, egui::Sense::click());
        self.garden_rect = Some(rect);

        let region = match GardenRegion::new(rect) {
            Ok(region) => region,
            Err(err) => {
                // Window too small to hold a garden this frame
                log::debug!("skipping garden layout: {err}");
                return;
            }
        };

        let drop_hovered = !self.is_blocked()
            && response.dnd_hover_payload::<MarkerVariant>().is_some();

        if let Some(variant) = response.dnd_release_payload::<MarkerVariant>() {
            if let Some(pointer) = ui.input(|i| i.pointer.interact_pos()) {
                self.handle_drop((*variant).clone(), pointer, &region);
            }
        } else if response.clicked() && !self.is_blocked() {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                self.handle_garden_click(pos, &region);
            }
        }

        self.render_garden(ui.painter(), &region, drop_hovered);

        if !self.is_blocked() {
            if let Some(hint) = response.hover_pos().and_then(|pos| self.hover_hint(pos, &region)) {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                response.on_hover_text_at_pointer(hint);
            }
        }
    }

    /// Tooltip for the topmost planted star under `pos`: its variant identifier.
    pub fn hover_hint(&self, pos: egui::Pos2, region: &GardenRegion) -> Option<String> {
        let markers = self.garden.store().markers();
        let index = marker_at(markers, region, pos)?;
        let view = project_to_view(index, &markers[index], region);
        Some(view.variant_id.to_string())
    }

    /// Handles a star released over the garden at `pointer`.
    ///
    /// An accepted drop opens the message dialog; a rejected one shows a notice.
    pub fn handle_drop(&mut self, variant: MarkerVariant, pointer: egui::Pos2, region: &GardenRegion) {
        if self.notice.is_some() {
            return;
        }
        match self.garden.drop_marker(variant, pointer, region) {
            Ok(()) => self.focus_draft = true,
            Err(GardenError::OutsideGarden) => self.notify(OUTSIDE_GARDEN_NOTICE),
            // Already logged by the state machine
            Err(_) => {}
        }
    }

    /// Opens the note of the topmost star under `pos`, if any.
    pub fn handle_garden_click(&mut self, pos: egui::Pos2, region: &GardenRegion) {
        if let Some(index) = marker_at(self.garden.store().markers(), region, pos) {
            if let Err(err) = self.garden.view_note(index) {
                log::debug!("star click ignored: {err}");
            }
        }
    }
}
