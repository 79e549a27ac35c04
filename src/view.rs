//! Projection from stored markers to what the canvas draws.

use crate::placement::GardenRegion;
use crate::types::{MarkerVariant, PlantedMarker};
use eframe::egui;

/// Fill used for variants without a known color.
pub const DEFAULT_MARKER_COLOR: egui::Color32 = egui::Color32::BLACK;

impl MarkerVariant {
    /// Display color for this variant.
    pub fn color(&self) -> egui::Color32 {
        match self {
            MarkerVariant::Black => egui::Color32::BLACK,
            MarkerVariant::White => egui::Color32::from_rgb(0xf0, 0xf0, 0xf0),
            MarkerVariant::Yellow => egui::Color32::from_rgb(0xff, 0xd7, 0x00),
            MarkerVariant::Blue => egui::Color32::from_rgb(0x55, 0xaa, 0xff),
            MarkerVariant::Red => egui::Color32::from_rgb(0xff, 0x55, 0x55),
            MarkerVariant::Other(_) => DEFAULT_MARKER_COLOR,
        }
    }
}

/// Everything needed to draw one planted marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView<'a> {
    /// Position of the marker in the garden list
    pub index: usize,
    /// Screen rectangle occupied by the marker
    pub rect: egui::Rect,
    /// Fill color
    pub fill: egui::Color32,
    /// Variant identifier, shown as the hover tooltip
    pub variant_id: &'a str,
    /// The attached note; the canvas keeps it hidden until the star is clicked
    pub message: &'a str,
}

/// Projects one marker into screen space for the given region.
pub fn project_to_view<'a>(
    index: usize,
    marker: &'a PlantedMarker,
    region: &GardenRegion,
) -> MarkerView<'a> {
    MarkerView {
        index,
        rect: region.marker_screen_rect(marker.anchor()),
        fill: marker.variant.color(),
        variant_id: marker.variant.id(),
        message: &marker.message,
    }
}

/// Projects every marker, preserving storage order (later markers draw on top).
pub fn project_all<'a>(
    markers: &'a [PlantedMarker],
    region: &'a GardenRegion,
) -> impl Iterator<Item = MarkerView<'a>> + 'a {
    markers
        .iter()
        .enumerate()
        .map(move |(index, marker)| project_to_view(index, marker, region))
}

/// Finds the topmost marker under a screen position.
pub fn marker_at(
    markers: &[PlantedMarker],
    region: &GardenRegion,
    pos: egui::Pos2,
) -> Option<usize> {
    markers
        .iter()
        .enumerate()
        .rev()
        .find(|(_, marker)| region.marker_screen_rect(marker.anchor()).contains(pos))
        .map(|(index, _)| index)
}
