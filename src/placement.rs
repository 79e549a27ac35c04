//! Placement validation for dropped markers.
//!
//! The garden is the ellipse inscribed in a bounding rectangle. A drop is
//! accepted when the center of the marker it would create lies inside or on that
//! ellipse. Accepted drops yield the marker's render anchor, expressed relative to
//! the garden's top-left corner.

use crate::constants::MARKER_SIZE;
use crate::error::GardenError;
use eframe::egui;

/// The plantable area, described by the bounding box of its ellipse.
///
/// A region always has a positive, finite width and height: the ellipse test
/// divides by the radii, so degenerate boxes are refused at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GardenRegion {
    rect: egui::Rect,
    footprint: f32,
}

impl GardenRegion {
    /// Creates a region for the given bounding box with the default marker footprint.
    ///
    /// # Errors
    ///
    /// Returns [`GardenError::DegenerateRegion`] when the box has zero (or
    /// negative, or non-finite) width or height.
    pub fn new(rect: egui::Rect) -> Result<Self, GardenError> {
        let (width, height) = (rect.width(), rect.height());
        if !rect.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(GardenError::DegenerateRegion { width, height });
        }
        Ok(Self {
            rect,
            footprint: MARKER_SIZE,
        })
    }

    /// Overrides the marker footprint (edge length of the square marker).
    pub fn with_footprint(mut self, footprint: f32) -> Self {
        self.footprint = footprint;
        self
    }

    /// The bounding box in screen coordinates.
    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    /// Half of the footprint along each axis.
    fn half_footprint(&self) -> egui::Vec2 {
        egui::Vec2::splat(self.footprint / 2.0)
    }

    /// Computes the render anchor for a pointer position.
    ///
    /// The anchor is the top-left corner of a marker centered on the pointer,
    /// relative to the region's top-left corner.
    pub fn anchor_for(&self, pointer: egui::Pos2) -> egui::Pos2 {
        egui::Pos2::ZERO + (pointer - self.rect.min) - self.half_footprint()
    }

    /// Returns `u² + v²` for a point in region-local coordinates, where `u` and
    /// `v` are the offsets from the ellipse center divided by the radii.
    pub fn normalized_distance_sq(&self, local: egui::Pos2) -> f32 {
        let radii = self.rect.size() / 2.0;
        let center = egui::Pos2::ZERO + radii;
        let u = (local.x - center.x) / radii.x;
        let v = (local.y - center.y) / radii.y;
        u * u + v * v
    }

    /// Whether a region-local point lies inside or on the ellipse.
    pub fn contains_local(&self, local: egui::Pos2) -> bool {
        self.normalized_distance_sq(local) <= 1.0
    }

    /// Whether a marker anchored at `anchor` would have its center in the garden.
    pub fn accepts_anchor(&self, anchor: egui::Pos2) -> bool {
        self.contains_local(anchor + self.half_footprint())
    }

    /// Validates a drop and returns the anchor of the marker it creates.
    ///
    /// # Errors
    ///
    /// Returns [`GardenError::OutsideGarden`] when the marker's center would lie
    /// outside the ellipse.
    pub fn validate_drop(&self, pointer: egui::Pos2) -> Result<(f32, f32), GardenError> {
        let anchor = self.anchor_for(pointer);
        if self.accepts_anchor(anchor) {
            Ok((anchor.x, anchor.y))
        } else {
            Err(GardenError::OutsideGarden)
        }
    }

    /// Converts a stored anchor into the screen rectangle its marker occupies.
    pub fn marker_screen_rect(&self, anchor: (f64, f64)) -> egui::Rect {
        let min = self.rect.min + egui::vec2(anchor.0 as f32, anchor.1 as f32);
        egui::Rect::from_min_size(min, egui::Vec2::splat(self.footprint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_400x300() -> GardenRegion {
        GardenRegion::new(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(400.0, 300.0),
        ))
        .unwrap()
    }

    #[test]
    fn test_anchor_centers_marker_on_pointer() {
        let region = GardenRegion::new(egui::Rect::from_min_size(
            egui::pos2(100.0, 50.0),
            egui::vec2(400.0, 300.0),
        ))
        .unwrap();
        let anchor = region.anchor_for(egui::pos2(300.0, 200.0));
        assert_eq!(anchor, egui::pos2(180.0, 130.0));
        assert_eq!(region.validate_drop(egui::pos2(300.0, 200.0)).unwrap(), (180.0, 130.0));
    }

    #[test]
    fn test_edge_midpoints_are_accepted() {
        let region = region_400x300();
        for pointer in [
            egui::pos2(200.0, 0.0),
            egui::pos2(200.0, 300.0),
            egui::pos2(0.0, 150.0),
            egui::pos2(400.0, 150.0),
        ] {
            assert!(
                region.validate_drop(pointer).is_ok(),
                "midpoint {pointer:?} should be accepted"
            );
        }
    }

    #[test]
    fn test_corners_are_rejected() {
        let region = region_400x300();
        for pointer in [
            egui::pos2(0.0, 0.0),
            egui::pos2(400.0, 0.0),
            egui::pos2(0.0, 300.0),
            egui::pos2(400.0, 300.0),
        ] {
            assert!(matches!(
                region.validate_drop(pointer),
                Err(GardenError::OutsideGarden)
            ));
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let region = region_400x300();
        assert_eq!(region.normalized_distance_sq(egui::pos2(200.0, 0.0)), 1.0);
        assert!(region.contains_local(egui::pos2(200.0, 0.0)));
        assert_eq!(region.normalized_distance_sq(egui::pos2(0.0, 0.0)), 2.0);
        assert!(!region.contains_local(egui::pos2(0.0, 0.0)));
    }

    #[test]
    fn test_center_drop_is_accepted() {
        let region = region_400x300();
        assert_eq!(region.validate_drop(egui::pos2(200.0, 150.0)).unwrap(), (180.0, 130.0));
    }

    #[test]
    fn test_point_just_outside_is_rejected() {
        let region = region_400x300();
        assert!(region.validate_drop(egui::pos2(200.0, -1.0)).is_err());
        assert!(region.validate_drop(egui::pos2(401.0, 150.0)).is_err());
    }

    #[test]
    fn test_non_finite_pointer_is_rejected() {
        let region = region_400x300();
        assert!(region.validate_drop(egui::pos2(f32::NAN, 150.0)).is_err());
        assert!(region.validate_drop(egui::pos2(f32::INFINITY, 150.0)).is_err());
    }

    #[test]
    fn test_degenerate_regions_are_refused() {
        let flat = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 0.0));
        let thin = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(0.0, 300.0));
        assert!(matches!(
            GardenRegion::new(flat),
            Err(GardenError::DegenerateRegion { .. })
        ));
        assert!(GardenRegion::new(thin).is_err());
        assert!(GardenRegion::new(egui::Rect::NOTHING).is_err());
    }

    #[test]
    fn test_marker_screen_rect_uses_footprint() {
        let region = GardenRegion::new(egui::Rect::from_min_size(
            egui::pos2(10.0, 20.0),
            egui::vec2(400.0, 300.0),
        ))
        .unwrap()
        .with_footprint(20.0);
        let rect = region.marker_screen_rect((5.0, 5.0));
        assert_eq!(rect.min, egui::pos2(15.0, 25.0));
        assert_eq!(rect.size(), egui::vec2(20.0, 20.0));
    }
}
