//! Garden rendering: the oval patch, planted stars and palette swatches.

use super::state::GardenApp;
use crate::constants::{
    DECORATIVE_CIRCLE_RATIO, DROP_OUTLINE_DASH, DROP_OUTLINE_WIDTH, STAR_INNER_RATIO,
};
use crate::placement::GardenRegion;
use crate::view::project_all;
use eframe::egui;
use eframe::epaint::Mesh;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Number of segments used to approximate the garden ellipse outline.
const ELLIPSE_SEGMENTS: usize = 96;

impl GardenApp {
    /// Draws the garden patch and every planted marker.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `region` - The garden region in screen space
    /// * `drop_hovered` - Whether a dragged star is currently over the garden
    pub fn render_garden(&self, painter: &egui::Painter, region: &GardenRegion, drop_hovered: bool) {
        let rect = region.rect();
        let radius = rect.size() / 2.0;

        let (grass, rim) = if self.settings.dark_mode {
            (
                egui::Color32::from_rgb(34, 87, 46),
                egui::Color32::from_rgb(20, 56, 28),
            )
        } else {
            (
                egui::Color32::from_rgb(120, 190, 110),
                egui::Color32::from_rgb(70, 130, 65),
            )
        };
        painter.add(egui::Shape::ellipse_filled(rect.center(), radius, grass));
        painter.add(egui::Shape::ellipse_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(3.0, rim),
        ));

        // Decorative circle in the middle of the patch
        let circle_radius = radius.x.min(radius.y) * DECORATIVE_CIRCLE_RATIO;
        painter.circle_stroke(
            rect.center(),
            circle_radius,
            egui::Stroke::new(1.5, rim.gamma_multiply(0.8)),
        );

        if drop_hovered && self.settings.show_drop_outline {
            let mut outline = ellipse_points(rect);
            outline.push(outline[0]);
            painter.extend(egui::Shape::dashed_line(
                &outline,
                egui::Stroke::new(DROP_OUTLINE_WIDTH, egui::Color32::from_rgb(0xff, 0xd7, 0x00)),
                DROP_OUTLINE_DASH,
                DROP_OUTLINE_DASH / 2.0,
            ));
        }

        // Later markers are drawn on top of earlier ones
        for view in project_all(self.garden.store().markers(), region) {
            paint_star(painter, view.rect, view.fill);
        }
    }
}

/// Points along the ellipse inscribed in `rect`.
fn ellipse_points(rect: egui::Rect) -> Vec<egui::Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
            center + egui::vec2(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect()
}

/// Vertices of a five-pointed star inscribed in `rect`, starting at the top point.
pub fn star_points(rect: egui::Rect) -> Vec<egui::Pos2> {
    let center = rect.center();
    let outer = rect.width().min(rect.height()) / 2.0;
    let inner = outer * STAR_INNER_RATIO;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = -FRAC_PI_2 + PI * i as f32 / 5.0;
            center + egui::vec2(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Paints a filled star with a thin contrasting outline.
///
/// The star is concave, so it is filled as a triangle fan around its center
/// rather than as a convex polygon.
pub fn paint_star(painter: &egui::Painter, rect: egui::Rect, fill: egui::Color32) {
    let points = star_points(rect);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.center(), fill);
    for p in &points {
        mesh.colored_vertex(*p, fill);
    }
    let n = points.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    painter.add(egui::Shape::mesh(mesh));

    let outline = if fill.r() as u32 + fill.g() as u32 + fill.b() as u32 > 3 * 128 {
        egui::Color32::from_gray(60)
    } else {
        egui::Color32::from_gray(200)
    };
    painter.add(egui::Shape::closed_line(points, egui::Stroke::new(1.0, outline)));
}
