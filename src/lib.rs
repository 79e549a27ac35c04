//! # Digital Garden
//!
//! A small garden widget: drag star markers from a palette into an oval garden
//! patch, attach a note to each, and find them again after a reload.
//!
//! ## Features
//! - Ellipse hit-testing that decides whether a dropped star lands in the garden
//! - An explicit interaction state machine (idle, writing a message, reading a note)
//! - Whole-garden JSON persistence through [`eframe::Storage`]
//!   (browser `localStorage` on the web, eframe's app storage natively)

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod error;
mod garden;
mod placement;
mod store;
mod types;
mod ui;
mod view;

// Re-export public types and functions
pub use constants::*;
pub use error::GardenError;
pub use garden::{GardenState, Mode};
pub use placement::GardenRegion;
pub use store::{GardenStore, MemoryStorage};
pub use types::*;
pub use ui::{GardenApp, GardenSettings};
pub use view::{marker_at, project_all, project_to_view, MarkerView, DEFAULT_MARKER_COLOR};

/// Runs the garden as a native desktop application.
///
/// # Returns
///
/// Returns `Ok(())` when the window is closed, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), eframe::Error> {
///     digital_garden::run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Digital Garden")
            .with_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Digital Garden",
        options,
        Box::new(|cc| Ok(Box::new(GardenApp::new(cc)))),
    )
}

/// Web entry point: mounts the garden on the `garden_canvas` element.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    // Logging is best effort; a second init attempt just fails quietly
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("garden_canvas"))
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no <canvas id=\"garden_canvas\"> found on the page");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(GardenApp::new(cc)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("failed to start the garden: {err:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_default_is_idle_and_empty() {
        let app = GardenApp::default();
        assert!(app.garden.store().is_empty());
        assert_eq!(app.garden.mode(), &Mode::Idle);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_footprint_constant() {
        assert_eq!(MARKER_SIZE, 40.0);
        assert_eq!(GARDEN_STORAGE_KEY, "digitalGardenData");
    }
}
