//! Application state structures.
//!
//! This module contains the persisted UI settings and the main [`GardenApp`]
//! that ties the garden state machine to egui.

use crate::constants::{DEFAULT_GARDEN_HEIGHT, DEFAULT_GARDEN_WIDTH, SETTINGS_STORAGE_KEY};
use crate::garden::GardenState;
use crate::store::{GardenStore, MemoryStorage};
use eframe::egui;
use serde::{Deserialize, Serialize};

/// UI preferences remembered between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenSettings {
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Preferred size of the garden oval's bounding box (clamped to the window)
    pub garden_size: (f32, f32),
    /// Whether to outline the garden while a star hovers over it
    pub show_drop_outline: bool,
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            garden_size: (DEFAULT_GARDEN_WIDTH, DEFAULT_GARDEN_HEIGHT),
            show_drop_outline: true,
        }
    }
}

impl GardenSettings {
    /// Serializes the settings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads settings from storage, falling back to defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(json) = storage.and_then(|s| s.get_string(SETTINGS_STORAGE_KEY)) else {
            return Self::default();
        };
        Self::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable settings: {err}");
            Self::default()
        })
    }
}

/// The main application structure.
///
/// This struct implements the `eframe::App` trait and owns the garden state
/// machine plus the transient UI state around it.
pub struct GardenApp {
    /// Planted markers and the interaction in progress
    pub garden: GardenState,
    /// Persisted UI preferences
    pub settings: GardenSettings,
    /// Blocking notification shown to the user, if any
    pub notice: Option<String>,
    /// Storage used when the host provides none (persistence disabled)
    pub fallback_storage: MemoryStorage,
    /// Focus the message field on the next frame
    pub focus_draft: bool,
    /// Screen rectangle of the garden from the most recent frame
    pub garden_rect: Option<egui::Rect>,
}

impl Default for GardenApp {
    fn default() -> Self {
        Self {
            garden: GardenState::default(),
            settings: GardenSettings::default(),
            notice: None,
            fallback_storage: MemoryStorage::new(),
            focus_draft: false,
            garden_rect: None,
        }
    }
}

impl GardenApp {
    /// Creates the app, restoring the garden and settings from the host storage.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::from_storage(cc.storage)
    }

    /// Creates the app from an optional storage backend.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        Self {
            garden: GardenState::new(GardenStore::load_or_default(storage)),
            settings: GardenSettings::load(storage),
            ..Default::default()
        }
    }

    /// Shows a blocking notification.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    /// Whether any modal surface currently owns the input.
    pub fn is_blocked(&self) -> bool {
        self.notice.is_some() || self.garden.is_modal()
    }
}
