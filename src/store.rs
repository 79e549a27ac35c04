//! Garden persistence.
//!
//! The garden is stored as a single JSON array under [`GARDEN_STORAGE_KEY`] in
//! whatever [`eframe::Storage`] the host provides (browser `localStorage` on the
//! web, eframe's app storage file natively). The whole list is written on every
//! change; storage has no append primitive.

use crate::constants::GARDEN_STORAGE_KEY;
use crate::error::GardenError;
use crate::types::PlantedMarker;
use std::collections::HashMap;

/// Ordered, append-only list of planted markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GardenStore {
    markers: Vec<PlantedMarker>,
}

impl GardenStore {
    /// Creates an empty garden.
    pub fn new() -> Self {
        Self::default()
    }

    /// All planted markers in insertion order.
    pub fn markers(&self) -> &[PlantedMarker] {
        &self.markers
    }

    /// Looks up a marker by its position in the list.
    pub fn get(&self, index: usize) -> Option<&PlantedMarker> {
        self.markers.get(index)
    }

    /// Number of planted markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether nothing has been planted yet.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Serialize the garden to its stored JSON form.
    pub fn to_json(&self) -> Result<String, GardenError> {
        serde_json::to_string(&self.markers).map_err(GardenError::Serialize)
    }

    /// Deserialize a garden from its stored JSON form.
    pub fn from_json(json: &str) -> Result<Self, GardenError> {
        let markers = serde_json::from_str(json).map_err(GardenError::MalformedStorage)?;
        Ok(Self { markers })
    }

    /// Appends a validated marker and immediately persists the full garden.
    ///
    /// The marker stays in memory even if persisting fails; the error is
    /// returned so the caller can report it.
    pub fn append(
        &mut self,
        marker: PlantedMarker,
        storage: &mut dyn eframe::Storage,
    ) -> Result<(), GardenError> {
        log::info!(
            "planting {} at ({:.1}, {:.1})",
            marker.variant,
            marker.x,
            marker.y
        );
        self.markers.push(marker);
        self.persist(storage)
    }

    /// Writes the entire garden to storage, replacing any previous value.
    pub fn persist(&self, storage: &mut dyn eframe::Storage) -> Result<(), GardenError> {
        let json = self.to_json()?;
        storage.set_string(GARDEN_STORAGE_KEY, json);
        storage.flush();
        Ok(())
    }

    /// Reads the garden from storage.
    ///
    /// A missing key is an empty garden. A present but undecodable value is
    /// reported as [`GardenError::MalformedStorage`].
    pub fn load(storage: &dyn eframe::Storage) -> Result<Self, GardenError> {
        match storage.get_string(GARDEN_STORAGE_KEY) {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::new()),
        }
    }

    /// Reads the garden, falling back to an empty one when storage is
    /// unavailable or holds malformed data.
    pub fn load_or_default(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(storage) = storage else {
            log::warn!("no persistent storage available; garden will not survive a reload");
            return Self::new();
        };
        match Self::load(storage) {
            Ok(store) => {
                log::info!("restored {} planted markers", store.len());
                store
            }
            Err(err) => {
                log::warn!("{err}; starting with an empty garden");
                Self::new()
            }
        }
    }
}

/// In-memory [`eframe::Storage`], used when the host provides none.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}
