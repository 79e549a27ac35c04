//! Core data types for the digital garden.
//!
//! This module defines the marker variants offered by the palette, the planted
//! marker record that is persisted, and the pending placement that sits between
//! an accepted drop and a confirmed message.

use crate::error::GardenError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of star marker a user can plant.
///
/// Identifiers that are not known at build time are kept verbatim in
/// [`MarkerVariant::Other`] so a round trip through storage never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkerVariant {
    /// `star-black`
    Black,
    /// `star-white`
    White,
    /// `star-yellow`
    Yellow,
    /// `star-blue`
    Blue,
    /// `star-red`
    Red,
    /// Any identifier not in the list above
    Other(String),
}

impl MarkerVariant {
    /// Variants offered in the palette, in display order.
    pub const PALETTE: [MarkerVariant; 5] = [
        MarkerVariant::Black,
        MarkerVariant::White,
        MarkerVariant::Yellow,
        MarkerVariant::Blue,
        MarkerVariant::Red,
    ];

    /// Returns the stable identifier stored in the `type` field.
    pub fn id(&self) -> &str {
        match self {
            MarkerVariant::Black => "star-black",
            MarkerVariant::White => "star-white",
            MarkerVariant::Yellow => "star-yellow",
            MarkerVariant::Blue => "star-blue",
            MarkerVariant::Red => "star-red",
            MarkerVariant::Other(id) => id,
        }
    }

    /// Parses an identifier, falling back to [`MarkerVariant::Other`].
    pub fn from_id(id: &str) -> Self {
        match id {
            "star-black" => MarkerVariant::Black,
            "star-white" => MarkerVariant::White,
            "star-yellow" => MarkerVariant::Yellow,
            "star-blue" => MarkerVariant::Blue,
            "star-red" => MarkerVariant::Red,
            other => MarkerVariant::Other(other.to_string()),
        }
    }

    /// Whether this variant is one of the built-in kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, MarkerVariant::Other(_))
    }
}

impl From<String> for MarkerVariant {
    fn from(id: String) -> Self {
        match MarkerVariant::from_id(&id) {
            MarkerVariant::Other(_) => MarkerVariant::Other(id),
            known => known,
        }
    }
}

impl From<MarkerVariant> for String {
    fn from(variant: MarkerVariant) -> Self {
        match variant {
            MarkerVariant::Other(id) => id,
            known => known.id().to_string(),
        }
    }
}

impl fmt::Display for MarkerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One planted marker, as stored and restored.
///
/// Coordinates are kept at JSON number precision so a stored garden written by
/// another producer is rewritten unchanged; they are narrowed to `f32` only when
/// drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantedMarker {
    /// Anchor x offset from the garden's left edge
    pub x: f64,
    /// Anchor y offset from the garden's top edge
    pub y: f64,
    /// Which star kind was planted
    #[serde(rename = "type", alias = "variant")]
    pub variant: MarkerVariant,
    /// The note attached at planting time
    pub message: String,
}

impl PlantedMarker {
    /// Creates a marker at a render anchor, trimming the message.
    ///
    /// # Errors
    ///
    /// Returns [`GardenError::EmptyMessage`] when the message is empty or
    /// whitespace-only.
    pub fn new(anchor: (f32, f32), variant: MarkerVariant, message: &str) -> Result<Self, GardenError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GardenError::EmptyMessage);
        }
        Ok(Self {
            x: f64::from(anchor.0),
            y: f64::from(anchor.1),
            variant,
            message: message.to_string(),
        })
    }

    /// The marker's render anchor relative to the garden's top-left corner.
    pub fn anchor(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// An accepted drop waiting for the user to write a message.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPlacement {
    /// Star kind that was dropped
    pub variant: MarkerVariant,
    /// Render anchor computed by the placement validator
    pub anchor: (f32, f32),
    /// Message text being edited
    pub draft: String,
}

impl PendingPlacement {
    /// Starts a placement with an empty draft.
    pub fn new(variant: MarkerVariant, anchor: (f32, f32)) -> Self {
        Self {
            variant,
            anchor,
            draft: String::new(),
        }
    }

    /// Turns the pending placement into a marker using the current draft.
    pub fn to_marker(&self) -> Result<PlantedMarker, GardenError> {
        PlantedMarker::new(self.anchor, self.variant.clone(), &self.draft)
    }
}
