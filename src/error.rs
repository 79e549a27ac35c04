//! Error type shared by placement, persistence and the interaction state machine.

use thiserror::Error;

/// Everything that can go wrong while planting, saving or restoring the garden.
///
/// None of these are fatal to the widget: each one is scoped to the single
/// interaction that produced it.
#[derive(Debug, Error)]
pub enum GardenError {
    /// The marker's center fell outside the plantable ellipse.
    #[error("the marker must be dropped inside the garden patch")]
    OutsideGarden,

    /// The message was empty or whitespace-only when the placement was confirmed.
    #[error("a planted marker needs a message")]
    EmptyMessage,

    /// The garden's bounding box has no area, so the ellipse test is undefined.
    #[error("garden region is degenerate ({width}x{height})")]
    DegenerateRegion {
        /// Width of the rejected bounding box
        width: f32,
        /// Height of the rejected bounding box
        height: f32,
    },

    /// The stored garden could not be decoded.
    #[error("stored garden data is malformed: {0}")]
    MalformedStorage(#[source] serde_json::Error),

    /// The garden could not be encoded for storage.
    #[error("failed to serialize garden: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An action was requested that the current interaction mode does not allow.
    #[error("cannot {action} while {mode}")]
    InvalidTransition {
        /// The requested action
        action: &'static str,
        /// Human-readable name of the mode the garden was in
        mode: &'static str,
    },

    /// A note was requested for a marker index that does not exist.
    #[error("no planted marker at index {0}")]
    UnknownMarker(usize),
}
