//! Interaction state for the garden.
//!
//! [`GardenState`] owns the planted markers and the current interaction
//! [`Mode`]. Every user action is a transition on this value; actions that make
//! no sense in the current mode are refused with
//! [`GardenError::InvalidTransition`] and leave the state untouched.

use crate::error::GardenError;
use crate::placement::GardenRegion;
use crate::store::GardenStore;
use crate::types::{MarkerVariant, PendingPlacement, PlantedMarker};
use eframe::egui;

/// What the garden is currently waiting for.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    /// Nothing in progress; drops and note clicks are accepted
    #[default]
    Idle,
    /// A drop was accepted and a message is being written
    AwaitingMessage(PendingPlacement),
    /// The note of the marker at this index is open
    ViewingNote(usize),
}

impl Mode {
    /// Short description used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::AwaitingMessage(_) => "waiting for a message",
            Mode::ViewingNote(_) => "viewing a note",
        }
    }
}

/// The garden's markers plus the interaction in progress.
#[derive(Debug, Clone, Default)]
pub struct GardenState {
    store: GardenStore,
    mode: Mode,
}

impl GardenState {
    /// Starts idle with the given markers.
    pub fn new(store: GardenStore) -> Self {
        Self {
            store,
            mode: Mode::Idle,
        }
    }

    /// The planted markers.
    pub fn store(&self) -> &GardenStore {
        &self.store
    }

    /// The current interaction mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Whether a modal surface (message entry or note) is open.
    pub fn is_modal(&self) -> bool {
        !matches!(self.mode, Mode::Idle)
    }

    /// The placement waiting for a message, if any.
    pub fn pending(&self) -> Option<&PendingPlacement> {
        match &self.mode {
            Mode::AwaitingMessage(pending) => Some(pending),
            _ => None,
        }
    }

    /// Mutable access to the draft of the pending placement.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        match &mut self.mode {
            Mode::AwaitingMessage(pending) => Some(&mut pending.draft),
            _ => None,
        }
    }

    /// The marker whose note is open, if any.
    pub fn viewed_marker(&self) -> Option<&PlantedMarker> {
        match self.mode {
            Mode::ViewingNote(index) => self.store.get(index),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> GardenError {
        let err = GardenError::InvalidTransition {
            action,
            mode: self.mode.describe(),
        };
        log::warn!("{err}");
        err
    }

    /// Handles a marker dropped at `pointer`.
    ///
    /// On acceptance the garden starts waiting for a message. On rejection the
    /// state is unchanged and [`GardenError::OutsideGarden`] is returned for the
    /// caller to show.
    pub fn drop_marker(
        &mut self,
        variant: MarkerVariant,
        pointer: egui::Pos2,
        region: &GardenRegion,
    ) -> Result<(), GardenError> {
        if !matches!(self.mode, Mode::Idle) {
            return Err(self.invalid("drop a marker"));
        }
        let anchor = region.validate_drop(pointer)?;
        log::debug!("accepted {variant} drop, anchor ({:.1}, {:.1})", anchor.0, anchor.1);
        self.mode = Mode::AwaitingMessage(PendingPlacement::new(variant, anchor));
        Ok(())
    }

    /// Plants the pending marker with its draft message and persists the garden.
    ///
    /// An empty draft keeps the placement open and returns
    /// [`GardenError::EmptyMessage`]. On success returns the new marker's index.
    pub fn confirm(&mut self, storage: &mut dyn eframe::Storage) -> Result<usize, GardenError> {
        let Mode::AwaitingMessage(pending) = &self.mode else {
            return Err(self.invalid("confirm a placement"));
        };
        let marker = pending.to_marker()?;
        self.mode = Mode::Idle;
        self.store.append(marker, storage)?;
        Ok(self.store.len() - 1)
    }

    /// Abandons the pending placement, discarding its anchor, variant and draft.
    pub fn cancel(&mut self) -> Result<(), GardenError> {
        if !matches!(self.mode, Mode::AwaitingMessage(_)) {
            return Err(self.invalid("cancel a placement"));
        }
        self.mode = Mode::Idle;
        Ok(())
    }

    /// Opens the note attached to the marker at `index`.
    pub fn view_note(&mut self, index: usize) -> Result<(), GardenError> {
        if !matches!(self.mode, Mode::Idle) {
            return Err(self.invalid("open a note"));
        }
        if self.store.get(index).is_none() {
            return Err(GardenError::UnknownMarker(index));
        }
        self.mode = Mode::ViewingNote(index);
        Ok(())
    }

    /// Closes the open note.
    pub fn dismiss_note(&mut self) -> Result<(), GardenError> {
        if !matches!(self.mode, Mode::ViewingNote(_)) {
            return Err(self.invalid("dismiss a note"));
        }
        self.mode = Mode::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn region() -> GardenRegion {
        GardenRegion::new(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(400.0, 300.0),
        ))
        .unwrap()
    }

    fn plant(state: &mut GardenState, storage: &mut MemoryStorage, message: &str) -> usize {
        state
            .drop_marker(MarkerVariant::Yellow, egui::pos2(200.0, 150.0), &region())
            .unwrap();
        *state.draft_mut().unwrap() = message.to_string();
        state.confirm(storage).unwrap()
    }

    #[test]
    fn test_accepted_drop_awaits_message() {
        let mut state = GardenState::default();
        state
            .drop_marker(MarkerVariant::Blue, egui::pos2(200.0, 150.0), &region())
            .unwrap();
        let pending = state.pending().expect("placement should be pending");
        assert_eq!(pending.variant, MarkerVariant::Blue);
        assert_eq!(pending.anchor, (180.0, 130.0));
        assert!(state.is_modal());
    }

    #[test]
    fn test_rejected_drop_leaves_state_idle() {
        let mut state = GardenState::default();
        let result = state.drop_marker(MarkerVariant::Blue, egui::pos2(0.0, 0.0), &region());
        assert!(matches!(result, Err(GardenError::OutsideGarden)));
        assert_eq!(state.mode(), &Mode::Idle);
        assert!(state.store().is_empty());
    }

    #[test]
    fn test_confirm_plants_and_persists() {
        let mut storage = MemoryStorage::new();
        let mut state = GardenState::default();
        let index = plant(&mut state, &mut storage, "  first star ");
        assert_eq!(index, 0);
        assert_eq!(state.mode(), &Mode::Idle);
        assert_eq!(state.store().markers()[0].message, "first star");

        let reloaded = GardenStore::load(&storage).unwrap();
        assert_eq!(reloaded.markers(), state.store().markers());
    }

    #[test]
    fn test_empty_message_keeps_placement_open() {
        let mut storage = MemoryStorage::new();
        let mut state = GardenState::default();
        state
            .drop_marker(MarkerVariant::Red, egui::pos2(200.0, 150.0), &region())
            .unwrap();
        let before = state.store().len();

        *state.draft_mut().unwrap() = "   ".to_string();
        assert!(matches!(
            state.confirm(&mut storage),
            Err(GardenError::EmptyMessage)
        ));
        assert_eq!(state.store().len(), before);
        assert!(state.pending().is_some(), "placement should stay open for correction");
        assert!(GardenStore::load(&storage).unwrap().is_empty());

        // Fixing the draft then succeeds with the same anchor
        *state.draft_mut().unwrap() = "fixed".to_string();
        state.confirm(&mut storage).unwrap();
        assert_eq!(state.store().markers()[0].anchor(), (180.0, 130.0));
    }

    #[test]
    fn test_cancel_discards_candidate() {
        let storage = MemoryStorage::new();
        let mut state = GardenState::default();
        state
            .drop_marker(MarkerVariant::White, egui::pos2(200.0, 150.0), &region())
            .unwrap();
        *state.draft_mut().unwrap() = "half written".to_string();
        state.cancel().unwrap();

        assert_eq!(state.mode(), &Mode::Idle);
        assert!(state.store().is_empty());
        assert!(GardenStore::load(&storage).unwrap().is_empty());

        // A fresh drop starts from an empty draft
        state
            .drop_marker(MarkerVariant::White, egui::pos2(210.0, 150.0), &region())
            .unwrap();
        assert_eq!(state.pending().unwrap().draft, "");
    }

    #[test]
    fn test_confirm_while_idle_is_refused() {
        let mut storage = MemoryStorage::new();
        let mut state = GardenState::default();
        assert!(matches!(
            state.confirm(&mut storage),
            Err(GardenError::InvalidTransition { .. })
        ));
        assert!(state.cancel().is_err());
        assert!(state.dismiss_note().is_err());
    }

    #[test]
    fn test_drop_refused_while_modal_open() {
        let mut storage = MemoryStorage::new();
        let mut state = GardenState::default();
        plant(&mut state, &mut storage, "one");

        state
            .drop_marker(MarkerVariant::Red, egui::pos2(200.0, 150.0), &region())
            .unwrap();
        let pending = state.pending().cloned();
        assert!(state
            .drop_marker(MarkerVariant::Blue, egui::pos2(100.0, 150.0), &region())
            .is_err());
        assert_eq!(state.pending().cloned(), pending);

        state.cancel().unwrap();
        state.view_note(0).unwrap();
        assert!(state
            .drop_marker(MarkerVariant::Blue, egui::pos2(200.0, 150.0), &region())
            .is_err());
    }

    #[test]
    fn test_view_and_dismiss_note() {
        let mut storage = MemoryStorage::new();
        let mut state = GardenState::default();
        plant(&mut state, &mut storage, "hello garden");

        state.view_note(0).unwrap();
        assert_eq!(state.viewed_marker().unwrap().message, "hello garden");
        assert!(state.view_note(0).is_err());

        state.dismiss_note().unwrap();
        assert_eq!(state.mode(), &Mode::Idle);
        assert!(state.viewed_marker().is_none());
    }

    #[test]
    fn test_view_unknown_marker_is_refused() {
        let mut state = GardenState::default();
        assert!(matches!(
            state.view_note(4),
            Err(GardenError::UnknownMarker(4))
        ));
        assert_eq!(state.mode(), &Mode::Idle);
    }
}
