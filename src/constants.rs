//! Shared application-wide constants.
//! Centralizes tweakable values used across placement, persistence and rendering.

// Markers
/// Width and height of a planted marker's footprint, in garden pixels.
pub const MARKER_SIZE: f32 = 40.0;
/// Outer-to-inner radius ratio of the five-pointed star drawn for a marker.
pub const STAR_INNER_RATIO: f32 = 0.45;

// Persistence
/// Storage key holding the JSON array of planted markers.
pub const GARDEN_STORAGE_KEY: &str = "digitalGardenData";
/// Storage key holding the persisted UI settings.
pub const SETTINGS_STORAGE_KEY: &str = "app_settings";

// Garden layout
/// Default width of the garden oval's bounding box.
pub const DEFAULT_GARDEN_WIDTH: f32 = 560.0;
/// Default height of the garden oval's bounding box.
pub const DEFAULT_GARDEN_HEIGHT: f32 = 380.0;
/// Smallest garden width or height offered in the settings menu.
pub const MIN_GARDEN_EXTENT: f32 = 160.0;
/// Largest garden width or height offered in the settings menu.
pub const MAX_GARDEN_EXTENT: f32 = 1200.0;
/// Radius of the decorative circle at the garden's center, as a fraction of the smaller radius.
pub const DECORATIVE_CIRCLE_RATIO: f32 = 0.35;
/// Stroke width of the dashed outline shown while a drag hovers the garden.
pub const DROP_OUTLINE_WIDTH: f32 = 2.0;
/// Length of each dash in the drop outline.
pub const DROP_OUTLINE_DASH: f32 = 8.0;

// Palette
/// Edge length of a palette swatch in the selection bar.
pub const PALETTE_SWATCH_SIZE: f32 = 44.0;
/// Opacity applied to a palette swatch while it is being dragged.
pub const DRAGGED_SWATCH_OPACITY: f32 = 0.5;
