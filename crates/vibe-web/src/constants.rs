// Frontend wiring constants

// Canvas element the scene renders into.
pub const CANVAS_ID: &str = "scene-canvas";

// Marketing copy sections are #section-0 .. #section-(N-1); the one matching
// the active skin is shown.
pub const SECTION_ID_PREFIX: &str = "section-";
