// Shared scene tuning constants used by both the web and native frontends.

// Camera
pub const CAMERA_Z: f32 = 6.0; // eye distance from the phone's rest position

// Scroll choreography
pub const SIDE_OFFSET_X: f32 = 1.3; // parked X position; sign flips with skin parity
pub const DAMPING_RATE: f32 = 6.0; // exponential smoothing rate (useful band 3-8)
pub const BOB_AMPLITUDE: f32 = 0.08; // idle vertical bob, independent of scroll
pub const LEAN_FACTOR: f32 = 0.35; // roll per unit of outstanding X travel
pub const FACING_BIAS: f32 = 0.22; // yaw nudge so the screen faces viewport center

// Skins
pub const SKIN_COUNT: usize = 3;
pub const SKIN_TEX_WIDTH: u32 = 256;
pub const SKIN_TEX_HEIGHT: u32 = 512;

// Accent color per skin; index 0 is the NightVibe purple from the brand.
pub const SKIN_ACCENTS: [[f32; 3]; 3] = [
    [0.545, 0.361, 0.965], // purple
    [0.925, 0.282, 0.600], // pink
    [0.220, 0.741, 0.973], // cyan
];

// Scene-graph node identifiers; resolved once at setup, never scanned per frame.
pub const BODY_NODE: &str = "PhoneBody";
pub const SCREEN_NODE: &str = "ScreenPlate";
