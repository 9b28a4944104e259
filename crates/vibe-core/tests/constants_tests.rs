// Bounds and relationship checks on the shared scene tuning constants.

use std::f32::consts::TAU;
use vibe_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Damping stays inside the band that reads as smooth without lag.
    assert!((3.0..=8.0).contains(&DAMPING_RATE));

    assert!(SIDE_OFFSET_X > 0.0);
    assert!(BOB_AMPLITUDE > 0.0);
    assert!(LEAN_FACTOR > 0.0);
    assert!(CAMERA_Z > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The bob is decoration; it must never rival the side travel.
    assert!(BOB_AMPLITUDE < SIDE_OFFSET_X * 0.25);

    // A facing bias past half a turn would break the strictly increasing
    // yaw target.
    assert!(FACING_BIAS > 0.0 && FACING_BIAS < TAU / 2.0);

    // The phone must stay inside the camera frustum when parked.
    assert!(SIDE_OFFSET_X < CAMERA_Z);
}

#[test]
fn skin_configuration_is_consistent() {
    assert!(SKIN_COUNT >= 1);
    assert_eq!(SKIN_ACCENTS.len(), SKIN_COUNT);
    assert!(SKIN_TEX_WIDTH > 0 && SKIN_TEX_HEIGHT > 0);
    // Portrait screens.
    assert!(SKIN_TEX_HEIGHT > SKIN_TEX_WIDTH);
}

#[test]
fn node_names_are_distinct_and_non_empty() {
    assert!(!BODY_NODE.is_empty());
    assert!(!SCREEN_NODE.is_empty());
    assert_ne!(BODY_NODE, SCREEN_NODE);
}
