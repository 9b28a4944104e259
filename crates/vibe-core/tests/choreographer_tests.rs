use std::f32::consts::TAU;
use vibe_core::{damp, pose_target, skin_index, ChoreographyParams, ScrollChoreographer};

#[test]
fn skin_index_scenarios_for_three_skins() {
    assert_eq!(skin_index(0.0, 3), 0);
    assert_eq!(skin_index(0.34, 3), 1);
    assert_eq!(skin_index(0.99, 3), 2);
    // Top edge is clamped, not wrapped.
    assert_eq!(skin_index(1.0, 3), 2);
}

#[test]
fn skin_index_is_non_decreasing_in_scroll() {
    for count in [1usize, 2, 3, 7] {
        let mut last = 0usize;
        for step in 0..=1000 {
            let scroll = step as f32 / 1000.0;
            let idx = skin_index(scroll, count);
            assert!(idx < count, "index {} out of range for count {}", idx, count);
            assert!(idx >= last, "index decreased at scroll {}", scroll);
            last = idx;
        }
        assert_eq!(last, count - 1, "scroll 1.0 must select the last skin");
    }
}

#[test]
fn skin_index_handles_out_of_range_scroll() {
    assert_eq!(skin_index(-0.5, 3), 0);
    assert_eq!(skin_index(1.5, 3), 2);
}

#[test]
fn zero_skin_count_is_clamped_to_one() {
    let mut chor = ScrollChoreographer::new(ChoreographyParams {
        skin_count: 0,
        ..ChoreographyParams::default()
    });
    assert_eq!(chor.params().skin_count, 1);
    assert_eq!(chor.advance(1.0, 0.0, 0.016), 0);
}

#[test]
fn parity_sets_the_parked_side() {
    let params = ChoreographyParams::default();
    let even = pose_target(&params, 0, 0.0, 0.0);
    let odd = pose_target(&params, 1, 0.0, 0.0);
    let even_again = pose_target(&params, 2, 0.0, 0.0);
    assert!((even.position.x - 1.3).abs() < 1e-6);
    assert!((odd.position.x + 1.3).abs() < 1e-6);
    assert!((even_again.position.x - 1.3).abs() < 1e-6);
}

#[test]
fn yaw_target_accumulates_whole_turns() {
    let params = ChoreographyParams::default();
    let mut last = f32::MIN;
    for skin in 0..8 {
        let yaw = pose_target(&params, skin, 0.0, 0.0).rotation.y;
        assert!(yaw > last, "yaw target must be strictly increasing in skin");
        last = yaw;
    }
    // Never normalized into a principal range: skin 4 sits past four turns
    // minus the facing bias.
    let yaw4 = pose_target(&params, 4, 0.0, 0.0).rotation.y;
    assert!(yaw4 > 4.0 * TAU - 1.0);
}

#[test]
fn bob_depends_only_on_elapsed_time() {
    let params = ChoreographyParams::default();
    let at_zero = pose_target(&params, 0, 0.0, 0.0);
    let at_peak = pose_target(&params, 0, std::f32::consts::FRAC_PI_2, 0.0);
    assert!(at_zero.position.y.abs() < 1e-6);
    assert!((at_peak.position.y - params.bob_amplitude).abs() < 1e-6);
}

#[test]
fn lean_tracks_outstanding_travel() {
    let params = ChoreographyParams::default();
    // Far from the parked side: full lean toward it.
    let moving = pose_target(&params, 0, 0.0, 0.0);
    assert!((moving.rotation.z - 1.3 * params.lean_factor).abs() < 1e-6);
    // Parked: no lean left.
    let parked = pose_target(&params, 0, 0.0, 1.3);
    assert!(parked.rotation.z.abs() < 1e-6);
}

#[test]
fn damping_converges_without_overshoot() {
    // 50 frames at rate 6, dt 0.1 starting from rest toward x = 1.3.
    let mut x = 0.0f32;
    let mut prev = x;
    for _ in 0..50 {
        x = damp(x, 1.3, 6.0, 0.1);
        assert!(x >= prev, "convergence must be monotone");
        assert!(x <= 1.3, "damping must never overshoot the target");
        prev = x;
    }
    assert!((1.3 - x).abs() < 0.01);
}

#[test]
fn damping_is_idempotent_at_the_fixed_point() {
    let x = damp(1.3, 1.3, 6.0, 0.1);
    assert_eq!(x, 1.3);
}

#[test]
fn damping_is_frame_rate_independent() {
    // One 0.2s step lands where two 0.1s steps do, up to float noise.
    let one = damp(0.0, 1.0, 5.0, 0.2);
    let two = damp(damp(0.0, 1.0, 5.0, 0.1), 1.0, 5.0, 0.1);
    assert!((one - two).abs() < 1e-5);
}

#[test]
fn advance_parks_the_phone_on_the_active_side() {
    let mut chor = ScrollChoreographer::new(ChoreographyParams {
        bob_amplitude: 0.0,
        ..ChoreographyParams::default()
    });
    for _ in 0..300 {
        let skin = chor.advance(0.0, 0.0, 0.016);
        assert_eq!(skin, 0);
    }
    let pose = chor.pose();
    assert!((pose.position.x - 1.3).abs() < 1e-3);
    // Skin 0 parks on the right; the facing bias pulls the yaw slightly
    // negative so the screen looks toward center.
    assert!((pose.rotation.y + chor.params().facing_bias).abs() < 1e-3);
    // Lean settles once the travel is done.
    assert!(pose.rotation.z.abs() < 1e-3);
}

#[test]
fn advance_crosses_sides_when_the_skin_flips_parity() {
    let mut chor = ScrollChoreographer::new(ChoreographyParams::default());
    for _ in 0..300 {
        chor.advance(0.0, 0.0, 0.016);
    }
    assert!(chor.pose().position.x > 1.0);
    for _ in 0..300 {
        let skin = chor.advance(0.5, 0.0, 0.016);
        assert_eq!(skin, 1);
    }
    assert!(chor.pose().position.x < -1.0);
    // A full extra turn accumulated on the way over.
    assert!(chor.pose().rotation.y > TAU - 0.5);
}
