use vibe_core::constants::{BODY_NODE, SCREEN_NODE};
use vibe_core::mesh::{build_scene_graph, phone_body_vertices, screen_plate_vertices};
use vibe_core::{MaterialKind, SceneError, SkinBinder, TexturePrefs};

#[test]
fn resolve_finds_nodes_by_exact_name() {
    let scene = build_scene_graph();
    assert!(scene.resolve(BODY_NODE).is_ok());
    assert!(scene.resolve(SCREEN_NODE).is_ok());
    // Exact match only; the defensive "name contains" scan is gone.
    assert!(scene.resolve("Screen").is_err());
}

#[test]
fn missing_surface_is_a_typed_error_with_a_node_dump() {
    let scene = build_scene_graph();
    let err = scene.resolve("DisplayPanel").unwrap_err();
    assert_eq!(
        err,
        SceneError::SurfaceNotFound {
            name: "DisplayPanel".to_string()
        }
    );
    let names = scene.node_names();
    assert!(names.contains(&BODY_NODE));
    assert!(names.contains(&SCREEN_NODE));
}

#[test]
fn attach_swaps_the_surface_material_to_unlit_once() {
    let mut scene = build_scene_graph();
    let id = scene.resolve(SCREEN_NODE).unwrap();
    assert_eq!(scene.material(id).kind, MaterialKind::Standard);

    let binder = SkinBinder::attach(&mut scene, id);
    assert_eq!(scene.material(id).kind, MaterialKind::Unlit);

    // Re-attach after a bind must not clear the bound image.
    binder.bind(&mut scene, 2);
    let binder2 = SkinBinder::attach(&mut scene, id);
    assert_eq!(scene.material(id).image, Some(2));
    assert_eq!(binder2.surface(), id);
}

#[test]
fn bind_marks_upload_only_when_the_image_changes() {
    let mut scene = build_scene_graph();
    let id = scene.resolve(SCREEN_NODE).unwrap();
    let binder = SkinBinder::attach(&mut scene, id);

    assert!(binder.bind(&mut scene, 0));
    assert_eq!(binder.take_upload(&mut scene), Some(0));

    // Same image again: no redundant GPU-facing write.
    assert!(!binder.bind(&mut scene, 0));
    assert_eq!(binder.take_upload(&mut scene), None);

    assert!(binder.bind(&mut scene, 1));
    assert_eq!(binder.take_upload(&mut scene), Some(1));
}

#[test]
fn pending_upload_survives_repeat_binds_until_taken() {
    let mut scene = build_scene_graph();
    let id = scene.resolve(SCREEN_NODE).unwrap();
    let binder = SkinBinder::attach(&mut scene, id);

    assert!(binder.bind(&mut scene, 1));
    // Not consumed yet; binding the same image keeps the upload pending.
    assert!(binder.bind(&mut scene, 1));
    assert_eq!(binder.take_upload(&mut scene), Some(1));
}

#[test]
fn texture_prefs_are_fixed_at_load_time_defaults() {
    // Regression guard for the upside-down / washed-out image bug class.
    let prefs = TexturePrefs::default();
    assert!(!prefs.flip_y);
    assert!(prefs.srgb);
    assert_eq!(prefs.center, [0.5, 0.5]);
}

#[test]
fn phone_meshes_have_the_expected_shape() {
    let body = phone_body_vertices();
    assert_eq!(body.len(), 36);

    let screen = screen_plate_vertices();
    assert_eq!(screen.len(), 6);
    // Full [0,1] UV coverage with v = 0 at the top edge.
    let min_v = screen.iter().map(|v| v.uv[1]).fold(f32::MAX, f32::min);
    let max_v = screen.iter().map(|v| v.uv[1]).fold(f32::MIN, f32::max);
    assert_eq!((min_v, max_v), (0.0, 1.0));
    for v in &screen {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        assert!(v.position[2] > 0.0, "plate must float in front of the body");
        if v.uv[1] == 0.0 {
            assert!(v.position[1] > 0.0, "v = 0 must map to the top edge");
        }
    }
}
