//! Phone geometry shared by the web and native renderers.

use crate::constants::{BODY_NODE, SCREEN_NODE};
use crate::scene::SceneGraph;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

// Body half extents: a tall, thin slab.
const BODY_HW: f32 = 0.46;
const BODY_HH: f32 = 0.95;
const BODY_HD: f32 = 0.045;

// Screen plate, slightly inset and floating just in front of the body so the
// skin never z-fights with the slab face.
const SCREEN_HW: f32 = 0.42;
const SCREEN_HH: f32 = 0.89;
const SCREEN_Z: f32 = BODY_HD + 0.002;

fn quad(out: &mut Vec<Vertex>, corners: [[f32; 3]; 4], normal: [f32; 3], uvs: [[f32; 2]; 4]) {
    // corners ordered tl, bl, br, tr as seen looking down the normal
    for i in [0usize, 1, 2, 0, 2, 3] {
        out.push(Vertex {
            position: corners[i],
            normal,
            uv: uvs[i],
        });
    }
}

/// Slab body of the phone: six quads, UVs unused by the body shader.
pub fn phone_body_vertices() -> Vec<Vertex> {
    let (w, h, d) = (BODY_HW, BODY_HH, BODY_HD);
    let uv0 = [[0.0, 0.0]; 4];
    let mut v = Vec::with_capacity(36);
    // front (+Z) and back (-Z)
    quad(
        &mut v,
        [[-w, h, d], [-w, -h, d], [w, -h, d], [w, h, d]],
        [0.0, 0.0, 1.0],
        uv0,
    );
    quad(
        &mut v,
        [[w, h, -d], [w, -h, -d], [-w, -h, -d], [-w, h, -d]],
        [0.0, 0.0, -1.0],
        uv0,
    );
    // left (-X) and right (+X)
    quad(
        &mut v,
        [[-w, h, -d], [-w, -h, -d], [-w, -h, d], [-w, h, d]],
        [-1.0, 0.0, 0.0],
        uv0,
    );
    quad(
        &mut v,
        [[w, h, d], [w, -h, d], [w, -h, -d], [w, h, -d]],
        [1.0, 0.0, 0.0],
        uv0,
    );
    // top (+Y) and bottom (-Y)
    quad(
        &mut v,
        [[-w, h, -d], [-w, h, d], [w, h, d], [w, h, -d]],
        [0.0, 1.0, 0.0],
        uv0,
    );
    quad(
        &mut v,
        [[-w, -h, d], [-w, -h, -d], [w, -h, -d], [w, -h, d]],
        [0.0, -1.0, 0.0],
        uv0,
    );
    v
}

/// Display surface the skins are projected onto. Full [0,1] UV coverage,
/// v = 0 at the top edge.
pub fn screen_plate_vertices() -> Vec<Vertex> {
    let (w, h, z) = (SCREEN_HW, SCREEN_HH, SCREEN_Z);
    let mut v = Vec::with_capacity(6);
    quad(
        &mut v,
        [[-w, h, z], [-w, -h, z], [w, -h, z], [w, h, z]],
        [0.0, 0.0, 1.0],
        [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
    );
    v
}

/// The two-node scene graph both frontends animate.
pub fn build_scene_graph() -> SceneGraph {
    let mut scene = SceneGraph::new();
    scene.add_node(BODY_NODE);
    scene.add_node(SCREEN_NODE);
    scene
}
