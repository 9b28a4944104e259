pub mod artwork;
pub mod choreographer;
pub mod constants;
pub mod mesh;
pub mod pose;
pub mod scene;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use choreographer::*;
pub use pose::*;
pub use scene::*;
pub use state::*;
