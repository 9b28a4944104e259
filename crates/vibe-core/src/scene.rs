//! Minimal scene-graph/material model the choreography binds skins through.
//!
//! Node lookup is by exact name and happens once at scene setup; a missing
//! display surface is a typed error the caller can log together with the
//! full node list, not a silently retried scan.

use thiserror::Error;

/// Index into the fixed, ordered list of skin images.
pub type ImageId = usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("display surface '{name}' not found in scene graph")]
    SurfaceNotFound { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    /// Lit material as shipped on the model.
    Standard,
    /// Full-brightness material the skins render through, unaffected by
    /// scene lighting.
    Unlit,
}

#[derive(Clone, Debug)]
pub struct Material {
    pub kind: MaterialKind,
    pub image: Option<ImageId>,
    /// GPU-facing dirty flag; set only when the bound image actually changes.
    pub needs_upload: bool,
}

impl Material {
    pub fn standard() -> Self {
        Self {
            kind: MaterialKind::Standard,
            image: None,
            needs_upload: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub material: Material,
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.push(Node {
            name: name.into(),
            material: Material::standard(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Exact-name lookup, intended to run once at setup.
    pub fn resolve(&self, name: &str) -> Result<NodeId, SceneError> {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .map(NodeId)
            .ok_or_else(|| SceneError::SurfaceNotFound {
                name: name.to_string(),
            })
    }

    /// All node names, for the diagnostic dump when a lookup fails.
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn material(&self, id: NodeId) -> &Material {
        &self.nodes[id.0].material
    }

    pub fn material_mut(&mut self, id: NodeId) -> &mut Material {
        &mut self.nodes[id.0].material
    }
}

/// Binds skin images to one resolved display surface.
///
/// Attaching is the one-time setup step that swaps the surface material to
/// the unlit kind; per-frame binding only touches the image slot.
pub struct SkinBinder {
    surface: NodeId,
}

impl SkinBinder {
    pub fn attach(scene: &mut SceneGraph, surface: NodeId) -> Self {
        let mat = scene.material_mut(surface);
        if mat.kind != MaterialKind::Unlit {
            mat.kind = MaterialKind::Unlit;
            mat.image = None;
            mat.needs_upload = false;
        }
        Self { surface }
    }

    pub fn surface(&self) -> NodeId {
        self.surface
    }

    /// Bind `image` to the surface. Marks the material dirty only when the
    /// bound image actually changed; returns whether an upload is pending.
    pub fn bind(&self, scene: &mut SceneGraph, image: ImageId) -> bool {
        let mat = scene.material_mut(self.surface);
        if mat.image != Some(image) {
            mat.image = Some(image);
            mat.needs_upload = true;
        }
        mat.needs_upload
    }

    /// Consume the pending upload, if any, clearing the dirty flag.
    pub fn take_upload(&self, scene: &mut SceneGraph) -> Option<ImageId> {
        let mat = scene.material_mut(self.surface);
        if mat.needs_upload {
            mat.needs_upload = false;
            mat.image
        } else {
            None
        }
    }
}

/// Image metadata fixed once at texture creation, never touched per frame.
/// Getting these wrong is the upside-down / washed-out image bug class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexturePrefs {
    pub flip_y: bool,
    pub srgb: bool,
    pub center: [f32; 2],
}

impl Default for TexturePrefs {
    fn default() -> Self {
        Self {
            flip_y: false,
            srgb: true,
            center: [0.5, 0.5],
        }
    }
}
