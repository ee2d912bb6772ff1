use crate::{
    foundation::core::{FrameIndex, Vec2},
    render::tree::Node,
};

/// Evaluated output for one global frame: the active scenes, bottom to top.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderedFrame {
    /// Frame actually evaluated (after clamping).
    pub frame: FrameIndex,
    /// Frame the caller asked for.
    pub requested: FrameIndex,
    pub layers: Vec<Layer>,
}

impl RenderedFrame {
    pub fn was_clamped(&self) -> bool {
        self.frame != self.requested
    }

    pub fn layer(&self, scene: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.scene == scene)
    }
}

/// One scene's tree plus the styling its transition applies on top.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    pub scene: String,
    pub scene_index: usize,
    pub local_frame: FrameIndex,
    pub opacity: f64,
    /// Pixel offset of the whole layer.
    pub translate: Vec2,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipInset>,
    pub tree: Node,
}

/// Layer clip as fractions of the canvas hidden from each edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ClipInset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ClipInset {
    pub fn is_empty(&self) -> bool {
        self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
    }
}
