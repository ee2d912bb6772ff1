//! Scene components: pure functions from a scene-local frame to a render tree.

use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{
    foundation::core::{Canvas, Fps, FrameIndex, Rgba8},
    foundation::error::{ReelError, ReelResult},
    render::tree::{Direction, FlexLayout, Node, Paint},
    theme::Theme,
};

pub(crate) mod features;
pub(crate) mod intro;
pub(crate) mod outro;
pub(crate) mod problem;
pub(crate) mod solution;

/// Everything a scene may read while rendering one frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx<'a> {
    /// Scene-local frame (`0` is the first frame the scene is visible).
    pub frame: FrameIndex,
    pub fps: Fps,
    pub canvas: Canvas,
    /// Scene length in frames.
    pub duration: u64,
    pub theme: &'a Theme,
}

impl SceneCtx<'_> {
    /// Local frame as a float, for interpolation inputs.
    pub fn t(&self) -> f64 {
        self.frame.0 as f64
    }
}

/// A self-contained visual segment.
///
/// `render` must be a pure function of `ctx`: no interior mutability, no dependence on earlier
/// calls. Frames may be requested in any order and from several threads at once.
pub trait Scene: Send + Sync + fmt::Debug {
    /// Name used by configs and emitted layers.
    fn name(&self) -> &str;

    fn render(&self, ctx: &SceneCtx<'_>) -> Node;
}

/// Builds a scene from its JSON `params` (`null` means defaults).
pub type SceneFactory = fn(&serde_json::Value) -> ReelResult<Arc<dyn Scene>>;

/// Name → factory table used to build timelines from configuration.
#[derive(Clone)]
pub struct SceneRegistry {
    factories: BTreeMap<String, SceneFactory>,
}

impl fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.factories.keys()).finish()
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl SceneRegistry {
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry containing the five promo scenes.
    pub fn with_builtin() -> Self {
        let mut factories = BTreeMap::<String, SceneFactory>::new();
        factories.insert(intro::Intro::NAME.to_string(), intro::Intro::factory);
        factories.insert(problem::Problem::NAME.to_string(), problem::Problem::factory);
        factories.insert(solution::Solution::NAME.to_string(), solution::Solution::factory);
        factories.insert(features::Features::NAME.to_string(), features::Features::factory);
        factories.insert(outro::Outro::NAME.to_string(), outro::Outro::factory);
        Self { factories }
    }

    pub fn register(&mut self, name: impl Into<String>, factory: SceneFactory) -> ReelResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ReelError::validation("scene name must be non-empty"));
        }
        if self.factories.contains_key(&name) {
            return Err(ReelError::validation(format!("duplicate scene name '{name}'")));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn create(&self, name: &str, params: &serde_json::Value) -> ReelResult<Arc<dyn Scene>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            let known = self.names().collect::<Vec<_>>().join(", ");
            ReelError::validation(format!("unknown scene '{name}' (known: {known})"))
        })?;
        factory(params)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

/// Decode scene params, treating `null` as the defaults.
pub(crate) fn parse_params<P>(scene: &str, params: &serde_json::Value) -> ReelResult<P>
where
    P: serde::de::DeserializeOwned + Default,
{
    if params.is_null() {
        return Ok(P::default());
    }
    serde_json::from_value(params.clone())
        .map_err(|e| ReelError::validation(format!("invalid params for scene '{scene}': {e}")))
}

/// Full-frame background with centred children.
pub(crate) fn backdrop(color: Rgba8, direction: Direction) -> Node {
    Node::fill()
        .background(Paint::solid(color))
        .layout(FlexLayout::centered(direction))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
