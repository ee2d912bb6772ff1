//! JSON description of a composition, for declaring videos outside Rust code.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    composition::Composition,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::SceneRegistry,
    theme::Theme,
    timeline::{sequence::TimelineBuilder, transition::Transition},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionConfig {
    pub id: String,
    pub fps: Fps,
    pub width: u32,
    pub height: u32,
    /// Declared length; when absent the laid-out timeline length is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_frames: Option<u64>,
    #[serde(default)]
    pub theme: Theme,
    pub timeline: Vec<TimelineItem>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineItem {
    Scene(SceneItem),
    Transition(Transition),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneItem {
    /// Registry name, e.g. `"intro"`.
    pub name: String,
    pub duration_frames: u64,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

impl TimelineItem {
    pub fn scene(name: impl Into<String>, duration_frames: u64) -> Self {
        Self::Scene(SceneItem {
            name: name.into(),
            duration_frames,
            params: serde_json::Value::Null,
        })
    }
}

impl CompositionConfig {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read composition config '{}'", path.display()))?;
        Self::from_json_str(&text).map_err(|e| {
            ReelError::serde(format!("parse composition config '{}': {e}", path.display()))
        })
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Instantiate scenes through `registry` and assemble a validated composition.
    pub fn build(&self, registry: &SceneRegistry) -> ReelResult<Composition> {
        let canvas = Canvas::new(self.width, self.height)?;
        self.fps.validate()?;

        let mut builder = TimelineBuilder::new();
        for item in &self.timeline {
            builder = match item {
                TimelineItem::Scene(s) => {
                    let scene = registry.create(&s.name, &s.params)?;
                    builder.scene(scene, s.duration_frames)
                }
                TimelineItem::Transition(t) => builder.transition(*t),
            };
        }
        let timeline = builder.build(self.fps)?;
        let duration = self.duration_frames.unwrap_or(timeline.total_frames());

        Composition::new(
            self.id.as_str(),
            self.fps,
            canvas,
            duration,
            self.theme.clone(),
            timeline,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
