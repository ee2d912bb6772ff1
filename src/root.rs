//! Composition discovery: every video the crate knows about, keyed by id.

use std::collections::BTreeMap;

use crate::{
    composition::Composition,
    config::{CompositionConfig, TimelineItem},
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
    scene::{
        SceneRegistry, features::Features, intro::Intro, outro::Outro, problem::Problem,
        solution::Solution,
    },
    theme::Theme,
    timeline::transition::{FromEdge, Transition},
};

pub const PROMO_ID: &str = "DailyAiNewsPromo";
/// Older name of the promo, still accepted by [`Root::get`] and [`Root::build`].
pub const PROMO_ALIAS: &str = "MyComposition";

/// The promo: five scenes, four 10-frame transitions, 320 frames at 30 fps, 1280x720.
pub fn promo_config() -> CompositionConfig {
    CompositionConfig {
        id: PROMO_ID.to_string(),
        fps: Fps { num: 30, den: 1 },
        width: 1280,
        height: 720,
        duration_frames: Some(320),
        theme: Theme::default(),
        timeline: vec![
            TimelineItem::scene(Intro::NAME, 60),
            TimelineItem::Transition(Transition::slide(FromEdge::FromRight, 10)),
            TimelineItem::scene(Problem::NAME, 60),
            TimelineItem::Transition(Transition::slide(FromEdge::FromBottom, 10)),
            TimelineItem::scene(Solution::NAME, 60),
            TimelineItem::Transition(Transition::fade(10)),
            TimelineItem::scene(Features::NAME, 90),
            TimelineItem::Transition(Transition::slide(FromEdge::FromLeft, 10)),
            TimelineItem::scene(Outro::NAME, 90),
        ],
    }
}

pub fn promo() -> ReelResult<Composition> {
    promo_config().build(&SceneRegistry::with_builtin())
}

/// Registered compositions plus the scene registry used to build them.
#[derive(Debug)]
pub struct Root {
    configs: BTreeMap<String, CompositionConfig>,
    aliases: BTreeMap<String, String>,
    scenes: SceneRegistry,
}

impl Default for Root {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Root {
    pub fn new(scenes: SceneRegistry) -> Self {
        Self {
            configs: BTreeMap::new(),
            aliases: BTreeMap::new(),
            scenes,
        }
    }

    /// Built-in scenes and the promo composition.
    pub fn with_defaults() -> Self {
        let mut configs = BTreeMap::new();
        configs.insert(PROMO_ID.to_string(), promo_config());
        let mut aliases = BTreeMap::new();
        aliases.insert(PROMO_ALIAS.to_string(), PROMO_ID.to_string());
        Self {
            configs,
            aliases,
            scenes: SceneRegistry::with_builtin(),
        }
    }

    /// Add a composition. The config is built once to reject invalid ones early.
    pub fn register(&mut self, config: CompositionConfig) -> ReelResult<()> {
        if self.configs.contains_key(&config.id) || self.aliases.contains_key(&config.id) {
            return Err(ReelError::validation(format!(
                "duplicate composition id '{}'",
                config.id
            )));
        }
        config.build(&self.scenes)?;
        tracing::debug!(id = %config.id, "composition registered");
        self.configs.insert(config.id.clone(), config);
        Ok(())
    }

    /// Make `alias` another name for the registered composition `id`.
    pub fn alias(&mut self, alias: impl Into<String>, id: &str) -> ReelResult<()> {
        let alias = alias.into();
        if !self.configs.contains_key(id) {
            return Err(ReelError::validation(format!(
                "alias '{alias}' points at unknown composition '{id}'"
            )));
        }
        if self.configs.contains_key(&alias) || self.aliases.contains_key(&alias) {
            return Err(ReelError::validation(format!("name '{alias}' is already taken")));
        }
        self.aliases.insert(alias, id.to_string());
        Ok(())
    }

    /// Canonical ids, without aliases.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn get(&self, id: &str) -> Option<&CompositionConfig> {
        let id = self.aliases.get(id).map_or(id, String::as_str);
        self.configs.get(id)
    }

    pub fn scenes(&self) -> &SceneRegistry {
        &self.scenes
    }

    pub fn build(&self, id: &str) -> ReelResult<Composition> {
        let config = self.get(id).ok_or_else(|| {
            let known = self.ids().collect::<Vec<_>>().join(", ");
            ReelError::validation(format!("unknown composition '{id}' (known: {known})"))
        })?;
        config.build(&self.scenes)
    }
}

#[cfg(test)]
#[path = "../tests/unit/root.rs"]
mod tests;
