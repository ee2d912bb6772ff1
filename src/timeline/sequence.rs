//! Scene sequencing with overlapping transitions.
//!
//! Scene `i` starts at `sum(duration[..i]) - sum(transition[..i])`: each transition borrows its
//! frames from the tail of the scene before it and the head of the scene after it. Cuts (no
//! transition) borrow nothing.

use std::{fmt, sync::Arc};

use crate::{
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    scene::Scene,
    timeline::transition::{Presentation, ResolvedTransition, Transition},
};

#[derive(Clone)]
enum Item {
    Scene { scene: Arc<dyn Scene>, duration: u64 },
    Transition(Transition),
}

/// Ordered scene / transition list, validated by [`TimelineBuilder::build`].
#[derive(Clone, Default)]
pub struct TimelineBuilder {
    items: Vec<Item>,
}

impl fmt::Debug for TimelineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineBuilder")
            .field("items", &self.items.len())
            .finish()
    }
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(mut self, scene: Arc<dyn Scene>, duration_frames: u64) -> Self {
        self.items.push(Item::Scene {
            scene,
            duration: duration_frames,
        });
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.items.push(Item::Transition(transition));
        self
    }

    /// Validate the sequence and lay it out for `fps` (spring transitions depend on it).
    pub fn build(self, fps: Fps) -> ReelResult<Timeline> {
        fps.validate()?;
        if self.items.is_empty() {
            return Err(ReelError::validation("timeline must contain at least one scene"));
        }

        let mut scenes: Vec<(Arc<dyn Scene>, u64)> = Vec::new();
        let mut joins: Vec<Option<ResolvedTransition>> = Vec::new();
        let mut pending: Option<ResolvedTransition> = None;

        for (pos, item) in self.items.into_iter().enumerate() {
            match item {
                Item::Scene { scene, duration } => {
                    if duration == 0 {
                        return Err(ReelError::validation(format!(
                            "scene {} ('{}') duration must be > 0",
                            scenes.len(),
                            scene.name()
                        )));
                    }
                    if !scenes.is_empty() {
                        joins.push(pending.take());
                    }
                    scenes.push((scene, duration));
                }
                Item::Transition(t) => {
                    if scenes.is_empty() {
                        return Err(ReelError::validation(
                            "timeline must start with a scene, not a transition",
                        ));
                    }
                    if pending.is_some() {
                        return Err(ReelError::validation(format!(
                            "timeline item {pos}: two transitions in a row"
                        )));
                    }
                    pending = Some(t.resolve(fps)?);
                }
            }
        }
        if pending.is_some() {
            return Err(ReelError::validation(
                "timeline must end with a scene, not a transition",
            ));
        }

        let overlap = |j: usize| joins.get(j).copied().flatten().map_or(0, |t| t.duration());
        for (i, (scene, duration)) in scenes.iter().enumerate() {
            let incoming = if i == 0 { 0 } else { overlap(i - 1) };
            let outgoing = overlap(i);
            if incoming > *duration || outgoing > *duration {
                return Err(ReelError::validation(format!(
                    "transition longer than scene {i} ('{}', {duration} frames)",
                    scene.name()
                )));
            }
            let both = incoming.checked_add(outgoing).ok_or_else(|| {
                ReelError::validation(format!("transitions around scene {i} overflow"))
            })?;
            if both > *duration {
                return Err(ReelError::validation(format!(
                    "transitions around scene {i} ('{}') overlap: {incoming} in + {outgoing} out > {duration} frames",
                    scene.name()
                )));
            }
        }

        let mut entries = Vec::with_capacity(scenes.len());
        let mut start = 0u64;
        for (i, (scene, duration)) in scenes.into_iter().enumerate() {
            if i > 0 {
                start -= overlap(i - 1);
            }
            entries.push(SceneEntry {
                scene,
                range: FrameRange::with_len(FrameIndex(start), duration),
            });
            start = start.checked_add(duration).ok_or_else(|| {
                ReelError::validation(format!(
                    "timeline length overflows at scene {i} ({duration} frames)"
                ))
            })?;
        }
        let total_frames = start;

        tracing::debug!(
            scenes = entries.len(),
            transitions = joins.iter().flatten().count(),
            total_frames,
            "timeline laid out"
        );

        Ok(Timeline {
            entries,
            joins,
            total_frames,
        })
    }
}

/// A scene placed on the global timeline.
#[derive(Clone)]
pub struct SceneEntry {
    pub scene: Arc<dyn Scene>,
    /// Global frames during which the scene is visible.
    pub range: FrameRange,
}

impl fmt::Debug for SceneEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneEntry")
            .field("scene", &self.scene.name())
            .field("range", &self.range)
            .finish()
    }
}

impl SceneEntry {
    pub fn duration(&self) -> u64 {
        self.range.len_frames()
    }
}

/// Overlap window of one transition, for inspection.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransitionWindow {
    /// Index of the exiting scene; the entering one is `from + 1`.
    pub from: usize,
    pub range: FrameRange,
    pub presentation: Presentation,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    entries: Vec<SceneEntry>,
    /// `joins[i]` sits between scene `i` and `i + 1`; `None` is a hard cut.
    joins: Vec<Option<ResolvedTransition>>,
    total_frames: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Presence {
    Solo,
    Exiting { join: usize, progress: f64 },
    Entering { join: usize, progress: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveScene {
    pub index: usize,
    pub local_frame: FrameIndex,
    pub presence: Presence,
}

/// Scenes visible at one global frame, exiting scene first.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    pub frame: FrameIndex,
    pub requested: FrameIndex,
    pub active: Vec<ActiveScene>,
}

impl Timeline {
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn scenes(&self) -> &[SceneEntry] {
        &self.entries
    }

    /// Transition after scene `index`, if any.
    pub fn transition_after(&self, index: usize) -> Option<&ResolvedTransition> {
        self.joins.get(index).and_then(Option::as_ref)
    }

    pub fn transition_windows(&self) -> Vec<TransitionWindow> {
        self.joins
            .iter()
            .enumerate()
            .filter_map(|(i, join)| {
                let t = join.as_ref()?;
                let start = self.entries[i + 1].range.start;
                Some(TransitionWindow {
                    from: i,
                    range: FrameRange::with_len(start, t.duration()),
                    presentation: t.presentation(),
                })
            })
            .collect()
    }

    /// Active scene(s) at `frame`. Frames past the end clamp to the last frame.
    pub fn resolve(&self, frame: FrameIndex) -> FrameState {
        let last = self.total_frames.saturating_sub(1);
        let f = frame.0.min(last);
        if f != frame.0 {
            tracing::trace!(requested = frame.0, clamped = f, "frame clamped to timeline end");
        }

        // Latest scene starting at or before `f`; scene 0 starts at 0 so this is at least 1.
        let idx = self
            .entries
            .partition_point(|e| e.range.start.0 <= f)
            .saturating_sub(1);
        let current = &self.entries[idx];
        let local = FrameIndex(f - current.range.start.0);

        let mut active = Vec::with_capacity(2);
        match idx.checked_sub(1) {
            Some(prev) if self.entries[prev].range.contains(FrameIndex(f)) => {
                let previous = &self.entries[prev];
                let progress = self
                    .transition_after(prev)
                    .map_or(1.0, |t| t.progress(local.0));
                active.push(ActiveScene {
                    index: prev,
                    local_frame: FrameIndex(f - previous.range.start.0),
                    presence: Presence::Exiting {
                        join: prev,
                        progress,
                    },
                });
                active.push(ActiveScene {
                    index: idx,
                    local_frame: local,
                    presence: Presence::Entering {
                        join: prev,
                        progress,
                    },
                });
            }
            _ => active.push(ActiveScene {
                index: idx,
                local_frame: local,
                presence: Presence::Solo,
            }),
        }

        FrameState {
            frame: FrameIndex(f),
            requested: frame,
            active,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
