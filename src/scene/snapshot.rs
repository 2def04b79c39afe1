use std::path::Path;

use egui::{Color32, Pos2, Vec2};

use super::actor::{Actor, ActorId, ActorKind};
use super::draggable::Draggable;
use super::drop_target::DropTarget;
use super::{Scene, SceneOptions};

pub const SCENE_SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug)]
pub enum SnapshotError {
    UnsupportedVersion { found: u32, expected: u32 },
    /// An id shows up twice, or the z-order/registry names an actor that is not in the snapshot.
    Inconsistent(String),
    RonSerialize(ron::Error),
    RonDeserialize(ron::error::SpannedError),
    Io(std::io::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "unsupported scene snapshot version: {found} (expected {expected})"
                )
            }
            Self::Inconsistent(what) => write!(f, "inconsistent scene snapshot: {what}"),
            Self::RonSerialize(err) => write!(f, "ron serialize error: {err}"),
            Self::RonDeserialize(err) => write!(f, "ron deserialize error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedVersion { .. } | Self::Inconsistent(_) => None,
            Self::RonSerialize(err) => Some(err),
            Self::RonDeserialize(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for SnapshotError {
    fn from(err: ron::Error) -> Self {
        Self::RonSerialize(err)
    }
}

impl From<ron::error::SpannedError> for SnapshotError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonDeserialize(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ActorKindSnapshot {
    Plain,
    Draggable { draggable: bool },
    DropTarget { targetable: bool },
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ActorSnapshot {
    pub id: ActorId,
    pub kind: ActorKindSnapshot,
    pub position: Pos2,
    pub size: Vec2,
    pub label: Option<String>,
    pub fill: Color32,
}

/// The layout of a scene: actors, their flags, z-order and drop-target registry order.
///
/// Drags in progress, running animations and past drop results are not part of it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SceneSnapshot {
    pub version: u32,
    pub actors: Vec<ActorSnapshot>,
    /// Back to front.
    pub z_order: Vec<ActorId>,
    pub drop_targets: Vec<ActorId>,
    pub next_actor_serial: u64,
}

fn pretty_ron_config() -> ron::ser::PrettyConfig {
    ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_owned())
}

impl SceneSnapshot {
    /// # Errors
    /// [`SnapshotError::RonSerialize`] if RON serialization fails.
    pub fn to_ron_string(&self) -> Result<String, SnapshotError> {
        Ok(ron::ser::to_string_pretty(self, pretty_ron_config())?)
    }

    /// # Errors
    /// [`SnapshotError::RonDeserialize`] if `ron_str` is not a valid snapshot.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, SnapshotError> {
        Ok(ron::from_str(ron_str)?)
    }
}

impl Scene {
    pub fn snapshot(&self) -> SceneSnapshot {
        let actors = self
            .actors
            .iter()
            .map(|(&id, a)| ActorSnapshot {
                id,
                kind: match &a.kind {
                    ActorKind::Plain => ActorKindSnapshot::Plain,
                    ActorKind::Draggable(d) => ActorKindSnapshot::Draggable {
                        draggable: d.draggable,
                    },
                    ActorKind::DropTarget(t) => ActorKindSnapshot::DropTarget {
                        targetable: t.targetable,
                    },
                },
                position: a.position,
                size: a.size,
                label: a.label.clone(),
                fill: a.fill,
            })
            .collect();

        SceneSnapshot {
            version: SCENE_SNAPSHOT_VERSION,
            actors,
            z_order: self.z_order.clone(),
            drop_targets: self.drop_targets.clone(),
            next_actor_serial: self.next_actor_serial,
        }
    }

    /// Rebuild a scene from a snapshot. Handles keep their values.
    ///
    /// # Errors
    /// [`SnapshotError::UnsupportedVersion`] for a snapshot of another version, and
    /// [`SnapshotError::Inconsistent`] if an id is repeated in the actors, the z-order or the
    /// registry, or if those lists name an actor that is missing or of the wrong kind.
    pub fn from_snapshot(
        snapshot: SceneSnapshot,
        options: SceneOptions,
    ) -> Result<Self, SnapshotError> {
        if snapshot.version != SCENE_SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                expected: SCENE_SNAPSHOT_VERSION,
            });
        }

        let mut scene = Self::new(options);
        let mut max_serial = 0;
        for actor in snapshot.actors {
            let kind = match actor.kind {
                ActorKindSnapshot::Plain => ActorKind::Plain,
                ActorKindSnapshot::Draggable { draggable } => ActorKind::Draggable(Draggable {
                    draggable,
                    ..Default::default()
                }),
                ActorKindSnapshot::DropTarget { targetable } => {
                    ActorKind::DropTarget(DropTarget { targetable })
                }
            };
            let mut restored = Actor::new(actor.position, actor.size, kind);
            restored.label = actor.label;
            restored.fill = actor.fill;
            max_serial = max_serial.max(actor.id.as_u64());
            if scene.actors.insert(actor.id, restored).is_some() {
                return Err(SnapshotError::Inconsistent(format!(
                    "duplicate actor id {}",
                    actor.id.as_u64()
                )));
            }
        }

        unique_ids("z-order", &snapshot.z_order)?;
        unique_ids("registry", &snapshot.drop_targets)?;
        for &id in &snapshot.z_order {
            if !scene.actors.contains_key(&id) {
                return Err(SnapshotError::Inconsistent(format!(
                    "z-order names unknown actor {}",
                    id.as_u64()
                )));
            }
        }
        for &id in &snapshot.drop_targets {
            if scene.actors.get(&id).and_then(Actor::as_drop_target).is_none() {
                return Err(SnapshotError::Inconsistent(format!(
                    "registry names {} which is not a drop target",
                    id.as_u64()
                )));
            }
        }

        scene.z_order = snapshot.z_order;
        scene.drop_targets = snapshot.drop_targets;
        // Actors missing from the ordering lists go on top / at the end, in id order.
        let missing_z: Vec<ActorId> = scene
            .actors
            .keys()
            .copied()
            .filter(|id| !scene.z_order.contains(id))
            .collect();
        scene.z_order.extend(missing_z);
        let missing_targets: Vec<ActorId> = scene
            .actors
            .iter()
            .filter(|(id, a)| a.as_drop_target().is_some() && !scene.drop_targets.contains(id))
            .map(|(&id, _)| id)
            .collect();
        scene.drop_targets.extend(missing_targets);

        scene.next_actor_serial = snapshot.next_actor_serial.max(max_serial + 1);
        Ok(scene)
    }

    /// Write the scene's snapshot as pretty RON to `path`.
    ///
    /// # Errors
    /// Fails if serialization or the file write fails.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let ron = self.snapshot().to_ron_string()?;
        std::fs::write(path, ron)?;
        Ok(())
    }

    /// Read a RON snapshot from `path` and rebuild the scene from it.
    ///
    /// # Errors
    /// Fails if the file cannot be read, is not a valid snapshot, or is rejected by
    /// [`Scene::from_snapshot`].
    pub fn load_from_path(
        path: impl AsRef<Path>,
        options: SceneOptions,
    ) -> Result<Self, SnapshotError> {
        let ron = std::fs::read_to_string(path)?;
        Self::from_snapshot(SceneSnapshot::from_ron_str(&ron)?, options)
    }
}

fn unique_ids(list: &str, ids: &[ActorId]) -> Result<(), SnapshotError> {
    let mut seen = ahash::HashSet::default();
    match ids.iter().find(|id| !seen.insert(**id)) {
        Some(id) => Err(SnapshotError::Inconsistent(format!(
            "{list} names actor {} twice",
            id.as_u64()
        ))),
        None => Ok(()),
    }
}
