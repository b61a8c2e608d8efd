//! Scene manifests
//!
//! Declarative scene descriptions in RON. A manifest lists entities and the
//! components to attach to each; instantiation allocates real entities and
//! routes every component through the orchestrator's type-erased creation
//! path, exactly like any other generic caller of the core protocol.

use std::any::Any;
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::ecs::components::{NameComponent, TransformComponent};
use crate::ecs::{Entity, Orchestrator, TypeKey};
use crate::foundation::math::{Quat, Transform, Vec3};

/// Scene loading errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The manifest declares a component kind no registered system accepts
    #[error("no system registered for component kind {kind}")]
    UnhandledKind {
        /// Diagnostic name of the unhandled component kind
        kind: String,
    },

    /// The routed system refused the component (e.g. a name collision)
    #[error("system rejected component kind {kind} for {entity}")]
    Rejected {
        /// Diagnostic name of the rejected component kind
        kind: String,
        /// The entity the component was being attached to
        entity: Entity,
    },
}

/// Declarative description of a scene.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneManifest {
    /// Entities to spawn, in declaration order.
    pub entities: Vec<EntityDecl>,
}

/// One entity in a manifest; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityDecl {
    /// Unique name to attach, if any.
    #[serde(default)]
    pub name: Option<String>,

    /// Transform to attach, if any.
    #[serde(default)]
    pub transform: Option<TransformDecl>,
}

/// Declarative transform: position, Euler rotation (radians), scale.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformDecl {
    /// World space position
    #[serde(default)]
    pub position: [f32; 3],

    /// Roll, pitch, yaw in radians
    #[serde(default)]
    pub rotation: [f32; 3],

    /// Scale factors
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl TransformDecl {
    /// Build the runtime transform this declaration describes.
    pub fn to_transform(&self) -> Transform {
        Transform {
            position: Vec3::new(self.position[0], self.position[1], self.position[2]),
            rotation: Quat::from_euler_angles(self.rotation[0], self.rotation[1], self.rotation[2]),
            scale: Vec3::new(self.scale[0], self.scale[1], self.scale[2]),
        }
    }
}

impl SceneManifest {
    /// Parse a manifest from RON source.
    pub fn parse(source: &str) -> Result<Self, SceneError> {
        Ok(ron::from_str(source)?)
    }

    /// Load and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Spawn every declared entity into `orchestrator`.
    ///
    /// Components are attached through
    /// [`Orchestrator::create_component`] only, so the manifest can
    /// describe any component kind a registered system accepts. Returns
    /// the spawned entities in declaration order.
    ///
    /// Entities spawned before an error are left in place; the §5 rule
    /// that a partially constructed scene is observable applies here too.
    pub fn instantiate(&self, orchestrator: &mut Orchestrator) -> Result<Vec<Entity>, SceneError> {
        let mut spawned = Vec::with_capacity(self.entities.len());
        for decl in &self.entities {
            let entity = orchestrator.create_entity();
            if let Some(transform) = &decl.transform {
                let component = TransformComponent::new(entity, transform.to_transform());
                attach(
                    orchestrator,
                    entity,
                    TypeKey::of::<TransformComponent>(),
                    &component,
                )?;
            }
            if let Some(name) = &decl.name {
                let component = NameComponent::new(entity, name.clone());
                attach(
                    orchestrator,
                    entity,
                    TypeKey::of::<NameComponent>(),
                    &component,
                )?;
            }
            spawned.push(entity);
        }
        info!("instantiated {} entities from manifest", spawned.len());
        Ok(spawned)
    }
}

fn attach(
    orchestrator: &mut Orchestrator,
    entity: Entity,
    kind: TypeKey,
    data: &dyn Any,
) -> Result<(), SceneError> {
    if orchestrator.create_component(entity, kind, data) {
        return Ok(());
    }
    if orchestrator.system_for_kind(kind).is_none() {
        Err(SceneError::UnhandledKind {
            kind: kind.name().to_owned(),
        })
    } else {
        Err(SceneError::Rejected {
            kind: kind.name().to_owned(),
            entity,
        })
    }
}
