//! ECS stress demo
//!
//! Drives the entity runtime the way the full engine does, without a
//! renderer attached: registers the reference systems, allocates a large
//! entity population from concurrent worker threads, attaches randomized
//! components through the type-erased path, then tears half of it down
//! again. Run with `RUST_LOG=debug` for the registration chatter.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Instant;

use log::{info, warn};
use rand::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use scene_ecs::foundation::logging;
use scene_ecs::prelude::*;

const SCENE_FILE: &str = "scenes/demo.ron";

/// Demo failures worth aborting on
#[derive(Debug, Error)]
enum StressError {
    /// The allocator broke its uniqueness contract
    #[error("entity allocator issued duplicate or invalid ids")]
    DuplicateIds,

    /// A component attach was refused
    #[error("component attach refused for {kind}; system not registered?")]
    AttachRefused {
        /// Diagnostic name of the refused component kind
        kind: &'static str,
    },

    /// Scene manifest failure
    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Tunables, overridable through `stress.toml` in the working directory.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct StressConfig {
    threads: usize,
    entities_per_thread: usize,
    named_entities: usize,
    seed: u64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            threads: 16,
            entities_per_thread: 1024,
            named_entities: 16,
            seed: 42,
        }
    }
}

fn load_config() -> StressConfig {
    match fs::read_to_string("stress.toml") {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring invalid stress.toml: {err}");
                StressConfig::default()
            }
        },
        Err(_) => StressConfig::default(),
    }
}

fn main() -> Result<(), StressError> {
    logging::init();
    let config = load_config();
    info!(
        "stress run: {} threads x {} entities, seed {}",
        config.threads, config.entities_per_thread, config.seed
    );

    let mut orchestrator = Orchestrator::new();
    let transforms = TransformSystem::new(&mut orchestrator);
    orchestrator.create_system(transforms);
    let names = NameSystem::new(&mut orchestrator);
    orchestrator.create_system(names);

    let entities = allocate_concurrently(&orchestrator, &config);
    verify_distinct(&entities)?;

    attach_components(&mut orchestrator, &entities, &config)?;
    report(&orchestrator);

    if Path::new(SCENE_FILE).exists() {
        let spawned = SceneManifest::load(SCENE_FILE)?.instantiate(&mut orchestrator)?;
        info!("loaded {SCENE_FILE}: {} extra entities", spawned.len());
    }

    let midpoint = entities.len() / 2;
    let teardown_start = Instant::now();
    for &entity in &entities[..midpoint] {
        orchestrator.destroy_entity(entity);
    }
    info!(
        "destroyed {midpoint} entities in {:?}",
        teardown_start.elapsed()
    );
    report(&orchestrator);

    Ok(())
}

/// Allocate the whole population from worker threads sharing the
/// orchestrator. Entity allocation is the one orchestrator operation that
/// is safe to call concurrently.
fn allocate_concurrently(orchestrator: &Orchestrator, config: &StressConfig) -> Vec<Entity> {
    let start = Instant::now();
    let entities: Vec<Entity> = thread::scope(|scope| {
        let workers: Vec<_> = (0..config.threads)
            .map(|_| {
                let count = config.entities_per_thread;
                scope.spawn(move || {
                    (0..count)
                        .map(|_| orchestrator.create_entity())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("allocator thread panicked"))
            .collect()
    });
    info!(
        "allocated {} entities in {:?} across {} threads",
        entities.len(),
        start.elapsed(),
        config.threads
    );
    entities
}

fn verify_distinct(entities: &[Entity]) -> Result<(), StressError> {
    let mut ids: Vec<u64> = entities.iter().map(|entity| entity.id()).collect();
    ids.sort_unstable();
    let issued = ids.len();
    ids.dedup();
    if ids.len() != issued || ids.first() == Some(&0) {
        return Err(StressError::DuplicateIds);
    }
    Ok(())
}

/// Scatter randomized transforms over the population and name a handful of
/// entities, all through the orchestrator's type-erased creation path.
fn attach_components(
    orchestrator: &mut Orchestrator,
    entities: &[Entity],
    config: &StressConfig,
) -> Result<(), StressError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let start = Instant::now();

    for &entity in entities {
        let position = Vec3::new(
            rng.gen_range(-256.0..256.0),
            rng.gen_range(-256.0..256.0),
            rng.gen_range(-256.0..256.0),
        );
        let transform =
            Transform::from_position(position).with_uniform_scale(rng.gen_range(0.1..3.0));
        let component = TransformComponent::new(entity, transform);
        if !orchestrator.create_component(entity, TypeKey::of::<TransformComponent>(), &component) {
            return Err(StressError::AttachRefused { kind: "transform" });
        }
    }

    for (index, &entity) in entities.iter().take(config.named_entities).enumerate() {
        let component = NameComponent::new(entity, format!("stress-object-{index}"));
        if !orchestrator.create_component(entity, TypeKey::of::<NameComponent>(), &component) {
            return Err(StressError::AttachRefused { kind: "name" });
        }
    }

    info!("attached components in {:?}", start.elapsed());
    Ok(())
}

fn report(orchestrator: &Orchestrator) {
    let transforms = orchestrator
        .system::<TransformSystem>()
        .map_or(0, TransformSystem::len);
    let names = orchestrator.system::<NameSystem>().map_or(0, NameSystem::len);
    info!(
        "entities issued: {}, transforms held: {}, names held: {}",
        orchestrator.entities_issued(),
        transforms,
        names
    );
}
