//! System schedule: fixed execution order and stage planning.
//!
//! Systems run strictly one after another, in the order they were added.
//! [`Schedule::stages`] groups consecutive systems whose declared access does
//! not conflict: the plan a parallel executor would have to respect. It is
//! reported at startup; execution itself stays sequential.

use grove_component::{ComponentKind, QueryDescriptor};
use grove_system::{
    GameMode, SystemContext, SystemOutcome, damage_indicator, enemy_ai, explosion, movement,
    trample, wraparound,
};
use grove_world::Registry;

/// Signature every scheduled system is adapted to.
pub type SystemFn = fn(&mut Registry, &mut SystemContext<'_>) -> SystemOutcome;

/// A system with its name and declared data access.
#[derive(Debug, Clone)]
pub struct RegisteredSystem {
    /// The system name (e.g. `"movement"`).
    pub name: &'static str,
    /// Kinds the system reads and writes.
    pub access: QueryDescriptor,
    pub run: SystemFn,
}

/// A run of consecutive systems with no conflicts between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Indices into the schedule's system list.
    pub system_indices: Vec<usize>,
}

/// Ordered list of systems executed once per tick.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    systems: Vec<RegisteredSystem>,
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system. It runs after every system added before it.
    #[must_use]
    pub fn with(mut self, name: &'static str, access: QueryDescriptor, run: SystemFn) -> Self {
        self.systems.push(RegisteredSystem { name, access, run });
        self
    }

    /// The standard schedule for a game mode.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        use ComponentKind::*;

        match mode {
            GameMode::Trample => Schedule::new().with(
                "trample",
                QueryDescriptor::new()
                    .read(Player)
                    .read(Velocity)
                    .read(TreeType)
                    .write(Position),
                run_trample,
            ),
            GameMode::Scroller => Schedule::new()
                .with(
                    "movement",
                    QueryDescriptor::new().read(Velocity).write(Position),
                    run_movement,
                )
                .with(
                    "enemy_ai",
                    QueryDescriptor::new()
                        .read(Enemy)
                        .read(Position)
                        .write(Velocity)
                        .write(Ship),
                    run_enemy_ai,
                )
                .with(
                    "wraparound",
                    QueryDescriptor::new().read(Ship).read(Bullet).write(Position),
                    run_wraparound,
                )
                .with(
                    "damage_indicator",
                    QueryDescriptor::new()
                        .read(Velocity)
                        .write(DamageIndicator)
                        .write(Position)
                        .despawn(),
                    run_damage_indicator,
                )
                .with(
                    "explosion",
                    QueryDescriptor::new()
                        .write(Explosion)
                        .write(Renderable)
                        .despawn(),
                    run_explosion,
                ),
        }
    }

    /// System names in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name).collect()
    }

    /// Run every system once, in order.
    ///
    /// A system returning [`SystemOutcome::Halt`] ends the tick: the systems
    /// after it do not run.
    pub fn run(&self, registry: &mut Registry, ctx: &mut SystemContext<'_>) -> SystemOutcome {
        for system in &self.systems {
            if (system.run)(registry, ctx) == SystemOutcome::Halt {
                return SystemOutcome::Halt;
            }
        }
        SystemOutcome::Continue
    }

    /// Split the schedule into stages of consecutive, mutually
    /// non-conflicting systems.
    ///
    /// Only neighbours are merged, so running the stages in order (and the
    /// systems inside a stage in any order) preserves the sequential result.
    #[must_use]
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages: Vec<Stage> = Vec::new();

        for (idx, system) in self.systems.iter().enumerate() {
            let fits = stages.last().is_some_and(|stage| {
                stage
                    .system_indices
                    .iter()
                    .all(|&other| !system.access.conflicts_with(&self.systems[other].access))
            });

            match stages.last_mut() {
                Some(stage) if fits => stage.system_indices.push(idx),
                _ => stages.push(Stage {
                    system_indices: vec![idx],
                }),
            }
        }

        stages
    }
}

fn run_trample(registry: &mut Registry, ctx: &mut SystemContext<'_>) -> SystemOutcome {
    trample::trample_system(registry, &mut *ctx.sink).into()
}

fn run_movement(registry: &mut Registry, ctx: &mut SystemContext<'_>) -> SystemOutcome {
    movement::scrolling_movement_system(registry, ctx.delta_ms, ctx.config.scroll_bias());
    SystemOutcome::Continue
}

fn run_enemy_ai(registry: &mut Registry, ctx: &mut SystemContext<'_>) -> SystemOutcome {
    enemy_ai::enemy_ai_system(registry, ctx.config.enemy_speed);
    SystemOutcome::Continue
}

fn run_wraparound(registry: &mut Registry, ctx: &mut SystemContext<'_>) -> SystemOutcome {
    wraparound::wraparound_system(
        registry,
        ctx.config.bounds(),
        ctx.config.boundary_padding,
        ctx.config.ship_margin,
    );
    SystemOutcome::Continue
}

fn run_damage_indicator(registry: &mut Registry, ctx: &mut SystemContext<'_>) -> SystemOutcome {
    damage_indicator::damage_indicator_system(registry, ctx.delta_ms);
    SystemOutcome::Continue
}

fn run_explosion(registry: &mut Registry, ctx: &mut SystemContext<'_>) -> SystemOutcome {
    explosion::explosion_system(registry, ctx.delta_ms);
    SystemOutcome::Continue
}
