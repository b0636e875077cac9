//! The tick loop.
//!
//! Each tick:
//!
//! 1. Run the schedule over the registry.
//! 2. Hand a [`FrameSnapshot`] to the renderer.
//! 3. If a system halted, log `GAME OVER!` and refuse further ticks.
//!
//! [`TickLoop::run`] chains ticks with a fixed delay and, in trample mode,
//! prints a separator between turns.

use std::time::Duration;

use grove_system::{Emphasis, GameConfig, GameMode, LogSink, SystemContext, SystemOutcome};
use grove_world::Registry;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use crate::render::{FrameSnapshot, NullRenderer, Renderer};
use crate::scheduler::Schedule;

const NEXT_TURN: &str = "--------------- Next Turn ---------------";
const GAME_OVER: &str = "GAME OVER!";

/// Whether the loop can keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The game has ended. Every later tick is refused.
    Halted,
}

/// Owns the world and drives the schedule over it.
pub struct TickLoop<S: LogSink> {
    /// Ticks executed so far; the first tick is 1.
    tick_id: u64,
    config: GameConfig,
    registry: Registry,
    schedule: Schedule,
    sink: S,
    renderer: Box<dyn Renderer>,
    halted: bool,
}

impl<S: LogSink> TickLoop<S> {
    /// Build a loop with the standard schedule for `config.mode` and no
    /// renderer.
    pub fn new(config: GameConfig, registry: Registry, sink: S) -> Self {
        let schedule = Schedule::for_mode(config.mode);
        let stages = schedule.stages();
        info!(
            mode = ?config.mode,
            systems = ?schedule.names(),
            stage_count = stages.len(),
            "schedule ready"
        );
        for (idx, stage) in stages.iter().enumerate() {
            debug!(stage = idx, systems = ?stage.system_indices, "stage");
        }

        Self {
            tick_id: 0,
            config,
            registry,
            schedule,
            sink,
            renderer: Box::new(NullRenderer),
            halted: false,
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one tick with the given elapsed time.
    ///
    /// Once the loop has halted this does nothing and returns
    /// [`TickOutcome::Halted`].
    pub fn step(&mut self, delta_ms: f32) -> TickOutcome {
        if self.halted {
            return TickOutcome::Halted;
        }

        self.tick_id += 1;
        let outcome = {
            let mut ctx = SystemContext::new(self.tick_id, delta_ms, &self.config, &mut self.sink);
            self.schedule.run(&mut self.registry, &mut ctx)
        };

        let frame = FrameSnapshot::capture(self.tick_id, &self.registry);
        if let Err(err) = self.renderer.render(&frame) {
            warn!(tick_id = self.tick_id, error = %err, "render failed, continuing");
        }

        debug!(tick_id = self.tick_id, delta_ms, ?outcome, "tick done");

        match outcome {
            SystemOutcome::Continue => TickOutcome::Continue,
            SystemOutcome::Halt => {
                self.sink.log(GAME_OVER, Emphasis::GameOver);
                self.halted = true;
                info!(tick_id = self.tick_id, "simulation halted");
                TickOutcome::Halted
            }
        }
    }

    /// Tick until the game halts or `max_ticks` ticks have run.
    ///
    /// The first tick runs immediately. Later ticks start one interval
    /// after the previous one started. Returns the number of ticks run.
    pub async fn run(&mut self) -> u64 {
        let interval = Duration::from_millis(self.config.interval_ms());
        let max_ticks = self.config.max_ticks;
        let mut ticks = 0u64;
        let mut previous: Option<Instant> = None;

        info!(
            mode = ?self.config.mode,
            interval_ms = interval.as_millis() as u64,
            max_ticks,
            "starting tick loop"
        );

        while !self.halted && (max_ticks == 0 || ticks < max_ticks) {
            let start = Instant::now();
            let delta_ms = match previous {
                Some(prev) => (start - prev).as_secs_f32() * 1000.0,
                None => interval.as_secs_f32() * 1000.0,
            };
            previous = Some(start);

            if self.tick_id > 0 && self.config.mode == GameMode::Trample {
                self.sink.log(NEXT_TURN, Emphasis::NextTurn);
            }

            let outcome = self.step(delta_ms);
            ticks += 1;
            if outcome == TickOutcome::Halted || ticks == max_ticks {
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < interval {
                sleep(interval - elapsed).await;
            } else {
                warn!(
                    tick_id = self.tick_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = interval.as_millis() as u64,
                    "tick exceeded time budget"
                );
            }
        }

        info!(ticks, tick_id = self.tick_id, halted = self.halted, "tick loop complete");
        ticks
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use grove_system::MemorySink;
    use grove_world::{
        Explosion, Player, Position, Renderable, TreeSize, TreeSpecies, TreeType, Velocity,
    };

    use super::*;
    use crate::render::RenderError;
    use crate::scenario;

    fn trample_loop(registry: Registry) -> TickLoop<MemorySink> {
        TickLoop::new(GameConfig::default(), registry, MemorySink::new())
    }

    struct FailingRenderer {
        calls: Arc<Mutex<u32>>,
    }

    impl Renderer for FailingRenderer {
        fn render(&mut self, _frame: &FrameSnapshot) -> Result<(), RenderError> {
            *self.calls.lock().unwrap() += 1;
            Err(RenderError::Unavailable("no display".to_string()))
        }
    }

    struct CountingRenderer {
        ticks: Arc<Mutex<Vec<u64>>>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
            self.ticks.lock().unwrap().push(frame.tick);
            Ok(())
        }
    }

    #[test]
    fn test_step_advances_counter() {
        let mut tick_loop = trample_loop(Registry::new());
        assert_eq!(tick_loop.tick_id(), 0);
        assert_eq!(tick_loop.step(16.0), TickOutcome::Continue);
        assert_eq!(tick_loop.step(16.0), TickOutcome::Continue);
        assert_eq!(tick_loop.tick_id(), 2);
    }

    #[test]
    fn test_sapling_then_mature_tree_halts() {
        let mut r = Registry::new();
        let player = r.spawn_with([
            Player::new("Ada", "Tester").into(),
            Position::new(0.0, 0.0).into(),
            Velocity::new(1.0, 1.0).into(),
        ]);
        r.spawn_with([
            TreeType::new(TreeSpecies::Birch, TreeSize::Sapling).into(),
            Position::new(1.0, 1.0).into(),
        ]);
        r.spawn_with([
            TreeType::new(TreeSpecies::Oak, TreeSize::Mature).into(),
            Position::new(2.0, 2.0).into(),
        ]);
        let mut tick_loop = trample_loop(r);

        assert_eq!(tick_loop.step(0.0), TickOutcome::Continue);
        assert_eq!(tick_loop.sink().messages_with(Emphasis::Event).len(), 1);

        assert_eq!(tick_loop.step(0.0), TickOutcome::Halted);
        assert!(tick_loop.is_halted());
        assert_eq!(tick_loop.sink().messages_with(Emphasis::GameOver), vec![GAME_OVER]);

        // Halted loops do not tick again.
        assert_eq!(tick_loop.step(0.0), TickOutcome::Halted);
        assert_eq!(tick_loop.tick_id(), 2);
        assert_eq!(
            tick_loop.registry().get::<Position>(player),
            Some(&Position::new(2.0, 2.0))
        );
        assert_eq!(tick_loop.sink().messages_with(Emphasis::GameOver).len(), 1);
    }

    #[test]
    fn test_render_failure_is_not_fatal() {
        let calls = Arc::new(Mutex::new(0));
        let mut tick_loop = trample_loop(Registry::new()).with_renderer(FailingRenderer {
            calls: Arc::clone(&calls),
        });

        assert_eq!(tick_loop.step(16.0), TickOutcome::Continue);
        assert_eq!(tick_loop.step(16.0), TickOutcome::Continue);
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_scroller_step_expires_explosion() {
        let mut r = Registry::new();
        let e = r.spawn_with([
            Explosion::new(10.0, 100.0).into(),
            Renderable::new(0.0, 0).into(),
        ]);
        let config = GameConfig {
            mode: GameMode::Scroller,
            ..GameConfig::default()
        };
        let mut tick_loop = TickLoop::new(config, r, MemorySink::new());

        assert_eq!(tick_loop.step(100.0), TickOutcome::Continue);
        assert!(!tick_loop.registry().contains_entity(e));
    }

    #[tokio::test(start_paused = true)]
    async fn test_trample_demo_runs_to_game_over() {
        let mut r = Registry::new();
        scenario::trample_demo(&mut r);
        let frames = Arc::new(Mutex::new(Vec::new()));
        let mut tick_loop = trample_loop(r).with_renderer(CountingRenderer {
            ticks: Arc::clone(&frames),
        });

        let ticks = tick_loop.run().await;

        // El Donaldo Trumpet reaches the oak at (15, 30) on turn 15.
        assert_eq!(ticks, 15);
        assert!(tick_loop.is_halted());
        let sink = tick_loop.sink();
        assert_eq!(
            sink.messages_with(Emphasis::Fatal),
            vec!["El Donaldo Trumpet moved to (15, 30) and was killed when hitting a huge Oak tree"]
        );
        assert_eq!(
            sink.messages_with(Emphasis::Event),
            vec![
                "El Donaldo Trumpet moved to (8, 16) and trampled a small Birch sapling. What a terrible person!",
                "Vancy The Village Idiot moved to (12, 13) and trampled a small Pine sapling. What a terrible person!",
            ]
        );
        assert_eq!(sink.messages_with(Emphasis::NextTurn).len(), 14);
        assert_eq!(
            sink.entries().last().map(|e| e.emphasis),
            Some(Emphasis::GameOver)
        );
        assert_eq!(*frames.lock().unwrap(), (1..=15).collect::<Vec<u64>>());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_limited_ticks() {
        let config = GameConfig {
            max_ticks: 5,
            tick_interval_ms: 1,
            ..GameConfig::default()
        };
        let mut tick_loop = TickLoop::new(config, Registry::new(), MemorySink::new());

        assert_eq!(tick_loop.run().await, 5);
        assert_eq!(tick_loop.tick_id(), 5);
        assert!(!tick_loop.is_halted());
        assert_eq!(tick_loop.sink().messages_with(Emphasis::NextTurn).len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroller_run_moves_enemies() {
        let config = GameConfig {
            mode: GameMode::Scroller,
            max_ticks: 3,
            ..GameConfig::default()
        };
        let mut r = Registry::new();
        scenario::scroller_demo(&mut r, &config);
        let enemy = r.query_ids::<(grove_world::Enemy,)>()[0];
        let before = *r.get::<Position>(enemy).unwrap();
        let mut tick_loop = TickLoop::new(config, r, MemorySink::new());

        assert_eq!(tick_loop.run().await, 3);

        let after = *tick_loop.registry().get::<Position>(enemy).unwrap();
        assert_ne!(before, after);
        assert!(tick_loop.sink().messages_with(Emphasis::NextTurn).is_empty());
    }
}
