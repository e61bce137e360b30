//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player, the seeded RNG
//! and every timer. Intents are applied synchronously through `apply_intent`;
//! time moves only through `tick`/`advance`. Completely headless, enabling
//! deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use tesseract_core::commands::PlayerIntent;
use tesseract_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, RELOAD_MS};
use tesseract_core::enums::{GamePhase, TimeWarp};
use tesseract_core::events::SimEvent;
use tesseract_core::player::Player;
use tesseract_core::state::GameStateSnapshot;
use tesseract_core::types::{SimClock, ViewPoint};

use crate::config::{ConfigError, SimConfig};
use crate::controls::DimensionControls;
use crate::effects::TimedEffects;
use crate::systems;
use crate::systems::combat::FireOutcome;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::wave_manager::WaveState;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    clock: SimClock,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Player,
    aim: ViewPoint,
    controls: DimensionControls,
    effects: TimedEffects,
    wave: WaveState,
    next_enemy_id: u32,
    next_projectile_id: u32,
    /// Host time not yet consumed by whole ticks.
    accumulator_ms: f64,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine in the menu phase.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            clock: SimClock::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::new(config.player_max_health, config.player_max_ammo),
            aim: ViewPoint::center(),
            controls: DimensionControls::default(),
            effects: TimedEffects::default(),
            wave: WaveState::default(),
            next_enemy_id: 0,
            next_projectile_id: 0,
            accumulator_ms: 0.0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Apply a player intent immediately. Intents that are invalid in the
    /// current phase or state are silent no-ops.
    pub fn apply_intent(&mut self, intent: PlayerIntent) {
        match intent {
            PlayerIntent::StartGame => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
                    self.start_game();
                } else {
                    debug!(phase = ?self.phase, "start ignored");
                }
            }
            PlayerIntent::PauseToggle => match self.phase {
                GamePhase::Playing => self.set_phase(GamePhase::Paused),
                GamePhase::Paused => self.set_phase(GamePhase::Playing),
                _ => debug!(phase = ?self.phase, "pause toggle ignored"),
            },
            PlayerIntent::ReturnToMenu => {
                if matches!(self.phase, GamePhase::Paused | GamePhase::GameOver) {
                    // The player is kept so the menu can show the final stats.
                    self.world.clear();
                    self.controls = DimensionControls::default();
                    self.effects = TimedEffects::default();
                    self.wave = WaveState::default();
                    self.set_phase(GamePhase::Menu);
                } else {
                    debug!(phase = ?self.phase, "return to menu ignored");
                }
            }
            PlayerIntent::AimAt { x, y } => self.aim_at(x, y),
            PlayerIntent::Fire => {
                if self.is_playing("fire") {
                    let outcome = self.fire();
                    trace!(?outcome, "shot resolved");
                }
            }
            PlayerIntent::Reload => {
                if self.is_playing("reload") {
                    self.reload();
                }
            }
            PlayerIntent::ShiftDimension { direction } => {
                if self.is_playing("shift dimension") {
                    if let Some(shift) =
                        self.controls.shift_dimension(direction, &mut self.player)
                    {
                        self.events.push(SimEvent::DimensionShifted { shift });
                    }
                }
            }
            PlayerIntent::ToggleTimeWarp => {
                if self.is_playing("toggle time warp") {
                    let warp = self.controls.toggle_time_warp();
                    debug!(?warp, "time warp toggled");
                    self.events.push(SimEvent::TimeWarpChanged { warp });
                }
            }
        }
    }

    /// Apply several intents in order.
    pub fn apply_intents(&mut self, intents: impl IntoIterator<Item = PlayerIntent>) {
        for intent in intents {
            self.apply_intent(intent);
        }
    }

    /// Feed `delta_ms` of host time. Runs as many whole ticks as the
    /// accumulated time covers, capped by `max_ticks_per_advance`; surplus
    /// beyond the cap is dropped. Non-finite or negative deltas count as zero.
    pub fn advance(&mut self, delta_ms: f64) -> GameStateSnapshot {
        if self.phase != GamePhase::Playing {
            self.accumulator_ms = 0.0;
            return self.snapshot();
        }

        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.accumulator_ms += delta_ms;
        }

        let mut ticks = 0;
        loop {
            let step_ms = self.effective_tick_ms();
            if self.accumulator_ms < step_ms {
                break;
            }
            if ticks >= self.config.max_ticks_per_advance || self.phase != GamePhase::Playing {
                self.accumulator_ms = 0.0;
                break;
            }
            self.accumulator_ms -= step_ms;
            self.step();
            ticks += 1;
        }

        self.snapshot()
    }

    /// Run exactly one tick (if playing) and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.phase == GamePhase::Playing {
            self.step();
        }
        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let inputs = SnapshotInputs {
            clock: self.clock,
            phase: self.phase,
            player: &self.player,
            aim: self.aim,
            controls: self.controls,
            effects: &self.effects,
            wave: self.wave,
            base_tick_ms: self.config.base_tick_ms,
        };
        systems::snapshot::build_snapshot(&self.world, &inputs, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation clock.
    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn aim(&self) -> ViewPoint {
        self.aim
    }

    pub fn dimension_shift(&self) -> f64 {
        self.controls.shift()
    }

    pub fn time_warp(&self) -> TimeWarp {
        self.controls.warp()
    }

    /// Current tick period: `base_tick_ms / time_warp`.
    pub fn effective_tick_ms(&self) -> f64 {
        self.controls.effective_tick_ms(self.config.base_tick_ms)
    }

    pub fn is_reloading(&self) -> bool {
        self.effects.is_reloading()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage exact scenarios.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Spawn one enemy of an exact kind and position (for tests).
    #[cfg(test)]
    pub(crate) fn spawn_test_enemy(
        &mut self,
        kind: tesseract_core::enums::EnemyKind,
        position: tesseract_core::types::Position,
    ) -> hecs::Entity {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            id,
            kind,
            position,
            self.clock.now_ms,
        )
    }

    fn is_playing(&self, intent: &str) -> bool {
        if self.phase == GamePhase::Playing {
            true
        } else {
            debug!(intent, phase = ?self.phase, "intent ignored outside play");
            false
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        debug!(from = ?self.phase, to = ?phase, "phase change");
        self.phase = phase;
        // Skipped host time is never simulated.
        self.accumulator_ms = 0.0;
    }

    /// Reset everything for a fresh run and spawn the first wave.
    fn start_game(&mut self) {
        self.world.clear();
        self.clock = SimClock::default();
        self.player = Player::new(self.config.player_max_health, self.config.player_max_ammo);
        self.aim = ViewPoint::center();
        self.controls = DimensionControls::default();
        self.effects = TimedEffects::default();
        self.next_enemy_id = 0;
        self.next_projectile_id = 0;

        let wave_size = world_setup::initial_wave_size(self.player.level());
        world_setup::spawn_wave(
            &mut self.world,
            &mut self.rng,
            &mut self.next_enemy_id,
            wave_size,
            self.clock.now_ms,
        );
        self.wave = WaveState { wave_size };

        info!(wave_size, seed = self.config.seed, "game started");
        self.set_phase(GamePhase::Playing);
    }

    /// Reject non-finite coordinates, clamp the rest to the play area.
    fn aim_at(&mut self, x: f64, y: f64) {
        let point = ViewPoint::new(x, y);
        if !point.is_finite() {
            debug!(x, y, "non-finite aim rejected");
            return;
        }
        self.aim = ViewPoint::new(x.clamp(0.0, ARENA_WIDTH), y.clamp(0.0, ARENA_HEIGHT));
    }

    fn fire(&mut self) -> FireOutcome {
        systems::combat::resolve_player_fire(
            &mut self.world,
            &mut self.player,
            &mut self.effects,
            self.aim,
            self.clock.now_ms,
            &mut self.events,
        )
    }

    fn reload(&mut self) {
        if self.effects.is_reloading() || self.player.ammo.is_full() {
            debug!("reload ignored");
            return;
        }
        self.effects.start_reload(self.clock.now_ms);
        debug!(ammo = self.player.ammo.current(), "reload started");
        self.events.push(SimEvent::ReloadStarted {
            duration_ms: RELOAD_MS,
        });
    }

    /// Run all systems in order for one tick.
    fn step(&mut self) {
        // 1. Dimension & time: this tick's motion scale and period
        let motion_scale = self.controls.motion_scale();
        let step_ms = self.effective_tick_ms();
        self.clock.advance(step_ms);
        let now_ms = self.clock.now_ms;

        // 2. Timed effects (reload completion, flash expiry)
        systems::effects::run(&mut self.effects, &mut self.player, now_ms, &mut self.events);

        // 3. Enemy AI (may spawn projectiles)
        let fired = systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            self.aim,
            now_ms,
            &mut self.next_projectile_id,
            &mut self.events,
        );

        // 4. Enemy drift
        systems::drift::run(&mut self.world, motion_scale);

        // 5. Projectile physics + player hits
        let physics = systems::projectiles::run(
            &mut self.world,
            &mut self.player,
            &mut self.effects,
            now_ms,
            motion_scale,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        trace!(
            tick = self.clock.tick,
            fired,
            hits = physics.hits,
            expired = physics.expired,
            out_of_bounds = physics.out_of_bounds,
            "tick"
        );

        if physics.player_killed {
            info!(
                score = self.player.score(),
                level = self.player.level(),
                "game over"
            );
            self.events.push(SimEvent::GameOver {
                score: self.player.score(),
                level: self.player.level(),
            });
            self.set_phase(GamePhase::GameOver);
            return;
        }

        // 6. Wave clear, against this tick's final state
        systems::wave_manager::run(
            &mut self.world,
            &mut self.rng,
            &mut self.player,
            &mut self.wave,
            &mut self.next_enemy_id,
            now_ms,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }
}
