//! Snake game logic: direction buffering, phase transitions, the tick engine
//! and the fixed-timestep frame loop.

use super::speed::tick_interval_ms;
use super::types::*;
use crate::constants::MAX_FRAME_DELTA_MS;
use crate::settings::Settings;
use rand::Rng;

/// Outcomes reported by the engine. Consumers (audio, high score storage,
/// logging) react to these; the engine never performs I/O itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AteFood { score: u32 },
    Collided { score: u32 },
    Won { score: u32 },
    /// Score passed the stored best. Carries the new best.
    NewHighScore(u32),
    Restarted,
    SettingsChanged,
}

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Move(Direction),
    /// Start, pause, resume, or restart after the game ended.
    StartPause,
    Restart,
    SetDifficulty(Difficulty),
    ToggleWrap,
    ToggleSpeedScaling,
    ToggleAudio,
    ToggleTheme,
}

impl SnakeGame {
    /// Fresh snake, zero score, empty buffers, new food. Leaves the game in
    /// [`GamePhase::Start`].
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.snake = self.grid.initial_snake();
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.score = 0;
        self.accumulated_ms = 0;
        self.tick_count = 0;
        self.recompute_interval();
        self.food = spawn_food(&self.grid, &self.snake, rng);
        self.phase = GamePhase::Start;
    }

    /// Reset and start playing immediately. Available from every phase.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.reset(rng);
        self.phase = GamePhase::Running;
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Only one change is accepted per tick, and never the reverse of the
    /// direction the snake is travelling. A request while in `Start` also
    /// starts the game. Returns true if the direction was buffered.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        match self.phase {
            GamePhase::Start => self.phase = GamePhase::Running,
            GamePhase::Running => {}
            GamePhase::Paused | GamePhase::GameOver | GamePhase::Win => return false,
        }

        // A filled slot is the effective direction, and it already blocks
        // any further change this tick.
        if self.pending_direction.is_some() {
            return false;
        }
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Space bar semantics: Start/Paused -> Running, Running -> Paused,
    /// GameOver/Win -> restart.
    pub fn toggle_pause_or_start<R: Rng>(&mut self, rng: &mut R) {
        match self.phase {
            GamePhase::Start | GamePhase::Paused => self.phase = GamePhase::Running,
            GamePhase::Running => self.phase = GamePhase::Paused,
            GamePhase::GameOver | GamePhase::Win => self.restart(rng),
        }
    }

    /// Replace the whole configuration. Returns true if anything changed.
    pub fn set_config(&mut self, settings: Settings) -> bool {
        if self.settings == settings {
            return false;
        }
        self.settings = settings;
        self.recompute_interval();
        true
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        self.set_config(Settings {
            difficulty,
            ..self.settings
        })
    }

    pub fn set_wrap_mode(&mut self, wrap_mode: bool) -> bool {
        self.set_config(Settings {
            wrap_mode,
            ..self.settings
        })
    }

    pub fn set_speed_scaling(&mut self, speed_scaling: bool) -> bool {
        self.set_config(Settings {
            speed_scaling,
            ..self.settings
        })
    }

    pub fn set_audio_enabled(&mut self, audio_enabled: bool) -> bool {
        self.set_config(Settings {
            audio_enabled,
            ..self.settings
        })
    }

    fn recompute_interval(&mut self) {
        self.tick_interval_ms = tick_interval_ms(
            self.settings.difficulty,
            self.score,
            self.settings.speed_scaling,
        );
    }

    /// Whether moving the head to `candidate` ends the game.
    ///
    /// The current tail cell is free to enter only when this move is not
    /// eating, since only then does the tail vacate on the same tick.
    pub fn would_collide(&self, candidate: Cell, eating: bool) -> bool {
        if !self.settings.wrap_mode && !self.grid.contains(candidate) {
            return true;
        }
        if !eating && candidate == self.tail() {
            return false;
        }
        self.is_occupied(candidate)
    }

    fn reconcile_high_score(&mut self) -> Option<u32> {
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.high_score)
        } else {
            None
        }
    }

    /// Single movement step. No-op unless the game is running.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Running {
            return events;
        }
        self.tick_count += 1;

        // Apply buffered direction; the slot is empty after this either way
        if let Some(next) = self.pending_direction.take() {
            if next != self.direction.opposite() {
                self.direction = next;
            }
        }

        let mut candidate = self.head().step(self.direction);
        if self.settings.wrap_mode {
            candidate = self.grid.wrap(candidate);
        }
        let eating = self.food == Some(candidate);

        if self.would_collide(candidate, eating) {
            self.phase = GamePhase::GameOver;
            events.push(GameEvent::Collided { score: self.score });
        } else {
            self.snake.push_front(candidate);
            if eating {
                self.score += 1;
                self.recompute_interval();
                events.push(GameEvent::AteFood { score: self.score });

                self.food = spawn_food(&self.grid, &self.snake, rng);
                if self.food.is_none() {
                    self.phase = GamePhase::Win;
                    events.push(GameEvent::Won { score: self.score });
                }
            } else {
                self.snake.pop_back();
            }
        }

        if let Some(best) = self.reconcile_high_score() {
            events.push(GameEvent::NewHighScore(best));
        }
        events
    }

    /// Frame loop body. `dt_ms` is wall-clock time since the previous frame.
    ///
    /// Time only accumulates while running, so pausing keeps the leftover
    /// fraction of a tick for an exact resume. Runs as many ticks as the
    /// accumulated time covers, stopping early if the game ends.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Running {
            return events;
        }

        // Clamp so a stalled terminal doesn't fast-forward the game
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DELTA_MS);

        while self.phase == GamePhase::Running && self.accumulated_ms >= self.tick_interval_ms {
            events.extend(self.step(rng));
            // Charged at the interval the tick leaves behind, so an eating
            // tick already pays the faster rate
            self.accumulated_ms = self.accumulated_ms.saturating_sub(self.tick_interval_ms);
        }
        events
    }

    /// Translate one input action into engine commands.
    pub fn process_input<R: Rng>(&mut self, input: GameInput, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let settings_changed = match input {
            GameInput::Move(direction) => {
                self.queue_direction(direction);
                false
            }
            GameInput::StartPause => {
                let restarting = self.phase.is_terminal();
                self.toggle_pause_or_start(rng);
                if restarting {
                    events.push(GameEvent::Restarted);
                }
                false
            }
            GameInput::Restart => {
                self.restart(rng);
                events.push(GameEvent::Restarted);
                false
            }
            GameInput::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
            GameInput::ToggleWrap => self.set_wrap_mode(!self.settings.wrap_mode),
            GameInput::ToggleSpeedScaling => self.set_speed_scaling(!self.settings.speed_scaling),
            GameInput::ToggleAudio => self.set_audio_enabled(!self.settings.audio_enabled),
            GameInput::ToggleTheme => self.set_config(Settings {
                theme: self.settings.theme.toggled(),
                ..self.settings
            }),
        };
        if settings_changed {
            events.push(GameEvent::SettingsChanged);
        }
        events
    }
}
