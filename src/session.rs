//! Wires the engine to its collaborators.
//!
//! [`Session`] owns the game and forwards engine events to audio, high score
//! storage, settings storage and the log. The engine itself stays free of I/O.

use crate::audio::{play_events, AudioSink};
use crate::game::{GameEvent, GameInput, Grid, SnakeGame};
use crate::high_score::{persist_high_score, HighScoreStore};
use crate::settings::{save_settings, Settings};
use rand::Rng;
use std::path::PathBuf;

pub struct Session<R: Rng> {
    pub game: SnakeGame,
    rng: R,
    high_scores: Box<dyn HighScoreStore>,
    audio: Box<dyn AudioSink>,
    /// Where settings are written when they change. `None` keeps them in memory.
    settings_dir: Option<PathBuf>,
}

impl<R: Rng> Session<R> {
    pub fn new(
        grid: Grid,
        settings: Settings,
        high_scores: Box<dyn HighScoreStore>,
        audio: Box<dyn AudioSink>,
        settings_dir: Option<PathBuf>,
        mut rng: R,
    ) -> Self {
        let high_score = high_scores.load();
        let game = SnakeGame::new(grid, settings, high_score, &mut rng);
        tracing::info!(
            difficulty = settings.difficulty.name(),
            wrap = settings.wrap_mode,
            speed_scaling = settings.speed_scaling,
            high_score,
            "Session started"
        );
        Self {
            game,
            rng,
            high_scores,
            audio,
            settings_dir,
        }
    }

    /// Advance by one rendered frame's worth of wall-clock time.
    pub fn frame(&mut self, dt_ms: u64) -> Vec<GameEvent> {
        let events = self.game.advance(dt_ms, &mut self.rng);
        self.apply_events(&events);
        events
    }

    /// Feed one input action to the engine.
    pub fn input(&mut self, input: GameInput) -> Vec<GameEvent> {
        let events = self.game.process_input(input, &mut self.rng);
        self.apply_events(&events);
        events
    }

    fn apply_events(&mut self, events: &[GameEvent]) {
        play_events(
            self.audio.as_mut(),
            self.game.settings.audio_enabled,
            events,
        );

        for event in events {
            match *event {
                GameEvent::AteFood { score } => {
                    tracing::debug!(score, interval_ms = self.game.tick_interval_ms, "Ate food");
                }
                GameEvent::Collided { score } => {
                    tracing::info!(score, length = self.game.snake.len(), "Game over");
                }
                GameEvent::Won { score } => {
                    tracing::info!(score, length = self.game.snake.len(), "Grid filled, game won");
                }
                GameEvent::NewHighScore(best) => {
                    persist_high_score(self.high_scores.as_mut(), best);
                }
                GameEvent::Restarted => tracing::info!("Game restarted"),
                GameEvent::SettingsChanged => self.save_settings(),
            }
        }
    }

    fn save_settings(&self) {
        let settings = self.game.settings;
        tracing::info!(?settings, "Settings changed");
        if let Some(dir) = &self.settings_dir {
            if let Err(e) = save_settings(dir, &settings) {
                tracing::warn!(error = %e, "Could not save settings");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioEvent;
    use crate::game::{Cell, Direction, GamePhase};
    use crate::high_score::MemoryHighScoreStore;
    use crate::settings::load_settings;
    use crate::utils::persistence::test_dir;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedRecorder(Rc<RefCell<Vec<AudioEvent>>>);

    impl AudioSink for SharedRecorder {
        fn play(&mut self, event: AudioEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryHighScoreStore>>);

    impl HighScoreStore for SharedStore {
        fn load(&self) -> u32 {
            self.0.borrow().load()
        }

        fn save(&mut self, score: u32) -> io::Result<()> {
            self.0.borrow_mut().save(score)
        }
    }

    fn session(
        best: u32,
        settings_dir: Option<PathBuf>,
    ) -> (Session<ChaCha8Rng>, SharedStore, SharedRecorder) {
        let store = SharedStore::default();
        store.0.borrow_mut().best = best;
        let audio = SharedRecorder::default();
        let session = Session::new(
            Grid::default(),
            Settings::default(),
            Box::new(store.clone()),
            Box::new(audio.clone()),
            settings_dir,
            ChaCha8Rng::seed_from_u64(3),
        );
        (session, store, audio)
    }

    #[test]
    fn test_loads_high_score() {
        let (session, _, _) = session(21, None);
        assert_eq!(session.game.high_score, 21);
        assert_eq!(session.game.phase, GamePhase::Start);
    }

    #[test]
    fn test_eating_plays_sound_and_saves_new_best() {
        let (mut session, store, audio) = session(0, None);
        session.input(GameInput::StartPause);
        let ahead = session.game.head().step(Direction::Right);
        session.game.food = Some(ahead);

        session.frame(140);

        assert_eq!(session.game.score, 1);
        assert_eq!(store.0.borrow().best, 1);
        assert_eq!(store.0.borrow().saves, 1);
        assert_eq!(*audio.0.borrow(), vec![AudioEvent::Eat]);
    }

    #[test]
    fn test_no_save_below_best() {
        let (mut session, store, _) = session(10, None);
        session.input(GameInput::StartPause);
        session.game.food = Some(session.game.head().step(Direction::Right));

        session.frame(140);

        assert_eq!(store.0.borrow().saves, 0);
        assert_eq!(session.game.high_score, 10);
    }

    #[test]
    fn test_collision_plays_game_over_sound() {
        let (mut session, _, audio) = session(0, None);
        session.input(GameInput::StartPause);
        session.game.snake = [Cell::new(23, 3), Cell::new(22, 3), Cell::new(21, 3)]
            .into_iter()
            .collect();

        session.frame(140);

        assert_eq!(session.game.phase, GamePhase::GameOver);
        assert_eq!(*audio.0.borrow(), vec![AudioEvent::GameOver]);
    }

    #[test]
    fn test_muted_session_is_silent() {
        let (mut session, _, audio) = session(0, None);
        session.input(GameInput::ToggleAudio);
        session.input(GameInput::StartPause);
        session.game.food = Some(session.game.head().step(Direction::Right));

        session.frame(140);

        assert_eq!(session.game.score, 1);
        assert!(audio.0.borrow().is_empty());
    }

    #[test]
    fn test_settings_change_is_saved() {
        let dir = test_dir("session_settings");
        let (mut session, _, _) = session(0, Some(dir.clone()));

        session.input(GameInput::ToggleWrap);

        assert!(load_settings(&dir).wrap_mode);
        fs::remove_dir_all(dir).ok();
    }
}
