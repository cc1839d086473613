//! # Scene Management System
//!
//! The start screen, the runs and the game-over screen as one explicit state
//! machine:
//!
//! ```text
//! Start --start--> Playing --collision--> GameOver --restart--> Playing
//!   \                 \                      \
//!    `----quit---------`--------quit----------`--> exit
//! ```
//!
//! Restarting builds a fresh [`WorldState`]; nothing from the previous run
//! survives except the session's best score.

use crate::config::{MAX_TICKS_PER_FRAME, TARGET_FPS};
use crate::generation::utils::{create_rng, next_run_seed};
use crate::{
    Button, ButtonAction, DragonResult, FrameInput, GameConfig, InputHandler, MacroquadDisplay,
    PlayerInput, TickOutcome, WorldState, UI,
};
use log::{debug, info};
use macroquad::prelude::{get_frame_time, next_frame, KeyCode};
use rand::rngs::StdRng;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Title screen with Start and Quit
    Start,
    /// A run is in progress
    Playing,
    /// The last run ended with the given score
    GameOver { score: u32 },
}

/// Converts variable frame times into a whole number of fixed simulation ticks.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_ticks: u32,
    accumulator: f32,
}

impl FixedStep {
    /// Creates a stepper running `rate` ticks per second.
    pub fn new(rate: u32, max_ticks: u32) -> Self {
        Self {
            step: 1.0 / rate as f32,
            max_ticks,
            accumulator: 0.0,
        }
    }

    /// Number of ticks to run for a frame that took `dt` seconds.
    ///
    /// A backlog larger than `max_ticks` is dropped rather than replayed.
    pub fn ticks_for(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_ticks {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Shortcut keys for the primary (first) button of a screen.
pub fn confirm_keys(buttons: &[Button]) -> &'static [KeyCode] {
    buttons
        .first()
        .map(|b| b.action.shortcut_keys())
        .unwrap_or(&[])
}

/// Maps a screen input to a button action.
///
/// The keyboard confirm shortcut presses the first (primary) button; it is
/// only produced by that button's own [`confirm_keys`].
pub fn menu_choice(input: PlayerInput, buttons: &[Button]) -> Option<ButtonAction> {
    match input {
        PlayerInput::Quit => Some(ButtonAction::Quit),
        PlayerInput::Confirm => buttons.first().map(|b| b.action),
        PlayerInput::Click { x, y } => UI::hit_test(buttons, x, y),
    }
}

/// The application context: owns the display, input, randomness and the
/// active run, and drives them until the player quits.
pub struct SceneManager {
    current_scene: SceneType,
    config: GameConfig,
    world: Option<WorldState>,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    session_rng: StdRng,
    clock: FixedStep,
    pending_input: FrameInput,
    best_score: u32,
}

impl SceneManager {
    /// Creates a scene manager for a session seeded with `session_seed`.
    pub fn new(config: GameConfig, session_seed: u64, skip_start: bool) -> DragonResult<Self> {
        config.validate()?;
        info!("Session seed: {}", session_seed);

        let mut manager = Self {
            current_scene: SceneType::Start,
            display: MacroquadDisplay::new(&config),
            config,
            world: None,
            input_handler: InputHandler::new(),
            session_rng: create_rng(session_seed),
            clock: FixedStep::new(TARGET_FPS, MAX_TICKS_PER_FRAME),
            pending_input: FrameInput::default(),
            best_score: 0,
        };

        if skip_start {
            manager.start_new_run()?;
        }

        Ok(manager)
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> DragonResult<()> {
        loop {
            let exit = match self.current_scene {
                SceneType::Start => self.update_start_scene()?,
                SceneType::Playing => self.update_playing_scene()?,
                SceneType::GameOver { score } => self.update_game_over_scene(score)?,
            };
            if exit {
                break;
            }
            next_frame().await;
        }

        self.world = None;
        info!("Player quit, best score this session: {}", self.best_score);
        Ok(())
    }

    /// Updates the start screen, returns true if exit is requested
    fn update_start_scene(&mut self) -> DragonResult<bool> {
        let buttons = self.display.render_start_screen();
        self.handle_menu(&buttons)
    }

    /// Updates the game over screen, returns true if exit is requested
    fn update_game_over_scene(&mut self, score: u32) -> DragonResult<bool> {
        let buttons = self.display.render_game_over_screen(score, self.best_score);
        self.handle_menu(&buttons)
    }

    fn handle_menu(&mut self, buttons: &[Button]) -> DragonResult<bool> {
        let choice = self
            .input_handler
            .get_menu_input(confirm_keys(buttons))
            .and_then(|input| menu_choice(input, buttons));

        match choice {
            Some(ButtonAction::Quit) => Ok(true),
            Some(ButtonAction::Start) | Some(ButtonAction::Restart) => {
                self.start_new_run()?;
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Updates the playing scene, returns true if exit is requested
    fn update_playing_scene(&mut self) -> DragonResult<bool> {
        if self.input_handler.quit_requested() {
            return Ok(true);
        }

        // Presses on frames that run no tick carry over to the next tick
        let sampled = self.input_handler.get_frame_input();
        self.pending_input.jump |= sampled.jump;
        self.pending_input.descend = sampled.descend;

        let ticks = self.clock.ticks_for(get_frame_time());

        let Some(world) = self.world.as_mut() else {
            // A Playing scene always has a world; recover by starting one
            self.start_new_run()?;
            return Ok(false);
        };

        let mut outcome = TickOutcome::Running;
        for _ in 0..ticks {
            outcome = world.tick(&self.pending_input);
            self.pending_input = self.pending_input.held_only();
            if outcome != TickOutcome::Running {
                break;
            }
        }

        match outcome {
            TickOutcome::Running => self.display.render_game(world),
            TickOutcome::Collided { score } => {
                self.best_score = self.best_score.max(score);
                self.current_scene = SceneType::GameOver { score };
                info!("Scene: Playing -> GameOver (score {})", score);
                self.display.render_game_over_screen(score, self.best_score);
            }
        }

        Ok(false)
    }

    /// Replaces the world with a fresh run and switches to the playing scene
    fn start_new_run(&mut self) -> DragonResult<()> {
        let seed = next_run_seed(&mut self.session_rng);
        debug!("Starting run with seed {}", seed);

        self.world = Some(WorldState::new(self.config.clone(), seed)?);
        self.clock.reset();
        self.pending_input = FrameInput::default();

        info!("Scene: {:?} -> Playing", self.current_scene);
        self.current_scene = SceneType::Playing;
        Ok(())
    }
}
