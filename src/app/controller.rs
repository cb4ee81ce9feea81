//! The screen controller: owns the terminal, the score board and the active
//! screen, and drives the main loop.
//!
//! Screens are plain enum states; every transition happens here, so view
//! code never exits the process or calls back into the play loop. The
//! top-level loop alone observes `should_quit` and ends the program by
//! returning through scoped terminal teardown.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameSession, TickResult};
use crate::input::{InputEvent, InputHandler};
use crate::render::Renderer;
use crate::store::{ScoreBoard, ScoreStore};

/// Tick period for a ticks-per-second rate
///
/// The rate is clamped to 1..=1000 so the period never truncates to zero,
/// which `tokio::time::interval` rejects.
fn tick_period(tick_rate: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(tick_rate.clamp(1, 1000)))
}

/// The active screen
pub enum Screen {
    Menu,
    Playing(GameSession),
    GameOver { final_score: u32 },
    Leaderboard,
}

pub struct App {
    config: GameConfig,
    store: ScoreStore,
    board: ScoreBoard,
    screen: Screen,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    save_warning: Option<String>,
}

impl App {
    /// Build the app; the score board is loaded from disk exactly once here
    pub fn new(config: GameConfig, store: ScoreStore) -> Self {
        let board = store.load();

        Self {
            config,
            store,
            board,
            screen: Screen::Menu,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            save_warning: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run the loop with cleanup
        let result = self.run_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game ticks at the configured rate (10 Hz by default)
        let mut tick_timer = interval(tick_period(self.config.tick_rate));

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.draw(frame);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // The quit flag is honored before any further update or render
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(input) = self.input_handler.handle_key_event(key) {
                self.handle_input(input);
            }
        }
    }

    /// Dispatch one input event to the active screen
    fn handle_input(&mut self, input: InputEvent) {
        if input == InputEvent::QuitRequested {
            self.should_quit = true;
            return;
        }

        let mut next_screen = None;

        match &mut self.screen {
            Screen::Menu => match input {
                InputEvent::NumberPressed(1) => {
                    next_screen = Some(Screen::Playing(GameSession::new(self.config.clone())));
                }
                InputEvent::NumberPressed(2) => {
                    next_screen = Some(Screen::Leaderboard);
                }
                InputEvent::NumberPressed(3) | InputEvent::CancelPressed => {
                    self.should_quit = true;
                }
                _ => {}
            },

            Screen::Playing(session) => {
                if let InputEvent::DirectionPressed(direction) = input {
                    // Takes effect on the next tick; the last press wins
                    session.set_direction(direction);
                }
            }

            Screen::GameOver { .. } => match input {
                // Straight back into a fresh session, no menu detour
                InputEvent::ConfirmPressed => {
                    self.save_warning = None;
                    next_screen = Some(Screen::Playing(GameSession::new(self.config.clone())));
                }
                InputEvent::CancelPressed => {
                    self.save_warning = None;
                    next_screen = Some(Screen::Menu);
                }
                _ => {}
            },

            Screen::Leaderboard => {
                if input == InputEvent::CancelPressed {
                    next_screen = Some(Screen::Menu);
                }
            }
        }

        if let Some(screen) = next_screen {
            self.screen = screen;
        }
    }

    /// Advance the game by one tick when a session is active
    fn on_tick(&mut self) {
        let mut next_screen = None;

        if let Screen::Playing(session) = &mut self.screen {
            if session.advance_tick() == TickResult::Collided {
                let final_score = session.score;

                // A failed write must not interrupt the game; keep the
                // warning for the game-over screen instead.
                if let Err(err) = self.store.record(&mut self.board, final_score) {
                    self.save_warning = Some(format!("Score not saved: {:#}", err));
                }

                next_screen = Some(Screen::GameOver { final_score });
            }
        }

        if let Some(screen) = next_screen {
            self.screen = screen;
        }
    }

    fn draw(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Menu => self.renderer.render_menu(frame),
            Screen::Playing(session) => {
                // High score shown live, never lagging behind the session
                let high_score = self.board.high_score().unwrap_or(0).max(session.score);
                self.renderer.render_playing(frame, session, high_score);
            }
            Screen::GameOver { final_score } => {
                self.renderer
                    .render_game_over(frame, *final_score, self.save_warning.as_deref());
            }
            Screen::Leaderboard => self.renderer.render_leaderboard(frame, &self.board),
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
