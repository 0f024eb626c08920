use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{DropOutcome, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

pub struct App {
    game_state: GameState,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Rejects configs that fail [`AppConfig::validate`], so labels, colours
    /// and the starting column are known good while the UI runs.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(App {
            game_state: GameState::new(),
            selected_column: config.ui.start_column,
            config,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = Duration::from_millis(self.config.ui.poll_interval_ms);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.config.ui.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let players = &self.config.players;
        match self.game_state.drop_piece(self.selected_column) {
            Ok(DropOutcome::Continue { .. }) => {}
            Ok(DropOutcome::Won { winner, .. }) => {
                self.message = Some(format!("{} won!", players.label(winner)));
            }
            Ok(DropOutcome::Tied { .. }) => {
                self.message = Some("It's a tie!".to_string());
            }
            Err(err) => {
                debug!(%err, "drop rejected");
                self.message = Some(match err {
                    MoveError::ColumnFull { .. } => "Column is full!".to_string(),
                    MoveError::InvalidColumn { .. } => "Invalid column!".to_string(),
                    MoveError::GameOver { .. } => {
                        "Game over! Press 'r' to restart.".to_string()
                    }
                });
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            &self.config.players,
            self.selected_column,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player};
    use crossterm::event::KeyModifiers;

    fn new_app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.players.player2_color = "not-a-colour".into();
        assert!(matches!(App::new(config), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.ui.start_column = 7;
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = new_app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_win_is_announced_with_label() {
        let mut app = new_app();
        // Red takes the bottom row, Blue stacks on top
        for col in [0, 0, 1, 1, 2, 2, 3] {
            app.selected_column = col;
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.game_state.status(), GameStatus::Won(Player::Player1));
        assert_eq!(app.message.as_deref(), Some("Red won!"));

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );
    }

    #[test]
    fn test_full_column_message() {
        let mut app = new_app();
        app.selected_column = 0;
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.message, None);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.game_state.current_player(), Player::Player1);
    }

    #[test]
    fn test_reset_key() {
        let mut app = new_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state, GameState::new());
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
