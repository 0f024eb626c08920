use crate::config::PlayersConfig;
use crate::game::{Board, Cell, GameState, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, players, chunks[0]);
    render_board(frame, game_state, players, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Header text and colour for the current state.
fn status_line(game_state: &GameState, players: &PlayersConfig) -> (String, Color) {
    let snapshot = game_state.snapshot();
    match snapshot.status {
        GameStatus::InProgress => (
            format!(
                "Current Player: {}",
                players.label(snapshot.current_player)
            ),
            players.color(snapshot.current_player),
        ),
        GameStatus::Won(winner) => (
            format!("{} won!  |  Press R for a new game", players.label(winner)),
            players.color(winner),
        ),
        GameStatus::Tied => (
            "It's a tie!  |  Press R for a new game".to_string(),
            Color::White,
        ),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, players: &PlayersConfig, area: Rect) {
    let (status, color) = status_line(game_state, players);

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn board_lines<'a>(
    board: &Board,
    players: &PlayersConfig,
    winning: &[(usize, usize)],
    selected_column: usize,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let inner_width = board.width() * 3 + 1;

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(inner_width))));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            let span = match cell.owner() {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(players.color(player));
                    if winning.contains(&(row, col)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(inner_width))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    selected_column: usize,
    area: Rect,
) {
    let winning = match game_state.status() {
        GameStatus::Won(winner) => game_state
            .board()
            .winning_line(winner)
            .map(|line| line.to_vec())
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    let lines = board_lines(game_state.board(), players, &winning, selected_column);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_line_follows_game() {
        let players = PlayersConfig::default();
        let mut state = GameState::new();
        assert_eq!(
            status_line(&state, &players),
            ("Current Player: Red".to_string(), Color::Red)
        );

        state.drop_piece(0).unwrap();
        assert_eq!(status_line(&state, &players).0, "Current Player: Blue");

        for col in [1, 0, 1, 0, 1] {
            state.drop_piece(col).unwrap();
        }
        // Blue has stacked three in column 1; Red plays elsewhere, Blue completes
        state.drop_piece(6).unwrap();
        state.drop_piece(1).unwrap();
        assert_eq!(
            status_line(&state, &players).0,
            "Blue won!  |  Press R for a new game"
        );
    }

    #[test]
    fn test_board_lines_layout() {
        let players = PlayersConfig::default();
        let board = Board::standard();
        let lines = board_lines(&board, &players, &[], 3);
        // numbers, top border, six rows, bottom border, indicator
        assert_eq!(lines.len(), 10);
        assert_eq!(line_text(&lines[1]), format!("  ╔{}╗", "═".repeat(22)));
        assert_eq!(line_text(&lines[2]), format!("  ║{} ║", " . ".repeat(7)));
        assert_eq!(line_text(&lines[9]).trim(), "▲");
    }

    #[test]
    fn test_render_draws_header() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = GameState::new();
        let players = PlayersConfig::default();
        terminal
            .draw(|f| render(f, &state, &players, 3, &None))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..40u16)
            .map(|x| buffer[(x, 1u16)].symbol().to_string())
            .collect();
        assert!(top.contains("Current Player: Red"));
    }
}
