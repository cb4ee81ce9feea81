use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameSession, Position};
use crate::store::ScoreBoard;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the main menu
    pub fn render_menu(&self, frame: &mut Frame) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SNAKE GAME",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("1. Play Game", Style::default().fg(Color::White))),
            Line::from(Span::styled("2. Leaderboard", Style::default().fg(Color::White))),
            Line::from(Span::styled("3. Exit", Style::default().fg(Color::White))),
        ];

        let menu = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(menu, frame.area());
    }

    /// Draw the play screen: score header, the board, controls footer
    pub fn render_playing(&self, frame: &mut Frame, session: &GameSession, high_score: u32) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(high_score.to_string(), Style::default().fg(Color::White)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let board = self.render_board(chunks[1], session);
        frame.render_widget(board, chunks[1]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_board(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let config = session.config();
        let head = session.snake.head();
        let mut lines = Vec::new();

        for row in 0..config.rows() {
            let mut spans = Vec::new();

            for col in 0..config.cols() {
                let pos = Position::new(col * config.cell_size, row * config.cell_size);

                let cell = if pos == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if pos == session.food {
                    // Drawn over the body: food may spawn under the snake
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if session.snake.body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    /// Draw the game-over screen with the final score
    ///
    /// A failed score write shows up as a warning line instead of crashing
    /// the game.
    pub fn render_game_over(
        &self,
        frame: &mut Frame,
        final_score: u32,
        save_warning: Option<&str>,
    ) {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "ENTER",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "ESC",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for menu", Style::default().fg(Color::Gray)),
            ]),
        ];

        if let Some(warning) = save_warning {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                format!("! {}", warning),
                Style::default().fg(Color::Yellow),
            )));
        }

        let panel = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(panel, frame.area());
    }

    /// Draw the leaderboard: ranked scores, best first
    pub fn render_leaderboard(&self, frame: &mut Frame, board: &ScoreBoard) {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "LEADERBOARD",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if board.is_empty() {
            text.push(Line::from(Span::styled(
                "No scores yet",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (i, score) in board.scores().iter().enumerate() {
                text.push(Line::from(Span::styled(
                    format!("{}. {}", i + 1, score),
                    Style::default().fg(Color::White),
                )));
            }
        }

        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Press ESC to return to menu",
            Style::default().fg(Color::Gray),
        )));

        let panel = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(panel, frame.area());
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
