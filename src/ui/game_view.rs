use crate::game::{Board, Cell, GameState, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    engine_status: &str,
) {
    let board = game_state.board();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(board.rows() as u16 + 4), // Board
            Constraint::Length(3),                    // Message
            Constraint::Length(3),                    // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, engine_status, chunks[0]);
    render_board(frame, board, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Human => Color::Red,
        Side::Automated => Color::Yellow,
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    engine_status: &str,
    area: ratatui::layout::Rect,
) {
    let current_side = game_state.current_side();
    let color = side_color(current_side);

    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", engine_status)
    } else {
        format!("To move: {}  |  {}", current_side.name(), engine_status)
    };

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

/// One 3-char slot per column, lined up with the board cells; the selected
/// column is highlighted.
fn selector_line(
    cols: usize,
    selected_column: usize,
    selected: impl Fn(usize) -> String,
    other: impl Fn(usize) -> String,
) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..cols {
        if col == selected_column {
            spans.push(Span::styled(
                selected(col),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(other(col)));
        }
    }
    spans.push(Span::raw("  ")); // Suffix padding to match " ║"
    Line::from(spans)
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let cols = board.cols();
    let rule = "═".repeat(cols * 3 + 1);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let number = |col: usize| format!("{:^3}", col + 1);
    lines.push(selector_line(cols, selected_column, number, number));

    lines.push(Line::from(format!("  ╔{rule}╗")));

    // Top row first: row 0 is the bottom of the board
    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Human => (" ● ", side_color(Side::Human)),
                Cell::Automated => (" ● ", side_color(Side::Automated)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    lines.push(selector_line(
        cols,
        selected_column,
        |_| " ▲ ".to_string(),
        |_| "   ".to_string(),
    ));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
