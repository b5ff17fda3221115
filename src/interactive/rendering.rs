//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KEYBOARD_ROWS, Verdict};
use crate::game::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDO 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Colors for a letter tile, `None` meaning not yet scored
fn tile_style(verdict: Option<Verdict>) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match verdict {
        Some(Verdict::Exact) => style.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Misplaced) => style.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Miss) => style.fg(Color::White).bg(Color::DarkGray),
        None => style.fg(Color::White),
    }
}

fn tile(letter: char, verdict: Option<Verdict>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(verdict),
    )
}

/// One line per attempt: scored guesses, then the word being typed, then blanks
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let mut lines = Vec::with_capacity(session.max_attempts() * 2);

    for record in session.history() {
        let spans = record
            .guess()
            .letters()
            .iter()
            .zip(record.feedback().verdicts())
            .flat_map(|(&letter, &verdict)| {
                [tile(char::from(letter), Some(verdict)), Span::raw(" ")]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut rows_left = session.attempts_remaining();
    if app.input_mode == InputMode::Guessing && rows_left > 0 {
        let typed = app.input_buffer.chars().map(Some);
        let blanks = std::iter::repeat(None);
        let spans = typed
            .chain(blanks)
            .take(session.word_length())
            .flat_map(|c| [tile(c.unwrap_or('_'), None), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        let spans = (0..session.word_length())
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Attempt {}/{} ",
        (app.session.attempts_used() + 1).min(app.session.max_attempts()),
        app.session.max_attempts()
    );
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans = row
                .bytes()
                .map(|letter| tile(char::from(letter), keyboard.state(letter)))
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts_used();
    let max = app.session.max_attempts();
    let percent = u16::try_from(used * 100 / max.max(1)).unwrap_or(100);

    let color = match app.session.outcome() {
        Outcome::Won { .. } => Color::Green,
        Outcome::Lost | Outcome::Abandoned => Color::Red,
        Outcome::InProgress => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent.min(100))
        .label(format!("{used}/{max} used"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(
                " Type a {}-letter word | Enter to submit | Esc to give up ",
                app.session.word_length()
            ),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.session.outcome() {
        Outcome::InProgress => "Playing".to_string(),
        Outcome::Won { attempts } => format!("Won in {attempts}"),
        Outcome::Lost => "Lost".to_string(),
        Outcome::Abandoned => "Abandoned".to_string(),
    };
    f.render_widget(
        Paragraph::new(format!("Game: {mode_text}")).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = &app.stats;
    let stats_text = format!(
        "Played: {} | Win: {}%",
        stats.games_played,
        stats.win_percentage().unwrap_or(0)
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!("Streak: {} (max {})", stats.current_streak, stats.max_streak);
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Give up | Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{RandomTargets, Vocabulary};
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn with_app(check: impl FnOnce(&mut App<'_>)) {
        let vocab = Vocabulary::new(5, &words_from_slice(&["crane", "range"]), &[]);
        let targets = RandomTargets::new(&words_from_slice(&["range"]), 5, Some(1)).unwrap();
        let mut app = App::new(&vocab, Box::new(targets), GameConfig::default(), None).unwrap();
        check(&mut app);
    }

    #[test]
    fn tile_colors_follow_verdicts() {
        assert_eq!(tile_style(Some(Verdict::Exact)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(Verdict::Misplaced)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(Verdict::Miss)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, None);
    }

    #[test]
    fn board_has_row_per_attempt() {
        with_app(|app| {
            app.push_char('c');
            app.push_char('r');

            let lines = board_lines(app);
            // Each row is followed by a spacer line
            assert_eq!(lines.len(), 12);
            assert_eq!(line_text(&lines[0]), " C   R   _   _   _  ");
        });
    }

    #[test]
    fn scored_rows_come_first() {
        with_app(|app| {
            for c in "crane".chars() {
                app.push_char(c);
            }
            app.submit();

            let lines = board_lines(app);
            assert_eq!(lines.len(), 12);
            assert_eq!(line_text(&lines[0]), " C   R   A   N   E  ");
            assert_eq!(lines[0].spans[0].style.bg, Some(Color::DarkGray));
            assert_eq!(lines[0].spans[2].style.bg, Some(Color::Yellow));
        });
    }

    #[test]
    fn ui_renders_without_panicking() {
        with_app(|app| {
            let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
            terminal.draw(|f| ui(f, app)).unwrap();
        });
    }
}
