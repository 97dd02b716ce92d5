//! TUI rendering with ratatui
//!
//! Layout for the hangman board: stages, word, clock and keyboard.

use super::app::{App, MessageStyle};
use crate::core::{Letter, LetterState, RoundStatus, Tile};
use crate::output::formatters::{board_announcement, is_time_low, tile_char};
use crate::output::messages::attempts_line;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Parse a `#RRGGBB` color into a terminal color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Status banner
            Constraint::Length(3), // Penalty stages
            Constraint::Length(3), // Word
            Constraint::Length(3), // Clock
            Constraint::Length(4), // Keyboard
            Constraint::Min(4),    // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_banner(f, app, chunks[1]);
    render_stages(f, app, chunks[2]);
    render_word(f, app, chunks[3]);
    render_clock(f, app, chunks[4]);
    render_keyboard(f, app, chunks[5]);
    render_messages(f, app, chunks[6]);
    render_status(f, app, chunks[7]);

    if app.show_overlay {
        render_game_over(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let last_stage = round
        .penalty_track()
        .labels()
        .last()
        .map_or("Assembly", |l| l.name.as_str());

    let header = Paragraph::new(attempts_line(round.engine().guesses_left(), last_stage))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Assembly: Endgame ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let status = app.session.status();
    let color = match status {
        RoundStatus::Won => Color::Green,
        RoundStatus::Lost | RoundStatus::TimedOut => Color::Red,
        RoundStatus::InProgress => Color::Magenta,
    };

    let mut lines = Vec::new();
    if let Some((title, body)) = &app.banner {
        if let Some(title) = title {
            lines.push(Line::from(Span::styled(
                *title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }
        let body_style = if status == RoundStatus::InProgress {
            Style::default().fg(color).add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(color)
        };
        lines.push(Line::from(Span::styled(body.as_str(), body_style)));
    }

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}

fn render_stages(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (label, lost) in app.session.round().stages() {
        let style = if lost {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            let bg = parse_hex_color(&label.background).unwrap_or(Color::Gray);
            let fg = parse_hex_color(&label.foreground).unwrap_or(Color::Black);
            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
        };
        let text = if lost {
            format!(" 💀{} ", label.name)
        } else {
            format!(" {} ", label.name)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    let stages = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(stages, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.round().board();
    let mut spans = Vec::with_capacity(board.len() * 2);
    for tile in &board {
        let style = match tile {
            Tile::Revealed(_) => Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            Tile::Missed(_) => Style::default().fg(Color::Red).bg(Color::DarkGray),
            Tile::Hidden => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", tile_char(*tile)), style));
        spans.push(Span::raw(" "));
    }

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let timer = app.session.round().timer();
    let remaining = timer.remaining_secs();
    let duration = timer.duration_secs().max(1);
    let ratio = (f64::from(remaining) / f64::from(duration)).clamp(0.0, 1.0);

    let color = if is_time_low(remaining) {
        Color::Red
    } else {
        Color::Cyan
    };
    let label = if app.session.round().is_started() {
        format!("{remaining}s remaining")
    } else {
        format!("{remaining}s | press SPACE to start")
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let engine = app.session.round().engine();
    let over = app.session.round().is_over();

    let letters: Vec<Letter> = Letter::alphabet().collect();
    let lines: Vec<Line> = letters
        .chunks(13)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&letter| {
                    let style = match engine.letter_state(letter) {
                        LetterState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
                        LetterState::Wrong => Style::default().fg(Color::White).bg(Color::Red),
                        LetterState::Unguessed if over => Style::default().fg(Color::DarkGray),
                        LetterState::Unguessed => Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    };
                    [
                        Span::styled(format!(" {} ", letter.as_char().to_ascii_uppercase()), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    if let Some(announcement) = &app.announcement {
        items.push(ListItem::new(announcement.clone()).style(Style::default().fg(Color::Cyan)));
        items.push(
            ListItem::new(board_announcement(&app.session.round().board()))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }
    items.extend(app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    let messages_list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.round().is_over() {
        "Enter: New Game | Esc: Quit"
    } else if app.session.round().is_started() {
        "a-z: Guess | Esc/Ctrl-C: Quit"
    } else {
        "Space: Start | Esc/Ctrl-C: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_game_over(f: &mut Frame, app: &App) {
    let round = app.session.round();
    let title = match round.status() {
        RoundStatus::TimedOut => " ⏰ TIME'S UP ",
        RoundStatus::Won => " 🎉 YOU WIN ",
        _ => " 💥 GAME OVER ",
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            round.engine().word().text().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} wrong guesses | {} games played",
            round.engine().wrong_guess_count(),
            app.session.stats().total_games
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: close | Enter: new game",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let area = centered_rect(50, 40, f.area());
    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#E2680F"), Some(Color::Rgb(0xE2, 0x68, 0x0F)));
        assert_eq!(parse_hex_color("#0d0d0d"), Some(Color::Rgb(13, 13, 13)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_hex_color("E2680F"), None);
        assert_eq!(parse_hex_color("#E268"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }
}
