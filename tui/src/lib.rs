//! TUI rendering for the emotion analyzer using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use emotion_engine::{Analyze, App, EmotionResult, ErrorMessage, RequestState};
use emotion_types::sanitize_terminal_text;

pub const TITLE: &str = "Emotion Analyzer";
pub const SUBTITLE: &str = "Enter your text below to discover the colorful emotions within it";
pub const INPUT_LABEL: &str = "Your text";
pub const PLACEHOLDER: &str =
    "How are you feeling today? Share your thoughts and let's discover the emotions together!";
pub const BUTTON_LABEL: &str = "Analyze My Emotions";
pub const BUTTON_LOADING_LABEL: &str = "Analyzing your emotions...";

const HEADER_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const ERROR_PANEL_HEIGHT: u16 = 3;
const RESULT_PANEL_HEIGHT: u16 = 6;
const FOOTER_HEIGHT: u16 = 1;

/// Main draw function.
pub fn draw<C>(frame: &mut Frame, app: &App<C>)
where
    C: Analyze + Send + Sync + 'static,
{
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let panel_height = match app.request_state() {
        RequestState::Succeeded(_) => RESULT_PANEL_HEIGHT,
        RequestState::Failed(_) => ERROR_PANEL_HEIGHT,
        RequestState::Idle | RequestState::Submitting => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title + subtitle
            Constraint::Min(3),                // Input
            Constraint::Length(BUTTON_HEIGHT), // Button
            Constraint::Length(panel_height),  // Result or error
            Constraint::Length(FOOTER_HEIGHT), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], &palette, &glyphs);
    draw_input(frame, app, chunks[1], &palette);
    draw_button(frame, app, chunks[2], &palette);
    match app.request_state() {
        RequestState::Succeeded(result) => draw_result(frame, result, chunks[3], &palette, &glyphs),
        RequestState::Failed(message) => draw_error(frame, message, chunks[3], &palette, &glyphs),
        RequestState::Idle | RequestState::Submitting => {}
    }
    draw_footer(frame, app, chunks[4], &palette);
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.sparkle), Style::default().fg(palette.accent)),
            Span::styled(TITLE, styles::title(palette)),
            Span::styled(format!(" {}", glyphs.sparkle), Style::default().fg(palette.accent)),
        ]),
        Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(palette.text_secondary),
        )),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn draw_input<C>(frame: &mut Frame, app: &App<C>, area: Rect, palette: &Palette)
where
    C: Analyze + Send + Sync + 'static,
{
    let editable = !app.is_loading();
    let border_style = if editable {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {INPUT_LABEL} "),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel));

    let text = app.input();
    let paragraph = if text.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )))
    } else {
        let lines: Vec<Line> = text
            .split('\n')
            .map(|line| {
                Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(palette.text_primary),
                ))
            })
            .collect();
        Paragraph::new(lines)
    };

    let inner = block.inner(area);
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);

    if editable {
        let (x, y) = cursor_offset(text, inner.width);
        let y = y.min(inner.height.saturating_sub(1));
        frame.set_cursor_position((inner.x.saturating_add(x), inner.y.saturating_add(y)));
    }
}

/// Cursor position after the last character, counting only explicit line breaks.
fn cursor_offset(text: &str, width: u16) -> (u16, u16) {
    let line_count = text.split('\n').count().max(1);
    let last_line = text.rsplit('\n').next().unwrap_or("");
    let max_x = width.saturating_sub(1);
    let x = (last_line.width() as u16).min(max_x);
    (x, (line_count - 1) as u16)
}

fn draw_button<C>(frame: &mut Frame, app: &App<C>, area: Rect, palette: &Palette)
where
    C: Analyze + Send + Sync + 'static,
{
    let (label, style) = if app.is_loading() {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        (
            format!("{spinner} {BUTTON_LOADING_LABEL}"),
            styles::button_disabled(palette),
        )
    } else if app.can_submit() {
        (BUTTON_LABEL.to_string(), styles::button_enabled(palette))
    } else {
        (BUTTON_LABEL.to_string(), styles::button_disabled(palette))
    };

    let width = (label.width() as u16)
        .saturating_add(6)
        .min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let button_area = Rect::new(x, area.y, width, area.height);

    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, button_area);
}

fn draw_result(
    frame: &mut Frame,
    result: &EmotionResult,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.success))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);

    let emoji = sanitize_terminal_text(result.emoji());
    let emotion = sanitize_terminal_text(result.emotion());
    let bar_width = inner.width;
    let filled = confidence_bar_width(result.confidence(), bar_width);

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{emoji} ")),
            Span::styled(emotion.into_owned(), styles::emotion_name(palette)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format_confidence(result.confidence()),
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(vec![
            Span::styled(
                glyphs.bar_filled.repeat(usize::from(filled)),
                Style::default().fg(palette.primary),
            ),
            Span::styled(
                glyphs.bar_empty.repeat(usize::from(bar_width - filled)),
                Style::default().fg(palette.track),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_error(
    frame: &mut Frame,
    message: &ErrorMessage,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.error))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.error_bg));

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", glyphs.error),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.as_str().to_string(), Style::default().fg(palette.error)),
    ]);
    let paragraph = Paragraph::new(line)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_footer<C>(frame: &mut Frame, app: &App<C>, area: Rect, palette: &Palette)
where
    C: Analyze + Send + Sync + 'static,
{
    let theme_hint = format!(" theme: {}  ", app.ui_options().theme.toggle().as_str());
    let hints = vec![
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" analyze  ", styles::key_hint(palette)),
        Span::styled("Alt+Enter", styles::key_highlight(palette)),
        Span::styled(" newline  ", styles::key_hint(palette)),
        Span::styled("Ctrl+U", styles::key_highlight(palette)),
        Span::styled(" clear  ", styles::key_hint(palette)),
        Span::styled("Ctrl+T", styles::key_highlight(palette)),
        Span::styled(theme_hint, styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ];
    let footer = Paragraph::new(Line::from(hints)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// `Confidence: NN.N%` for a confidence in `[0, 1]`. Out-of-range values are shown as given.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("Confidence: {:.1}%", confidence * 100.0)
}

/// Filled cells of a `width`-cell confidence bar. The confidence is clamped to `[0, 1]`
/// here only; the stored result keeps the value the service sent.
#[must_use]
pub fn confidence_bar_width(confidence: f64, width: u16) -> u16 {
    let clamped = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    let filled = (clamped * f64::from(width)).round() as u16;
    filled.min(width)
}
