//! Screen chrome shared by the scene: outer frame, status bar, info panel
//! and phase banners. Every piece draws in the active theme's colours.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const INFO_PANEL_WIDTH: u16 = 26;
const STATUS_BAR_HEIGHT: u16 = 2;

/// Theme colours for everything that isn't the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub frame: Color,
    pub text: Color,
    pub muted: Color,
    /// Screen background. `Color::Reset` keeps the terminal's own.
    pub background: Color,
}

impl Chrome {
    fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

/// Areas of the scene, all inside the outer frame.
pub struct SceneLayout {
    /// Board area, exactly `field_rows` tall when the terminal allows.
    pub play_field: Rect,
    /// Two lines pinned to the bottom of the left column.
    pub status_bar: Rect,
    /// Right column, `INFO_PANEL_WIDTH` wide.
    pub info_panel: Rect,
}

/// Paint the background, draw the titled outer frame and split the inside.
///
/// ```text
/// ┌─ Serpent ───────────────────────┬─ Info ──────┐
/// │ [play field, field_rows tall]   │             │
/// │                                 │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn split_scene(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field_rows: u16,
    chrome: &Chrome,
) -> SceneLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(chrome.frame).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chrome.frame))
        .style(chrome.base());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(field_rows),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(columns[0]);

    SceneLayout {
        play_field: rows[0],
        status_bar: rows[2],
        info_panel: columns[1],
    }
}

/// Status line in `status_color`, then a line of `[key] action` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    status_color: Color,
    controls: &[(&str, &str)],
    chrome: &Chrome,
) {
    if area.height == 0 {
        return;
    }

    let key_style = Style::default().fg(chrome.text).add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(chrome.muted);
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}"), hint_style),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(status, Style::default().fg(status_color))),
        Line::from(hints),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(chrome.base())
            .alignment(Alignment::Center),
        area,
    );
}

/// Bordered " Info " box. Returns the area inside the border.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect, chrome: &Chrome) -> Rect {
    let block = Block::default()
        .title(Span::styled(" Info ", Style::default().fg(chrome.frame)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chrome.muted))
        .style(chrome.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Compact 4-line banner centred in `area`. Only the banner is cleared, so
/// the board stays visible around it.
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    title_color: Color,
    chrome: &Chrome,
) {
    const BANNER_HEIGHT: u16 = 4;
    if area.height < BANNER_HEIGHT || area.width < 10 {
        return;
    }

    let width = (message.chars().count().max(title.chars().count()) as u16 + 4).min(area.width);
    let banner_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - BANNER_HEIGHT) / 2,
        width,
        height: BANNER_HEIGHT,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color))
        .style(chrome.base());
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(chrome.text))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
