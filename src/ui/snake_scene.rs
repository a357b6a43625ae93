//! Snake game rendering.
//!
//! Uses half-block pixel rendering. Each grid cell maps to a coloured pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colours.

use super::game_common::{
    render_banner, render_info_panel_frame, render_status_bar, split_scene, Chrome,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serpent::game::{GamePhase, Snapshot};
use serpent::settings::Theme;

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub head: Color,
    pub body_bright: (f64, f64, f64),
    pub body_dim: (f64, f64, f64),
    pub food: (u8, u8, u8),
    pub empty: Color,
    pub border: Color,
    pub accent: Color,
    pub chrome: Chrome,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                head: Color::Rgb(100, 255, 100),
                body_bright: (50.0, 220.0, 50.0),
                body_dim: (20.0, 80.0, 20.0),
                food: (255, 80, 40),
                empty: Color::Rgb(12, 12, 18),
                border: Color::Rgb(80, 80, 80),
                accent: Color::Cyan,
                chrome: Chrome {
                    frame: Color::LightGreen,
                    text: Color::White,
                    muted: Color::DarkGray,
                    background: Color::Reset,
                },
            },
            Theme::Light => Self {
                head: Color::Rgb(10, 110, 30),
                body_bright: (40.0, 160.0, 60.0),
                body_dim: (150.0, 205.0, 150.0),
                food: (215, 50, 30),
                empty: Color::Rgb(232, 234, 240),
                border: Color::Rgb(150, 150, 150),
                accent: Color::Blue,
                chrome: Chrome {
                    frame: Color::Green,
                    text: Color::Black,
                    muted: Color::Gray,
                    background: Color::Rgb(245, 245, 240),
                },
            },
        }
    }

    fn body_color(&self, index: usize, snake_len: usize) -> Color {
        let t = index as f64 / (snake_len - 1).max(1) as f64;
        let mix = |a: f64, b: f64| (a * (1.0 - t) + b * t) as u8;
        Color::Rgb(
            mix(self.body_bright.0, self.body_dim.0),
            mix(self.body_bright.1, self.body_dim.1),
            mix(self.body_bright.2, self.body_dim.2),
        )
    }
}

/// Overlay title and message for phases that aren't live play.
pub fn phase_banner(phase: GamePhase, score: u32) -> Option<(&'static str, String)> {
    match phase {
        GamePhase::Running => None,
        GamePhase::Start => Some((
            "Press Space to Start",
            "Arrow keys / WASD to move \u{2022} R to restart".to_string(),
        )),
        GamePhase::Paused => Some(("Paused", "Press Space to resume".to_string())),
        GamePhase::GameOver => Some((
            "Game Over",
            format!("Final score: {} \u{2022} Press R to restart", score),
        )),
        GamePhase::Win => Some((
            "You Win!",
            format!("Final score: {} \u{2022} Press R to play again", score),
        )),
    }
}

/// Render the whole game screen.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let palette = Palette::for_theme(snap.settings.theme);
    let field_rows = (snap.grid_size as u16).div_ceil(2) + 2;
    let chrome = palette.chrome;
    let layout = split_scene(frame, area, " Serpent ", field_rows, &chrome);

    render_play_field(frame, layout.play_field, snap, &palette);

    if let Some((title, message)) = phase_banner(snap.phase, snap.score) {
        let color = match snap.phase {
            GamePhase::GameOver => Color::Red,
            GamePhase::Win => Color::Yellow,
            _ => chrome.text,
        };
        render_banner(frame, layout.play_field, title, &message, color, &chrome);
    }

    render_status_bar_content(frame, layout.status_bar, snap, &palette);
    render_info_panel(frame, layout.info_panel, snap, &palette);
}

/// Render the play field using half-block pixel rendering.
fn render_play_field(frame: &mut Frame, area: Rect, snap: &Snapshot, palette: &Palette) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid = snap.grid_size.max(0) as usize;

    // ── Build colour grid (game coordinates) ─────────────────────
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid]; grid];

    // Food pulses gently with the tick count
    if let Some(food) = snap.food {
        let (fx, fy) = (food.x as usize, food.y as usize);
        if fx < grid && fy < grid {
            let pulse = ((snap.tick_count % 20) as f64 / 20.0 * std::f64::consts::PI * 2.0).sin();
            let (r, g, b) = palette.food;
            let g = (g as f64 + pulse * 30.0).clamp(0.0, 255.0) as u8;
            let b = (b as f64 + pulse * 20.0).clamp(0.0, 255.0) as u8;
            pixels[fy][fx] = Some(Color::Rgb(r, g, b));
        }
    }

    let snake_len = snap.snake.len();
    for (i, seg) in snap.snake.iter().enumerate() {
        let (sx, sy) = (seg.x as usize, seg.y as usize);
        if sx < grid && sy < grid {
            pixels[sy][sx] = Some(if Some(*seg) == snap.head {
                palette.head
            } else {
                palette.body_color(i, snake_len)
            });
        }
    }

    // ── Layout dimensions ───────────────────────────────────────
    let content_rows = grid.div_ceil(2);
    let render_w = ((grid + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let border_style = Style::default().fg(palette.border);

    // ── Top border with score ───────────────────────────────────
    {
        let score_val = snap.score.to_string();
        let label = "Score: ";
        let score_full_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_TL.to_string(), border_style)];
        if pad_before > 0 {
            spans.push(Span::styled(
                BORDER_H.to_string().repeat(pad_before),
                border_style,
            ));
        }
        spans.push(Span::styled(label, border_style));
        spans.push(Span::styled(score_val, Style::default().fg(palette.chrome.text)));
        if pad_after > 0 {
            spans.push(Span::styled(
                BORDER_H.to_string().repeat(pad_after),
                border_style,
            ));
        }
        spans.push(Span::styled(BORDER_TR.to_string(), border_style));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    // ── Game rows ───────────────────────────────────────────────
    let empty_row: Vec<Option<Color>> = vec![None; grid];
    for term_row in 0..content_rows {
        let top_gy = term_row * 2;
        let bot_gy = term_row * 2 + 1;
        let top_row = if top_gy < grid { &pixels[top_gy] } else { &empty_row };
        let bot_row = if bot_gy < grid { &pixels[bot_gy] } else { &empty_row };

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border_style)];

        // Batch consecutive cells with the same colours
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()) {
            let fg = top_c.unwrap_or(palette.empty);
            let bg = bot_c.unwrap_or(palette.empty);

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(BORDER_V.to_string(), border_style));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let s = format!(
            "{}{}{}",
            BORDER_BL,
            BORDER_H.to_string().repeat(inner_w),
            BORDER_BR
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(s, border_style))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snap: &Snapshot, palette: &Palette) {
    let (status, color, controls): (&str, Color, &[(&str, &str)]) = match snap.phase {
        GamePhase::Start => (
            "Ready",
            palette.chrome.frame,
            &[("[Space]", "Start"), ("[Arrows]", "Move"), ("[Q]", "Quit")],
        ),
        GamePhase::Running => (
            "Slither!",
            palette.chrome.frame,
            &[("[Arrows]", "Move"), ("[Space]", "Pause"), ("[R]", "Restart")],
        ),
        GamePhase::Paused => (
            "Paused",
            Color::Yellow,
            &[("[Space]", "Resume"), ("[R]", "Restart"), ("[Q]", "Quit")],
        ),
        GamePhase::GameOver => (
            "Game Over",
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
        GamePhase::Win => (
            "Grid conquered!",
            Color::Yellow,
            &[("[R]", "Play again"), ("[Q]", "Quit")],
        ),
    };
    render_status_bar(frame, area, status, color, controls, &palette.chrome);
}

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &Snapshot, palette: &Palette) {
    let chrome = &palette.chrome;
    let inner = render_info_panel_frame(frame, area, chrome);
    let label = Style::default().fg(chrome.muted);
    let value = Style::default().fg(chrome.text);
    let settings = snap.settings;

    let row = |name: &'static str, text: String, style: Style| {
        Line::from(vec![Span::styled(name, label), Span::styled(text, style)])
    };

    let lines: Vec<Line> = vec![
        row(
            "Score: ",
            snap.score.to_string(),
            value.add_modifier(Modifier::BOLD),
        ),
        row("Best:  ", snap.high_score.to_string(), value),
        row("Length: ", snap.snake.len().to_string(), value),
        row("Speed: ", format!("{} ms", snap.tick_interval_ms), value),
        Line::from(""),
        row(
            "[1-3] ",
            settings.difficulty.name().to_string(),
            Style::default().fg(palette.accent),
        ),
        row("[X] Wrap: ", on_off(settings.wrap_mode).to_string(), value),
        row(
            "[V] Scaling: ",
            on_off(settings.speed_scaling).to_string(),
            value,
        ),
        row(
            "[M] Sound: ",
            on_off(settings.audio_enabled).to_string(),
            value,
        ),
        row("[T] Theme: ", settings.theme.name().to_string(), value),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(palette.head)),
            Span::styled("Head", label),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(palette.body_color(0, 2)),
            ),
            Span::styled("Body", label),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(Color::Rgb(palette.food.0, palette.food.1, palette.food.2)),
            ),
            Span::styled("Food", label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};
    use serpent::game::{Grid, SnakeGame};
    use serpent::settings::Settings;

    fn render_to_text(game: &SnakeGame) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_snake_scene(frame, area, &game.snapshot());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn game() -> SnakeGame {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        SnakeGame::new(Grid::default(), Settings::default(), 7, &mut rng)
    }

    #[test]
    fn test_phase_banner_texts() {
        assert!(phase_banner(GamePhase::Running, 0).is_none());
        assert_eq!(phase_banner(GamePhase::Paused, 0).unwrap().0, "Paused");
        let (title, message) = phase_banner(GamePhase::GameOver, 12).unwrap();
        assert_eq!(title, "Game Over");
        assert!(message.starts_with("Final score: 12"));
        assert_eq!(phase_banner(GamePhase::Win, 576).unwrap().0, "You Win!");
    }

    #[test]
    fn test_start_screen_renders_prompt_and_info() {
        let text = render_to_text(&game());
        assert!(text.contains("Press Space to Start"));
        assert!(text.contains("Serpent"));
        assert!(text.contains("Best:  7"));
        assert!(text.contains("140 ms"));
    }

    #[test]
    fn test_running_has_no_banner() {
        let mut game = game();
        game.phase = GamePhase::Running;
        let text = render_to_text(&game);
        assert!(!text.contains("Press Space to Start"));
        assert!(text.contains("Slither!"));
    }

    #[test]
    fn test_light_theme_renders() {
        let mut game = game();
        game.settings.theme = Theme::Light;
        game.phase = GamePhase::GameOver;
        let text = render_to_text(&game);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Light"));
    }

    #[test]
    fn test_theme_background_reaches_chrome() {
        let mut game = game();
        game.settings.theme = Theme::Light;
        let background = Palette::for_theme(Theme::Light).chrome.background;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_snake_scene(frame, area, &game.snapshot());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        // Outer frame, status bar and info panel
        for (x, y) in [(0, 0), (2, 22), (60, 20)] {
            assert_eq!(buffer.get(x, y).bg, background, "cell ({x}, {y})");
        }
    }
}
