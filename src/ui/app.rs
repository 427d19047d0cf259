//! Main UI application
//!
//! Draws the trail map with one marker per player, the leaderboard,
//! and a detail panel for the selected player. All values come from
//! markers computed off the current roster snapshot; the view holds
//! no player state of its own.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::board::{compute_markers, ranked, Marker, RankedPlayer};
use crate::data::TrackConfig;
use crate::roster::Roster;

/// What the main loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Re-read the roster file
    Reload,
    Quit,
}

/// Truncate a string to fit within max_len characters, adding "…" if truncated
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = name.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

/// Parse a #RRGGBB hex string into a terminal color
fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Main UI application
pub struct App {
    /// Selected row on the leaderboard
    selected: usize,
}

impl App {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Handle a key press. Selection moves through leaderboard order.
    pub fn handle_input(&mut self, key: KeyEvent, roster: &Roster) -> InputAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return InputAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return InputAction::Quit;
            }
            KeyCode::Char('r') => return InputAction::Reload,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < roster.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
        InputAction::None
    }

    /// Render one frame from a roster snapshot
    pub fn render(&mut self, frame: &mut Frame, config: &TrackConfig, roster: &Roster) {
        // Keep the selection valid if the roster shrank on reload
        if self.selected >= roster.len() && !roster.is_empty() {
            self.selected = roster.len() - 1;
        }

        let markers = compute_markers(config, &roster.players);
        let board = ranked(&roster.players);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(34)])
            .split(frame.area());

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(board.len() as u16 + 2),
                Constraint::Min(8),
            ])
            .split(columns[1]);

        let selected_id = board.get(self.selected).map(|r| r.player.id.clone());

        self.render_map(frame, columns[0], config, &markers, selected_id.as_deref());
        self.render_leaderboard(frame, side[0], &board);
        self.render_detail(frame, side[1], &markers, selected_id.as_deref());
    }

    /// Draw the trail dots and one avatar marker per player
    fn render_map(
        &self,
        frame: &mut Frame,
        area: Rect,
        config: &TrackConfig,
        markers: &[Marker],
        selected_id: Option<&str>,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" The Jungle Trail ")
            .title_bottom(" q quit | r reload | ↑/↓ select ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 2 || inner.height < 2 {
            return;
        }

        // Percent coordinates scale into the inner map area. Y grows
        // downward in both spaces, so no flip is needed.
        let scale = |x: f64, y: f64| -> (u16, u16) {
            let cx = inner.x + (x / 100.0 * (inner.width - 1) as f64).round() as u16;
            let cy = inner.y + (y / 100.0 * (inner.height - 1) as f64).round() as u16;
            (cx.min(inner.right() - 1), cy.min(inner.bottom() - 1))
        };

        let buf = frame.buffer_mut();

        // Trail first, markers on top
        for cp in &config.checkpoints {
            let (cx, cy) = scale(cp.x, cp.y);
            buf.set_string(cx, cy, "·", Style::default().fg(Color::DarkGray));
        }
        if let (Some(first), Some(last)) = (config.checkpoints.first(), config.checkpoints.last()) {
            let (sx, sy) = scale(first.x, first.y);
            buf.set_string(sx, sy, "▶", Style::default().fg(Color::Green));
            let (fx, fy) = scale(last.x, last.y);
            buf.set_string(fx, fy, "⚑", Style::default().fg(Color::Yellow));
        }

        for marker in markers {
            let (cx, cy) = scale(marker.position.x, marker.position.y);
            let color = hex_color(&marker.player.color).unwrap_or(Color::White);
            let selected = selected_id == Some(marker.player.id.as_str());

            let style = if selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };

            let glyph = if marker.player.avatar.is_empty() {
                "●"
            } else {
                marker.player.avatar.as_str()
            };
            buf.set_string(cx, cy, glyph, style);

            // Percent tag next to the selected marker, like the badge
            // text in the web version
            if selected {
                let tag = format!("{}%", marker.progress.round() as u32);
                let tag_x = cx.saturating_add(2).min(inner.right().saturating_sub(4));
                buf.set_string(tag_x, cy, tag, style);
            }
        }
    }

    /// Draw the ranked list, podium ranks highlighted
    fn render_leaderboard(&self, frame: &mut Frame, area: Rect, board: &[RankedPlayer]) {
        let lines: Vec<Line> = board
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let rank_style = match entry.rank {
                    1 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    2 => Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                    3 => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
                    _ => Style::default().fg(Color::DarkGray),
                };
                let row_style = if i == self.selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{:>2} ", entry.rank), rank_style),
                    Span::styled(format!("{} ", entry.player.avatar), row_style),
                    Span::styled(
                        format!("{:<16}", truncate_name(&entry.player.name, 16)),
                        row_style,
                    ),
                    Span::styled(format!("{:>5}", entry.player.points), row_style),
                ])
            })
            .collect();

        let widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Leaderboard "));
        frame.render_widget(widget, area);
    }

    /// Draw the tooltip panel for the selected player
    fn render_detail(
        &self,
        frame: &mut Frame,
        area: Rect,
        markers: &[Marker],
        selected_id: Option<&str>,
    ) {
        let block = Block::default().borders(Borders::ALL).title(" Player ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(marker) = markers
            .iter()
            .find(|m| selected_id == Some(m.player.id.as_str()))
        else {
            frame.render_widget(Paragraph::new("No players on the trail"), inner);
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(inner);

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", marker.player.avatar)),
                Span::styled(
                    marker.player.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("{} pts", marker.player.points)),
            Line::from(format!("{} {}", marker.current_tier.icon, marker.tier_line())),
        ];
        if marker.next_tier.is_some() {
            lines.push(Line::from(format!(
                "{} pts to next tier",
                marker.points_to_next
            )));
        }
        frame.render_widget(Paragraph::new(lines), rows[0]);

        let color = hex_color(&marker.player.color).unwrap_or(Color::Green);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(marker.progress / 100.0)
            .label(format!("{}%", marker.progress.round() as u32));
        frame.render_widget(gauge, rows[1]);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::sample_roster;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_hex_color_parses_roster_colors() {
        assert_eq!(hex_color("#FF1744"), Some(Color::Rgb(0xFF, 0x17, 0x44)));
        assert_eq!(hex_color("#00BCD4"), Some(Color::Rgb(0x00, 0xBC, 0xD4)));
        assert_eq!(hex_color("FF1744"), None);
        assert_eq!(hex_color("#fff"), None);
        assert_eq!(hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Sarah K.", 16), "Sarah K.");
        assert_eq!(truncate_name("A Very Long Player Name", 8), "A Very …");
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let roster = sample_roster();
        let mut app = App::new();

        app.handle_input(key(KeyCode::Up), &roster);
        assert_eq!(app.selected, 0);

        for _ in 0..20 {
            app.handle_input(key(KeyCode::Down), &roster);
        }
        assert_eq!(app.selected, roster.len() - 1);
    }

    #[test]
    fn test_quit_and_reload_keys() {
        let roster = sample_roster();
        let mut app = App::new();
        assert_eq!(app.handle_input(key(KeyCode::Char('q')), &roster), InputAction::Quit);
        assert_eq!(app.handle_input(key(KeyCode::Esc), &roster), InputAction::Quit);
        assert_eq!(app.handle_input(key(KeyCode::Char('r')), &roster), InputAction::Reload);
        assert_eq!(
            app.handle_input(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &roster
            ),
            InputAction::Quit
        );
        assert_eq!(app.handle_input(key(KeyCode::Char('x')), &roster), InputAction::None);
    }
}
