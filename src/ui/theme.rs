//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

/// Table surface.  Tooltip fades blend toward this colour.
const SURFACE: (u8, u8, u8) = (18, 18, 26);
const TOOLTIP_BG: (u8, u8, u8) = (52, 56, 84);
const TOOLTIP_FG: (u8, u8, u8) = (240, 240, 250);
const TOOLTIP_BORDER: (u8, u8, u8) = (130, 140, 200);

impl Theme {
    // ── table ──────────────────────────────────────────────────
    pub fn surface_style() -> Style {
        Style::default().bg(rgb(SURFACE))
    }

    pub fn header_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn number_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn cell_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn hovered_row_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    // ── tooltip ────────────────────────────────────────────────
    /// Tooltip body at `opacity` (0 = fully blended into the surface).
    pub fn tooltip_style(opacity: f32) -> Style {
        Style::default()
            .fg(blend(SURFACE, TOOLTIP_FG, opacity))
            .bg(blend(SURFACE, TOOLTIP_BG, opacity))
    }

    pub fn tooltip_border_style(opacity: f32) -> Style {
        Style::default()
            .fg(blend(SURFACE, TOOLTIP_BORDER, opacity))
            .bg(blend(SURFACE, TOOLTIP_BG, opacity))
    }

    /// The pointer arrow sits on the surface, not on the tooltip body.
    pub fn tooltip_arrow_style(opacity: f32) -> Style {
        Style::default()
            .fg(blend(SURFACE, TOOLTIP_BORDER, opacity))
            .bg(rgb(SURFACE))
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Linear blend from `from` to `to`; `t` is clamped to `0.0..=1.0`.
fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}
