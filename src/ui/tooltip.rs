//! Tooltip overlay — a rounded box with the tooltip text and a small
//! arrow pointing down at the hovered cell.
//!
//! The widget only consumes a [`TooltipStyle`]; all state lives in the
//! controller.  Opacity is rendered by blending the colours toward the
//! table surface.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::tooltip::TooltipStyle;

use super::theme::Theme;

/// Below this the tooltip is indistinguishable from the surface.
const MIN_VISIBLE_OPACITY: f32 = 0.02;
const BOX_HEIGHT: u16 = 3;
const ARROW: &str = "▼";

pub struct TooltipOverlay<'a> {
    style: TooltipStyle<'a>,
    /// Origin that `style.position` is relative to.
    wrapper: Rect,
}

impl<'a> TooltipOverlay<'a> {
    pub fn new(style: TooltipStyle<'a>, wrapper: Rect) -> Self {
        Self { style, wrapper }
    }

    /// Absolute anchor cell, or `None` when it falls outside `area`.
    fn anchor(&self, area: Rect) -> Option<(u16, u16)> {
        let x = i32::from(self.wrapper.x) + self.style.position.left;
        let y = i32::from(self.wrapper.y) + self.style.position.top;
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        (x >= area.x && x < area.right() && y >= area.y && y < area.bottom()).then_some((x, y))
    }
}

impl Widget for TooltipOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let opacity = self.style.opacity;
        let Some(text) = self.style.text else {
            return;
        };
        if opacity < MIN_VISIBLE_OPACITY || area.width < 4 || area.height < BOX_HEIGHT {
            return;
        }
        let Some((ax, ay)) = self.anchor(area) else {
            return;
        };

        let text_w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let width = text_w.saturating_add(4).min(area.width);
        let x = ax
            .saturating_sub(width / 2)
            .clamp(area.x, area.right() - width);
        // Box sits directly above the arrow; pinned to the top edge when
        // there is no room.
        let y = ay.saturating_sub(BOX_HEIGHT).max(area.y);
        let popup = Rect::new(x, y, width, BOX_HEIGHT);

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::tooltip_border_style(opacity))
            .style(Theme::tooltip_style(opacity));
        Paragraph::new(Line::from(format!(" {text} ")))
            .style(Theme::tooltip_style(opacity))
            .block(block)
            .render(popup, buf);

        if ay >= popup.bottom() {
            buf.set_string(ax, ay, ARROW, Theme::tooltip_arrow_style(opacity));
        }
    }
}
