//! Tooltip controller — the hover state machine behind the overlay.
//!
//! The controller is fed pointer events already resolved to a
//! [`HoverTarget`] (what the pointer is over, plus its bounding box) and
//! produces a [`TooltipStyle`] each frame: text, opacity, cursor shape and
//! position relative to the wrapper.  It never looks at records directly,
//! only at the tooltip attribute exposed by the hovered cell.
//!
//! Show/hide transitions are not applied on the spot.  A request first
//! drops the running transition, then goes through the
//! [`FrameScheduler`] and is started by [`TooltipController::on_frame`].

use std::time::{Duration, Instant};

use super::animation::{Animation, FrameScheduler, Keyframe};

// ───────────────────────────────────────── config ────────────

/// Tunables for the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Fade-in length.
    pub show_duration: Duration,
    /// Fade-out length; longer than `show_duration` so the tooltip lingers.
    pub hide_duration: Duration,
    pub visible_opacity: f32,
    pub hidden_opacity: f32,
    /// Pointer shape name while over a tooltip-bearing cell.
    pub help_cursor: String,
    /// Pointer shape name everywhere else.
    pub auto_cursor: String,
    /// Rows between the top of the hovered cell and the tooltip anchor.
    pub vertical_inset: u16,
    /// Anchor at the horizontal centre of the cell instead of its left edge.
    pub center_on_cell: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_duration: Duration::from_millis(1000),
            hide_duration: Duration::from_millis(3000),
            visible_opacity: 1.0,
            hidden_opacity: 0.0,
            help_cursor: "help".into(),
            auto_cursor: "default".into(),
            vertical_inset: 1,
            center_on_cell: true,
        }
    }
}

// ───────────────────────────────────────── geometry ──────────

/// Axis-aligned box in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// Tooltip anchor relative to the wrapper's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub top: i32,
    pub left: i32,
}

// ───────────────────────────────────────── events ────────────

/// Element category under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    HeaderCell,
    DataCell,
    /// Inside the wrapper but not on a cell (borders, padding).
    Other,
}

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTarget<'a> {
    pub kind: TargetKind,
    pub tooltip: Option<&'a str>,
    pub row: Option<usize>,
    /// `None` when no layout has happened yet.
    pub bounds: Option<Bounds>,
}

impl<'a> HoverTarget<'a> {
    pub fn other() -> Self {
        Self {
            kind: TargetKind::Other,
            tooltip: None,
            row: None,
            bounds: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    Help,
    #[default]
    Auto,
}

impl CursorStyle {
    /// Pointer shape name configured for this style.
    pub fn shape<'c>(self, config: &'c TooltipConfig) -> &'c str {
        match self {
            CursorStyle::Help => &config.help_cursor,
            CursorStyle::Auto => &config.auto_cursor,
        }
    }
}

/// Everything the overlay needs to draw the tooltip for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle<'a> {
    pub text: Option<&'a str>,
    pub opacity: f32,
    pub cursor: CursorStyle,
    pub position: Position,
}

// ───────────────────────────────────────── controller ────────

#[derive(Debug)]
pub struct TooltipController {
    config: TooltipConfig,
    text: Option<String>,
    visible: bool,
    cursor: CursorStyle,
    position: Position,
    /// Record index of the row the tooltip is showing for, while visible.
    active_row: Option<usize>,
    animation: Option<Animation>,
    frames: FrameScheduler,
}

impl TooltipController {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            text: None,
            visible: false,
            cursor: CursorStyle::Auto,
            position: Position::default(),
            active_row: None,
            animation: None,
            frames: FrameScheduler::default(),
        }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    #[cfg(test)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row the tooltip is showing for; `None` while hidden.
    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    #[cfg(test)]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// The pointer moved onto `target`.
    pub fn pointer_over(&mut self, target: &HoverTarget<'_>, wrapper: Option<Bounds>) {
        match (target.kind, target.tooltip) {
            (TargetKind::DataCell, Some(tooltip)) => {
                let row_changed = !self.visible || self.active_row != target.row;
                self.text = Some(tooltip.to_string());
                self.visible = true;
                self.cursor = CursorStyle::Help;
                self.active_row = target.row;
                self.position = self.anchor(target.bounds, wrapper);
                if row_changed {
                    tracing::debug!(row = ?target.row, "tooltip show");
                    self.request_animation(Keyframe::PopIn);
                }
            }
            _ => self.hide("no tooltip under pointer"),
        }
    }

    /// The pointer left the wrapper.
    pub fn pointer_leave(&mut self) {
        self.hide("pointer left wrapper");
    }

    /// Hide at once, skipping the fade-out.
    pub fn dismiss(&mut self, now: Instant) {
        self.frames.cancel();
        self.animation = Some(Animation::start(Keyframe::PopOut, Duration::ZERO, now));
        self.visible = false;
        self.cursor = CursorStyle::Auto;
        self.active_row = None;
        tracing::debug!("tooltip dismissed");
    }

    /// Apply the pending animation request, if any.  Call once per frame,
    /// before drawing.  Returns `true` when an animation was started.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let Some(request) = self.frames.take_due() else {
            return false;
        };
        self.animation = Some(Animation::start(request.keyframe, request.duration, now));
        true
    }

    /// Whether redraws are still needed to finish the current transition.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.frames.pending().is_some()
            || self
                .animation
                .as_ref()
                .is_some_and(|a| !a.is_finished(now))
    }

    /// Current opacity.  While a request is pending this is the starting
    /// opacity of the requested transition.
    pub fn opacity(&self, now: Instant) -> f32 {
        let (hidden, visible) = (self.config.hidden_opacity, self.config.visible_opacity);
        if let Some(request) = self.frames.pending() {
            return match request.keyframe {
                Keyframe::PopIn => hidden,
                Keyframe::PopOut => visible,
            };
        }
        match &self.animation {
            Some(anim) => anim.opacity(now, hidden, visible),
            None if self.visible => visible,
            None => hidden,
        }
    }

    pub fn style(&self, now: Instant) -> TooltipStyle<'_> {
        TooltipStyle {
            text: self.text.as_deref(),
            opacity: self.opacity(now),
            cursor: self.cursor,
            position: self.position,
        }
    }

    fn hide(&mut self, reason: &str) {
        let was_visible = self.visible;
        self.visible = false;
        self.cursor = CursorStyle::Auto;
        self.active_row = None;
        if was_visible {
            tracing::debug!(reason, "tooltip hide");
            self.request_animation(Keyframe::PopOut);
        }
    }

    /// Reset the running transition and queue `keyframe` for the next frame.
    fn request_animation(&mut self, keyframe: Keyframe) {
        let duration = match keyframe {
            Keyframe::PopIn => self.config.show_duration,
            Keyframe::PopOut => self.config.hide_duration,
        };
        self.animation = None;
        self.frames.schedule(keyframe, duration);
    }

    fn anchor(&self, cell: Option<Bounds>, wrapper: Option<Bounds>) -> Position {
        let cell = cell.unwrap_or_default();
        let wrapper = wrapper.unwrap_or_default();
        let top = i32::from(cell.y) - i32::from(wrapper.y) - i32::from(self.config.vertical_inset);
        let mut left = i32::from(cell.x) - i32::from(wrapper.x);
        if self.config.center_on_cell {
            left += i32::from(cell.width) / 2;
        }
        Position { top, left }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::row::{header_row, render_row};

    const WRAPPER: Bounds = Bounds::new(2, 1, 60, 10);

    fn data_target(tooltip: &str, row: usize, bounds: Bounds) -> HoverTarget<'_> {
        HoverTarget {
            kind: TargetKind::DataCell,
            tooltip: Some(tooltip),
            row: Some(row),
            bounds: Some(bounds),
        }
    }

    fn header_target() -> HoverTarget<'static> {
        HoverTarget {
            kind: TargetKind::HeaderCell,
            tooltip: None,
            row: None,
            bounds: Some(Bounds::new(3, 2, 10, 1)),
        }
    }

    fn controller() -> TooltipController {
        TooltipController::new(TooltipConfig::default())
    }

    #[test]
    fn starts_hidden_with_auto_cursor() {
        let c = controller();
        assert!(!c.is_visible());
        assert_eq!(c.cursor(), CursorStyle::Auto);
        assert_eq!(c.text(), None);
        assert_eq!(c.opacity(Instant::now()), 0.0);
    }

    #[test]
    fn single_record_scenario() {
        let row = render_row(0, "Tech", "AI breakthrough");
        let cell = &row.cells[2];
        let mut c = controller();

        c.pointer_over(
            &data_target(cell.tooltip.as_deref().unwrap(), 0, Bounds::new(20, 4, 20, 1)),
            Some(WRAPPER),
        );
        assert!(c.is_visible());
        assert_eq!(c.text(), Some("category: Tech, headline: AI breakthrough"));
        assert_eq!(c.cursor(), CursorStyle::Help);

        c.pointer_leave();
        assert!(!c.is_visible());
        assert_eq!(c.cursor(), CursorStyle::Auto);
    }

    #[test]
    fn position_is_relative_to_wrapper_with_inset_and_centering() {
        let mut c = controller();
        c.pointer_over(&data_target("t", 0, Bounds::new(20, 4, 10, 1)), Some(WRAPPER));
        assert_eq!(c.position(), Position { top: 2, left: 23 });

        let mut c = TooltipController::new(TooltipConfig {
            center_on_cell: false,
            ..TooltipConfig::default()
        });
        c.pointer_over(&data_target("t", 0, Bounds::new(20, 4, 10, 1)), Some(WRAPPER));
        assert_eq!(c.position(), Position { top: 2, left: 18 });
    }

    #[test]
    fn missing_bounds_fall_back_to_zero() {
        let mut c = TooltipController::new(TooltipConfig {
            vertical_inset: 0,
            ..TooltipConfig::default()
        });
        let target = HoverTarget {
            bounds: None,
            ..data_target("t", 0, Bounds::default())
        };
        c.pointer_over(&target, None);
        assert_eq!(c.position(), Position::default());
        assert!(c.is_visible());
    }

    #[test]
    fn moving_to_header_hides_and_keeps_text() {
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 10, 1)), Some(WRAPPER));
        c.pointer_over(&header_target(), Some(WRAPPER));
        assert!(!c.is_visible());
        assert_eq!(c.cursor(), CursorStyle::Auto);
        assert_eq!(c.text(), Some("a"));
    }

    #[test]
    fn header_cells_never_show_the_tooltip() {
        let header = header_row();
        let mut c = controller();
        for cell in &header.cells {
            let target = HoverTarget {
                kind: TargetKind::HeaderCell,
                tooltip: cell.tooltip.as_deref(),
                row: cell.row,
                bounds: None,
            };
            c.pointer_over(&target, Some(WRAPPER));
            assert!(!c.is_visible());
        }
    }

    #[test]
    fn entering_header_from_outside_does_not_animate() {
        let mut c = controller();
        c.pointer_over(&header_target(), Some(WRAPPER));
        assert!(!c.on_frame(Instant::now()));
        assert!(c.animation().is_none());
    }

    #[test]
    fn leaving_always_hides() {
        let mut c = controller();
        c.pointer_leave();
        assert!(!c.is_visible());

        c.pointer_over(&data_target("a", 1, Bounds::new(3, 4, 10, 1)), Some(WRAPPER));
        c.pointer_over(&HoverTarget::other(), Some(WRAPPER));
        c.pointer_leave();
        assert!(!c.is_visible());

        c.pointer_over(&data_target("b", 2, Bounds::new(3, 5, 10, 1)), Some(WRAPPER));
        c.pointer_leave();
        assert!(!c.is_visible());
        assert_eq!(c.cursor(), CursorStyle::Auto);
    }

    #[test]
    fn same_row_repositions_without_restarting() {
        let t0 = Instant::now();
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        assert!(c.on_frame(t0));

        c.pointer_over(&data_target("a", 0, Bounds::new(12, 3, 20, 1)), Some(WRAPPER));
        assert!(!c.on_frame(t0 + Duration::from_millis(10)));
        assert_eq!(c.position().left, 20);
        assert_eq!(c.animation().map(|a| a.started), Some(t0));
    }

    #[test]
    fn new_row_restarts_show() {
        let t0 = Instant::now();
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        c.on_frame(t0);
        let t1 = t0 + Duration::from_millis(400);
        c.pointer_over(&data_target("b", 1, Bounds::new(3, 4, 6, 1)), Some(WRAPPER));
        assert_eq!(c.opacity(t1), 0.0);
        assert!(c.on_frame(t1));
        assert_eq!(c.animation().map(|a| a.started), Some(t1));
        assert_eq!(c.text(), Some("b"));
    }

    #[test]
    fn fade_out_lingers_longer_than_fade_in() {
        let t0 = Instant::now();
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        c.on_frame(t0);
        let shown = t0 + Duration::from_millis(1000);
        assert_eq!(c.opacity(shown), 1.0);

        c.pointer_leave();
        c.on_frame(shown);
        let later = shown + Duration::from_millis(1500);
        let o = c.opacity(later);
        assert!(o > 0.0 && o < 1.0, "still fading at {o}");
        assert!(c.is_animating(later));
        assert_eq!(c.opacity(shown + Duration::from_millis(3000)), 0.0);
        assert!(!c.is_animating(shown + Duration::from_millis(3000)));
    }

    #[test]
    fn rehover_overrides_pending_hide() {
        let t0 = Instant::now();
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        c.on_frame(t0);

        // Hide then re-hover before the next frame: the hide must never apply.
        c.pointer_leave();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        let t1 = t0 + Duration::from_millis(1200);
        assert!(c.on_frame(t1));
        let anim = c.animation().unwrap();
        assert_eq!(anim.keyframe, Keyframe::PopIn);
        assert!(!c.on_frame(t1 + Duration::from_millis(16)));
        assert_eq!(c.opacity(t1 + Duration::from_millis(1000)), 1.0);
    }

    #[test]
    fn rehover_resets_in_flight_hide() {
        let t0 = Instant::now();
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        c.on_frame(t0);
        c.pointer_leave();
        let t1 = t0 + Duration::from_secs(2);
        c.on_frame(t1);
        assert_eq!(c.animation().unwrap().keyframe, Keyframe::PopOut);

        let t2 = t1 + Duration::from_millis(500);
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        // Reset: no stale fade-out in flight, restart from hidden.
        assert!(c.animation().is_none());
        assert_eq!(c.opacity(t2), 0.0);
        c.on_frame(t2);
        assert_eq!(c.animation().unwrap().keyframe, Keyframe::PopIn);
        assert_eq!(c.opacity(t2 + Duration::from_millis(1000)), 1.0);
    }

    #[test]
    fn dismiss_hides_immediately() {
        let t0 = Instant::now();
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        c.on_frame(t0);
        let t1 = t0 + Duration::from_millis(1000);
        c.dismiss(t1);
        assert!(!c.is_visible());
        assert_eq!(c.cursor(), CursorStyle::Auto);
        assert_eq!(c.opacity(t1), 0.0);
        assert!(!c.on_frame(t1));
    }

    #[test]
    fn dismiss_cancels_pending_show() {
        let t0 = Instant::now();
        let mut c = controller();
        c.pointer_over(&data_target("a", 0, Bounds::new(3, 3, 6, 1)), Some(WRAPPER));
        c.dismiss(t0);
        assert!(!c.on_frame(t0));
        assert_eq!(c.opacity(t0 + Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn cursor_shape_follows_config() {
        let config = TooltipConfig::default();
        assert_eq!(CursorStyle::Help.shape(&config), "help");
        assert_eq!(CursorStyle::Auto.shape(&config), "default");
    }
}
