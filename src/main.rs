//! A news-headline table with animated hover tooltips.
//!
//! Run the binary and point at a row: a tooltip with the row's category and
//! headline fades in above the cell, and lingers while fading out once the
//! pointer moves away.  Run with `--print-config` to see the effective
//! configuration file.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr, Stderr};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
    terminal::TerminalGuard,
};
use crate::config::{clamp_duration, AppConfig};
use crate::core::data::TABLE_DATA;
use crate::core::tooltip::TooltipController;
use crate::ui::{
    layout::AppLayout,
    table::{TableGeometry, TableWidget},
    theme::Theme,
    tooltip::TooltipOverlay,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Headline table with hover tooltips")]
struct Cli {
    /// Fade-in duration in milliseconds (overrides the config file).
    #[arg(long = "show-ms")]
    show_ms: Option<u64>,

    /// Fade-out duration in milliseconds (overrides the config file).
    #[arg(long = "hide-ms")]
    hide_ms: Option<u64>,

    /// Anchor the tooltip at the left edge of the cell instead of its centre.
    #[arg(long = "no-center")]
    no_center: bool,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long = "save-config")]
    save_config: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(ms) = self.show_ms {
            config.tooltip.show_duration = clamp_duration(ms);
        }
        if let Some(ms) = self.hide_ms {
            config.tooltip.hide_duration = clamp_duration(ms);
        }
        if self.no_center {
            config.tooltip.center_on_cell = false;
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    cli.apply_overrides(&mut config);

    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }
    if cli.save_config {
        let path = config.save()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let frame_interval = Duration::from_millis(config.frame_ms);
    let mut state = AppState::new(TABLE_DATA, config);

    // ── terminal setup ────────────────────────────────────────
    let _guard = TerminalGuard::acquire(&state.config.tooltip.auto_cursor)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(frame_interval);

    // ── event loop ────────────────────────────────────────────
    let mut dirty = true;
    let mut drawn_mid_transition = false;
    loop {
        if dirty {
            let now = Instant::now();
            // Start any transition requested since the last frame, then draw.
            state.tooltip.on_frame(now);
            draw(&mut terminal, &mut state, now)?;
            drawn_mid_transition = state.tooltip.is_animating(now);
        }

        let Some(event) = events.recv().await else {
            break;
        };
        dirty = match event {
            AppEvent::Key(k) => {
                handler::handle_key(&mut state, k, Instant::now());
                true
            }
            AppEvent::Mouse(m) => {
                handler::handle_mouse(&mut state, m);
                true
            }
            AppEvent::FocusLost => {
                handler::handle_focus_lost(&mut state);
                true
            }
            AppEvent::Resize => true,
            AppEvent::Tick => {
                redraw_on_tick(drawn_mid_transition, &state.tooltip, Instant::now())
            }
        };

        if state.should_quit {
            break;
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

/// Whether an idle tick needs a frame.  A frame drawn mid-transition shows
/// an intermediate opacity, so one more follows once the ramp has ended.
fn redraw_on_tick(drawn_mid_transition: bool, tooltip: &TooltipController, now: Instant) -> bool {
    drawn_mid_transition || tooltip.is_animating(now)
}

/// Render one frame and sync the terminal pointer shape.
fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    state: &mut AppState,
    now: Instant,
) -> Result<()> {
    let hint = state.config.status_bar_hint();
    terminal.draw(|frame| {
        let area = frame.area();
        state.terminal_area = area;
        let layout = AppLayout::from_area(area);
        let geometry = TableGeometry::compute(layout.table_area, &state.header, &state.rows);

        frame.render_widget(
            TableWidget::new(&state.header, &state.rows).highlight(state.tooltip.active_row()),
            layout.table_area,
        );
        frame.render_widget(
            TooltipOverlay::new(state.tooltip.style(now), geometry.wrapper),
            area,
        );

        let pointer = state.tooltip.cursor().shape(state.tooltip.config());
        let status = Paragraph::new(format!("{hint} | pointer: {pointer}"))
            .style(Theme::status_bar_style());
        frame.render_widget(status, layout.status_area);
    })?;

    let cursor = state.tooltip.cursor();
    if state.applied_cursor != Some(cursor) {
        TerminalGuard::set_pointer_shape(
            terminal.backend_mut(),
            cursor.shape(state.tooltip.config()),
        )?;
        state.applied_cursor = Some(cursor);
        tracing::debug!(?cursor, "pointer shape updated");
    }
    Ok(())
}
