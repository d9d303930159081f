//! User configuration — tooltip tunables, keybindings and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/headline-tips/config.toml` (default
//! `~/.config/headline-tips/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::tooltip::TooltipConfig;

/// Longest accepted show/hide duration.
pub const MAX_DURATION_MS: u64 = 60_000;

// ───────────────────────────────────────── errors ────────────

/// A config line that could not be applied.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
    #[error("no valid key bindings in `{0}`")]
    NoBindings(String),
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Hide the tooltip at once, skipping the fade-out.
    Dismiss,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[Action::Dismiss, Action::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Action::Dismiss => "Dismiss Tooltip",
            Action::Quit => "Quit",
        }
    }

    fn config_key(self) -> &'static str {
        match self {
            Action::Dismiss => "dismiss",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "dismiss" => Some(Action::Dismiss),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Named keys accepted in the config file.  The first spelling of each
/// key is the one written back.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Esc", KeyCode::Esc),
    ("Escape", KeyCode::Esc),
    ("Enter", KeyCode::Enter),
    ("Return", KeyCode::Enter),
    ("Space", KeyCode::Char(' ')),
    ("Tab", KeyCode::Tab),
    ("Backspace", KeyCode::Backspace),
    ("Delete", KeyCode::Delete),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
];

const MODIFIER_NAMES: &[(&str, KeyModifiers)] = &[
    ("Ctrl", KeyModifiers::CONTROL),
    ("Alt", KeyModifiers::ALT),
    ("Shift", KeyModifiers::SHIFT),
];

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Config-file / status-bar form (e.g. `"Ctrl+c"`, `"Esc"`, `"q"`).
    pub fn to_config_string(&self) -> String {
        let mut s: String = MODIFIER_NAMES
            .iter()
            .filter(|(_, m)| self.modifiers.contains(*m))
            .map(|(name, _)| format!("{name}+"))
            .collect();
        match (self.code, NAMED_KEYS.iter().find(|(_, c)| *c == self.code)) {
            (_, Some((name, _))) => s.push_str(name),
            (KeyCode::Char(c), None) => s.push(c),
            (KeyCode::F(n), None) => s.push_str(&format!("F{n}")),
            (other, None) => s.push_str(&format!("{other:?}")),
        }
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Esc"`, `"q"`.  Names are
    /// case-insensitive; single characters keep their case.
    pub fn parse(s: &str) -> Option<Self> {
        let (mods, key) = match s.rsplit_once('+') {
            Some((mods, key)) if !key.is_empty() => (Some(mods), key),
            _ => (None, s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods.into_iter().flat_map(|m| m.split('+')) {
            let (_, m) = MODIFIER_NAMES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))?;
            modifiers |= *m;
        }

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => match NAMED_KEYS.iter().find(|(name, _)| name.eq_ignore_ascii_case(key)) {
                Some((_, code)) => *code,
                None => KeyCode::F(key.strip_prefix(['f', 'F'])?.parse().ok()?),
            },
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub tooltip: TooltipConfig,
    /// Redraw interval while a transition is running.
    pub frame_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            tooltip: TooltipConfig::default(),
            frame_ms: 33,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();
        m.insert(Action::Dismiss, vec![KeyBind::new(KeyCode::Esc, n)]);
        m.insert(Action::Quit, vec![KeyBind::new(KeyCode::Char('q'), n)]);
        m
    }

    /// Find the action bound to a key event.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        Action::ALL.iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|binds| binds.iter().any(|b| b.matches(event)))
        })
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].to_config_string(),
            _ => "?".into(),
        }
    }

    /// Status-bar hint built from the current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "hover a row for details | {}: {} | {}: {}",
            self.short_binding(Action::Dismiss),
            Action::Dismiss.label().to_lowercase(),
            self.short_binding(Action::Quit),
            Action::Quit.label().to_lowercase(),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::parse_config(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Persist current config to the default path.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(path)
    }

    /// Parse the file contents.  Lines that fail to apply are logged and
    /// skipped; the default stays in place for that key.
    pub fn parse_config(s: &str) -> Self {
        let mut config = Self::default();
        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if let Err(err) = config.apply(key.trim(), value.trim().trim_matches('"')) {
                tracing::warn!(line = lineno + 1, "config: {err}");
            }
        }
        config
    }

    /// Apply a single `key = value` pair.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let tooltip = &mut self.tooltip;
        match key {
            "show_duration_ms" => tooltip.show_duration = parse_duration(key, value)?,
            "hide_duration_ms" => tooltip.hide_duration = parse_duration(key, value)?,
            "visible_opacity" => tooltip.visible_opacity = parse_opacity(key, value)?,
            "hidden_opacity" => tooltip.hidden_opacity = parse_opacity(key, value)?,
            "help_cursor" => tooltip.help_cursor = parse_shape(key, value)?,
            "auto_cursor" => tooltip.auto_cursor = parse_shape(key, value)?,
            "vertical_inset" => {
                tooltip.vertical_inset = value.parse().map_err(|_| invalid(key, value, "0-65535"))?;
            }
            "center_on_cell" => tooltip.center_on_cell = parse_bool(key, value)?,
            "frame_ms" => {
                let ms: u64 = value
                    .parse()
                    .map_err(|_| invalid(key, value, "milliseconds"))?;
                self.frame_ms = ms.clamp(10, 500);
            }
            _ => {
                let action = Action::from_config_key(key)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let parsed: Vec<KeyBind> = value
                    .split(',')
                    .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                    .collect();
                if parsed.is_empty() {
                    return Err(ConfigError::NoBindings(key.to_string()));
                }
                self.bindings.insert(action, parsed);
            }
        }
        Ok(())
    }

    pub fn serialise(&self) -> String {
        let t = &self.tooltip;
        let mut lines = vec![
            "# headline-tips configuration".to_string(),
            String::new(),
            "# Tooltip".to_string(),
            format!("show_duration_ms = {}", t.show_duration.as_millis()),
            format!("hide_duration_ms = {}", t.hide_duration.as_millis()),
            format!("visible_opacity = {}", t.visible_opacity),
            format!("hidden_opacity = {}", t.hidden_opacity),
            format!("help_cursor = {}", t.help_cursor),
            format!("auto_cursor = {}", t.auto_cursor),
            format!("vertical_inset = {}", t.vertical_inset),
            format!("center_on_cell = {}", t.center_on_cell),
            format!("frame_ms = {}", self.frame_ms),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

fn parse_duration(key: &str, value: &str) -> Result<Duration, ConfigError> {
    let ms: u64 = value
        .parse()
        .map_err(|_| invalid(key, value, "milliseconds"))?;
    Ok(clamp_duration(ms))
}

/// Show/hide duration from milliseconds, capped at [`MAX_DURATION_MS`].
pub fn clamp_duration(ms: u64) -> Duration {
    Duration::from_millis(ms.min(MAX_DURATION_MS))
}

fn parse_opacity(key: &str, value: &str) -> Result<f32, ConfigError> {
    let v: f32 = value
        .parse()
        .map_err(|_| invalid(key, value, "a number between 0 and 1"))?;
    if v.is_nan() {
        return Err(invalid(key, value, "a number between 0 and 1"));
    }
    Ok(v.clamp(0.0, 1.0))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, value, "true or false")),
    }
}

/// Pointer shape names go straight into an escape sequence, so only plain
/// identifiers are accepted.
fn parse_shape(key: &str, value: &str) -> Result<String, ConfigError> {
    let ok = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(value.to_string())
    } else {
        Err(invalid(key, value, "a pointer shape name"))
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/headline-tips/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}
