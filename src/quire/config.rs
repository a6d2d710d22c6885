use crate::drag::{DragSettings, DragZones, PageRect};
use crate::error::{QuireError, Result};
use crate::measure::RenderBox;
use crate::pagination::{Limits, MAX_PAGES};
use crate::view::ViewSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`QuireConfig::get`] and [`QuireConfig::set`], in display order.
pub const KEYS: &[&str] = &[
    "debounce_ms",
    "turn_ms",
    "drag_exit_ms",
    "spring_back_ms",
    "max_pages",
    "drag_threshold",
    "drag_zone_left",
    "drag_zone_right",
    "page_width",
    "page_height",
    "page_padding",
    "line_height",
    "max_lines",
    "char_width",
];

/// Configuration for quire, stored in `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuireConfig {
    /// Pause after the last keystroke before typing is saved.
    pub debounce_ms: u64,
    pub turn_ms: u64,
    pub drag_exit_ms: u64,
    pub spring_back_ms: u64,
    /// At most [`MAX_PAGES`].
    pub max_pages: usize,
    /// Fraction of the page width a drag must cover to turn the page.
    pub drag_threshold: f32,
    pub drag_zones: DragZones,
    /// The page's editing surface.
    pub page: RenderBox,
    /// Column width used by the headless measurer.
    pub char_width: f32,
}

impl Default for QuireConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            turn_ms: 500,
            drag_exit_ms: 500,
            spring_back_ms: 300,
            max_pages: MAX_PAGES,
            drag_threshold: 0.25,
            drag_zones: DragZones::default(),
            page: RenderBox::default(),
            char_width: 9.0,
        }
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> std::result::Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", key, value))
}

fn positive(key: &str, value: &str) -> std::result::Result<f32, String> {
    let v: f32 = parse(key, value)?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("{} must be a positive number", key))
    }
}

impl QuireConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuireError::Io)?;
        let config: QuireConfig =
            serde_json::from_str(&content).map_err(QuireError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuireError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuireError::Serialization)?;
        fs::write(config_path, content).map_err(QuireError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "debounce_ms" => self.debounce_ms.to_string(),
            "turn_ms" => self.turn_ms.to_string(),
            "drag_exit_ms" => self.drag_exit_ms.to_string(),
            "spring_back_ms" => self.spring_back_ms.to_string(),
            "max_pages" => self.max_pages.to_string(),
            "drag_threshold" => self.drag_threshold.to_string(),
            "drag_zone_left" => self.drag_zones.left.to_string(),
            "drag_zone_right" => self.drag_zones.right.to_string(),
            "page_width" => self.page.width.to_string(),
            "page_height" => self.page.height.to_string(),
            "page_padding" => self.page.padding.to_string(),
            "line_height" => self.page.line_height.to_string(),
            "max_lines" => self.page.max_lines.to_string(),
            "char_width" => self.char_width.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "debounce_ms" => self.debounce_ms = parse(key, value)?,
            "turn_ms" => self.turn_ms = parse(key, value)?,
            "drag_exit_ms" => self.drag_exit_ms = parse(key, value)?,
            "spring_back_ms" => self.spring_back_ms = parse(key, value)?,
            "max_pages" => {
                let max: usize = parse(key, value)?;
                if max == 0 || max > MAX_PAGES {
                    return Err(format!("max_pages must be between 1 and {}", MAX_PAGES));
                }
                self.max_pages = max;
            }
            "drag_threshold" => {
                let threshold = positive(key, value)?;
                if threshold >= 1.0 {
                    return Err("drag_threshold must be below 1".to_string());
                }
                self.drag_threshold = threshold;
            }
            "drag_zone_left" => self.drag_zones.left = positive(key, value)?,
            "drag_zone_right" => self.drag_zones.right = positive(key, value)?,
            "page_width" => self.page.width = positive(key, value)?,
            "page_height" => self.page.height = positive(key, value)?,
            "page_padding" => self.page.padding = parse(key, value)?,
            "line_height" => self.page.line_height = positive(key, value)?,
            "max_lines" => {
                let lines: usize = parse(key, value)?;
                if lines == 0 {
                    return Err("max_lines must be at least 1".to_string());
                }
                self.page.max_lines = lines;
            }
            "char_width" => self.char_width = positive(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            limits: Limits {
                max_pages: self.max_pages.min(MAX_PAGES),
                debounce: Duration::from_millis(self.debounce_ms),
            },
            turn: Duration::from_millis(self.turn_ms),
            drag: DragSettings {
                zones: self.drag_zones,
                threshold: self.drag_threshold,
                exit: Duration::from_millis(self.drag_exit_ms),
                spring_back: Duration::from_millis(self.spring_back_ms),
            },
            render_box: self.page.clone(),
            page_rect: PageRect::new(0.0, self.page.width),
        }
    }
}
