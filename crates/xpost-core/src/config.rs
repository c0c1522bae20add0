use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional TOML file with `[[posts]]` entries replacing the built-in samples
    #[serde(default)]
    pub posts_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            posts_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Density-independent pixels represented by one terminal row
    #[serde(default = "default_dp_per_row")]
    pub dp_per_row: f32,
    /// Scroll distance (dp) reported for each line the page view scrolls
    #[serde(default = "default_scroll_dp_per_line")]
    pub scroll_dp_per_line: f32,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            dp_per_row: default_dp_per_row(),
            scroll_dp_per_line: default_scroll_dp_per_line(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name ("dark" or "light")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accepts either `theme = "light"` or `[ui.theme] name = ... [ui.theme.colors] ...`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name = None;
                let mut colors = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides, each a hex string ("#e0245e" or "e0245e")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Screen background behind the page view
    pub background: Option<String>,
    /// Card and chip surface
    pub surface: Option<String>,
    /// Primary text
    pub on_surface: Option<String>,
    /// Links, follow button, accents
    pub primary: Option<String>,
    /// Liked heart
    pub like: Option<String>,
    /// Error text and borders
    pub error: Option<String>,
}

/// Easing curve used by the tween animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    /// Cubic ease-out
    #[default]
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Fast-out-slow-in cubic bezier (0.4, 0.0, 0.2, 1.0)
    FastOutSlowIn,
}

/// Which animator drives the floating card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    #[default]
    Tween,
    Spring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animate card geometry and page scrolling (false = snap)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Tween duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Tween easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Tween or spring for the floating card
    #[serde(default)]
    pub style: AnimationStyle,
    /// Lines scrolled per key press when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            style: AnimationStyle::default(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// HTTP proxy URL (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// User-Agent sent with page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
            proxy_url: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Move selection / scroll page down
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    /// Move selection / scroll page up
    #[serde(default = "default_key_move_up")]
    pub move_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Open the highlighted post's link
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Close the page viewer
    #[serde(default = "default_key_close")]
    pub close: String,
    /// Reload the page (retry after an error)
    #[serde(default = "default_key_reload")]
    pub reload: String,
    /// Open the "more" menu
    #[serde(default = "default_key_more")]
    pub more: String,
    /// Expand the card back to full content
    #[serde(default = "default_key_show_more")]
    pub show_more: String,
    #[serde(default = "default_key_comment")]
    pub comment: String,
    #[serde(default = "default_key_repost")]
    pub repost: String,
    #[serde(default = "default_key_like")]
    pub like: String,
    #[serde(default = "default_key_bookmark")]
    pub bookmark: String,
    #[serde(default = "default_key_share")]
    pub share: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            move_down: default_key_move_down(),
            move_up: default_key_move_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            open_link: default_key_open_link(),
            close: default_key_close(),
            reload: default_key_reload(),
            more: default_key_more(),
            show_more: default_key_show_more(),
            comment: default_key_comment(),
            repost: default_key_repost(),
            like: default_key_like(),
            bookmark: default_key_bookmark(),
            share: default_key_share(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_open_link() -> String { "<CR>".to_string() }
fn default_key_close() -> String { "x".to_string() }
fn default_key_reload() -> String { "r".to_string() }
fn default_key_more() -> String { "m".to_string() }
fn default_key_show_more() -> String { "e".to_string() }
fn default_key_comment() -> String { "c".to_string() }
fn default_key_repost() -> String { "p".to_string() }
fn default_key_like() -> String { "l".to_string() }
fn default_key_bookmark() -> String { "b".to_string() }
fn default_key_share() -> String { "s".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("xpost")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_dp_per_row() -> f32 {
    16.0
}

fn default_scroll_dp_per_line() -> f32 {
    20.0 // matches the 20sp body line height
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_animation_duration() -> u64 {
    300
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/xpost/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("xpost")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the TUI log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("xpost.log")
    }

    /// Get the configured posts file (with tilde expansion)
    pub fn posts_file(&self) -> Option<PathBuf> {
        self.general.posts_file.as_deref().map(expand_tilde)
    }
}
