use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// On-disk configuration, loaded from `~/.vitrine/config.toml`.
///
/// Every field is optional; the resolved [`Motion`] and [`Thresholds`]
/// carry the documented defaults. Unknown or invalid values are warned
/// about and replaced with defaults rather than refusing to start.
#[derive(Debug, Default, Deserialize)]
pub struct VitrineConfig {
    pub app: Option<AppConfig>,
    pub motion: Option<MotionConfig>,
    pub reveal: Option<RevealConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for indicators and chrome.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Skip animations: reveals, transitions and counters apply instantly.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Timing knobs, all in milliseconds.
#[derive(Debug, Default, Deserialize)]
pub struct MotionConfig {
    pub carousel_interval_ms: Option<u64>,
    pub transition_delay_ms: Option<u64>,
    pub detail_stagger_ms: Option<u64>,
    pub paragraph_stagger_ms: Option<u64>,
    pub headline_char_ms: Option<u64>,
    pub counter_duration_ms: Option<u64>,
    pub submit_send_ms: Option<u64>,
    pub submit_reset_ms: Option<u64>,
}

/// Visibility fractions in `[0, 1]` that arm each trigger.
#[derive(Debug, Default, Deserialize)]
pub struct RevealConfig {
    pub section_threshold: Option<f32>,
    pub headline_threshold: Option<f32>,
    pub counter_threshold: Option<f32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl VitrineConfig {
    /// Load the config file if one exists. `Ok(None)` means no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".vitrine").join("config.toml"))
}

/// Resolved timing parameters.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    /// Carousel auto-advance period.
    pub carousel_interval: Duration,
    /// Exit phase of a project switch.
    pub transition_delay: Duration,
    /// Fade-in phase after the switch lands.
    pub enter_duration: Duration,
    /// Per-element fade once a reveal fires.
    pub reveal_fade: Duration,
    /// Per-child delay for info detail rows.
    pub detail_stagger: Duration,
    /// Per-child delay for story paragraphs.
    pub paragraph_stagger: Duration,
    /// Base per-character delay for typed headlines.
    pub headline_char: Duration,
    /// Extra random delay added per character.
    pub headline_jitter: Duration,
    /// Delay before a triggered headline starts typing.
    pub headline_lead: Duration,
    /// How long the trailing cursor lingers after typing finishes.
    pub cursor_linger: Duration,
    /// Masthead title lead-in at startup.
    pub masthead_lead: Duration,
    /// Masthead per-character delay.
    pub masthead_char: Duration,
    /// Stat counter run time.
    pub counter_duration: Duration,
    /// Simulated send time for the contact form.
    pub submit_send: Duration,
    /// How long the sent confirmation stays before the form resets.
    pub submit_reset: Duration,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            carousel_interval: Duration::from_millis(5000),
            transition_delay: Duration::from_millis(300),
            enter_duration: Duration::from_millis(600),
            reveal_fade: Duration::from_millis(600),
            detail_stagger: Duration::from_millis(200),
            paragraph_stagger: Duration::from_millis(300),
            headline_char: Duration::from_millis(50),
            headline_jitter: Duration::from_millis(50),
            headline_lead: Duration::from_millis(200),
            cursor_linger: Duration::from_millis(500),
            masthead_lead: Duration::from_millis(500),
            masthead_char: Duration::from_millis(100),
            counter_duration: Duration::from_millis(1500),
            submit_send: Duration::from_millis(1500),
            submit_reset: Duration::from_millis(2000),
        }
    }
}

impl Motion {
    #[must_use]
    pub fn from_config(config: Option<&MotionConfig>) -> Self {
        let mut motion = Self::default();
        let Some(config) = config else {
            return motion;
        };

        let mut apply = |slot: &mut Duration, value: Option<u64>| {
            if let Some(ms) = value {
                *slot = Duration::from_millis(ms);
            }
        };

        apply(&mut motion.carousel_interval, config.carousel_interval_ms);
        apply(&mut motion.transition_delay, config.transition_delay_ms);
        apply(&mut motion.detail_stagger, config.detail_stagger_ms);
        apply(&mut motion.paragraph_stagger, config.paragraph_stagger_ms);
        apply(&mut motion.headline_char, config.headline_char_ms);
        apply(&mut motion.counter_duration, config.counter_duration_ms);
        apply(&mut motion.submit_send, config.submit_send_ms);
        apply(&mut motion.submit_reset, config.submit_reset_ms);
        motion
    }
}

/// Resolved visibility thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Fraction of an info/story section that must be visible to reveal it.
    pub section: f32,
    /// Fraction of a headline that must be visible before it types in.
    pub headline: f32,
    /// Fraction of the info section that must be visible to run counters.
    pub counter: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            section: 0.3,
            headline: 0.5,
            counter: 0.8,
        }
    }
}

impl Thresholds {
    #[must_use]
    pub fn from_config(config: Option<&RevealConfig>) -> Self {
        let mut thresholds = Self::default();
        let Some(config) = config else {
            return thresholds;
        };

        let mut apply = |slot: &mut f32, value: Option<f32>| {
            match value {
                Some(v) if (0.0..=1.0).contains(&v) => *slot = v,
                Some(v) => {
                    tracing::warn!("Ignoring out-of-range reveal threshold: {v}");
                }
                None => {}
            }
        };

        apply(&mut thresholds.section, config.section_threshold);
        apply(&mut thresholds.headline, config.headline_threshold);
        apply(&mut thresholds.counter, config.counter_threshold);
        thresholds
    }
}
