//! Core engine for Vitrine - showcase state machine and animation clocks.
//!
//! This crate contains the application state without TUI dependencies.
//! The renderer drives it with two calls per frame: `App::tick` to advance
//! every animation clock, and `App::record_layout` to report the measured
//! page so visibility triggers can fire.

mod animation;
mod app;
mod carousel;
mod config;
mod contact;
mod content;
mod counter;
mod navigator;
mod reveal;
mod scroll;
mod typewriter;

pub use animation::{EffectTimer, IntervalTimer};
pub use app::{App, InputMode, PageLayout, ProjectPage, UiOptions};
pub use carousel::Carousel;
pub use config::{
    AppConfig, ConfigError, Motion, MotionConfig, RevealConfig, Thresholds, VitrineConfig,
    config_path,
};
pub use contact::{ContactField, ContactForm, MISSING_FIELDS_NOTICE};
pub use content::{
    Detail, MASTHEAD_TAGLINE, MASTHEAD_TITLE, PROJECT_COUNT, Project, Slide, Stat, project_names,
    projects,
};
pub use counter::StatCounter;
pub use navigator::Navigator;
pub use reveal::SectionReveal;
pub use scroll::{PageScroll, RowSpan};
pub use typewriter::Typewriter;
