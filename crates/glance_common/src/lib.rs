//! Glance Common - Shared types for the Glance dashboard
//!
//! Data model for the analysis report, the chat log core, and configuration.
//! No terminal or rendering concerns live here.

pub mod chat;
pub mod config;
pub mod error;
pub mod report;

pub use chat::{ChatLog, Message, CANNED_REPLY, GREETING};
pub use config::{Config, ThemeMode};
pub use error::GlanceError;
pub use report::{AnalysisReport, Feature, FeatureStatus, SystemMetrics};
