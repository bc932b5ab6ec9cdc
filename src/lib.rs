//! A sized image container for Dioxus apps, resolving sources against an explicit base path.

pub mod components;
pub mod config;
pub mod layout;
pub mod source;

pub use components::{ImageView, ImageViewProps, DEFAULT_ALT_TEXT};
pub use config::{AppConfig, BasePath, ConfigError};
pub use layout::{ContainerStyle, Dimension, ImageLayout, MediaStyle};
pub use source::resolve_source;
