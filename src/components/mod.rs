//! Shared components for the image view app.

mod image_view;

pub use image_view::*;
