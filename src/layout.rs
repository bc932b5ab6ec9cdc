//! Sizing rules for the image container and the media element it wraps.

use std::fmt;

/// A single CSS length as the image view emits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Auto,
    Pixels(f64),
    Percent(f64),
}

impl Dimension {
    pub const FULL: Dimension = Dimension::Percent(100.0);
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => f.write_str("auto"),
            Dimension::Pixels(value) => write!(f, "{value}px"),
            Dimension::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// Treats a requested size the way the host markup did: zero and NaN count as absent.
pub fn provided(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Outer flex box. Only the size varies; the flex rules are fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerStyle {
    pub height: Dimension,
    pub width: Dimension,
}

impl ContainerStyle {
    pub const DISPLAY: &'static str = "flex";
    pub const JUSTIFY_CONTENT: &'static str = "start";
    pub const ALIGN_ITEMS: &'static str = "center";
    pub const OVERFLOW: &'static str = "hidden";

    pub fn to_css(&self) -> String {
        format!(
            "height: {}; width: {}; display: {}; justify-content: {}; align-items: {}; overflow: {};",
            self.height,
            self.width,
            Self::DISPLAY,
            Self::JUSTIFY_CONTENT,
            Self::ALIGN_ITEMS,
            Self::OVERFLOW,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaStyle {
    pub max_height: Dimension,
    pub max_width: Dimension,
    pub height: Dimension,
    pub width: Dimension,
}

impl MediaStyle {
    pub fn to_css(&self) -> String {
        format!(
            "max-height: {}; max-width: {}; height: {}; width: {};",
            self.max_height, self.max_width, self.height, self.width,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageLayout {
    pub container: ContainerStyle,
    pub media: MediaStyle,
}

impl ImageLayout {
    /// Height and width branch differently on purpose: only a fixed height
    /// constrains the media's max-height, max-width is always the full container.
    pub fn compute(height: Option<f64>, width: Option<f64>) -> Self {
        let height = provided(height);
        let width = provided(width);

        let container = ContainerStyle {
            height: height.map_or(Dimension::Auto, Dimension::Pixels),
            width: width.map_or(Dimension::FULL, Dimension::Pixels),
        };

        let media = MediaStyle {
            max_height: if height.is_some() { Dimension::FULL } else { Dimension::Auto },
            max_width: Dimension::FULL,
            height: if height.is_some() { Dimension::FULL } else { Dimension::Auto },
            width: if width.is_some() { Dimension::FULL } else { Dimension::Auto },
        };

        Self { container, media }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_print_as_css_lengths() {
        assert_eq!(Dimension::Auto.to_string(), "auto");
        assert_eq!(Dimension::Pixels(200.0).to_string(), "200px");
        assert_eq!(Dimension::Pixels(64.5).to_string(), "64.5px");
        assert_eq!(Dimension::FULL.to_string(), "100%");
    }

    #[test]
    fn no_size_fills_width_and_sizes_to_content() {
        let layout = ImageLayout::compute(None, None);
        assert_eq!(layout.container.height, Dimension::Auto);
        assert_eq!(layout.container.width, Dimension::FULL);
        assert_eq!(layout.media.max_height, Dimension::Auto);
        assert_eq!(layout.media.max_width, Dimension::FULL);
        assert_eq!(layout.media.height, Dimension::Auto);
        assert_eq!(layout.media.width, Dimension::Auto);
    }

    #[test]
    fn height_fixes_container_and_stretches_media() {
        let layout = ImageLayout::compute(Some(200.0), None);
        assert_eq!(layout.container.height.to_string(), "200px");
        assert_eq!(layout.container.width, Dimension::FULL);
        assert_eq!(layout.media.height, Dimension::FULL);
        assert_eq!(layout.media.max_height, Dimension::FULL);
        assert_eq!(layout.media.width, Dimension::Auto);
    }

    #[test]
    fn width_fixes_container_without_touching_max_height() {
        let layout = ImageLayout::compute(None, Some(150.0));
        assert_eq!(layout.container.width.to_string(), "150px");
        assert_eq!(layout.container.height, Dimension::Auto);
        assert_eq!(layout.media.width, Dimension::FULL);
        assert_eq!(layout.media.max_height, Dimension::Auto);
        assert_eq!(layout.media.max_width, Dimension::FULL);
    }

    #[test]
    fn zero_and_nan_count_as_absent() {
        assert_eq!(
            ImageLayout::compute(Some(0.0), Some(f64::NAN)),
            ImageLayout::compute(None, None)
        );
    }

    #[test]
    fn css_strings_keep_declaration_order() {
        let layout = ImageLayout::compute(Some(64.0), Some(64.0));
        assert_eq!(
            layout.container.to_css(),
            "height: 64px; width: 64px; display: flex; justify-content: start; align-items: center; overflow: hidden;"
        );
        assert_eq!(
            layout.media.to_css(),
            "max-height: 100%; max-width: 100%; height: 100%; width: 100%;"
        );
    }
}
