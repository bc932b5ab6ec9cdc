use crate::config::BasePath;
use crate::layout::ImageLayout;
use crate::source::resolve_source;
use dioxus::prelude::*;

pub const DEFAULT_ALT_TEXT: &str = "Image";

/// An image inside a flex box, sized from the optional `height` and `width` (in pixels).
/// The source is `base_path` followed by `path`; load failures are left to the browser.
#[component]
pub fn ImageView(
    path: String,
    #[props(default = DEFAULT_ALT_TEXT.to_string())] alt_text: String,
    height: Option<f64>,
    width: Option<f64>,
    #[props(default)] base_path: BasePath,
) -> Element {
    let layout = ImageLayout::compute(height, width);
    let src = resolve_source(&base_path, &path);
    let container_style = layout.container.to_css();
    let media_style = layout.media.to_css();

    tracing::trace!(src = %src, ?height, ?width, "rendering image view");

    rsx! {
        div { style: "{container_style}",
            img {
                src: "{src}",
                alt: "{alt_text}",
                style: "{media_style}",
            }
        }
    }
}
