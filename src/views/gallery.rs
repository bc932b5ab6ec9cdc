use dioxus::prelude::*;
use image_view::{AppConfig, ImageView};

/// Demo page showing the image view with and without fixed dimensions.
#[component]
pub fn Gallery() -> Element {
    let config = use_context::<AppConfig>();
    let base_path = config.base_path.clone();

    rsx! {
        section { class: "gallery",
            h2 { "Full width" }
            ImageView { path: "/static/logo.png", base_path: base_path.clone() }

            h2 { "Fixed 64 x 64" }
            ImageView {
                path: "/x.png",
                height: 64.0,
                width: 64.0,
                alt_text: "X",
                base_path: base_path.clone(),
            }

            h2 { "Fixed height" }
            ImageView { path: "/static/logo.png", height: 200.0, alt_text: "Logo", base_path }
        }
    }
}
