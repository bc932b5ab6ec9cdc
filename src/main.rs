use dioxus::prelude::*;
use image_view::AppConfig;

mod views;

use views::Gallery;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Gallery {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(AppConfig::from_framework);

    use_hook(|| {
        tracing::info!(base_path = %config.base_path, "image view gallery starting");
    });

    rsx! {
        document::Title { "Image View" }
        Router::<Route> {}
    }
}
