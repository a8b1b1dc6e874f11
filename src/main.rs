use log::info;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod motion {
    pub mod easing;
    pub mod idle;
    pub mod parallax;
    pub mod registry;
    pub mod reveal;
    pub mod scroll;
    pub mod stagger;
    pub mod trigger;
    pub mod visual;
}
mod dom {
    pub mod listener;
    pub mod style;
    pub mod viewport;
}
mod hooks {
    pub mod bind;
    pub mod context;
    pub mod idle;
    pub mod parallax;
    pub mod reveal;
    pub mod scrolled;
}
mod sections {
    pub mod cta;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod steps;
    pub mod testimonials;
    pub mod tools;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
