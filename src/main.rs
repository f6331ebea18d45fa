use log::{info, warn, Level};
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod debug;
mod dom;
mod effects;
mod header;
mod submit;
mod components {
    pub mod contact;
    pub mod faq;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let debug_param = use_search_param("debug".to_string());

    // the page is static markup, so wiring it once after the first render is enough
    use_effect_with_deps(
        move |debug_param| {
            let effects = effects::install_all();
            if effects.is_empty() {
                warn!("no page enhancements could be installed");
            }

            let probes = match debug_param {
                Some(_) => debug::run().unwrap_or_else(|e| {
                    warn!("debug harness failed: {:?}", e);
                    Vec::new()
                }),
                None => Vec::new(),
            };

            info!("LandingPro initialized successfully!");
            move || {
                drop(probes);
                drop(effects);
            }
        },
        debug_param,
    );

    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting LandingPro");
    yew::Renderer::<App>::new().render();
}
