use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    /// Options are read from the location hash, e.g. `#-vv`, with `&` between options.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash);
    let verbose = args.as_ref().map(|args| args.verbose.clone()).unwrap_or_default();
    if let Some(log_level) = verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Err(err) = args {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root(root).render();
}
