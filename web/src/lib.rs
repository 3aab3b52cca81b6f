use clap::Parser;
use jeopardy_core::GameConfig;
use wasm_bindgen::prelude::*;

mod client;
mod controller;
mod game;
mod render;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the trivia service
    #[arg(long, default_value = client::HttpTriviaSource::DEFAULT_API_BASE)]
    api_base: String,

    /// Categories on the board
    #[arg(long, default_value_t = GameConfig::default().categories)]
    categories: u8,

    /// Clues per category
    #[arg(long, default_value_t = GameConfig::default().clues_per_category)]
    clues: u8,

    /// How many categories to sample from
    #[arg(long, default_value_t = GameConfig::default().category_pool)]
    pool: u16,
}

impl Args {
    /// Arguments are passed in the location hash, e.g. `#-vv&--seed=42`.
    fn try_from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn game_props(&self) -> game::GameProps {
        game::GameProps {
            config: GameConfig::new(self.categories, self.clues, self.pool),
            api_base: self.api_base.clone(),
            seed: self.seed,
        }
    }
}

fn location_hash(window: &web_sys::Window) -> String {
    window.location().hash().unwrap_or_default()
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = location_hash(&window());

    let (args, args_error) = match Args::try_from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = args_error {
        log::warn!("ignoring arguments in {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game_props()).render();
}
