use leptos::prelude::*;
use project_board::config::BoardConfig;
use project_board::{logging, App};

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_location();
    logging::init(config.log_level);
    log::info!("Starting project board");

    mount_to_body(move || view! { <App config=config /> });
}
