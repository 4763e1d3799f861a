//! Todo Frontend Entry Point

use leptos::prelude::*;
use todo_web::app::App;
use todo_web::config::AppConfig;
use todo_web::logger;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = AppConfig::load();
    log::set_max_level(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
