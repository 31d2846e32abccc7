mod app;
mod locality;
mod pages;
mod utils;

use app::App;

fn main() {
    utils::logging::init();
    log::info!(
        "starting node map console, docs version {}",
        utils::docs::docs_version()
    );
    dioxus::launch(App);
}
