//! Portfolio frontend entry point

mod config;
mod logging;
mod platform;
mod sidebar;

pub fn main() {
    logging::init_logging(logging::default_level());

    let config = config::load_sidebar_config();
    sidebar::mount(config);
}
