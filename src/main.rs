fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = docs_widgets::load_config();
    let _ = console_log::init_with_level(config.log_level());

    if let Some(err) = config_error {
        log::warn!("Using default widget config: {}", err);
    }
    // Each widget logs its own startup failure.
    let _ = docs_widgets::start(&config);
}
