/// Installs the `env_logger` backend. `verbose` lowers the filter to debug,
/// which traces discovery, rendering and every file operation.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .init();
}
