//! Generates `circle.yml` by looking at the `base/*`, `browsers/*` and
//! `included/*` folders. Every folder becomes a separate job.

use imagegen::{
    cli::{get_args, ConfigArgs},
    error::default_error_handler,
    logger::init_logger,
    pipeline::generate_config,
    renderer::MiniJinjaRenderer,
};

fn main() {
    let args: ConfigArgs = get_args();
    init_logger(args.verbose);

    let renderer = MiniJinjaRenderer::new();
    if let Err(err) = generate_config(".", &renderer, env!("CARGO_BIN_NAME")) {
        default_error_handler(err);
    }
}
