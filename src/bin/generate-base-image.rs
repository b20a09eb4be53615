//! Creates a new `base/<version>` folder with a Dockerfile, README and
//! build script generated from templates.

use imagegen::{
    cli::{get_args, BaseImageArgs},
    error::{default_error_handler, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
    scaffold::{completion_notice, generate_base_image},
    version::VersionTag,
};

fn main() {
    let args: BaseImageArgs = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: BaseImageArgs) -> Result<()> {
    let version = VersionTag::parse(&args.image_version)?;
    let renderer = MiniJinjaRenderer::new();

    let folder = generate_base_image(".", &renderer, &version, env!("CARGO_BIN_NAME"))?;

    println!("{}", completion_notice(&folder));
    Ok(())
}
