//! Command-line interfaces of the two generators.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Parser};

/// Arguments of `generate-base-image`.
#[derive(Parser, Debug)]
#[command(
    name = "generate-base-image",
    version,
    about = "Creates base/<VERSION> with a Dockerfile, README.md and build.sh",
    long_about = None
)]
pub struct BaseImageArgs {
    /// Node.js version of the new base image, like "13.6.0"
    #[arg(id = "image_version", value_name = "VERSION")]
    pub image_version: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of `generate-config`.
#[derive(Parser, Debug)]
#[command(
    name = "generate-config",
    version,
    about = "Generates circle.yml with a CircleCI job for every image folder",
    long_about = None
)]
pub struct ConfigArgs {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments.
///
/// # Exits
/// * With status code 1 and the help text if a required argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args<A: Parser>() -> A {
    match A::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                A::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
