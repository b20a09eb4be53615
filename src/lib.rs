//! imagegen maintains a repository of Docker image definitions.
//! It scaffolds new versioned base image folders from templates and
//! regenerates the CircleCI configuration from the image folders on disk.

/// Command-line interfaces of `generate-base-image` and `generate-config`
pub mod cli;

/// Root folder names and generated file names
pub mod constants;

/// Discovery of `<root>/<tag>` image folders
pub mod discovery;

/// Error types and handling
pub mod error;

/// Logger setup shared by both binaries
pub mod logger;

/// File system effects: writes, directory replacement, permissions
pub mod output;

/// CircleCI configuration rendering and assembly
pub mod pipeline;

/// Template rendering engine
pub mod renderer;

/// Scaffolding of `base/<version>` folders
pub mod scaffold;

/// Embedded template assets
pub mod templates;

/// Strict `MAJOR.MINOR.PATCH` version tags
pub mod version;
