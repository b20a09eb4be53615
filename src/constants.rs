//! Common constants used throughout the imagegen tools.

/// Root folder holding `cypress/base` image definitions
pub const BASE_ROOT: &str = "base";

/// Root folder holding `cypress/browsers` image definitions
pub const BROWSERS_ROOT: &str = "browsers";

/// Root folder holding `cypress/included` image definitions
pub const INCLUDED_ROOT: &str = "included";

/// Generated CircleCI configuration file name
pub const CONFIG_FILE: &str = "circle.yml";

/// Files written into a new base image folder
pub const DOCKERFILE: &str = "Dockerfile";
pub const README_FILE: &str = "README.md";
pub const BUILD_SCRIPT: &str = "build.sh";

/// Line separator placed between rendered workflows
pub const WORKFLOW_SEPARATOR: &str = "\n";
