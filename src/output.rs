//! File system effects of the generators.
//! Generators only describe what should happen as a list of
//! [`FileOperation`]s; [`apply`] performs them in order.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// A single file system effect. Paths are relative to the working root
/// passed to [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// Recursively removes an existing directory
    RemoveDir { target: PathBuf },
    /// Creates a directory and any missing parents
    CreateDir { target: PathBuf },
    /// Writes the whole file, replacing any previous content
    Write { target: PathBuf, content: String, executable: bool },
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::RemoveDir { target } => {
                write!(f, "removing existing folder \"{}\"", target.display())
            }
            FileOperation::CreateDir { target } => write!(f, "creating \"{}\"", target.display()),
            FileOperation::Write { target, .. } => write!(f, "Saved {}", target.display()),
        }
    }
}

fn resolve(root: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        target.to_path_buf()
    } else {
        root.join(target)
    }
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(fs::write(dest_path, content)?)
}

/// Adds the execute bit for owner, group and others (`chmod a+x`).
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    Ok(fs::set_permissions(path, permissions)?)
}

#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(_path: P) -> Result<()> {
    Ok(())
}

/// Applies the operations in order, printing one progress line per step.
///
/// The first failure aborts the run; nothing already written is rolled back.
pub fn apply<P: AsRef<Path>>(root: P, operations: &[FileOperation]) -> Result<()> {
    let root = root.as_ref();
    for operation in operations {
        debug!("Applying {:?}", operation);
        match operation {
            FileOperation::RemoveDir { target } => fs::remove_dir_all(resolve(root, target))?,
            FileOperation::CreateDir { target } => fs::create_dir_all(resolve(root, target))?,
            FileOperation::Write { target, content, executable } => {
                let path = resolve(root, target);
                write_file(content, &path)?;
                if *executable {
                    make_executable(&path)?;
                }
            }
        }
        println!("{operation}");
    }
    Ok(())
}
