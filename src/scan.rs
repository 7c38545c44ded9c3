use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::{debug, info, warn};

use crate::{
    errors::{DirectoryInaccessible, DiscoveryError},
    model::{McpFile, Origin},
};

/// Project-level config directory, relative to the working directory.
pub const LOCAL_DIR: &str = ".claude/mcp";

/// The directories discovery looks at, in scan order.
#[derive(Debug, Clone)]
pub struct McpDirs {
    pub local: PathBuf,
    pub global: Option<PathBuf>,
}

impl McpDirs {
    /// `./.claude/mcp`, plus `$HOME/.claude/mcp` unless `local_only`.
    pub fn resolve(local_only: bool) -> Result<Self, DiscoveryError> {
        let global = if local_only {
            None
        } else {
            let home = dirs::home_dir().ok_or(DiscoveryError::HomeDirUnavailable)?;
            Some(home.join(".claude").join("mcp"))
        };
        Ok(Self {
            local: PathBuf::from(LOCAL_DIR),
            global,
        })
    }
}

pub fn find_mcp_files(local_only: bool) -> Result<Vec<McpFile>, DiscoveryError> {
    discover(&McpDirs::resolve(local_only)?)
}

/// All local configs first, then all global ones, each in glob order.
pub fn discover(dirs: &McpDirs) -> Result<Vec<McpFile>, DiscoveryError> {
    let mut out = scan_dir(&dirs.local, Origin::Local)?;
    if let Some(global) = &dirs.global {
        out.extend(scan_dir(global, Origin::Global)?);
    }
    Ok(out)
}

fn scan_dir(dir: &Path, origin: Origin) -> Result<Vec<McpFile>, DiscoveryError> {
    match fs::read_dir(dir) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                event = "launcher.discovery.dir_missing",
                dir = %dir.display(),
                origin = %origin
            );
            return Ok(Vec::new());
        }
        Err(source) => {
            let err = DirectoryInaccessible {
                path: dir.to_path_buf(),
                source,
            };
            warn!(event = "launcher.discovery.dir_inaccessible", error = %err);
            return Ok(Vec::new());
        }
    }

    let escaped = Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped)
        .join("*.json")
        .to_string_lossy()
        .into_owned();
    let paths = glob::glob(&pattern).map_err(|source| DiscoveryError::GlobFailure {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => files.push(McpFile::new(path, origin)),
            Err(e) => {
                warn!(
                    event = "launcher.discovery.entry_unreadable",
                    path = %e.path().display(),
                    error = %e.error()
                );
            }
        }
    }

    if files.is_empty() {
        info!(
            event = "launcher.discovery.dir_empty",
            dir = %dir.display(),
            origin = %origin
        );
    } else {
        info!(
            event = "launcher.discovery.dir_scanned",
            dir = %dir.display(),
            origin = %origin,
            count = files.len()
        );
    }

    Ok(files)
}
