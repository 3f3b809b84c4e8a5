use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Route `log` output to a file; the terminal belongs to the UI.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn unusable_log_path_is_reported() {
        // a regular file cannot serve as the log's parent directory
        let blocker = NamedTempFile::new().unwrap();
        let path = blocker.path().join("logs").join("keyshooter.log");

        assert!(init_file_logger(&path).is_err());
        assert!(!path.exists());
    }
}
