//! Pack-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while saving an Audit Pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// Writing the pack file failed.
    #[error("failed to write audit pack to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = PackError::Io {
            path: PathBuf::from("/tmp/out/AUD_AuditPack.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("AUD_AuditPack.txt"));
        assert!(msg.contains("denied"));
    }
}
