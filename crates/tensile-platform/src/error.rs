use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no version-numbered ROCm installation (X.Y) found under {}", root.display())]
    NoInstallation { root: PathBuf },

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path:   PathBuf,
        source: std::io::Error,
    },
}
