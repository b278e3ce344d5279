use super::*;

pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("Failed to read `{}`: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },
  #[error("Failed to write report: {source}")]
  Write { source: io::Error },
}
