use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::{Path, PathBuf},
    string::FromUtf8Error,
    sync::Arc,
};

pub type PareResult<T> = Result<T, Box<PareError>>;

/// An error produced while reading sources or writing results
///
/// The engine itself never fails; malformed CSS is recovered from and
/// reported through the [`crate::Logger`]. Errors only come from the file
/// system collaborator.
#[derive(Debug, Clone)]
pub struct PareError {
    kind: PublicPareErrorKind,
}

impl PareError {
    pub(crate) fn io(path: &Path, error: io::Error) -> Box<Self> {
        Box::new(PareError {
            kind: PublicPareErrorKind::IoError {
                path: path.to_path_buf(),
                error: Arc::new(error),
            },
        })
    }

    pub(crate) fn utf8(path: &Path, error: &FromUtf8Error) -> Box<Self> {
        let message = match error.as_bytes().get(error.utf8_error().valid_up_to()) {
            Some(byte) => format!("Invalid UTF-8 character \"\\x{:X?}\"", byte),
            None => "Invalid UTF-8".to_owned(),
        };

        Box::new(PareError {
            kind: PublicPareErrorKind::FromUtf8Error {
                path: path.to_path_buf(),
                message,
            },
        })
    }

    #[must_use]
    pub fn kind(&self) -> PublicPareErrorKind {
        self.kind.clone()
    }

    fn path(&self) -> &Path {
        match &self.kind {
            PublicPareErrorKind::IoError { path, .. }
            | PublicPareErrorKind::FromUtf8Error { path, .. } => path,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PublicPareErrorKind {
    /// Reading or writing `path` failed
    IoError {
        path: PathBuf,
        error: Arc<io::Error>,
    },
    /// The file at `path` is not valid UTF-8
    FromUtf8Error { path: PathBuf, message: String },
}

impl Display for PareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PublicPareErrorKind::IoError { error, .. } => writeln!(f, "Error: {}", error)?,
            PublicPareErrorKind::FromUtf8Error { message, .. } => writeln!(f, "Error: {}", message)?,
        }
        write!(f, "  ./{}", self.path().display())
    }
}

impl Error for PareError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            PublicPareErrorKind::IoError { error, .. } => Some(error.as_ref()),
            PublicPareErrorKind::FromUtf8Error { .. } => None,
        }
    }
}
