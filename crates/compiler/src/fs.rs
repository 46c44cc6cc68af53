use std::{
    io::{self, Error, ErrorKind},
    path::Path,
};

/// A trait to allow replacing the file system used to read HTML and CSS sources
/// and to persist the rewritten stylesheets.
///
/// `pare` itself never walks directories or expands globs; discovery is left to
/// the caller, and this trait only covers the reads and writes of paths it has
/// already been handed.
pub trait Fs: std::fmt::Debug {
    /// Read the entire contents of a file into a bytes vector.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    /// Replace the contents of a file, creating it if necessary.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Use [`std::fs`] to read and write files on disk.
///
/// This is the default file system implementation.
#[derive(Debug)]
pub struct StdFs;

impl Fs for StdFs {
    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// A file system implementation that acts like it’s completely empty and
/// refuses every write.
///
/// Useful when all sources are passed in memory (see [`crate::purge`]) and
/// nothing should ever touch the disk.
#[derive(Debug)]
pub struct NullFs;

impl Fs for NullFs {
    #[inline]
    fn read(&self, _path: &Path) -> io::Result<Vec<u8>> {
        Err(Error::new(
            ErrorKind::NotFound,
            "NullFs, there is no file system",
        ))
    }

    #[inline]
    fn write(&self, _path: &Path, _contents: &[u8]) -> io::Result<()> {
        Err(Error::new(
            ErrorKind::PermissionDenied,
            "NullFs, there is no file system",
        ))
    }
}
