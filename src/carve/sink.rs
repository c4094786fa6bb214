use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Where carved files go.
///
/// A sink receives one complete file per call and must either store all of
/// it or report an error.
pub trait Sink {
    /// Store `bytes` under `name`
    fn write_file(&mut self, name: &str, bytes: &[u8]) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_file(&mut self, name: &str, bytes: &[u8]) -> io::Result<()> {
        (**self).write_file(name, bytes)
    }
}

/// Writes each carved file into a directory.
///
/// The directory must already exist.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Sink for DirectorySink {
    fn write_file(&mut self, name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.dir.join(name), bytes)
    }
}

/// Keeps every carved file in memory, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    files: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// The files written so far
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }

    /// Looks a file up by name
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, bytes)| bytes.as_slice())
    }

    /// Names of the files written so far
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the stored files
    pub fn into_files(self) -> Vec<(String, Vec<u8>)> {
        self.files
    }
}

impl Sink for MemorySink {
    fn write_file(&mut self, name: &str, bytes: &[u8]) -> io::Result<()> {
        self.files.push((name.to_owned(), bytes.to_vec()));
        Ok(())
    }
}

/// Accepts and drops every file. Used for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn write_file(&mut self, _name: &str, _bytes: &[u8]) -> io::Result<()> {
        Ok(())
    }
}
