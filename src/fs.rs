use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Whole-file access used by the replacer.
///
/// Each call opens and closes its own handle; nothing is held between a read
/// and the write that follows it.
pub trait FileSystem {
    fn read_to_string(&mut self, path: &Path) -> Result<String, io::Error>;
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), io::Error>;
}

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&mut self, path: &Path) -> Result<String, io::Error> {
        std::fs::read_to_string(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), io::Error> {
        std::fs::write(path, contents)
    }
}

/// Keeps writes in memory on top of another file system.
///
/// Reads of a path that was written return the buffered content, so several
/// passes over one file compose exactly as they would on disk.
pub struct DryRunFileSystem<F> {
    inner: F,
    overlay: HashMap<PathBuf, String>,
}

impl<F: FileSystem> DryRunFileSystem<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            overlay: HashMap::new(),
        }
    }

    pub fn pending(&self, path: &Path) -> Option<&str> {
        self.overlay.get(path).map(String::as_str)
    }
}

impl<F: FileSystem> FileSystem for DryRunFileSystem<F> {
    fn read_to_string(&mut self, path: &Path) -> Result<String, io::Error> {
        match self.overlay.get(path) {
            Some(contents) => Ok(contents.clone()),
            None => self.inner.read_to_string(path),
        }
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), io::Error> {
        debug!("dry run: holding {} bytes for {:?}", contents.len(), path);
        self.overlay.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
    pub read_error: Option<io::ErrorKind>,
    pub write_error: Option<io::ErrorKind>,
    pub reads: usize,
    pub writes: usize,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new(files: Vec<(&str, &str)>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                .collect(),
            read_error: None,
            write_error: None,
            reads: 0,
            writes: 0,
        }
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&mut self, path: &Path) -> Result<String, io::Error> {
        self.reads += 1;
        if let Some(kind) = self.read_error {
            return Err(io::Error::new(kind, "injected read failure"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), io::Error> {
        if let Some(kind) = self.write_error {
            return Err(io::Error::new(kind, "injected write failure"));
        }
        self.writes += 1;
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_real_file_system_round_trip() -> io::Result<()> {
        // Create a temporary directory for testing
        let temp_dir = tempdir()?;
        let file_path = temp_dir.path().join("chat.md");
        fs::write(&file_path, "USER: hi")?;

        let mut real = RealFileSystem;
        assert_eq!(real.read_to_string(&file_path)?, "USER: hi");
        real.write(&file_path, "Dano: hi")?;
        assert_eq!(fs::read_to_string(&file_path)?, "Dano: hi");

        Ok(())
    }

    #[test]
    fn test_dry_run_reads_through_and_buffers_writes() -> io::Result<()> {
        let temp_dir = tempdir()?;
        let file_path = temp_dir.path().join("chat.md");
        fs::write(&file_path, "original")?;

        // Reads fall through to the real file until something is written
        let mut dry = DryRunFileSystem::new(RealFileSystem);
        assert_eq!(dry.read_to_string(&file_path)?, "original");
        assert_eq!(dry.pending(&file_path), None);

        // After a write the overlay answers, and the disk is left alone
        dry.write(&file_path, "changed")?;
        assert_eq!(dry.read_to_string(&file_path)?, "changed");
        assert_eq!(dry.pending(&file_path), Some("changed"));
        assert_eq!(fs::read_to_string(&file_path)?, "original");

        Ok(())
    }

    #[test]
    fn test_dry_run_passes_not_found_through() {
        let mut dry = DryRunFileSystem::new(MockFileSystem::new(vec![]));
        let err = dry.read_to_string(Path::new("missing.md")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
