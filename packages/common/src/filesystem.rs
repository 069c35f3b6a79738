use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// File system abstraction for writing generated files and testing
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all of its parents
    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error>;

    /// Write a whole file, replacing any previous content
    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        std::fs::write(path, contents)
    }
}

/// In-memory file system for testing
#[derive(Default)]
pub struct MockFileSystem {
    pub existing_files: HashSet<PathBuf>,
    directories: RefCell<HashSet<PathBuf>>,
    written: RefCell<HashMap<PathBuf, String>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: PathBuf) {
        self.existing_files.insert(path);
    }

    /// Content written to `path`, if any
    pub fn read(&self, path: &Path) -> Option<String> {
        self.written.borrow().get(path).cloned()
    }

    pub fn has_directory(&self, path: &Path) -> bool {
        self.directories.borrow().contains(path)
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.existing_files.contains(path)
            || self.directories.borrow().contains(path)
            || self.written.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        let mut directories = self.directories.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                directories.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.directories.borrow().contains(parent) {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("directory {} does not exist", parent.display()),
                ));
            }
        }
        self.written
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
