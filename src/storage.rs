use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Filesystem backend for the upload directory.
#[derive(Clone, Debug)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Creates the upload directory tree. Called once before serving.
    pub async fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Writes `data` under the client-supplied `filename`, replacing any
    /// existing file with the same name (last write wins, no locking).
    pub async fn save_file(&self, filename: &str, data: &[u8]) -> Result<(), StorageError> {
        let target = self.resolve(filename)?;
        fs::write(&target, data).await?;
        Ok(())
    }

    /// Maps a client-supplied filename onto a path inside the root,
    /// rejecting parent-dir, absolute and prefix components.
    fn resolve(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let trimmed = filename.trim_start_matches(['/', '\\']);
        let mut normalized = PathBuf::new();
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(segment) => normalized.push(segment),
                Component::CurDir => continue,
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(StorageError::InvalidName);
                }
            }
        }
        if normalized.as_os_str().is_empty() {
            return Err(StorageError::InvalidName);
        }

        Ok(self.root.join(normalized))
    }
}

#[derive(Debug)]
pub enum StorageError {
    InvalidName,
    Io(io::Error),
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{Storage, StorageError};
    use tempfile::tempdir;

    fn make_storage() -> (tempfile::TempDir, Storage) {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("uploads");
        std::fs::create_dir_all(&root).expect("create upload root");
        let storage = Storage::new(root);
        (temp, storage)
    }

    #[tokio::test]
    async fn save_file_rejects_parent_dir() {
        let (_temp, storage) = make_storage();
        let result = storage.save_file("../escape.png", b"data").await;
        assert!(matches!(result, Err(StorageError::InvalidName)));
    }

    #[tokio::test]
    async fn save_file_strips_leading_separators() {
        let (_temp, storage) = make_storage();
        storage
            .save_file("/rooted.png", b"data")
            .await
            .expect("save file");
        let contents = std::fs::read(storage.root_path().join("rooted.png")).expect("read file");
        assert_eq!(contents, b"data");
    }

    #[tokio::test]
    async fn save_file_overwrites_existing() {
        let (_temp, storage) = make_storage();
        storage
            .save_file("cat.png", b"first")
            .await
            .expect("first save");
        storage
            .save_file("cat.png", b"second")
            .await
            .expect("second save");
        let contents = std::fs::read(storage.root_path().join("cat.png")).expect("read file");
        assert_eq!(contents, b"second");
    }

    #[tokio::test]
    async fn ensure_root_creates_missing_tree() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("static").join("uploads");
        let storage = Storage::new(root.clone());
        storage.ensure_root().await.expect("ensure root");
        assert!(root.is_dir());
    }
}
