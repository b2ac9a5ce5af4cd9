use std::ffi::OsString;
use std::path::Path;
use async_trait::async_trait;
use tokio::{fs, io};
use uuid::Uuid;
use crate::rng::make_uuid;

/// Filesystem access of the note storage.
#[async_trait]
pub trait NoteStorageIo: Send + Sync {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    async fn open_file(&self, path: &Path) -> io::Result<OpenFile>;

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Names of the regular files in `path`, in no particular order.
    async fn list_files(&self, path: &Path) -> io::Result<Vec<OsString>>;

    fn generate_uuid(&self) -> Uuid;
}

pub struct OpenFile {
    pub file: Box<dyn io::AsyncRead + Unpin + Send + Sync>,
    pub size: u64,
}

#[derive(Debug, Default)]
pub struct ProductionNoteStorageIo;

impl ProductionNoteStorageIo {
    pub fn new() -> Self {
        ProductionNoteStorageIo
    }
}

#[async_trait]
impl NoteStorageIo for ProductionNoteStorageIo {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn open_file(&self, path: &Path) -> io::Result<OpenFile> {
        let file = fs::File::open(path).await?;
        let metadata = file.metadata().await?;
        Ok(
            OpenFile {
                file: Box::new(file),
                size: metadata.len(),
            }
        )
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }

    async fn list_files(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut read = fs::read_dir(path).await?;
        let mut ret = Vec::new();
        while let Some(entry) = read.next_entry().await? {
            if entry.file_type().await?.is_file() {
                ret.push(entry.file_name());
            }
        }
        Ok(ret)
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut rand::rng())
    }
}
