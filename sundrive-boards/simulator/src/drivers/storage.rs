use std::fs;
use std::path::{Path, PathBuf};

use sundrive_common::*;

/// 模拟器持久化存储实现（每个键一个文件）
pub struct FileBlobStorage {
    dir: PathBuf,
}

impl FileBlobStorage {
    pub fn new(dir: impl AsRef<Path>) -> SystemResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            error!("Failed to create storage dir {}: {}", dir.display(), e);
            SystemError::StorageError(StorageError::WriteFailed)
        })?;
        info!("File storage at {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: u32) -> PathBuf {
        self.dir.join(format!("blob_{key}.bin"))
    }
}

impl BlobStorage for FileBlobStorage {
    fn exists(&mut self, key: u32) -> bool {
        self.path_for(key).is_file()
    }

    fn read_blob(&mut self, key: u32) -> SystemResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read(&path).map(Some).map_err(|e| {
            warn!("Failed to read {}: {}", path.display(), e);
            SystemError::StorageError(StorageError::ReadFailed)
        })
    }

    fn write_blob(&mut self, key: u32, data: &[u8]) -> SystemResult<()> {
        let path = self.path_for(key);
        // 先写临时文件再改名，避免留下半截数据
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                warn!("Failed to write {}: {}", path.display(), e);
                SystemError::StorageError(StorageError::WriteFailed)
            })
    }
}
