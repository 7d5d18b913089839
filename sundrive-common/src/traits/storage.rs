use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::types::SystemResult;

/// 按键存取的持久化存储，每个键对应一个完整的数据块
pub trait BlobStorage {
    /// 键是否存在
    fn exists(&mut self, key: u32) -> bool;

    /// 读取整个数据块
    fn read_blob(&mut self, key: u32) -> SystemResult<Option<Vec<u8>>>;

    /// 写入整个数据块
    fn write_blob(&mut self, key: u32, data: &[u8]) -> SystemResult<()>;
}

/// 内存中的存储，掉电即失
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    blobs: BTreeMap<u32, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: u32) -> Option<&[u8]> {
        self.blobs.get(&key).map(Vec::as_slice)
    }
}

impl BlobStorage for MemoryStorage {
    fn exists(&mut self, key: u32) -> bool {
        self.blobs.contains_key(&key)
    }

    fn read_blob(&mut self, key: u32) -> SystemResult<Option<Vec<u8>>> {
        Ok(self.blobs.get(&key).cloned())
    }

    fn write_blob(&mut self, key: u32, data: &[u8]) -> SystemResult<()> {
        self.blobs.insert(key, data.to_vec());
        Ok(())
    }
}
