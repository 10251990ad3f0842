//! 会话存储服务 - 业务能力层
//!
//! 只负责"按键读写一段序列化文本"，不关心内容格式和流程。
//! 存储是尽力而为的：调用方负责记录并吞掉失败。

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// 会话级键值存储
pub trait SessionStore {
    /// 读取；键不存在时返回 `Ok(None)`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// 写入（覆盖）
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// 删除；键不存在也视为成功
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// 内存存储
///
/// 生命周期与进程相同，用于测试和嵌入式调用。
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // 锁中毒只会发生在持锁线程 panic 时，数据本身仍可用
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}

/// 文件存储
///
/// 每个键对应目录下的一个 `<key>.json` 文件。
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    folder: PathBuf,
}

impl FileSessionStore {
    /// 使用指定目录创建（目录在首次写入时创建）
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// 键直接作为文件名，不能跳出存储目录
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.folder.join(format!("{}.json", key)))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("读取会话快照: {}", path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.folder)?;
            fs::write(&path, value)
        };

        write().map_err(|source| StorageError::WriteFailed {
            key: key.to_string(),
            source,
        })?;
        debug!("写入会话快照: {} ({} 字节)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::DeleteFailed {
                key: key.to_string(),
                source,
            }),
        }
    }
}
