use crate::config::cli::LocalStorage;
use crate::core::Storage;
use crate::utils::error::{LoadError, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

/// 一次載入、之後唯讀的記錄集合。
///
/// 建構成功後內部的 `Vec<T>` 不再改變，所以沒有任何可變的 API；
/// 所有查詢都在 [`Repository::get_all`] 回傳的快照上進行。
#[derive(Debug, Clone)]
pub struct Repository<T> {
    records: Vec<T>,
}

impl<T: DeserializeOwned> Repository<T> {
    /// 透過 `Storage` 讀取整個來源並反序列化為 `T` 的 JSON 陣列
    pub fn load<S: Storage>(storage: &S, path: &str) -> std::result::Result<Self, LoadError> {
        let bytes = storage.read_file(path)?;
        let records: Vec<T> =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Malformed {
                path: storage.locate(path),
                source,
            })?;

        tracing::debug!(
            "Loaded {} records from {}",
            records.len(),
            storage.locate(path)
        );
        Ok(Self { records })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> std::result::Result<Self, LoadError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        Self::load(&LocalStorage::default(), &path)
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, LoadError> {
        let records = serde_json::from_str(json).map_err(|source| LoadError::Malformed {
            path: "<inline>".to_string(),
            source,
        })?;
        Ok(Self { records })
    }
}

impl<T> Repository<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// 全部記錄的唯讀快照，保留載入順序
    pub fn get_all(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|record| predicate(record)).collect()
    }

    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|record| predicate(record)).count()
    }

    /// 穩定排序：鍵相同時維持載入順序
    pub fn sorted_by_key<'a, K, F>(&'a self, key: F) -> Vec<&'a T>
    where
        K: Ord,
        F: Fn(&'a T) -> K,
    {
        let mut sorted: Vec<&'a T> = self.records.iter().collect();
        sorted.sort_by_key(|record| key(*record));
        sorted
    }

    /// 依鍵分組，每組內維持載入順序
    pub fn group_by<'a, K, F>(&'a self, key: F) -> BTreeMap<K, Vec<&'a T>>
    where
        K: Ord,
        F: Fn(&'a T) -> K,
    {
        let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(key(record)).or_default().push(record);
        }
        groups
    }

    /// 最大值有多筆時回傳載入順序中的第一筆
    pub fn max_by_key<K, F>(&self, key: F) -> Option<&T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        // Iterator::max_by_key 在相等時取最後一筆，這裡需要第一筆
        self.iter().fold(None, |best: Option<(&T, K)>, record| {
            let k = key(record);
            match best {
                Some((current, current_key)) if current_key >= k => Some((current, current_key)),
                _ => Some((record, k)),
            }
        })
        .map(|(record, _)| record)
    }
}

impl<'a, T> IntoIterator for &'a Repository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// 建構時就需要資料的儲存庫都走這個入口
pub fn load_from<T: DeserializeOwned, S: Storage>(storage: &S, path: &str) -> Result<Repository<T>> {
    Ok(Repository::load(storage, path)?)
}
