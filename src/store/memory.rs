use super::KeyValueCollection;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory collection backed by an ordered map
pub struct MemoryCollection {
    inner: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueCollection for MemoryCollection {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let map = self.inner.lock().await;
        Ok(map.get(key).cloned())
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let mut map = self.inner.lock().await;
        debug!("Memory PUT {}", String::from_utf8_lossy(key));
        map.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &[u8]) -> Result<()> {
        let mut map = self.inner.lock().await;
        map.remove(key);
        debug!("Memory REMOVE {}", String::from_utf8_lossy(key));
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let map = self.inner.lock().await;
        Ok(map
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_get_put_remove() {
        let collection = MemoryCollection::new();

        assert!(collection.get(b"key1").await.unwrap().is_none());
        collection.put(b"key1", b"123").await.unwrap();
        assert_eq!(collection.get(b"key1").await.unwrap(), Some(b"123".to_vec()));
        assert!(collection.get(b"key2").await.unwrap().is_none());

        collection.remove(b"key1").await.unwrap();
        assert!(collection.get(b"key1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_scan_prefix() {
        let collection = MemoryCollection::new();
        collection.put(b"bob\x001", b"b1").await.unwrap();
        collection.put(b"alice\x002", b"a2").await.unwrap();
        collection.put(b"alice\x001", b"a1").await.unwrap();
        collection.put(b"alicex\x001", b"x").await.unwrap();

        let pairs = collection.scan_prefix(b"alice\x00").await.unwrap();
        let values: Vec<&[u8]> = pairs.iter().map(|(_, v)| v.as_slice()).collect();
        assert_eq!(values, vec![b"a1".as_slice(), b"a2".as_slice()]);

        assert_eq!(collection.scan_prefix(b"").await.unwrap().len(), 4);
    }
}
