use super::KeyValueCollection;
use anyhow::Result;
use async_trait::async_trait;
use fjall::{Keyspace, PartitionHandle, PersistMode};
use std::sync::Arc;
use tracing::debug;

/// A collection stored in a fjall partition. Writes are synced before
/// returning so a short-lived CLI process never loses them.
pub struct DiskCollection {
    keyspace: Arc<Keyspace>,
    partition: PartitionHandle,
}

impl DiskCollection {
    pub fn new(keyspace: Arc<Keyspace>, partition: PartitionHandle) -> Self {
        Self {
            keyspace,
            partition,
        }
    }
}

#[async_trait]
impl KeyValueCollection for DiskCollection {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let value = self.partition.get(key)?.map(|v| v.to_vec());
        debug!(
            "Disk GET {} ({})",
            String::from_utf8_lossy(key),
            if value.is_some() { "hit" } else { "miss" }
        );
        Ok(value)
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.partition.insert(key, value)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Disk PUT {}", String::from_utf8_lossy(key));
        Ok(())
    }

    async fn remove(&self, key: &[u8]) -> Result<()> {
        self.partition.remove(key)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Disk REMOVE {}", String::from_utf8_lossy(key));
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let mut pairs = Vec::new();
        for item in self.partition.prefix(prefix) {
            let (key, value) = item?;
            pairs.push((key.to_vec(), value.to_vec()));
        }
        debug!(
            "Disk SCAN {} -> {} entries",
            String::from_utf8_lossy(prefix),
            pairs.len()
        );
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fjall::PartitionCreateOptions;
    use tempfile::tempdir;

    fn open(dir: &std::path::Path) -> DiskCollection {
        let keyspace = Arc::new(fjall::Config::new(dir).open().unwrap());
        let partition = keyspace
            .open_partition("test", PartitionCreateOptions::default())
            .unwrap();
        DiskCollection::new(keyspace, partition)
    }

    #[tokio::test]
    async fn test_disk_get_put_remove() {
        let dir = tempdir().unwrap();
        let collection = open(dir.path());

        assert!(collection.get(b"key1").await.unwrap().is_none());
        collection.put(b"key1", b"123").await.unwrap();
        assert_eq!(collection.get(b"key1").await.unwrap(), Some(b"123".to_vec()));

        collection.remove(b"key1").await.unwrap();
        assert!(collection.get(b"key1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_disk_scan_prefix_is_ordered() {
        let dir = tempdir().unwrap();
        let collection = open(dir.path());

        collection.put(b"a\x00002", b"second").await.unwrap();
        collection.put(b"a\x00001", b"first").await.unwrap();
        collection.put(b"ab\x00001", b"other").await.unwrap();

        let values: Vec<Vec<u8>> = collection
            .scan_prefix(b"a\x00")
            .await
            .unwrap()
            .into_iter()
            .map(|(_, v)| v)
            .collect();
        assert_eq!(values, vec![b"first".to_vec(), b"second".to_vec()]);
    }
}
