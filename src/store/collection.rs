use anyhow::Result;
use dashmap::DashMap;
use std::hash::Hash;

/// A typed document collection keyed by a unique field.
///
/// The collection is the single source of truth for its entity type: callers
/// query it fresh on every read and never cache results. Every operation is
/// async because the store boundary is a suspension point, even though this
/// in-process implementation completes immediately.
pub struct Collection<K, V> {
    documents: DashMap<K, V>,
}

impl<K, V> Collection<K, V>
where
    K: Ord + Hash + Eq + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Inserts the document, replacing any existing document under the key.
    pub async fn upsert(&self, key: K, document: V) -> Result<()> {
        self.documents.insert(key, document);
        Ok(())
    }

    /// Equality lookup by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.documents.get(key).map(|entry| entry.value().clone())
    }

    /// Returns the first document matching the predicate, if any.
    pub async fn find_one<P>(&self, predicate: P) -> Option<V>
    where
        P: Fn(&V) -> bool,
    {
        self.documents
            .iter()
            .find(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
    }

    /// Atomically mutates the document under the key and returns the
    /// post-update document. The entry stays locked for the duration of the
    /// mutation. `None` means the key is absent and nothing was changed.
    pub async fn update<F>(&self, key: &K, mutate: F) -> Option<V>
    where
        F: FnOnce(&mut V),
    {
        let mut entry = self.documents.get_mut(key)?;
        mutate(entry.value_mut());
        Some(entry.value().clone())
    }

    /// All documents ordered by key ascending.
    pub async fn all_sorted(&self) -> Vec<V> {
        let mut entries: Vec<(K, V)> = self
            .documents
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, document)| document).collect()
    }

    /// The largest key currently present, `None` on an empty collection.
    pub async fn max_key(&self) -> Option<K> {
        self.documents.iter().map(|entry| entry.key().clone()).max()
    }

    pub async fn len(&self) -> usize {
        self.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<K, V> Default for Collection<K, V>
where
    K: Ord + Hash + Eq + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
