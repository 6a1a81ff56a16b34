use async_trait::async_trait;

use crate::core::{QuoteRecord, SymbolDescriptor};

/// Key-value cache whose entries expire after a fixed time-to-live.
///
/// An expired entry reads exactly like a missing one.
#[async_trait]
pub trait Cache<K, V>: Send + Sync
where
    K: Send + Sync,
    V: Send + Sync,
{
    async fn get(&self, key: &K) -> Option<V>;
    async fn put(&self, key: K, value: V);
    async fn remove(&self, key: &K);
    async fn clear(&self);
}

/// Last fetched quote per `asset_type:SYMBOL` key.
pub type QuoteCache = dyn Cache<String, QuoteRecord>;

/// Filtered symbol listing per exchange.
pub type SymbolCache = dyn Cache<String, Vec<SymbolDescriptor>>;
