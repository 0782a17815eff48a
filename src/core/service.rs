//! Store trait for record collections

use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing record collections
///
/// Implementations provide CRUD operations for a specific record type. The
/// filter/sort/aggregate functions are deliberately decoupled from this
/// trait: they accept plain collections, so any source satisfying a
/// "returns `Vec<T>`" contract can feed them.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Create a new record
    async fn create(&self, record: T) -> Result<T>;

    /// Get a record by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all records
    async fn list(&self) -> Result<Vec<T>>;

    /// Update an existing record
    async fn update(&self, id: &Uuid, record: T) -> Result<T>;

    /// Delete a record
    async fn delete(&self, id: &Uuid) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The trait compiles and can be used in generic contexts
    #[allow(dead_code)]
    async fn generic_list<T, S>(store: &S) -> Result<Vec<T>>
    where
        T: Record,
        S: RecordStore<T>,
    {
        store.list().await
    }

    #[test]
    fn test_trait_compiles() {
        // This test just verifies that the trait is correctly defined
        // and can be used in generic contexts
    }
}
