//! In-memory stub store with built-in stubs.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crudkit_core::{
    application::{ApplicationError, ports::StubStore},
    domain::{ArtifactKind, DomainError, Stub},
    error::CrudkitResult,
};

use crate::builtin_stubs;

/// Thread-safe in-memory stub store.
#[derive(Clone)]
pub struct InMemoryStubStore {
    inner: Arc<RwLock<HashMap<ArtifactKind, Stub>>>,
}

impl InMemoryStubStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with the built-in stubs loaded.
    pub fn with_builtin() -> CrudkitResult<Self> {
        let store = Self::new();
        for stub in builtin_stubs::all_stubs() {
            store.insert(stub)?;
        }
        Ok(store)
    }

    /// Get the number of stubs.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStubStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StubStore for InMemoryStubStore {
    fn get(&self, artifact: ArtifactKind) -> CrudkitResult<Stub> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(&artifact).cloned().ok_or_else(|| {
            DomainError::MissingStub {
                artifact: artifact.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> CrudkitResult<Vec<Stub>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.values().cloned().collect())
    }

    fn insert(&self, stub: Stub) -> CrudkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(stub.artifact, stub);
        Ok(())
    }
}
