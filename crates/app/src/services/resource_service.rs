//! Resource service — CRUD use-cases over per-resource JSON documents.
//!
//! Every operation is a full read-modify-write cycle against the
//! [`DocumentStore`]; the on-disk document is the only state. A
//! per-resource mutex serialises concurrent cycles within this process so
//! two writers to the same resource cannot interleave their load and save.

use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};

use folio_domain::document;
use folio_domain::error::FolioError;
use folio_domain::id::ItemId;
use folio_domain::resource::{ResourceName, Shape};

use crate::ports::DocumentStore;

/// Outcome of a `create` call.
///
/// Sequence-shaped resources append a new item; object-shaped resources
/// replace the whole document with the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    /// New item appended to a sequence resource.
    Item(Value),
    /// Whole document replaced for an object resource.
    Document(Value),
}

/// Application service for resource document CRUD.
pub struct ResourceService<S> {
    store: S,
    locks: [Mutex<()>; ResourceName::ALL.len()],
}

impl<S: DocumentStore> ResourceService<S> {
    /// Create a new service backed by the given document store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    async fn lock(&self, name: ResourceName) -> MutexGuard<'_, ()> {
        self.locks[name as usize].lock().await
    }

    /// The document backing `name`, verbatim.
    ///
    /// A document that is missing or unreadable yields [`Value::Null`];
    /// callers cannot distinguish "never written" from "broken on disk".
    /// Read failures are logged here and swallowed.
    pub async fn fetch(&self, name: ResourceName) -> Value {
        let _guard = self.lock(name).await;
        self.load_or_null(name).await
    }

    /// Create content under `name`.
    ///
    /// Sequence-shaped: append an item built from `body` with a fresh
    /// server-assigned id, and return that item. Object-shaped: replace the
    /// whole document with `body` and return it.
    pub async fn create(&self, name: ResourceName, body: Value) -> Created {
        let _guard = self.lock(name).await;
        match name.shape() {
            Shape::Sequence => {
                let mut items = self.load_items(name).await;
                let item = document::new_item(ItemId::generate(), body);
                items.push(item.clone());
                self.persist(name, &Value::Array(items)).await;
                Created::Item(item)
            }
            Shape::Object => {
                self.persist(name, &body).await;
                Created::Document(body)
            }
        }
    }

    /// Replace the whole document of an object-shaped resource.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::ShapeMismatch`] for sequence-shaped resources;
    /// items must be addressed individually by id.
    pub async fn replace(&self, name: ResourceName, body: Value) -> Result<Value, FolioError> {
        if name.shape() != Shape::Object {
            return Err(FolioError::ShapeMismatch {
                resource: name,
                expected: Shape::Object,
            });
        }
        let _guard = self.lock(name).await;
        self.persist(name, &body).await;
        Ok(body)
    }

    /// Shallow-merge `patch` into the item with the given id.
    ///
    /// Against an object-shaped resource this replaces the whole document
    /// and ignores `id` — a historical quirk of the API, kept for
    /// compatibility with existing clients.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NotFound`] when no item matches `id`.
    pub async fn update_item(
        &self,
        name: ResourceName,
        id: ItemId,
        patch: Value,
    ) -> Result<Value, FolioError> {
        let _guard = self.lock(name).await;
        if name.shape() == Shape::Object {
            self.persist(name, &patch).await;
            return Ok(patch);
        }
        let mut items = self.load_items(name).await;
        let Some(index) = document::position_of(&items, id) else {
            return Err(FolioError::NotFound {
                resource: name,
                id: id.as_i64(),
            });
        };
        document::merge_item(&mut items[index], &patch);
        let updated = items[index].clone();
        self.persist(name, &Value::Array(items)).await;
        Ok(updated)
    }

    /// Remove the first item with the given id and return it.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::ShapeMismatch`] for object-shaped resources
    /// and [`FolioError::NotFound`] when no item matches `id`.
    pub async fn delete_item(&self, name: ResourceName, id: ItemId) -> Result<Value, FolioError> {
        if name.shape() != Shape::Sequence {
            return Err(FolioError::ShapeMismatch {
                resource: name,
                expected: Shape::Sequence,
            });
        }
        let _guard = self.lock(name).await;
        let mut items = self.load_items(name).await;
        let Some(index) = document::position_of(&items, id) else {
            return Err(FolioError::NotFound {
                resource: name,
                id: id.as_i64(),
            });
        };
        let removed = items.remove(index);
        self.persist(name, &Value::Array(items)).await;
        Ok(removed)
    }

    async fn load_or_null(&self, name: ResourceName) -> Value {
        match self.store.load(name).await {
            Ok(Some(doc)) => doc,
            Ok(None) => Value::Null,
            Err(err) => {
                tracing::warn!(resource = %name, error = %err, "failed to read document, treating as empty");
                Value::Null
            }
        }
    }

    /// The items of a sequence resource; missing, unreadable, or
    /// mis-shaped documents start over as an empty list.
    async fn load_items(&self, name: ResourceName) -> Vec<Value> {
        match self.load_or_null(name).await {
            Value::Array(items) => items,
            _ => Vec::new(),
        }
    }

    /// Persist `document`, swallowing failures.
    ///
    /// Write failures are logged and the caller proceeds as if the write
    /// succeeded, so the client response reflects unsaved state. Inherited
    /// API contract; see DESIGN notes.
    async fn persist(&self, name: ResourceName, document: &Value) {
        if let Err(err) = self.store.save(name, document).await {
            tracing::error!(resource = %name, error = %err, "failed to persist document");
        }
    }
}
