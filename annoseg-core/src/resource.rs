//! Named auxiliary resources bundled with a trained model
//!
//! Feature generators look up gazetteers, word clusters or embeddings by
//! name. The model owns the resources; lookups only hand out shared handles.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Opaque, shareable resource handle
pub type Resource = Arc<dyn Any + Send + Sync>;

/// Access to the resources available in a model, identified by name
///
/// One model instance is typically shared by many concurrently running
/// pipelines, so implementations must be safe to call from several threads
/// at once without external locking. This is expressed by the `Send + Sync`
/// bound; implementations with interior mutability must synchronize it
/// themselves.
///
/// This trait is meant to be implemented by model bundles, not by feature
/// generators that consume resources.
pub trait ResourceProvider: Send + Sync {
    /// Resource registered under `identifier`, or `None` if there is none
    fn resource(&self, identifier: &str) -> Option<Resource>;

    /// True if a resource is registered under `identifier`
    fn contains(&self, identifier: &str) -> bool {
        self.resource(identifier).is_some()
    }
}

/// Typed lookups on top of [`ResourceProvider`]
pub trait ResourceProviderExt: ResourceProvider {
    /// Resource under `identifier` downcast to `T`
    ///
    /// Returns `None` when the resource is absent or has another type.
    fn resource_as<T: Any + Send + Sync>(&self, identifier: &str) -> Option<Arc<T>> {
        self.resource(identifier)?.downcast::<T>().ok()
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProviderExt for P {}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Arc<P> {
    fn resource(&self, identifier: &str) -> Option<Resource> {
        (**self).resource(identifier)
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Box<P> {
    fn resource(&self, identifier: &str) -> Option<Resource> {
        (**self).resource(identifier)
    }
}

/// Map-backed resource provider
///
/// Filled while the model is assembled and read-only afterwards, so
/// concurrent lookups need no locking.
#[derive(Clone, Default)]
pub struct ResourceMap {
    resources: HashMap<String, Resource>,
}

impl ResourceMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under `identifier`, replacing any previous entry
    pub fn insert<T: Any + Send + Sync>(&mut self, identifier: impl Into<String>, value: T) {
        self.resources.insert(identifier.into(), Arc::new(value));
    }

    /// Register an already shared resource
    pub fn insert_shared(&mut self, identifier: impl Into<String>, resource: Resource) {
        self.resources.insert(identifier.into(), resource);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with<T: Any + Send + Sync>(mut self, identifier: impl Into<String>, value: T) -> Self {
        self.insert(identifier, value);
        self
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// True if no resource is registered
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }
}

impl ResourceProvider for ResourceMap {
    fn resource(&self, identifier: &str) -> Option<Resource> {
        self.resources.get(identifier).cloned()
    }
}

impl fmt::Debug for ResourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceMap")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}
