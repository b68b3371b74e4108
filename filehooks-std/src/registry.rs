//! Named hook registry for configuration-driven pipelines.
//!
//! A writer's configuration usually lists hooks by name
//! (`hooks = ["header", "gzip"]`). [`HookRegistry`] maps those names to
//! factories and builds the chained pipeline in the listed order.
//!
//! With the `inventory` feature, hook crates can also register factories
//! statically via `inventory::submit!` and [`HookRegistry::collected`]
//! gathers them.

use crate::sequence::chain_all;
use filehooks_core::{BoxError, BoxHooks};
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error;

/// A factory producing a fresh hook instance.
pub type HookFactory = Arc<dyn Fn() -> Result<BoxHooks, BoxError> + Send + Sync>;

/// Errors that can occur when registering or building hooks by name.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No factory is registered under this name.
    #[error("no hook registered under name: {0}")]
    UnknownHook(String),

    /// A factory is already registered under this name.
    #[error("hook already registered under name: {0}")]
    DuplicateHook(String),

    /// A factory failed to produce its hook.
    #[error("failed to create hook `{name}`")]
    Factory {
        /// Name of the failing factory.
        name: String,
        /// The factory's error.
        #[source]
        source: BoxError,
    },
}

/// A registry of named hook factories.
#[derive(Default, Clone)]
pub struct HookRegistry {
    factories: BTreeMap<String, HookFactory>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Result<BoxHooks, BoxError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::DuplicateHook(name));
        }
        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Register a factory, returning the registry.
    pub fn with<F>(mut self, name: impl Into<String>, factory: F) -> Result<Self, RegistryError>
    where
        F: Fn() -> Result<BoxHooks, BoxError> + Send + Sync + 'static,
    {
        self.register(name, factory)?;
        Ok(self)
    }

    /// Whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Instantiate a single hook by name.
    pub fn create(&self, name: &str) -> Result<BoxHooks, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownHook(name.to_owned()))?;
        factory().map_err(|source| RegistryError::Factory {
            name: name.to_owned(),
            source,
        })
    }

    /// Build the pipeline for `names`, chained in the given order.
    ///
    /// Every name is resolved before any factory runs, so an unknown name
    /// fails without creating anything. An empty list yields an identity
    /// hook.
    pub fn build<I, S>(&self, names: I) -> Result<BoxHooks, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.factories
                    .get_key_value(name)
                    .ok_or_else(|| RegistryError::UnknownHook(name.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let hooks = resolved
            .into_iter()
            .map(|(name, factory)| {
                factory().map_err(|source| RegistryError::Factory {
                    name: name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(chain_all(hooks))
    }
}

// ============================================================================
// Static registration
// ============================================================================

/// Registration entry for a hook factory in the global collection.
///
/// # Example
///
/// ```rust,ignore
/// inventory::submit! {
///     HookRegistration::new("gzip", || GzipHooks::default().boxed())
/// }
/// ```
#[cfg(feature = "inventory")]
pub struct HookRegistration {
    /// Name the hook is registered under.
    pub name: &'static str,
    /// Creates the hook.
    pub factory: fn() -> BoxHooks,
}

#[cfg(feature = "inventory")]
impl HookRegistration {
    /// Create a registration entry.
    pub const fn new(name: &'static str, factory: fn() -> BoxHooks) -> Self {
        Self { name, factory }
    }
}

#[cfg(feature = "inventory")]
inventory::collect!(HookRegistration);

#[cfg(feature = "inventory")]
impl HookRegistry {
    /// Create a registry from every [`HookRegistration`] submitted in the
    /// final binary.
    pub fn collected() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_collected()?;
        Ok(registry)
    }

    /// Add every submitted [`HookRegistration`] to this registry.
    ///
    /// A submitted name that is already registered fails with
    /// [`RegistryError::DuplicateHook`]; registrations added before the
    /// clash are kept.
    pub fn register_collected(&mut self) -> Result<(), RegistryError> {
        for registration in inventory::iter::<HookRegistration>() {
            let factory = registration.factory;
            self.register(registration.name, move || Ok(factory()))?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "inventory"))]
mod collected_tests {
    use super::*;
    use crate::hooks::NoopHooks;
    use filehooks_core::FileLifecycleHooks;
    use std::path::Path;

    fn collected_noop() -> BoxHooks {
        NoopHooks.boxed()
    }

    inventory::submit! {
        HookRegistration::new("collected-noop", collected_noop)
    }

    #[test]
    fn test_collected_contains_submitted_hooks() {
        let registry = HookRegistry::collected().unwrap();

        assert!(registry.contains("collected-noop"));
        let hooks = registry.build(["collected-noop"]).unwrap();
        assert!(hooks.on_file_deleting(Path::new("x.log")).is_ok());
    }

    #[test]
    fn test_collected_name_clashing_with_manual_one_is_rejected() {
        let mut registry = HookRegistry::new()
            .with("collected-noop", || Ok(NoopHooks.boxed()))
            .unwrap();

        let err = registry.register_collected().unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateHook(name) if name == "collected-noop"));
        assert_eq!(registry.len(), 1);
    }
}
