//! # Registry Plugin Host
//!
//! Compiled-in implementation of the [`PluginHost`] port: listener
//! factories are registered in code rather than discovered inside a plugin
//! bundle on disk. The bundle path is still validated and the plugin id is
//! derived from it, which keeps the loading semantics of a real host.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use event_hub::{EventListener, HostError, PluginHost, PluginHostFactory};

/// Builds one listener instance per `start_plugins` cycle.
pub type ListenerFactory = Box<dyn Fn() -> Arc<dyn EventListener> + Send + Sync>;

/// A plugin host whose listeners are compiled into the node.
///
/// `start_plugins` instantiates one listener per registered factory;
/// `stop_plugins` drops the instances. A second start without an
/// intervening stop reports [`HostError::AlreadyStarted`].
pub struct RegistryPluginHost {
    factories: Vec<ListenerFactory>,
    /// `Some` while plugins are running.
    instances: Mutex<Option<Vec<Arc<dyn EventListener>>>>,
}

impl RegistryPluginHost {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
            instances: Mutex::new(None),
        }
    }

    /// Register a listener factory.
    #[must_use]
    pub fn with_listener(mut self, factory: ListenerFactory) -> Self {
        self.factories.push(factory);
        self
    }

    /// Number of registered factories.
    #[must_use]
    pub fn registered(&self) -> usize {
        self.factories.len()
    }

    /// Wrap the registry in a host factory for the hub.
    #[must_use]
    pub fn into_factory(self) -> PluginHostFactory {
        let registry = Arc::new(self);
        Box::new(move |_bundle| Box::new(SharedRegistry(registry.clone())))
    }
}

impl Default for RegistryPluginHost {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginHost for RegistryPluginHost {
    fn load_plugin(&self, bundle: &Path) -> Result<String, HostError> {
        if !bundle.exists() {
            return Err(HostError::Unreadable(bundle.to_path_buf()));
        }

        let plugin_id = bundle
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        if plugin_id.is_empty() {
            return Err(HostError::Malformed(format!(
                "no plugin id derivable from bundle name {}",
                bundle.display()
            )));
        }

        debug!(plugin_id, "registry bundle accepted");
        Ok(plugin_id.to_string())
    }

    fn start_plugins(&self) -> Result<(), HostError> {
        let mut instances = self.instances.lock();
        if instances.is_some() {
            return Err(HostError::AlreadyStarted);
        }

        let built: Vec<Arc<dyn EventListener>> =
            self.factories.iter().map(|factory| factory()).collect();
        info!(listeners = built.len(), "registry plugins started");
        *instances = Some(built);
        Ok(())
    }

    fn stop_plugins(&self) {
        let mut instances = self.instances.lock();
        if instances.take().is_some() {
            info!("registry plugins stopped");
        }
    }

    fn extensions(&self) -> Vec<Arc<dyn EventListener>> {
        self.instances.lock().clone().unwrap_or_default()
    }
}

/// Shared handle so one registry can back every host the factory hands out.
struct SharedRegistry(Arc<RegistryPluginHost>);

impl PluginHost for SharedRegistry {
    fn load_plugin(&self, bundle: &Path) -> Result<String, HostError> {
        self.0.load_plugin(bundle)
    }

    fn start_plugins(&self) -> Result<(), HostError> {
        self.0.start_plugins()
    }

    fn stop_plugins(&self) {
        self.0.stop_plugins();
    }

    fn extensions(&self) -> Vec<Arc<dyn EventListener>> {
        self.0.extensions()
    }
}
