//! Process-wide default logger factory.
//!
//! Every lookup goes through a single shared slot. The first lookup that
//! finds it empty builds a [`StandardOutLoggerFactory`], announces itself
//! through it and publishes it with a compare-and-set; a caller that loses
//! that race drops its own instance and returns the winner, so all callers
//! converge on one factory. [`set_default_factory`] replaces the slot
//! unconditionally.
//!
//! ## Example
//!
//! ```
//! use logfactory_core::registry::{self, LoggingFactory};
//! use logfactory_types::Logger;
//!
//! let logger = registry::get_logger::<LoggingFactory>();
//! logger.info("ready");
//! ```

use arc_swap::ArcSwapOption;
use logfactory_types::{bail, FactoryRef, LoggerRef, Result, SourceType};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

use crate::stdout::StandardOutLoggerFactory;

/// Line written through a freshly built default factory before it is published.
pub const DEFAULT_ANNOUNCEMENT: &str = "Using Standard Out as the default logging system.";

/// Marker type naming the facade itself.
///
/// Used as the source type of the default-factory announcement and handy
/// for `get_logger::<LoggingFactory>()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFactory;

/// A lock-free cell holding at most one factory.
///
/// Loads are acquire, stores release; first-time initialization is a
/// compare-and-set against the empty state.
pub struct FactorySlot {
    inner: ArcSwapOption<FactoryRef>,
}

impl FactorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            inner: ArcSwapOption::empty(),
        }
    }

    /// Current factory, if one has been published.
    pub fn load(&self) -> Option<FactoryRef> {
        self.inner.load_full().map(|factory| FactoryRef::clone(&factory))
    }

    /// Whether a factory has been published.
    pub fn is_set(&self) -> bool {
        self.inner.load().is_some()
    }

    /// Return the current factory, publishing `init()` if the slot is empty.
    ///
    /// `init` may run on several threads at once; only one result is
    /// published and every caller gets that one back.
    pub fn get_or_init_with<F>(&self, init: F) -> FactoryRef
    where
        F: FnOnce() -> FactoryRef,
    {
        if let Some(factory) = self.load() {
            return factory;
        }

        let fresh = init();
        let empty: Option<Arc<FactoryRef>> = None;
        let previous = self
            .inner
            .compare_and_swap(&empty, Some(Arc::new(FactoryRef::clone(&fresh))));

        match &*previous {
            Some(winner) => {
                debug!(
                    "Discarding {} logger factory, another thread published one first",
                    fresh.backend_name()
                );
                FactoryRef::clone(winner)
            }
            None => fresh,
        }
    }

    /// Replace the current factory unconditionally.
    pub fn store(&self, factory: FactoryRef) {
        self.inner.store(Some(Arc::new(factory)));
    }

    /// Replace the current factory, rejecting an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Precondition`](logfactory_types::FactoryError::Precondition)
    /// and leaves the slot untouched when `factory` is `None`.
    pub fn try_store(&self, factory: Option<FactoryRef>) -> Result<()> {
        match factory {
            Some(factory) => {
                self.store(factory);
                Ok(())
            }
            None => bail!(Precondition, "default logger factory must not be absent"),
        }
    }

    #[cfg(test)]
    pub(crate) fn clear(&self) {
        self.inner.store(None);
    }
}

impl Default for FactorySlot {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_FACTORY: Lazy<FactorySlot> = Lazy::new(FactorySlot::new);

/// Build a standard-output factory from `build` and announce it.
///
/// The announcement goes through the new instance, under `name`, before the
/// caller knows whether it will be published.
pub(crate) fn announce_new_default<F>(name: &str, build: F) -> FactoryRef
where
    F: FnOnce() -> StandardOutLoggerFactory,
{
    let factory: FactoryRef = Arc::new(build());
    factory
        .new_instance(name, SourceType::of::<LoggingFactory>())
        .debug(DEFAULT_ANNOUNCEMENT);
    factory
}

/// The process-wide default factory, created on first use.
pub fn default_factory() -> FactoryRef {
    default_factory_with(StandardOutLoggerFactory::new)
}

/// [`default_factory`], building the standard-output factory with `build`
/// when the global slot is empty.
pub(crate) fn default_factory_with<F>(build: F) -> FactoryRef
where
    F: FnOnce() -> StandardOutLoggerFactory,
{
    DEFAULT_FACTORY.get_or_init_with(|| {
        announce_new_default(SourceType::of::<LoggingFactory>().full_name(), build)
    })
}

/// Replace the process-wide default factory.
///
/// Every later lookup, on any thread, sees `factory`.
pub fn set_default_factory(factory: FactoryRef) {
    debug!("Default logger factory set to {}", factory.backend_name());
    DEFAULT_FACTORY.store(factory);
}

/// Replace the process-wide default factory with one resolved at runtime.
///
/// # Errors
///
/// Fails with a precondition error, keeping the previous default, when
/// `factory` is `None`.
pub fn try_set_default_factory(factory: Option<FactoryRef>) -> Result<()> {
    DEFAULT_FACTORY.try_store(factory)
}

/// Whether a default factory exists yet, without creating one.
pub fn default_factory_is_set() -> bool {
    DEFAULT_FACTORY.is_set()
}

/// Logger for `T`, named after its full type path.
pub fn get_logger<T: ?Sized + 'static>() -> LoggerRef {
    get_instance(SourceType::of::<T>())
}

/// Logger for `source`, named after its full type path.
pub fn get_instance(source: SourceType) -> LoggerRef {
    get_named_instance(source.full_name(), source)
}

/// Logger for `name` and `source` from the default factory.
pub fn get_named_instance(name: &str, source: SourceType) -> LoggerRef {
    default_factory().new_instance(name, source)
}

#[cfg(test)]
pub(crate) fn reset_default_factory() {
    DEFAULT_FACTORY.clear();
}
