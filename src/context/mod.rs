//! Guarded contexts: values propagated down a tree of explicit scopes.
//!
//! A [`Scope`] stands for one position in a tree. Supplying a value for a
//! [`Context`] returns a child scope; every scope derived from that child
//! sees the value until a deeper scope supplies another one. Reading walks
//! up the parent chain and returns the nearest supplied value.
//!
//! Presence is `Option` presence. A context nobody supplied, or one
//! supplied as `None`, is absent; any `Some` value is present, including
//! empty structs, maps and strings.
//!
//! # Example
//!
//! ```rust
//! use statehub::context::{Context, Scope};
//!
//! let theme: Context<String> = Context::new("Theme").with_value_descriptor("theme");
//!
//! let root = Scope::root();
//! assert_eq!(
//!     theme.use_value(&root).unwrap_err().to_string(),
//!     "No theme value was provided to ThemeContext"
//! );
//!
//! let themed = root.supply(&theme, "dark".to_string());
//! let child = themed.supply(&Context::<u8>::new("Unrelated"), 1);
//! assert_eq!(theme.use_value(&child).unwrap(), "dark");
//! ```

mod error;

pub use error::ContextError;

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A key for values propagated through scopes.
///
/// Each context created with [`Context::new`] is distinct, even when two
/// share a descriptor. Clones refer to the same context.
pub struct Context<T> {
    id: u64,
    descriptor: Arc<str>,
    value_descriptor: Option<Arc<str>>,
    _value: PhantomData<fn() -> T>,
}

impl<T: Clone + Send + Sync + 'static> Context<T> {
    /// Create a context whose default is absent.
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            descriptor: Arc::from(descriptor.into()),
            value_descriptor: None,
            _value: PhantomData,
        }
    }

    /// Name the kind of value this context carries, used in error messages.
    pub fn with_value_descriptor(mut self, value_descriptor: impl Into<String>) -> Self {
        self.value_descriptor = Some(Arc::from(value_descriptor.into()));
        self
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn value_descriptor(&self) -> Option<&str> {
        self.value_descriptor.as_deref()
    }

    /// Nearest value supplied along `scope`'s chain, or `None` if absent.
    pub fn read(&self, scope: &Scope) -> Option<T> {
        scope.lookup(self).and_then(|value| value.clone())
    }

    /// Like [`read`](Self::read) but fails when the value is absent.
    pub fn use_value(&self, scope: &Scope) -> Result<T, ContextError> {
        self.read(scope).ok_or_else(|| self.missing())
    }

    fn missing(&self) -> ContextError {
        ContextError::MissingProvidedValue {
            descriptor: self.descriptor.to_string(),
            value_descriptor: self.value_descriptor.as_deref().unwrap_or_default().to_string(),
        }
    }
}

impl<T> Clone for Context<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            descriptor: Arc::clone(&self.descriptor),
            value_descriptor: self.value_descriptor.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Context<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("descriptor", &self.descriptor)
            .field("value_descriptor", &self.value_descriptor)
            .finish()
    }
}

/// Create a context together with its guarded accessor.
///
/// ```rust
/// use statehub::context::{guarded_context, Scope};
///
/// let (context, use_count) = guarded_context::<u32>("Count", None);
/// let scope = Scope::root().supply(&context, 0);
///
/// assert_eq!(use_count(&scope), Ok(0));
/// assert_eq!(
///     use_count(&Scope::root()).unwrap_err().to_string(),
///     "No  value was provided to CountContext"
/// );
/// ```
pub fn guarded_context<T: Clone + Send + Sync + 'static>(
    descriptor: impl Into<String>,
    value_descriptor: Option<&str>,
) -> (Context<T>, impl Fn(&Scope) -> Result<T, ContextError>) {
    let mut context = Context::new(descriptor);
    if let Some(value_descriptor) = value_descriptor {
        context = context.with_value_descriptor(value_descriptor);
    }
    let accessor = {
        let context = context.clone();
        move |scope: &Scope| context.use_value(scope)
    };
    (context, accessor)
}

struct ScopeNode {
    parent: Scope,
    context_id: u64,
    value: Arc<dyn Any + Send + Sync>,
}

/// An explicit handle for one tree position.
///
/// Scopes are immutable and cheap to clone. Supplying a value never changes
/// the scope it is called on.
#[derive(Clone, Default)]
pub struct Scope {
    node: Option<Arc<ScopeNode>>,
}

impl Scope {
    /// A scope with nothing supplied.
    pub fn root() -> Self {
        Self::default()
    }

    /// Child scope in which `context` reads as `value`.
    pub fn supply<T>(&self, context: &Context<T>, value: T) -> Scope
    where
        T: Clone + Send + Sync + 'static,
    {
        self.supply_option(context, Some(value))
    }

    /// Child scope in which `context` reads as absent, hiding any ancestor
    /// value.
    pub fn supply_absent<T>(&self, context: &Context<T>) -> Scope
    where
        T: Clone + Send + Sync + 'static,
    {
        self.supply_option(context, None)
    }

    /// Child scope in which `context` reads as `value`, absent when `None`.
    pub fn supply_option<T>(&self, context: &Context<T>, value: Option<T>) -> Scope
    where
        T: Clone + Send + Sync + 'static,
    {
        Scope {
            node: Some(Arc::new(ScopeNode {
                parent: self.clone(),
                context_id: context.id,
                value: Arc::new(value),
            })),
        }
    }

    /// Number of supplies between this scope and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node.as_ref();
        while let Some(node) = current {
            depth += 1;
            current = node.parent.node.as_ref();
        }
        depth
    }

    fn lookup<T: 'static>(&self, context: &Context<T>) -> Option<&Option<T>> {
        let mut current = self.node.as_ref();
        while let Some(node) = current {
            if node.context_id == context.id {
                return node.value.downcast_ref::<Option<T>>();
            }
            current = node.parent.node.as_ref();
        }
        None
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("depth", &self.depth()).finish()
    }
}
