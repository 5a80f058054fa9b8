//! Opaque handle to a created instance

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Value Object: Instance Handle
///
/// Shares ownership of an object created by the runtime engine. Handles are
/// compared by identity: two handles are equal iff they point at the same
/// allocation, whatever the instance's contents.
#[derive(Clone)]
pub struct ObjectHandle {
    instance: Arc<dyn Any + Send + Sync>,
}

impl ObjectHandle {
    /// Wrap a freshly created instance
    pub fn new<T: Any + Send + Sync>(instance: T) -> Self {
        Self {
            instance: Arc::new(instance),
        }
    }

    /// Borrow the instance as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }

    /// Whether both handles point at the same instance
    pub fn same_instance(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.instance), Arc::as_ptr(&other.instance))
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for ObjectHandle {}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHandle({:p})", Arc::as_ptr(&self.instance))
    }
}
