//! Invocation Port
//!
//! The runtime engine that actually calls setters and factories on live
//! instances. Resolution only forwards to it.

use crate::error::Result;
use crate::value_objects::{MetaMethod, ObjectHandle};

/// Calls introspected methods on live instances
pub trait MethodInvoker: Send + Sync {
    /// Invoke a zero-argument `method` on `target` and return the produced instance
    fn invoke_factory(&self, method: &MetaMethod, target: &ObjectHandle) -> Result<ObjectHandle>;

    /// Invoke a one-argument setter `method` on `target` passing `argument`
    fn invoke_setter(
        &self,
        method: &MetaMethod,
        target: &ObjectHandle,
        argument: &ObjectHandle,
    ) -> Result<()>;
}
