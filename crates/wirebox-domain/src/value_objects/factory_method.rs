//! Factory method value object

use std::fmt;

use super::method::MetaMethod;
use super::object_handle::ObjectHandle;
use super::type_info::Type;
use crate::constants::{
    REASON_FACTORY_EMPTY_RESULT, REASON_FACTORY_HAS_PARAMETERS, REASON_FACTORY_INVALID_KIND,
    REASON_FACTORY_ROOT_OBJECT, REASON_FACTORY_ROOT_RESULT,
};
use crate::error::{Error, Result};
use crate::ports::MethodInvoker;

/// Value Object: Factory Method
///
/// A zero-argument method or slot of `object_type` producing an instance of
/// `result_type`.
///
/// ## Business Rules
///
/// - Equality is on the `(object_type, result_type)` pair only; two distinct
///   methods with the same pairing are the same factory method
/// - Neither type may be the root type
#[derive(Debug, Clone)]
pub struct FactoryMethod {
    object_type: Type,
    result_type: Type,
    method: MetaMethod,
}

impl FactoryMethod {
    /// Validate `method` as a factory
    ///
    /// `result_type` is what the introspector resolved the declared return
    /// token to, `None` when it resolved to nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFactoryMethod`] when the method is not an invokable
    /// zero-argument method or either type fails introspection.
    pub fn try_new(method: MetaMethod, result_type: Option<Type>) -> Result<Self> {
        let signature = method.qualified_signature();

        if !method.kind().is_invokable() {
            return Err(Error::invalid_factory_method(
                signature,
                REASON_FACTORY_INVALID_KIND,
            ));
        }
        if method.parameter_count() != 0 {
            return Err(Error::invalid_factory_method(
                signature,
                REASON_FACTORY_HAS_PARAMETERS,
            ));
        }

        let object_type = method.enclosing_type().clone();
        if object_type.is_root() {
            return Err(Error::invalid_factory_method(
                signature,
                REASON_FACTORY_ROOT_OBJECT,
            ));
        }

        let Some(result_type) = result_type else {
            return Err(Error::invalid_factory_method(
                signature,
                REASON_FACTORY_EMPTY_RESULT,
            ));
        };
        if result_type.is_root() {
            return Err(Error::invalid_factory_method(
                signature,
                REASON_FACTORY_ROOT_RESULT,
            ));
        }

        Ok(Self {
            object_type,
            result_type,
            method,
        })
    }

    /// Type declaring the factory method
    pub fn object_type(&self) -> &Type {
        &self.object_type
    }

    /// Declared type of the produced instance
    pub fn result_type(&self) -> &Type {
        &self.result_type
    }

    /// Underlying method
    pub fn method(&self) -> &MetaMethod {
        &self.method
    }

    /// Create an instance by invoking the method on `on` through the runtime engine
    pub fn invoke(&self, invoker: &dyn MethodInvoker, on: &ObjectHandle) -> Result<ObjectHandle> {
        invoker.invoke_factory(&self.method, on)
    }
}

impl PartialEq for FactoryMethod {
    fn eq(&self, other: &Self) -> bool {
        self.object_type == other.object_type && self.result_type == other.result_type
    }
}

impl Eq for FactoryMethod {}

impl fmt::Display for FactoryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.method, self.result_type)
    }
}
