//! Validated injection setter

use std::fmt;

use super::method::{MetaMethod, MethodKind};
use super::type_info::Type;
use crate::constants::{
    REASON_EMPTY_PARAMETER_TYPE, REASON_INVALID_PARAMETER_COUNT, REASON_ROOT_PARAMETER_TYPE,
    REASON_SETTER_IS_CONSTRUCTOR, REASON_SETTER_IS_SIGNAL,
};
use crate::error::{Error, Result};
use crate::ports::MethodInvoker;
use crate::value_objects::ObjectHandle;

/// Value Object: Injection Setter
///
/// A [`MetaMethod`] proven to be usable as an injection point: an invokable
/// method or slot taking exactly one parameter whose type resolves to a
/// concrete, non-root type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetterMethod {
    method: MetaMethod,
    parameter_type: Type,
}

impl SetterMethod {
    /// Validate `method` as a setter
    ///
    /// `parameter_type` is what the introspector resolved the single parameter
    /// token to, `None` when it resolved to nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSetter`] naming the method when any eligibility rule fails.
    pub fn try_new(method: MetaMethod, parameter_type: Option<Type>) -> Result<Self> {
        let signature = method.qualified_signature();

        if method.parameter_count() != 1 {
            return Err(Error::invalid_setter(
                signature,
                REASON_INVALID_PARAMETER_COUNT,
            ));
        }

        match method.kind() {
            MethodKind::Signal => {
                return Err(Error::invalid_setter(signature, REASON_SETTER_IS_SIGNAL));
            }
            MethodKind::Constructor => {
                return Err(Error::invalid_setter(
                    signature,
                    REASON_SETTER_IS_CONSTRUCTOR,
                ));
            }
            MethodKind::Method | MethodKind::Slot => {}
        }

        let Some(parameter_type) = parameter_type else {
            return Err(Error::invalid_setter(signature, REASON_EMPTY_PARAMETER_TYPE));
        };
        if parameter_type.is_root() {
            return Err(Error::invalid_setter(signature, REASON_ROOT_PARAMETER_TYPE));
        }

        Ok(Self {
            method,
            parameter_type,
        })
    }

    /// Underlying method
    pub fn method(&self) -> &MetaMethod {
        &self.method
    }

    /// Type declaring the setter
    pub fn object_type(&self) -> &Type {
        self.method.enclosing_type()
    }

    /// Type of the single parameter
    pub fn parameter_type(&self) -> &Type {
        &self.parameter_type
    }

    /// Normalized setter signature
    pub fn signature(&self) -> String {
        self.method.signature()
    }

    /// Supply `argument` to `on` through the runtime engine
    pub fn invoke(
        &self,
        invoker: &dyn MethodInvoker,
        on: &ObjectHandle,
        argument: &ObjectHandle,
    ) -> Result<()> {
        invoker.invoke_setter(&self.method, on, argument)
    }
}

impl fmt::Display for SetterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.method, f)
    }
}
