//! Error handling types
//!
//! Every resolution failure is a value. Extraction and resolution stop at the
//! first violation and hand one of these back; nothing partially built escapes.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wirebox
#[derive(Error, Debug)]
pub enum Error {
    /// An injection-marked method is not an eligible setter
    #[error("Invalid setter {method}: {reason}")]
    InvalidSetter {
        /// Signature of the offending method
        method: String,
        /// Why the method was rejected
        reason: String,
    },

    /// A type requires an instance of itself
    #[error("Type {type_name} depends on itself through {method}")]
    DependencyOnSelf {
        /// Name of the owning type
        type_name: String,
        /// Signature of the setter requiring it
        method: String,
    },

    /// A type requires one of its own strict descendants
    #[error("Type {type_name} depends on its subtype {dependency} through {method}")]
    DependencyOnSubtype {
        /// Name of the owning type
        type_name: String,
        /// Name of the required subtype
        dependency: String,
        /// Signature of the setter requiring it
        method: String,
    },

    /// A type requires one of its own strict ancestors
    #[error("Type {type_name} depends on its supertype {dependency} through {method}")]
    DependencyOnSupertype {
        /// Name of the owning type
        type_name: String,
        /// Name of the required supertype
        dependency: String,
        /// Signature of the setter requiring it
        method: String,
    },

    /// Two distinct setters of one type require the same type (strict mode only)
    #[error("Type {type_name} requires {dependency} through more than one setter")]
    DependencyDuplicated {
        /// Name of the owning type
        type_name: String,
        /// Name of the type required more than once
        dependency: String,
    },

    /// No zero-argument method of the factory type produces the target
    #[error("No factory method found for type {type_name}")]
    NoFactoryMethod {
        /// Name of the requested type
        type_name: String,
    },

    /// More than one zero-argument method of the factory type produces the target
    #[error("Non-unique factory for type {type_name}: {candidates:?}")]
    NonUniqueFactory {
        /// Name of the requested type
        type_name: String,
        /// Signatures of every matching method
        candidates: Vec<String>,
    },

    /// A candidate factory method is ill-formed
    #[error("Invalid factory method {method}: {reason}")]
    InvalidFactoryMethod {
        /// Signature of the offending method
        method: String,
        /// Why the method was rejected
        reason: String,
    },

    /// A type cannot be used where a concrete, known type is required
    #[error("Invalid type {type_name}: {reason}")]
    InvalidType {
        /// Name of the offending type
        type_name: String,
        /// Why the type was rejected
        reason: String,
    },

    /// A type catalog description is malformed
    #[error("Invalid type catalog: {message}")]
    InvalidCatalog {
        /// Description of the problem
        message: String,
    },

    /// The runtime engine failed to invoke a method
    #[error("Invocation of {method} failed: {message}")]
    Invocation {
        /// Signature of the invoked method
        method: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure failure outside the resolution core
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Dependency validation error creation methods
impl Error {
    /// Create an invalid setter error
    pub fn invalid_setter<M: Into<String>, R: Into<String>>(method: M, reason: R) -> Self {
        Self::InvalidSetter {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Create a dependency-on-self error
    pub fn dependency_on_self<T: Into<String>, M: Into<String>>(type_name: T, method: M) -> Self {
        Self::DependencyOnSelf {
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    /// Create a dependency-on-subtype error
    pub fn dependency_on_subtype<T: Into<String>, D: Into<String>, M: Into<String>>(
        type_name: T,
        dependency: D,
        method: M,
    ) -> Self {
        Self::DependencyOnSubtype {
            type_name: type_name.into(),
            dependency: dependency.into(),
            method: method.into(),
        }
    }

    /// Create a dependency-on-supertype error
    pub fn dependency_on_supertype<T: Into<String>, D: Into<String>, M: Into<String>>(
        type_name: T,
        dependency: D,
        method: M,
    ) -> Self {
        Self::DependencyOnSupertype {
            type_name: type_name.into(),
            dependency: dependency.into(),
            method: method.into(),
        }
    }

    /// Create a duplicated dependency error
    pub fn dependency_duplicated<T: Into<String>, D: Into<String>>(
        type_name: T,
        dependency: D,
    ) -> Self {
        Self::DependencyDuplicated {
            type_name: type_name.into(),
            dependency: dependency.into(),
        }
    }
}

// Factory resolution error creation methods
impl Error {
    /// Create a no-factory-method error
    pub fn no_factory_method<T: Into<String>>(type_name: T) -> Self {
        Self::NoFactoryMethod {
            type_name: type_name.into(),
        }
    }

    /// Create a non-unique factory error
    pub fn non_unique_factory<T: Into<String>>(type_name: T, candidates: Vec<String>) -> Self {
        Self::NonUniqueFactory {
            type_name: type_name.into(),
            candidates,
        }
    }

    /// Create an invalid factory method error
    pub fn invalid_factory_method<M: Into<String>, R: Into<String>>(method: M, reason: R) -> Self {
        Self::InvalidFactoryMethod {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Create an invocation error
    pub fn invocation<M: Into<String>, S: Into<String>>(method: M, message: S) -> Self {
        Self::Invocation {
            method: method.into(),
            message: message.into(),
        }
    }
}

// Type model error creation methods
impl Error {
    /// Create an invalid type error
    pub fn invalid_type<T: Into<String>, R: Into<String>>(type_name: T, reason: R) -> Self {
        Self::InvalidType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid catalog error
    pub fn invalid_catalog<S: Into<String>>(message: S) -> Self {
        Self::InvalidCatalog {
            message: message.into(),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error rejects an injection point or a dependency shape
    pub fn is_dependency_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSetter { .. }
                | Self::DependencyOnSelf { .. }
                | Self::DependencyOnSubtype { .. }
                | Self::DependencyOnSupertype { .. }
                | Self::DependencyDuplicated { .. }
        )
    }

    /// Whether this error comes from factory method resolution
    pub fn is_factory_error(&self) -> bool {
        matches!(
            self,
            Self::NoFactoryMethod { .. }
                | Self::NonUniqueFactory { .. }
                | Self::InvalidFactoryMethod { .. }
        )
    }
}
