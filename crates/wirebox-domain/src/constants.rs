//! Domain layer constants
//!
//! Contains constants that are part of the domain logic. Infrastructure-specific
//! constants remain in `wirebox_infrastructure::constants`.

// ============================================================================
// TYPE MODEL CONSTANTS
// ============================================================================

/// Default name of the universal root type every hierarchy descends from
pub const DEFAULT_ROOT_TYPE_NAME: &str = "Object";

// ============================================================================
// SETTER VALIDATION REASONS
// ============================================================================

/// Setter declares zero or more than one parameter
pub const REASON_INVALID_PARAMETER_COUNT: &str = "invalid parameter count";

/// Setter is declared as a signal
pub const REASON_SETTER_IS_SIGNAL: &str = "setter is signal";

/// Setter is declared as a constructor
pub const REASON_SETTER_IS_CONSTRUCTOR: &str = "setter is constructor";

/// Setter parameter does not resolve to a reflectable type
pub const REASON_EMPTY_PARAMETER_TYPE: &str = "parameter type is empty";

/// Setter parameter is the universal root type
pub const REASON_ROOT_PARAMETER_TYPE: &str = "parameter type is root type";

/// Setter parameter is not in the registry of known types
pub const REASON_UNKNOWN_PARAMETER_TYPE: &str = "parameter type is not a known type";

// ============================================================================
// FACTORY VALIDATION REASONS
// ============================================================================

/// Factory method takes parameters
pub const REASON_FACTORY_HAS_PARAMETERS: &str = "factory method takes parameters";

/// Factory method is a signal or constructor
pub const REASON_FACTORY_INVALID_KIND: &str = "factory method is not a method or slot";

/// Factory method return type cannot be introspected
pub const REASON_FACTORY_EMPTY_RESULT: &str = "result type is empty";

/// Factory method return type is the universal root type
pub const REASON_FACTORY_ROOT_RESULT: &str = "result type is root type";

/// Factory method is declared on the universal root type
pub const REASON_FACTORY_ROOT_OBJECT: &str = "object type is root type";
