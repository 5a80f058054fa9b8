//! Provider-specific constants

/// Name reported by the in-memory introspector
pub const IN_MEMORY_INTROSPECTOR_NAME: &str = "in_memory";

/// Characters stripped from the end of a type token before lookup (`Service*`, `Service&`)
pub const TYPE_TOKEN_DECORATIONS: &[char] = &['*', '&', ' '];
