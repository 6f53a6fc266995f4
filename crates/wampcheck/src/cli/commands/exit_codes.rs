//! Exit code constants for CLI commands.
//!
//! These exit codes are used consistently across all commands so interop
//! drivers can script against them.

/// Successful operation.
pub const EXIT_SUCCESS: i32 = 0;

/// Signature verification failed.
///
/// This is the expected-failure outcome of the verify operation: the inputs
/// were well-formed but the signature does not verify.
pub const EXIT_VERIFICATION_FAILED: i32 = 1;

/// General error (invalid input, serialization failure, etc.).
pub const EXIT_ERROR: i32 = 2;
