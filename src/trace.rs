//! Trace shim: forwards to `tracing` when the feature is enabled.
//!
//! # Compile-time Selection
//! ```bash
//! cargo build                      # No events, zero overhead (default)
//! cargo build --features tracing   # Emit trace-level events
//! ```

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "growable_bitset", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
