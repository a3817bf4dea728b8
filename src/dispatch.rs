//! Compiled canonical artifact
//!
//! `generated/integral_switch.rs` is the checked-in output of
//! `integral-switch generate 32 --template plain`. Including it here keeps
//! the artifact compiling against [`IntegralVisitor`] and lets tests drive it.

/// Continuation invoked with the dispatched value as a const generic.
pub trait IntegralVisitor {
    /// Result of a visit.
    type Output;

    /// Visit the compile-time constant `I`.
    fn visit<const I: usize>(self) -> Self::Output;
}

include!("../generated/integral_switch.rs");
