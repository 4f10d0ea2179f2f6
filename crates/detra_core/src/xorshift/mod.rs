//! Xorshift family generators.
//!
//! Both generators use only XOR and shift operations. The all-zero state is
//! a fixed point of their update, so a zero seed (or seed pair) produces an
//! endless run of zeros. The plain `new` constructors accept such seeds
//! unchanged; the `try_new` constructors reject them with
//! [`SeedError::ZeroState`](crate::SeedError::ZeroState).
//!
//! Both types also implement `rand_core::RngCore` and `SeedableRng`, so they
//! can drive any `rand` distribution.

mod xorshift128plus;
mod xorshift32;

pub use xorshift128plus::XorShift128Plus;
pub use xorshift32::XorShift32;
