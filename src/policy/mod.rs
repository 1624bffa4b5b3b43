//! Policy trait and simple baseline implementations.
//!
//! These drive the environment from outside the core; learning algorithms
//! implement [`Policy`] in their own crates.

pub mod random;
pub mod scripted;
pub mod trait_;

pub use random::RandomPolicy;
pub use scripted::ScriptedPolicy;
pub use trait_::Policy;
