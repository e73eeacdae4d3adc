// tests/support/mod.rs
// Shared support code for the integration test binaries. Individual test
// crates use different subsets of these helpers, so allow the resulting
// dead_code / unused_imports warnings at the module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use mocks::*;
