//! # Secret tasks library
//!
//! Tasks that resolve sensitive values at execution time. A workflow scheduler
//! owns construction and invocation; this library provides the task contract
//! and the environment-variable backed implementation.

pub mod secrets;
pub mod task;
