//! Pure helper functions with a by-name import surface, plus the build
//! tooling that tests them and generates their distributable module and
//! README.

pub mod config;
pub mod doc;
pub mod generator;
pub mod harness;
pub mod helpers;
pub mod registry;

pub use helpers::{ImportPolicy, ImportRequest, Namespace, Value};
pub use registry::{Registry, import};
