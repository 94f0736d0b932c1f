//! Test utilities shared across the jira workspace
//!
//! - Environment variable overrides restored on drop ([`EnvVarGuard`])
//! - HOME and config directory isolation ([`HomeEnvTestGuard`])
//! - Throwaway `.netrc` files ([`NetrcGuard`])
//!
//! The dead_code lint is disabled because not every test crate uses every
//! helper, and usage across dev-dependency boundaries is invisible to rustc.

#![allow(dead_code)]

pub mod env;
pub mod home;
pub mod netrc;

pub use env::EnvVarGuard;
pub use home::HomeEnvTestGuard;
pub use netrc::NetrcGuard;
