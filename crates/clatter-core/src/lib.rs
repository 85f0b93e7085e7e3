// clatter-core: errors, noise-profile config and seed derivation for clatter.

pub mod config;
pub mod error;
pub mod seed;
