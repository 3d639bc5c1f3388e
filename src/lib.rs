//! LedBridge library.
//!
//! Exposes the pure-logic modules for integration testing. The GPIO
//! character-device backend is compiled only with the `gpio-cdev`
//! feature; every other module builds and tests on any host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;

mod pins;
