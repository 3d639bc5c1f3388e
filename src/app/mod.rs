//! Application core — pure domain logic, zero I/O.
//!
//! Status vocabulary, the shared status cell, the per-tick renderer, and
//! the service that ties them to hardware. All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod renderer;
pub mod service;
pub mod status;
pub mod store;
