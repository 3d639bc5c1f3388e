//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. All tests run on the host with no real GPIO.

mod mock_hw;
mod render_loop_tests;
mod service_tests;
