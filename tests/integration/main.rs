//! Host-side integration test harness.
//!
//! Single binary so the mock hardware module is shared across test files.

mod cycle_tests;
mod mock_hw;
