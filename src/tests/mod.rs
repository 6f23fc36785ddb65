//! Binary-side integration tests.

mod pipeline_tests;
