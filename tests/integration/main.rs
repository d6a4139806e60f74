//! Integration test harness.

mod helpers;

mod animator_test;
mod cli_test;
mod filter_test;
