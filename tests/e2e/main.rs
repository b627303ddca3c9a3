//! End-to-end behavior tests for the FundMe scaffold.
//!
//! Scenarios deploy a fresh fixture per test and run only on development
//! networks; on any other network the whole suite skips.

mod harness;
mod scenarios;
