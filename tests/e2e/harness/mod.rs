//! E2E test harness for the FundMe scaffold.

pub mod fixture;

pub use fixture::Fixture;
