//! Scenario groups, one module per contract behavior area.

mod constructor;
mod fund;
mod persistence;
mod withdraw;
