//! Utility modules: build info, logging, JSON persistence.

pub mod build_info;
pub mod logging;
pub mod persistence;
