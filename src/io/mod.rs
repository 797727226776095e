//! File exports.

pub mod export;
