//! Model study cases backing published comparisons.

mod hamburg_inspired;

pub use hamburg_inspired::create_hamburg_inspired_hnp_msc;
