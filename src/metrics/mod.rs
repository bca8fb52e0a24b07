pub mod aggregate;
pub mod normalize;

pub use aggregate::{author_counts, compute_metrics, summarize, weekly_counts};
pub use normalize::{normalize, Normalized};

/// Number of contributors shown in the ranked chart by default.
pub const DEFAULT_TOP_AUTHORS: usize = 10;
