//! ChurnScope: A Rust CLI application for customer churn analytics
//!
//! This library reads a churn forecast CSV, filters it by risk segment,
//! computes summary statistics, and derives rule-based retention
//! recommendations for the highest-risk customers.

pub mod cli;
pub mod data;
pub mod recommend;
pub mod stats;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_dataset, CustomerRecord, Dataset, SEGMENT_ALL};
pub use recommend::{classify, recommend_top, top_at_risk, Recommendation};
pub use stats::{histogram, summarize, ChurnSummary};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
