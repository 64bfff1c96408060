//! Markdown formatting for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get small wrapper types so the same
//! data can be shown differently depending on context.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrapper Types   │    │    Formatted    │
//! │ (Plan, Course)  │───▶│ (Courses,        │───▶│     Output      │
//! │                 │    │  RecommendResult)│    │ (Terminal/MCP)  │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown so the CLI can render it with termimad and MCP
//! clients can show it as-is.
//!
//! ```rust
//! use roadmap_core::{display::RecommendResult, models::Plan};
//!
//! let result = RecommendResult::new(7, Plan::default(), 10);
//! let output = result.to_string();
//! assert!(output.contains("Plan for user 7"));
//! assert!(output.contains("0 of 10 hours"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Courses;
pub use datetime::LocalDateTime;
pub use results::RecommendResult;
pub use status::OperationStatus;
