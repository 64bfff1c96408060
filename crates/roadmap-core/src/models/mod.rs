//! Data models for courses, learner profiles and plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data.
//!
//! All models serialize to the camelCase wire shape used by catalog files,
//! plan files and HTTP callers:
//!
//! ```rust
//! use roadmap_core::models::{Plan, PlanStep};
//!
//! let plan = Plan {
//!     total_hours: 6,
//!     steps: vec![PlanStep {
//!         sequence_number: 1,
//!         course_id: 7,
//!         hours: 6,
//!         note: "Score: 0.950".to_string(),
//!     }],
//! };
//! let json = serde_json::to_value(&plan).unwrap();
//! assert_eq!(json["totalHours"], 6);
//! assert_eq!(json["steps"][0]["step"], 1);
//! assert_eq!(json["steps"][0]["courseId"], 7);
//! ```

pub mod course;
pub mod level;
pub mod plan;
pub mod profile;


pub use course::Course;
pub use level::Level;
pub use plan::{Plan, PlanStep, StoredPlan};
pub use profile::UserProfile;
