#![allow(dead_code)]

use roadmap_core::{AdvisorBuilder, Course, Level, UserProfile};
use tempfile::TempDir;

/// Helper function to create an advisor over a temporary SQLite database
pub async fn create_test_advisor() -> (TempDir, roadmap_core::Advisor) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let advisor = AdvisorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create advisor");
    (temp_dir, advisor)
}

pub fn profile(target_domain: &str, level: Level, interests: &[&str], budget: (u32, u32)) -> UserProfile {
    UserProfile {
        user_id: 1,
        target_domain: target_domain.to_string(),
        current_level: level,
        interests: interests.iter().map(|s| s.to_string()).collect(),
        hours_per_week: budget.0,
        deadline_weeks: budget.1,
    }
}

/// A mixed catalog across three domains with a prerequisite chain, a
/// dangling prerequisite and intrinsic multipliers.
pub fn sample_catalog() -> Vec<Course> {
    vec![
        Course::new(1, "AI", Level::Beginner, 12)
            .with_title("Intro to Machine Learning")
            .with_tags(["ml", "python"]),
        Course::new(2, "AI", Level::Intermediate, 20)
            .with_title("Deep Learning")
            .with_tags(["deep learning", "ml"])
            .with_prerequisites([1]),
        Course::new(3, "AI", Level::Advanced, 30)
            .with_title("Reinforcement Learning")
            .with_tags(["rl"])
            .with_prerequisites([2]),
        Course::new(4, "Data Science", Level::Beginner, 8)
            .with_title("Statistics")
            .with_tags(["statistics", "python"]),
        Course::new(5, "Data Science", Level::Intermediate, 15)
            .with_title("Data Wrangling")
            .with_tags(["pandas"])
            .with_intrinsic_score(1.2),
        Course::new(6, "AI", Level::Beginner, 6)
            .with_title("Prompting")
            .with_tags(["llm"])
            .with_prerequisites([99]),
        Course::new(7, "Web", Level::Beginner, 10)
            .with_title("HTML Basics")
            .with_tags(["html"]),
        Course::new(8, "AI", Level::Beginner, 4)
            .with_title("AI Ethics")
            .with_intrinsic_score(0.5),
    ]
}
