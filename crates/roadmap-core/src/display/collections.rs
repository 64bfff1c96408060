//! Collection wrapper types.

use std::{fmt, ops::Index};

use crate::models::Course;

/// Newtype wrapper for displaying a list of courses as a markdown table.
///
/// ```rust
/// use roadmap_core::{
///     display::Courses,
///     models::{Course, Level},
/// };
///
/// let courses = Courses(vec![Course::new(1, "AI", Level::Beginner, 6).with_title("Intro")]);
/// let output = courses.to_string();
/// assert!(output.contains("| 1 | Intro | AI | Beginner | 6 |"));
/// ```
pub struct Courses(pub Vec<Course>);

impl Courses {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.0.iter()
    }
}

impl Index<usize> for Courses {
    type Output = Course;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Courses {
    type Item = Course;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Course>> for Courses {
    fn from(courses: Vec<Course>) -> Self {
        Self(courses)
    }
}

impl fmt::Display for Courses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No courses found.");
        }

        writeln!(f, "| ID | Title | Domain | Level | Hours | Tags | Requires |")?;
        writeln!(f, "|---:|-------|--------|-------|------:|------|----------|")?;
        for course in &self.0 {
            let requires: Vec<String> = course
                .prerequisite_course_ids
                .iter()
                .map(u64::to_string)
                .collect();
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} | {} |",
                course.id,
                course.title,
                course.domain,
                course.level,
                course.duration_hours,
                course.tags.join(", "),
                requires.join(", ")
            )?;
        }
        Ok(())
    }
}
