//! # View Model
//!
//! Maps courses to plain, serializable display data. Nothing here touches a screen;
//! a [`Surface`](crate::surface::Surface) decides how the view model is drawn.

use crate::model::Course;
use serde::Serialize;

pub const NO_RESULTS_HEADING: &str = "No courses found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your filters or search terms";
pub const LOAD_ERROR_HEADING: &str = "Error loading courses";
pub const LOAD_ERROR_HINT: &str = "Check the catalog file and start again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Level,
    Term,
    Prerequisites,
    NoPrerequisites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

impl Badge {
    fn new(kind: BadgeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Everything shown for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCard {
    pub code: String,
    pub credits: String,
    pub title: String,
    pub department: String,
    pub description: String,
    pub badges: Vec<Badge>,
}

/// A fixed two-line message shown in place of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub heading: String,
    pub hint: String,
}

impl Notice {
    fn new(heading: &str, hint: &str) -> Self {
        Self {
            heading: heading.to_string(),
            hint: hint.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ListView {
    Empty(Notice),
    Cards(Vec<CourseCard>),
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty(_))
    }
}

pub fn course_card(course: &Course) -> CourseCard {
    let mut badges = Vec::with_capacity(course.terms.len() + 2);
    badges.push(Badge::new(BadgeKind::Level, format!("Level {}", course.level)));
    badges.extend(
        course
            .terms
            .iter()
            .map(|term| Badge::new(BadgeKind::Term, term.as_str())),
    );
    badges.push(if course.prerequisites.is_empty() {
        Badge::new(BadgeKind::NoPrerequisites, "No Prerequisites")
    } else {
        Badge::new(
            BadgeKind::Prerequisites,
            format!("Prerequisites: {}", course.prerequisites.join(", ")),
        )
    });

    CourseCard {
        code: course.course_code.clone(),
        credits: format!("{} Credits", course.credits),
        title: course.title.clone(),
        department: course.department.clone(),
        description: course.description.clone(),
        badges,
    }
}

pub fn list_view(courses: &[&Course]) -> ListView {
    if courses.is_empty() {
        return ListView::Empty(Notice::new(NO_RESULTS_HEADING, NO_RESULTS_HINT));
    }
    ListView::Cards(courses.iter().map(|c| course_card(c)).collect())
}

pub fn error_view() -> Notice {
    Notice::new(LOAD_ERROR_HEADING, LOAD_ERROR_HINT)
}
