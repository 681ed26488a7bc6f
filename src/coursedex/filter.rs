//! # Filter Engine
//!
//! Pure selection over the catalog. [`filter`] never reorders, never mutates, and
//! always starts again from the full list it is handed, so the same inputs give the
//! same output every time.
//!
//! A course is kept when all three checks pass:
//!
//! - **search**: empty, or a case-insensitive substring of the code, title or description
//! - **department**: [`DepartmentFilter::Any`], or an exact (case-sensitive) match
//! - **level**: [`LevelBucket::Any`], or `floor <= level < floor + 100`

use crate::error::CatalogError;
use crate::model::Course;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Width of a level bucket.
pub const LEVEL_BUCKET_WIDTH: i64 = 100;

/// Department selector.
///
/// Parsing treats only an empty string or lowercase `any` as [`DepartmentFilter::Any`];
/// every other value, including `Any` or `ANY`, selects a department by exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    #[default]
    Any,
    Exact(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelBucket {
    #[default]
    Any,
    Floor(i64),
}

/// The complete set of conditions applied to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub department: DepartmentFilter,
    pub level: LevelBucket,
}


impl FromStr for DepartmentFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "any" {
            Ok(DepartmentFilter::Any)
        } else {
            Ok(DepartmentFilter::Exact(s.to_string()))
        }
    }
}

impl FromStr for LevelBucket {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            return Ok(LevelBucket::Any);
        }
        s.parse::<i64>()
            .map(LevelBucket::Floor)
            .map_err(|_| CatalogError::Input(format!("Invalid level: {}", s)))
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::Any => write!(f, "any"),
            DepartmentFilter::Exact(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Display for LevelBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelBucket::Any => write!(f, "any"),
            LevelBucket::Floor(floor) => write!(f, "{}", floor),
        }
    }
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, department: DepartmentFilter, level: LevelBucket) -> Self {
        Self {
            search: search.into(),
            department,
            level,
        }
    }

    /// True when no condition narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.department == DepartmentFilter::Any
            && self.level == LevelBucket::Any
    }

    /// Runs all three checks against one course.
    pub fn matches(&self, course: &Course) -> bool {
        self.matches_search(course) && self.matches_department(course) && self.matches_level(course)
    }

    pub fn matches_search(&self, course: &Course) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        course.course_code.to_lowercase().contains(&term)
            || course.title.to_lowercase().contains(&term)
            || course.description.to_lowercase().contains(&term)
    }

    pub fn matches_department(&self, course: &Course) -> bool {
        match &self.department {
            DepartmentFilter::Any => true,
            DepartmentFilter::Exact(name) => course.department == *name,
        }
    }

    pub fn matches_level(&self, course: &Course) -> bool {
        match self.level {
            LevelBucket::Any => true,
            LevelBucket::Floor(floor) => {
                course.level >= floor && course.level < floor.saturating_add(LEVEL_BUCKET_WIDTH)
            }
        }
    }
}

/// Selects the courses matching `criteria`, in catalog order.
pub fn filter<'a>(catalog: &'a [Course], criteria: &FilterCriteria) -> Vec<&'a Course> {
    catalog.iter().filter(|c| criteria.matches(c)).collect()
}

/// Distinct departments across the whole catalog, sorted ascending.
pub fn departments(catalog: &[Course]) -> Vec<String> {
    catalog
        .iter()
        .map(|c| c.department.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
