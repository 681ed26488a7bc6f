use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Records are read once from the data source and never modified afterwards;
/// filtering only ever selects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_code: String,
    pub title: String,
    pub department: String,
    pub description: String,
    pub level: i64,
    pub credits: f64,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// The full, ordered list of courses.
///
/// There is no way to mutate a catalog once built; sessions hold it read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        Self::new(courses)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Course;

    pub fn course(code: &str, department: &str, level: i64) -> Course {
        Course {
            course_code: code.to_string(),
            title: format!("{} title", code),
            department: department.to_string(),
            description: format!("About {}", code),
            level,
            credits: 3.0,
            terms: vec!["Fall".to_string()],
            prerequisites: vec![],
        }
    }

    /// A small catalog covering several departments and levels.
    pub fn sample() -> Vec<Course> {
        vec![
            Course {
                course_code: "CS101".into(),
                title: "Introduction to Programming".into(),
                department: "CS".into(),
                description: "Variables, loops and functions.".into(),
                level: 100,
                credits: 4.0,
                terms: vec!["Fall".into(), "Spring".into()],
                prerequisites: vec![],
            },
            Course {
                course_code: "MATH220".into(),
                title: "Linear Algebra".into(),
                department: "MATH".into(),
                description: "Vector spaces and matrices.".into(),
                level: 200,
                credits: 3.0,
                terms: vec!["Spring".into()],
                prerequisites: vec!["MATH181".into()],
            },
            Course {
                course_code: "CS262".into(),
                title: "Data Structures".into(),
                department: "CS".into(),
                description: "Lists, trees, and graphs in practice.".into(),
                level: 200,
                credits: 3.0,
                terms: vec!["Fall".into()],
                prerequisites: vec!["CS101".into(), "MATH181".into()],
            },
            Course {
                course_code: "PHYS311".into(),
                title: "Quantum Mechanics".into(),
                department: "PHYS".into(),
                description: "Wave functions; uses linear algebra heavily.".into(),
                level: 300,
                credits: 3.5,
                terms: vec![],
                prerequisites: vec!["MATH220".into()],
            },
            Course {
                course_code: "ART100".into(),
                title: "Drawing Studio".into(),
                department: "Art".into(),
                description: "Observational drawing.".into(),
                level: 100,
                credits: 2.0,
                terms: vec!["Summer".into()],
                prerequisites: vec![],
            },
        ]
    }
}
