use super::CatalogSource;
use crate::error::LoadError;
use crate::model::{Catalog, Course};

/// In-memory catalog source, used by tests and embedders that already hold the data.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    courses: Option<Vec<Course>>,
    reason: String,
}

impl InMemorySource {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: Some(courses),
            reason: String::new(),
        }
    }

    /// A source whose every load fails with [`LoadError::Unavailable`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            courses: None,
            reason: reason.into(),
        }
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Catalog, LoadError> {
        match &self.courses {
            Some(courses) => Ok(Catalog::new(courses.clone())),
            None => Err(LoadError::Unavailable(self.reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn returns_prepared_courses() {
        let source = InMemorySource::new(fixtures::sample());
        assert_eq!(source.load().unwrap().len(), 5);
    }

    #[test]
    fn failing_source_reports_reason() {
        let source = InMemorySource::failing("offline");
        let err = source.load().unwrap_err();
        assert_eq!(err.to_string(), "Catalog source unavailable: offline");
    }
}
