use super::Surface;
use crate::view::{ListView, Notice};

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Departments(Vec<String>),
    List(ListView),
    Count(usize),
    Error(Notice),
}

/// Surface that remembers every call, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn last_list(&self) -> Option<&ListView> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::List(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_count(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Count(n) => Some(*n),
            _ => None,
        })
    }

    pub fn departments(&self) -> Option<&[String]> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Departments(d) => Some(d.as_slice()),
            _ => None,
        })
    }

    pub fn error(&self) -> Option<&Notice> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Error(notice) => Some(notice),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn show_departments(&mut self, departments: &[String]) {
        self.calls.push(SurfaceCall::Departments(departments.to_vec()));
    }

    fn show_list(&mut self, view: &ListView) {
        self.calls.push(SurfaceCall::List(view.clone()));
    }

    fn show_count(&mut self, count: usize) {
        self.calls.push(SurfaceCall::Count(count));
    }

    fn show_error(&mut self, notice: &Notice) {
        self.calls.push(SurfaceCall::Error(notice.clone()));
    }
}
