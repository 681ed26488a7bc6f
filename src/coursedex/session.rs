//! # Browsing Session
//!
//! A [`Session`] owns the loaded catalog, the current filter inputs, and the
//! [`Surface`] it draws on. Its life is a one-way state machine:
//!
//! ```text
//! Uninitialized ──bootstrap──▶ Loading ──┬──▶ Ready   (accepts CriteriaEvents)
//!                                        └──▶ Failed  (terminal)
//! ```
//!
//! Input arrives as explicit [`CriteriaEvent`]s. Each event changes exactly one
//! input, after which the whole catalog is filtered again from scratch and the list
//! and counter are redrawn. Nothing about the previous result is reused.

use crate::error::LoadError;
use crate::filter::{departments, filter, DepartmentFilter, FilterCriteria, LevelBucket};
use crate::model::{Catalog, Course};
use crate::store::CatalogSource;
use crate::surface::{render, render_count, render_error, Surface};
use tracing::{debug, info, warn};

/// A change to one of the three filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaEvent {
    SearchChanged(String),
    DepartmentChanged(DepartmentFilter),
    LevelChanged(LevelBucket),
}

/// Current values of the search box, department selector and level selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub search: String,
    pub department: DepartmentFilter,
    pub level: LevelBucket,
}

impl FilterInputs {
    fn apply(&mut self, event: CriteriaEvent) {
        match event {
            CriteriaEvent::SearchChanged(text) => self.search = text,
            CriteriaEvent::DepartmentChanged(department) => self.department = department,
            CriteriaEvent::LevelChanged(level) => self.level = level,
        }
    }

    /// Builds fresh criteria from all three inputs.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search.clone(), self.department.clone(), self.level)
    }
}

/// State held once the catalog is loaded.
#[derive(Debug)]
pub struct Browser {
    catalog: Catalog,
    departments: Vec<String>,
    inputs: FilterInputs,
}

impl Browser {
    fn new(catalog: Catalog) -> Self {
        let departments = departments(catalog.courses());
        Self {
            catalog,
            departments,
            inputs: FilterInputs::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Department options, derived once from the full catalog.
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    /// Courses matching the current inputs, recomputed on every call.
    pub fn visible(&self) -> Vec<&Course> {
        filter(self.catalog.courses(), &self.inputs.criteria())
    }
}

#[derive(Debug)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready(Browser),
    Failed(LoadError),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Loading => "loading",
            SessionState::Ready(_) => "ready",
            SessionState::Failed(_) => "failed",
        }
    }

    pub fn browser(&self) -> Option<&Browser> {
        match self {
            SessionState::Ready(browser) => Some(browser),
            _ => None,
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            SessionState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

pub struct Session<S: Surface> {
    state: SessionState,
    surface: S,
}

impl<S: Surface> Session<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: SessionState::Uninitialized,
            surface,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (SessionState, S) {
        (self.state, self.surface)
    }

    /// Loads the catalog and draws the initial, unfiltered view.
    ///
    /// On success the department options, the full list and its count are drawn and
    /// the session becomes `Ready`. On failure only the error notice is drawn and the
    /// session becomes `Failed` for good. Only an `Uninitialized` session can be
    /// bootstrapped; later calls are ignored.
    pub fn bootstrap<C: CatalogSource + ?Sized>(&mut self, source: &C) {
        if !matches!(self.state, SessionState::Uninitialized) {
            warn!(state = self.state.name(), "bootstrap ignored, session already started");
            return;
        }

        self.state = SessionState::Loading;
        match source.load() {
            Ok(catalog) => {
                let browser = Browser::new(catalog);
                self.surface.show_departments(browser.departments());
                {
                    let all: Vec<&Course> = browser.catalog.courses().iter().collect();
                    render(&mut self.surface, &all);
                    render_count(&mut self.surface, all.len());
                }
                info!(
                    courses = browser.catalog.len(),
                    departments = browser.departments.len(),
                    "catalog ready"
                );
                self.state = SessionState::Ready(browser);
            }
            Err(err) => {
                warn!(error = %err, "catalog failed to load");
                render_error(&mut self.surface);
                self.state = SessionState::Failed(err);
            }
        }
    }

    /// Feeds one input change to the controller.
    ///
    /// Events received outside the `Ready` state have no effect.
    pub fn dispatch(&mut self, event: CriteriaEvent) {
        match &mut self.state {
            SessionState::Ready(browser) => {
                handle_criteria_change(browser, &mut self.surface, event);
            }
            other => {
                warn!(state = other.name(), ?event, "event ignored");
            }
        }
    }
}

fn handle_criteria_change<S: Surface + ?Sized>(
    browser: &mut Browser,
    surface: &mut S,
    event: CriteriaEvent,
) {
    browser.inputs.apply(event);
    let criteria = browser.inputs.criteria();
    let visible = filter(browser.catalog.courses(), &criteria);
    debug!(
        search = %criteria.search,
        department = %criteria.department,
        level = %criteria.level,
        matched = visible.len(),
        "criteria applied"
    );
    render(surface, &visible);
    render_count(surface, visible.len());
}
