//! # Surfaces
//!
//! A [`Surface`] is whatever the user looks at. It has four regions: department
//! options, the course list, the result counter, and the error slot (which takes over
//! the list region). Every call replaces the region's previous content outright.
//!
//! The helpers below turn courses into a view model and hand it to the surface, so
//! surfaces only ever draw already-prepared data.

use crate::model::Course;
use crate::view::{error_view, list_view, ListView, Notice};

pub mod memory;

pub trait Surface {
    fn show_departments(&mut self, departments: &[String]);

    fn show_list(&mut self, view: &ListView);

    fn show_count(&mut self, count: usize);

    fn show_error(&mut self, notice: &Notice);
}

/// Draws `courses` as the list, or the no-results notice when there are none.
pub fn render<S: Surface + ?Sized>(surface: &mut S, courses: &[&Course]) {
    surface.show_list(&list_view(courses));
}

pub fn render_count<S: Surface + ?Sized>(surface: &mut S, count: usize) {
    surface.show_count(count);
}

/// Replaces the list region with the fixed load-failure message.
pub fn render_error<S: Surface + ?Sized>(surface: &mut S) {
    surface.show_error(&error_view());
}
