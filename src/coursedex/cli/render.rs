//! # Rendering Module
//!
//! Terminal side of the render layer. [`TermSurface`] receives view models from the
//! session and keeps one rendered string per screen region; [`TermSurface::frame`]
//! stitches the regions together. Each surface call replaces its region, so printing
//! the frame after an event always shows the full, current state.
//!
//! Layout math (header alignment, description wrapping) stays in Rust because it needs
//! Unicode width handling. Templates only arrange the prepared strings and pick styles.

use super::styles::{names, CATALOG_THEME};
use super::templates;
use coursedex::surface::Surface;
use coursedex::view::{BadgeKind, CourseCard, ListView, Notice};
use minijinja::{Environment, Value};
use serde::Serialize;
use tracing::warn;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 80;
const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

impl MessageLevel {
    fn style(self) -> &'static str {
        match self {
            MessageLevel::Info => names::MUTED,
            MessageLevel::Success => names::SUCCESS,
            MessageLevel::Warning => names::WARNING,
        }
    }
}

#[derive(Serialize)]
struct BadgeData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct CardData {
    code: String,
    gap: String,
    credits: String,
    title: String,
    department: String,
    description: Vec<String>,
    badges: Vec<BadgeData>,
}

#[derive(Serialize)]
struct CardsData {
    cards: Vec<CardData>,
    indent: &'static str,
}

#[derive(Serialize)]
struct NoticeData<'a> {
    heading: &'a str,
    hint: &'a str,
    tone: &'static str,
}

#[derive(Serialize)]
struct CountData {
    count: usize,
}

#[derive(Serialize)]
struct OptionsData<'a> {
    departments: &'a [String],
    levels: &'a [i64],
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    tone: &'static str,
}

/// Compiled templates plus the `style` filter, bound to one color setting.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(use_color: bool) -> Self {
        let mut env = Environment::new();
        let theme = CATALOG_THEME.clone();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        for &(name, source) in templates::ALL {
            if let Err(e) = env.add_template(name, source) {
                warn!(template = name, error = %e, "template failed to compile");
            }
        }
        Self { env }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn list(&self, view: &ListView) -> String {
        match view {
            ListView::Empty(notice) => self.notice(notice, names::NOTICE),
            ListView::Cards(cards) => {
                let data = CardsData {
                    cards: cards.iter().map(card_data).collect(),
                    indent: INDENT,
                };
                self.render("cards", &data)
            }
        }
    }

    pub fn notice(&self, notice: &Notice, tone: &'static str) -> String {
        let data = NoticeData {
            heading: &notice.heading,
            hint: &notice.hint,
            tone,
        };
        self.render("notice", &data)
    }

    pub fn count(&self, count: usize) -> String {
        self.render("count", &CountData { count })
    }

    pub fn options(&self, departments: &[String], levels: &[i64]) -> String {
        self.render("options", &OptionsData { departments, levels })
    }

    pub fn text_list(&self, lines: &[String], empty_message: &str) -> String {
        let data = TextListData {
            lines,
            empty_message,
        };
        self.render("text_list", &data)
    }

    pub fn message(&self, content: &str, level: MessageLevel) -> String {
        let data = MessageData {
            content,
            tone: level.style(),
        };
        let mut out = self.render("message", &data);
        out.push('\n');
        out
    }
}

fn badge_style(kind: BadgeKind) -> &'static str {
    match kind {
        BadgeKind::Level => names::BADGE_LEVEL,
        BadgeKind::Term => names::BADGE_TERM,
        BadgeKind::Prerequisites => names::BADGE_PREREQ,
        BadgeKind::NoPrerequisites => names::BADGE_NO_PREREQ,
    }
}

fn card_data(card: &CourseCard) -> CardData {
    let used = card.code.width() + card.credits.width();
    let gap = " ".repeat(LINE_WIDTH.saturating_sub(used).max(1));

    CardData {
        code: card.code.clone(),
        gap,
        credits: card.credits.clone(),
        title: card.title.clone(),
        department: card.department.clone(),
        description: wrap_to_width(&card.description, LINE_WIDTH - INDENT.width()),
        badges: card
            .badges
            .iter()
            .map(|b| BadgeData {
                text: b.text.clone(),
                style: badge_style(b.kind),
            })
            .collect(),
    }
}

/// Greedy word wrap by display width. Words wider than `width` get a line of their own.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if !current.is_empty() && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Terminal surface holding the latest rendering of each region.
pub struct TermSurface {
    renderer: TemplateRenderer,
    level_buckets: Option<Vec<i64>>,
    options: Option<String>,
    list: Option<String>,
    count: Option<String>,
}

impl TermSurface {
    pub fn new(use_color: bool) -> Self {
        Self {
            renderer: TemplateRenderer::new(use_color),
            level_buckets: None,
            options: None,
            list: None,
            count: None,
        }
    }

    /// Also show the department and level options above the list.
    pub fn with_options(mut self, level_buckets: Vec<i64>) -> Self {
        self.level_buckets = Some(level_buckets);
        self
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// The current screen: options, list and counter, separated by blank lines.
    pub fn frame(&self) -> String {
        let sections: Vec<&str> = [&self.options, &self.list, &self.count]
            .into_iter()
            .flatten()
            .map(|s| s.trim_end_matches('\n'))
            .collect();
        if sections.is_empty() {
            return String::new();
        }
        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

impl Surface for TermSurface {
    fn show_departments(&mut self, departments: &[String]) {
        if let Some(levels) = &self.level_buckets {
            self.options = Some(self.renderer.options(departments, levels));
        }
    }

    fn show_list(&mut self, view: &ListView) {
        self.list = Some(self.renderer.list(view));
    }

    fn show_count(&mut self, count: usize) {
        self.count = Some(self.renderer.count(count));
    }

    fn show_error(&mut self, notice: &Notice) {
        self.list = Some(self.renderer.notice(notice, names::ERROR));
        self.count = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursedex::model::Course;
    use coursedex::view::{error_view, list_view};

    fn course(code: &str, credits: f64, terms: &[&str], prereqs: &[&str]) -> Course {
        Course {
            course_code: code.to_string(),
            title: format!("{} Title", code),
            department: "Computing".to_string(),
            description: "A short description.".to_string(),
            level: 100,
            credits,
            terms: terms.iter().map(|s| s.to_string()).collect(),
            prerequisites: prereqs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn all_templates_compile() {
        let mut env = Environment::new();
        env.add_filter("style", |value: Value, _name: String| value.to_string());
        for &(name, source) in templates::ALL {
            assert!(env.add_template(name, source).is_ok(), "template {}", name);
        }
    }

    #[test]
    fn renders_card_lines() {
        let c = course("CS101", 4.0, &["Fall", "Spring"], &[]);
        let output = TemplateRenderer::new(false).list(&list_view(&[&c]));
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("CS101"));
        assert!(lines[0].ends_with("4 Credits"));
        assert_eq!(lines[0].width(), LINE_WIDTH);
        assert_eq!(lines[1], "CS101 Title");
        assert_eq!(lines[2], "Computing");
        assert_eq!(lines[3], "  A short description.");
        assert_eq!(lines[4], "[Level 100] [Fall] [Spring] [No Prerequisites]");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn renders_prerequisites_badge() {
        let c = course("CS262", 3.0, &[], &["CS101", "MATH181"]);
        let output = TemplateRenderer::new(false).list(&list_view(&[&c]));
        assert!(output.contains("[Level 100] [Prerequisites: CS101, MATH181]"));
        assert!(!output.contains("No Prerequisites"));
    }

    #[test]
    fn separates_cards_with_blank_line() {
        let a = course("AAA1", 3.0, &[], &[]);
        let b = course("BBB2", 3.0, &[], &[]);
        let output = TemplateRenderer::new(false).list(&list_view(&[&a, &b]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[5], "");
        assert!(lines[6].starts_with("BBB2"));
    }

    #[test]
    fn renders_empty_placeholder() {
        let output = TemplateRenderer::new(false).list(&list_view(&[]));
        assert_eq!(
            output,
            "No courses found\nTry adjusting your filters or search terms"
        );
    }

    #[test]
    fn count_uses_singular_and_plural() {
        let renderer = TemplateRenderer::new(false);
        assert_eq!(renderer.count(0), "Showing 0 courses");
        assert_eq!(renderer.count(1), "Showing 1 course");
        assert_eq!(renderer.count(12), "Showing 12 courses");
    }

    #[test]
    fn options_list_departments_and_levels() {
        let renderer = TemplateRenderer::new(false);
        let out = renderer.options(&["CS".to_string(), "MATH".to_string()], &[100, 200]);
        assert_eq!(out, "Departments: CS, MATH\nLevels: 100, 200");

        let none = renderer.options(&[], &[100]);
        assert!(none.starts_with("Departments: none"));
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        let renderer = TemplateRenderer::new(false);
        let lines = vec!["CS".to_string(), "MATH".to_string()];
        assert_eq!(renderer.text_list(&lines, "Nothing"), "CS\nMATH\n");
        assert_eq!(renderer.text_list(&[], "Nothing"), "Nothing\n");
    }

    #[test]
    fn message_is_one_line() {
        let renderer = TemplateRenderer::new(false);
        assert_eq!(renderer.message("Saved", MessageLevel::Success), "Saved\n");
    }

    #[test]
    fn frame_replaces_regions() {
        let a = course("AAA1", 3.0, &[], &[]);
        let mut surface = TermSurface::new(false);
        surface.show_list(&list_view(&[&a]));
        surface.show_count(1);
        surface.show_list(&list_view(&[]));
        surface.show_count(0);

        let frame = surface.frame();
        assert!(!frame.contains("AAA1"));
        assert!(frame.contains("No courses found"));
        assert!(frame.ends_with("Showing 0 courses\n"));
    }

    #[test]
    fn error_frame_has_no_count() {
        let mut surface = TermSurface::new(false);
        surface.show_error(&error_view());
        let frame = surface.frame();
        assert!(frame.starts_with("Error loading courses\n"));
        assert!(!frame.contains("Showing"));
    }

    #[test]
    fn options_only_shown_when_enabled() {
        let depts = vec!["CS".to_string()];

        let mut plain = TermSurface::new(false);
        plain.show_departments(&depts);
        assert!(plain.frame().is_empty());

        let mut browsing = TermSurface::new(false).with_options(vec![100, 200]);
        browsing.show_departments(&depts);
        assert!(browsing.frame().contains("Departments: CS"));
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_to_width("one two three four five six", 9);
        assert_eq!(lines, vec!["one two", "three", "four five", "six"]);
        assert!(wrap_to_width("   ", 10).is_empty());
        assert_eq!(wrap_to_width("supercalifragilistic x", 5), vec!["supercalifragilistic", "x"]);
    }
}
