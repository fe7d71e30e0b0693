//! Page model: the ordered sections below the hero, laid out as rows.
//!
//! Section text is wrapped here so the row geometry the section tracker sees is
//! exactly what the renderer draws.

use unicode_width::UnicodeWidthStr;

use folio_content::ContentStore;
use folio_core::{RegionBounds, RegionLookup};
use folio_types::Project;

/// Rows reserved for the hero block.
pub const HERO_ROWS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Home,
    Projects,
    Experience,
    Stack,
    About,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Home,
        SectionKind::Projects,
        SectionKind::Experience,
        SectionKind::Stack,
        SectionKind::About,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Home => "home",
            SectionKind::Projects => "projects",
            SectionKind::Experience => "experience",
            SectionKind::Stack => "stack",
            SectionKind::About => "about",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Home => "Home",
            SectionKind::Projects => "Projects",
            SectionKind::Experience => "Experience",
            SectionKind::Stack => "Tech Stack",
            SectionKind::About => "About",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// How a row should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Title,
    Meta,
    Body,
    Bullet,
    Tags,
    Link,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub style: LineStyle,
    pub text: String,
}

impl PageLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineStyle::Blank, String::new())
    }
}

#[derive(Debug, Clone)]
pub struct PageSection {
    pub kind: SectionKind,
    pub bounds: RegionBounds,
    /// Rendered rows. Empty for the hero, which draws from the reveal state.
    pub lines: Vec<PageLine>,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    width: u16,
    sections: Vec<PageSection>,
}

impl PageLayout {
    #[must_use]
    pub fn build(content: &ContentStore, width: u16) -> Self {
        let wrap_width = usize::from(width.max(20)).saturating_sub(4);
        let mut top = 0;
        let mut sections = Vec::with_capacity(SectionKind::ALL.len());

        for kind in SectionKind::ALL {
            let lines = match kind {
                SectionKind::Home => Vec::new(),
                SectionKind::Projects => projects_lines(content, wrap_width),
                SectionKind::Experience => experience_lines(content, wrap_width),
                SectionKind::Stack => stack_lines(content, wrap_width),
                SectionKind::About => about_lines(content, wrap_width),
            };
            let height = match kind {
                SectionKind::Home => HERO_ROWS,
                _ => lines.len() as u32,
            };
            sections.push(PageSection {
                kind,
                bounds: RegionBounds::new(top, height),
                lines,
            });
            top += height;
        }

        Self { width, sections }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn sections(&self) -> &[PageSection] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&PageSection> {
        self.sections.iter().find(|section| section.kind.id() == id)
    }

    #[must_use]
    pub fn total_rows(&self) -> u32 {
        self.sections
            .last()
            .map_or(0, |section| section.bounds.bottom())
    }

    /// Region geometry keyed by section id.
    pub fn regions(&self) -> impl Iterator<Item = (&'static str, RegionBounds)> + '_ {
        self.sections
            .iter()
            .map(|section| (section.kind.id(), section.bounds))
    }
}

impl RegionLookup for PageLayout {
    fn contains_region(&self, id: &str) -> bool {
        self.section(id).is_some()
    }
}

fn heading(lines: &mut Vec<PageLine>, kind: SectionKind) {
    lines.push(PageLine::new(LineStyle::Heading, kind.title()));
    lines.push(PageLine::blank());
}

fn push_wrapped(lines: &mut Vec<PageLine>, style: LineStyle, text: &str, width: usize) {
    for row in wrap_words(text, width) {
        lines.push(PageLine::new(style, row));
    }
}

fn project_lines(lines: &mut Vec<PageLine>, project: &Project, width: usize) {
    let marker = if project.featured { " ★" } else { "" };
    lines.push(PageLine::new(
        LineStyle::Title,
        format!("{}{marker}", project.title),
    ));
    lines.push(PageLine::new(
        LineStyle::Meta,
        format!("{} · {}", project.status.label(), project.role),
    ));
    push_wrapped(lines, LineStyle::Body, &project.short_description, width);
    if !project.tech.is_empty() {
        push_wrapped(lines, LineStyle::Tags, &project.tech.join(" · "), width);
    }
    if let Some(repo) = &project.repo_url {
        lines.push(PageLine::new(LineStyle::Link, repo.clone()));
    }
    lines.push(PageLine::blank());
}

fn projects_lines(content: &ContentStore, width: usize) -> Vec<PageLine> {
    let mut lines = Vec::new();
    heading(&mut lines, SectionKind::Projects);
    for project in content.projects().all() {
        project_lines(&mut lines, project, width);
    }
    lines
}

fn experience_lines(content: &ContentStore, width: usize) -> Vec<PageLine> {
    let mut lines = Vec::new();
    heading(&mut lines, SectionKind::Experience);
    for entry in content.experiences().all() {
        lines.push(PageLine::new(
            LineStyle::Title,
            format!("{} · {}", entry.role, entry.company),
        ));
        lines.push(PageLine::new(
            LineStyle::Meta,
            format!("{} · {}", entry.period, entry.location),
        ));
        push_wrapped(&mut lines, LineStyle::Body, &entry.description, width);
        for item in &entry.responsibilities {
            push_wrapped(&mut lines, LineStyle::Bullet, item, width.saturating_sub(2));
        }
        lines.push(PageLine::blank());
    }
    lines
}

fn stack_lines(content: &ContentStore, width: usize) -> Vec<PageLine> {
    let mut lines = Vec::new();
    heading(&mut lines, SectionKind::Stack);
    for stack in content.tech_stacks() {
        lines.push(PageLine::new(LineStyle::Title, stack.category.clone()));
        push_wrapped(&mut lines, LineStyle::Tags, &stack.technologies.join(" · "), width);
    }
    lines.push(PageLine::blank());
    lines
}

fn about_lines(content: &ContentStore, width: usize) -> Vec<PageLine> {
    let profile = content.profile();
    let mut lines = Vec::new();
    heading(&mut lines, SectionKind::About);
    for paragraph in &profile.about {
        push_wrapped(&mut lines, LineStyle::Body, paragraph, width);
        lines.push(PageLine::blank());
    }
    for stat in content.stats() {
        lines.push(PageLine::new(
            LineStyle::Meta,
            format!("{}  {} · {}", stat.value, stat.label, stat.description),
        ));
    }
    if !content.stats().is_empty() {
        lines.push(PageLine::blank());
    }
    lines.push(PageLine::new(LineStyle::Link, profile.email.clone()));
    lines.push(PageLine::new(LineStyle::Link, profile.github_url.clone()));
    lines.push(PageLine::new(LineStyle::Link, profile.linkedin_url.clone()));
    lines.push(PageLine::blank());
    lines
}

/// Greedy word wrap by display width. Words wider than `width` get their own
/// row and are not split.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{HERO_ROWS, PageLayout, SectionKind, wrap_words};
    use folio_content::ContentStore;
    use folio_core::RegionLookup;

    #[test]
    fn wrap_respects_width() {
        assert_eq!(wrap_words("one two three four", 9), ["one two", "three", "four"]);
        assert_eq!(wrap_words("", 10), [""]);
        assert_eq!(wrap_words("supercalifragilistic go", 5), ["supercalifragilistic", "go"]);
    }

    #[test]
    fn sections_are_contiguous() {
        let content = ContentStore::builtin().unwrap();
        let layout = PageLayout::build(&content, 80);

        let ids: Vec<_> = layout.regions().map(|(id, _)| id).collect();
        assert_eq!(ids, ["home", "projects", "experience", "stack", "about"]);

        let mut expected_top = 0;
        for section in layout.sections() {
            assert_eq!(section.bounds.top, expected_top);
            expected_top = section.bounds.bottom();
        }
        assert_eq!(layout.total_rows(), expected_top);
        assert_eq!(layout.section("home").unwrap().bounds.height, HERO_ROWS);
    }

    #[test]
    fn narrow_width_makes_taller_page() {
        let content = ContentStore::builtin().unwrap();
        let wide = PageLayout::build(&content, 160);
        let narrow = PageLayout::build(&content, 40);
        assert!(narrow.total_rows() > wide.total_rows());
    }

    #[test]
    fn lookup_knows_section_ids() {
        let content = ContentStore::builtin().unwrap();
        let layout = PageLayout::build(&content, 80);
        assert!(layout.contains_region("about"));
        assert!(!layout.contains_region("contact"));
        assert_eq!(SectionKind::from_id("stack"), Some(SectionKind::Stack));
    }
}
