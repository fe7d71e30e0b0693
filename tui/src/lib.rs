//! TUI rendering for Folio using ratatui.

mod clipboard;
pub mod format;
mod input;
mod theme;

pub use clipboard::{Clipboards, Osc52Clipboard, SystemClipboard, osc52_sequence};
pub use input::{Action, InputPump, action_for_key, apply_action, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use folio_engine::{
    App, HERO_ROWS, LineStyle, PageLine, RevealLevel, RevealSnapshot, SectionKind, wrap_words,
};
use folio_types::truncate_with_ellipsis;

/// Rows taken by the nav bar and the footer.
pub const CHROME_ROWS: u16 = 2;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_nav(frame, app, chunks[0], &palette, &glyphs);
    draw_page(frame, app, chunks[1], &palette, &glyphs);
    draw_footer(frame, app, chunks[2], &palette, &glyphs);
}

fn draw_nav(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let compact = app.nav_compact();
    let profile = app.content().profile();

    let brand = if compact {
        initials(profile.name.as_str())
    } else {
        format!("{} {} {}", profile.name, glyphs.separator, profile.role)
    };

    let mut spans = vec![
        Span::styled(format!(" {brand} "), styles::title(palette)),
        Span::raw(" "),
    ];
    for id in app.nav_sections() {
        let label = SectionKind::from_id(id).map_or(id, |kind| kind.title());
        let style = if app.is_active_section(id) {
            styles::nav_active(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    let bg = if compact {
        palette.bg_highlight
    } else {
        palette.bg_panel
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

fn draw_page(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let start = app.scroll_offset();
    let end = start.saturating_add(u32::from(area.height));
    let mut lines: Vec<Line> = Vec::with_capacity(usize::from(area.height));

    for section in app.layout().sections() {
        let top = section.bounds.top;
        let bottom = section.bounds.bottom();
        if bottom <= start || top >= end {
            continue;
        }

        let rows = if section.kind == SectionKind::Home {
            hero_lines(app, palette, glyphs, area.width)
        } else {
            let rows = section
                .lines
                .iter()
                .map(|line| page_line(line, palette, glyphs))
                .collect();
            apply_reveal(rows, app.section_reveal(section.kind.id()))
        };

        let skip = start.saturating_sub(top) as usize;
        let take = (end.min(bottom) - top.max(start)) as usize;
        lines.extend(rows.into_iter().skip(skip).take(take));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(palette.bg_dark)),
        area,
    );
}

/// Hidden sections draw as blank rows. A fading section slides up into
/// place and stays dim until its reveal completes.
fn apply_reveal(rows: Vec<Line<'_>>, level: RevealLevel) -> Vec<Line<'_>> {
    match level {
        RevealLevel::Shown => rows,
        RevealLevel::Hidden => vec![Line::default(); rows.len()],
        RevealLevel::Fading { progress } => {
            let count = rows.len();
            let max_offset = (count / 2).min(REVEAL_SLIDE_ROWS);
            let offset = ((1.0 - ease_out_cubic(progress)) * max_offset as f32).round() as usize;
            let dim = Style::default().add_modifier(Modifier::DIM);
            let mut shifted = vec![Line::default(); offset];
            shifted.extend(rows.into_iter().map(|line| line.patch_style(dim)));
            shifted.truncate(count);
            shifted
        }
    }
}

const REVEAL_SLIDE_ROWS: usize = 3;

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

fn page_line<'a>(line: &PageLine, palette: &Palette, glyphs: &Glyphs) -> Line<'a> {
    let text = line.text.clone();
    let indent = "  ";
    match line.style {
        LineStyle::Heading => Line::from(vec![
            Span::raw(indent),
            Span::styled(text.to_uppercase(), styles::heading(palette)),
        ]),
        LineStyle::Title => Line::from(vec![
            Span::raw(indent),
            Span::styled(text, styles::title(palette)),
        ]),
        LineStyle::Meta => Line::from(vec![
            Span::raw(indent),
            Span::styled(text, Style::default().fg(palette.accent)),
        ]),
        LineStyle::Body => Line::from(vec![
            Span::raw(indent),
            Span::styled(text, Style::default().fg(palette.text_primary)),
        ]),
        LineStyle::Bullet => Line::from(vec![
            Span::raw(indent),
            Span::styled(
                format!("{} ", glyphs.bullet),
                Style::default().fg(palette.primary),
            ),
            Span::styled(text, Style::default().fg(palette.text_primary)),
        ]),
        LineStyle::Tags => Line::from(vec![
            Span::raw(indent),
            Span::styled(text, Style::default().fg(palette.text_muted)),
        ]),
        LineStyle::Link => Line::from(vec![
            Span::raw(indent),
            Span::styled(
                text,
                Style::default()
                    .fg(palette.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        LineStyle::Blank => Line::default(),
    }
}

/// Exactly `HERO_ROWS` rows: greeting, headline, tagline, location.
fn hero_lines<'a>(app: &App, palette: &Palette, glyphs: &Glyphs, width: u16) -> Vec<Line<'a>> {
    let snapshot = app.hero();
    let profile = app.content().profile();
    let headline = app.headline_lines().min(snapshot.texts.len());
    let indent = "  ";

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(
                format!("Hi, I'm {}", profile.name),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        Line::default(),
    ];

    let headline_style = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    for stage in 0..headline {
        lines.push(stage_line(snapshot, stage, headline_style, palette, glyphs));
    }
    lines.push(Line::default());

    let tagline_style = Style::default().fg(palette.text_primary);
    let wrap_width = usize::from(width.saturating_sub(4).max(10));
    for stage in headline..snapshot.texts.len() {
        let text = snapshot.text(stage);
        let rows = wrap_words(text, wrap_width);
        let last = rows.len().saturating_sub(1);
        for (index, row) in rows.into_iter().enumerate() {
            let mut spans = vec![Span::raw(indent), Span::styled(row, tagline_style)];
            if index == last && snapshot.caret == Some(stage) {
                spans.push(caret_span(palette, glyphs));
            }
            lines.push(Line::from(spans));
        }
    }

    let rows = HERO_ROWS as usize;
    if lines.len() < rows {
        let location = truncate_with_ellipsis(
            &format!("{} {} {}", profile.location, glyphs.separator, profile.email),
            usize::from(width.saturating_sub(4)).max(3),
        );
        lines.resize(rows - 1, Line::default());
        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(location, Style::default().fg(palette.text_muted)),
        ]));
    }
    lines.truncate(rows);
    lines
}

fn stage_line<'a>(
    snapshot: &RevealSnapshot,
    stage: usize,
    style: Style,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'a> {
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(snapshot.text(stage).to_string(), style),
    ];
    if snapshot.caret == Some(stage) {
        spans.push(caret_span(palette, glyphs));
    }
    Line::from(spans)
}

fn caret_span<'a>(palette: &Palette, glyphs: &Glyphs) -> Span<'a> {
    Span::styled(glyphs.caret, Style::default().fg(palette.accent))
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints = [
        ("j/k", "scroll"),
        ("tab", "section"),
        ("c", "copy email"),
        ("r", "replay"),
        ("m", "motion"),
        ("q", "quit"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {label}  "), styles::key_hint(palette)));
    }

    if app.copied_visible() {
        let badge = format!(" {} Copied! ", glyphs.check);
        let used: usize = spans.iter().map(|span| span.content.width()).sum();
        let pad = usize::from(area.width)
            .saturating_sub(used)
            .saturating_sub(badge.width());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(badge, styles::badge(palette)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use folio_engine::{App, ContentStore, FolioConfig};
    use ratatui::{Terminal, backend::TestBackend};

    use folio_engine::RevealLevel;
    use ratatui::style::Modifier;
    use ratatui::text::Line;

    use super::{apply_reveal, draw, initials};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        let content = Arc::new(ContentStore::builtin().unwrap());
        App::new(&FolioConfig::default(), content, 80, 22)
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(initials("Alberto Gálvez"), "AG");
    }

    #[test]
    fn hero_renders_typed_headline() {
        let mut app = app();
        app.tick(Duration::from_secs(30));
        let screen = render(&app, 80, 24);
        assert!(screen.contains("Full-stack"));
        assert!(screen.contains("Developer"));
        assert!(screen.contains("Home"));
    }

    #[test]
    fn copied_badge_shows_in_footer() {
        let mut app = app();
        let mut primary = folio_core::MemoryClipboard::new();
        let mut fallback = folio_core::MemoryClipboard::new();
        app.copy_email(&mut primary, &mut fallback);
        let screen = render(&app, 80, 24);
        assert!(screen.lines().last().unwrap().contains("Copied!"));
    }

    #[test]
    fn hidden_section_draws_blank_rows() {
        let rows = vec![Line::from("PROJECTS"), Line::from("WMS")];
        let out = apply_reveal(rows, RevealLevel::Hidden);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|line| line.width() == 0));
    }

    #[test]
    fn fading_section_slides_up_dimmed() {
        let rows: Vec<Line> = (0..10).map(|i| Line::from(format!("row {i}"))).collect();

        let start = apply_reveal(rows.clone(), RevealLevel::Fading { progress: 0.0 });
        assert_eq!(start.len(), 10);
        assert_eq!(start[3].to_string(), "row 0");
        assert!(start[3].style.add_modifier.contains(Modifier::DIM));

        let end = apply_reveal(rows.clone(), RevealLevel::Fading { progress: 1.0 });
        assert_eq!(end[0].to_string(), "row 0");

        let shown = apply_reveal(rows, RevealLevel::Shown);
        assert!(!shown[0].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn scrolled_page_shows_projects() {
        let mut app = app();
        app.jump_to_section("projects");
        app.tick(Duration::ZERO);
        let screen = render(&app, 80, 24);
        assert!(screen.contains("PROJECTS"));
        assert!(screen.contains("WMS"));
    }
}
