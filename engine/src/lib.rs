//! Page session for Folio.
//!
//! [`App`] owns every state machine behind the interactive page (hero reveal,
//! section tracking, nav compaction, the copied badge) and advances them from
//! one place, [`App::tick`]. It has no terminal dependencies; the TUI reads the
//! state back out each frame.

mod page;

pub use page::{
    HERO_ROWS, LineStyle, PageLayout, PageLine, PageSection, SectionKind, wrap_words,
};

pub use folio_config::FolioConfig;
pub use folio_content::{ContentStore, devicon_url};
pub use folio_core::{ClipboardSink, Phase, RevealSnapshot};
pub use folio_types::ui::{RevealLevel, UiOptions};

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use folio_core::{
    BandObserver, Emitter, ObservationBand, RevealTiming, ScrollThreshold, SectionTracker, Stage,
    Subscription, Typewriter, copy_with_fallback,
};
use folio_types::ui::{CopiedBadge, SectionReveal};

/// Rows at each viewport edge a section must clear before it starts revealing.
const REVEAL_MARGIN_ROWS: u32 = 2;

/// Build the hero stages: each headline line, then the tagline.
///
/// The last headline line keeps its caret once typed. An empty tagline adds
/// no stage.
#[must_use]
pub fn hero_stages(headline: &[String], tagline: &str) -> Vec<Stage> {
    let last = headline.len().saturating_sub(1);
    let mut stages: Vec<Stage> = headline
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let stage = Stage::new(line.clone());
            if index == last { stage.keep_caret() } else { stage }
        })
        .collect();
    if !tagline.is_empty() {
        stages.push(Stage::new(tagline));
    }
    stages
}

/// Load the content table named by `config.content.path`, or the built-in
/// one when no path is set.
pub fn load_content(config: &FolioConfig) -> anyhow::Result<ContentStore> {
    match &config.content.path {
        Some(path) => ContentStore::load(path)
            .with_context(|| format!("loading content from {}", path.display())),
        None => ContentStore::builtin().context("loading built-in content"),
    }
}

/// Everything that changed during one [`App::tick`].
#[derive(Debug, Default)]
pub struct FrameUpdate {
    /// Hero snapshots in emission order.
    pub hero: Vec<RevealSnapshot>,
    /// New nav compaction state, if it flipped.
    pub nav_compact: Option<bool>,
    /// New active section, if it changed.
    pub active_section: Option<String>,
}

impl FrameUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hero.is_empty() && self.nav_compact.is_none() && self.active_section.is_none()
    }
}

#[derive(Debug)]
struct Viewport {
    width: u16,
    height: u32,
    scroll: u32,
}

#[derive(Debug)]
struct NavState {
    tracker: SectionTracker,
    observer: BandObserver,
    threshold: ScrollThreshold,
}

pub struct App {
    content: Arc<ContentStore>,
    ui_options: UiOptions,
    layout: PageLayout,
    viewport: Viewport,
    hero: Typewriter,
    hero_snapshot: RevealSnapshot,
    headline_lines: usize,
    nav: NavState,
    copied: CopiedBadge,
    reveal: SectionReveal,
    motion: Emitter<bool>,
    motion_pending: Rc<Cell<Option<bool>>>,
    _motion_subscription: Subscription,
    should_quit: bool,
}

impl App {
    /// Mount the page for a viewport of `width` x `height` cells.
    #[must_use]
    pub fn new(config: &FolioConfig, content: Arc<ContentStore>, width: u16, height: u16) -> Self {
        let ui_options = config.ui_options();
        let layout = PageLayout::build(&content, width);

        let timing = RevealTiming {
            char_interval: config.motion.char_interval(),
            stage_pause: config.motion.stage_pause(),
        };
        let hero = Typewriter::mount(
            hero_stages(&config.hero.headline, &config.hero.tagline),
            timing,
            ui_options.reduced_motion,
        );
        let hero_snapshot = hero.snapshot();

        let nav = NavState {
            tracker: SectionTracker::mount(config.nav.sections.as_slice(), &layout),
            observer: BandObserver::new(ObservationBand::new(
                config.nav.band_top,
                config.nav.band_bottom,
            )),
            threshold: ScrollThreshold::mount(config.nav.scroll_threshold, 0),
        };

        let motion = Emitter::new();
        let motion_pending = Rc::new(Cell::new(None));
        let pending = Rc::clone(&motion_pending);
        let subscription = motion.subscribe(move |reduced: &bool| pending.set(Some(*reduced)));

        let mut app = Self {
            content,
            ui_options,
            layout,
            viewport: Viewport {
                width,
                height: u32::from(height),
                scroll: 0,
            },
            hero,
            hero_snapshot,
            headline_lines: config.hero.headline.len(),
            nav,
            copied: CopiedBadge::new(config.motion.copied_badge()),
            reveal: SectionReveal::new(config.motion.section_reveal(), ui_options.reduced_motion),
            motion,
            motion_pending,
            _motion_subscription: subscription,
            should_quit: false,
        };
        app.observe_sections();
        app.observe_reveal();
        app
    }

    /// Load content named by `config` (or the built-in table) and mount.
    pub fn from_config(config: &FolioConfig, width: u16, height: u16) -> anyhow::Result<Self> {
        let content = load_content(config)?;
        Ok(Self::new(config, Arc::new(content), width, height))
    }

    /// Advance every state machine by `delta` and apply pending events.
    pub fn tick(&mut self, delta: Duration) -> FrameUpdate {
        let mut update = FrameUpdate::default();

        if let Some(snapshot) = self.apply_motion_preference() {
            update.hero.push(snapshot);
        }
        update.hero.extend(self.hero.advance(delta));
        if let Some(last) = update.hero.last() {
            self.hero_snapshot = last.clone();
        }

        self.copied.advance(delta);
        self.reveal.advance(delta);
        update.nav_compact = self.nav.threshold.on_frame();
        update.active_section = self.observe_sections();
        self.observe_reveal();
        update
    }

    fn observe_sections(&mut self) -> Option<String> {
        let changes = self.nav.observer.observe(
            self.layout.regions(),
            self.viewport.scroll,
            self.viewport.height,
        );
        if changes.is_empty() {
            return None;
        }
        self.nav.tracker.apply(&changes).map(str::to_string)
    }

    /// Start the fade-in of every section that has entered the viewport,
    /// less a margin at each edge. The hero is revealed by the typewriter.
    fn observe_reveal(&mut self) {
        let height = self.viewport.height;
        let margin = if height > REVEAL_MARGIN_ROWS * 2 {
            REVEAL_MARGIN_ROWS
        } else {
            0
        };
        let top = self.viewport.scroll.saturating_add(margin);
        let bottom = self.viewport.scroll.saturating_add(height - margin);
        for section in self.layout.sections() {
            if section.kind == SectionKind::Home {
                continue;
            }
            let bounds = section.bounds;
            if bounds.top < bottom
                && bounds.bottom() > top
                && self.reveal.enter(section.kind.id())
            {
                tracing::debug!(section = section.kind.id(), "Revealing section");
            }
        }
    }

    fn apply_motion_preference(&mut self) -> Option<RevealSnapshot> {
        let reduced = self.motion_pending.take()?;
        self.ui_options.reduced_motion = reduced;
        self.reveal.set_reduced_motion(reduced);
        self.hero.set_reduced_motion(reduced)
    }

    /// Source of reduced-motion preference changes.
    #[must_use]
    pub fn motion_events(&self) -> &Emitter<bool> {
        &self.motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.motion.emit(&reduced);
        if let Some(snapshot) = self.apply_motion_preference() {
            self.hero_snapshot = snapshot;
        }
    }

    pub fn toggle_reduced_motion(&mut self) {
        let next = !self.ui_options.reduced_motion;
        tracing::debug!(reduced_motion = next, "Toggling reduced motion");
        self.set_reduced_motion(next);
    }

    /// Type the hero again from the first stage.
    pub fn restart_hero(&mut self) {
        self.hero_snapshot = self.hero.restart();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.viewport.width {
            self.layout = PageLayout::build(&self.content, width);
            self.viewport.width = width;
        }
        self.viewport.height = u32::from(height);
        self.viewport.scroll = self.viewport.scroll.min(self.max_scroll());
        self.nav.threshold.on_resize(self.viewport.scroll);
    }

    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.layout
            .total_rows()
            .saturating_sub(self.viewport.height)
    }

    pub fn scroll_to(&mut self, offset: u32) {
        let offset = offset.min(self.max_scroll());
        if offset == self.viewport.scroll {
            return;
        }
        self.viewport.scroll = offset;
        self.nav.threshold.on_scroll(offset);
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let target = if rows.is_negative() {
            self.viewport.scroll.saturating_sub(rows.unsigned_abs())
        } else {
            self.viewport.scroll.saturating_add(rows.unsigned_abs())
        };
        self.scroll_to(target);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_step());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_step());
    }

    fn page_step(&self) -> i32 {
        i32::try_from(self.viewport.height.saturating_sub(2).max(1)).unwrap_or(i32::MAX)
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Jump so the section with `id` starts at the top of the viewport.
    pub fn jump_to_section(&mut self, id: &str) -> bool {
        let Some(section) = self.layout.section(id) else {
            return false;
        };
        let top = section.bounds.top;
        self.scroll_to(top);
        true
    }

    /// Copy the profile email, showing the badge only on success.
    pub fn copy_email(
        &mut self,
        primary: &mut dyn ClipboardSink,
        fallback: &mut dyn ClipboardSink,
    ) -> bool {
        let copied = copy_with_fallback(&self.content.profile().email, primary, fallback);
        if copied {
            self.copied.show();
        } else {
            self.copied.hide();
        }
        copied
    }

    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn hero(&self) -> &RevealSnapshot {
        &self.hero_snapshot
    }

    /// Number of leading hero stages that form the headline. Any stage after
    /// them is the tagline.
    #[must_use]
    pub fn headline_lines(&self) -> usize {
        self.headline_lines
    }

    /// Time until the hero needs another frame, if it is still typing.
    #[must_use]
    pub fn hero_next_wake(&self) -> Option<Duration> {
        self.hero.time_to_next()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.viewport.scroll
    }

    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        self.viewport.height
    }

    #[must_use]
    pub fn nav_compact(&self) -> bool {
        self.nav.threshold.is_past()
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.nav.tracker.active()
    }

    #[must_use]
    pub fn is_active_section(&self, id: &str) -> bool {
        self.nav.tracker.is_active(id)
    }

    /// Section ids shown in the nav, in order.
    pub fn nav_sections(&self) -> impl Iterator<Item = &str> {
        self.nav.tracker.tracked_ids()
    }

    /// Reveal state of a section below the hero.
    #[must_use]
    pub fn section_reveal(&self, id: &str) -> RevealLevel {
        self.reveal.level(id)
    }

    #[must_use]
    pub fn copied_visible(&self) -> bool {
        self.copied.is_visible()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the hero and flag the page for exit.
    pub fn request_quit(&mut self) {
        self.hero.teardown();
        self.should_quit = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if !self.hero.is_torn_down() {
            self.hero.teardown();
        }
        self.nav.tracker.disconnect();
        self.nav.threshold.detach();
    }
}
