//! Active-section tracking from viewport visibility.
//!
//! [`BandObserver`] turns page geometry into enter/exit transitions against an
//! [`ObservationBand`]; [`SectionTracker`] folds those transitions into a single
//! active section id.

/// Answers whether a region with the given id exists on the page.
pub trait RegionLookup {
    fn contains_region(&self, id: &str) -> bool;
}

impl RegionLookup for [&str] {
    fn contains_region(&self, id: &str) -> bool {
        self.iter().any(|region| *region == id)
    }
}

impl RegionLookup for [String] {
    fn contains_region(&self, id: &str) -> bool {
        self.iter().any(|region| region == id)
    }
}

/// Vertical extent of a region in page coordinates (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    pub top: u32,
    pub height: u32,
}

impl RegionBounds {
    #[must_use]
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

pub const DEFAULT_BAND_TOP: f64 = 0.2;
pub const DEFAULT_BAND_BOTTOM: f64 = 0.6;

/// Part of the viewport that counts as "in view".
///
/// Insets are fractions of the viewport height cut from the top and bottom, so
/// the default band covers 20%..40% of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationBand {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Default for ObservationBand {
    fn default() -> Self {
        Self {
            top_inset: DEFAULT_BAND_TOP,
            bottom_inset: DEFAULT_BAND_BOTTOM,
        }
    }
}

impl ObservationBand {
    #[must_use]
    pub fn new(top_inset: f64, bottom_inset: f64) -> Self {
        Self {
            top_inset,
            bottom_inset,
        }
    }

    /// Band edges in page coordinates as `(top, bottom)`.
    #[must_use]
    pub fn span(&self, scroll_y: u32, viewport_height: u32) -> (f64, f64) {
        let viewport = f64::from(viewport_height);
        let top = f64::from(scroll_y) + viewport * self.top_inset;
        let bottom = f64::from(scroll_y) + viewport * (1.0 - self.bottom_inset);
        (top, bottom.max(top))
    }

    #[must_use]
    pub fn intersects(&self, region: RegionBounds, scroll_y: u32, viewport_height: u32) -> bool {
        if region.height == 0 {
            return false;
        }
        let (top, bottom) = self.span(scroll_y, viewport_height);
        f64::from(region.top) < bottom && f64::from(region.bottom()) > top
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
    pub id: String,
    pub visible: bool,
}

/// Reports only the regions whose band intersection changed since the last
/// layout.
#[derive(Debug, Default)]
pub struct BandObserver {
    band: ObservationBand,
    visible: Vec<String>,
}

impl BandObserver {
    #[must_use]
    pub fn new(band: ObservationBand) -> Self {
        Self {
            band,
            visible: Vec::new(),
        }
    }

    pub fn observe<'a>(
        &mut self,
        regions: impl IntoIterator<Item = (&'a str, RegionBounds)>,
        scroll_y: u32,
        viewport_height: u32,
    ) -> Vec<VisibilityChange> {
        let mut now_visible = Vec::new();
        let mut changes = Vec::new();
        let mut seen = Vec::new();

        for (id, bounds) in regions {
            seen.push(id);
            let visible = self.band.intersects(bounds, scroll_y, viewport_height);
            let was_visible = self.visible.iter().any(|known| known == id);
            if visible != was_visible {
                changes.push(VisibilityChange {
                    id: id.to_string(),
                    visible,
                });
            }
            if visible {
                now_visible.push(id.to_string());
            }
        }

        for id in &self.visible {
            if !seen.iter().any(|known| *known == id.as_str()) {
                changes.push(VisibilityChange {
                    id: id.clone(),
                    visible: false,
                });
            }
        }

        self.visible = now_visible;
        changes
    }

    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.iter().any(|known| known == id)
    }
}

#[derive(Debug)]
struct Tracked {
    id: String,
    visible: bool,
}

/// Picks the active section among a fixed, ordered set of ids.
///
/// The active id is the earliest tracked id currently visible. When nothing is
/// visible the previous active id stays.
#[derive(Debug)]
pub struct SectionTracker {
    tracked: Vec<Tracked>,
    active: Option<String>,
    connected: bool,
}

impl SectionTracker {
    /// Track `ids` in order, skipping ids with no region on the page.
    pub fn mount<S: AsRef<str>>(ids: &[S], page: &(impl RegionLookup + ?Sized)) -> Self {
        let mut tracked: Vec<Tracked> = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            if !page.contains_region(id) {
                tracing::debug!(id, "Skipping section with no region");
                continue;
            }
            if tracked.iter().any(|known| known.id == id) {
                continue;
            }
            tracked.push(Tracked {
                id: id.to_string(),
                visible: false,
            });
        }
        let active = tracked.first().map(|first| first.id.clone());
        Self {
            tracked,
            active,
            connected: true,
        }
    }

    /// Record a visibility transition. Returns the new active id when it
    /// changed.
    pub fn observe(&mut self, id: &str, visible: bool) -> Option<&str> {
        if !self.connected {
            return None;
        }
        let entry = self.tracked.iter_mut().find(|entry| entry.id == id)?;
        entry.visible = visible;

        let next = self.tracked.iter().find(|entry| entry.visible)?;
        if self.active.as_deref() == Some(next.id.as_str()) {
            return None;
        }
        self.active = Some(next.id.clone());
        self.active.as_deref()
    }

    /// Apply a batch of transitions, returning the active id if it changed.
    pub fn apply(&mut self, changes: &[VisibilityChange]) -> Option<&str> {
        let before = self.active.clone();
        for change in changes {
            self.observe(&change.id, change.visible);
        }
        if self.active == before {
            None
        } else {
            self.active.as_deref()
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn tracked_ids(&self) -> impl Iterator<Item = &str> {
        self.tracked.iter().map(|entry| entry.id.as_str())
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}
