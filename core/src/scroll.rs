//! "Scrolled past N rows" detection, coalesced to one evaluation per frame.

/// Tracks whether the page offset is beyond a threshold.
///
/// Scroll and resize events only record the latest offset and request a frame.
/// The comparison runs in [`ScrollThreshold::on_frame`], which reports a value
/// only when it flips.
#[derive(Debug, Clone)]
pub struct ScrollThreshold {
    threshold: u32,
    latest_offset: u32,
    past: bool,
    frame_requested: bool,
    attached: bool,
}

impl ScrollThreshold {
    #[must_use]
    pub fn mount(threshold: u32, initial_offset: u32) -> Self {
        Self {
            threshold,
            latest_offset: initial_offset,
            past: initial_offset > threshold,
            frame_requested: false,
            attached: true,
        }
    }

    /// Record a new offset. Returns `true` when this call requested a frame.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        if !self.attached {
            return false;
        }
        self.latest_offset = offset;
        self.request_frame()
    }

    /// A viewport resize may move the offset too.
    pub fn on_resize(&mut self, offset: u32) -> bool {
        self.on_scroll(offset)
    }

    fn request_frame(&mut self) -> bool {
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Evaluate the latest offset. Returns the new value if it changed.
    pub fn on_frame(&mut self) -> Option<bool> {
        if !self.frame_requested || !self.attached {
            return None;
        }
        self.frame_requested = false;
        self.reevaluate()
    }

    fn reevaluate(&mut self) -> Option<bool> {
        let past = self.latest_offset > self.threshold;
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(past)
    }

    /// Change the threshold and re-evaluate right away.
    pub fn set_threshold(&mut self, threshold: u32) -> Option<bool> {
        if !self.attached || threshold == self.threshold {
            return None;
        }
        self.threshold = threshold;
        self.reevaluate()
    }

    #[must_use]
    pub fn is_past(&self) -> bool {
        self.past
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Stop listening and drop any pending frame.
    pub fn detach(&mut self) {
        self.attached = false;
        self.frame_requested = false;
    }
}
