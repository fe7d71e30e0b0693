//! Phased text reveal ("typewriter") state machine.
//!
//! A [`Typewriter`] types an ordered list of stages one grapheme at a time,
//! pausing between stages, until it reaches [`Phase::Done`]. All waiting goes
//! through one [`TimerQueue`]; [`Typewriter::advance`] feeds it elapsed time and
//! returns every state change as a [`RevealSnapshot`].
//!
//! Changing the inputs (stage texts or the reduced-motion flag) cancels all
//! pending reveals and starts over from the first stage. After
//! [`Typewriter::teardown`] nothing fires and nothing is emitted.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use crate::timers::{TimerId, TimerQueue};

pub const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(70);
pub const DEFAULT_STAGE_PAUSE: Duration = Duration::from_millis(160);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay before each grapheme appears.
    pub char_interval: Duration,
    /// Delay between a completed stage and the start of the next one.
    pub stage_pause: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            char_interval: DEFAULT_CHAR_INTERVAL,
            stage_pause: DEFAULT_STAGE_PAUSE,
        }
    }
}

/// One block of text revealed before the sequencer moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    text: String,
    keep_caret: bool,
}

impl Stage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keep_caret: false,
        }
    }

    /// Keep showing the caret on this stage after it has been fully typed.
    #[must_use]
    pub fn keep_caret(mut self) -> Self {
        self.keep_caret = true;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Current stage being worked on, or the terminal marker.
///
/// Ordered: phases only ever move towards `Done` within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Stage(usize),
    Done,
}

/// Externally visible state after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSnapshot {
    pub phase: Phase,
    /// Revealed grapheme count per stage.
    pub revealed: Vec<usize>,
    /// Revealed prefix per stage.
    pub texts: Vec<String>,
    /// Stage currently showing the caret, if any.
    pub caret: Option<usize>,
}

impl RevealSnapshot {
    #[must_use]
    pub fn text(&self, stage: usize) -> &str {
        self.texts.get(stage).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

#[derive(Debug)]
struct StageText {
    stage: Stage,
    /// Byte offset of the end of each grapheme.
    ends: Vec<usize>,
}

impl StageText {
    fn new(stage: Stage) -> Self {
        let ends = stage
            .text
            .grapheme_indices(true)
            .map(|(start, grapheme)| start + grapheme.len())
            .collect();
        Self { stage, ends }
    }

    fn len(&self) -> usize {
        self.ends.len()
    }

    fn prefix(&self, graphemes: usize) -> &str {
        match graphemes.min(self.len()) {
            0 => "",
            n => &self.stage.text[..self.ends[n - 1]],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Typing,
    Pausing,
    Finished,
}

#[derive(Debug, Clone, Copy)]
enum Wake {
    RevealNext(usize),
    BeginStage(usize),
}

#[derive(Debug)]
pub struct Typewriter {
    stages: Vec<StageText>,
    timing: RevealTiming,
    reduced_motion: bool,
    phase: Phase,
    step: Step,
    revealed: Vec<usize>,
    timers: TimerQueue<Wake>,
    cancelled: bool,
}

impl Typewriter {
    /// Create the sequencer and start its first run.
    #[must_use]
    pub fn mount(stages: Vec<Stage>, timing: RevealTiming, reduced_motion: bool) -> Self {
        let mut typewriter = Self {
            stages: stages.into_iter().map(StageText::new).collect(),
            timing,
            reduced_motion,
            phase: Phase::Done,
            step: Step::Finished,
            revealed: Vec::new(),
            timers: TimerQueue::new(),
            cancelled: false,
        };
        typewriter.start();
        typewriter
    }

    fn start(&mut self) {
        self.timers.cancel_all();

        if self.reduced_motion {
            self.revealed = self.stages.iter().map(StageText::len).collect();
            self.phase = Phase::Done;
            self.step = Step::Finished;
            return;
        }

        self.revealed = vec![0; self.stages.len()];
        if self.remaining_empty(0) {
            self.phase = Phase::Done;
            self.step = Step::Finished;
            return;
        }
        self.enter_stage(0);
    }

    fn remaining_empty(&self, from: usize) -> bool {
        self.stages.iter().skip(from).all(|stage| stage.len() == 0)
    }

    fn enter_stage(&mut self, index: usize) {
        self.phase = Phase::Stage(index);
        self.step = Step::Typing;
        if self.stages[index].len() == 0 {
            self.complete_stage(index);
        } else {
            self.timers
                .schedule(self.timing.char_interval, Wake::RevealNext(index));
        }
    }

    fn complete_stage(&mut self, index: usize) {
        if self.remaining_empty(index + 1) {
            self.phase = Phase::Done;
            self.step = Step::Finished;
        } else {
            self.step = Step::Pausing;
            self.timers
                .schedule(self.timing.stage_pause, Wake::BeginStage(index + 1));
        }
    }

    /// Apply one due timer. Returns whether the visible state changed.
    fn fire(&mut self, id: TimerId, wake: Wake) -> bool {
        if self.cancelled || !self.timers.is_current(id) {
            tracing::debug!(?wake, "Ignoring stale reveal timer");
            return false;
        }

        match wake {
            Wake::RevealNext(index) => {
                if self.phase != Phase::Stage(index) || self.step != Step::Typing {
                    return false;
                }
                let len = self.stages[index].len();
                self.revealed[index] = (self.revealed[index] + 1).min(len);
                if self.revealed[index] < len {
                    self.timers
                        .schedule(self.timing.char_interval, Wake::RevealNext(index));
                } else {
                    self.complete_stage(index);
                }
            }
            Wake::BeginStage(index) => self.enter_stage(index),
        }
        true
    }

    /// Let `delta` of time pass, firing every reveal that falls due in order.
    ///
    /// Returns one snapshot per state change; empty when nothing happened or
    /// after teardown.
    pub fn advance(&mut self, delta: Duration) -> Vec<RevealSnapshot> {
        if self.cancelled {
            return Vec::new();
        }

        let target = self.timers.now().saturating_add(delta);
        let mut emitted = Vec::new();
        while let Some((id, wake)) = self.timers.pop_due(target) {
            if self.fire(id, wake) {
                emitted.push(self.snapshot());
            }
        }
        self.timers.set_now(target);
        emitted
    }

    /// Cancel everything pending and start over from the first stage.
    /// A torn-down sequencer stays frozen.
    pub fn restart(&mut self) -> RevealSnapshot {
        if self.cancelled {
            return self.snapshot();
        }
        tracing::debug!(
            pending = self.timers.pending_len(),
            reduced_motion = self.reduced_motion,
            "Restarting reveal"
        );
        self.start();
        self.snapshot()
    }

    /// Change the reduced-motion flag. Restarts only when the value changes.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) -> Option<RevealSnapshot> {
        if self.reduced_motion == reduced_motion || self.cancelled {
            return None;
        }
        self.reduced_motion = reduced_motion;
        Some(self.restart())
    }

    /// Replace the stage list. Restarts only when the stages differ.
    pub fn set_stages(&mut self, stages: Vec<Stage>) -> Option<RevealSnapshot> {
        let unchanged = stages.len() == self.stages.len()
            && stages
                .iter()
                .zip(&self.stages)
                .all(|(new, old)| *new == old.stage);
        if unchanged || self.cancelled {
            return None;
        }
        self.stages = stages.into_iter().map(StageText::new).collect();
        Some(self.restart())
    }

    /// Cancel all pending reveals for good.
    pub fn teardown(&mut self) {
        self.cancelled = true;
        self.timers.cancel_all();
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn visible_text(&self, stage: usize) -> &str {
        match (self.stages.get(stage), self.revealed.get(stage)) {
            (Some(text), Some(&revealed)) => text.prefix(revealed),
            _ => "",
        }
    }

    /// Stage that shows the caret: the one being typed, otherwise the latest
    /// completed stage that keeps its caret.
    #[must_use]
    pub fn caret_stage(&self) -> Option<usize> {
        if self.cancelled {
            return None;
        }
        let last_completed = match (self.phase, self.step) {
            (Phase::Stage(index), Step::Typing) => return Some(index),
            (Phase::Stage(index), _) => index,
            (Phase::Done, _) => self.stages.len().checked_sub(1)?,
        };
        (0..=last_completed).rev().find(|&index| {
            let stage = &self.stages[index];
            stage.stage.keep_caret && self.revealed[index] == stage.len()
        })
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending_len()
    }

    /// Time until the next reveal falls due, if any is pending.
    #[must_use]
    pub fn time_to_next(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|due| due.saturating_sub(self.timers.now()))
    }

    #[must_use]
    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            phase: self.phase,
            revealed: self.revealed.clone(),
            texts: (0..self.stages.len())
                .map(|index| self.visible_text(index).to_string())
                .collect(),
            caret: self.caret_stage(),
        }
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.teardown();
    }
}
