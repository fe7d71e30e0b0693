//! State machines behind the Folio page.
//!
//! Everything here runs on synthetic time: callers feed elapsed durations and
//! events in, and read state back out. Nothing spawns threads or sleeps.

pub mod clipboard;
pub mod events;
pub mod scroll;
pub mod sections;
pub mod timers;
pub mod typewriter;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard, copy_with_fallback};
pub use events::{Emitter, Subscription};
pub use scroll::ScrollThreshold;
pub use sections::{
    BandObserver, ObservationBand, RegionBounds, RegionLookup, SectionTracker, VisibilityChange,
};
pub use timers::{TimerId, TimerQueue};
pub use typewriter::{Phase, RevealSnapshot, RevealTiming, Stage, Typewriter};
