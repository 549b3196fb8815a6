#![forbid(unsafe_code)]

//! Rendering surface for the three tone slots.
//!
//! [`crate::appearance::AppearanceStore`] is the only caller. The browser
//! implementation (`folio-web::CssSurface`) writes CSS custom properties;
//! [`MemorySurface`] records writes for tests and headless hosts.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use folio_style::{ColorTriple, ThemeMode};

/// Destination for palette tones.
pub trait SurfaceSink {
    /// Write all three slots.
    fn set_tones(&self, triple: &ColorTriple);

    /// Drop any overrides so the host's built-in defaults show through.
    fn clear_tones(&self) {}

    /// Reflect the current mode (e.g. a `dark` class on the root element).
    fn set_mode(&self, _mode: ThemeMode) {}
}

/// Writes kept by [`MemorySurface`]; older entries are dropped first.
pub const HISTORY_LIMIT: usize = 256;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceWrite {
    Tones(ColorTriple),
    Clear,
    Mode(ThemeMode),
}

#[derive(Debug, Default)]
struct SurfaceLog {
    tones: Option<ColorTriple>,
    mode: Option<ThemeMode>,
    history: VecDeque<SurfaceWrite>,
    tone_writes: usize,
}

impl SurfaceLog {
    fn record(&mut self, write: SurfaceWrite) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(write);
    }
}

/// Recording sink. Clones share one log.
///
/// Holds the current tones and mode plus the last [`HISTORY_LIMIT`] writes,
/// so a long-lived headless host stays bounded.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tones currently on the surface; `None` before the first write or
    /// after a clear.
    #[must_use]
    pub fn tones(&self) -> Option<ColorTriple> {
        self.log.borrow().tones.clone()
    }

    #[must_use]
    pub fn mode(&self) -> Option<ThemeMode> {
        self.log.borrow().mode
    }

    #[must_use]
    pub fn history(&self) -> Vec<SurfaceWrite> {
        self.log.borrow().history.iter().cloned().collect()
    }

    /// Number of `set_tones` calls so far.
    #[must_use]
    pub fn tone_writes(&self) -> usize {
        self.log.borrow().tone_writes
    }

    pub fn clear_history(&self) {
        self.log.borrow_mut().history.clear();
    }
}

impl SurfaceSink for MemorySurface {
    fn set_tones(&self, triple: &ColorTriple) {
        let mut log = self.log.borrow_mut();
        log.tones = Some(triple.clone());
        log.tone_writes += 1;
        log.record(SurfaceWrite::Tones(triple.clone()));
    }

    fn clear_tones(&self) {
        let mut log = self.log.borrow_mut();
        log.tones = None;
        log.record(SurfaceWrite::Clear);
    }

    fn set_mode(&self, mode: ThemeMode) {
        let mut log = self.log.borrow_mut();
        log.mode = Some(mode);
        log.record(SurfaceWrite::Mode(mode));
    }
}
