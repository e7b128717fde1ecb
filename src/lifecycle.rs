//! When to install the effect relative to page parsing and loading.
//!
//! The cursor elements and the interactive elements must all be parsed
//! before the effect is wired, and the entrance animation belongs to the
//! window `load` event, which is never dispatched twice.

/// Mirror of `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageReadiness {
    /// Still parsing; later elements do not exist yet.
    Loading,
    /// Parsed, subresources still loading.
    Interactive,
    /// Fully loaded; `load` has already fired.
    Complete,
}

/// What `install` should do for a given readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPlan {
    /// Wait for `DOMContentLoaded`, then start.
    DeferUntilParsed,
    /// Start now. `entrance_now` is set when `load` can no longer be awaited.
    StartNow { entrance_now: bool },
}

impl InstallPlan {
    pub fn for_readiness(readiness: PageReadiness) -> Self {
        match readiness {
            PageReadiness::Loading => InstallPlan::DeferUntilParsed,
            PageReadiness::Interactive => InstallPlan::StartNow {
                entrance_now: false,
            },
            PageReadiness::Complete => InstallPlan::StartNow { entrance_now: true },
        }
    }
}
