//! Overwrite conflict resolution.
//!
//! When an entry's output path already exists, the engine asks an
//! [`OverwritePolicy`] what to do. Interactive front ends prompt the user;
//! batch callers pass one of the fixed policies.

use std::path::Path;

use tracing::debug;

/// Answer to a single overwrite conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Keep the existing file and move on.
    Skip,
    /// Replace this one file.
    OverwriteOne,
    /// Replace this file and every later conflict without asking again.
    OverwriteAll,
}

impl OverwriteDecision {
    /// Returns `true` if the entry should be written over the existing path.
    #[must_use]
    pub const fn overwrites(self) -> bool {
        !matches!(self, Self::Skip)
    }
}

/// Decides what to do with a path that already exists.
///
/// Closures work directly:
///
/// ```
/// use std::path::Path;
/// use unarc_core::{OverwriteDecision, OverwritePolicy};
///
/// let mut asked = Vec::new();
/// let mut policy = |path: &Path| {
///     asked.push(path.to_path_buf());
///     OverwriteDecision::Skip
/// };
/// assert_eq!(policy.decide(Path::new("a.jpg")), OverwriteDecision::Skip);
/// ```
pub trait OverwritePolicy {
    /// Called once per conflicting path until `OverwriteAll` is returned.
    fn decide(&mut self, conflicting: &Path) -> OverwriteDecision;
}

impl<F> OverwritePolicy for F
where
    F: FnMut(&Path) -> OverwriteDecision,
{
    fn decide(&mut self, conflicting: &Path) -> OverwriteDecision {
        self(conflicting)
    }
}

/// Replaces every conflicting file.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn decide(&mut self, _conflicting: &Path) -> OverwriteDecision {
        OverwriteDecision::OverwriteAll
    }
}

/// Keeps every existing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOverwrite;

impl OverwritePolicy for NeverOverwrite {
    fn decide(&mut self, _conflicting: &Path) -> OverwriteDecision {
        OverwriteDecision::Skip
    }
}

/// Per-run conflict state wrapping a policy.
///
/// Once the policy answers `OverwriteAll` it is never consulted again for
/// the rest of the run.
pub struct OverwriteState<'a> {
    policy: &'a mut dyn OverwritePolicy,
    replace_all: bool,
    prompts: usize,
}

impl<'a> OverwriteState<'a> {
    /// Starts a run with no sticky decision.
    pub fn new(policy: &'a mut dyn OverwritePolicy) -> Self {
        Self {
            policy,
            replace_all: false,
            prompts: 0,
        }
    }

    /// Resolves a conflict on `path`.
    pub fn resolve(&mut self, path: &Path) -> OverwriteDecision {
        if self.replace_all {
            return OverwriteDecision::OverwriteAll;
        }

        self.prompts += 1;
        let decision = self.policy.decide(path);
        debug!(path = %path.display(), ?decision, "overwrite decision");

        if decision == OverwriteDecision::OverwriteAll {
            self.replace_all = true;
        }
        decision
    }

    /// Returns `true` once `OverwriteAll` has been chosen.
    #[must_use]
    pub fn replace_all(&self) -> bool {
        self.replace_all
    }

    /// Number of times the policy was consulted.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}
