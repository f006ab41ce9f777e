// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability helpers for style edits.
//!
//! Style edits are pure and leave no record of what changed. Embedders that
//! want to answer "what did this edit do?" (for an inspector, a debug overlay,
//! or to decide which elements to re-render) can pass a [`StyleTrace`] sink to
//! [`StylableExt::modified_traced`](crate::StylableExt::modified_traced).
//!
//! [`ChangeLog`] is a small recorder that keeps every reported edit in order.

use alloc::vec::Vec;

/// A callback sink for style edits.
///
/// See [`StylableExt::modified_traced`](crate::StylableExt::modified_traced).
pub trait StyleTrace<C> {
    /// Called once per edit with the configuration before and after it.
    ///
    /// `old` and `new` may be equal when the transform changed nothing.
    fn restyled(&mut self, old: &C, new: &C);
}

impl<C, F> StyleTrace<C> for F
where
    F: FnMut(&C, &C),
{
    #[inline]
    fn restyled(&mut self, old: &C, new: &C) {
        self(old, new);
    }
}

/// A trace sink that ignores every edit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NoTrace;

impl<C> StyleTrace<C> for NoTrace {
    #[inline]
    fn restyled(&mut self, _old: &C, _new: &C) {}
}

/// A single recorded edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleChange<C> {
    /// The configuration before the edit.
    pub old: C,
    /// The configuration after the edit.
    pub new: C,
}

impl<C: PartialEq> StyleChange<C> {
    /// Returns `true` if the edit left the configuration as it was.
    #[must_use]
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }
}

/// Records every reported edit, oldest first.
///
/// # Example
///
/// ```rust
/// use understory_stylable::{ChangeLog, Configuration, Stylable, StylableExt, Styled};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Opacity(f32);
///
/// impl Configuration for Opacity {
///     fn initial() -> Self {
///         Self(1.0)
///     }
/// }
///
/// let mut log: ChangeLog<Opacity> = ChangeLog::new();
/// let panel: Styled<&str, Opacity> = Styled::new("panel");
/// let faded = panel.modified_traced(|o| o.0 = 0.5, &mut log);
///
/// assert_eq!(faded.config(), &Opacity(0.5));
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.last().map(|c| &c.old), Some(&Opacity(1.0)));
/// ```
#[derive(Clone, Debug)]
pub struct ChangeLog<C> {
    changes: Vec<StyleChange<C>>,
}

impl<C> Default for ChangeLog<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ChangeLog<C> {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Returns the number of recorded edits.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns the most recent edit, if any.
    #[must_use]
    pub fn last(&self) -> Option<&StyleChange<C>> {
        self.changes.last()
    }

    /// Iterates over the recorded edits, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StyleChange<C>> + '_ {
        self.changes.iter()
    }

    /// Forgets all recorded edits.
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl<C: PartialEq> ChangeLog<C> {
    /// Iterates over the recorded edits that actually changed something.
    pub fn changes_only(&self) -> impl Iterator<Item = &StyleChange<C>> + '_ {
        self.changes.iter().filter(|change| !change.is_noop())
    }
}

impl<C: Clone> StyleTrace<C> for ChangeLog<C> {
    fn restyled(&mut self, old: &C, new: &C) {
        self.changes.push(StyleChange {
            old: old.clone(),
            new: new.clone(),
        });
    }
}
