// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic stylable wrapper.

use core::fmt;

use crate::configuration::Configuration;
use crate::stylable::Stylable;

/// Pairs any value with a style configuration of type `C`.
///
/// Use this when the styled thing has no configuration field of its own, or
/// when a toolkit wants one uniform stylable type per configuration. The
/// configuration is statically typed as `C` and owned outright, so cloning a
/// `Styled` never aliases style state.
///
/// # Example
///
/// ```rust
/// use understory_stylable::{Configuration, Stylable, StylableExt, Styled};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Weight(u16);
///
/// impl Configuration for Weight {
///     fn initial() -> Self {
///         Self(400)
///     }
/// }
///
/// let heading = Styled::<_, Weight>::new("Overview").modified(|w| w.0 = 700);
/// assert_eq!(heading.value(), &"Overview");
/// assert_eq!(heading.config(), &Weight(700));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Styled<V, C: Configuration> {
    value: V,
    config: C,
}

impl<V, C: Configuration> Styled<V, C> {
    /// Wraps `value` with the initial configuration.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self::with_config(value, C::initial())
    }

    /// Wraps `value` with an explicit starting configuration.
    #[must_use]
    pub fn with_config(value: V, config: C) -> Self {
        Self { value, config }
    }

    /// Returns the wrapped value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the wrapped value for in-place editing.
    ///
    /// The configuration is not reachable through this; restyle with
    /// [`StylableExt`](crate::StylableExt) instead.
    #[must_use]
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the wrapper, returning the value and configuration.
    #[must_use]
    pub fn into_parts(self) -> (V, C) {
        (self.value, self.config)
    }

    /// Consumes the wrapper, dropping the configuration.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Replaces the wrapped value, keeping the configuration.
    #[must_use]
    pub fn map_value<W, F>(self, f: F) -> Styled<W, C>
    where
        F: FnOnce(V) -> W,
    {
        Styled {
            value: f(self.value),
            config: self.config,
        }
    }
}

impl<V, C: Configuration> Stylable for Styled<V, C> {
    type Config = C;

    #[inline]
    fn config(&self) -> &C {
        &self.config
    }

    #[inline]
    fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }
}

impl<V: Default, C: Configuration> Default for Styled<V, C> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V, C: Configuration> From<V> for Styled<V, C> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V: fmt::Debug, C: Configuration + fmt::Debug> fmt::Debug for Styled<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styled")
            .field("value", &self.value)
            .field("config", &self.config)
            .finish()
    }
}
