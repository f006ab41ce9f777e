// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configuration values.
//!
//! This module provides the [`Configuration`] trait for value types that bundle
//! style parameters, and [`ConfigurationExt`] for building them by chained edits.

/// A value type bundling the style parameters of an element.
///
/// Every configuration has a canonical starting value, [`Configuration::initial`],
/// obtainable without any external input. Configurations are replaced
/// wholesale, never shared: an element owns its configuration outright.
///
/// Any invariants a configuration wants to enforce (ranges, mutually exclusive
/// flags) belong in its own setters. Nothing in this crate validates them.
///
/// # Example
///
/// ```rust
/// use understory_stylable::Configuration;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct BadgeStyle {
///     rounded: bool,
///     weight: u16,
/// }
///
/// impl Configuration for BadgeStyle {
///     fn initial() -> Self {
///         Self { rounded: true, weight: 400 }
///     }
/// }
///
/// assert_eq!(BadgeStyle::initial(), BadgeStyle::initial());
/// ```
pub trait Configuration: Clone {
    /// Returns the canonical starting configuration.
    ///
    /// Must be deterministic: two calls return equal values.
    fn initial() -> Self;
}

impl Configuration for () {
    #[inline]
    fn initial() -> Self {}
}

/// Extension methods for [`Configuration`].
///
/// These let a configuration be built fluently, on its own or before it is
/// handed to an element.
pub trait ConfigurationExt: Configuration {
    /// Returns a copy of this configuration with `transform` applied.
    ///
    /// `self` is left untouched.
    #[must_use]
    fn modified<F>(&self, transform: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        self.clone().edit(transform)
    }

    /// Applies `transform` to this configuration and returns it.
    ///
    /// The owned counterpart of [`ConfigurationExt::modified`], for chains.
    ///
    /// ```rust
    /// use understory_stylable::{Configuration, ConfigurationExt};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Stroke {
    ///     width: f64,
    ///     dashed: bool,
    /// }
    ///
    /// impl Configuration for Stroke {
    ///     fn initial() -> Self {
    ///         Self { width: 1.0, dashed: false }
    ///     }
    /// }
    ///
    /// let stroke = Stroke::initial()
    ///     .edit(|s| s.width = 2.0)
    ///     .edit(|s| s.dashed = true);
    /// assert_eq!(stroke, Stroke { width: 2.0, dashed: true });
    /// ```
    #[must_use]
    #[inline]
    fn edit<F>(mut self, transform: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        transform(&mut self);
        self
    }

    /// Returns `true` if this configuration equals [`Configuration::initial`].
    #[must_use]
    fn is_initial(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::initial()
    }
}

impl<C: Configuration> ConfigurationExt for C {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Spacing {
        gap: f32,
        wrap: bool,
    }

    impl Configuration for Spacing {
        fn initial() -> Self {
            Self {
                gap: 4.0,
                wrap: false,
            }
        }
    }

    #[test]
    fn initial_is_deterministic() {
        assert_eq!(Spacing::initial(), Spacing::initial());
        assert!(Spacing::initial().is_initial());
    }

    #[test]
    fn modified_leaves_receiver_alone() {
        let base = Spacing::initial();
        let wide = base.modified(|s| s.gap = 12.0);

        assert_eq!(base.gap, 4.0);
        assert_eq!(wide.gap, 12.0);
        assert!(base.is_initial());
        assert!(!wide.is_initial());
    }

    #[test]
    fn edit_chains() {
        let spacing = Spacing::initial()
            .edit(|s| s.gap = 8.0)
            .edit(|s| s.wrap = true);

        assert_eq!(
            spacing,
            Spacing {
                gap: 8.0,
                wrap: true
            }
        );
    }

    #[test]
    fn edit_back_to_initial() {
        let spacing = Spacing::initial()
            .edit(|s| s.wrap = true)
            .edit(|s| s.wrap = false);
        assert!(spacing.is_initial());
    }

    #[test]
    fn unit_configuration() {
        let () = <()>::initial();
        assert!(().is_initial());
    }
}
