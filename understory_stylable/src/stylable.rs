// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylable element traits.
//!
//! This module provides the [`Stylable`] trait for values that own exactly one
//! style configuration, and [`StylableExt`] for deriving restyled copies of them.

use crate::configuration::Configuration;
use crate::trace::StyleTrace;

/// A value that owns exactly one style configuration.
///
/// Implementors only expose the configuration. Every derived operation lives in
/// [`StylableExt`], which is implemented for all stylable values and cannot be
/// overridden per type.
///
/// # Example
///
/// ```rust
/// use understory_stylable::{Configuration, Stylable};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct ChipStyle {
///     outlined: bool,
/// }
///
/// impl Configuration for ChipStyle {
///     fn initial() -> Self {
///         Self { outlined: false }
///     }
/// }
///
/// #[derive(Clone)]
/// struct Chip {
///     text: &'static str,
///     style: ChipStyle,
/// }
///
/// impl Stylable for Chip {
///     type Config = ChipStyle;
///
///     fn config(&self) -> &ChipStyle {
///         &self.style
///     }
///
///     fn config_mut(&mut self) -> &mut ChipStyle {
///         &mut self.style
///     }
/// }
/// ```
pub trait Stylable {
    /// The configuration type this value carries.
    type Config: Configuration;

    /// Returns the current configuration.
    fn config(&self) -> &Self::Config;

    /// Returns the current configuration for in-place editing.
    fn config_mut(&mut self) -> &mut Self::Config;
}

/// Extension methods for [`Stylable`].
///
/// All methods are pure with respect to the receiver: they copy it, edit the
/// copy's configuration and return the copy. No state is shared between the
/// original and the result.
pub trait StylableExt: Stylable + Clone {
    /// Returns a copy of `self` whose configuration has been edited by `transform`.
    ///
    /// The edit starts from the current configuration, so successive calls
    /// accumulate. The result is not validated.
    ///
    /// ```rust
    /// use understory_stylable::{Configuration, Stylable, StylableExt, Styled};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Border {
    ///     width: u8,
    ///     rounded: bool,
    /// }
    ///
    /// impl Configuration for Border {
    ///     fn initial() -> Self {
    ///         Self { width: 1, rounded: false }
    ///     }
    /// }
    ///
    /// let card: Styled<&str, Border> = Styled::new("card");
    /// let framed = card
    ///     .modified(|b| b.width = 3)
    ///     .modified(|b| b.rounded = true);
    ///
    /// assert_eq!(framed.config(), &Border { width: 3, rounded: true });
    /// assert_eq!(card.config(), &Border::initial());
    /// ```
    #[must_use]
    fn modified<F>(&self, transform: F) -> Self
    where
        F: FnOnce(&mut Self::Config),
    {
        self.clone().map_config(transform)
    }

    /// Owned counterpart of [`StylableExt::modified`].
    ///
    /// Produces the same result without cloning, which keeps long chains on a
    /// temporary free of intermediate copies.
    #[must_use]
    #[inline]
    fn map_config<F>(mut self, transform: F) -> Self
    where
        F: FnOnce(&mut Self::Config),
    {
        transform(self.config_mut());
        self
    }

    /// Returns a copy of `self` carrying `config` in place of its current one.
    #[must_use]
    fn with(&self, config: Self::Config) -> Self {
        self.modified(|current| *current = config)
    }

    /// Returns a copy of `self` styled from scratch.
    ///
    /// `transform` is applied to [`Configuration::initial`], not to the current
    /// configuration, and the result replaces the current configuration
    /// wholesale. Use this when a style is a one-shot declaration rather than an
    /// accumulation of edits.
    ///
    /// ```rust
    /// use understory_stylable::{Configuration, Stylable, StylableExt, Styled};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Text {
    ///     bold: bool,
    ///     italic: bool,
    /// }
    ///
    /// impl Configuration for Text {
    ///     fn initial() -> Self {
    ///         Self { bold: false, italic: false }
    ///     }
    /// }
    ///
    /// let title = Styled::<_, Text>::new("title").modified(|t| t.bold = true);
    ///
    /// // Cumulative: keeps `bold`.
    /// let a = title.modified(|t| t.italic = true);
    /// assert_eq!(a.config(), &Text { bold: true, italic: true });
    ///
    /// // From scratch: `bold` is reset.
    /// let b = title.with_style(|t| t.italic = true);
    /// assert_eq!(b.config(), &Text { bold: false, italic: true });
    /// ```
    #[must_use]
    fn with_style<F>(&self, transform: F) -> Self
    where
        F: FnOnce(&mut Self::Config),
    {
        let mut style = Self::Config::initial();
        transform(&mut style);
        self.with(style)
    }

    /// Like [`StylableExt::modified`], but the edit may fail.
    ///
    /// On `Err` the error is returned as is and no restyled value is produced.
    /// `self` is never touched either way.
    fn try_modified<F, E>(&self, transform: F) -> Result<Self, E>
    where
        F: FnOnce(&mut Self::Config) -> Result<(), E>,
    {
        let mut new = self.clone();
        transform(new.config_mut())?;
        Ok(new)
    }

    /// Like [`StylableExt::modified`], reporting the edit to `trace`.
    ///
    /// The sink sees the configuration before and after the edit exactly once.
    #[must_use]
    fn modified_traced<F, T>(&self, transform: F, trace: &mut T) -> Self
    where
        F: FnOnce(&mut Self::Config),
        T: StyleTrace<Self::Config> + ?Sized,
    {
        let new = self.modified(transform);
        trace.restyled(self.config(), new.config());
        new
    }

    /// Returns `true` if `self` carries a different configuration than `previous`.
    ///
    /// Holders use this to decide whether a restyled value needs re-rendering.
    #[must_use]
    fn style_changed(&self, previous: &Self) -> bool
    where
        Self::Config: PartialEq,
    {
        self.config() != previous.config()
    }
}

impl<S: Stylable + Clone> StylableExt for S {}
