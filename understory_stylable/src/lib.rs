// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Stylable: chainable, value-semantic style configurations.
//!
//! This crate attaches a single immutable style configuration to an element
//! type and lets call sites derive restyled copies of that element through
//! dot-chained edits. It does no rendering, layout or event handling; whatever
//! holds a stylable element simply re-renders when its configuration changes.
//!
//! ## Core Concepts
//!
//! ### Configurations
//!
//! A [`Configuration`] is a plain value type bundling style parameters. Each one
//! provides a canonical starting value through [`Configuration::initial`].
//!
//! ### Stylable elements
//!
//! A [`Stylable`] element owns exactly one configuration. [`StylableExt`] is
//! implemented for every stylable element and provides:
//!
//! - `modified(transform)` - copy, edit the current configuration, return
//! - `with(config)` - copy with the configuration replaced wholesale
//! - `with_style(transform)` - copy with a configuration built from
//!   [`Configuration::initial`]
//!
//! The receiver is never changed. Edits build on the *current* configuration
//! with `modified`, or start *from scratch* with `with_style`.
//!
//! [`Styled`] is a ready-made stylable wrapper for any value.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_stylable::{Configuration, Stylable, StylableExt};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Emphasis { Normal, Strong }
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Size { Small, Medium, Large }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct LabelStyle {
//!     emphasis: Emphasis,
//!     size: Size,
//!     icon_only: bool,
//! }
//!
//! impl Configuration for LabelStyle {
//!     fn initial() -> Self {
//!         Self { emphasis: Emphasis::Normal, size: Size::Medium, icon_only: false }
//!     }
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Label {
//!     text: &'static str,
//!     style: LabelStyle,
//! }
//!
//! impl Stylable for Label {
//!     type Config = LabelStyle;
//!     fn config(&self) -> &LabelStyle { &self.style }
//!     fn config_mut(&mut self) -> &mut LabelStyle { &mut self.style }
//! }
//!
//! // Chained setters are thin wrappers over `map_config`.
//! impl Label {
//!     fn emphasis(self, emphasis: Emphasis) -> Self {
//!         self.map_config(|s| s.emphasis = emphasis)
//!     }
//!     fn size(self, size: Size) -> Self {
//!         self.map_config(|s| s.size = size)
//!     }
//!     fn icon_only(self) -> Self {
//!         self.map_config(|s| s.icon_only = true)
//!     }
//! }
//!
//! let plain = Label { text: "Save", style: LabelStyle::initial() };
//! let loud = plain.clone().emphasis(Emphasis::Strong).size(Size::Large).icon_only();
//!
//! assert_eq!(
//!     loud.config(),
//!     &LabelStyle { emphasis: Emphasis::Strong, size: Size::Large, icon_only: true }
//! );
//! assert_eq!(plain.config(), &LabelStyle::initial());
//! ```
//!
//! ## Tracing
//!
//! Edits leave no record by default. Pass a [`StyleTrace`] sink such as
//! [`ChangeLog`] to [`StylableExt::modified_traced`] to observe them.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod configuration;
mod stylable;
mod styled;
mod trace;

pub use configuration::{Configuration, ConfigurationExt};
pub use stylable::{Stylable, StylableExt};
pub use styled::Styled;
pub use trace::{ChangeLog, NoTrace, StyleChange, StyleTrace};
