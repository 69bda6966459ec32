// SPDX-License-Identifier: MPL-2.0
//! User interface modules: sections, gallery, navbar, and shared styling.

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
