// SPDX-License-Identifier: MPL-2.0
//! `vvs_portfolio` is the desktop portfolio showcase for VVS Photography,
//! built with the Iced GUI framework.
//!
//! It renders the studio's marketing page (hero, portfolio grid,
//! testimonials, services, about, contact) as a single scrollable surface
//! with a full-screen album gallery, all driven by an in-memory content
//! catalog and a deterministic placeholder-media generator.

#![doc(html_root_url = "https://docs.rs/vvs_portfolio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod remote;
pub mod ui;
