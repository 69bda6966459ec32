// SPDX-License-Identifier: MPL-2.0
//! Small reusable view pieces shared by multiple sections.

pub mod media_tile;

pub use media_tile::TileImage;
