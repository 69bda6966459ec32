// SPDX-License-Identifier: MPL-2.0
//! Inline SVG glyphs used across the interface.
//!
//! The whole icon set is monochrome line work, matching the site's
//! grayscale identity. Sources are generated on demand; Iced hashes handle
//! contents, so repeated views reuse the rasterized result.

use crate::ui::design_tokens::palette;
use iced::widget::{svg, Svg};
use iced::{Color, Length};

/// Renders an icon at a fixed square size.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

fn hex(color: Color) -> String {
    let to_byte = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        to_byte(color.r),
        to_byte(color.g),
        to_byte(color.b)
    )
}

fn stroke_icon<'a>(body: &str, color: Color) -> Svg<'a> {
    let source = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="{}" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">{body}</svg>"#,
        hex(color)
    );
    Svg::new(svg::Handle::from_memory(source.into_bytes()))
}

/// The double-ring brand mark from the site masthead.
pub fn brand_mark<'a>(color: Color) -> Svg<'a> {
    let source = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32" fill="none" stroke="{}" stroke-width="1.5"><circle cx="16" cy="16" r="14"/><circle cx="16" cy="16" r="6.5"/></svg>"#,
        hex(color)
    );
    Svg::new(svg::Handle::from_memory(source.into_bytes()))
}

pub fn camera<'a>(color: Color) -> Svg<'a> {
    stroke_icon(
        r#"<path d="M4 8h3.2L9 5.5h6L16.8 8H20a1 1 0 0 1 1 1v9a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V9a1 1 0 0 1 1-1z"/><circle cx="12" cy="13" r="3.5"/>"#,
        color,
    )
}

pub fn video<'a>(color: Color) -> Svg<'a> {
    stroke_icon(
        r#"<rect x="2.5" y="6.5" width="13" height="11" rx="2"/><path d="M15.5 11l6-3.5v9l-6-3.5z"/>"#,
        color,
    )
}

pub fn share<'a>(color: Color) -> Svg<'a> {
    stroke_icon(
        r#"<circle cx="18" cy="5" r="2.5"/><circle cx="6" cy="12" r="2.5"/><circle cx="18" cy="19" r="2.5"/><path d="M8.2 10.8l7.6-4.4M8.2 13.2l7.6 4.4"/>"#,
        color,
    )
}

pub fn mail<'a>(color: Color) -> Svg<'a> {
    stroke_icon(
        r#"<rect x="2.5" y="5" width="19" height="14" rx="2"/><path d="M3 6.5l9 6.5 9-6.5"/>"#,
        color,
    )
}

pub fn phone<'a>(color: Color) -> Svg<'a> {
    stroke_icon(
        r#"<path d="M5 4h4l1.5 4L8 9.8a12 12 0 0 0 6.2 6.2l1.8-2.5 4 1.5v4a2 2 0 0 1-2 2A16 16 0 0 1 3 6a2 2 0 0 1 2-2z"/>"#,
        color,
    )
}

pub fn instagram<'a>(color: Color) -> Svg<'a> {
    stroke_icon(
        r#"<rect x="3.5" y="3.5" width="17" height="17" rx="4.5"/><circle cx="12" cy="12" r="4"/><circle cx="17" cy="7" r="0.5"/>"#,
        color,
    )
}

pub fn close<'a>(color: Color) -> Svg<'a> {
    stroke_icon(r#"<path d="M6 6l12 12M18 6L6 18"/>"#, color)
}

pub fn menu<'a>(color: Color) -> Svg<'a> {
    stroke_icon(r#"<path d="M4 7h16M4 12h16M4 17h16"/>"#, color)
}

pub fn arrow_right<'a>(color: Color) -> Svg<'a> {
    stroke_icon(r#"<path d="M4 12h16M14 6l6 6-6 6"/>"#, color)
}

pub fn chevron_right<'a>(color: Color) -> Svg<'a> {
    stroke_icon(r#"<path d="M9 5l7 7-7 7"/>"#, color)
}

/// Default foreground used by most call sites.
#[must_use]
pub fn foreground() -> Color {
    palette::PORCELAIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encodes_porcelain() {
        assert_eq!(hex(palette::PORCELAIN), "#F5F5F5");
    }

    #[test]
    fn hex_encodes_black() {
        assert_eq!(hex(palette::BLACK), "#000000");
    }

    #[test]
    fn icons_build_without_panicking() {
        let c = foreground();
        let _ = sized(brand_mark(c), 24.0);
        let _ = camera(c);
        let _ = video(c);
        let _ = share(c);
        let _ = mail(c);
        let _ = phone(c);
        let _ = instagram(c);
        let _ = close(c);
        let _ = menu(c);
        let _ = arrow_right(c);
        let _ = chevron_right(c);
    }
}
