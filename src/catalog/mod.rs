// SPDX-License-Identifier: MPL-2.0
//! In-memory content catalog for the portfolio.
//!
//! Everything the application displays comes from here: the six portfolio
//! albums with their generated media lists, the testimonials, the service
//! cards, and the studio profile. The catalog is built once at startup and
//! never mutated; there is no persistence and no cross-album relationship.

/// Number of media items generated for every album.
pub const MEDIA_PER_ALBUM: usize = 15;

/// Descriptive album category. Nothing branches on this; it only feeds the
/// card badge text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumKind {
    Photo,
    Video,
    Social,
}

/// One displayable image reference within an album.
///
/// `is_wide` and `is_tall` are layout hints for the gallery mosaic and carry
/// no other meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: String,
    pub url: String,
    pub is_wide: bool,
    pub is_tall: bool,
}

/// A named collection of media items representing one portfolio project.
#[derive(Debug, Clone)]
pub struct Album {
    pub id: u32,
    pub kind: AlbumKind,
    pub title: &'static str,
    pub category: &'static str,
    pub specs: &'static str,
    pub cover_url: &'static str,
    pub media: Vec<MediaItem>,
}

/// A client quote shown in the testimonials band.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// Glyph shown on a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Camera,
    Video,
    Share,
}

/// One of the three service offerings.
#[derive(Debug, Clone)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub blurb: &'static str,
    pub highlights: [&'static str; 2],
}

/// Studio identity, marketing copy, and contact details.
#[derive(Debug, Clone)]
pub struct StudioProfile {
    pub brand: &'static str,
    pub kicker: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub intro: &'static str,
    pub capture_notes: [&'static str; 2],
    pub about_lead: &'static str,
    pub about_name: &'static str,
    pub about_text: &'static str,
    pub stats: [(&'static str, &'static str); 2],
    pub portrait_url: &'static str,
    pub contact_note: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub instagram: &'static str,
}

/// The complete, immutable content set for a session.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub albums: Vec<Album>,
    pub testimonials: Vec<Testimonial>,
    pub services: Vec<Service>,
    pub profile: StudioProfile,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            albums: albums(),
            testimonials: testimonials(),
            services: services(),
            profile: profile(),
        }
    }

    /// Looks up an album by id.
    #[must_use]
    pub fn album(&self, id: u32) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the synthetic media list for one album.
///
/// Pure and deterministic: the same `base_seed` always yields the same
/// sequence of [`MEDIA_PER_ALBUM`] items. Item ids are `<seed>-<index>`,
/// every third item uses the tall 800x1200 placeholder variant, and the
/// wide/tall hints follow fixed modular rules.
#[must_use]
pub fn generate_album_media(base_seed: u32) -> Vec<MediaItem> {
    (0..MEDIA_PER_ALBUM as u32)
        .map(|index| {
            let height = if index % 3 == 0 { 1200 } else { 800 };
            MediaItem {
                id: format!("{base_seed}-{index}"),
                url: format!(
                    "https://picsum.photos/seed/{}/800/{height}",
                    base_seed + index + 20
                ),
                is_wide: index % 7 == 0,
                is_tall: index % 5 == 0,
            }
        })
        .collect()
}

/// The fixed portfolio album list.
#[must_use]
pub fn albums() -> Vec<Album> {
    vec![
        Album {
            id: 1,
            kind: AlbumKind::Photo,
            title: "Urban Symmetry",
            category: "Architecture",
            specs: "Sony A7IV | 35mm f/1.4",
            cover_url:
                "https://images.unsplash.com/photo-1449156001437-dc909a1f3800?auto=format&fit=crop&q=80&w=800",
            media: generate_album_media(100),
        },
        Album {
            id: 2,
            kind: AlbumKind::Video,
            title: "Midnight Motion",
            category: "Commercial",
            specs: "FX3 | 4K 60fps",
            cover_url:
                "https://images.unsplash.com/photo-1492691523567-6170f0295db1?auto=format&fit=crop&q=80&w=800",
            media: generate_album_media(200),
        },
        Album {
            id: 3,
            kind: AlbumKind::Social,
            title: "Hype Reels",
            category: "Lifestyle",
            specs: "9:16 Optimized",
            cover_url:
                "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&q=80&w=800",
            media: generate_album_media(300),
        },
        Album {
            id: 4,
            kind: AlbumKind::Photo,
            title: "Silent Peak",
            category: "Nature",
            specs: "DJI Mavic 3 Pro",
            cover_url:
                "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?auto=format&fit=crop&q=80&w=800",
            media: generate_album_media(400),
        },
        Album {
            id: 5,
            kind: AlbumKind::Video,
            title: "Aura Skincare",
            category: "Brand Film",
            specs: "Red Komodo | Anamorphic",
            cover_url:
                "https://images.unsplash.com/photo-1556229174-5e42a09e45af?auto=format&fit=crop&q=80&w=800",
            media: generate_album_media(500),
        },
        Album {
            id: 6,
            kind: AlbumKind::Social,
            title: "Viral Strategy",
            category: "Growth",
            specs: "Engagement Focus",
            cover_url:
                "https://images.unsplash.com/photo-1557833166-26798038622c?auto=format&fit=crop&q=80&w=800",
            media: generate_album_media(600),
        },
    ]
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Jenkins",
            role: "Creative Director",
            quote: "Vijay has an incredible eye for detail. The shots he delivered for our \
                    brand campaign were beyond our expectations.",
        },
        Testimonial {
            name: "Marcus Thorne",
            role: "Content Creator",
            quote: "Working with VVS Photography changed our social game. The video quality \
                    is cinematic and perfectly tailored for our audience.",
        },
        Testimonial {
            name: "Elena Rossi",
            role: "Marketing Manager",
            quote: "Professional, fast, and highly creative. Vijay knows exactly how to \
                    frame a story that resonates.",
        },
    ]
}

#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        Service {
            icon: ServiceIcon::Camera,
            title: "VVS Photography",
            blurb: "High-end product and architecture photography based in Chennai with a \
                    minimal aesthetic.",
            highlights: ["Product Shoots", "Post-Processing"],
        },
        Service {
            icon: ServiceIcon::Video,
            title: "Cinematic Video",
            blurb: "Story-driven video production, from commercial ads to viral-ready \
                    short-form reels.",
            highlights: ["Brand Storytelling", "Vertical Content"],
        },
        Service {
            icon: ServiceIcon::Share,
            title: "Social Growth",
            blurb: "Strategic content curation and social media management to amplify your \
                    digital presence.",
            highlights: ["Content Strategy", "Visual Branding"],
        },
    ]
}

#[must_use]
pub fn profile() -> StudioProfile {
    StudioProfile {
        brand: "VVS PHOTOGRAPHY",
        kicker: "Vijay Visual Shots • Chennai",
        headline: "DEFINING",
        headline_accent: "VISUALS.",
        intro: "Professional photography, cinematic videography, and digital strategy by \
                Vijay Kumar. Elevating your brand from the heart of Chennai.",
        capture_notes: [
            "SHUTTER SPEED 1/500 | ISO 200",
            "13.0827° N, 80.2707° E | CHENNAI",
        ],
        about_lead: "I am",
        about_name: "Vijay Kumar.",
        about_text: "Founder of Vijay Visual Shots, based out of Chennai. I blend technical \
                     camera precision with a deep understanding of modern digital marketing. \
                     My goal is to capture the unique identity of every subject, ensuring \
                     that the visual output is not just seen, but felt.",
        stats: [("VVS", "Chennai Based"), ("100%", "Client Focus")],
        portrait_url:
            "https://images.unsplash.com/photo-1554048612-b6a482bc67e5?auto=format&fit=crop&q=80&w=800",
        contact_note: "For inquiries, collaborations, or bookings for VVS Photography. \
                       Based in Chennai, available for travel.",
        email: "vijay@vjvisualshots.com",
        phone: "7200233129",
        instagram: "@vj.visual.shots",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generator_yields_fifteen_sequential_ids() {
        let media = generate_album_media(100);
        assert_eq!(media.len(), MEDIA_PER_ALBUM);
        for (index, item) in media.iter().enumerate() {
            assert_eq!(item.id, format!("100-{index}"));
        }
    }

    #[test]
    fn layout_hints_follow_modular_rules() {
        let media = generate_album_media(300);
        for (index, item) in media.iter().enumerate() {
            assert_eq!(item.is_wide, index % 7 == 0, "wide hint at index {index}");
            assert_eq!(item.is_tall, index % 5 == 0, "tall hint at index {index}");
        }
    }

    #[test]
    fn every_third_item_uses_tall_variant() {
        let media = generate_album_media(200);
        for (index, item) in media.iter().enumerate() {
            if index % 3 == 0 {
                assert!(item.url.ends_with("/800/1200"), "index {index}: {}", item.url);
            } else {
                assert!(item.url.ends_with("/800/800"), "index {index}: {}", item.url);
            }
        }
    }

    #[test]
    fn generator_is_deterministic() {
        assert_eq!(generate_album_media(400), generate_album_media(400));
    }

    #[test]
    fn seed_offsets_urls_by_twenty() {
        let media = generate_album_media(100);
        assert!(media[0].url.contains("/seed/120/"));
        assert!(media[14].url.contains("/seed/134/"));
    }

    #[test]
    fn album_list_has_six_unique_ids() {
        let albums = albums();
        assert_eq!(albums.len(), 6);

        let ids: HashSet<u32> = albums.iter().map(|album| album.id).collect();
        assert_eq!(ids.len(), 6);
        assert!((1..=6).all(|id| ids.contains(&id)));
    }

    #[test]
    fn every_album_carries_a_full_media_list() {
        for album in albums() {
            assert_eq!(album.media.len(), MEDIA_PER_ALBUM, "album {}", album.id);

            let unique: HashSet<&str> =
                album.media.iter().map(|item| item.id.as_str()).collect();
            assert_eq!(unique.len(), MEDIA_PER_ALBUM, "album {}", album.id);
        }
    }

    #[test]
    fn catalog_lookup_finds_albums_by_id() {
        let catalog = Catalog::new();
        assert_eq!(catalog.album(3).map(|album| album.title), Some("Hype Reels"));
        assert!(catalog.album(7).is_none());
    }

    #[test]
    fn catalog_carries_supporting_content() {
        let catalog = Catalog::new();
        assert_eq!(catalog.testimonials.len(), 3);
        assert_eq!(catalog.services.len(), 3);
        assert!(catalog.profile.email.contains('@'));
    }
}
