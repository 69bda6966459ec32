// SPDX-License-Identifier: MPL-2.0
use std::collections::HashSet;
use tempfile::tempdir;
use vvs_portfolio::app::config::{self, Config};
use vvs_portfolio::catalog::{self, Catalog, MEDIA_PER_ALBUM};
use vvs_portfolio::i18n::I18n;

#[test]
fn catalog_exposes_six_fully_generated_albums() {
    let catalog = Catalog::new();

    assert_eq!(catalog.albums.len(), 6);
    let ids: HashSet<u32> = catalog.albums.iter().map(|album| album.id).collect();
    assert_eq!(ids, (1..=6).collect());

    for album in &catalog.albums {
        assert_eq!(album.media.len(), MEDIA_PER_ALBUM);
        for (index, item) in album.media.iter().enumerate() {
            assert!(item.url.starts_with("https://picsum.photos/seed/"));
            assert_eq!(item.is_wide, index % 7 == 0);
            assert_eq!(item.is_tall, index % 5 == 0);
        }
    }
}

#[test]
fn media_generation_is_stable_across_calls() {
    // Two independently built catalogs must agree item-for-item.
    let first = Catalog::new();
    let second = Catalog::new();

    for (a, b) in first.albums.iter().zip(second.albums.iter()) {
        assert_eq!(a.media, b.media);
    }
}

#[test]
fn album_media_ids_never_collide_across_albums() {
    let catalog = Catalog::new();
    let all_ids: HashSet<&str> = catalog
        .albums
        .iter()
        .flat_map(|album| album.media.iter().map(|item| item.id.as_str()))
        .collect();

    assert_eq!(all_ids.len(), catalog.albums.len() * MEDIA_PER_ALBUM);
}

#[test]
fn config_round_trips_and_drives_language_selection() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("failed to write config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded.general.language.as_deref(), Some("en-US"));

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("window-title"), "VVS Photography");
}

#[test]
fn gallery_header_count_uses_the_album_constant() {
    let i18n = I18n::default();
    let count = MEDIA_PER_ALBUM.to_string();
    let line = i18n.tr_with_args(
        "gallery-file-count",
        &[("category", "ARCHITECTURE"), ("count", count.as_str())],
    );

    assert!(line.contains("ARCHITECTURE"));
    assert!(line.contains("15"));
}

#[test]
fn generator_matches_documented_url_shape() {
    let media = catalog::generate_album_media(500);

    assert_eq!(media[0].id, "500-0");
    assert_eq!(media[0].url, "https://picsum.photos/seed/520/800/1200");
    assert_eq!(media[1].url, "https://picsum.photos/seed/521/800/800");
    assert_eq!(media[14].id, "500-14");
}
