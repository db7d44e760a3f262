// Host-side tests for venue defaults and host config merging.

use venue_cube::core::venue::*;

#[test]
fn defaults_hold_one_venue_per_corner() {
    let cfg = ResolvedConfig::default();
    assert_eq!(cfg.venues.len(), 4);
    for (i, corner) in Corner::ALL.into_iter().enumerate() {
        assert_eq!(cfg.venues[i].position, corner);
        assert_eq!(cfg.venue_at(corner).position, corner);
    }
    assert_eq!(cfg.venue_at(Corner::TopLeft).id, "wedding");
    assert_eq!(cfg.venue_at(Corner::BottomRight).name, "The Atrium Gallery");
    assert_eq!(cfg.primary_cta_label, "Learn More");
    assert_eq!(cfg.secondary_cta_label, "Book Now");
    assert_eq!(cfg.logo_texture_url, DEFAULT_LOGO_URL);
}

#[test]
fn missing_config_resolves_to_defaults() {
    assert_eq!(resolve_config(None), ResolvedConfig::default());
    assert_eq!(
        resolve_config(Some(RawConfig::default())),
        ResolvedConfig::default()
    );
}

#[test]
fn top_level_strings_override_and_blank_falls_back() {
    let raw = parse_raw_config(r#"{"headline":"Hello","subheadline":"   ","primaryCtaLabel":"Info"}"#)
        .unwrap();
    let cfg = resolve_config(Some(raw));
    assert_eq!(cfg.headline, "Hello");
    assert_eq!(cfg.subheadline, ResolvedConfig::default().subheadline);
    assert_eq!(cfg.primary_cta_label, "Info");
    assert_eq!(cfg.secondary_cta_label, "Book Now");
}

#[test]
fn venue_override_matches_by_id_first() {
    let raw = parse_raw_config(
        r#"{"venues":[{"id":"dining","name":"Rooftop","position":"top-left"}]}"#,
    )
    .unwrap();
    let cfg = resolve_config(Some(raw));
    // id wins: the dining venue is renamed, top-left keeps its default
    assert_eq!(cfg.venue_at(Corner::BottomLeft).name, "Rooftop");
    assert_eq!(cfg.venue_at(Corner::TopLeft).name, "The Grand Ballroom");
}

#[test]
fn venue_override_matches_by_position_when_id_unknown() {
    let raw = parse_raw_config(
        r#"{"venues":[{"id":"loft","name":"The Loft","position":"top-right","link":"/loft"}]}"#,
    )
    .unwrap();
    let cfg = resolve_config(Some(raw));
    let v = cfg.venue_at(Corner::TopRight);
    assert_eq!(v.id, "loft");
    assert_eq!(v.name, "The Loft");
    assert_eq!(v.link, "/loft");
    assert_eq!(v.position, Corner::TopRight);
    assert_eq!(cfg.venue_by_id("loft").map(|v| v.position), Some(Corner::TopRight));
    assert!(cfg.venue_by_id("corporate").is_none());
}

#[test]
fn override_never_moves_a_venue_to_another_corner() {
    let raw = parse_raw_config(r#"{"venues":[{"id":"wedding","position":"bottom-right"}]}"#)
        .unwrap();
    let cfg = resolve_config(Some(raw));
    assert_eq!(cfg.venue_at(Corner::TopLeft).id, "wedding");
    assert_eq!(cfg.venue_at(Corner::BottomRight).id, "gallery");
    let positions: Vec<Corner> = cfg.venues.iter().map(|v| v.position).collect();
    assert_eq!(positions, Corner::ALL.to_vec());
}

#[test]
fn an_entry_applies_to_at_most_one_venue() {
    let raw = parse_raw_config(
        r#"{"venues":[
            {"id":"dining","name":"Rooftop","position":"top-left"},
            {"name":"Studio","position":"top-left"},
            {"id":"loft","name":"The Loft","position":"bottom-left"}
        ]}"#,
    )
    .unwrap();
    let cfg = resolve_config(Some(raw));
    // the id-less entry is the first position match left for top-left
    assert_eq!(cfg.venue_at(Corner::TopLeft).id, "wedding");
    assert_eq!(cfg.venue_at(Corner::TopLeft).name, "Studio");
    // dining claimed its own entry by id, so the loft entry is unused
    assert_eq!(cfg.venue_at(Corner::BottomLeft).name, "Rooftop");
    assert!(cfg.venue_by_id("loft").is_none());

    let mut ids: Vec<&str> = cfg.venues.iter().map(|v| v.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn invalid_color_keeps_default_and_valid_color_applies() {
    let raw = parse_raw_config(
        r##"{"venues":[{"id":"wedding","color":"salmon"},{"id":"gallery","color":" #abc "}]}"##,
    )
    .unwrap();
    let cfg = resolve_config(Some(raw));
    assert_eq!(cfg.venue_at(Corner::TopLeft).color, "#E8D5C4");
    assert_eq!(cfg.venue_at(Corner::BottomRight).color, "#abc");
}

#[test]
fn malformed_or_empty_candidates_are_treated_as_absent() {
    assert!(parse_config_candidate("test", Some("{not json")).is_none());
    assert!(parse_config_candidate("test", Some("   ")).is_none());
    assert!(parse_config_candidate("test", None).is_none());
    assert!(matches!(parse_raw_config(""), Err(ConfigError::Empty)));
    assert!(matches!(parse_raw_config("[1"), Err(ConfigError::Malformed(_))));
    assert!(parse_config_candidate("test", Some(r#"{"headline":"x"}"#)).is_some());
}

#[test]
fn corner_names_round_trip_through_grid_cells() {
    for corner in Corner::ALL {
        assert_eq!(Corner::parse(corner.as_str()), Some(corner));
        let (x, y) = corner.grid_cell();
        assert_eq!(Corner::from_grid_cell(x, y), Some(corner));
    }
    assert_eq!(Corner::parse("middle"), None);
    assert_eq!(Corner::from_grid_cell(2, 0), None);
}

#[test]
fn hex_colors_parse_short_and_long_forms() {
    assert_eq!(parse_hex_color("#fff"), Some([1.0, 1.0, 1.0]));
    assert_eq!(parse_hex_color("#000000"), Some([0.0, 0.0, 0.0]));
    let [r, g, b] = parse_hex_color("#ff8000").unwrap();
    assert_eq!(r, 1.0);
    assert!((g - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(b, 0.0);
    assert_eq!(parse_hex_color("fff"), None);
    assert_eq!(parse_hex_color("#ggg"), None);
    assert_eq!(parse_hex_color("#ffff"), None);
}

#[test]
fn linear_conversion_is_monotonic_and_bounded() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!(srgb_to_linear(0.5) < 0.5);
    assert_eq!(hex_to_linear("nope"), [0.0; 3]);
}
