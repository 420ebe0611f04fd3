//! Tests for the colormap registry, built-in tables and colormap files.

use renderer::colorbar::render_colorbar;
use renderer::colormap::{ColormapFile, LUT_SIZE};
use renderer::{ColormapRegistry, RenderError};

// ============================================================================
// Built-ins
// ============================================================================

#[test]
fn test_jet_endpoints_match_matplotlib() {
    let jet = ColormapRegistry::with_defaults().get("jet").unwrap();

    assert_eq!(jet.lut().len(), LUT_SIZE);
    assert_eq!(jet.sample(0.0), Some([0.0, 0.0, 0.5]));
    assert_eq!(jet.sample(1.0), Some([0.5, 0.0, 0.0]));
    assert_eq!(jet.sample(f64::NAN), None);
}

#[test]
fn test_out_of_range_values_take_end_colors() {
    let jet = ColormapRegistry::with_defaults().get("jet").unwrap();
    assert_eq!(jet.sample(-3.0), jet.sample(0.0));
    assert_eq!(jet.sample(7.0), jet.sample(1.0));
}

#[test]
fn test_all_builtins_present() {
    let registry = ColormapRegistry::with_defaults();
    for name in [
        "jet", "gray", "hot", "viridis", "coolwarm", "rainbow", "blues", "reds", "grayscale",
        "cold", "night", "candy", "geography", "ion", "thermal", "polar", "spectrum", "hues",
    ] {
        let cmap = registry.get(name).unwrap();
        assert_eq!(cmap.name(), name);
        assert_eq!(cmap.lut().len(), LUT_SIZE);
        assert!(cmap
            .lut()
            .iter()
            .flatten()
            .all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn test_reversed_lookup() {
    let registry = ColormapRegistry::with_defaults();
    let jet = registry.get("jet").unwrap();
    let jet_r = registry.get("jet_r").unwrap();

    assert_eq!(jet_r.name(), "jet_r");
    assert_eq!(jet_r.sample(0.0), jet.sample(1.0));
    assert_eq!(jet_r.sample(1.0), jet.sample(0.0));
}

#[test]
fn test_unknown_colormap_lists_names() {
    let err = ColormapRegistry::with_defaults()
        .get("no-such-map")
        .unwrap_err();

    match err {
        RenderError::UnknownColormap { name, available } => {
            assert_eq!(name, "no-such-map");
            assert!(available.contains(&"jet".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Colormap files
// ============================================================================

const OCEAN_JSON: &str = r##"{
    "colormaps": {
        "ocean": {
            "description": "Deep to shallow water",
            "stops": [
                {"value": -100.0, "color": "#000033"},
                {"value": 0.0, "color": "#66CCFF"}
            ]
        },
        "flame": {
            "interpolation": "hsv",
            "stops": [
                {"value": 0.0, "color": "#FF0000"},
                {"value": 1.0, "color": "#FFFF00"}
            ]
        }
    }
}"##;

#[test]
fn test_load_colormap_file_into_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maps.json");
    std::fs::write(&path, OCEAN_JSON).unwrap();

    let mut registry = ColormapRegistry::with_defaults();
    assert_eq!(registry.load_file(&path).unwrap(), 2);

    let ocean = registry.get("ocean").unwrap();
    let [r, g, b] = ocean.sample(1.0).unwrap();
    assert_eq!([r, g, b], [0x66 as f32 / 255.0, 0xCC as f32 / 255.0, 1.0]);
    assert!(registry.contains("flame_r"));
}

#[test]
fn test_colormap_file_rejects_bad_color() {
    let json = r##"{"colormaps": {"bad": {"stops": [{"value": 0.0, "color": "#GG0000"}]}}}"##;
    let file = ColormapFile::from_json(json).unwrap();
    assert!(matches!(
        file.build(),
        Err(RenderError::InvalidColormap { .. })
    ));
}

#[test]
fn test_colormap_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = ColormapRegistry::with_defaults();
    let err = registry
        .load_file(&dir.path().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }));
}

// ============================================================================
// Colorbar
// ============================================================================

#[test]
fn test_colorbar_is_unshaded_colormap() {
    let registry = ColormapRegistry::with_defaults();
    for name in ["jet", "viridis", "thermal"] {
        let cmap = registry.get(name).unwrap();
        let bar = render_colorbar(&cmap, 3, LUT_SIZE as u32);

        for y in 0..LUT_SIZE as u32 {
            let expected = cmap.lut()[LUT_SIZE - 1 - y as usize]
                .map(|c| (c as f64 * 255.0).round() as u8);
            let pixel = bar.get_pixel(1, y).0;
            assert_eq!(&pixel[..3], &expected[..], "{name} row {y}");
            assert_eq!(pixel[3], 255);
        }
    }
}
