//! Built-in colormap tables.

use super::{Color, Colormap, Interpolation, Segment};

// matplotlib segment data (_cm.py)

const JET_RED: &[Segment] = &[
    (0.0, 0.0, 0.0),
    (0.35, 0.0, 0.0),
    (0.66, 1.0, 1.0),
    (0.89, 1.0, 1.0),
    (1.0, 0.5, 0.5),
];
const JET_GREEN: &[Segment] = &[
    (0.0, 0.0, 0.0),
    (0.125, 0.0, 0.0),
    (0.375, 1.0, 1.0),
    (0.64, 1.0, 1.0),
    (0.91, 0.0, 0.0),
    (1.0, 0.0, 0.0),
];
const JET_BLUE: &[Segment] = &[
    (0.0, 0.5, 0.5),
    (0.11, 1.0, 1.0),
    (0.34, 1.0, 1.0),
    (0.65, 0.0, 0.0),
    (1.0, 0.0, 0.0),
];

const HOT_RED: &[Segment] = &[(0.0, 0.0416, 0.0416), (0.365079, 1.0, 1.0), (1.0, 1.0, 1.0)];
const HOT_GREEN: &[Segment] = &[
    (0.0, 0.0, 0.0),
    (0.365079, 0.0, 0.0),
    (0.746032, 1.0, 1.0),
    (1.0, 1.0, 1.0),
];
const HOT_BLUE: &[Segment] = &[(0.0, 0.0, 0.0), (0.746032, 0.0, 0.0), (1.0, 1.0, 1.0)];

const GRAY: &[Segment] = &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)];

// Evenly spaced samples

const VIRIDIS: &[[f32; 3]] = &[
    [0.267, 0.004, 0.329],
    [0.282, 0.140, 0.457],
    [0.253, 0.265, 0.529],
    [0.206, 0.371, 0.553],
    [0.163, 0.471, 0.558],
    [0.127, 0.566, 0.550],
    [0.134, 0.658, 0.517],
    [0.266, 0.749, 0.440],
    [0.477, 0.821, 0.318],
    [0.741, 0.873, 0.150],
    [0.993, 0.906, 0.144],
];

const BLUES: &[[f32; 3]] = &[
    [0.969, 0.984, 1.000],
    [0.871, 0.922, 0.969],
    [0.776, 0.859, 0.937],
    [0.620, 0.792, 0.882],
    [0.419, 0.682, 0.839],
    [0.259, 0.573, 0.776],
    [0.129, 0.443, 0.710],
    [0.031, 0.318, 0.612],
    [0.031, 0.188, 0.420],
];

const REDS: &[[f32; 3]] = &[
    [1.000, 0.961, 0.941],
    [0.996, 0.878, 0.824],
    [0.988, 0.733, 0.631],
    [0.988, 0.573, 0.447],
    [0.984, 0.416, 0.290],
    [0.937, 0.231, 0.173],
    [0.796, 0.094, 0.114],
    [0.647, 0.059, 0.082],
    [0.404, 0.000, 0.051],
];

const COOLWARM: &[[f32; 3]] = &[
    [0.230, 0.299, 0.754],
    [0.552, 0.690, 0.996],
    [0.866, 0.866, 0.866],
    [0.956, 0.604, 0.486],
    [0.706, 0.016, 0.150],
];

const RAINBOW: &[[f32; 3]] = &[
    [0.5, 0.0, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
];

/// Gradient presets carried over from the fractal explorer's color dialog.
struct Preset {
    name: &'static str,
    interpolation: Interpolation,
    stops: &'static [(f32, Color)],
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "grayscale",
        interpolation: Interpolation::Rgb,
        stops: &[(0.0, Color::new(0, 0, 0)), (1.0, Color::new(255, 255, 255))],
    },
    Preset {
        name: "cold",
        interpolation: Interpolation::Rgb,
        stops: &[
            (0.0, Color::new(0, 0, 50)),
            (0.2, Color::new(0, 10, 180)),
            (0.4, Color::new(0, 50, 245)),
            (0.6, Color::new(10, 150, 255)),
            (0.8, Color::new(50, 255, 255)),
            (1.0, Color::new(255, 255, 255)),
        ],
    },
    Preset {
        name: "night",
        interpolation: Interpolation::Hsv,
        stops: &[(0.0, Color::new(10, 20, 30)), (1.0, Color::new(250, 255, 250))],
    },
    Preset {
        name: "candy",
        interpolation: Interpolation::Hsv,
        stops: &[(0.0, Color::new(0, 0, 255)), (1.0, Color::new(255, 250, 250))],
    },
    Preset {
        name: "geography",
        interpolation: Interpolation::Rgb,
        stops: &[
            (0.0, Color::new(70, 170, 210)),
            (0.20, Color::new(90, 160, 180)),
            (0.25, Color::new(45, 130, 175)),
            (0.30, Color::new(100, 140, 125)),
            (0.5, Color::new(100, 140, 100)),
            (0.6, Color::new(130, 145, 120)),
            (0.7, Color::new(140, 130, 120)),
            (0.9, Color::new(180, 190, 190)),
            (1.0, Color::new(210, 210, 230)),
        ],
    },
    Preset {
        name: "ion",
        interpolation: Interpolation::Hsv,
        stops: &[
            (0.0, Color::new(50, 10, 10)),
            (0.45, Color::new(0, 0, 255)),
            (0.8, Color::new(0, 255, 255)),
            (1.0, Color::new(0, 255, 0)),
        ],
    },
    Preset {
        name: "thermal",
        interpolation: Interpolation::Rgb,
        stops: &[
            (0.0, Color::new(0, 0, 50)),
            (0.15, Color::new(20, 0, 120)),
            (0.33, Color::new(200, 30, 140)),
            (0.6, Color::new(255, 100, 0)),
            (0.85, Color::new(255, 255, 40)),
            (1.0, Color::new(255, 255, 255)),
        ],
    },
    Preset {
        name: "polar",
        interpolation: Interpolation::Rgb,
        stops: &[
            (0.0, Color::new(50, 255, 255)),
            (0.18, Color::new(10, 70, 255)),
            (0.28, Color::new(10, 10, 190)),
            (0.5, Color::new(0, 0, 0)),
            (0.72, Color::new(190, 10, 10)),
            (0.82, Color::new(255, 70, 10)),
            (1.0, Color::new(255, 255, 50)),
        ],
    },
    Preset {
        name: "spectrum",
        interpolation: Interpolation::Hsv,
        stops: &[
            (0.0, Color::new(50, 0, 50)),
            (0.15, Color::new(0, 0, 255)),
            (0.35, Color::new(0, 255, 255)),
            (0.6, Color::new(255, 255, 0)),
            (0.75, Color::new(255, 30, 0)),
            (1.0, Color::new(50, 0, 0)),
        ],
    },
    Preset {
        name: "hues",
        interpolation: Interpolation::Hsv,
        stops: &[
            (0.0, Color::new(255, 0, 0)),
            (1.0 / 3.0, Color::new(0, 0, 255)),
            (2.0 / 3.0, Color::new(0, 255, 0)),
            (1.0, Color::new(255, 0, 0)),
        ],
    },
];

/// Every built-in colormap.
pub(super) fn all() -> Vec<Colormap> {
    let mut maps = Vec::new();

    let segmented: [(&str, &[Segment], &[Segment], &[Segment]); 3] = [
        ("jet", JET_RED, JET_GREEN, JET_BLUE),
        ("hot", HOT_RED, HOT_GREEN, HOT_BLUE),
        ("gray", GRAY, GRAY, GRAY),
    ];
    for (name, r, g, b) in segmented {
        if let Ok(cmap) = Colormap::from_segments(name, r, g, b) {
            maps.push(cmap);
        }
    }

    let sampled: [(&str, &[[f32; 3]]); 5] = [
        ("viridis", VIRIDIS),
        ("blues", BLUES),
        ("reds", REDS),
        ("coolwarm", COOLWARM),
        ("rainbow", RAINBOW),
    ];
    for (name, samples) in sampled {
        if let Ok(cmap) = Colormap::from_samples(name, samples) {
            maps.push(cmap);
        }
    }

    for preset in PRESETS {
        if let Ok(cmap) = Colormap::from_stops(preset.name, preset.stops, preset.interpolation) {
            maps.push(cmap);
        }
    }

    maps
}
