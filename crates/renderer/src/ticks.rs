//! Tick placement and labels for axes and colorbars.

/// Step multipliers considered for tick spacing, per decade.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Largest tick index at which consecutive integers are still distinct `f64`s.
const MAX_EXACT_INDEX: f64 = 4_503_599_627_370_496.0; // 2^52

/// Choose evenly spaced "round" tick values inside `[min, max]`.
///
/// The step is the smallest of 1, 2, 2.5, 5 or 10 times a power of ten that
/// keeps the tick count at or below `max_ticks`. Returns `[min]` for a
/// degenerate range and nothing for non-finite input.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max_ticks == 0 {
        return Vec::new();
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let range = hi - lo;
    if range == 0.0 {
        return vec![lo];
    }

    let step = nice_step(range, max_ticks);
    let first = (lo / step).ceil();
    let last = (hi / step).floor();

    // Tick indices must stay exact integers; past 2^52 a step is below the
    // resolution of the values themselves, so only the ends are labelled.
    if !(first.abs() < MAX_EXACT_INDEX && last.abs() < MAX_EXACT_INDEX) {
        return vec![lo, hi];
    }
    if last < first {
        return Vec::new();
    }

    let count = ((last - first) as usize).min(max_ticks.saturating_mul(2));
    (0..=count)
        .map(|i| {
            let tick = (first + i as f64) * step;
            // Snap values like 0.30000000000000004 and -0.0
            if tick.abs() < step * 1e-9 {
                0.0
            } else {
                tick
            }
        })
        .collect()
}

/// Spacing that `nice_ticks` would use for `range`.
pub fn nice_step(range: f64, max_ticks: usize) -> f64 {
    let raw = range / max_ticks.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    for multiplier in NICE_STEPS {
        let step = multiplier * magnitude;
        if step >= raw {
            return step;
        }
    }
    10.0 * magnitude
}

/// Format a tick value with just enough decimals for `step`.
///
/// Very large or very small magnitudes switch to scientific notation.
pub fn format_tick(value: f64, step: f64) -> String {
    let magnitude = value.abs().max(step.abs());
    if magnitude != 0.0 && (magnitude >= 1e6 || magnitude < 1e-4) {
        return format!("{:.2e}", value);
    }

    let decimals = if step <= 0.0 || !step.is_finite() {
        2
    } else {
        (-step.log10().floor()).max(0.0) as usize + usize::from(is_half_step(step))
    };
    format!("{:.*}", decimals.min(6), value)
}

/// True for steps like 0.25 or 2.5 that need one more decimal than their decade.
fn is_half_step(step: f64) -> bool {
    let magnitude = 10f64.powf(step.log10().floor());
    ((step / magnitude) - 2.5).abs() < 1e-9
}
