// File: crates/chart-core/src/grid.rs
// Summary: Nice tick steps and tick label formatting for the value axis.

/// Round `span / count` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span.abs() / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Upper bound on tick intervals; past it the domain itself is returned.
const MAX_TICKS: f64 = 100.0;

/// Evenly spaced ticks on a nice step. The first tick is `<= min` and the
/// last `>= max`, so the ticks double as the padded axis domain.
/// Spans wider than `f64::MAX` are measured in halves; non-finite input
/// yields `[0, 1]`.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return vec![0.0, 1.0];
    }
    let (min, max) = if max > min { (min, max) } else { (min, min + 1.0) };
    let span = max - min;
    let step = if span.is_finite() {
        nice_step(span, count)
    } else {
        2.0 * nice_step(max / 2.0 - min / 2.0, count)
    };
    let first = (min / step).floor();
    let last = (max / step).ceil();
    if !step.is_finite() || !(last - first).is_finite() || last - first > MAX_TICKS {
        return vec![min, max];
    }
    let ticks: Vec<f64> = (first as i64..=last as i64).map(|i| i as f64 * step).collect();
    if ticks.iter().all(|t| t.is_finite()) { ticks } else { vec![min, max] }
}

/// Tick label with as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
    let s = format!("{:.*}", decimals, value);
    // "-0" reads oddly on an axis
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') { "0".to_string() } else { s }
}
