// Axis tick generation

/// Snaps a raw step to the nearest value of 1, 2 or 5 times a power of ten.
/// "Nearest" is in ratio terms, using the geometric means of adjacent
/// candidates as thresholds.
fn nice_step(raw: f64) -> f64 {
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    base * factor
}

/// Ordered round tick values spanning `[d0, d1]`, approximately `count` of
/// them. The first and last tick are the domain bounds rounded outward to
/// multiples of the chosen step, so the sequence may extend marginally past
/// the domain.
///
/// A degenerate domain (`d0 == d1`) yields exactly one tick at that value;
/// non-finite bounds or a zero count yield none.
pub fn nice_ticks(d0: f64, d1: f64, count: usize) -> Vec<f64> {
    if !d0.is_finite() || !d1.is_finite() || count == 0 {
        return Vec::new();
    }
    if d0 == d1 {
        return vec![d0];
    }
    let (lo, hi) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
    let step = nice_step((hi - lo) / count as f64);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let first = (lo / step).floor() as i64;
    let last = (hi / step).ceil() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}
