// Linear domain-to-pixel scale

/// Maps a continuous data domain `[d0, d1]` onto a continuous pixel range
/// `[r0, r1]`. Pure and stateless beyond the two intervals, so it is safe to
/// share across rendering passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Projects a data value to a pixel position.
    ///
    /// A collapsed domain (`d0 == d1`) maps every value to the middle of the
    /// range instead of dividing by zero.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return r0 + (r1 - r0) * 0.5;
        }
        let t = (value - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }

    /// Algebraic inverse of `map`, for pointer-position lookups were zoom or
    /// pan ever added. A collapsed range yields the middle of the domain.
    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r0 == r1 {
            return d0 + (d1 - d0) * 0.5;
        }
        let t = (position - r0) / (r1 - r0);
        d0 + t * (d1 - d0)
    }
}

/// The `[min, max]` pair of a value sequence, skipping non-finite entries.
/// `None` when no finite value is present.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    bounds
}
