// Literacy dataset domain model

/// One observation from the dataset: a country (or aggregate) with youth
/// literacy rates for women and men in a given year, grouped by world region.
///
/// The numeric rates come from CSV text and may be absent or unparseable;
/// such fields are `None`, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteracyRecord {
    pub entity: String,
    pub region: String,
    pub year: Option<i32>,
    pub women: Option<f64>,
    pub men: Option<f64>,
}

impl LiteracyRecord {
    pub fn new(
        entity: String,
        region: String,
        year: Option<i32>,
        women: Option<f64>,
        men: Option<f64>,
    ) -> Self {
        Self {
            entity,
            region,
            year,
            women,
            men,
        }
    }

    /// The (women, men) pair when both rates are present and finite.
    ///
    /// Records without coordinates are excluded from extent computation and
    /// from rendering.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.women, self.men) {
            (Some(w), Some(m)) if w.is_finite() && m.is_finite() => Some((w, m)),
            _ => None,
        }
    }
}
