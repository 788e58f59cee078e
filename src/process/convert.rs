/// Parse a numeric cell. Blank, unparseable, NaN and infinite cells yield `None`.
pub fn parse_finite(raw: &str) -> Option<f64> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Days outstanding. Only finite, non-negative values survive; the caller
/// substitutes 0 for `None`.
pub fn pending_days(raw: &str) -> Option<f64> {
    parse_finite(raw)
        .filter(|v| *v >= 0.0)
        // -0.0 passes the filter above
        .map(|v| if v == 0.0 { 0.0 } else { v })
}

/// Cash-on-delivery amount; `None` when the cell is not a finite number.
pub fn cod_amount(raw: &str) -> Option<f64> {
    parse_finite(raw)
}

/// Tally of cells replaced by 0 during a load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Coercions {
    pub pending: usize,
    pub cod: usize,
}

impl Coercions {
    pub fn pending_or_zero(&mut self, raw: &str) -> f64 {
        pending_days(raw).unwrap_or_else(|| {
            self.pending += 1;
            0.0
        })
    }

    pub fn cod_or_zero(&mut self, raw: &str) -> f64 {
        cod_amount(raw).unwrap_or_else(|| {
            self.cod += 1;
            0.0
        })
    }
}
