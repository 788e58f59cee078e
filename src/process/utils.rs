/// Normalize a station code the same way on both sides of a comparison:
/// surrounding whitespace goes, everything else is kept as typed.
pub fn normalize_station(raw: &str) -> String {
    raw.trim().to_string()
}
