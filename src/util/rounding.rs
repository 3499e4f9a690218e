/// Rounds half-up to the nearest integer. Only applied to values leaving the
/// simulation; cumulative state is never rounded.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
