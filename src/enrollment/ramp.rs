/// Sites newly activated in `month` (1-based). Site start-up lags behind
/// nominal capacity: nothing opens in the first month, then a quarter, a
/// third and half of the activation rate, then the full rate.
pub fn site_activation_for_month(month: u32, activation_rate: f64) -> f64 {
    match month {
        0 | 1 => 0.0,
        2 => (activation_rate / 4.0).ceil(),
        3 => (activation_rate / 3.0).ceil(),
        4 => (activation_rate / 2.0).ceil(),
        _ => activation_rate.ceil(),
    }
}
