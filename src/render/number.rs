const RANGES: [(f64, &str); 2] = [(1e6, "M"), (1e3, "k")];

/// Abbreviate a view count: one decimal with an `M` or `k` suffix from a
/// thousand upwards, the plain integer below.
pub fn abbreviate(n: u64) -> String {
    for (divider, suffix) in RANGES {
        let value = n as f64;
        if value >= divider {
            let scaled = (value / divider * 10.0).round() / 10.0;
            return format!("{}{}", scaled, suffix);
        }
    }
    n.to_string()
}
