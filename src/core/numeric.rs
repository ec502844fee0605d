//! Rounding, clamping and small number formatting helpers.

/// Decimal places beyond this are clamped; f64 cannot represent them anyway.
pub const MAX_DECIMALS: u32 = 14;

fn multiplier(decimals: u32) -> f64 {
    10f64.powi(decimals.min(MAX_DECIMALS) as i32)
}

/// `round_to(1.123111, 3) == 1.123`, `round_to(0.199999, 1) == 0.2`
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let m = multiplier(decimals);
    (value * m).round() / m
}

/// `floor_to(1.123999, 3) == 1.123`
pub fn floor_to(value: f64, decimals: u32) -> f64 {
    let m = multiplier(decimals);
    (value * m).floor() / m
}

/// `ceil_to(1.123111, 3) == 1.124`
pub fn ceil_to(value: f64, decimals: u32) -> f64 {
    let m = multiplier(decimals);
    (value * m).ceil() / m
}

/// Limit `value` to the span between `min` and `max`, in either order.
pub fn clamp_num(value: f64, min: f64, max: f64) -> f64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if value <= low {
        low
    } else if value >= high {
        high
    } else {
        value
    }
}

/// 1D distance between two numbers.
pub fn distance(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// One RGB channel as two lowercase hex digits. Out-of-range input clamps.
pub fn rgb_to_hex(channel: f64) -> String {
    let byte = clamp_num(channel.round(), 0.0, 255.0) as u8;
    format!("{:02x}", byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_family() {
        assert_eq!(round_to(1.123111, 3), 1.123);
        assert_eq!(round_to(0.199999, 1), 0.2);
        assert_eq!(round_to(1.199999, 0), 1.0);
        assert_eq!(floor_to(1.123999, 3), 1.123);
        assert_eq!(ceil_to(1.123111, 3), 1.124);
    }

    #[test]
    fn oversized_decimals_are_clamped() {
        assert_eq!(round_to(2.5, 400), round_to(2.5, MAX_DECIMALS));
    }

    #[test]
    fn clamp_accepts_reversed_bounds() {
        assert_eq!(clamp_num(1.0, 5.0, 10.0), 5.0);
        assert_eq!(clamp_num(7.0, 5.0, 10.0), 7.0);
        assert_eq!(clamp_num(12.0, 5.0, 10.0), 10.0);
        assert_eq!(clamp_num(-7.0, 5.0, -3.0), -3.0);
    }

    #[test]
    fn distance_is_absolute() {
        assert_eq!(distance(1.0, 6.0), 5.0);
        assert_eq!(distance(7.0, -3.0), 10.0);
        assert_eq!(distance(10.0, 10.0), 0.0);
    }

    #[test]
    fn rgb_channels() {
        assert_eq!(rgb_to_hex(9.0), "09");
        assert_eq!(rgb_to_hex(164.4), "a4");
        assert_eq!(rgb_to_hex(255.0), "ff");
        assert_eq!(rgb_to_hex(300.0), "ff");
        assert_eq!(rgb_to_hex(-4.0), "00");
    }
}
