//! Number and bar formatting for labels.

const INFINITE: &str = "∞";

/// Item value with a magnitude suffix: `999`, `12K`, `4M`, `363B`, then `∞`
/// above 999 999 999 999.
pub fn format_value(value: u64) -> String {
    scaled(value, false)
}

/// Like [`format_value`] with one decimal digit after the leading group:
/// `363.8B`.
pub fn format_money(value: u64) -> String {
    scaled(value, true)
}

fn scaled(value: u64, decimal: bool) -> String {
    if value > 999_999_999_999 {
        return INFINITE.to_string();
    }
    let (digits, suffix) = match value {
        v if v > 999_999_999 => (9, "B"),
        v if v > 999_999 => (6, "M"),
        v if v > 999 => (3, "K"),
        v => return v.to_string(),
    };
    let text = value.to_string();
    let (head, tail) = text.split_at(text.len() - digits);
    if decimal {
        format!("{head}.{}{suffix}", &tail[..1])
    } else {
        format!("{head}{suffix}")
    }
}

/// `width` cells of `█` proportional to `current / max` (rounded), padded
/// with `░`.
pub fn health_bar(current: i32, max: i32, width: usize) -> String {
    let filled = if max <= 0 {
        0
    } else {
        let ratio = current.clamp(0, max) as f64 / max as f64;
        ((width as f64 * ratio).round() as usize).min(width)
    };
    let mut bar: String = std::iter::repeat_n('█', filled).collect();
    bar.extend(std::iter::repeat_n('░', width - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_suffixes() {
        assert_eq!(format_value(999), "999");
        assert_eq!(format_value(1_000), "1K");
        assert_eq!(format_value(45_900), "45K");
        assert_eq!(format_value(7_250_000), "7M");
        assert_eq!(format_value(363_899_345_745), "363B");
        assert_eq!(format_value(1_000_000_000_000), "∞");
    }

    #[test]
    fn money_has_one_decimal() {
        assert_eq!(format_money(363_899_345_745), "363.8B");
        assert_eq!(format_money(1_250), "1.2K");
        assert_eq!(format_money(42), "42");
    }

    #[test]
    fn health_bar_rounds() {
        assert_eq!(health_bar(90, 150, 39).chars().filter(|c| *c == '█').count(), 23);
        assert_eq!(health_bar(0, 150, 5), "░░░░░");
        assert_eq!(health_bar(150, 150, 5), "█████");
        assert_eq!(health_bar(10, 0, 3), "░░░");
        assert_eq!(health_bar(90, 150, 39).chars().count(), 39);
    }
}
