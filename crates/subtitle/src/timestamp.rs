/// Format seconds as `HH:MM:SS,mmm` with zero-padded fields.
///
/// Milliseconds are floored with a small epsilon so values like `4.5`
/// (stored as 4.4999…) land on the intended millisecond.
pub fn format_timestamp(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let millis = (((seconds + 1e-9) % 1.0) / 0.001).floor() as u64;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
    }

    #[test]
    fn fields_are_zero_padded() {
        assert_eq!(format_timestamp(3661.5), "01:01:01,500");
    }

    #[test]
    fn sub_second_values_keep_three_millisecond_digits() {
        assert_eq!(format_timestamp(0.007), "00:00:00,007");
        assert_eq!(format_timestamp(0.25), "00:00:00,250");
    }

    #[test]
    fn long_recordings_roll_into_double_digit_hours() {
        assert_eq!(format_timestamp(10.0 * 3600.0 + 59.0 * 60.0 + 59.999), "10:59:59,999");
    }

    #[test]
    fn epsilon_guards_against_binary_representation() {
        // 8.2 is stored just below 8.2; naive flooring would yield 199.
        assert_eq!(format_timestamp(8.2), "00:00:08,200");
    }
}
