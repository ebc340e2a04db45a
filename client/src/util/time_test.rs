use super::*;

#[test]
fn format_clock_zero_pads() {
    assert_eq!(format_clock(9, 5), "09:05");
    assert_eq!(format_clock(23, 59), "23:59");
}

#[test]
fn format_clock_wraps_out_of_range() {
    assert_eq!(format_clock(24, 60), "00:00");
}
