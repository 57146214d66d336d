use knapbench_utils::*;

#[test]
fn test_safe_ratio() {
    assert_eq!(safe_ratio(160, 220), 160.0 / 220.0);
    assert_eq!(safe_ratio(0, 0), 0.0);
    assert_eq!(safe_ratio(5, 0), 0.0);
    assert_eq!(safe_ratio(220, 220), 1.0);
}

#[test]
fn test_safe_ratio_f64() {
    assert_eq!(safe_ratio_f64(3.0, 1.5), 2.0);
    assert_eq!(safe_ratio_f64(3.0, 0.0), 0.0);
}

#[test]
fn test_shortfall_percent() {
    assert_eq!(shortfall_percent(220, 220), 0.0);
    assert_eq!(shortfall_percent(0, 0), 0.0);
    assert_eq!(shortfall_percent(50, 200), 75.0);
    assert!((shortfall_percent(160, 220) - 27.272727).abs() < 1e-5);
}
