mod common;

use common::assert_close;
use warrant_calculator::InputErrorKind;
use warrant_calculator::application::services::compute;

#[test]
fn test_reference_calculation() {
    let result = compute(1000.0, 6.00, "01-01-20", "07-01-20").unwrap();

    assert_eq!(result.days, 182);
    assert_close(result.interest, 1000.0 * 0.06 * (182.0 / 365.0));
    assert_close(result.total, 1000.0 + result.interest);
    assert_eq!(format!("{:.2}", result.interest), "29.92");
    assert_eq!(format!("{:.2}", result.total), "1029.92");
}

#[test]
fn test_simple_interest_formula() {
    let cases = [
        (250.0, 1.5, "03-15-21", "09-30-21"),
        (10_000.0, 20.0, "01-01-19", "01-01-20"),
        (0.01, 0.01, "12-31-99", "01-01-00"),
        (123_456.78, 7.25, "06-01-22", "06-01-22"),
    ];

    for (principal, rate, start, end) in cases {
        let result = compute(principal, rate, start, end).unwrap();
        let expected = principal * (rate / 100.0) * (f64::from(result.days) / 365.0);

        assert_close(result.interest, expected);
        assert_close(result.total, principal + expected);
    }
}

#[test]
fn test_rate_boundaries() {
    let err = compute(500.0, 0.0, "01-01-20", "07-01-20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::RateOutOfRange);

    assert!(compute(500.0, 20.0, "01-01-20", "07-01-20").is_ok());

    let err = compute(500.0, 20.01, "01-01-20", "07-01-20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::RateOutOfRange);

    let err = compute(500.0, -1.0, "01-01-20", "07-01-20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::RateOutOfRange);
}

#[test]
fn test_end_before_start() {
    let err = compute(500.0, 6.0, "02-01-20", "01-01-20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::EndBeforeStart);
    assert_eq!(err.message, "End date must be after start date.");
}

#[test]
fn test_non_positive_amount() {
    let err = compute(0.0, 6.0, "01-01-20", "07-01-20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::NonPositiveAmount);
    assert_eq!(err.message, "Warrant amount must be greater than zero.");
}

#[test]
fn test_malformed_dates() {
    let err = compute(500.0, 6.0, "13-01-20", "07-01-20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::MalformedDate);
    assert!(err.message.contains("Start date"));

    let err = compute(500.0, 6.0, "01-01-20", "7/1/20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::MalformedDate);
    assert!(err.message.contains("End date"));
}

#[test]
fn test_first_failure_wins() {
    let err = compute(-5.0, 99.0, "bad", "worse").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::NonPositiveAmount);

    let err = compute(5.0, 99.0, "bad", "worse").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::RateOutOfRange);

    let err = compute(5.0, 6.0, "bad", "01-01-20").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::MalformedDate);
}

#[test]
fn test_same_day_has_no_interest() {
    let result = compute(750.0, 6.0, "05-05-24", "05-05-24").unwrap();
    assert_eq!(result.days, 0);
    assert_eq!(result.interest, 0.0);
    assert_eq!(result.total, 750.0);
}
