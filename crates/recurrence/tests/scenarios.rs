use cadence_calendar::CalendarDate;
use cadence_recurrence::{RecurrenceError, next_date};

fn date(s: &str) -> CalendarDate {
    CalendarDate::parse_compact(s).unwrap()
}

#[test]
fn daily_from_today() {
    assert_eq!(next_date(date("20240101"), "20240101", "d 5").unwrap(), "20240106");
}

#[test]
fn daily_from_past_start() {
    // 352 days elapsed; the first multiple of five beyond that is 355.
    assert_eq!(next_date(date("20250101"), "20240115", "d 5").unwrap(), "20250104");
}

#[test]
fn monthly_leap_search() {
    assert_eq!(
        next_date(date("20230301"), "20230101", "m 29,-1 2").unwrap(),
        "20240229"
    );
}

#[test]
fn weekly_thursday_to_friday() {
    // 20240104 is a Thursday.
    assert_eq!(next_date(date("20240104"), "20240101", "w 1,3,5").unwrap(), "20240105");
}

#[test]
fn empty_rule_is_no_recurrence() {
    assert_eq!(
        next_date(date("20240101"), "20240101", "").unwrap_err(),
        RecurrenceError::NoRecurrence
    );
}

#[test]
fn unknown_kind_is_invalid_rule() {
    assert!(matches!(
        next_date(date("20240101"), "20240101", "x 1"),
        Err(RecurrenceError::InvalidRule { .. })
    ));
}

#[test]
fn error_kinds_by_input() {
    let now = date("20240101");
    let cases: &[(&str, &str, fn(&RecurrenceError) -> bool)] = &[
        ("2024011", "d 1", |e| matches!(e, RecurrenceError::InvalidDate { .. })),
        ("20240230", "d 1", |e| matches!(e, RecurrenceError::InvalidDate { .. })),
        ("20240101", "w", |e| matches!(e, RecurrenceError::InvalidRule { .. })),
        ("20240101", "y 1", |e| matches!(e, RecurrenceError::InvalidRule { .. })),
        ("20240101", "m 1 2 3", |e| matches!(e, RecurrenceError::InvalidRule { .. })),
        ("20240101", "w 1,x", |e| matches!(e, RecurrenceError::MalformedNumber { .. })),
        ("20240101", "d 401", |e| matches!(e, RecurrenceError::OutOfRange { .. })),
        ("20240101", "m -3", |e| matches!(e, RecurrenceError::OutOfRange { .. })),
        ("20240101", "m 1 0", |e| matches!(e, RecurrenceError::OutOfRange { .. })),
        ("20240101", "m 31 4,6,9,11", |e| matches!(e, RecurrenceError::NoOccurrence { .. })),
    ];
    for (start, rule, check) in cases {
        let err = next_date(now, start, rule).unwrap_err();
        assert!(check(&err), "start={start} rule={rule:?} gave {err:?}");
    }
}

#[test]
fn output_is_zero_padded() {
    assert_eq!(next_date(date("00010101"), "00010101", "d 1").unwrap(), "00010102");
}

#[test]
fn monthly_pair_past_year_9999_does_not_hide_a_valid_one() {
    assert_eq!(
        next_date(date("99991201"), "99991201", "m 1,25 12").unwrap(),
        "99991225"
    );
    assert_eq!(
        next_date(date("99980101"), "99980101", "m 1,29 2").unwrap(),
        "99980201"
    );
    assert!(matches!(
        next_date(date("99991231"), "99991231", "m 1 12"),
        Err(RecurrenceError::Calendar { .. })
    ));
}
