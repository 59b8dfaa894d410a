//! Exhaustive sweeps over a few years of reference dates.

use cadence_calendar::{CalendarDate, days_in_month};
use cadence_recurrence::{RecurrenceRule, next_occurrence};

fn base() -> CalendarDate {
    CalendarDate::new(2023, 1, 1).unwrap()
}

fn day(n: u64) -> CalendarDate {
    base().add_days(n).unwrap()
}

fn rule(text: &str) -> RecurrenceRule {
    RecurrenceRule::parse(text).unwrap()
}

#[test]
fn daily_result_is_a_step_multiple_after_now() {
    let start = day(200);
    for step in [1u64, 2, 3, 5, 7, 30, 365, 400] {
        let r = rule(&format!("d {step}"));
        for k in 0..1200 {
            let now = day(k);
            let next = next_occurrence(now, start, &r).unwrap();
            assert!(next > now && next > start, "step {step} now {now}: {next}");
            let offset = next.days_since(start) as u64;
            assert_eq!(offset % step, 0, "step {step} now {now}: {next}");
            if now > start {
                assert!(offset - step <= now.days_since(start) as u64);
            } else {
                assert_eq!(offset, step);
            }
        }
    }
}

#[test]
fn weekly_result_is_the_first_matching_weekday() {
    let start = base();
    for mask in 1u8..128 {
        let days: Vec<u8> = (1..=7).filter(|d| mask & (1 << (d - 1)) != 0).collect();
        let text = format!(
            "w {}",
            days.iter().map(u8::to_string).collect::<Vec<_>>().join(",")
        );
        let r = rule(&text);
        for k in 0..21 {
            let now = day(k);
            let next = next_occurrence(now, start, &r).unwrap();
            assert!(days.contains(&next.weekday()), "{text} now {now}: {next}");
            let gap = next.days_since(now);
            assert!((1..=7).contains(&gap), "{text} now {now}: {next}");
            for earlier in 1..gap {
                let skipped = now.add_days(earlier as u64).unwrap();
                assert!(!days.contains(&skipped.weekday()), "{text} skipped {skipped}");
            }
        }
    }
}

fn matches_monthly(date: CalendarDate, days: &[i64], months: &[u8]) -> bool {
    if !months.contains(&date.month()) {
        return false;
    }
    let len = i64::from(days_in_month(date.year(), date.month()).unwrap());
    let d = i64::from(date.day());
    days.iter().any(|&code| match code {
        -1 => d == len,
        -2 => d == len - 1,
        fixed => d == fixed,
    })
}

#[test]
fn monthly_result_matches_brute_force() {
    let all: Vec<u8> = (1..=12).collect();
    let cases: &[(&str, &[i64], &[u8])] = &[
        ("m 29,-1 2", &[29, -1], &[2]),
        ("m 29 2", &[29], &[2]),
        ("m -1,-2 2,3", &[-1, -2], &[2, 3]),
        ("m 30 2,4", &[30], &[2, 4]),
        ("m 5,31 1,6,12", &[5, 31], &[1, 6, 12]),
        ("m -2", &[-2], &all),
        ("m 1,15", &[1, 15], &all),
        ("m 31", &[31], &all),
    ];
    let start = base();
    for &(text, days, months) in cases {
        let r = rule(text);
        for k in 0..(3 * 366) {
            let now = day(k);
            let next = next_occurrence(now, start, &r).unwrap();
            let mut expected = now.add_days(1).unwrap();
            while !matches_monthly(expected, days, months) {
                expected = expected.add_days(1).unwrap();
            }
            assert_eq!(next, expected, "{text} now {now}");
        }
    }
}

#[test]
fn yearly_result_is_the_next_anniversary() {
    let starts = [base(), day(45), day(180), day(364)];
    for start in starts {
        for k in 0..(3 * 366) {
            let now = day(k);
            let next = next_occurrence(now, start, &RecurrenceRule::Yearly).unwrap();
            assert_eq!((next.month(), next.day()), (start.month(), start.day()));
            assert!(next > start && next >= now, "start {start} now {now}: {next}");
            if now > start {
                assert!(next.days_since(now) < 366, "start {start} now {now}: {next}");
            } else {
                assert_eq!(next.year(), start.year() + 1);
            }
        }
    }
}
