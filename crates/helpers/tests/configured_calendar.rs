//! Configuration file -> calendar -> localized answers.

use std::io::Write;
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use funchelper::adapters::FixedClock;
use funchelper::datetime::{format_timestamp_millis, DAY_NAME_PATTERN, MONTH_NAME_PATTERN};
use funchelper::{Calendar, HelperConfig};

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn calendar_answers_in_configured_zone_and_locale() {
    let file = config_file("FUNCHELPER_LOCALE=de_DE\nFUNCHELPER_UTC_OFFSET=+01:00\n");
    let config = HelperConfig::from_dotenv_file(file.path()).unwrap();

    // 23:30 UTC on Sunday 31 March is already Monday 1 April in +01:00
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 23, 30, 0).unwrap();
    let calendar = Calendar::new(Arc::new(FixedClock(now)), config.date);

    assert_eq!(calendar.current_day_of_month(), 1);
    assert_eq!(calendar.current_month_of_year(), 4);
    assert_eq!(calendar.current_day_of_week(), 2);
    assert_eq!(
        calendar.current_day_of_week_name(DAY_NAME_PATTERN).as_deref(),
        Some("Montag")
    );
    assert_eq!(
        calendar.current_month_name(MONTH_NAME_PATTERN).as_deref(),
        Some("April")
    );
    assert_eq!(
        calendar.previous_month_name(MONTH_NAME_PATTERN).as_deref(),
        Some("März")
    );

    assert!(calendar.is_today(Some(&(now + Duration::hours(12)))));
    assert!(calendar.is_yesterday(Some(&(now - Duration::hours(1)))));
}

#[test]
fn default_config_formats_epoch() {
    let config = HelperConfig::from_lookup(|_| None).unwrap();
    assert_eq!(
        format_timestamp_millis(Some(86_400_000), "%A %-d %B %Y", &config.date).as_deref(),
        Some("Friday 2 January 1970")
    );
}
