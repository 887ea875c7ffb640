//! "Current time" helpers bound to an injected clock.
//!
//! [`Calendar`] pairs a [`ClockPort`] with a [`DateConfig`] so that questions
//! like "is this date tomorrow?" or "what is the previous month called?" are
//! answered in an explicit zone and locale, and can be tested with a pinned
//! clock.

use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};
use funchelper_ports::ClockPort;

use crate::config::DateConfig;
use crate::datetime::{self, DateTimeExt};
use crate::safe::{safe_operation_with, FaultReporter, LogFault};

pub struct Calendar {
    clock: Arc<dyn ClockPort>,
    config: DateConfig,
}

impl Calendar {
    pub fn new(clock: Arc<dyn ClockPort>, config: DateConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &DateConfig {
        &self.config
    }

    /// Current instant in the configured zone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now().with_timezone(&self.config.offset)
    }

    pub fn current_time_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn current_time_secs(&self) -> i64 {
        self.clock.now_unix_secs()
    }

    pub fn current_formatted_date_time(&self, pattern: &str) -> Option<String> {
        self.current_formatted_date_time_with(pattern, LogFault)
    }

    pub fn current_formatted_date_time_with<R: FaultReporter>(
        &self,
        pattern: &str,
        reporter: R,
    ) -> Option<String> {
        safe_operation_with("current_formatted_date_time", reporter, || {
            datetime::render(&self.now(), pattern, self.config.locale)
        })
    }

    /// Whether `date` falls on today's calendar day. `false` if absent.
    pub fn is_today<Tz: TimeZone>(&self, date: Option<&DateTime<Tz>>) -> bool {
        datetime::is_same_day(Some(&self.now()), date)
    }

    /// Whether `date` falls on tomorrow's calendar day. `false` if absent.
    pub fn is_tomorrow<Tz: TimeZone>(&self, date: Option<&DateTime<Tz>>) -> bool {
        datetime::is_next_day(Some(&self.now()), date)
    }

    /// Whether `date` falls on yesterday's calendar day. `false` if absent.
    pub fn is_yesterday<Tz: TimeZone>(&self, date: Option<&DateTime<Tz>>) -> bool {
        datetime::is_previous_day(Some(&self.now()), date)
    }

    /// 1 = Sunday ... 7 = Saturday.
    pub fn current_day_of_week(&self) -> u32 {
        self.now().day_of_week_number()
    }

    pub fn current_day_of_week_name(&self, pattern: &str) -> Option<String> {
        self.current_day_of_week_name_with(pattern, LogFault)
    }

    pub fn current_day_of_week_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        reporter: R,
    ) -> Option<String> {
        self.now()
            .day_of_week_name_with(pattern, self.config.locale, reporter)
    }

    pub fn current_day_of_month(&self) -> u32 {
        self.now().day_of_month()
    }

    pub fn current_month_of_year(&self) -> u32 {
        self.now().month_of_year()
    }

    pub fn current_month_name(&self, pattern: &str) -> Option<String> {
        self.current_month_name_with(pattern, LogFault)
    }

    pub fn current_month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        reporter: R,
    ) -> Option<String> {
        self.now()
            .month_name_with(pattern, self.config.locale, reporter)
    }

    pub fn current_year(&self) -> i32 {
        self.now().year()
    }

    /// Day of month of yesterday.
    pub fn previous_day(&self) -> Option<u32> {
        self.now().previous_day_of_month()
    }

    /// Day of month of tomorrow.
    pub fn next_day(&self) -> Option<u32> {
        self.now().next_day_of_month()
    }

    pub fn previous_month(&self) -> u32 {
        self.now().previous_month()
    }

    pub fn previous_month_name(&self, pattern: &str) -> Option<String> {
        self.previous_month_name_with(pattern, LogFault)
    }

    pub fn previous_month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        reporter: R,
    ) -> Option<String> {
        self.now()
            .previous_month_name_with(pattern, self.config.locale, reporter)
    }

    pub fn next_month(&self) -> u32 {
        self.now().next_month()
    }

    pub fn next_month_name(&self, pattern: &str) -> Option<String> {
        self.next_month_name_with(pattern, LogFault)
    }

    pub fn next_month_name_with<R: FaultReporter>(
        &self,
        pattern: &str,
        reporter: R,
    ) -> Option<String> {
        self.now()
            .next_month_name_with(pattern, self.config.locale, reporter)
    }

    pub fn previous_year(&self) -> i32 {
        self.now().previous_year()
    }

    pub fn next_year(&self) -> i32 {
        self.now().next_year()
    }
}
