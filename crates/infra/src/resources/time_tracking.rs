use chrono::{Datelike, NaiveDate};
use harvest_domain::{HttpVerb, Record, Result};
use serde_json::Value;

use crate::api::Transport;

/// Daily timesheet and time entries (`/daily`).
///
/// Unlike the other resources, time entries are created, updated and
/// deleted through verb-named paths, and updates use POST.
#[derive(Debug, Clone, Copy)]
pub struct TimeTracking<'a> {
    transport: &'a Transport,
}

impl<'a> TimeTracking<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Entries and assignable projects for `day`, or for today when `None`.
    pub async fn daily(&self, day: Option<NaiveDate>) -> Result<Value> {
        self.transport.request(HttpVerb::Get, &daily_path(day), None).await
    }

    pub async fn get(&self, record: &Record) -> Result<Value> {
        let id = record.require_id("retrieving a single time entry")?;
        self.transport.request(HttpVerb::Get, &format!("/daily/show/{id}"), None).await
    }

    /// Start the entry's timer, or stop it if it is running.
    pub async fn toggle_timer(&self, record: &Record) -> Result<Value> {
        let id = record.require_id("toggling a timer")?;
        self.transport.request(HttpVerb::Get, &format!("/daily/timer/{id}"), None).await
    }

    pub async fn create(&self, record: &Record) -> Result<Value> {
        self.transport.request(HttpVerb::Post, "/daily/add", Some(&record.body())).await
    }

    pub async fn delete(&self, record: &Record) -> Result<Value> {
        let id = record.require_id("deleting a single time entry")?;
        self.transport.request(HttpVerb::Delete, &format!("/daily/delete/{id}"), None).await
    }

    pub async fn update(&self, record: &Record) -> Result<Value> {
        let id = record.require_id("updating a single time entry")?;
        self.transport
            .request(HttpVerb::Post, &format!("/daily/update/{id}"), Some(&record.body()))
            .await
    }
}

/// `/daily` or `/daily/{day_of_year}/{year}`.
fn daily_path(day: Option<NaiveDate>) -> String {
    match day {
        Some(day) => format!("/daily/{}/{}", day.ordinal(), day.year()),
        None => "/daily".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_path_uses_day_of_year() {
        assert_eq!(daily_path(None), "/daily");
        assert_eq!(daily_path(NaiveDate::from_ymd_opt(2024, 12, 31)), "/daily/366/2024");
        assert_eq!(daily_path(NaiveDate::from_ymd_opt(2023, 2, 1)), "/daily/32/2023");
    }
}
