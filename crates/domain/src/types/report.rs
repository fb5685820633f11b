//! Report date ranges and filters

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::{HarvestError, Result};

/// Date range and filters for the time/expense report endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub billable: Option<bool>,
    pub only_billed: bool,
    pub only_unbilled: bool,
    pub is_closed: Option<bool>,
    pub updated_since: Option<DateTime<Utc>>,
}

impl ReportRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            billable: None,
            only_billed: false,
            only_unbilled: false,
            is_closed: None,
            updated_since: None,
        }
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    pub fn updated_since(mut self, since: DateTime<Utc>) -> Self {
        self.updated_since = Some(since);
        self
    }

    /// # Errors
    /// Returns `HarvestError::Validation` if `from` is after `to` or both
    /// billed filters are set.
    pub fn validate(&self) -> Result<()> {
        if self.from > self.to {
            return Err(HarvestError::Validation(format!(
                "report range starts after it ends ({} > {})",
                self.from, self.to
            )));
        }
        if self.only_billed && self.only_unbilled {
            return Err(HarvestError::Validation(
                "only_billed and only_unbilled are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }

    /// Query parameters in API order. Dates render as `YYYYMMDD`.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("from", self.from.format("%Y%m%d").to_string()),
            ("to", self.to.format("%Y%m%d").to_string()),
        ];

        if let Some(billable) = self.billable {
            params.push(("billable", yes_no(billable)));
        }
        if self.only_billed {
            params.push(("only_billed", yes_no(true)));
        }
        if self.only_unbilled {
            params.push(("only_unbilled", yes_no(true)));
        }
        if let Some(closed) = self.is_closed {
            params.push(("is_closed", yes_no(closed)));
        }
        if let Some(since) = self.updated_since {
            params.push(("updated_since", since.format("%Y-%m-%d %H:%M").to_string()));
        }

        params
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_compact_dates() {
        let range = ReportRange::new(date(2024, 1, 5), date(2024, 2, 29));
        assert_eq!(
            range.to_query(),
            vec![("from", "20240105".to_string()), ("to", "20240229".to_string())]
        );
    }

    #[test]
    fn renders_filters() {
        let since = Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap();
        let range =
            ReportRange::new(date(2024, 1, 1), date(2024, 1, 31)).billable(false).updated_since(since);

        let query = range.to_query();
        assert!(query.contains(&("billable", "no".to_string())));
        assert!(query.contains(&("updated_since", "2024-03-01 18:30".to_string())));
    }

    #[test]
    fn rejects_inverted_range() {
        let range = ReportRange::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(range.validate(), Err(HarvestError::Validation(_))));
    }

    #[test]
    fn rejects_conflicting_billed_filters() {
        let mut range = ReportRange::new(date(2024, 1, 1), date(2024, 1, 2));
        range.only_billed = true;
        range.only_unbilled = true;
        assert!(range.validate().is_err());
    }
}
