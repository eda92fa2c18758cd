use crate::models::Engagement;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// An engagement date string that does not parse. The aggregator surfaces
/// this to the caller instead of dropping the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDate {
    pub date: String,
}

impl std::fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid engagement date: {:?}", self.date)
    }
}

impl std::error::Error for InvalidDate {}

/// Accepts a plain date or an ISO datetime, as logged by current and older
/// versions of the hub.
pub fn parse_engagement_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .map_err(|_| InvalidDate { date: raw.to_string() })
}

/// ISO week bucket key: weeks start Monday, week 1 holds the year's first
/// Thursday. Late-December dates can land in week 1 of the next year and
/// early-January dates in week 52/53 of the previous one.
pub fn week_bucket(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Weekly engagement counts for one profile. Pure over the snapshot passed
/// in; BTreeMap hands presentation its ascending-key order.
pub fn weekly_engagements(
    engagements: &[Engagement],
    profile_id: &str,
) -> Result<BTreeMap<String, u64>, InvalidDate> {
    let mut weeks = BTreeMap::new();
    for engagement in engagements.iter().filter(|e| e.profile_id == profile_id) {
        let date = parse_engagement_date(&engagement.date)?;
        *weeks.entry(week_bucket(date)).or_insert(0) += 1;
    }
    Ok(weeks)
}

/// Count of engagements (any profile) falling in `today`'s ISO week.
pub fn count_in_week(engagements: &[Engagement], today: NaiveDate) -> Result<u64, InvalidDate> {
    let current = week_bucket(today);
    let mut count = 0;
    for engagement in engagements {
        let date = parse_engagement_date(&engagement.date)?;
        if week_bucket(date) == current {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engagement(profile_id: &str, date: &str) -> Engagement {
        Engagement {
            id: format!("e-{profile_id}-{date}"),
            profile_id: profile_id.to_string(),
            date: date.to_string(),
            engagement_type: "like".to_string(),
        }
    }

    #[test]
    fn week_bucket_is_stable() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(week_bucket(date), week_bucket(date));
        assert_eq!(week_bucket(date), "2024-W10");
    }

    #[test]
    fn week_bucket_year_boundaries() {
        let jan_2021 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(week_bucket(jan_2021), "2020-W53");

        // 2023-01-01 was a Sunday, the tail of 2022's last ISO week; the
        // Monday after it opens 2023-W01.
        let jan_2023 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(week_bucket(jan_2023), "2022-W52");

        let jan_2_2023 = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        assert_eq!(week_bucket(jan_2_2023), "2023-W01");

        let dec_2024 = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(week_bucket(dec_2024), "2025-W01");
    }

    #[test]
    fn weekly_engagements_filters_and_groups() {
        let engagements = vec![
            engagement("A", "2024-03-04"),
            engagement("A", "2024-03-05"),
            engagement("B", "2024-03-04"),
        ];

        let weeks = weekly_engagements(&engagements, "A").unwrap();
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks.get("2024-W10"), Some(&2));
    }

    #[test]
    fn weekly_engagements_conserves_count() {
        let engagements = vec![
            engagement("A", "2024-01-01"),
            engagement("A", "2024-03-04"),
            engagement("A", "2024-03-05"),
            engagement("A", "2024-12-30"),
            engagement("B", "2024-03-04"),
        ];

        let weeks = weekly_engagements(&engagements, "A").unwrap();
        let total: u64 = weeks.values().sum();
        let matching = engagements.iter().filter(|e| e.profile_id == "A").count() as u64;
        assert_eq!(total, matching);
    }

    #[test]
    fn weekly_engagements_surfaces_invalid_date() {
        let engagements = vec![engagement("A", "not-a-date")];
        let err = weekly_engagements(&engagements, "A").unwrap_err();
        assert_eq!(err.date, "not-a-date");
    }

    #[test]
    fn weekly_engagements_ignores_other_profiles_bad_dates_filtered_first() {
        // Filtering happens before parsing, so another profile's malformed
        // record does not break this profile's trend.
        let engagements = vec![engagement("B", "garbage"), engagement("A", "2024-03-04")];
        let weeks = weekly_engagements(&engagements, "A").unwrap();
        assert_eq!(weeks.get("2024-W10"), Some(&1));
    }

    #[test]
    fn parse_accepts_datetime_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(parse_engagement_date("2024-03-04").unwrap(), expected);
        assert_eq!(parse_engagement_date("2024-03-04T09:30").unwrap(), expected);
        assert_eq!(parse_engagement_date("2024-03-04T09:30:15").unwrap(), expected);
        assert!(parse_engagement_date("03/04/2024").is_err());
    }

    #[test]
    fn count_in_week_matches_current_week_only() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let engagements = vec![
            engagement("A", "2024-03-04"),
            engagement("B", "2024-03-05"),
            engagement("A", "2024-02-01"),
        ];
        assert_eq!(count_in_week(&engagements, today).unwrap(), 2);
    }
}
