use chrono::NaiveDate;
use hm_planner_cli::models::{estimate_paces, format_duration, parse_duration, split_weeks, PlanInputs};
use hm_planner_cli::planner::{Locale, PlanGenerator};
use proptest::prelude::*;

proptest! {
    #[test]
    fn split_weeks_sums_to_total(total in 1u32..200) {
        let allocation = split_weeks(total);
        prop_assert_eq!(allocation.total(), total);
        prop_assert_eq!(allocation.week_blocks().len() as u32, total);
    }

    #[test]
    fn split_weeks_keeps_floor_in_normal_range(total in 11u32..=20) {
        let allocation = split_weeks(total);
        prop_assert!(allocation.base >= 2);
        prop_assert!(allocation.build >= 2);
        prop_assert!(allocation.peak >= 2);
    }

    #[test]
    fn pace_zones_are_ordered(seconds in 1u64..20_000) {
        let p = estimate_paces(Some(seconds)).unwrap();
        prop_assert!(p.repeat < p.interval);
        prop_assert!(p.interval < p.threshold);
        prop_assert!(p.threshold < p.marathon);
        prop_assert!(p.marathon < p.long);
        prop_assert!(p.long < p.easy);
    }

    #[test]
    fn duration_roundtrip(seconds in 0u64..400_000) {
        prop_assert_eq!(parse_duration(&format_duration(seconds)), Some(seconds));
    }

    #[test]
    fn every_week_has_seven_sessions(weeks in 1u32..=24, run_days in 0u32..=7, offset in 0i64..3650) {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(offset);
        let plan = PlanGenerator::new(Locale::En).generate(&PlanInputs {
            start_date: start,
            weeks,
            run_days_per_week: run_days,
            sec_5k: Some(1500),
            hm_target: None,
        }).unwrap();

        prop_assert_eq!(plan.weeks.len() as u32, weeks);
        for (i, week) in plan.weeks.iter().enumerate() {
            prop_assert_eq!(week.week_index as usize, i + 1);
            prop_assert_eq!(week.sessions.len(), 7);
            prop_assert_eq!(week.sessions[0].date, start + chrono::Duration::days(7 * i as i64));
        }
    }
}
