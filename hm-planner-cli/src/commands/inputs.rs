use chrono::NaiveDate;
use clap::Args;

use crate::config::PlanDefaults;
use crate::models::{parse_duration, PlanInputs, TimeDuration};

pub const WEEKS_RANGE: (u32, u32) = (8, 20);
pub const RUN_DAYS_RANGE: (u32, u32) = (3, 6);

/// Plan parameters shared by every command that builds a plan
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Current 5K time (mm:ss)
    #[arg(long = "five-k", value_name = "TIME")]
    pub five_k: Option<String>,

    /// Target half-marathon time (hh:mm:ss), recorded but not used for paces
    #[arg(long, value_name = "TIME")]
    pub target: Option<String>,

    /// Total weeks, clamped to 8-20
    #[arg(short, long)]
    pub weeks: Option<u32>,

    /// Run days per week, clamped to 3-6
    #[arg(short, long = "run-days")]
    pub run_days: Option<u32>,

    /// First day of the plan (YYYY-MM-DD), defaults to today
    #[arg(short, long, value_name = "DATE")]
    pub start: Option<NaiveDate>,
}

/// Apply a new duration entry, keeping `previous` when the text does not parse.
pub fn update_duration(
    previous: Option<TimeDuration>,
    text: Option<&str>,
    field: &str,
) -> Option<TimeDuration> {
    let Some(text) = text else {
        return previous;
    };

    match parse_duration(text) {
        Some(seconds) => Some(seconds),
        None => {
            tracing::warn!("Ignoring invalid {} '{}', keeping previous value", field, text);
            previous
        }
    }
}

fn clamp_logged(value: u32, (min, max): (u32, u32), field: &str) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::warn!("{} {} out of range, using {}", field, value, clamped);
    }
    clamped
}

impl PlanArgs {
    /// Resolve flags on top of configured defaults.
    pub fn resolve(&self, defaults: &PlanDefaults, today: NaiveDate) -> PlanInputs {
        let base = PlanInputs {
            start_date: today,
            weeks: defaults.weeks,
            run_days_per_week: defaults.run_days_per_week,
            sec_5k: parse_duration(&defaults.five_k),
            hm_target: parse_duration(&defaults.half_marathon_target),
        };
        self.apply(base)
    }

    /// Overlay flags on an existing set of inputs, e.g. a loaded snapshot.
    pub fn apply(&self, previous: PlanInputs) -> PlanInputs {
        let weeks = self.weeks.unwrap_or(previous.weeks);
        let run_days = self.run_days.unwrap_or(previous.run_days_per_week);

        PlanInputs {
            start_date: self.start.unwrap_or(previous.start_date),
            weeks: clamp_logged(weeks, WEEKS_RANGE, "Weeks"),
            run_days_per_week: clamp_logged(run_days, RUN_DAYS_RANGE, "Run days"),
            sec_5k: update_duration(previous.sec_5k, self.five_k.as_deref(), "5K time"),
            hm_target: update_duration(previous.hm_target, self.target.as_deref(), "target time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let inputs = PlanArgs::default().resolve(&PlanDefaults::default(), today());
        assert_eq!(inputs.start_date, today());
        assert_eq!(inputs.weeks, 12);
        assert_eq!(inputs.run_days_per_week, 5);
        assert_eq!(inputs.sec_5k, Some(1500));
        assert_eq!(inputs.hm_target, Some(5400));
    }

    #[test]
    fn test_invalid_time_keeps_previous() {
        let args = PlanArgs {
            five_k: Some("2x:00".to_string()),
            target: Some("1:45:00".to_string()),
            ..Default::default()
        };
        let inputs = args.resolve(&PlanDefaults::default(), today());
        assert_eq!(inputs.sec_5k, Some(1500));
        assert_eq!(inputs.hm_target, Some(6300));
    }

    #[test]
    fn test_ranges_are_clamped() {
        let args = PlanArgs {
            weeks: Some(4),
            run_days: Some(9),
            ..Default::default()
        };
        let inputs = args.resolve(&PlanDefaults::default(), today());
        assert_eq!(inputs.weeks, 8);
        assert_eq!(inputs.run_days_per_week, 6);
    }

    #[test]
    fn test_blank_default_means_no_5k() {
        let defaults = PlanDefaults {
            five_k: String::new(),
            ..Default::default()
        };
        let inputs = PlanArgs::default().resolve(&defaults, today());
        assert_eq!(inputs.sec_5k, None);
    }
}
