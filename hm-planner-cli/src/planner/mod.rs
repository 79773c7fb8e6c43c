// Plan generation: periodization plus per-day session assignment.
// Pure functions only; persistence and export consume the output.

pub mod locale;
pub mod session;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    estimate_paces, split_weeks, BlockAllocation, DailySession, PaceSet, PlanInputs, WeekPlan,
};

pub use locale::Locale;
pub use session::{easy_days, week_slots, SessionBuilder, SlotKind, WEEK_TEMPLATE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Week {week} of a plan starting {start} runs past the last supported date")]
    DateOutOfRange { start: NaiveDate, week: u32 },
}

pub type PlanResult<T> = std::result::Result<T, PlanError>;

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan {
    pub paces: Option<PaceSet>,
    pub allocation: BlockAllocation,
    pub weeks: Vec<WeekPlan>,
}

/// Stateless plan generator; every call builds a fresh plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator {
    locale: Locale,
}

impl PlanGenerator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Estimate paces from the inputs and build the full plan.
    ///
    /// `inputs.hm_target` does not influence the result.
    pub fn generate(&self, inputs: &PlanInputs) -> PlanResult<GeneratedPlan> {
        let paces = estimate_paces(inputs.sec_5k);
        let allocation = split_weeks(inputs.weeks);
        let weeks = self.build_weeks(
            inputs.start_date,
            &allocation,
            inputs.run_days_per_week,
            paces.as_ref(),
        )?;

        tracing::debug!(
            "Generated {} weeks (base {}, build {}, peak {}, taper {})",
            weeks.len(),
            allocation.base,
            allocation.build,
            allocation.peak,
            allocation.taper
        );

        Ok(GeneratedPlan {
            paces,
            allocation,
            weeks,
        })
    }

    /// Build weeks for an explicit allocation and pace set.
    pub fn build_weeks(
        &self,
        start_date: NaiveDate,
        allocation: &BlockAllocation,
        run_days_per_week: u32,
        paces: Option<&PaceSet>,
    ) -> PlanResult<Vec<WeekPlan>> {
        let slots = week_slots(run_days_per_week);
        let builder = SessionBuilder {
            locale: self.locale,
            paces,
        };

        allocation
            .week_blocks()
            .into_iter()
            .zip(0u32..)
            .map(|(block, week)| -> PlanResult<WeekPlan> {
                let sessions = slots
                    .iter()
                    .zip(0u32..)
                    .map(|(slot, day)| -> PlanResult<DailySession> {
                        let date = session::session_date(start_date, week, day).ok_or(
                            PlanError::DateOutOfRange {
                                start: start_date,
                                week: week + 1,
                            },
                        )?;
                        Ok(builder.build(*slot, week, block, date))
                    })
                    .collect::<PlanResult<Vec<_>>>()?;

                Ok(WeekPlan {
                    week_index: week + 1,
                    block,
                    sessions,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodizationBlock, SessionKind};

    fn inputs(weeks: u32, run_days: u32, sec_5k: Option<u64>) -> PlanInputs {
        PlanInputs {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            weeks,
            run_days_per_week: run_days,
            sec_5k,
            hm_target: Some(5400),
        }
    }

    #[test]
    fn test_week_count_and_dates() {
        let plan = PlanGenerator::default().generate(&inputs(12, 5, Some(1500))).unwrap();

        assert_eq!(plan.weeks.len(), 12);
        let second = &plan.weeks[1];
        assert_eq!(second.week_index, 2);
        assert_eq!(second.sessions.len(), 7);
        assert_eq!(
            second.sessions[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        assert_eq!(
            second.sessions[6].date,
            NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()
        );
    }

    #[test]
    fn test_first_week_session_mix() {
        let plan = PlanGenerator::default().generate(&inputs(12, 5, Some(1500))).unwrap();
        let first = &plan.weeks[0];

        assert_eq!(first.block, PeriodizationBlock::Base);
        assert_eq!(first.count(SessionKind::Easy), 2);
        assert_eq!(first.count(SessionKind::Quality), 2);
        assert_eq!(first.count(SessionKind::Long), 1);
        assert_eq!(first.count(SessionKind::Rest), 2);
    }

    #[test]
    fn test_last_week_is_taper() {
        let plan = PlanGenerator::new(Locale::En).generate(&inputs(12, 4, Some(1500))).unwrap();
        let last = plan.weeks.last().unwrap();

        assert_eq!(last.block, PeriodizationBlock::Taper);
        // week index 11: 10 + 8 = 18 -> 12
        assert_eq!(last.sessions[6].label, "Long run 12km");
        assert!(last.sessions[1].detail.starts_with("Taper: T 3×6min (5:15/km)"));
    }

    #[test]
    fn test_no_paces_without_5k() {
        let plan = PlanGenerator::new(Locale::En).generate(&inputs(12, 5, None)).unwrap();
        assert!(plan.paces.is_none());
        assert_eq!(plan.weeks[0].sessions[0].detail, "Relaxed ~ E pace");
    }

    #[test]
    fn test_start_near_calendar_end_is_an_error() {
        let mut late = inputs(20, 5, Some(1500));
        late.start_date = NaiveDate::MAX - chrono::Days::new(30);

        let err = PlanGenerator::default().generate(&late).unwrap_err();
        assert_eq!(
            err,
            PlanError::DateOutOfRange {
                start: late.start_date,
                week: 5
            }
        );
    }
}
