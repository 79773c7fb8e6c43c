pub mod block;
pub mod duration;
pub mod pace;
pub mod plan;

pub use block::{split_weeks, BlockAllocation, PeriodizationBlock};
pub use duration::{format_duration, format_pace, parse_duration, TimeDuration};
pub use pace::{estimate_paces, PaceSet};
pub use plan::{DailySession, PlanInputs, SavedPlanRecord, SessionKind, WeekPlan};
