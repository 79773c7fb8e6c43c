use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::block::PeriodizationBlock;
use super::duration::TimeDuration;

/// What a generated day asks the runner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Rest,
    Easy,
    Quality,
    Long,
}

/// One day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySession {
    pub date: NaiveDate,
    pub label: String,
    pub detail: String,
    #[serde(default = "default_kind")]
    pub kind: SessionKind,
}

fn default_kind() -> SessionKind {
    SessionKind::Rest
}

/// One week of the plan, `week_index` counting from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub week_index: u32,
    pub block: PeriodizationBlock,
    pub sessions: Vec<DailySession>,
}

impl WeekPlan {
    pub fn count(&self, kind: SessionKind) -> usize {
        self.sessions.iter().filter(|s| s.kind == kind).count()
    }
}

/// Everything the generator and a saved snapshot need to rebuild a plan.
///
/// `hm_target` is carried along for display and snapshots only; plan math
/// ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInputs {
    pub start_date: NaiveDate,
    pub weeks: u32,
    pub run_days_per_week: u32,
    #[serde(rename = "sec5k")]
    pub sec_5k: Option<TimeDuration>,
    pub hm_target: Option<TimeDuration>,
}

/// Named snapshot as written to the key-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlanRecord {
    #[serde(flatten)]
    pub inputs: PlanInputs,
    pub plan: Vec<WeekPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = SavedPlanRecord {
            inputs: PlanInputs {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                weeks: 12,
                run_days_per_week: 5,
                sec_5k: Some(1500),
                hm_target: Some(5400),
            },
            plan: vec![WeekPlan {
                week_index: 1,
                block: PeriodizationBlock::Base,
                sessions: vec![DailySession {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    label: "Easy 6km".to_string(),
                    detail: "Relaxed ~ 6:00/km".to_string(),
                    kind: SessionKind::Easy,
                }],
            }],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["startDate"], "2024-01-01");
        assert_eq!(value["weeks"], 12);
        assert_eq!(value["runDaysPerWeek"], 5);
        assert_eq!(value["sec5k"], 1500);
        assert_eq!(value["hmTarget"], 5400);
        assert_eq!(value["plan"][0]["weekIndex"], 1);
        assert_eq!(value["plan"][0]["block"], "base");
        assert_eq!(value["plan"][0]["sessions"][0]["date"], "2024-01-01");
        assert_eq!(value["plan"][0]["sessions"][0]["kind"], "easy");

        let back: SavedPlanRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_session_without_kind_still_loads() {
        let json = r#"{"date":"2024-01-06","label":"休息 / 交叉訓練","detail":"可做核心/伸展"}"#;
        let session: DailySession = serde_json::from_str(json).unwrap();
        assert_eq!(session.kind, SessionKind::Rest);
    }
}
