use serde::{Deserialize, Serialize};

use super::duration::TimeDuration;

/// Training pace zones in seconds per km, all derived from one 5K result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceSet {
    pub easy: f64,
    pub marathon: f64,
    pub threshold: f64,
    pub interval: f64,
    pub repeat: f64,
    pub long: f64,
}

impl PaceSet {
    /// Zones as (name, seconds per km) in display order.
    pub fn zones(&self) -> [(&'static str, f64); 6] {
        [
            ("Easy", self.easy),
            ("Long", self.long),
            ("Threshold (T)", self.threshold),
            ("Interval (I)", self.interval),
            ("Marathon (M)", self.marathon),
            ("Repeat (R)", self.repeat),
        ]
    }
}

/// Estimate pace zones from a 5K time using fixed ratios to 5K pace.
///
/// Returns `None` when no time is known (missing or zero), in which case
/// sessions fall back to generic zone names.
pub fn estimate_paces(sec_5k: Option<TimeDuration>) -> Option<PaceSet> {
    let sec_5k = sec_5k.filter(|s| *s > 0)?;
    let unit = sec_5k as f64 / 5.0;

    Some(PaceSet {
        easy: unit * 1.20,
        marathon: unit * 1.12,
        threshold: unit * 1.05,
        interval: unit * 0.95,
        repeat: unit * 0.90,
        long: unit * 1.18,
    })
}
