use chrono::{Days, NaiveDate};

use super::locale::{Locale, Zone};
use crate::models::{format_pace, DailySession, PaceSet, PeriodizationBlock, SessionKind};

/// Role of a weekday in the weekly template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Easy,
    Quality1,
    Quality2,
    Off,
    Long,
}

/// Monday through Sunday.
pub const WEEK_TEMPLATE: [SlotKind; 7] = [
    SlotKind::Easy,
    SlotKind::Quality1,
    SlotKind::Easy,
    SlotKind::Quality2,
    SlotKind::Easy,
    SlotKind::Off,
    SlotKind::Long,
];

/// Number of easy runs that fit once quality days and the long run are counted.
pub fn easy_days(run_days_per_week: u32) -> u32 {
    let intensity_days = ((run_days_per_week as f64 / 3.0).round() as u32).clamp(1, 2);
    // one day is always the long run
    run_days_per_week.saturating_sub(intensity_days + 1)
}

/// Apply the run-day budget to the template, demoting surplus easy days to rest.
pub fn week_slots(run_days_per_week: u32) -> [SlotKind; 7] {
    let budget = easy_days(run_days_per_week);
    let mut kept = 0;

    WEEK_TEMPLATE.map(|slot| match slot {
        SlotKind::Easy if kept < budget => {
            kept += 1;
            SlotKind::Easy
        }
        SlotKind::Easy => SlotKind::Off,
        other => other,
    })
}

pub fn long_run_km(week: u32, block: PeriodizationBlock) -> u32 {
    let km = 10 + 12u32.min((week as f64 * 0.8).floor() as u32);
    if block == PeriodizationBlock::Taper {
        12u32.max((km as f64 * 0.7).floor() as u32)
    } else {
        km
    }
}

pub fn easy_run_km(week: u32) -> u32 {
    6 + 6u32.min(week / 2)
}

/// Builds the concrete session for one template slot.
pub struct SessionBuilder<'a> {
    pub locale: Locale,
    pub paces: Option<&'a PaceSet>,
}

impl SessionBuilder<'_> {
    fn pace_or(&self, pick: fn(&PaceSet) -> f64, zone: Zone) -> String {
        match self.paces {
            Some(paces) => format_pace(pick(paces)),
            None => self.locale.generic_zone(zone).to_string(),
        }
    }

    pub fn build(
        &self,
        slot: SlotKind,
        week: u32,
        block: PeriodizationBlock,
        date: NaiveDate,
    ) -> DailySession {
        let locale = self.locale;

        let (kind, label, detail) = match slot {
            SlotKind::Off => (
                SessionKind::Rest,
                locale.rest_label().to_string(),
                locale.rest_detail().to_string(),
            ),
            SlotKind::Long => {
                let km = long_run_km(week, block);
                let pace = match self.paces {
                    Some(paces) => format_pace(paces.long),
                    None => locale.conversational_pace().to_string(),
                };
                (SessionKind::Long, locale.long_label(km), locale.long_detail(&pace))
            }
            SlotKind::Quality1 | SlotKind::Quality2 => {
                let pace = match block {
                    PeriodizationBlock::Base | PeriodizationBlock::Taper => {
                        self.pace_or(|p| p.threshold, Zone::Threshold)
                    }
                    PeriodizationBlock::Build => self.pace_or(|p| p.interval, Zone::Interval),
                    PeriodizationBlock::Peak => self.pace_or(|p| p.marathon, Zone::Marathon),
                };
                (
                    SessionKind::Quality,
                    locale.quality_label().to_string(),
                    locale.quality_detail(block, &pace),
                )
            }
            SlotKind::Easy => {
                let pace = self.pace_or(|p| p.easy, Zone::Easy);
                (
                    SessionKind::Easy,
                    locale.easy_label(easy_run_km(week)),
                    locale.easy_detail(&pace),
                )
            }
        };

        DailySession {
            date,
            label,
            detail,
            kind,
        }
    }
}

/// Date of template day `day_offset` (0 = first day) in week `week`.
///
/// `None` when the date falls past the end of the calendar.
pub fn session_date(start_date: NaiveDate, week: u32, day_offset: u32) -> Option<NaiveDate> {
    start_date.checked_add_days(Days::new(u64::from(week) * 7 + u64::from(day_offset)))
}
