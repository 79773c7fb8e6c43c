use serde::{Deserialize, Serialize};

/// Training phase a week belongs to, always in Base -> Build -> Peak -> Taper order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodizationBlock {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "build")]
    Build,
    #[serde(rename = "peak")]
    Peak,
    #[serde(rename = "taper")]
    Taper,
}

impl PeriodizationBlock {
    pub const ALL: [PeriodizationBlock; 4] = [
        PeriodizationBlock::Base,
        PeriodizationBlock::Build,
        PeriodizationBlock::Peak,
        PeriodizationBlock::Taper,
    ];

    /// Lowercase key used in snapshots and CSV rows
    pub fn key(&self) -> &'static str {
        match self {
            PeriodizationBlock::Base => "base",
            PeriodizationBlock::Build => "build",
            PeriodizationBlock::Peak => "peak",
            PeriodizationBlock::Taper => "taper",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PeriodizationBlock::Base => "Base",
            PeriodizationBlock::Build => "Build",
            PeriodizationBlock::Peak => "Peak",
            PeriodizationBlock::Taper => "Taper",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PeriodizationBlock::Base => "Aerobic base, build the habit",
            PeriodizationBlock::Build => "Lactate threshold and interval strength",
            PeriodizationBlock::Peak => "Race-specific integration",
            PeriodizationBlock::Taper => "Reduced volume, keep sharpness",
        }
    }
}

impl std::fmt::Display for PeriodizationBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Number of weeks assigned to each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAllocation {
    pub base: u32,
    pub build: u32,
    pub peak: u32,
    pub taper: u32,
}

impl BlockAllocation {
    pub fn total(&self) -> u32 {
        self.base + self.build + self.peak + self.taper
    }

    pub fn weeks_in(&self, block: PeriodizationBlock) -> u32 {
        match block {
            PeriodizationBlock::Base => self.base,
            PeriodizationBlock::Build => self.build,
            PeriodizationBlock::Peak => self.peak,
            PeriodizationBlock::Taper => self.taper,
        }
    }

    /// Block for each week in plan order, one entry per week.
    pub fn week_blocks(&self) -> Vec<PeriodizationBlock> {
        PeriodizationBlock::ALL
            .iter()
            .flat_map(|block| std::iter::repeat(*block).take(self.weeks_in(*block) as usize))
            .collect()
    }
}

/// Split `total_weeks` into Base/Build/Peak/Taper.
///
/// Each block nominally gets at least two weeks. When those floors
/// over-allocate (any total where base+build+peak leaves under two weeks of
/// taper) the excess is taken back from taper, then peak, build and base, so
/// the counts always sum to `total_weeks`. Totals below 8 therefore end up
/// with empty late blocks; callers should clamp the input instead of relying
/// on this.
pub fn split_weeks(total_weeks: u32) -> BlockAllocation {
    let t = total_weeks as f64;
    let base = 2u32.max((t * 0.35).round() as u32);
    let build = 2u32.max((t * 0.30).round() as u32);
    let peak = 2u32.max((t * 0.20).round() as u32);
    let taper = 2u32.max(total_weeks.saturating_sub(base + build + peak));

    let mut allocation = BlockAllocation {
        base,
        build,
        peak,
        taper,
    };

    let sum = allocation.total();
    if sum < total_weeks {
        allocation.peak += total_weeks - sum;
    } else if sum > total_weeks {
        let mut excess = sum - total_weeks;
        for count in [
            &mut allocation.taper,
            &mut allocation.peak,
            &mut allocation.build,
            &mut allocation.base,
        ] {
            let taken = excess.min(*count);
            *count -= taken;
            excess -= taken;
        }
    }

    allocation
}
