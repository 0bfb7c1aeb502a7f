use std::fmt;

use super::aggregate::{Aggregate, GroupMean, YearMonth};

/// Seasonal bucket for the monthly comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Rain,
    Dry,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Rain, Season::Dry];

    /// `None` for a month outside 1–12.
    pub fn of_month(month: u32) -> Option<Season> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        MONTH_SEASONS.get(idx).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Rain => "Rain",
            Season::Dry => "Dry",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical month table, January first: rain Jan–Jun, dry Jul–Dec.
const MONTH_SEASONS: [Season; 12] = [
    Season::Rain,
    Season::Rain,
    Season::Rain,
    Season::Rain,
    Season::Rain,
    Season::Rain,
    Season::Dry,
    Season::Dry,
    Season::Dry,
    Season::Dry,
    Season::Dry,
    Season::Dry,
];

/// Monthly means partitioned into rain and dry buckets, each in month order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonalSplit {
    pub rain: Vec<GroupMean<YearMonth>>,
    pub dry: Vec<GroupMean<YearMonth>>,
}

impl SeasonalSplit {
    pub fn from_monthly(monthly: &Aggregate<YearMonth>) -> Self {
        let mut split = SeasonalSplit::default();
        for group in &monthly.groups {
            match Season::of_month(group.key.month) {
                Some(Season::Rain) => split.rain.push(group.clone()),
                Some(Season::Dry) => split.dry.push(group.clone()),
                None => log::warn!("skipping out-of-range month {}", group.key),
            }
        }
        split
    }

    pub fn bucket(&self, season: Season) -> &[GroupMean<YearMonth>] {
        match season {
            Season::Rain => &self.rain,
            Season::Dry => &self.dry,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rain.is_empty() && self.dry.is_empty()
    }
}
