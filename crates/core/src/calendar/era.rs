//! Japanese era definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Builds a statically known-valid date.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid era boundary date"),
    }
}

/// Japanese imperial eras accepted on statutory forms.
///
/// Ordered oldest to newest. A boundary day belongs to the newer era:
/// 1989-01-08 is Heisei 1, not Showa 64.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    /// 1912-07-30 to 1926-12-24.
    Taisho,
    /// 1926-12-25 to 1989-01-07.
    Showa,
    /// 1989-01-08 to 2019-04-30.
    Heisei,
    /// 2019-05-01 onward.
    Reiwa,
}

impl Era {
    /// All eras, oldest first.
    pub const ALL: [Self; 4] = [Self::Taisho, Self::Showa, Self::Heisei, Self::Reiwa];

    /// First day of the era.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        match self {
            Self::Taisho => ymd(1912, 7, 30),
            Self::Showa => ymd(1926, 12, 25),
            Self::Heisei => ymd(1989, 1, 8),
            Self::Reiwa => ymd(2019, 5, 1),
        }
    }

    /// Last day of the era, or `None` for the current era.
    #[must_use]
    pub const fn end(self) -> Option<NaiveDate> {
        match self {
            Self::Taisho => Some(ymd(1926, 12, 24)),
            Self::Showa => Some(ymd(1989, 1, 7)),
            Self::Heisei => Some(ymd(2019, 4, 30)),
            Self::Reiwa => None,
        }
    }

    /// Gregorian year of the era's first year (era year 1).
    ///
    /// Era year = Gregorian year - epoch year + 1, so Reiwa 1 is 2019.
    #[must_use]
    pub const fn epoch_year(self) -> i32 {
        match self {
            Self::Taisho => 1912,
            Self::Showa => 1926,
            Self::Heisei => 1989,
            Self::Reiwa => 2019,
        }
    }

    /// Returns true if the given date falls within this era's span.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start() && self.end().is_none_or(|end| date <= end)
    }

    /// Era containing the given date, or `None` before 1912-07-30.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Option<Self> {
        Self::ALL.into_iter().rev().find(|era| era.contains(date))
    }

    /// Returns the romanized name of the era.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Taisho => "taisho",
            Self::Showa => "showa",
            Self::Heisei => "heisei",
            Self::Reiwa => "reiwa",
        }
    }

    /// Returns the kanji name printed on paper forms.
    #[must_use]
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Taisho => "大正",
            Self::Showa => "昭和",
            Self::Heisei => "平成",
            Self::Reiwa => "令和",
        }
    }

    /// Parses an era from its romanized name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "taisho" => Some(Self::Taisho),
            "showa" => Some(Self::Showa),
            "heisei" => Some(Self::Heisei),
            "reiwa" => Some(Self::Reiwa),
            _ => None,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
