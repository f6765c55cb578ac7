//! The arithmetic Hebrew calendar.
//!
//! Years start at Tishrei (month 7) while months are numbered from Nisan
//! (month 1). Year boundaries come from the molad (mean conjunction) of
//! Tishrei, tracked in parts of 1/1080 hour, moved by the postponement
//! rules.

use crate::absolute::{AbsoluteDay, Weekday};
use crate::consts::{
    ADAR, ADAR_II, CHESHVAN, ELUL, HEBREW_DATE_SEPARATOR, HEBREW_EPOCH, HEBREW_MONTH_NAMES, IYAR,
    KISLEV, MAX_HEBREW_YEAR, METONIC_LEAP_YEARS, METONIC_MONTHS, METONIC_YEARS, MIN_DAY, MONDAY_PARTS,
    MIN_HEBREW_YEAR, NISAN, NOON_PARTS, PARTS_PER_HOUR, TAMMUZ, TEVET, TISHREI, TUESDAY_PARTS,
};
use crate::gregorian::GregorianDate;
use crate::prelude::*;
use crate::{DateError, ParseError};
use std::cmp::Ordering;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Length class of a Hebrew year, fixing the lengths of Cheshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum YearKind {
    /// 353 or 383 days: Cheshvan and Kislev both have 29 days
    Deficient,
    /// 354 or 384 days: Cheshvan 29, Kislev 30
    Regular,
    /// 355 or 385 days: Cheshvan and Kislev both have 30 days
    Complete,
}

impl YearKind {
    pub const fn of(year: i32) -> Self {
        match days_in_year(year) % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

/// A validated date in the Hebrew calendar.
///
/// Day bounds depend on the year: Cheshvan, Kislev and Adar change length
/// from one year to the next. Valid dates run from 18 Tevet 3761 to
/// 28 Cheshvan 13760, the same days as Gregorian years `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} / {} / {}", day, month, year)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HebrewDate {
    /// Creates a date, validating month and day against that year's layout.
    ///
    /// # Errors
    /// Returns `DateError` if the year is outside
    /// `MIN_HEBREW_YEAR..=MAX_HEBREW_YEAR`, the month does not exist in that
    /// year, the day exceeds the month length, or the date has no Gregorian
    /// counterpart.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_HEBREW_YEAR..=MAX_HEBREW_YEAR).contains(&year) {
            return Err(DateError::InvalidHebrewYear(year));
        }
        if !(NISAN..=last_month_of_year(year)).contains(&month) {
            return Err(DateError::InvalidMonth { month, year });
        }
        if !(MIN_DAY..=last_day_of_month(month, year)).contains(&day) {
            return Err(DateError::InvalidDay { day, month, year });
        }
        if !AbsoluteDay::new(absolute_from_parts(year, month, day)).is_supported() {
            return Err(DateError::OutOfRange { day, month, year });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Month name; Adar is reported as "Adar I" in leap years.
    pub fn month_name(&self) -> &'static str {
        if self.month == ADAR && is_leap_year(self.year) {
            "Adar I"
        } else {
            HEBREW_MONTH_NAMES[self.month as usize]
        }
    }

    pub const fn year_kind(&self) -> YearKind {
        YearKind::of(self.year)
    }

    pub fn weekday(&self) -> Weekday {
        self.to_absolute().weekday()
    }

    pub const fn to_absolute(self) -> AbsoluteDay {
        AbsoluteDay::new(absolute_from_parts(self.year, self.month, self.day))
    }

    /// Inverts [`Self::to_absolute`] by forward search.
    ///
    /// `day` must satisfy [`AbsoluteDay::is_supported`].
    pub fn from_absolute(day: AbsoluteDay) -> Self {
        debug_assert!(day.is_supported(), "absolute day {day} has no valid Hebrew date");
        let n = day.get();

        // No Hebrew year is longer than 385 days, so dividing by 366 stays
        // below the answer while only trailing it by a few dozen years.
        let mut year = (n - HEBREW_EPOCH) / 366;
        // Invariant: 1 Tishrei of `year + 1` strictly grows with `year`.
        while n >= absolute_from_parts(year + 1, TISHREI, MIN_DAY) {
            year += 1;
        }

        // Months run Tishrei..=Adar(II) and then Nisan..=Elul.
        let mut month = if n < absolute_from_parts(year, NISAN, MIN_DAY) {
            TISHREI
        } else {
            NISAN
        };
        // Invariant: month ends grow strictly and the last month of the
        // searched half ends at or after `n`.
        while n > absolute_from_parts(year, month, last_day_of_month(month, year)) {
            month += 1;
        }

        let day = n - absolute_from_parts(year, month, MIN_DAY) + 1;
        debug_assert!((1..=30).contains(&day));
        Self {
            year,
            month,
            day: day as u8,
        }
    }

    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_absolute(date.to_absolute())
    }

    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from_absolute(self.to_absolute())
    }

    /// The date `days` later, or `None` past either end of the valid range.
    pub fn checked_add(self, days: i32) -> Option<Self> {
        let day = self.to_absolute().get().checked_add(days).map(AbsoluteDay::new)?;
        day.is_supported().then(|| Self::from_absolute(day))
    }

    /// Calendar position within the civil year: Tishrei first, Elul last.
    const fn civil_key(&self) -> (i32, bool, u8, u8) {
        (self.year, self.month < TISHREI, self.month, self.day)
    }

    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.civil_key().cmp(&other.civil_key())
    }
}

/// Stepping past either end of the valid range is a logic error; use
/// [`HebrewDate::checked_add`] when that can happen.
impl Add<i32> for HebrewDate {
    type Output = Self;

    fn add(self, days: i32) -> Self::Output {
        Self::from_absolute(self.to_absolute() + days)
    }
}

impl Sub for HebrewDate {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.to_absolute() - rhs.to_absolute()
    }
}

impl From<HebrewDate> for AbsoluteDay {
    fn from(date: HebrewDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDay> for HebrewDate {
    fn from(day: AbsoluteDay) -> Self {
        Self::from_absolute(day)
    }
}

impl From<GregorianDate> for HebrewDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl FromStr for HebrewDate {
    type Err = ParseError;

    /// Parses the display form, `day / month / year`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(HEBREW_DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected day {HEBREW_DATE_SEPARATOR} month {HEBREW_DATE_SEPARATOR} year, found {trimmed}"
            )));
        }

        let day = Self::parse_u8(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let year = Self::parse_i32(parts[2])?;

        Self::new(year, month, day).map_err(ParseError::from)
    }
}

impl serde::Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Seven leap years per 19-year cycle, at positions 3, 6, 8, 11, 14, 17 and 19.
pub const fn is_leap_year(year: i32) -> bool {
    (7 * year + 1).rem_euclid(METONIC_YEARS) < METONIC_LEAP_YEARS
}

pub const fn last_month_of_year(year: i32) -> u8 {
    if is_leap_year(year) { ADAR_II } else { ADAR }
}

/// Days from the Sunday before the calendar epoch to 1 Tishrei of `year`.
pub const fn elapsed_days(year: i32) -> i32 {
    let prior = year - 1;
    let months_elapsed = METONIC_MONTHS * (prior / METONIC_YEARS) // complete cycles
        + 12 * (prior % METONIC_YEARS) // regular months this cycle
        + (METONIC_LEAP_YEARS * (prior % METONIC_YEARS) + 1) / METONIC_YEARS; // leap months this cycle

    // A lunar month is 29d 12h 793p; the first molad fell at 5h 204p.
    let parts_elapsed = 204 + 793 * (months_elapsed % PARTS_PER_HOUR);
    let hours_elapsed = 5
        + 12 * months_elapsed
        + 793 * (months_elapsed / PARTS_PER_HOUR)
        + parts_elapsed / PARTS_PER_HOUR;
    let conjunction_day = 1 + 29 * months_elapsed + hours_elapsed / 24;
    let conjunction_parts = PARTS_PER_HOUR * (hours_elapsed % 24) + parts_elapsed % PARTS_PER_HOUR;

    // First postponement: late molad, or the two weekday/time limits that
    // would otherwise yield an impossible year length.
    let weekday = conjunction_day % 7;
    let postponed = conjunction_parts >= NOON_PARTS
        || (weekday == 2 && conjunction_parts >= TUESDAY_PARTS && !is_leap_year(year))
        || (weekday == 1 && conjunction_parts >= MONDAY_PARTS && is_leap_year(year - 1));
    let day = if postponed {
        conjunction_day + 1
    } else {
        conjunction_day
    };

    // Second postponement, applied to the result of the first: never on
    // Sunday, Wednesday or Friday.
    match day % 7 {
        0 | 3 | 5 => day + 1,
        _ => day,
    }
}

pub const fn days_in_year(year: i32) -> i32 {
    elapsed_days(year + 1) - elapsed_days(year)
}

pub const fn long_heshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

pub const fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

pub const fn last_day_of_month(month: u8, year: i32) -> u8 {
    let short = match month {
        IYAR | TAMMUZ | ELUL | TEVET | ADAR_II => true,
        CHESHVAN => !long_heshvan(year),
        KISLEV => short_kislev(year),
        ADAR => !is_leap_year(year),
        _ => false,
    };
    if short { 29 } else { 30 }
}

/// Absolute day of unchecked components; the search loops probe one year
/// past the answer.
pub(crate) const fn absolute_from_parts(year: i32, month: u8, day: u8) -> i32 {
    let mut day_in_year = day as i32;
    if month < TISHREI {
        // Whole Tishrei..=last month, then Nisan up to this month
        let mut m = TISHREI;
        while m <= last_month_of_year(year) {
            day_in_year += last_day_of_month(m, year) as i32;
            m += 1;
        }
        let mut m = NISAN;
        while m < month {
            day_in_year += last_day_of_month(m, year) as i32;
            m += 1;
        }
    } else {
        let mut m = TISHREI;
        while m < month {
            day_in_year += last_day_of_month(m, year) as i32;
            m += 1;
        }
    }
    day_in_year + elapsed_days(year) + HEBREW_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AV, MAX_YEAR, SHEVAT, SIVAN};
    use crate::test_utils::{greg, heb};

    #[test]
    fn test_leap_years_per_cycle() {
        for cycle in 0..500 {
            let first = cycle * 19 + 1;
            let leap_positions: Vec<i32> = (first..first + 19)
                .filter(|&y| is_leap_year(y))
                .map(|y| y - first + 1)
                .collect();
            assert_eq!(leap_positions, vec![3, 6, 8, 11, 14, 17, 19], "cycle starting {first}");
        }
    }

    #[test]
    fn test_year_lengths_are_canonical() {
        for year in 1..=MAX_HEBREW_YEAR {
            let length = days_in_year(year);
            let expected: &[i32] = if is_leap_year(year) {
                &[383, 384, 385]
            } else {
                &[353, 354, 355]
            };
            assert!(expected.contains(&length), "year {year} has {length} days");
        }
    }

    #[test]
    fn test_new_year_never_on_sunday_wednesday_friday() {
        for year in 1..=MAX_HEBREW_YEAR {
            let weekday = AbsoluteDay::new(absolute_from_parts(year, TISHREI, 1)).weekday();
            assert!(
                !matches!(weekday, Weekday::Sunday | Weekday::Wednesday | Weekday::Friday),
                "1 Tishrei {year} falls on {weekday}"
            );
        }
    }

    #[test]
    fn test_known_years() {
        struct TestCase {
            year: i32,
            length: i32,
            kind: YearKind,
            rosh_hashanah: (i32, u8, u8),
        }

        let cases = [
            TestCase {
                year: 5781,
                length: 353,
                kind: YearKind::Deficient,
                rosh_hashanah: (2020, 9, 19),
            },
            TestCase {
                year: 5782,
                length: 384,
                kind: YearKind::Regular,
                rosh_hashanah: (2021, 9, 7),
            },
            TestCase {
                year: 5784,
                length: 383,
                kind: YearKind::Deficient,
                rosh_hashanah: (2023, 9, 16),
            },
            TestCase {
                year: 5785,
                length: 355,
                kind: YearKind::Complete,
                rosh_hashanah: (2024, 10, 3),
            },
            TestCase {
                year: 5786,
                length: 354,
                kind: YearKind::Regular,
                rosh_hashanah: (2025, 9, 23),
            },
        ];

        for case in &cases {
            assert_eq!(days_in_year(case.year), case.length, "year {}", case.year);
            assert_eq!(YearKind::of(case.year), case.kind, "year {}", case.year);
            let (y, m, d) = case.rosh_hashanah;
            let new_year = heb(case.year, TISHREI, 1);
            assert_eq!(new_year.to_gregorian(), greg(y, m, d));
            assert_eq!(HebrewDate::from_gregorian(greg(y, m, d)), new_year);
        }
    }

    #[test]
    fn test_historical_anchor() {
        // 5 Iyar 5708
        assert_eq!(HebrewDate::from_gregorian(greg(1948, 5, 14)), heb(5708, IYAR, 5));
        assert_eq!(heb(5708, IYAR, 5).to_absolute(), greg(1948, 5, 14).to_absolute());
    }

    #[test]
    fn test_month_lengths_follow_year_kind() {
        // Deficient
        assert_eq!(last_day_of_month(CHESHVAN, 5784), 29);
        assert_eq!(last_day_of_month(KISLEV, 5784), 29);
        // Regular
        assert_eq!(last_day_of_month(CHESHVAN, 5786), 29);
        assert_eq!(last_day_of_month(KISLEV, 5786), 30);
        // Complete
        assert_eq!(last_day_of_month(CHESHVAN, 5785), 30);
        assert_eq!(last_day_of_month(KISLEV, 5785), 30);
        assert!(long_heshvan(5785));
        assert!(short_kislev(5784));
    }

    #[test]
    fn test_fixed_month_lengths() {
        for year in [5784, 5785, 5786] {
            for month in [NISAN, SIVAN, AV, TISHREI, SHEVAT] {
                assert_eq!(last_day_of_month(month, year), 30, "month {month} of {year}");
            }
            for month in [IYAR, TAMMUZ, ELUL, TEVET] {
                assert_eq!(last_day_of_month(month, year), 29, "month {month} of {year}");
            }
        }
    }

    #[test]
    fn test_adar_in_leap_and_common_years() {
        assert!(is_leap_year(5784));
        assert_eq!(last_month_of_year(5784), ADAR_II);
        assert_eq!(last_day_of_month(ADAR, 5784), 30);
        assert_eq!(last_day_of_month(ADAR_II, 5784), 29);

        assert!(!is_leap_year(5785));
        assert_eq!(last_month_of_year(5785), ADAR);
        assert_eq!(last_day_of_month(ADAR, 5785), 29);
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in 5700..5800 {
            let total: i32 = (NISAN..=last_month_of_year(year))
                .map(|m| i32::from(last_day_of_month(m, year)))
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn test_new_validates_against_year() {
        assert!(HebrewDate::new(5785, CHESHVAN, 30).is_ok());
        assert!(matches!(
            HebrewDate::new(5786, CHESHVAN, 30),
            Err(DateError::InvalidDay {
                day: 30,
                month: CHESHVAN,
                year: 5786
            })
        ));
        assert!(HebrewDate::new(5784, ADAR_II, 29).is_ok());
        assert!(matches!(
            HebrewDate::new(5785, ADAR_II, 1),
            Err(DateError::InvalidMonth {
                month: ADAR_II,
                year: 5785
            })
        ));
        assert!(matches!(HebrewDate::new(5785, 0, 1), Err(DateError::InvalidMonth { .. })));
        assert!(matches!(HebrewDate::new(5785, NISAN, 0), Err(DateError::InvalidDay { .. })));
        assert!(matches!(HebrewDate::new(0, NISAN, 1), Err(DateError::InvalidHebrewYear(0))));
    }

    #[test]
    fn test_range_ends() {
        let first = heb(MIN_HEBREW_YEAR, TEVET, 18);
        let last = heb(MAX_HEBREW_YEAR, CHESHVAN, 28);
        assert_eq!(first.to_absolute(), AbsoluteDay::EPOCH);
        assert_eq!(last.to_absolute(), AbsoluteDay::MAX);
        assert_eq!(first.to_gregorian(), greg(1, 1, 1));
        assert_eq!(last.to_gregorian(), greg(MAX_YEAR, 12, 31));
        assert_eq!(HebrewDate::from_gregorian(greg(1, 1, 1)), first);
        assert_eq!(HebrewDate::from_gregorian(greg(MAX_YEAR, 12, 31)), last);

        assert!(matches!(
            HebrewDate::new(MIN_HEBREW_YEAR, TEVET, 17),
            Err(DateError::OutOfRange { day: 17, .. })
        ));
        assert!(matches!(
            HebrewDate::new(MIN_HEBREW_YEAR, TISHREI, 1),
            Err(DateError::OutOfRange { .. })
        ));
        assert!(matches!(
            HebrewDate::new(MAX_HEBREW_YEAR, CHESHVAN, 29),
            Err(DateError::OutOfRange { day: 29, .. })
        ));
        assert!(matches!(
            HebrewDate::new(MIN_HEBREW_YEAR - 1, NISAN, 1),
            Err(DateError::InvalidHebrewYear(3760))
        ));
        assert!(matches!(
            HebrewDate::new(MAX_HEBREW_YEAR + 1, TISHREI, 1),
            Err(DateError::InvalidHebrewYear(13_761))
        ));

        assert_eq!(first.checked_add(-1), None);
        assert_eq!(last.checked_add(1), None);
        assert_eq!(first.checked_add(i32::MIN), None);
        assert_eq!(last.checked_add(-1), Some(heb(MAX_HEBREW_YEAR, CHESHVAN, 27)));
        assert_eq!(first.checked_add(12), Some(heb(MIN_HEBREW_YEAR, SHEVAT, 1)));
    }

    #[test]
    fn test_range_ends_text_round_trip() {
        for date in [heb(MIN_HEBREW_YEAR, TEVET, 18), heb(MAX_HEBREW_YEAR, CHESHVAN, 28)] {
            assert_eq!(date.to_string().parse::<HebrewDate>().unwrap(), date);
            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(serde_json::from_str::<HebrewDate>(&json).unwrap(), date);
        }

        // Crossing a Gregorian millennium boundary stays inside the range
        let date = heb(9999, ELUL, 29) + 1;
        assert_eq!(date, heb(10_000, TISHREI, 1));
        assert_eq!(date.to_string().parse::<HebrewDate>().unwrap(), date);
    }

    #[test]
    fn test_round_trip_every_day() {
        let start = heb(5760, TISHREI, 1).to_absolute().get();
        let end = heb(5800, ELUL, 29).to_absolute().get();
        let mut previous = heb(5760, TISHREI, 1);
        for n in start..=end {
            let date = HebrewDate::from_absolute(AbsoluteDay::new(n));
            assert_eq!(date.to_absolute().get(), n, "{date}");
            if n > start {
                assert!(date > previous, "{date} should follow {previous}");
                assert_eq!(date - previous, 1);
            }
            previous = date;
        }
        assert_eq!(previous, heb(5800, ELUL, 29));
    }

    #[test]
    fn test_round_trip_wide_range() {
        for year in (MIN_HEBREW_YEAR + 1..MAX_HEBREW_YEAR).step_by(7) {
            for month in NISAN..=last_month_of_year(year) {
                for day in [1, last_day_of_month(month, year)] {
                    let date = heb(year, month, day);
                    assert_eq!(HebrewDate::from_absolute(date.to_absolute()), date);
                    assert_eq!(HebrewDate::from_gregorian(date.to_gregorian()), date);
                }
            }
        }
    }

    #[test]
    fn test_every_gregorian_day_near_range_ends() {
        let days = (1..=400).chain(AbsoluteDay::MAX.get() - 400..=AbsoluteDay::MAX.get());
        for n in days.map(AbsoluteDay::new) {
            let gregorian = GregorianDate::from_absolute(n);
            let hebrew = HebrewDate::from_gregorian(gregorian);
            assert_eq!(hebrew.to_absolute(), n);
            assert_eq!(hebrew.to_gregorian(), gregorian);
            assert_eq!(HebrewDate::new(hebrew.year(), hebrew.month(), hebrew.day()), Ok(hebrew));
        }
    }

    #[test]
    fn test_civil_ordering() {
        let tishrei = heb(5785, TISHREI, 1);
        let adar = heb(5785, ADAR, 29);
        let nisan = heb(5785, NISAN, 1);
        let elul = heb(5785, ELUL, 29);
        let next_year = heb(5786, TISHREI, 1);

        assert!(tishrei < adar);
        assert!(adar < nisan);
        assert!(nisan < elul);
        assert!(elul < next_year);
        assert_eq!(next_year - elul, 1);
        assert_eq!(elul + 1, next_year);
        assert_eq!(nisan + -1, adar);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(heb(5785, KISLEV, 25).month_name(), "Kislev");
        assert_eq!(heb(5785, ADAR, 1).month_name(), "Adar");
        assert_eq!(heb(5784, ADAR, 1).month_name(), "Adar I");
        assert_eq!(heb(5784, ADAR_II, 1).month_name(), "Adar II");
    }

    #[test]
    fn test_display_and_parse() {
        let date = heb(5785, KISLEV, 25);
        assert_eq!(date.to_string(), "25 / 9 / 5785");
        assert_eq!("25 / 9 / 5785".parse::<HebrewDate>().unwrap(), date);
        assert_eq!("25/9/5785".parse::<HebrewDate>().unwrap(), date);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("  ".parse::<HebrewDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "25 / 9".parse::<HebrewDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "x / 9 / 5785".parse::<HebrewDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "30 / 8 / 5786".parse::<HebrewDate>(),
            Err(ParseError::InvalidDate(DateError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn test_serde() {
        let date = heb(5784, ADAR_II, 14);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"14 / 13 / 5784\"");

        let parsed: HebrewDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<HebrewDate, _> = serde_json::from_str("\"1 / 13 / 5785\"");
        assert!(result.is_err());
    }
}
