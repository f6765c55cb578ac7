/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Hebrew year holding January 1, year 1. Supported from 18 Tevet on.
pub const MIN_HEBREW_YEAR: i32 = 3761;
/// Hebrew year holding December 31, 9999. Supported through 28 Cheshvan.
pub const MAX_HEBREW_YEAR: i32 = 13_760;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Absolute day of the Sunday before 1 Tishrei, Hebrew year 1.
/// Absolute day 1 is January 1, year 1 (proleptic Gregorian).
pub const HEBREW_EPOCH: i32 = -1_373_429;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

// Hebrew months, numbered from Nisan. The civil year starts at Tishrei.
pub const NISAN: u8 = 1;
pub const IYAR: u8 = 2;
pub const SIVAN: u8 = 3;
pub const TAMMUZ: u8 = 4;
pub const AV: u8 = 5;
pub const ELUL: u8 = 6;
pub const TISHREI: u8 = 7;
pub const CHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const TEVET: u8 = 10;
pub const SHEVAT: u8 = 11;
/// Adar in a common year, Adar I in a leap year
pub const ADAR: u8 = 12;
/// Only present in leap years
pub const ADAR_II: u8 = 13;

/// Hebrew month names, index 0 unused
pub const HEBREW_MONTH_NAMES: [&str; 14] = [
    "", "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

/// Years in the Metonic cycle
pub(crate) const METONIC_YEARS: i32 = 19;
/// Lunar months in one Metonic cycle
pub(crate) const METONIC_MONTHS: i32 = 235;
/// Leap years per Metonic cycle
pub(crate) const METONIC_LEAP_YEARS: i32 = 7;

/// Halakhic parts ("halakim") per hour
pub(crate) const PARTS_PER_HOUR: i32 = 1080;
/// Noon, in parts past the start of the day (18h counted from 6pm)
pub(crate) const NOON_PARTS: i32 = 18 * PARTS_PER_HOUR;
/// 9h 204p: Tuesday threshold in a common year
pub(crate) const TUESDAY_PARTS: i32 = 9 * PARTS_PER_HOUR + 204;
/// 15h 589p: Monday threshold after a leap year
pub(crate) const MONDAY_PARTS: i32 = 15 * PARTS_PER_HOUR + 589;

/// Angle of the sun from the zenith at sunrise/sunset, in degrees.
/// Includes refraction and the solar radius.
pub const HORIZON_ANGLE: f64 = 90.833;

/// Minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;
/// Solar noon at the prime meridian, in minutes past midnight UTC
pub(crate) const SOLAR_NOON_MINUTES: f64 = 720.0;
/// The sun moves one degree of longitude every four minutes
pub(crate) const MINUTES_PER_DEGREE: f64 = 4.0;

/// Separator used by the Hebrew date text form, `day / month / year`
pub const HEBREW_DATE_SEPARATOR: char = '/';
/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
