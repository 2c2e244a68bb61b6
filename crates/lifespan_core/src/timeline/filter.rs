//! Best-effort birth-year window filter.
//!
//! Records whose birth token has no readable 4-character year prefix are
//! excluded from the result. That exclusion is policy, not an error: it is
//! counted in `BirthYearFilter::unparsable_births` and never raised.

use crate::model::person::RawPersonRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower bound of the selectable year window.
pub const MIN_TIMELINE_YEAR: i32 = 1678;
/// Upper bound of the selectable year window.
pub const MAX_TIMELINE_YEAR: i32 = 2025;

const YEAR_PREFIX_CHARS: usize = 4;

/// Inclusive birth-year window chosen by the user.
///
/// Bounds are clamped to `[MIN_TIMELINE_YEAR, MAX_TIMELINE_YEAR]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    min_year: i32,
    max_year: i32,
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::full()
    }
}

impl YearWindow {
    /// The whole selectable range.
    pub fn full() -> Self {
        Self {
            min_year: MIN_TIMELINE_YEAR,
            max_year: MAX_TIMELINE_YEAR,
        }
    }

    /// Builds a window from optional bounds; missing bounds use the range ends.
    pub fn new(from: Option<i32>, to: Option<i32>) -> Result<Self, YearWindowError> {
        let min_year = from
            .unwrap_or(MIN_TIMELINE_YEAR)
            .clamp(MIN_TIMELINE_YEAR, MAX_TIMELINE_YEAR);
        let max_year = to
            .unwrap_or(MAX_TIMELINE_YEAR)
            .clamp(MIN_TIMELINE_YEAR, MAX_TIMELINE_YEAR);
        if min_year > max_year {
            return Err(YearWindowError { min_year, max_year });
        }
        Ok(Self { min_year, max_year })
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Applies [`filter_by_birth_year`] with this window.
    pub fn apply(&self, records: &[RawPersonRecord]) -> BirthYearFilter {
        filter_by_birth_year(records, self.min_year, self.max_year)
    }
}

/// Window whose lower bound ends up above its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindowError {
    pub min_year: i32,
    pub max_year: i32,
}

impl Display for YearWindowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "year window start {} is after its end {}",
            self.min_year, self.max_year
        )
    }
}

impl Error for YearWindowError {}

/// Result of a best-effort birth-year filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthYearFilter {
    /// Kept records, in input order.
    pub records: Vec<RawPersonRecord>,
    /// Records dropped because their birth year prefix did not parse.
    pub unparsable_births: usize,
}

/// Keeps records born in `min_year..=max_year`.
///
/// The caller guarantees `min_year <= max_year`.
pub fn filter_by_birth_year(
    records: &[RawPersonRecord],
    min_year: i32,
    max_year: i32,
) -> BirthYearFilter {
    let mut result = BirthYearFilter::default();
    for record in records {
        match birth_year_prefix(&record.birth) {
            Some(year) if (min_year..=max_year).contains(&year) => {
                result.records.push(record.clone());
            }
            Some(_) => {}
            None => result.unparsable_births += 1,
        }
    }
    result
}

/// Parses the first four characters of a birth token as a year.
pub fn birth_year_prefix(birth: &str) -> Option<i32> {
    let prefix: String = birth.chars().take(YEAR_PREFIX_CHARS).collect();
    if prefix.chars().count() < YEAR_PREFIX_CHARS {
        return None;
    }
    prefix.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::{birth_year_prefix, YearWindow, MAX_TIMELINE_YEAR, MIN_TIMELINE_YEAR};

    #[test]
    fn window_bounds_are_clamped_to_selectable_range() {
        let window = YearWindow::new(Some(1000), Some(3000)).unwrap();
        assert_eq!(window.min_year(), MIN_TIMELINE_YEAR);
        assert_eq!(window.max_year(), MAX_TIMELINE_YEAR);
    }

    #[test]
    fn reversed_window_is_rejected() {
        let err = YearWindow::new(Some(1900), Some(1800)).unwrap_err();
        assert_eq!((err.min_year, err.max_year), (1900, 1800));
    }

    #[test]
    fn prefix_requires_four_characters() {
        assert_eq!(birth_year_prefix("187"), None);
        assert_eq!(birth_year_prefix(""), None);
    }

    #[test]
    fn three_digit_years_do_not_parse() {
        assert_eq!(birth_year_prefix("987-01-01"), None);
    }

    #[test]
    fn prefix_ignores_the_rest_of_the_token() {
        assert_eq!(birth_year_prefix("1879-garbage"), Some(1879));
    }
}
