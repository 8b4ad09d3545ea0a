use std::iter::FusedIterator;
use std::str::FromStr;

use derive_more::{Display, Error, IsVariant};

/// An arithmetic sequence of [`i64`]s, optionally bounded by an inclusive end.
///
/// Unlike [`std::ops::RangeInclusive`], a Range doesn't need an end, in which case it counts up
/// until the next value would overflow. Ranges can also be parsed from the compact notation
/// `"<start>..<end>"` or `"<start>..=<end>"`, see [`parse_range`].
///
/// # Examples
/// ```
/// # use lazy_std::iter::{range, range_from};
/// assert_eq!(range(1, 5).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
/// assert_eq!(range(0, 10).with_step(4).collect::<Vec<_>>(), [0, 4, 8]);
/// assert_eq!(range_from(7).take(3).collect::<Vec<_>>(), [7, 8, 9]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    /// The next value to yield, or `None` once the sequence has overflowed.
    pub(crate) next: Option<i64>,
    pub(crate) end: Option<i64>,
    pub(crate) step: i64,
}

impl Range {
    /// Creates a Range counting from `start` up to and including `end`, in steps of 1. If
    /// `end < start`, the Range is empty.
    pub const fn new(start: i64, end: i64) -> Range {
        Range {
            next: Some(start),
            end: Some(end),
            step: 1,
        }
    }

    /// Creates a Range counting from `start` with no upper bound.
    pub const fn unbounded(start: i64) -> Range {
        Range {
            next: Some(start),
            end: None,
            step: 1,
        }
    }

    /// Replaces the step between consecutive values. Steps too large for an [`i64`] are
    /// clamped to [`i64::MAX`], which ends the sequence after at most two values anyway.
    ///
    /// # Panics
    /// Panics if `step` is 0.
    pub fn with_step(self, step: usize) -> Range {
        assert!(step != 0, "Range step must be non-zero!");
        Range {
            step: i64::try_from(step).unwrap_or(i64::MAX),
            ..self
        }
    }

    /// Returns the inclusive end of the Range, if it has one.
    pub const fn end(&self) -> Option<i64> {
        self.end
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.next?;
        if self.end.is_some_and(|end| value > end) {
            self.next = None;
            return None;
        }

        self.next = value.checked_add(self.step);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // An unbounded Range still stops before overflowing.
        let end = self.end.unwrap_or(i64::MAX);
        match self.next {
            Some(next) if next <= end => {
                let remaining = (end.abs_diff(next) / self.step.unsigned_abs()).saturating_add(1);
                match usize::try_from(remaining) {
                    Ok(remaining) => (remaining, Some(remaining)),
                    Err(_) => (usize::MAX, None),
                }
            },
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for Range {}

/// The reasons range notation can fail to parse. See [`parse_range`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, IsVariant)]
pub enum RangeError {
    #[display("Range notation {notation:?} is missing a \"..\" separator!")]
    MissingSeparator { notation: String },
    #[display("Range bound {bound:?} must be made of decimal digits only!")]
    InvalidBound { bound: String },
    #[display("Range bound {bound:?} is too large!")]
    BoundOverflow { bound: String },
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let (start, end) = notation.split_once("..").ok_or_else(|| RangeError::MissingSeparator {
            notation: notation.to_owned(),
        })?;
        let (inclusive, end) = match end.strip_prefix('=') {
            Some(end) => (true, end),
            None => (false, end),
        };

        let start = parse_bound(start)?.unwrap_or(0);
        let end = match parse_bound(end)? {
            // Bounds are never negative, so this can't overflow.
            Some(end) if !inclusive => Some(end - 1),
            end => end,
        };

        Ok(Range {
            next: Some(start),
            end,
            step: 1,
        })
    }
}

/// Parses one side of range notation. An empty bound is `None`.
fn parse_bound(bound: &str) -> Result<Option<i64>, RangeError> {
    if bound.is_empty() {
        return Ok(None);
    }
    if !bound.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::InvalidBound {
            bound: bound.to_owned(),
        });
    }

    bound.parse().map(Some).map_err(|_| RangeError::BoundOverflow {
        bound: bound.to_owned(),
    })
}

/// Creates a Range from `start` to `end` inclusive. See [`Range::new`].
pub const fn range(start: i64, end: i64) -> Range {
    Range::new(start, end)
}

/// Creates a Range from `start` with no end. See [`Range::unbounded`].
pub const fn range_from(start: i64) -> Range {
    Range::unbounded(start)
}

/// Parses range notation: an optional start, `..`, an optional `=` and an optional end. Both
/// bounds are plain decimal digits. A missing start is 0 and a missing end means the Range is
/// unbounded. Without the `=`, the end is exclusive.
///
/// # Errors
/// Returns a [`RangeError`] if the notation has no `..`, if either bound contains anything other
/// than digits, or if a bound doesn't fit in an [`i64`].
///
/// # Examples
/// ```
/// # use lazy_std::iter::parse_range;
/// assert_eq!(parse_range("1..5")?.collect::<Vec<_>>(), [1, 2, 3, 4]);
/// assert_eq!(parse_range("1..=5")?.collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
/// assert_eq!(parse_range("..")?.take(3).collect::<Vec<_>>(), [0, 1, 2]);
/// assert!(parse_range("1-5").is_err());
/// # Ok::<(), lazy_std::iter::RangeError>(())
/// ```
pub fn parse_range(notation: &str) -> Result<Range, RangeError> {
    notation.parse()
}
