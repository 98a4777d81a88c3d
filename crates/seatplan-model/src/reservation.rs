// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Reservation resolution.
//!
//! A reservation line has the form `name:seat`. It is split on the first
//! colon and both halves are trimmed. The seat text is read the way a lenient
//! form parser reads numbers: an optional sign followed by leading decimal
//! digits, with anything after the digits ignored (`"7 (window)"` reads as
//! `7`). A line without a colon, or whose seat text has no leading digits,
//! fails with `SeatingError::MissingSeatNumber`; a seat outside the seat
//! range fails with `SeatingError::SeatOutOfRange`. The first offending line
//! in input order is reported.
//!
//! The same display name may be reserved more than once. Each occurrence is
//! keyed by the name followed by its 1-based occurrence counter ("Alice1",
//! "Alice2"), so every line maps to a distinct key while the plain name stays
//! available for display.

use crate::{error::SeatingError, seat::SeatNumber, seat::SeatRange};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// A parsed but not yet range-checked reservation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    /// The trimmed name before the first colon.
    pub raw_name: String,
    /// The seat number as written, possibly out of range.
    pub seat_number: i64,
}

impl ReservationRequest {
    /// Parses a single `name:seat` line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::reservation::ReservationRequest;
    ///
    /// let req = ReservationRequest::parse(" Alice : 12 ").unwrap();
    /// assert_eq!(req.raw_name, "Alice");
    /// assert_eq!(req.seat_number, 12);
    ///
    /// assert!(ReservationRequest::parse("Bob").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, SeatingError> {
        let (name, seat_text) = match line.split_once(':') {
            Some((name, seat_text)) => (name.trim(), Some(seat_text)),
            None => (line.trim(), None),
        };

        let seat_number = seat_text
            .and_then(parse_leading_integer)
            .ok_or_else(|| SeatingError::MissingSeatNumber {
                name: name.to_owned(),
            })?;

        Ok(Self {
            raw_name: name.to_owned(),
            seat_number,
        })
    }
}

/// Reads an optional sign and the leading decimal digits of `text`.
///
/// Leading whitespace is skipped and anything after the digits is ignored.
/// Returns `None` if no digit follows the sign. Values beyond the `i64`
/// range saturate, which keeps them out of every seat range.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(d);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// A resolved reservation: a display name pinned to a seat under a unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationRecord {
    display_name: String,
    key: String,
    seat: SeatNumber,
}

impl ReservationRecord {
    /// The name as written in the reservation line.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The disambiguated key, unique across all reservations.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The reserved seat.
    #[inline]
    pub fn seat(&self) -> SeatNumber {
        self.seat
    }
}

impl std::fmt::Display for ReservationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reservation(key: {}, name: {}, seat: {})",
            self.key, self.display_name, self.seat
        )
    }
}

/// All reservations of one invocation, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservations {
    records: Vec<ReservationRecord>,
    display_names: Vec<String>,
}

impl Reservations {
    /// Resolves cleaned reservation lines against the seat range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::reservation::Reservations;
    /// # use seatplan_model::seat::SeatRange;
    ///
    /// let res = Reservations::resolve(["Alice:1", "Alice:2"], SeatRange::new(4)).unwrap();
    /// let keys: Vec<&str> = res.records().iter().map(|r| r.key()).collect();
    /// assert_eq!(keys, vec!["Alice1", "Alice2"]);
    /// assert_eq!(res.reserved_display_names(), &["Alice", "Alice"]);
    /// ```
    pub fn resolve<I, S>(lines: I, range: SeatRange) -> Result<Self, SeatingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut occurrences: FxHashMap<String, usize> = FxHashMap::default();
        let mut records = Vec::new();
        let mut display_names = Vec::new();

        for line in lines {
            let request = ReservationRequest::parse(line.as_ref())?;
            let seat = range.seat(request.seat_number).ok_or_else(|| {
                SeatingError::SeatOutOfRange {
                    name: request.raw_name.clone(),
                    seat: request.seat_number,
                    total_seats: range.total_seats(),
                }
            })?;

            let occurrence = occurrences.entry(request.raw_name.clone()).or_insert(0);
            *occurrence += 1;
            let key = format!("{}{}", request.raw_name, occurrence);

            display_names.push(request.raw_name.clone());
            records.push(ReservationRecord {
                display_name: request.raw_name,
                key,
                seat,
            });
        }

        Ok(Self {
            records,
            display_names,
        })
    }

    /// Returns the number of reservation lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no reservations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the resolved records in input order.
    #[inline]
    pub fn records(&self) -> &[ReservationRecord] {
        &self.records
    }

    /// Returns one display name per reservation line, in input order.
    #[inline]
    pub fn reserved_display_names(&self) -> &[String] {
        &self.display_names
    }

    /// Returns the reserved seats in input order; may repeat a seat.
    #[inline]
    pub fn seats(&self) -> impl Iterator<Item = SeatNumber> + '_ {
        self.records.iter().map(ReservationRecord::seat)
    }

    /// Returns the seat reserved under `key`, if any.
    pub fn seat_for_key(&self, key: &str) -> Option<SeatNumber> {
        self.records
            .iter()
            .find(|r| r.key == key)
            .map(ReservationRecord::seat)
    }

    /// Returns `true` if `name` was reserved under its plain display name.
    #[inline]
    pub fn contains_display_name(&self, name: &str) -> bool {
        self.display_names.iter().any(|n| n == name)
    }

    /// Returns the set of reserved display names.
    pub fn display_name_set(&self) -> FxHashSet<&str> {
        self.display_names.iter().map(String::as_str).collect()
    }

    /// Consumes the reservations, returning records and display names.
    #[inline]
    pub fn into_parts(self) -> (Vec<ReservationRecord>, Vec<String>) {
        (self.records, self.display_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: u32) -> SeatNumber {
        SeatNumber::new(n).unwrap()
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let req = ReservationRequest::parse("Alice:3:9").unwrap();
        assert_eq!(req.raw_name, "Alice");
        assert_eq!(req.seat_number, 3);
    }

    #[test]
    fn test_parse_reads_leading_digits() {
        assert_eq!(ReservationRequest::parse("A: 7 (window)").unwrap().seat_number, 7);
        assert_eq!(ReservationRequest::parse("A:+4").unwrap().seat_number, 4);
        assert_eq!(ReservationRequest::parse("A:-2").unwrap().seat_number, -2);
        assert_eq!(ReservationRequest::parse("A:5.9").unwrap().seat_number, 5);
    }

    #[test]
    fn test_parse_missing_seat_number() {
        for line in ["Bob", "Bob:", "Bob:   ", "Bob:x12", "Bob:-"] {
            match ReservationRequest::parse(line) {
                Err(SeatingError::MissingSeatNumber { name }) => assert_eq!(name, "Bob"),
                other => panic!("expected MissingSeatNumber for {line:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_huge_number_saturates() {
        let req = ReservationRequest::parse("A:99999999999999999999999").unwrap();
        assert_eq!(req.seat_number, i64::MAX);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let err = Reservations::resolve(["Bob:5"], SeatRange::new(3)).unwrap_err();
        assert_eq!(
            err,
            SeatingError::SeatOutOfRange {
                name: "Bob".to_string(),
                seat: 5,
                total_seats: 3,
            }
        );

        let err = Reservations::resolve(["Bob:0"], SeatRange::new(3)).unwrap_err();
        assert!(matches!(err, SeatingError::SeatOutOfRange { seat: 0, .. }));
    }

    #[test]
    fn test_resolve_reports_first_offending_line() {
        let err = Reservations::resolve(["Ann:1", "Bob", "Cid:99"], SeatRange::new(3)).unwrap_err();
        assert_eq!(
            err,
            SeatingError::MissingSeatNumber {
                name: "Bob".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_disambiguates_repeated_names() {
        let res =
            Reservations::resolve(["Alice:1", "Bob:3", "Alice:2"], SeatRange::new(4)).unwrap();
        assert_eq!(res.len(), 3);
        assert_eq!(res.seat_for_key("Alice1"), Some(s(1)));
        assert_eq!(res.seat_for_key("Alice2"), Some(s(2)));
        assert_eq!(res.seat_for_key("Bob1"), Some(s(3)));
        assert_eq!(res.seat_for_key("Alice"), None);
        assert_eq!(res.reserved_display_names(), &["Alice", "Bob", "Alice"]);
    }

    #[test]
    fn test_resolve_counts_exact_names_not_prefixes() {
        // "Al" must not count as an earlier occurrence of "Alice".
        let res = Reservations::resolve(["Al:1", "Alice:2"], SeatRange::new(2)).unwrap();
        let keys: Vec<&str> = res.records().iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec!["Al1", "Alice1"]);
    }

    #[test]
    fn test_resolve_keeps_duplicate_seats_for_later_validation() {
        let res = Reservations::resolve(["Ann:2", "Bob:2"], SeatRange::new(3)).unwrap();
        let seats: Vec<SeatNumber> = res.seats().collect();
        assert_eq!(seats, vec![s(2), s(2)]);
    }

    #[test]
    fn test_display_name_lookup() {
        let res = Reservations::resolve(["Alice:1"], SeatRange::new(1)).unwrap();
        assert!(res.contains_display_name("Alice"));
        assert!(!res.contains_display_name("Alice1"));
        assert!(res.display_name_set().contains("Alice"));
    }
}
