//! `A1`-style cell addresses and `A1:D9` ranges.
//!
//! Columns are a single letter (`A` + index); the grids built here never
//! have more than 26 columns.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Zero-based (row, column) position of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub const MAX_COLUMNS: usize = 26;

    pub fn new(row: usize, col: usize) -> Self {
        CellAddress { row, col }
    }

    pub fn column_letter(col: usize) -> Result<char, ConvertError> {
        u8::try_from(col)
            .ok()
            .filter(|c| (*c as usize) < Self::MAX_COLUMNS)
            .map(|c| (b'A' + c) as char)
            .ok_or_else(|| ConvertError::InvalidCellAddress(format!("column index {col}")))
    }

    pub fn encode(&self) -> Result<String, ConvertError> {
        Ok(format!("{}{}", Self::column_letter(self.col)?, self.row + 1))
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "R{}C{}", self.row + 1, self.col + 1),
        }
    }
}

impl FromStr for CellAddress {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConvertError::InvalidCellAddress(s.to_string());

        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'A'..='Z') => (c as u8 - b'A') as usize,
            _ => return Err(invalid()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(CellAddress { row: row - 1, col })
    }
}

/// Inclusive rectangle from `start` (top-left) to `end` (bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    pub fn encode(&self) -> Result<String, ConvertError> {
        Ok(format!("{}:{}", self.start.encode()?, self.end.encode()?))
    }

    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.start.row..=self.end.row
    }

    pub fn cols(&self) -> std::ops::RangeInclusive<usize> {
        self.start.col..=self.end.col
    }
}

impl FromStr for CellRange {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| ConvertError::InvalidCellAddress(s.to_string()))?;
        Ok(CellRange {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(CellAddress::new(0, 0).encode().unwrap(), "A1");
        assert_eq!(CellAddress::new(8, 3).encode().unwrap(), "D9");
        assert_eq!(CellAddress::new(0, 25).encode().unwrap(), "Z1");
        assert!(CellAddress::new(0, 26).encode().is_err());
    }

    #[test]
    fn test_decode() {
        assert_eq!("C12".parse::<CellAddress>().unwrap(), CellAddress::new(11, 2));
    }

    #[test]
    fn test_malformed_addresses_rejected() {
        for bad in ["", "1A", "a1", "A", "A0", "A1B", "AA1", "A-1"] {
            assert!(bad.parse::<CellAddress>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_range_round_trip() {
        let range: CellRange = "A1:D9".parse().unwrap();
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(8, 3));
        assert_eq!(range.encode().unwrap(), "A1:D9");
        assert_eq!(range.rows().count(), 9);
        assert_eq!(range.cols().count(), 4);
    }

    #[test]
    fn test_range_without_colon_rejected() {
        assert!(matches!(
            "A1D9".parse::<CellRange>(),
            Err(ConvertError::InvalidCellAddress(_))
        ));
    }
}
