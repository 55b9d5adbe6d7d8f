//! Tile file names encode their grid cell as `<col>_<row>.<ext>`.

use std::fmt;

/// A 1-indexed grid cell. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePosition {
    pub col: usize,
    pub row: usize,
}

impl TilePosition {
    /// Returns `None` when either coordinate is zero.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        (col > 0 && row > 0).then_some(Self { col, row })
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Lenient leading-integer parse.
///
/// Skips leading ASCII whitespace, accepts an optional sign, then reads decimal
/// digits until the first non-digit. Anything after the digits is ignored, so
/// `"12abc"` is 12. A string with no leading digits is 0. Negative values also
/// come back as 0, and values too large for `usize` saturate.
///
/// This is deliberately not `str::parse`: tiles named `"7x_2.png"` are
/// accepted as column 7.
pub fn lenient_parse(s: &str) -> usize {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\u{0b}');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: usize = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(usize::from(b - b'0'));
    }

    if negative { 0 } else { value }
}

/// Extracts the grid cell from a tile file name.
///
/// The column is everything before the first `_`; the row is everything
/// between that `_` and the first `.` after it. Returns `None` when either
/// separator is missing or either number is not positive. The extension is
/// not checked here; undecodable files fail later, at decode time.
pub fn parse_coordinates(file_name: &str) -> Option<TilePosition> {
    let underscore = file_name.find('_')?;
    let dot = underscore + 1 + file_name[underscore + 1..].find('.')?;

    let col = lenient_parse(&file_name[..underscore]);
    let row = lenient_parse(&file_name[underscore + 1..dot]);
    TilePosition::new(col, row)
}
