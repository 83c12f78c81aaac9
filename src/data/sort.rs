use std::cmp::Ordering;

use super::model::Column;

// ---------------------------------------------------------------------------
// Cell comparison for table sorting
// ---------------------------------------------------------------------------

/// Sort key derived from a cell's display text.
///
/// Text made only of ASCII digits with at most one `.` is compared as a
/// number; anything else (including a sign or exponent) compares as
/// case-sensitive text. A brand that happens to be all digits therefore sorts
/// numerically. When a column mixes both kinds, numbers come first.
#[derive(Debug, Clone, PartialEq)]
pub enum CellKey {
    Number(f64),
    Text(String),
}

impl CellKey {
    pub fn parse(text: &str) -> Self {
        if looks_numeric(text) {
            if let Ok(v) = text.parse::<f64>() {
                return CellKey::Number(v);
            }
        }
        CellKey::Text(text.to_string())
    }
}

impl Eq for CellKey {}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellKey::Number(a), CellKey::Number(b)) => a.total_cmp(b),
            (CellKey::Text(a), CellKey::Text(b)) => a.cmp(b),
            (CellKey::Number(_), CellKey::Text(_)) => Ordering::Less,
            (CellKey::Text(_), CellKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Digits with at most one decimal point, e.g. `20000`, `4.5`, `.5`, `3.`.
fn looks_numeric(text: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Compare two cells of the same column.
///
/// Every column uses the same policy; the column is taken so callers never
/// need to know that.
pub fn compare_cells(_column: Column, a: &str, b: &str) -> Ordering {
    CellKey::parse(a).cmp(&CellKey::parse(b))
}

/// Reorder displayed rows by one column, ascending.
///
/// Sorting again on the same column does not reverse the order. The sort is
/// stable, so rows with equal cells keep their current relative order.
pub fn sort_rows<T, F>(rows: &mut [T], column: Column, cell_text: F)
where
    F: Fn(&T, Column) -> String,
{
    rows.sort_by_cached_key(|row| CellKey::parse(&cell_text(row, column)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_is_compared_as_numbers() {
        assert_eq!(compare_cells(Column::Price, "9000", "20000"), Ordering::Less);
        assert_eq!(compare_cells(Column::Safety, "4.5", "4.25"), Ordering::Greater);
        assert_eq!(compare_cells(Column::Mpg, "35", "35.0"), Ordering::Equal);
    }

    #[test]
    fn other_text_is_compared_case_sensitively() {
        assert_eq!(compare_cells(Column::Model, "Civic", "accord"), Ordering::Less);
        assert_eq!(compare_cells(Column::Brand, "Ford", "Honda"), Ordering::Less);
    }

    #[test]
    fn signs_and_extra_dots_are_text() {
        assert_eq!(CellKey::parse("-5"), CellKey::Text("-5".into()));
        assert_eq!(CellKey::parse("1.2.3"), CellKey::Text("1.2.3".into()));
        assert_eq!(CellKey::parse("1e5"), CellKey::Text("1e5".into()));
        assert_eq!(CellKey::parse("."), CellKey::Text(".".into()));
        assert_eq!(CellKey::parse(""), CellKey::Text(String::new()));
        assert_eq!(CellKey::parse(".5"), CellKey::Number(0.5));
    }

    #[test]
    fn all_digit_brand_sorts_numerically() {
        // "911" < "1000" as numbers, though "1000" < "911" as text.
        assert_eq!(compare_cells(Column::Brand, "911", "1000"), Ordering::Less);
    }

    #[test]
    fn numbers_sort_before_text() {
        assert_eq!(compare_cells(Column::Brand, "999", "Audi"), Ordering::Less);
    }

    #[test]
    fn sort_rows_is_ascending_and_does_not_toggle() {
        let mut rows = vec![("A", "30000"), ("B", "20000"), ("C", "25000")];
        let cell = |row: &(&str, &str), col: Column| match col {
            Column::Price => row.1.to_string(),
            _ => row.0.to_string(),
        };

        sort_rows(&mut rows, Column::Price, cell);
        assert_eq!(rows, [("B", "20000"), ("C", "25000"), ("A", "30000")]);

        sort_rows(&mut rows, Column::Price, cell);
        assert_eq!(rows, [("B", "20000"), ("C", "25000"), ("A", "30000")]);
    }

    #[test]
    fn sort_rows_is_stable() {
        let mut rows = vec![("Z", "1"), ("A", "1"), ("M", "0")];
        sort_rows(&mut rows, Column::Price, |row, _| row.1.to_string());
        assert_eq!(rows, [("M", "0"), ("Z", "1"), ("A", "1")]);
    }
}
