// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;
    fn padding_direction(&self) -> PaddingDirection;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// A plain-text table with unicode-aware column padding.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }

    fn widths(&self, rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name().width()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|data| self.columns.iter().map(|col| col.format(data)).collect())
            .collect();
        let widths = self.widths(&rows);
        let directions: Vec<PaddingDirection> = self
            .columns
            .iter()
            .map(TableColumn::padding_direction)
            .collect();

        let header: Vec<Cow<'_, str>> = self.columns.iter().map(TableColumn::name).collect();
        write_row(f, &directions, &widths, &header, self.separator)?;
        for row in &rows {
            write_row(f, &directions, &widths, row, self.separator)?;
        }
        Ok(())
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    directions: &[PaddingDirection],
    widths: &[usize],
    cells: &[Cow<'_, str>],
    separator: &str,
) -> fmt::Result {
    let last = directions.len().saturating_sub(1);
    for (i, ((direction, width), cell)) in directions.iter().zip(widths).zip(cells).enumerate() {
        // Pad with the display width, not the byte length.
        let pad = width.saturating_sub(cell.width());
        match direction {
            PaddingDirection::Right => write!(f, "{}{}", " ".repeat(pad), cell)?,
            // The last left-aligned column needs no trailing padding.
            PaddingDirection::Left if i == last => write!(f, "{cell}")?,
            PaddingDirection::Left => write!(f, "{}{}", cell, " ".repeat(pad))?,
        }
        if i < last {
            write!(f, "{separator}")?;
        }
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    enum Col {
        Name,
        Count,
    }

    impl TableColumn<Row> for Col {
        fn name(&self) -> Cow<'_, str> {
            match self {
                Col::Name => "Name".into(),
                Col::Count => "Count".into(),
            }
        }

        fn format<'a>(&self, data: &'a Row) -> Cow<'a, str> {
            match self {
                Col::Name => data.0.into(),
                Col::Count => data.1.to_string().into(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                Col::Name => PaddingDirection::Left,
                Col::Count => PaddingDirection::Right,
            }
        }
    }

    #[test]
    fn test_pads_columns_to_the_widest_cell() {
        let columns = [Col::Name, Col::Count];
        let data = [Row("a", 1), Row("longer", 42)];
        let out = Table::new(&columns, &data).to_string();
        assert_eq!(out, "Name    Count\na           1\nlonger     42\n");
    }

    #[test]
    fn test_wide_characters_align() {
        let columns = [Col::Name, Col::Count];
        let data = [Row("你好", 1), Row("abcd", 2)];
        let out = Table::new(&columns, &data).to_string();
        // Both name cells render four columns wide.
        assert_eq!(out, "Name  Count\n你好      1\nabcd      2\n");
    }
}
