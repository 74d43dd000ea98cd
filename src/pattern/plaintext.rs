use super::Pattern;
use crate::{Cell, Error, Result};

/// Rows shorter than the widest one are padded with dead cells.
pub fn parse_plaintext(data: &str) -> Result<Pattern> {
    let rows = data
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.starts_with('!'))
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, c)| match c {
                    '.' => Ok(Cell::Dead),
                    'O' | '*' => Ok(Cell::Alive),
                    _ => Err(Error::InvalidPattern(format!(
                        "unexpected symbol {:?} at row {}, column {}",
                        c, y, x
                    ))),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    // trailing blank lines carry no cells
    let height = rows.iter().rposition(|r| !r.is_empty()).map_or(0, |y| y + 1);
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut cells = vec![Cell::Dead; width * height];
    for (y, row) in rows.iter().take(height).enumerate() {
        cells[y * width..y * width + row.len()].copy_from_slice(row);
    }
    Pattern::from_cells(width, cells)
}
