use super::Pattern;
use crate::{Cell, Error, Result};

/// Largest `x * y` accepted from a header.
const MAX_CELLS: usize = 1 << 26;

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidPattern(msg.into())
}

/// Parses `x = W, y = H[, rule = R]`, returning `(W, H)`.
fn parse_header(line: &str) -> Result<(usize, usize)> {
    let (mut width, mut height) = (None, None);
    for item in line.split(',') {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| invalid(format!("malformed header item {:?}", item.trim())))?;
        let value = value.trim();
        let parse_dim = |v: &str| {
            v.parse::<usize>()
                .map_err(|_| invalid(format!("bad dimension {:?}", v)))
        };
        match key.trim() {
            "x" => width = Some(parse_dim(value)?),
            "y" => height = Some(parse_dim(value)?),
            "rule" => {
                let rule = value.to_ascii_uppercase();
                if rule != "B3/S23" && rule != "23/3" {
                    return Err(Error::UnsupportedRule(value.to_string()));
                }
            }
            other => return Err(invalid(format!("unknown header key {:?}", other))),
        }
    }
    let (w, h) = match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(invalid("header must give positive `x` and `y`")),
    };
    match w.checked_mul(h) {
        Some(area) if area <= MAX_CELLS => Ok((w, h)),
        _ => Err(invalid(format!(
            "{}x{} pattern exceeds {} cells",
            w, h, MAX_CELLS
        ))),
    }
}

/// Returns the pattern described by the RLE `data`.
pub fn parse_rle(data: &[u8]) -> Result<Pattern> {
    let text = std::str::from_utf8(data).map_err(|_| invalid("RLE data is not UTF-8"))?;
    // skipping comment lines
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    let (width, height) = parse_header(lines.next().ok_or_else(|| invalid("missing header"))?)?;

    let mut cells = vec![Cell::Dead; width * height];
    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, None::<usize>);
    let mut finished = false;
    'outer: for line in lines {
        for c in line.bytes() {
            match c {
                b'0'..=b'9' => {
                    let digit = (c - b'0') as usize;
                    cnt = Some(
                        cnt.unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|v| v.checked_add(digit))
                            .ok_or_else(|| invalid("run count overflow"))?,
                    );
                }
                b'o' | b'b' => {
                    let run = cnt.take().unwrap_or(1);
                    let end = x.checked_add(run).filter(|&end| end <= width);
                    let Some(end) = end.filter(|_| y < height) else {
                        return Err(invalid(format!(
                            "run at ({}, {}) exceeds the {}x{} header bounds",
                            y, x, height, width
                        )));
                    };
                    if c == b'o' {
                        cells[y * width + x..y * width + end].fill(Cell::Alive);
                    }
                    x = end;
                }
                b'$' => {
                    // rows past the bottom only fail once a run lands there
                    let rows = cnt.take().unwrap_or(1);
                    (x, y) = (0, y.saturating_add(rows));
                }
                b'!' => {
                    finished = true;
                    break 'outer;
                }
                b' ' | b'\t' => {}
                _ => return Err(invalid(format!("unexpected symbol {:?}", c as char))),
            }
        }
    }
    if !finished {
        return Err(invalid("missing terminating `!`"));
    }
    Pattern::from_cells(width, cells)
}
