use crate::{Cell, Rule, MAX_COORDINATE};
use anyhow::{anyhow, Context, Result};

/// Pattern read from an RLE file.
///
/// Cells are relative to the top left corner of the declared box, `y` grows
/// downwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RlePattern {
    pub width: u64,
    pub height: u64,
    /// Rule from the header, if present.
    pub rule: Option<Rule>,
    pub cells: Vec<Cell>,
}

/// Largest side of a pattern box that fits into the grid.
const MAX_SIDE: u64 = 2 * MAX_COORDINATE as u64;
/// Largest number of live cells in a parsed pattern.
const MAX_CELLS: u64 = 1 << 24;

/// Parses a pattern in the
/// [RLE format](https://conwaylife.com/wiki/Run_Length_Encoded).
pub fn parse_rle(data: &[u8]) -> Result<RlePattern> {
    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    let start = i.min(data.len());
    let header_end = data[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(data.len(), |p| start + p);
    let header = std::str::from_utf8(&data[start..header_end])
        .context("RLE header is not valid UTF-8")?;

    let (mut width, mut height, mut rule) = (None, None, None);
    for field in header.split(',') {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("malformed RLE header field {:?}", field))?;
        let value = value.trim();
        match name.trim() {
            "x" => width = Some(value.parse::<u64>().context("bad pattern width")?),
            "y" => height = Some(value.parse::<u64>().context("bad pattern height")?),
            "rule" => rule = Some(value.parse::<Rule>().context("bad pattern rule")?),
            other => return Err(anyhow!("unknown RLE header field {:?}", other)),
        }
    }
    let width = width.context("RLE header has no width")?;
    let height = height.context("RLE header has no height")?;
    if width > MAX_SIDE || height > MAX_SIDE {
        return Err(anyhow!(
            "pattern box {}x{} exceeds {}x{}",
            width,
            height,
            MAX_SIDE,
            MAX_SIDE
        ));
    }

    // run-length encoded pattern data
    let mut cells = vec![];
    let (mut x, mut y, mut cnt) = (0u64, 0u64, None::<u64>);
    for &b in data.get(header_end..).unwrap_or_default() {
        let run = cnt.unwrap_or(1);
        match b {
            b'0'..=b'9' => {
                cnt = cnt
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|c| c.checked_add((b - b'0') as u64));
                if cnt.is_none() {
                    return Err(anyhow!("run count overflow"));
                }
                continue;
            }
            b'o' => {
                if x.saturating_add(run) > width {
                    return Err(anyhow!("row {} is wider than {}", y, width));
                }
                if cells.len() as u64 + run > MAX_CELLS {
                    return Err(anyhow!("pattern has more than {} cells", MAX_CELLS));
                }
                cells.extend((x..x + run).map(|cx| Cell::new(cx as i64, y as i64)));
                x += run;
            }
            b'b' => x = x.saturating_add(run),
            b'$' => (x, y) = (0, y.saturating_add(run)),
            b'!' => break,
            b if b.is_ascii_whitespace() => continue,
            b => return Err(anyhow!("unexpected symbol {:?}", b as char)),
        }
        cnt = None;
        if y >= height && !(b == b'$' && y == height) {
            return Err(anyhow!("pattern is taller than {}", height));
        }
    }

    Ok(RlePattern {
        width,
        height,
        rule,
        cells,
    })
}

fn push_run(tokens: &mut Vec<String>, len: u64, symbol: char) {
    match len {
        0 => {}
        1 => tokens.push(symbol.to_string()),
        _ => tokens.push(format!("{}{}", len, symbol)),
    }
}

/// Writes `cells` as RLE, with the top left corner of their bounding box as
/// the origin.
pub fn to_rle<I: IntoIterator<Item = Cell>>(cells: I, rule: &Rule) -> String {
    const MAX_LINE: usize = 70;

    let mut cells = cells.into_iter().collect::<Vec<_>>();
    cells.sort_by_key(|c| (c.y, c.x));
    cells.dedup();
    if cells.is_empty() {
        return format!("x = 0, y = 0, rule = {}\n!\n", rule);
    }

    let min_x = cells.iter().map(|c| c.x).min().unwrap_or_default();
    let max_x = cells.iter().map(|c| c.x).max().unwrap_or_default();
    let (min_y, max_y) = (cells[0].y, cells[cells.len() - 1].y);

    let mut tokens = vec![];
    let (mut row, mut col, mut alive) = (min_y, min_x, 0);
    for c in &cells {
        if c.y != row || c.x != col {
            push_run(&mut tokens, alive, 'o');
            alive = 0;
            if c.y != row {
                push_run(&mut tokens, (c.y - row) as u64, '$');
                (row, col) = (c.y, min_x);
            }
            push_run(&mut tokens, (c.x - col) as u64, 'b');
        }
        alive += 1;
        col = c.x + 1;
    }
    push_run(&mut tokens, alive, 'o');
    tokens.push("!".to_string());

    let mut result = format!(
        "x = {}, y = {}, rule = {}\n",
        max_x - min_x + 1,
        max_y - min_y + 1,
        rule
    );
    let mut line_len = 0;
    for t in tokens {
        if line_len + t.len() > MAX_LINE {
            result.push('\n');
            line_len = 0;
        }
        line_len += t.len();
        result += &t;
    }
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &[u8] = b"#N Glider\n#C A comment\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";

    #[test]
    fn test_parse_glider() {
        let pattern = parse_rle(GLIDER).unwrap();
        assert_eq!((pattern.width, pattern.height), (3, 3));
        assert_eq!(pattern.rule, Some(Rule::conway()));
        let expected = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)].map(|(x, y)| Cell::new(x, y));
        assert_eq!(pattern.cells, expected);
    }

    #[test]
    fn test_parse_without_rule() {
        let pattern = parse_rle(b"x = 4, y = 3\n4o2$o2bo!").unwrap();
        assert_eq!(pattern.rule, None);
        assert_eq!(pattern.cells.len(), 6);
        assert!(pattern.cells.contains(&Cell::new(3, 2)));
        assert!(!pattern.cells.iter().any(|c| c.y == 1));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_rle(b"").is_err());
        assert!(parse_rle(b"x = 3\nooo!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\nooo!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\no$o!").is_err());
        assert!(parse_rle(b"x = 2, y = 2, rule = B9/S23\no!").is_err());
        assert!(parse_rle(b"x = 2, y = 2\noz!").is_err());
    }

    #[test]
    fn test_huge_patterns_are_rejected() {
        assert!(parse_rle(b"x = 9999999999999, y = 1\n9999999999999o!").is_err());
        assert!(parse_rle(b"x = 1, y = 9999999999999\no!").is_err());

        let long_row = format!("x = {}, y = 1\n{}o!", MAX_SIDE, MAX_SIDE);
        let err = parse_rle(long_row.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("cells"));
    }

    #[test]
    fn test_glider_survives_writing() {
        let pattern = parse_rle(GLIDER).unwrap();
        let text = to_rle(pattern.cells.iter().copied(), &Rule::conway());
        assert_eq!(text, "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n");
        assert_eq!(parse_rle(text.as_bytes()).unwrap(), pattern);
    }

    #[test]
    fn test_write_empty_and_offset() {
        assert_eq!(
            to_rle(std::iter::empty(), &Rule::seeds()),
            "x = 0, y = 0, rule = B2/S\n!\n"
        );
        let cells = [Cell::new(-10, 5), Cell::new(-7, 8)];
        assert_eq!(
            to_rle(cells, &Rule::conway()),
            "x = 4, y = 4, rule = B3/S23\no3$3bo!\n"
        );
    }
}
