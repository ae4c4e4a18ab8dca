use crate::error::InvalidInput;
use crate::geom::Rect;
use std::str::FromStr;

/// Parses a comma and/or whitespace separated integer list such as `"1, 2 3"`.
///
/// Blank input is an empty list. An empty slot between commas is a missing
/// element.
pub fn parse_values(input: &str) -> Result<Vec<i64>, InvalidInput> {
    parse_list(input)
}

/// Parses `"x1,y1,x2,y2"` into a validated rectangle.
pub fn parse_rect(input: &str) -> Result<Rect, InvalidInput> {
    let coords: Vec<f64> = parse_list(input)?;
    if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
        return Err(InvalidInput::NonNumeric {
            index,
            token: coords[index].to_string(),
        });
    }
    match coords.as_slice() {
        &[x1, y1, x2, y2] => Rect::from_coords(x1, y1, x2, y2),
        _ => Err(InvalidInput::CoordinateCount {
            expected: 4,
            found: coords.len(),
        }),
    }
}

pub fn rect_from_array(coords: [f64; 4]) -> Result<Rect, InvalidInput> {
    let [x1, y1, x2, y2] = coords;
    Rect::from_coords(x1, y1, x2, y2)
}

fn parse_list<T: FromStr>(input: &str) -> Result<Vec<T>, InvalidInput> {
    let mut out = Vec::new();
    if input.trim().is_empty() {
        return Ok(out);
    }

    for segment in input.split(',') {
        let mut tokens = segment.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(InvalidInput::MissingElement { index: out.len() });
        }
        for token in tokens {
            let value = token.parse().map_err(|_| InvalidInput::NonNumeric {
                index: out.len(),
                token: token.to_string(),
            })?;
            out.push(value);
        }
    }
    Ok(out)
}
