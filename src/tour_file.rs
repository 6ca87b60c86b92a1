//! Plain-text tour files.
//!
//! Layout: line 1 is the city count, line 2 the space-separated city
//! indices in visiting order. The closing edge is implicit and not
//! written. Reloading a saved tour and recomputing its cost against the
//! same matrix reproduces the saved cost.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::cost::is_permutation;
use crate::error::{AtspError, Result};

/// Writes `tour` in the two-line layout.
pub fn write_tour<W: Write>(mut writer: W, tour: &[usize]) -> Result<()> {
    writeln!(writer, "{}", tour.len())?;
    let line = tour
        .iter()
        .map(|city| city.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "{line}")?;
    Ok(())
}

/// Reads a tour in the two-line layout and checks it is a permutation of
/// `0..count`.
pub fn read_tour<R: BufRead>(reader: R) -> Result<Vec<usize>> {
    let mut lines = reader.lines();

    let header = next_content_line(&mut lines)?
        .ok_or_else(|| AtspError::MalformedTour("missing city count".into()))?;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|e| AtspError::MalformedTour(format!("bad city count {header:?}: {e}")))?;

    let body = next_content_line(&mut lines)?.unwrap_or_default();
    let tour = body
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|e| AtspError::MalformedTour(format!("bad city index {token:?}: {e}")))
        })
        .collect::<Result<Vec<usize>>>()?;

    if tour.len() != count {
        return Err(AtspError::MalformedTour(format!(
            "header announces {count} cities, found {}",
            tour.len()
        )));
    }
    if !is_permutation(&tour, count) {
        return Err(AtspError::MalformedTour(
            "tour does not visit every city exactly once".into(),
        ));
    }
    Ok(tour)
}

/// Skips blank lines.
fn next_content_line<I>(lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

/// Saves `tour` to `path`, replacing any existing file.
pub fn save_tour(path: impl AsRef<Path>, tour: &[usize]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_tour(&mut writer, tour)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), cities = tour.len(), "tour saved");
    Ok(())
}

/// Loads a tour saved by [`save_tour`].
pub fn load_tour(path: impl AsRef<Path>) -> Result<Vec<usize>> {
    read_tour(BufReader::new(File::open(path)?))
}
