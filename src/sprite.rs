/// Ship sprite loading.
///
/// The ship is drawn from a small text-art file shipped next to the binary.
/// It is read exactly once, before the terminal is put into raw mode, and a
/// missing or unusable file aborts startup.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};

#[derive(Clone, Debug)]
pub struct Sprite {
    rows: Vec<String>,
    width: i32,
    height: i32,
}

impl Sprite {
    /// Parse sprite art.  Rows are right-padded to the widest row so the
    /// sprite occupies a rectangular box; fully empty art is rejected.
    pub fn parse(art: &str) -> Result<Sprite> {
        let rows: Vec<&str> = art.lines().map(|line| line.trim_end()).collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        ensure!(width > 0, "sprite art contains no visible cells");

        let rows: Vec<String> = rows
            .iter()
            .map(|row| format!("{:<1$}", row, width))
            .collect();
        let height = rows.len() as i32;
        Ok(Sprite {
            rows,
            width: width as i32,
            height,
        })
    }

    /// Load sprite art from disk.
    pub fn load(path: &Path) -> Result<Sprite> {
        let art = fs::read_to_string(path)
            .with_context(|| format!("failed to read ship sprite {}", path.display()))?;
        Sprite::parse(&art).with_context(|| format!("bad ship sprite {}", path.display()))
    }

    /// Bounding-box dimensions in cells.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}
