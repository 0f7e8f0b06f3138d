//! Per-tile flags loaded from `.rules` files.
//!
//! ```text
//! # ids=flags
//! 0,3=solid_block
//! 10-14=solid_block, water
//! ```

use std::collections::HashMap;
use std::path::Path;

use super::TilemapError;

/// Flag marking a tile as completely impassable.
pub const SOLID_BLOCK: &str = "solid_block";

/// Flags set per tile id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileRules {
    flags: HashMap<usize, Vec<String>>,
}

impl TileRules {
    /// Parse rules text: one `ids=flags` entry per line.
    ///
    /// Ids are comma separated; `a-b` expands to the inclusive range. Flags
    /// are comma separated and trimmed. Blank lines and `#` comments are
    /// skipped. Flags for an id accumulate across lines.
    pub fn parse(text: &str) -> Result<Self, TilemapError> {
        let mut flags: HashMap<usize, Vec<String>> = HashMap::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = |message: String| TilemapError::InvalidRule {
                line: index + 1,
                message,
            };

            let (ids, line_flags) = line
                .split_once('=')
                .ok_or_else(|| invalid("expected `ids=flags`".to_string()))?;

            let line_flags: Vec<String> = line_flags
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();

            for id in ids.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let range = parse_id_range(id).map_err(invalid)?;
                for tile_id in range {
                    flags
                        .entry(tile_id)
                        .or_default()
                        .extend(line_flags.iter().cloned());
                }
            }
        }

        Ok(Self { flags })
    }

    /// Load rules from a file. A missing file means no rules.
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Self, TilemapError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No tile rules at {}", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(TilemapError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Flags set for `id` (empty if none).
    pub fn flags(&self, id: usize) -> &[String] {
        self.flags.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_flag(&self, id: usize, flag: &str) -> bool {
        self.flags(id).iter().any(|f| f == flag)
    }

    /// Number of tile ids with at least one rule line.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

fn parse_id_range(id: &str) -> Result<std::ops::RangeInclusive<usize>, String> {
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid tile id {:?}: {}", s.trim(), e))
    };

    match id.split_once('-') {
        Some((first, last)) => {
            let (first, last) = (parse(first)?, parse(last)?);
            if first > last {
                return Err(format!("empty tile range {}-{}", first, last));
            }
            Ok(first..=last)
        }
        None => {
            let single = parse(id)?;
            Ok(single..=single)
        }
    }
}
