//! Diagnostic source positions and position remapping.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A source position reported by the compiler alongside a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Source file the diagnostic refers to
    pub source: Option<PathBuf>,
    /// 1-based line number
    pub line: Option<u32>,
    /// 0-based column within the line
    pub column: Option<u32>,
    /// Character offset from the start of the file
    pub offset: Option<u32>,
    /// Text of the offending line
    pub line_content: String,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}", source.display())?,
            None => write!(f, "<unknown>")?,
        }
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column {
                write!(f, ":{}", column + 1)?;
            }
        }
        Ok(())
    }
}

/// Rewrites diagnostic positions before they are reported.
///
/// Downstream tooling can install one to map generated sources back to
/// their originals.
#[derive(Clone)]
pub struct PositionMapper(Arc<dyn Fn(&Position) -> Position + Send + Sync>);

impl PositionMapper {
    pub fn new(f: impl Fn(&Position) -> Position + Send + Sync + 'static) -> Self {
        PositionMapper(Arc::new(f))
    }

    /// Pass-through mapper.
    pub fn identity() -> Self {
        PositionMapper::new(Position::clone)
    }

    pub fn map(&self, position: &Position) -> Position {
        (self.0)(position)
    }
}

impl Default for PositionMapper {
    fn default() -> Self {
        PositionMapper::identity()
    }
}

impl fmt::Debug for PositionMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PositionMapper(..)")
    }
}
