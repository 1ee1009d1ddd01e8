use std::fmt;

const INVALID_ENTRY_DIRECTION_MESSAGE: &str =
    "Attempted to enter a cell from an invalid direction!";
const INVALID_CONFIGURATION_MESSAGE: &str =
    "The current cell variant is invalid for this cell type!";

/// Why a cell could not route an entry direction.
///
/// Each kind carries one fixed message so hosts can surface it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingError {
    /// The entry direction is not wired for the cell's current kind and state.
    InvalidEntryDirection,
    /// The type/variant pairing has no routing table.
    InvalidConfiguration,
}

impl RoutingError {
    pub fn message(self) -> &'static str {
        match self {
            RoutingError::InvalidEntryDirection => INVALID_ENTRY_DIRECTION_MESSAGE,
            RoutingError::InvalidConfiguration => INVALID_CONFIGURATION_MESSAGE,
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for RoutingError {}
