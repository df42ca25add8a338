use rill_utils::Identifier;

/// Fluid id, using vanilla's raw registry numbering for the source fluids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FluidId(pub u16);

impl FluidId {
    /// Water (vanilla id 2).
    pub const WATER: FluidId = FluidId(2);
    /// Lava (vanilla id 4).
    pub const LAVA: FluidId = FluidId(4);
}

/// What happens when a fluid tries to flow into a cell holding another fluid.
///
/// The product depends only on the resident cell: a source (level 0) turns into
/// `source_product`, any flowing cell into `flowing_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRule {
    /// The fluid that must occupy the target cell.
    pub resident: FluidId,
    /// Block written when the resident cell is a source.
    pub source_product: Identifier,
    /// Block written when the resident cell is flowing.
    pub flowing_product: Identifier,
}

/// Immutable per-fluid parameters.
///
/// Passed by reference into every engine call; nothing in the engine reads a
/// global fluid table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluidType {
    /// Registry id.
    pub id: FluidId,
    /// The block that represents a cell of this fluid.
    pub block: Identifier,
    /// Highest level a cell may hold. Cells at this level never spread.
    pub max_level: u8,
    /// Ticks between a cell being created and it spreading.
    pub step_delay_ticks: u32,
    /// Reaction applied when spreading into a cell of another fluid.
    pub reaction: Option<ReactionRule>,
}

impl FluidType {
    /// Returns true if `level` still allows this fluid to spread.
    #[must_use]
    pub const fn can_spread_from(&self, level: u8) -> bool {
        level < self.max_level
    }

    /// The reaction rule that applies against `resident`, if any.
    #[must_use]
    pub fn reaction_with(&self, resident: FluidId) -> Option<&ReactionRule> {
        self.reaction
            .as_ref()
            .filter(|rule| rule.resident == resident)
    }
}
