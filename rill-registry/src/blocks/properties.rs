/// Names of the block state properties the registry knows about.
pub struct BlockStateProperties;

impl BlockStateProperties {
    /// Fluid level: `0` for a source, higher values further from it.
    pub const LEVEL: &'static str = "level";
}
