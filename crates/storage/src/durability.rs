//! Durability mode for file-backed stores.
//!
//! Defines when a file store forces its writes to disk.

/// Durability mode for file store writes.
///
/// Every write replaces the store file through a temp file and rename, so
/// the file is never half-written. The mode controls whether the data is also
/// fsynced before the write returns.
///
/// # Mode Comparison
///
/// | Mode | Cost | Survives |
/// |------|------|----------|
/// | Buffered | write + rename | process crash |
/// | Strict | write + fsync + rename | power loss |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurabilityMode {
    /// Leave flushing to the OS page cache.
    ///
    /// A crash of the process loses nothing; a crash of the machine may lose
    /// the most recent writes.
    #[default]
    Buffered,

    /// fsync after every write (slow, maximum durability).
    ///
    /// Use when losing the last write is unacceptable.
    Strict,
}

impl DurabilityMode {
    /// Check if this mode requires fsync on every write.
    pub fn requires_fsync(&self) -> bool {
        matches!(self, DurabilityMode::Strict)
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            DurabilityMode::Buffered => "Buffered writes (fast, survives process crash)",
            DurabilityMode::Strict => "Sync fsync (safest, slowest)",
        }
    }
}
