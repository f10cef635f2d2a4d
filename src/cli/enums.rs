//! CLI enum types for resolution presets.

use clap::ValueEnum;

use crate::ascii::ResolutionPreset;

/// Named output width preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resolution {
    /// 80 characters wide, for small terminals
    Low,
    /// 120 characters wide, everyday use
    Medium,
    /// 180 characters wide
    High,
    /// 250 characters wide, for large screens
    Ultra,
    /// 400 characters wide
    Max,
}

impl From<Resolution> for ResolutionPreset {
    fn from(r: Resolution) -> Self {
        match r {
            Resolution::Low => ResolutionPreset::Low,
            Resolution::Medium => ResolutionPreset::Medium,
            Resolution::High => ResolutionPreset::High,
            Resolution::Ultra => ResolutionPreset::Ultra,
            Resolution::Max => ResolutionPreset::Max,
        }
    }
}
