use std::fmt;

use clap::ValueEnum;

/// Target register for AI message refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tone {
    Professional,
    Casual,
    Flirty,
}

impl Tone {
    /// Lowercase name used inside the refinement prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Flirty => "flirty",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
