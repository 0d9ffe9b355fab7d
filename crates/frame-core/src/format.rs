//! Format classification
//!
//! Maps (mode, law) to the representation of the samples read and written,
//! and to the conversions the transcoder must insert around the codec stages.
//!
//! | mode   | law = linear     | law = A/μ     |
//! |--------|------------------|---------------|
//! | both   | linear → linear  | log → log     |
//! | encode | linear → ADPCM   | log → ADPCM   |
//! | decode | ADPCM → linear   | ADPCM → log   |

use crate::config::{Law, Mode};
use codec_core::CompandingLaw;
use std::fmt;

/// What a 16-bit sample word holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRepresentation {
    /// Linear PCM sample
    Linear,
    /// G.711 code in the low byte
    Logarithmic,
    /// G.726 code word in the low 2..5 bits
    Adpcm,
}

impl fmt::Display for SampleRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "log"),
            Self::Adpcm => write!(f, "ADPCM"),
        }
    }
}

/// Processing path of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPlan {
    /// Representation of the samples read from the source
    pub input: SampleRepresentation,
    /// Representation of the samples written to the sink
    pub output: SampleRepresentation,
    /// Law the codec stages and the companding steps use
    pub codec_law: CompandingLaw,
}

impl FormatPlan {
    /// Classify a (mode, law) pair
    pub fn classify(mode: Mode, law: Law) -> Self {
        let samples = if law.is_linear() {
            SampleRepresentation::Linear
        } else {
            SampleRepresentation::Logarithmic
        };

        let (input, output) = match mode {
            Mode::Both => (samples, samples),
            Mode::Encode => (samples, SampleRepresentation::Adpcm),
            Mode::Decode => (SampleRepresentation::Adpcm, samples),
        };

        Self {
            input,
            output,
            codec_law: law.codec_law(),
        }
    }

    /// Whether each frame is companded linear → log after reading
    pub fn compress_input(&self) -> bool {
        self.input == SampleRepresentation::Linear
    }

    /// Whether each frame is expanded log → linear before writing
    pub fn expand_output(&self) -> bool {
        self.output == SampleRepresentation::Linear
    }
}

impl fmt::Display for FormatPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.input, self.output, self.codec_law)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SampleRepresentation::*;

    #[test]
    fn test_classification_table() {
        let cases = [
            (Mode::Both, Law::Linear, Linear, Linear),
            (Mode::Both, Law::A, Logarithmic, Logarithmic),
            (Mode::Both, Law::Mu, Logarithmic, Logarithmic),
            (Mode::Encode, Law::Linear, Linear, Adpcm),
            (Mode::Encode, Law::A, Logarithmic, Adpcm),
            (Mode::Encode, Law::Mu, Logarithmic, Adpcm),
            (Mode::Decode, Law::Linear, Adpcm, Linear),
            (Mode::Decode, Law::A, Adpcm, Logarithmic),
            (Mode::Decode, Law::Mu, Adpcm, Logarithmic),
        ];

        for (mode, law, input, output) in cases {
            let plan = FormatPlan::classify(mode, law);
            assert_eq!(plan.input, input, "{mode} / {law}");
            assert_eq!(plan.output, output, "{mode} / {law}");
        }
    }

    #[test]
    fn test_conversion_flags() {
        let plan = FormatPlan::classify(Mode::Both, Law::Linear);
        assert!(plan.compress_input() && plan.expand_output());
        assert_eq!(plan.codec_law, CompandingLaw::ALaw);

        let plan = FormatPlan::classify(Mode::Encode, Law::Linear);
        assert!(plan.compress_input() && !plan.expand_output());

        let plan = FormatPlan::classify(Mode::Decode, Law::Linear);
        assert!(!plan.compress_input() && plan.expand_output());

        let plan = FormatPlan::classify(Mode::Both, Law::Mu);
        assert!(!plan.compress_input() && !plan.expand_output());
        assert_eq!(plan.codec_law, CompandingLaw::MuLaw);
    }

    #[test]
    fn test_plan_display() {
        let plan = FormatPlan::classify(Mode::Encode, Law::Linear);
        assert_eq!(plan.to_string(), "linear -> ADPCM (A-law)");
    }
}
