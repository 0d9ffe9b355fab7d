//! G.726 State Management
//!
//! One [`G726State`] holds everything an encoder or a decoder carries from
//! one sample to the next. Encoder and decoder never share a state; a tandem
//! chain owns two.

/// Initial value of the steady-state step size multiplier (`yl`)
pub const YL_RESET: i32 = 34816;

/// Initial and minimum value of the transient step size multiplier (`yu`)
pub const YU_MIN: i16 = 544;

/// Maximum value of the transient step size multiplier (`yu`)
pub const YU_MAX: i16 = 5120;

/// Floating-point zero (exponent 0, mantissa 32) used for `dq` and `sr`
pub const FLOAT_ZERO: i16 = 32;

/// Adaptive predictor and quantizer state for one G.726 stage
///
/// Field widths follow the 16-bit registers of ITU-T G.726; arithmetic on
/// them is done in `i32` and truncated on store, as the recommendation's
/// two's complement registers do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G726State {
    /// Locked (steady state) step size multiplier
    pub yl: i32,
    /// Unlocked (transient) step size multiplier
    pub yu: i16,
    /// Short term energy estimate
    pub dms: i16,
    /// Long term energy estimate
    pub dml: i16,
    /// Speed control: weighting of `yu` against `yl`
    pub ap: i16,
    /// Pole predictor coefficients (a1, a2)
    pub a: [i16; 2],
    /// Zero predictor coefficients (b1..b6)
    pub b: [i16; 6],
    /// Signs of the last two partial reconstructed signals
    pub pk: [i16; 2],
    /// Last six quantized differences, 4-bit exponent / 6-bit mantissa floats
    pub dq: [i16; 6],
    /// Last two reconstructed signals, same float format as `dq`
    pub sr: [i16; 2],
    /// Delayed tone detect
    pub td: bool,
}

impl G726State {
    /// Create a state holding the reset values
    pub fn new() -> Self {
        Self {
            yl: YL_RESET,
            yu: YU_MIN,
            dms: 0,
            dml: 0,
            ap: 0,
            a: [0; 2],
            b: [0; 6],
            pk: [0; 2],
            dq: [FLOAT_ZERO; 6],
            sr: [FLOAT_ZERO; 2],
            td: false,
        }
    }

    /// Reinitialize predictor and quantizer to the reset values
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether this state still holds the reset values
    pub fn is_reset(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for G726State {
    fn default() -> Self {
        Self::new()
    }
}
