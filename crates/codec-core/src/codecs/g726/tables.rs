//! G.726 quantization tables
//!
//! One set per bit rate: decision levels of the adaptive quantizer, the
//! inverse quantizer output (log domain), the scale factor multipliers `W(I)`
//! (already multiplied by 32) and the speed control values `F(I)`.

use crate::types::BitRate;

/// Tables driving one G.726 bit rate
#[derive(Debug)]
pub struct RateTables {
    /// Rate these tables belong to
    pub rate: BitRate,
    /// Quantizer decision levels, log domain, positive half only
    pub qtab: &'static [i32],
    /// Inverse quantizer output per code word
    pub dqlntab: &'static [i32],
    /// Scale factor multiplier per code word
    pub witab: &'static [i32],
    /// Speed control function per code word
    pub fitab: &'static [i32],
    /// Whether code 0 is a valid positive code (even number of levels)
    pub zero_code: bool,
}

impl RateTables {
    /// Tables for `rate`
    pub fn for_rate(rate: BitRate) -> &'static RateTables {
        match rate {
            BitRate::Kbps16 => &TABLES_16,
            BitRate::Kbps24 => &TABLES_24,
            BitRate::Kbps32 => &TABLES_32,
            BitRate::Kbps40 => &TABLES_40,
        }
    }

    /// Sign bit of a code word
    pub fn sign_bit(&self) -> i32 {
        1 << (self.rate.code_bits() - 1)
    }

    /// Shift of the zero predictor leakage (2^-9 at 40 kbit/s, 2^-8 otherwise)
    pub fn leak_shift(&self) -> u32 {
        if self.rate == BitRate::Kbps40 { 9 } else { 8 }
    }
}

static TABLES_16: RateTables = RateTables {
    rate: BitRate::Kbps16,
    qtab: &[261],
    dqlntab: &[116, 365, 365, 116],
    witab: &[-704, 14048, 14048, -704],
    fitab: &[0, 0xE00, 0xE00, 0],
    zero_code: true,
};

static TABLES_24: RateTables = RateTables {
    rate: BitRate::Kbps24,
    qtab: &[8, 218, 331],
    dqlntab: &[-2048, 135, 273, 373, 373, 273, 135, -2048],
    witab: &[-128, 960, 4384, 18624, 18624, 4384, 960, -128],
    fitab: &[0, 0x200, 0x400, 0xE00, 0xE00, 0x400, 0x200, 0],
    zero_code: false,
};

static TABLES_32: RateTables = RateTables {
    rate: BitRate::Kbps32,
    qtab: &[-124, 80, 178, 246, 300, 349, 400],
    dqlntab: &[
        -2048, 4, 135, 213, 273, 323, 373, 425, 425, 373, 323, 273, 213, 135, 4, -2048,
    ],
    witab: &[
        -384, 576, 1312, 2048, 3584, 6336, 11360, 35904, 35904, 11360, 6336, 3584, 2048, 1312,
        576, -384,
    ],
    fitab: &[
        0, 0, 0, 0x200, 0x200, 0x200, 0x600, 0xE00, 0xE00, 0x600, 0x200, 0x200, 0x200, 0, 0, 0,
    ],
    zero_code: false,
};

static TABLES_40: RateTables = RateTables {
    rate: BitRate::Kbps40,
    qtab: &[
        -122, -16, 68, 139, 198, 250, 298, 339, 378, 413, 445, 475, 502, 528, 553,
    ],
    dqlntab: &[
        -2048, -66, 28, 104, 169, 224, 274, 318, 358, 395, 429, 459, 488, 514, 539, 566, 566, 539,
        514, 488, 459, 429, 395, 358, 318, 274, 224, 169, 104, 28, -66, -2048,
    ],
    witab: &[
        448, 448, 768, 1248, 1280, 1312, 1856, 3200, 4512, 5728, 7008, 8960, 11456, 14080, 16928,
        22272, 22272, 16928, 14080, 11456, 8960, 7008, 5728, 4512, 3200, 1856, 1312, 1280, 1248,
        768, 448, 448,
    ],
    fitab: &[
        0, 0, 0, 0, 0, 0x200, 0x200, 0x200, 0x200, 0x200, 0x400, 0x600, 0x800, 0xA00, 0xC00,
        0xC00, 0xC00, 0xC00, 0xA00, 0x800, 0x600, 0x400, 0x200, 0x200, 0x200, 0x200, 0x200, 0, 0,
        0, 0, 0,
    ],
    zero_code: false,
};
