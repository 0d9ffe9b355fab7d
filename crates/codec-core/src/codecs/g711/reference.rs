//! G.711 scalar reference routines
//!
//! Bit-exact A-law and μ-law conversions as published in the ITU-T Software
//! Tools Library. The lookup tables in [`super::tables`] are generated from
//! these functions, so any change here changes every block conversion.
//!
//! ### A-law
//! - 13 MSBs of the input are used, sign folded by 1's complement
//! - even bits of the result are toggled (XOR 0x55)
//!
//! ### μ-law
//! - 14 MSBs of the input are used with a bias of 33
//! - the result is inverted

/// Compress a 16-bit linear sample to an 8-bit A-law code
pub fn alaw_compress(sample: i16) -> u8 {
    let mut ix = if sample < 0 {
        (((!sample) as u16) >> 4) as i16
    } else {
        sample >> 4
    };

    if ix > 15 {
        let mut iexp = 1;
        while ix > 16 + 15 {
            ix >>= 1;
            iexp += 1;
        }
        ix -= 16;
        ix += iexp << 4;
    }

    if sample >= 0 {
        ix |= 0x0080;
    }

    (ix ^ 0x0055) as u8
}

/// Expand an 8-bit A-law code to a 16-bit linear sample
pub fn alaw_expand(code: u8) -> i16 {
    let ix = ((code ^ 0x55) & 0x7F) as i16;
    let iexp = ix >> 4;
    let mut mant = ix & 0x000F;

    if iexp > 0 {
        mant += 16;
    }

    mant = (mant << 4) + 0x0008;

    if iexp > 1 {
        mant <<= iexp - 1;
    }

    if code > 127 { mant } else { -mant }
}

/// Compress a 16-bit linear sample to an 8-bit μ-law code
pub fn ulaw_compress(sample: i16) -> u8 {
    let absno = if sample < 0 {
        (((!sample) as u16) >> 2) as i16 + 33
    } else {
        (sample >> 2) + 33
    }
    .min(0x1FFF);

    let mut i = absno >> 6;
    let mut segno = 1;
    while i != 0 {
        segno += 1;
        i >>= 1;
    }

    let high_nibble = 0x0008 - segno;
    let low_nibble = 0x000F - ((absno >> segno) & 0x000F);
    let mut code = (high_nibble << 4) | low_nibble;

    if sample >= 0 {
        code |= 0x0080;
    }

    code as u8
}

/// Expand an 8-bit μ-law code to a 16-bit linear sample
pub fn ulaw_expand(code: u8) -> i16 {
    let sign = if code < 0x80 { -1 } else { 1 };
    let inverted = (!code) as i16;
    let exponent = (inverted >> 4) & 0x0007;
    let mantissa = inverted & 0x000F;
    let step = 4 << (exponent + 1);

    sign * ((0x0080 << exponent) + step * mantissa + step / 2 - 4 * 33)
}
