//! G.726 ADPCM building blocks
//!
//! Fixed-point functional blocks of ITU-T G.726: adaptive predictor,
//! adaptive quantizer and inverse quantizer, scale factor adaptation, speed
//! control, tone detection and the synchronous coding adjustment of the
//! decoder. Block names from the recommendation are given in the comments.

use crate::codecs::g711;
use crate::codecs::g726::state::{G726State, YU_MAX, YU_MIN};
use crate::codecs::g726::tables::RateTables;
use crate::types::CompandingLaw;

const POWER2: [i32; 15] = [
    1, 2, 4, 8, 0x10, 0x20, 0x40, 0x80, 0x100, 0x200, 0x400, 0x800, 0x1000, 0x2000, 0x4000,
];

/// Truncate to a 16-bit register
#[inline]
fn reg16(value: i32) -> i32 {
    value as i16 as i32
}

/// Index of the first table entry greater than `value`
#[inline]
fn quan(value: i32, table: &[i32]) -> i32 {
    table.iter().position(|&level| value < level).unwrap_or(table.len()) as i32
}

/// Convert a magnitude to the 4-bit exponent / 6-bit mantissa float format
#[inline]
fn to_float(magnitude: i32) -> i32 {
    let exp = quan(magnitude, &POWER2);
    (exp << 6) + ((magnitude << 6) >> exp)
}

/// FMULT: multiply a predictor coefficient by a float-format signal
fn fmult(an: i32, srn: i32) -> i32 {
    let anmag = if an > 0 { an } else { (-an) & 0x1FFF };
    let anexp = quan(anmag, &POWER2) - 6;
    let anmant = if anmag == 0 {
        32
    } else if anexp >= 0 {
        anmag >> anexp
    } else {
        anmag << -anexp
    };
    let wanexp = anexp + ((srn >> 6) & 0xF) - 13;
    let wanmant = (anmant * (srn & 0o77) + 0x30) >> 4;
    let retval = if wanexp >= 0 {
        (wanmant << wanexp) & 0x7FFF
    } else {
        wanmant >> -wanexp
    };

    if (an ^ srn) < 0 { -retval } else { retval }
}

/// Signal estimates produced by the adaptive predictor for one sample
#[derive(Debug, Clone, Copy)]
pub(crate) struct Estimate {
    /// Zero-section estimate (SEZ)
    pub sez: i32,
    /// Full signal estimate (SE)
    pub se: i32,
    /// Quantizer scale factor (Y)
    pub y: i32,
}

impl G726State {
    /// Sixth order zero section of the predictor
    fn predictor_zero(&self) -> i32 {
        self.b
            .iter()
            .zip(&self.dq)
            .map(|(&b, &dq)| fmult(i32::from(b) >> 2, i32::from(dq)))
            .sum()
    }

    /// Second order pole section of the predictor
    fn predictor_pole(&self) -> i32 {
        fmult(i32::from(self.a[1]) >> 2, i32::from(self.sr[1]))
            + fmult(i32::from(self.a[0]) >> 2, i32::from(self.sr[0]))
    }

    /// MIX: quantizer scale factor from the locked and unlocked multipliers
    fn step_size(&self) -> i32 {
        let yu = i32::from(self.yu);
        if self.ap >= 256 {
            return yu;
        }
        let mut y = self.yl >> 6;
        let dif = yu - y;
        let al = i32::from(self.ap) >> 2;
        if dif > 0 {
            y += (dif * al) >> 6;
        } else if dif < 0 {
            y += (dif * al + 0x3F) >> 6;
        }
        y
    }

    /// Run the predictor and scale factor for the next sample
    pub(crate) fn estimate(&self) -> Estimate {
        let sezi = reg16(self.predictor_zero());
        let sei = reg16(sezi + self.predictor_pole());
        Estimate {
            sez: sezi >> 1,
            se: sei >> 1,
            y: reg16(self.step_size()),
        }
    }

    /// Adapt every predictor and quantizer variable after one sample
    ///
    /// `dq` is the quantized difference in sign-magnitude form (negative
    /// values carry the sign in bit 15), `sr` the reconstructed signal and
    /// `dqsez` the partial reconstructed signal.
    pub(crate) fn update(&mut self, tables: &RateTables, code: usize, y: i32, dq: i32, sr: i32, dqsez: i32) {
        let wi = tables.witab[code];
        let fi = tables.fitab[code];
        let pk0: i16 = if dqsez < 0 { 1 } else { 0 };
        let mag = dq & 0x7FFF;

        // TRANS: transition detector
        let ylint = self.yl >> 15;
        let ylfrac = (self.yl >> 10) & 0x1F;
        let thr1 = (32 + ylfrac) << ylint;
        let thr2 = if ylint > 9 { 31 << 10 } else { thr1 };
        let dqthr = (thr2 + (thr2 >> 1)) >> 1;
        let tr = self.td && mag > dqthr;

        // FUNCTW, FILTD, LIMB: unlocked scale factor
        let yu = (y + ((wi - y) >> 5)).clamp(i32::from(YU_MIN), i32::from(YU_MAX));
        self.yu = yu as i16;

        // FILTE: locked scale factor
        self.yl += yu + ((-self.yl) >> 6);

        let mut a2p = 0;
        if tr {
            // modem signal: predictor is cleared
            self.a = [0; 2];
            self.b = [0; 6];
        } else {
            let a1 = i32::from(self.a[0]);
            let a2 = i32::from(self.a[1]);
            let pks1 = pk0 ^ self.pk[0];

            // UPA2
            a2p = a2 - (a2 >> 7);
            if dqsez != 0 {
                let fa1 = if pks1 != 0 { a1 } else { -a1 };
                if fa1 < -8191 {
                    a2p -= 0x100;
                } else if fa1 > 8191 {
                    a2p += 0xFF;
                } else {
                    a2p += fa1 >> 5;
                }

                // LIMC
                if pk0 ^ self.pk[1] != 0 {
                    if a2p <= -12160 {
                        a2p = -12288;
                    } else if a2p >= 12416 {
                        a2p = 12288;
                    } else {
                        a2p -= 0x80;
                    }
                } else if a2p <= -12416 {
                    a2p = -12288;
                } else if a2p >= 12160 {
                    a2p = 12288;
                } else {
                    a2p += 0x80;
                }
            }
            a2p = reg16(a2p);
            self.a[1] = a2p as i16;

            // UPA1
            let mut a1p = a1 - (a1 >> 8);
            if dqsez != 0 {
                if pks1 == 0 {
                    a1p += 192;
                } else {
                    a1p -= 192;
                }
            }

            // LIMD
            let a1ul = 15360 - a2p;
            self.a[0] = a1p.clamp(-a1ul, a1ul) as i16;

            // UPB: zero section coefficients
            let leak = tables.leak_shift();
            for (b, &dqn) in self.b.iter_mut().zip(&self.dq) {
                let mut bn = i32::from(*b);
                bn -= bn >> leak;
                if mag != 0 {
                    if (dq ^ i32::from(dqn)) >= 0 {
                        bn += 128;
                    } else {
                        bn -= 128;
                    }
                }
                *b = bn as i16;
            }
        }

        // FLOAT A: quantized difference into the delay line
        self.dq.copy_within(0..5, 1);
        self.dq[0] = if mag == 0 {
            if dq >= 0 { 0x20 } else { 0x20 - 0x400 }
        } else if dq >= 0 {
            to_float(mag) as i16
        } else {
            (to_float(mag) - 0x400) as i16
        };

        // FLOAT B: reconstructed signal into the delay line
        self.sr[1] = self.sr[0];
        self.sr[0] = if sr == 0 {
            0x20
        } else if sr > 0 {
            to_float(sr) as i16
        } else if sr > -32768 {
            (to_float(-sr) - 0x400) as i16
        } else {
            0x20 - 0x400
        };

        // DELAY A
        self.pk[1] = self.pk[0];
        self.pk[0] = pk0;

        // TONE
        self.td = !tr && a2p < -11776;

        // FILTA, FILTB: short and long term averages of F(I)
        let dms = i32::from(self.dms);
        let dml = i32::from(self.dml);
        let dms = dms + ((fi - dms) >> 5);
        let dml = dml + (((fi << 2) - dml) >> 7);
        self.dms = dms as i16;
        self.dml = dml as i16;

        // SUBTC, FILTC: speed control
        let ap = i32::from(self.ap);
        let ap = if tr {
            256
        } else if y < 1536 || self.td || ((dms << 2) - dml).abs() >= (dml >> 3) {
            ap + ((0x200 - ap) >> 4)
        } else {
            ap + ((-ap) >> 4)
        };
        self.ap = ap as i16;
    }
}

/// Adaptive quantizer: difference signal to code word
pub(crate) fn quantize(d: i32, y: i32, tables: &RateTables) -> i32 {
    let size = tables.qtab.len() as i32;

    // LOG
    let dqm = d.abs();
    let exp = quan(dqm >> 1, &POWER2);
    let mant = ((dqm << 7) >> exp) & 0x7F;
    let dl = (exp << 7) + mant;

    // SUBTB
    let dln = dl - (y >> 2);

    // QUAN
    let i = quan(dln, tables.qtab);
    if d < 0 {
        (size << 1) + 1 - i
    } else if i == 0 && !tables.zero_code {
        (size << 1) + 1
    } else {
        i
    }
}

/// Inverse adaptive quantizer: code word to sign-magnitude difference
pub(crate) fn reconstruct(negative: bool, dqln: i32, y: i32) -> i32 {
    // ADDA
    let dql = dqln + (y >> 2);

    if dql < 0 {
        return if negative { -0x8000 } else { 0 };
    }

    // ANTILOG
    let dex = (dql >> 7) & 15;
    let dqt = 128 + (dql & 127);
    let dq = (dqt << 7) >> (14 - dex);
    if negative { dq - 0x8000 } else { dq }
}

/// ADDB: reconstructed signal from estimate and sign-magnitude difference
#[inline]
pub(crate) fn reconstructed_signal(se: i32, dq: i32) -> i32 {
    reg16(if dq < 0 { se - (dq & 0x3FFF) } else { se + dq })
}

/// Encode one logarithmic sample, returning the code word
pub(crate) fn encode_sample(law: CompandingLaw, code: u8, tables: &RateTables, state: &mut G726State) -> i32 {
    // EXPAND: 14-bit uniform PCM
    let sl = i32::from(g711::expand_sample(law, code)) >> 2;

    let Estimate { sez, se, y } = state.estimate();
    let d = reg16(sl - se);

    let i = quantize(d, y, tables);
    let dq = reg16(reconstruct(i & tables.sign_bit() != 0, tables.dqlntab[i as usize], y));
    let sr = reconstructed_signal(se, dq);
    let dqsez = reg16(sr + sez - se);

    state.update(tables, i as usize, y, dq, sr, dqsez);
    i
}

/// Decode one code word, returning the logarithmic sample
pub(crate) fn decode_sample(law: CompandingLaw, code: i32, tables: &RateTables, state: &mut G726State) -> u8 {
    let i = code & (i32::from(tables.rate.code_mask()));

    let Estimate { sez, se, y } = state.estimate();
    let dq = reg16(reconstruct(i & tables.sign_bit() != 0, tables.dqlntab[i as usize], y));
    let sr = reconstructed_signal(se, dq);
    let dqsez = reg16(sr - se + sez);

    state.update(tables, i as usize, y, dq, sr, dqsez);
    synchronous_adjust(law, sr, se, y, i, tables)
}

/// COMPRESS and SYNC: requantize the reconstructed signal to the output law,
/// nudging the code one step when re-encoding it would not reproduce `i`
fn synchronous_adjust(law: CompandingLaw, sr: i32, se: i32, y: i32, i: i32, tables: &RateTables) -> u8 {
    let linear = match law {
        CompandingLaw::ALaw => {
            let sr = if sr <= -32768 { -1 } else { sr };
            (sr >> 1) << 3
        }
        CompandingLaw::MuLaw => {
            let sr = if sr <= -32768 { 0 } else { sr };
            sr << 2
        }
    };
    let sp = g711::compress_sample(law, linear.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16);

    let dx = reg16((i32::from(g711::expand_sample(law, sp)) >> 2) - se);
    let id = quantize(dx, y, tables);
    if id == i {
        return sp;
    }

    // biased magnitudes: codes ordered from most negative to most positive
    let sign = tables.sign_bit();
    let im = i ^ sign;
    let imx = id ^ sign;
    let lower = imx > im;

    match law {
        CompandingLaw::ALaw => {
            let toggled = sp ^ 0x55;
            match (lower, sp & 0x80 != 0) {
                (true, true) if sp == 0xD5 => 0x55,
                (true, true) => (toggled - 1) ^ 0x55,
                (true, false) if sp == 0x2A => 0x2A,
                (true, false) => (toggled + 1) ^ 0x55,
                (false, true) if sp == 0xAA => 0xAA,
                (false, true) => (toggled + 1) ^ 0x55,
                (false, false) if sp == 0x55 => 0xD5,
                (false, false) => (toggled - 1) ^ 0x55,
            }
        }
        CompandingLaw::MuLaw => match (lower, sp & 0x80 != 0) {
            (true, true) if sp == 0xFF => 0x7E,
            (true, true) => sp + 1,
            (true, false) if sp == 0 => 0,
            (true, false) => sp - 1,
            (false, true) if sp == 0x80 => 0x80,
            (false, true) => sp - 1,
            (false, false) if sp == 0x7F => 0xFE,
            (false, false) => sp + 1,
        },
    }
}
