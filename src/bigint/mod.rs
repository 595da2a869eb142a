//! Arbitrary-precision sign-magnitude integer arithmetic
//!
//! This is the numeric foundation for the curve engine: every coordinate,
//! scalar, and modulus in the crate is a [`BigInt`]. The magnitude is stored
//! as 32-bit limbs, least-significant first, and is kept canonical at all
//! times: no superfluous high zero limbs, zero is a single zero limb, and
//! zero is never negative. Because the representation is always canonical,
//! properties like [`BigInt::is_zero`] are cheap reads rather than cached
//! flags.
//!
//! All operations take `&self` and return new values. Nothing here is
//! constant-time; the signing layer above is responsible for not leaking
//! secrets through its own control flow where that matters.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

#[cfg(test)]
mod tests;

/// Arbitrary-precision signed integer (sign-magnitude, 32-bit limbs)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    /// Magnitude limbs, least-significant first, always trimmed
    limbs: Vec<u32>,
    /// Sign flag; never set when the magnitude is zero
    negative: bool,
}

impl BigInt {
    /// The value zero
    pub fn zero() -> Self {
        BigInt {
            limbs: vec![0],
            negative: false,
        }
    }

    /// The value one
    pub fn one() -> Self {
        BigInt {
            limbs: vec![1],
            negative: false,
        }
    }

    /// Construct from a `u32`
    pub fn from_u32(value: u32) -> Self {
        BigInt {
            limbs: vec![value],
            negative: false,
        }
    }

    /// Construct from a `u64`
    pub fn from_u64(value: u64) -> Self {
        Self::from_mag(vec![value as u32, (value >> 32) as u32], false)
    }

    /// Construct a non-negative value from big-endian bytes
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len() / 4 + 1);
        let mut iter = bytes.rchunks(4);
        for chunk in &mut iter {
            let mut limb = 0u32;
            for &b in chunk {
                limb = (limb << 8) | b as u32;
            }
            limbs.push(limb);
        }
        Self::from_mag(limbs, false)
    }

    /// Parse a hexadecimal string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self> {
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if s.is_empty() {
            return Err(Error::param("BigInt hex string", "empty input"));
        }
        let mut acc = Self::zero();
        for c in s.chars() {
            let digit = c
                .to_digit(16)
                .ok_or_else(|| Error::param("BigInt hex string", "invalid hex digit"))?;
            acc = acc.shl_bits(4).add(&Self::from_u32(digit));
        }
        acc.negative = negative && !acc.is_zero();
        Ok(acc)
    }

    /// Parse a decimal string
    pub fn from_decimal(s: &str) -> Result<Self> {
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if s.is_empty() {
            return Err(Error::param("BigInt decimal string", "empty input"));
        }
        let ten = Self::from_u32(10);
        let mut acc = Self::zero();
        for c in s.chars() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| Error::param("BigInt decimal string", "invalid decimal digit"))?;
            acc = acc.mul(&ten).add(&Self::from_u32(digit));
        }
        acc.negative = negative && !acc.is_zero();
        Ok(acc)
    }

    /// Serialize the magnitude as big-endian bytes
    ///
    /// Zero serializes as a single `0x00` byte. The sign is not encoded;
    /// callers that care about it check [`BigInt::is_negative`].
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.limbs.len() * 4);
        for limb in self.limbs.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let skip = out
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(out.len() - 1);
        out.drain(..skip);
        out
    }

    /// Serialize the magnitude as big-endian bytes, left-padded to `width`
    ///
    /// Values wider than `width` keep only the `width` least-significant
    /// bytes; callers serializing reduced field elements never hit that path.
    pub fn to_bytes_be_padded(&self, width: usize) -> Vec<u8> {
        let raw = self.to_bytes_be();
        if raw.len() >= width {
            return raw[raw.len() - width..].to_vec();
        }
        let mut out = vec![0u8; width - raw.len()];
        out.extend_from_slice(&raw);
        out
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Is this value one?
    pub fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Is this value even?
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Is this value strictly negative?
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Bit length of the magnitude (zero has length 0)
    pub fn bits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let top = self.limbs[self.limbs.len() - 1];
        (self.limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize)
    }

    /// Value of magnitude bit `index` (LSB = 0); out-of-range bits are 0
    pub fn bit(&self, index: usize) -> bool {
        let limb = index / 32;
        if limb >= self.limbs.len() {
            return false;
        }
        (self.limbs[limb] >> (index % 32)) & 1 == 1
    }

    /// Negation; zero stays non-negative
    pub fn neg(&self) -> Self {
        let mut out = self.clone();
        out.negative = !out.negative && !out.is_zero();
        out
    }

    /// Signed addition
    pub fn add(&self, other: &Self) -> Self {
        if self.negative == other.negative {
            return Self::from_mag(Self::add_mag(&self.limbs, &other.limbs), self.negative);
        }
        // Opposite signs: subtract the smaller magnitude from the larger,
        // result takes the sign of the larger operand.
        match self.cmp_mag(other) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_mag(Self::sub_mag(&self.limbs, &other.limbs), self.negative)
            }
            Ordering::Less => {
                Self::from_mag(Self::sub_mag(&other.limbs, &self.limbs), other.negative)
            }
        }
    }

    /// Signed subtraction
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Signed schoolbook multiplication
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if other.is_one() {
            return self.clone();
        }
        if self.is_one() {
            return other.clone();
        }
        let mut acc = vec![0u32; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.limbs.iter().enumerate() {
                let t = a as u64 * b as u64 + acc[i + j] as u64 + carry;
                acc[i + j] = t as u32;
                carry = t >> 32;
            }
            acc[i + other.limbs.len()] = carry as u32;
        }
        Self::from_mag(acc, self.negative != other.negative)
    }

    /// Left shift of the magnitude by `count` bits
    pub fn shl_bits(&self, count: usize) -> Self {
        if count == 0 || self.is_zero() {
            return self.clone();
        }
        let limb_shift = count / 32;
        let bit_shift = count % 32;
        let mut limbs = vec![0u32; limb_shift];
        if bit_shift == 0 {
            limbs.extend_from_slice(&self.limbs);
        } else {
            let mut carry = 0u32;
            for &limb in &self.limbs {
                limbs.push((limb << bit_shift) | carry);
                carry = limb >> (32 - bit_shift);
            }
            if carry != 0 {
                limbs.push(carry);
            }
        }
        Self::from_mag(limbs, self.negative)
    }

    /// Right shift of the magnitude by `count` bits
    pub fn shr_bits(&self, count: usize) -> Self {
        if count == 0 || self.is_zero() {
            return self.clone();
        }
        let limb_shift = count / 32;
        if limb_shift >= self.limbs.len() {
            return Self::zero();
        }
        let bit_shift = count % 32;
        let src = &self.limbs[limb_shift..];
        let limbs = if bit_shift == 0 {
            src.to_vec()
        } else {
            let mut limbs = Vec::with_capacity(src.len());
            for i in 0..src.len() {
                let mut limb = src[i] >> bit_shift;
                if i + 1 < src.len() {
                    limb |= src[i + 1] << (32 - bit_shift);
                }
                limbs.push(limb);
            }
            limbs
        };
        Self::from_mag(limbs, self.negative)
    }

    /// Truncating division: returns `(quotient, remainder)`
    ///
    /// The remainder carries the sign of the dividend; the quotient sign is
    /// the XOR of the operand signs. Division by zero is a fatal error.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::param("BigInt divisor", "division by zero"));
        }
        let (q_mag, r_mag) = Self::div_rem_mag(self, divisor);
        let mut quotient = q_mag;
        quotient.negative = (self.negative != divisor.negative) && !quotient.is_zero();
        let mut remainder = r_mag;
        remainder.negative = self.negative && !remainder.is_zero();
        Ok((quotient, remainder))
    }

    /// Euclidean reduction into `[0, modulus)`
    ///
    /// `modulus` must be strictly positive. A negative receiver is corrected
    /// by one addition of the modulus, so the result is a canonical residue.
    pub fn rem_euclid(&self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() || modulus.negative {
            return Err(Error::param("BigInt modulus", "modulus must be positive"));
        }
        let (_, r_mag) = Self::div_rem_mag(self, modulus);
        if self.negative && !r_mag.is_zero() {
            return Ok(modulus.sub(&r_mag));
        }
        Ok(r_mag)
    }

    /// Modular multiplication: `self * other mod modulus`
    pub fn mod_mul(&self, other: &Self, modulus: &Self) -> Result<Self> {
        self.mul(other).rem_euclid(modulus)
    }

    /// Modular multiplicative inverse
    ///
    /// Extended-Euclid with two accumulator pairs: `(low, lm)` and
    /// `(high, hm)` maintain `low ≡ lm·self` and `high ≡ hm·self (mod m)`.
    /// A non-invertible input (gcd ≠ 1) is a fatal error rather than the
    /// undefined result some implementations produce; for the prime moduli
    /// used by the curve engine this path is unreachable from valid inputs.
    pub fn mod_inv(&self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() || modulus.negative {
            return Err(Error::param("BigInt modulus", "modulus must be positive"));
        }
        let mut low = self.rem_euclid(modulus)?;
        if low.is_zero() {
            return Err(Error::param("BigInt inverse", "zero has no inverse"));
        }
        let mut lm = Self::one();
        let mut hm = Self::zero();
        let mut high = modulus.clone();
        while !low.is_zero() && !low.is_one() {
            let (ratio, _) = high.div_rem(&low)?;
            let nm = hm.sub(&lm.mul(&ratio));
            let new_low = high.sub(&low.mul(&ratio));
            hm = lm;
            high = low;
            lm = nm;
            low = new_low;
        }
        if !low.is_one() {
            return Err(Error::param(
                "BigInt inverse",
                "value is not invertible for this modulus",
            ));
        }
        lm.rem_euclid(modulus)
    }

    /// Compare magnitudes only, ignoring signs
    pub fn cmp_mag(&self, other: &Self) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        // Most-significant limbs decide first
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Canonicalize a limb vector into a `BigInt`
    fn from_mag(mut limbs: Vec<u32>, negative: bool) -> Self {
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        let is_zero = limbs.len() == 1 && limbs[0] == 0;
        BigInt {
            limbs,
            negative: negative && !is_zero,
        }
    }

    /// Magnitude addition with 64-bit carry propagation
    fn add_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let mut out = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u64;
        for i in 0..long.len() {
            let rhs = if i < short.len() { short[i] as u64 } else { 0 };
            let sum = long[i] as u64 + rhs + carry;
            out.push(sum as u32);
            carry = sum >> 32;
        }
        if carry != 0 {
            out.push(carry as u32);
        }
        out
    }

    /// Magnitude subtraction, requires `a >= b`
    ///
    /// Per-limb borrow detection uses the `2^32` bias trick: adding the bias
    /// before subtracting keeps the intermediate non-negative in 64 bits.
    fn sub_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
        debug_assert!(a.len() >= b.len());
        let mut out = Vec::with_capacity(a.len());
        let mut borrow = 0u64;
        for i in 0..a.len() {
            let rhs = if i < b.len() { b[i] as u64 } else { 0 };
            let diff = 0x1_0000_0000u64 + a[i] as u64 - rhs - borrow;
            out.push(diff as u32);
            borrow = u64::from(diff < 0x1_0000_0000);
        }
        debug_assert_eq!(borrow, 0, "sub_mag called with a < b");
        out
    }

    /// Restoring binary division on magnitudes
    ///
    /// Doubles a trial divisor and a unit quotient together until the trial
    /// exceeds the dividend, then halves both, subtracting whenever the
    /// trial fits and accumulating the quotient.
    fn div_rem_mag(num: &Self, den: &Self) -> (Self, Self) {
        debug_assert!(!den.is_zero());
        if num.cmp_mag(den) == Ordering::Less {
            let mut rem = num.clone();
            rem.negative = false;
            return (Self::zero(), rem);
        }
        let mut trial = Self::from_mag(den.limbs.clone(), false);
        let mut unit = Self::one();
        let mut rem = Self::from_mag(num.limbs.clone(), false);
        while trial.cmp_mag(&rem) != Ordering::Greater {
            trial = trial.shl_bits(1);
            unit = unit.shl_bits(1);
        }
        let mut quot = Self::zero();
        while !unit.is_zero() {
            if trial.cmp_mag(&rem) != Ordering::Greater {
                rem = rem.sub(&trial);
                quot = quot.add(&unit);
            }
            trial = trial.shr_bits(1);
            unit = unit.shr_bits(1);
        }
        (quot, rem)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_mag(other),
            (true, true) => other.cmp_mag(self),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses decimal by default, hexadecimal with a `0x`/`-0x` prefix
    fn from_str(s: &str) -> Result<Self> {
        let body = s.strip_prefix('-').unwrap_or(s);
        if body.starts_with("0x") || body.starts_with("0X") {
            Self::from_hex(s)
        } else {
            Self::from_decimal(s)
        }
    }
}

impl fmt::Display for BigInt {
    /// `0x`-prefixed hexadecimal of the magnitude bytes, `-` for negatives.
    /// Zero renders as `0x00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "0x{}", hex::encode(self.to_bytes_be()))
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.limbs.clear();
        self.limbs.push(0);
        self.negative = false;
    }
}

// Operator sugar over the reference methods

impl std::ops::Add for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl std::ops::Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl std::ops::Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}
