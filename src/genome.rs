//! # Genome
//!
//! A `Genome` is a fixed-width bitstring: the chromosome of one individual.
//! Its width is chosen per run (`gene_length`) and may exceed any native integer,
//! so the bits are kept in little-endian 64-bit limbs. Every constructor and
//! every operation keeps bits at positions `>= width` cleared.
//!
//! ## Example
//!
//! ```rust
//! use bitgenalg::genome::Genome;
//!
//! let a: Genome = "00001111".parse().unwrap();
//! let b = Genome::from_u64(8, 0b1010_1010).unwrap();
//!
//! assert_eq!(format!("{:b}", a.xor(&b)), "10100101");
//! assert_eq!(a.count_ones(), 4);
//! assert_eq!(format!("{:b}", a.complement()), "11110000");
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

const LIMB_BITS: usize = 64;

fn limb_count(width: usize) -> usize {
    width.div_ceil(LIMB_BITS)
}

/// Mask of the bits of the most significant limb that lie inside `width`.
fn top_limb_mask(width: usize) -> u64 {
    match width % LIMB_BITS {
        0 => u64::MAX,
        rem => (1u64 << rem) - 1,
    }
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 {
        return Err(GeneticError::Configuration(
            "gene_length must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// A fixed-width unsigned bitstring.
///
/// With the `serde` feature, deserialization goes through [`Genome::from_limbs`],
/// so a decoded genome upholds the same invariants as a constructed one.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGenome")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome {
    width: usize,
    limbs: Vec<u64>,
}

/// Unchecked wire form of a [`Genome`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGenome {
    width: usize,
    limbs: Vec<u64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGenome> for Genome {
    type Error = GeneticError;

    fn try_from(raw: RawGenome) -> Result<Self> {
        Genome::from_limbs(raw.width, raw.limbs)
    }
}

impl Genome {
    /// Creates an all-zero genome of `width` bits.
    pub fn zero(width: usize) -> Result<Self> {
        check_width(width)?;
        Ok(Self {
            width,
            limbs: vec![0; limb_count(width)],
        })
    }

    /// Creates a `width`-bit genome whose lowest `bits` bits are set.
    pub fn low_mask(width: usize, bits: usize) -> Result<Self> {
        if bits > width {
            return Err(GeneticError::OutOfBounds(format!(
                "Cannot set {} low bits in a {}-bit genome",
                bits, width
            )));
        }

        let mut mask = Self::zero(width)?;
        let full = bits / LIMB_BITS;
        mask.limbs[..full].iter_mut().for_each(|limb| *limb = u64::MAX);
        let rem = bits % LIMB_BITS;
        if rem > 0 {
            mask.limbs[full] = (1u64 << rem) - 1;
        }
        Ok(mask)
    }

    /// Creates a `width`-bit genome holding `value`.
    pub fn from_u64(width: usize, value: u64) -> Result<Self> {
        Self::from_u128(width, u128::from(value))
    }

    /// Creates a `width`-bit genome holding `value`.
    ///
    /// Fails with [`GeneticError::OutOfBounds`] when `value` needs more than `width` bits.
    pub fn from_u128(width: usize, value: u128) -> Result<Self> {
        let mut genome = Self::zero(width)?;
        if width < 128 && value >> width != 0 {
            return Err(GeneticError::OutOfBounds(format!(
                "{} does not fit in {} bits",
                value, width
            )));
        }

        genome.limbs[0] = value as u64;
        if let Some(second) = genome.limbs.get_mut(1) {
            *second = (value >> LIMB_BITS) as u64;
        }
        Ok(genome)
    }

    /// Creates a genome from little-endian limbs.
    pub fn from_limbs(width: usize, limbs: Vec<u64>) -> Result<Self> {
        check_width(width)?;
        if limbs.len() != limb_count(width) {
            return Err(GeneticError::OutOfBounds(format!(
                "A {}-bit genome needs {} limbs, got {}",
                width,
                limb_count(width),
                limbs.len()
            )));
        }
        if limbs.last().map_or(false, |last| last & !top_limb_mask(width) != 0) {
            return Err(GeneticError::OutOfBounds(format!(
                "Limbs carry bits beyond position {}",
                width - 1
            )));
        }
        Ok(Self { width, limbs })
    }

    /// Draws a genome uniformly from `[0, 2^width - 1]`.
    pub fn random(width: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let mut genome = Self::zero(width)?;
        genome
            .limbs
            .iter_mut()
            .for_each(|limb| *limb = rng.next_limb());
        genome.clear_excess_bits();
        Ok(genome)
    }

    /// Returns the bit width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the little-endian limbs.
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Returns the bit at `index`; bits outside the width read as `false`.
    pub fn bit(&self, index: usize) -> bool {
        index < self.width && (self.limbs[index / LIMB_BITS] >> (index % LIMB_BITS)) & 1 == 1
    }

    /// Sets the bit at `index`.
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        if index >= self.width {
            return Err(GeneticError::OutOfBounds(format!(
                "Bit {} is outside a {}-bit genome",
                index, self.width
            )));
        }

        let limb = &mut self.limbs[index / LIMB_BITS];
        let bit = 1u64 << (index % LIMB_BITS);
        if value {
            *limb |= bit;
        } else {
            *limb &= !bit;
        }
        Ok(())
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.limbs.iter().map(|limb| limb.count_ones() as usize).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Returns the value as `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.limbs[1..]
            .iter()
            .all(|&limb| limb == 0)
            .then(|| self.limbs[0])
    }

    /// Returns the value as `u128` if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.limbs.len() > 2 && self.limbs[2..].iter().any(|&limb| limb != 0) {
            return None;
        }
        let high = self.limbs.get(1).copied().unwrap_or(0);
        Some(u128::from(high) << LIMB_BITS | u128::from(self.limbs[0]))
    }

    /// Returns the value as the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.limbs
            .iter()
            .rev()
            .fold(0.0, |acc, &limb| acc * 18_446_744_073_709_551_616.0 + limb as f64)
    }

    /// Bitwise AND.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn and(&self, other: &Genome) -> Genome {
        self.zip_limbs(other, |a, b| a & b)
    }

    /// Bitwise OR.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn or(&self, other: &Genome) -> Genome {
        self.zip_limbs(other, |a, b| a | b)
    }

    /// Bitwise XOR.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn xor(&self, other: &Genome) -> Genome {
        self.zip_limbs(other, |a, b| a ^ b)
    }

    /// Bitwise complement within the width.
    pub fn complement(&self) -> Genome {
        let mut flipped = Genome {
            width: self.width,
            limbs: self.limbs.iter().map(|limb| !limb).collect(),
        };
        flipped.clear_excess_bits();
        flipped
    }

    /// Fails with [`GeneticError::WidthMismatch`] unless the width equals `expected`.
    pub fn ensure_width(&self, expected: usize) -> Result<()> {
        if self.width != expected {
            return Err(GeneticError::WidthMismatch {
                expected,
                found: self.width,
            });
        }
        Ok(())
    }

    fn zip_limbs(&self, other: &Genome, op: impl Fn(u64, u64) -> u64) -> Genome {
        assert_eq!(
            self.width, other.width,
            "bitwise operation on genomes of different widths"
        );
        Genome {
            width: self.width,
            limbs: self
                .limbs
                .iter()
                .zip(&other.limbs)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }

    fn clear_excess_bits(&mut self) {
        let mask = top_limb_mask(self.width);
        if let Some(last) = self.limbs.last_mut() {
            *last &= mask;
        }
    }
}

impl BitAnd for &Genome {
    type Output = Genome;

    fn bitand(self, rhs: &Genome) -> Genome {
        self.and(rhs)
    }
}

impl BitOr for &Genome {
    type Output = Genome;

    fn bitor(self, rhs: &Genome) -> Genome {
        self.or(rhs)
    }
}

impl BitXor for &Genome {
    type Output = Genome;

    fn bitxor(self, rhs: &Genome) -> Genome {
        self.xor(rhs)
    }
}

impl Not for &Genome {
    type Output = Genome;

    fn not(self) -> Genome {
        self.complement()
    }
}

/// Formats the genome as exactly `width` binary digits, most significant first.
impl fmt::Binary for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = (0..self.width)
            .rev()
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect();
        f.pad(&digits)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

/// Parses a string of `0`/`1` digits, most significant first. The width is the
/// number of digits.
impl FromStr for Genome {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let mut genome = Genome::zero(s.len())?;
        for (i, c) in s.chars().rev().enumerate() {
            match c {
                '0' => {}
                '1' => genome.set_bit(i, true)?,
                other => {
                    return Err(GeneticError::OutOfBounds(format!(
                        "Invalid binary digit '{}' in genome string",
                        other
                    )))
                }
            }
        }
        Ok(genome)
    }
}

/// A genome paired with the score its evaluator assigned in one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGenome {
    pub genome: Genome,
    pub score: f64,
}

impl ScoredGenome {
    pub fn new(genome: Genome, score: f64) -> Self {
        Self { genome, score }
    }
}
