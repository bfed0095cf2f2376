//! # Crossover
//!
//! Two operators recombine a pair of parents into a pair of offspring:
//!
//! - **One-point**: a split point `mid` is drawn from `[1, gene_length]` and the
//!   low `mid` bits are swapped between the parents.
//! - **Uniform 8-bit mask**: a random byte selects which of the low 8 bits each
//!   offspring keeps from its own parent; the remaining bits of that window come
//!   from the other parent. Bits above the window are never touched, whatever the
//!   genome width.
//!
//! Each mating event picks one-point crossover with probability 95%.
//!
//! ## Example
//!
//! ```rust
//! use bitgenalg::breeding::crossover::one_point;
//! use bitgenalg::genome::Genome;
//!
//! let a: Genome = "11111111".parse().unwrap();
//! let b: Genome = "00000000".parse().unwrap();
//!
//! let (x, y) = one_point(&a, &b, 3).unwrap();
//! assert_eq!(x.to_string(), "11111000");
//! assert_eq!(y.to_string(), "00000111");
//! ```

use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Percentage of mating events that use one-point crossover.
pub const ONE_POINT_PERCENT: u32 = 95;

/// Width of the uniform crossover window.
pub const UNIFORM_WINDOW_BITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    OnePoint,
    UniformMask,
}

impl Crossover {
    /// Picks an operator: one-point if a draw from `[0, 100)` is below 95.
    pub fn choose(rng: &mut RandomNumberGenerator) -> Self {
        if rng.gen_range(0..100u32) < ONE_POINT_PERCENT {
            Crossover::OnePoint
        } else {
            Crossover::UniformMask
        }
    }

    /// Applies the operator, drawing its split point or mask from `rng`.
    pub fn apply(
        self,
        a: &Genome,
        b: &Genome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome, Genome)> {
        match self {
            Crossover::OnePoint => {
                let mid = rng.gen_range(1..=a.width());
                one_point(a, b, mid)
            }
            Crossover::UniformMask => {
                let mask: u8 = rng.gen_range(0..=u8::MAX);
                uniform_mask(a, b, mask)
            }
        }
    }
}

/// Chooses an operator and applies it.
pub fn crossover(
    a: &Genome,
    b: &Genome,
    rng: &mut RandomNumberGenerator,
) -> Result<(Genome, Genome)> {
    let operator = Crossover::choose(rng);
    trace!(?operator, "crossover");
    operator.apply(a, b, rng)
}

/// Swaps the low `mid` bits of `a` and `b`.
///
/// # Errors
///
/// Fails if the widths differ or `mid` is outside `[1, width]`.
pub fn one_point(a: &Genome, b: &Genome, mid: usize) -> Result<(Genome, Genome)> {
    b.ensure_width(a.width())?;
    if mid == 0 || mid > a.width() {
        return Err(GeneticError::OutOfBounds(format!(
            "Crossover point {} is outside [1, {}]",
            mid,
            a.width()
        )));
    }

    let lmask = Genome::low_mask(a.width(), mid)?;
    let swap = a.xor(b).and(&lmask);
    Ok((a.xor(&swap), b.xor(&swap)))
}

/// Recombines the low 8 bits of `a` and `b` under `mask`.
///
/// Offspring A keeps the bits of `a` selected by `mask` and takes the rest of the
/// window from `b`; offspring B mirrors this. For genomes narrower than 8 bits the
/// window is clipped to the width.
///
/// # Errors
///
/// Fails if the widths differ.
pub fn uniform_mask(a: &Genome, b: &Genome, mask: u8) -> Result<(Genome, Genome)> {
    b.ensure_width(a.width())?;

    let window = Genome::low_mask(a.width(), a.width().min(UNIFORM_WINDOW_BITS))?;
    let keep = Genome::from_u64(a.width(), u64::from(mask) & window.limbs()[0])?;
    let rmask = window.and(&keep.complement());

    let swap = a.xor(b).and(&rmask);
    Ok((a.xor(&swap), b.xor(&swap)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(width: usize, value: u64) -> Genome {
        Genome::from_u64(width, value).unwrap()
    }

    #[test]
    fn test_one_point_swaps_low_bits() {
        let a = genome(8, 0b1111_0000);
        let b = genome(8, 0b1010_1010);
        let (x, y) = one_point(&a, &b, 4).unwrap();
        assert_eq!(x.to_u64(), Some(0b1111_1010));
        assert_eq!(y.to_u64(), Some(0b1010_0000));
    }

    #[test]
    fn test_one_point_full_width_swaps_everything() {
        let a = genome(6, 0b110011);
        let b = genome(6, 0b001100);
        let (x, y) = one_point(&a, &b, 6).unwrap();
        assert_eq!(x, b);
        assert_eq!(y, a);
    }

    #[test]
    fn test_one_point_xor_is_preserved() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        for width in [1, 8, 64, 100] {
            for _ in 0..100 {
                let a = Genome::random(width, &mut rng).unwrap();
                let b = Genome::random(width, &mut rng).unwrap();
                let mid = rng.gen_range(1..=width);
                let (x, y) = one_point(&a, &b, mid).unwrap();
                assert_eq!(x.xor(&y), a.xor(&b));
                assert_eq!(x.width(), width);
            }
        }
    }

    #[test]
    fn test_one_point_rejects_bad_point() {
        let a = genome(8, 1);
        let b = genome(8, 2);
        assert!(one_point(&a, &b, 0).is_err());
        assert!(one_point(&a, &b, 9).is_err());
    }

    #[test]
    fn test_width_mismatch() {
        let a = genome(8, 1);
        let b = genome(9, 2);
        assert!(matches!(
            one_point(&a, &b, 1),
            Err(GeneticError::WidthMismatch { .. })
        ));
        assert!(matches!(
            uniform_mask(&a, &b, 0x0f),
            Err(GeneticError::WidthMismatch { .. })
        ));
    }

    #[test]
    fn test_uniform_mask_on_a_byte() {
        let a = genome(8, 0b1100_1100);
        let b = genome(8, 0b1010_1010);
        let (x, y) = uniform_mask(&a, &b, 0b1111_0000).unwrap();
        assert_eq!(x.to_u64(), Some(0b1100_1010));
        assert_eq!(y.to_u64(), Some(0b1010_1100));
    }

    #[test]
    fn test_uniform_mask_leaves_high_bits_alone() {
        let mut rng = RandomNumberGenerator::from_seed(23);
        for width in [9, 16, 64, 130] {
            let above = Genome::low_mask(width, 8).unwrap().complement();
            for _ in 0..100 {
                let a = Genome::random(width, &mut rng).unwrap();
                let b = Genome::random(width, &mut rng).unwrap();
                let mask: u8 = rng.gen_range(0..=u8::MAX);
                let (x, y) = uniform_mask(&a, &b, mask).unwrap();
                assert_eq!(x.and(&above), a.and(&above));
                assert_eq!(y.and(&above), b.and(&above));
            }
        }
    }

    #[test]
    fn test_uniform_mask_narrow_genome_stays_in_range() {
        let a = genome(3, 0b101);
        let b = genome(3, 0b010);
        let (x, y) = uniform_mask(&a, &b, 0).unwrap();
        assert_eq!(x, b);
        assert_eq!(y, a);

        let (x, y) = uniform_mask(&a, &b, 0xff).unwrap();
        assert_eq!(x, a);
        assert_eq!(y, b);
    }

    #[test]
    fn test_choose_ratio() {
        let mut rng = RandomNumberGenerator::from_seed(99);
        let draws = 20_000;
        let one_point = (0..draws)
            .filter(|_| Crossover::choose(&mut rng) == Crossover::OnePoint)
            .count();
        let freq = one_point as f64 / draws as f64;
        assert!((freq - 0.95).abs() < 0.01, "one-point frequency was {}", freq);
    }

    #[test]
    fn test_crossover_on_single_bit_genomes() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let a = genome(1, 1);
        let b = genome(1, 0);
        for _ in 0..100 {
            let (x, y) = crossover(&a, &b, &mut rng).unwrap();
            assert_eq!(x.width(), 1);
            assert_eq!(x.xor(&y), a.xor(&b));
        }
    }
}
