//! Cumulative GC-skew computation and minimum localization.
//!
//! The GC-skew curve is the running difference between cumulative `G` and `C`
//! counts along a genome. In circular bacterial genomes the global minimum of
//! this curve is a heuristic signal for the origin of replication.
//!
//! # Example
//!
//! ```rust
//! use oriscan::genome::Genome;
//! use oriscan::skew::{find_minima, skew_curve};
//!
//! let genome = Genome::from_fasta_text("GGCC");
//! let curve = skew_curve(&genome);
//! assert_eq!(curve, vec![0, 1, 2, 1, 0]);
//!
//! let minima = find_minima(&curve)?;
//! assert_eq!(minima.value, 0);
//! assert_eq!(minima.positions, vec![0, 4]);
//! # Ok::<(), oriscan::error::EmptyCurveError>(())
//! ```

use std::cmp::Ordering;

use crate::{error::EmptyCurveError, genome::Genome};

/// Computes the cumulative GC-skew curve for a genome.
///
/// Single left-to-right pass starting at 0: `G` adds 1, `C` subtracts 1, all
/// other bases leave the running total unchanged. The running total is
/// appended after each base, so the curve has length `genome.len() + 1` with
/// the first entry fixed at 0. Adjacent entries differ by at most 1.
///
/// Total over every genome, including the empty one (curve `[0]`).
#[must_use]
pub fn skew_curve(genome: &Genome) -> Vec<i64> {
    let mut curve = Vec::with_capacity(genome.len() + 1);
    let mut running = 0_i64;
    curve.push(running);

    for &base in genome.as_bytes() {
        match base {
            b'G' => running += 1,
            b'C' => running -= 1,
            _ => {}
        }
        curve.push(running);
    }

    curve
}

/// All curve indices attaining the global minimum, plus that minimum value.
///
/// `positions` is non-empty and strictly ascending whenever construction via
/// [`find_minima`] succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaSet {
    /// Indices into the skew curve equal to the global minimum, ascending.
    pub positions: Vec<usize>,
    /// The global minimum skew value (may be negative).
    pub value: i64,
}

impl MinimaSet {
    /// Returns the earliest index attaining the minimum.
    ///
    /// This is the tie-break the analysis pipeline uses to pick the origin
    /// candidate.
    #[must_use]
    pub fn first(&self) -> usize {
        self.positions.first().copied().unwrap_or_default()
    }
}

/// Finds the global minimum of a skew curve and every index attaining it.
///
/// Single pass tracking the running minimum: a strictly smaller value resets
/// the accumulated index list, a tie appends. Indices are therefore returned
/// in ascending order.
///
/// # Errors
///
/// Returns [`EmptyCurveError`] if `curve` is empty. [`skew_curve`] never
/// produces an empty curve, so this is unreachable through the pipeline, but
/// the operation defends against misuse when called directly.
pub fn find_minima(curve: &[i64]) -> Result<MinimaSet, EmptyCurveError> {
    let (&head, rest) = curve.split_first().ok_or(EmptyCurveError)?;

    let mut value = head;
    let mut positions = vec![0];

    for (i, &skew) in rest.iter().enumerate() {
        match skew.cmp(&value) {
            Ordering::Less => {
                value = skew;
                positions.clear();
                positions.push(i + 1);
            }
            Ordering::Equal => positions.push(i + 1),
            Ordering::Greater => {}
        }
    }

    Ok(MinimaSet { positions, value })
}
