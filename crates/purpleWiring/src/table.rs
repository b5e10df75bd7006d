use std::sync::OnceLock;

use crate::data;
use crate::errors::wiring::{MalformedWiringError, OutOfRangeError};
use crate::kind::SwitchKind;

/// The validated wiring of one stepping switch.
///
/// A table holds one permutation row per wiper-arm position. Row `p` answers
/// "at position `p`, which output contact does input contact `c` connect
/// to?"; because switch contacts are symmetric conductors, the same wiring
/// also routes the reverse direction, served by [`Self::inverse_map`] from a
/// per-row inverse permutation precomputed at construction.
///
/// All invariants (row length, bijectivity, non-empty grid) are enforced
/// once by [`Self::new`]; a constructed table is immutable and safe to share
/// across threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringTable {
    kind: SwitchKind,
    rows: Vec<Vec<usize>>,
    inverse: Vec<Vec<usize>>,
}

impl WiringTable {
    /// Builds a table for `kind` from raw grid data, validating that the
    /// grid is non-empty, that every row has exactly
    /// [`contact_count`](SwitchKind::contact_count) entries, and that every
    /// row is a permutation of the contact indices.
    ///
    /// The per-row inverse permutations are computed here as well; the same
    /// pass that fills them detects duplicate and out-of-range outputs.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedWiringError`] naming the first offending row if
    /// any invariant fails. A failed construction yields no table at all, so
    /// callers can trust every constructed table unconditionally.
    pub fn new(kind: SwitchKind, rows: Vec<Vec<usize>>) -> Result<Self, MalformedWiringError> {
        let contact_count = kind.contact_count();

        if rows.is_empty() {
            return Err(MalformedWiringError::EmptyGrid { kind });
        }

        let mut inverse = Vec::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if row.len() != contact_count {
                return Err(MalformedWiringError::RowLength {
                    kind,
                    position,
                    expected: contact_count,
                    actual: row.len(),
                });
            }

            // `contact_count` doubles as the "unset" sentinel: no valid
            // output contact can equal it.
            let mut inv = vec![contact_count; contact_count];
            for (input, &output) in row.iter().enumerate() {
                if output >= contact_count || inv[output] != contact_count {
                    return Err(MalformedWiringError::NotAPermutation {
                        kind,
                        position,
                        contact: output,
                    });
                }
                inv[output] = input;
            }
            // Full length plus no duplicates means every contact appeared,
            // so `inv` is completely filled here.
            inverse.push(inv);
        }

        Ok(Self {
            kind,
            rows,
            inverse,
        })
    }

    /// The switch this table wires.
    #[must_use]
    pub const fn kind(&self) -> SwitchKind {
        self.kind
    }

    /// Number of contacts on the switch (6 or 20).
    #[must_use]
    pub const fn contact_count(&self) -> usize {
        self.kind.contact_count()
    }

    /// Number of wiper positions, derived from the rows actually supplied
    /// (25 for every historical table).
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.rows.len()
    }

    /// Output contact that `input_contact` connects to with the wiper at
    /// `position`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `position` or `input_contact` is
    /// outside the table's domain. That is a bug in the calling stepping
    /// logic, not a condition to recover from.
    pub fn map(&self, position: usize, input_contact: usize) -> Result<usize, OutOfRangeError> {
        let row = self.row(position)?;
        self.check_contact(input_contact)?;
        Ok(row[input_contact])
    }

    /// Input contact that connects to `output_contact` with the wiper at
    /// `position`: the inverse direction of [`Self::map`], served from the
    /// precomputed inverse rows in O(1).
    ///
    /// For every valid `(p, c)`, `inverse_map(p, map(p, c)?)? == c`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] under the same conditions as
    /// [`Self::map`].
    pub fn inverse_map(
        &self,
        position: usize,
        output_contact: usize,
    ) -> Result<usize, OutOfRangeError> {
        if position >= self.position_count() {
            return Err(OutOfRangeError::Position {
                kind: self.kind,
                position,
                position_count: self.position_count(),
            });
        }
        self.check_contact(output_contact)?;
        Ok(self.inverse[position][output_contact])
    }

    /// The full permutation row active at `position`, for callers routing a
    /// whole contact bank at once.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `position` is outside the table's
    /// domain.
    pub fn row(&self, position: usize) -> Result<&[usize], OutOfRangeError> {
        self.rows
            .get(position)
            .map(Vec::as_slice)
            .ok_or(OutOfRangeError::Position {
                kind: self.kind,
                position,
                position_count: self.position_count(),
            })
    }

    fn check_contact(&self, contact: usize) -> Result<(), OutOfRangeError> {
        if contact >= self.contact_count() {
            return Err(OutOfRangeError::Contact {
                kind: self.kind,
                contact,
                contact_count: self.contact_count(),
            });
        }
        Ok(())
    }
}

static TABLES: OnceLock<[WiringTable; 4]> = OnceLock::new();

/// Returns the process-wide wiring table of `kind`, built from the embedded
/// historical grids on first use.
///
/// The grids are compiled-in constants, so a validation failure here means
/// the binary itself carries corrupt data; in that case this panics during
/// initialization rather than letting the machine produce wrong ciphertext.
#[must_use]
pub fn wiring(kind: SwitchKind) -> &'static WiringTable {
    let tables = TABLES.get_or_init(|| {
        [
            embedded(SwitchKind::Sixes, &data::SIXES),
            embedded(SwitchKind::TwentiesI, &data::TWENTIES_I),
            embedded(SwitchKind::TwentiesII, &data::TWENTIES_II),
            embedded(SwitchKind::TwentiesIII, &data::TWENTIES_III),
        ]
    });
    &tables[kind.index()]
}

fn embedded<const W: usize, const P: usize>(
    kind: SwitchKind,
    grid: &[[usize; W]; P],
) -> WiringTable {
    let rows = grid.iter().map(|row| row.to_vec()).collect();
    WiringTable::new(kind, rows)
        .unwrap_or_else(|err| panic!("embedded wiring data for the {kind} switch is corrupt: {err}"))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// A small, obviously valid grid for construction tests: two positions
    /// of a 6-contact switch.
    fn sample_rows() -> Vec<Vec<usize>> {
        vec![vec![1, 0, 2, 4, 3, 5], vec![5, 2, 4, 1, 0, 3]]
    }

    #[test]
    fn test_every_embedded_row_is_a_permutation() {
        for kind in SwitchKind::ALL {
            let table = wiring(kind);
            let n = table.contact_count();
            for position in 0..table.position_count() {
                let mut seen = vec![false; n];
                for contact in 0..n {
                    let output = table.map(position, contact).unwrap();
                    assert!(
                        !seen[output],
                        "{kind} position {position}: output {output} appears twice"
                    );
                    seen[output] = true;
                }
                assert!(seen.iter().all(|&s| s));
            }
        }
    }

    #[test]
    fn test_embedded_shapes() {
        for kind in SwitchKind::ALL {
            let table = wiring(kind);
            assert_eq!(table.kind(), kind);
            assert_eq!(table.position_count(), 25);
            assert_eq!(table.contact_count(), kind.contact_count());
            for position in 0..25 {
                assert_eq!(table.row(position).unwrap().len(), kind.contact_count());
            }
        }
    }

    #[test]
    fn test_inverse_round_trips_exhaustively() {
        for kind in SwitchKind::ALL {
            let table = wiring(kind);
            for position in 0..table.position_count() {
                for contact in 0..table.contact_count() {
                    let output = table.map(position, contact).unwrap();
                    assert_eq!(table.inverse_map(position, output).unwrap(), contact);
                    let input = table.inverse_map(position, contact).unwrap();
                    assert_eq!(table.map(position, input).unwrap(), contact);
                }
            }
        }
    }

    #[test]
    fn test_sixes_position_zero() {
        let table = wiring(SwitchKind::Sixes);
        assert_eq!(table.row(0).unwrap(), &[1, 0, 2, 4, 3, 5]);
        assert_eq!(table.map(0, 0).unwrap(), 1);
        assert_eq!(table.map(0, 1).unwrap(), 0);
        assert_eq!(table.map(0, 5).unwrap(), 5);
        assert_eq!(table.inverse_map(0, 1).unwrap(), 0);
        assert_eq!(table.inverse_map(0, 5).unwrap(), 5);
    }

    #[test]
    fn test_twenties_one_position_nineteen_is_identity() {
        let table = wiring(SwitchKind::TwentiesI);
        for contact in 0..20 {
            assert_eq!(table.map(19, contact).unwrap(), contact);
            assert_eq!(table.inverse_map(19, contact).unwrap(), contact);
        }
    }

    #[test]
    fn test_map_rejects_position_one_past_the_end() {
        let table = wiring(SwitchKind::Sixes);
        let err = table.map(25, 0).unwrap_err();
        assert_eq!(
            err,
            OutOfRangeError::Position {
                kind: SwitchKind::Sixes,
                position: 25,
                position_count: 25,
            }
        );
        assert!(table.inverse_map(25, 0).is_err());
        assert!(table.row(25).is_err());
    }

    #[test]
    fn test_map_rejects_contact_one_past_the_end() {
        let table = wiring(SwitchKind::TwentiesIII);
        let err = table.map(0, 20).unwrap_err();
        assert_eq!(
            err,
            OutOfRangeError::Contact {
                kind: SwitchKind::TwentiesIII,
                contact: 20,
                contact_count: 20,
            }
        );
        assert_eq!(
            table.inverse_map(0, usize::MAX).unwrap_err(),
            OutOfRangeError::Contact {
                kind: SwitchKind::TwentiesIII,
                contact: usize::MAX,
                contact_count: 20,
            }
        );
    }

    #[test]
    fn test_new_accepts_a_valid_grid() {
        let table = WiringTable::new(SwitchKind::Sixes, sample_rows()).unwrap();
        assert_eq!(table.position_count(), 2);
        assert_eq!(table.map(1, 0).unwrap(), 5);
        assert_eq!(table.inverse_map(1, 5).unwrap(), 0);
    }

    #[test]
    fn test_new_rejects_empty_grid() {
        let err = WiringTable::new(SwitchKind::Sixes, vec![]).unwrap_err();
        assert_eq!(
            err,
            MalformedWiringError::EmptyGrid {
                kind: SwitchKind::Sixes
            }
        );
    }

    #[test]
    fn test_new_rejects_short_row() {
        let mut rows = sample_rows();
        rows[1].pop();
        let err = WiringTable::new(SwitchKind::Sixes, rows).unwrap_err();
        assert_eq!(
            err,
            MalformedWiringError::RowLength {
                kind: SwitchKind::Sixes,
                position: 1,
                expected: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_output() {
        let mut rows = sample_rows();
        // Row 0 becomes [1, 0, 2, 4, 3, 4]: contact 4 named twice, 5 missing.
        rows[0][5] = 4;
        let err = WiringTable::new(SwitchKind::Sixes, rows).unwrap_err();
        assert_eq!(
            err,
            MalformedWiringError::NotAPermutation {
                kind: SwitchKind::Sixes,
                position: 0,
                contact: 4,
            }
        );
    }

    #[test]
    fn test_new_rejects_out_of_range_output() {
        let mut rows = sample_rows();
        rows[0][2] = 6;
        let err = WiringTable::new(SwitchKind::Sixes, rows).unwrap_err();
        assert_eq!(
            err,
            MalformedWiringError::NotAPermutation {
                kind: SwitchKind::Sixes,
                position: 0,
                contact: 6,
            }
        );
    }

    #[test]
    fn test_wiring_returns_the_same_table_on_every_call() {
        for kind in SwitchKind::ALL {
            assert!(std::ptr::eq(wiring(kind), wiring(kind)));
        }
    }

    proptest! {
        #[test]
        fn test_map_and_inverse_agree(
            kind in any::<SwitchKind>(),
            position in 0usize..25,
            seed in 0usize..20,
        ) {
            let table = wiring(kind);
            let contact = seed % table.contact_count();
            let output = table.map(position, contact).unwrap();
            prop_assert!(output < table.contact_count());
            prop_assert_eq!(table.inverse_map(position, output).unwrap(), contact);
        }

        #[test]
        fn test_out_of_range_queries_never_answer(
            kind in any::<SwitchKind>(),
            position in 25usize..1000,
            contact in 0usize..6,
        ) {
            let table = wiring(kind);
            prop_assert!(table.map(position, contact).is_err());
            prop_assert!(table.inverse_map(position, contact).is_err());
        }
    }
}
