use std::fmt;

#[cfg(test)]
use proptest::prelude::*;

/// Identifies one of the four physical stepping switches of the machine.
///
/// The machine carries a single 6-contact switch (the "sixes", which
/// enciphers the vowel group) and three 20-contact switches (the "twenties"
/// I, II and III, which encipher the consonant group). Each kind has its own
/// independent wiring, but all four expose the same query surface through
/// [`WiringTable`](crate::WiringTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SwitchKind {
    /// The 6-contact switch.
    Sixes,
    /// The first 20-contact switch.
    TwentiesI,
    /// The second 20-contact switch.
    TwentiesII,
    /// The third 20-contact switch.
    TwentiesIII,
}

impl SwitchKind {
    /// All four switches, in registry order.
    pub const ALL: [Self; 4] = [
        Self::Sixes,
        Self::TwentiesI,
        Self::TwentiesII,
        Self::TwentiesIII,
    ];

    /// Number of contacts on this switch: 6 for the sixes, 20 for each of
    /// the twenties. Fixed per kind, by physical construction.
    #[must_use]
    pub const fn contact_count(self) -> usize {
        match self {
            Self::Sixes => 6,
            Self::TwentiesI | Self::TwentiesII | Self::TwentiesIII => 20,
        }
    }

    /// Index of this kind within [`Self::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Sixes => 0,
            Self::TwentiesI => 1,
            Self::TwentiesII => 2,
            Self::TwentiesIII => 3,
        }
    }
}

impl fmt::Display for SwitchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sixes => write!(f, "sixes"),
            Self::TwentiesI => write!(f, "twenties I"),
            Self::TwentiesII => write!(f, "twenties II"),
            Self::TwentiesIII => write!(f, "twenties III"),
        }
    }
}

#[cfg(test)]
impl Arbitrary for SwitchKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Self::Sixes),
            Just(Self::TwentiesI),
            Just(Self::TwentiesII),
            Just(Self::TwentiesIII),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_counts() {
        assert_eq!(SwitchKind::Sixes.contact_count(), 6);
        assert_eq!(SwitchKind::TwentiesI.contact_count(), 20);
        assert_eq!(SwitchKind::TwentiesII.contact_count(), 20);
        assert_eq!(SwitchKind::TwentiesIII.contact_count(), 20);
    }

    #[test]
    fn test_all_indexes_are_positional() {
        for (i, kind) in SwitchKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SwitchKind::Sixes.to_string(), "sixes");
        assert_eq!(SwitchKind::TwentiesIII.to_string(), "twenties III");
    }
}
