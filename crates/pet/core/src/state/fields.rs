use bitflags::bitflags;

bitflags! {
    /// Tracks which parts of a [`PetState`](super::PetState) an operation changed.
    ///
    /// An empty set means the operation was a no-op and nothing needs to be
    /// persisted or re-rendered.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PetFields: u16 {
        const SESSION    = 1 << 0;
        const IDENTITY   = 1 << 1;
        const VITALS     = 1 << 2;
        const PROGRESS   = 1 << 3;
        const COINS      = 1 << 4;
        const CALENDAR   = 1 << 5;
        const INVENTORY  = 1 << 6;
        const MESSAGES   = 1 << 7;
    }
}

impl PetFields {
    /// Returns true if the operation mutated the record.
    pub fn is_mutation(&self) -> bool {
        !self.is_empty()
    }
}
