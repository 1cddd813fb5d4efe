use bitflags::bitflags;

bitflags! {
    /// Permission-derived flags attached to every descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatFlags: u32 {
        /// Stat value may only grow
        const INCREMENT_ONLY = 1 << 0;

        /// Only the game server may change it
        const PROTECTED = 1 << 1;

        /// Permission bits outside the known mask are set
        const UNKNOWN_PERMISSION = 1 << 2;
    }
}

/// What a permission value belongs to. Achievements and stats use
/// different protection masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Achievement,
    Stat,
}

impl Subject {
    pub fn protection_mask(&self) -> i32 {
        match self {
            Self::Achievement => 3,
            Self::Stat => 2,
        }
    }
}

const FLAG_NAMES: [(StatFlags, &str); 3] = [
    (StatFlags::INCREMENT_ONLY, "IncrementOnly"),
    (StatFlags::PROTECTED, "Protected"),
    (StatFlags::UNKNOWN_PERMISSION, "UnknownPermission"),
];

impl StatFlags {
    /// Derive flags from a raw schema permission value.
    ///
    /// Achievements never carry `INCREMENT_ONLY`.
    pub fn compute(permission: i32, increment_only: bool, subject: Subject) -> Self {
        let mask = subject.protection_mask();
        let mut flags = Self::empty();

        if increment_only && subject == Subject::Stat {
            flags |= Self::INCREMENT_ONLY;
        }
        if permission & mask != 0 {
            flags |= Self::PROTECTED;
        }
        if permission & !mask != 0 {
            flags |= Self::UNKNOWN_PERMISSION;
        }

        flags
    }

    pub fn is_protected(&self) -> bool {
        self.contains(Self::PROTECTED)
    }

    /// Comma-separated flag names, or `None` for the empty set
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "None".to_string();
        }

        FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
