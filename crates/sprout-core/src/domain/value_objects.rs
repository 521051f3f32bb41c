use std::fmt;

/// The code patterns offered by the generator menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    PublicCollection,
    PrivateCollection,
    Global,
    Exit,
}

impl GeneratorKind {
    /// Menu entries, in display order.
    pub const MENU: [GeneratorKind; 4] = [
        Self::PublicCollection,
        Self::PrivateCollection,
        Self::Global,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PublicCollection => "Public Collection",
            Self::PrivateCollection => "Private Collection",
            Self::Global => "Global",
            Self::Exit => "Exit",
        }
    }

    /// Menu labels, in display order.
    pub fn menu_labels() -> Vec<&'static str> {
        Self::MENU.iter().map(|k| k.label()).collect()
    }

    /// Map a menu selection index back to a kind.
    pub fn from_menu_index(index: usize) -> Option<Self> {
        Self::MENU.get(index).copied()
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Access variant of a collection; the only thing that differs between the
/// public and private generators is the template they render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionAccess {
    Public,
    Private,
}
