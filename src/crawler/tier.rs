//! Traversal tiers of a store directory

use std::fmt;

/// Position of a URL in the directory hierarchy
///
/// The tier decides how a fetched page is read and whether failing to load it
/// ends the run. Whether a leaf turns out to be a store or a suburb listing is
/// decided by the page itself, not by the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The root directory page listing regions
    Directory,
    /// A region page listing suburbs or stores
    Region,
    /// A suburb-or-store page; classified after loading
    Leaf,
    /// A store page reached through a suburb listing
    Store,
}

impl Tier {
    /// The tier of the URLs this tier links to
    pub fn child(self) -> Option<Tier> {
        match self {
            Self::Directory => Some(Self::Region),
            Self::Region => Some(Self::Leaf),
            Self::Leaf => Some(Self::Store),
            Self::Store => None,
        }
    }

    /// True for tiers whose pages are always expanded with the directory links
    pub fn is_directory_listing(self) -> bool {
        matches!(self, Self::Directory | Self::Region)
    }

    /// Only the root may abort the run when it fails to load
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Directory => "directory",
            Self::Region => "region",
            Self::Leaf => "suburb-or-store",
            Self::Store => "store",
        };
        f.write_str(label)
    }
}
