use std::fmt;

/// Closed set of pages reachable from the navigation bar, in bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Explore,
    Thoughts,
    Notes,
    Tools,
    Other,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::Explore,
        PageId::Thoughts,
        PageId::Notes,
        PageId::Tools,
        PageId::Other,
    ];

    /// Position of this page in the navigation bar.
    pub fn index(self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::Explore => 1,
            PageId::Thoughts => 2,
            PageId::Notes => 3,
            PageId::Tools => 4,
            PageId::Other => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Explore => "Explore",
            PageId::Thoughts => "Thoughts",
            PageId::Notes => "Notes",
            PageId::Tools => "Tools",
            PageId::Other => "Other",
        }
    }

    /// Flat RGB fill for the page's placeholder panel.
    pub fn fill_rgb(self) -> [u8; 3] {
        match self {
            PageId::Home => [255, 255, 255],
            PageId::Explore => [255, 0, 0],
            PageId::Thoughts => [0, 0, 255],
            PageId::Notes => [0, 128, 0],
            PageId::Tools => [255, 255, 255],
            PageId::Other => [128, 128, 128],
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One navigation bar entry. The set is fixed at construction and never
/// mutated, so the bar is a plain ordered array rather than a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        page: PageId::Home,
        label: "Home",
    },
    NavItem {
        page: PageId::Explore,
        label: "Explore",
    },
    NavItem {
        page: PageId::Thoughts,
        label: "Thoughts",
    },
    NavItem {
        page: PageId::Notes,
        label: "Notes",
    },
    NavItem {
        page: PageId::Tools,
        label: "Tools",
    },
    NavItem {
        page: PageId::Other,
        label: "Other",
    },
];
