use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("unknown page identifier `{id}`")]
    InvalidSelection { id: String },
}

/// Which content block is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Programs,
    Gallery,
    Announcements,
    Contact,
    Support,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Programs,
        Page::Gallery,
        Page::Announcements,
        Page::Contact,
        Page::Support,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Programs => "programs",
            Page::Gallery => "gallery",
            Page::Announcements => "announcements",
            Page::Contact => "contact",
            Page::Support => "support",
        }
    }

    /// Label shown in the header menu. Home has none; the logo links there.
    pub fn menu_label(self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::About => Some("센터 소개"),
            Page::Programs => Some("주요 사업"),
            Page::Gallery => Some("갤러리"),
            Page::Announcements => Some("공지사항"),
            Page::Contact => Some("오시는 길"),
            Page::Support => Some("후원/자원봉사"),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Strict: there is no fallback page for an unknown identifier.
impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| PageError::InvalidSelection { id: s.to_string() })
    }
}

/// Header menu, in display order.
pub const MENU: [Page; 6] = [
    Page::About,
    Page::Programs,
    Page::Gallery,
    Page::Announcements,
    Page::Contact,
    Page::Support,
];
