//! Navigation surface: the fixed set of site pages.

use std::fmt;
use std::str::FromStr;

use crate::error::{ContentError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
    Studio,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Portfolio,
        Page::Contact,
        Page::Studio,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Portfolio => "/portfolio",
            Page::Contact => "/contact",
            Page::Studio => "/studio",
        }
    }

    /// Link text in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Portfolio => "Work",
            Page::Contact => "Contact",
            Page::Studio => "Studio",
        }
    }

    /// Document title suffix.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "The Creative Growth Agency",
            Page::About => "About",
            Page::Services => "Services",
            Page::Portfolio => "Our Work",
            Page::Contact => "Contact",
            Page::Studio => "Rent Our Studio",
        }
    }

    /// Resolve a request path. Trailing slashes and query strings are ignored.
    pub fn from_path(path: &str) -> Result<Self> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let bare = bare.trim_end_matches('/');
        let bare = if bare.is_empty() { "/" } else { bare };
        Page::ALL
            .into_iter()
            .find(|page| page.path() == bare)
            .ok_or_else(|| ContentError::UnknownPage(path.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nav_label())
    }
}

impl FromStr for Page {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('/') {
            return Page::from_path(s);
        }
        let wanted = s.trim().to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|page| {
                page.nav_label().eq_ignore_ascii_case(&wanted)
                    || format!("{page:?}").to_ascii_lowercase() == wanted
            })
            .ok_or_else(|| ContentError::UnknownPage(s.to_string()))
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub active: bool,
}

/// Navigation bar entries with `active` marked as current.
pub fn nav_links(active: Page) -> Vec<NavLink> {
    Page::ALL
        .into_iter()
        .map(|page| NavLink {
            page,
            active: page == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()).unwrap(), page);
        }
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(Page::from_path("/portfolio/").unwrap(), Page::Portfolio);
        assert_eq!(Page::from_path("/contact?ref=nav").unwrap(), Page::Contact);
        assert_eq!(Page::from_path("").unwrap(), Page::Home);
        assert!(Page::from_path("/blog").is_err());
    }

    #[test]
    fn parses_labels_and_variant_names() {
        assert_eq!("work".parse::<Page>().unwrap(), Page::Portfolio);
        assert_eq!("portfolio".parse::<Page>().unwrap(), Page::Portfolio);
        assert_eq!("/studio".parse::<Page>().unwrap(), Page::Studio);
    }

    #[test]
    fn exactly_one_link_is_active() {
        let links = nav_links(Page::Services);
        assert_eq!(links.len(), 6);
        assert_eq!(links.iter().filter(|l| l.active).count(), 1);
        assert!(links.iter().any(|l| l.active && l.page == Page::Services));
    }
}
