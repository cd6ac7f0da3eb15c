//! Static profile of the site owner: names, addresses and link targets the
//! page sections render.

/// Set by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub const OWNER: &str = "Alex";
pub const BRAND_SUFFIX: &str = ".dev";
pub const CONTACT_EMAIL: &str = "you@example.com";
pub const TAGLINE: &str = "Hi, I'm Alex — a Creative Web Engineer";
pub const SPLINE_SCENE: &str = "https://prod.spline.design/vc19ejtcC5VJjy5v/scene.splinecode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Instagram,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#home",
        label: "Home",
    },
    NavLink {
        href: "#about",
        label: "About",
    },
    NavLink {
        href: "#skills",
        label: "Skills",
    },
    NavLink {
        href: "#portfolio",
        label: "Work",
    },
    NavLink {
        href: "#contact",
        label: "Contact",
    },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        href: "#home",
        label: "Home",
    },
    NavLink {
        href: "#portfolio",
        label: "Work",
    },
    NavLink {
        href: "#contact",
        label: "Contact",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        href: "#",
        label: "GitHub",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        href: "#",
        label: "LinkedIn",
    },
    SocialLink {
        kind: SocialKind::Instagram,
        href: "#",
        label: "Instagram",
    },
    SocialLink {
        kind: SocialKind::Email,
        href: "#",
        label: "Email",
    },
];

pub fn copyright(year: i32) -> String {
    format!("© {year} {OWNER} — All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
        assert!(FOOTER_LINKS
            .iter()
            .all(|f| NAV_LINKS.iter().any(|n| n.href == f.href)));
    }

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2026), "© 2026 Alex — All rights reserved.");
    }

    #[test]
    fn test_build_time_is_rfc3339() {
        assert!(chrono::DateTime::parse_from_rfc3339(BUILD_TIME).is_ok());
    }
}
