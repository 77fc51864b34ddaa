//! Static site configuration: title, navigation, footer links, analytics.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Document title.
pub const SITE_TITLE: &str = "Open Auburn";

/// Google Analytics measurement ID loaded after hydration.
pub const ANALYTICS_MEASUREMENT_ID: &str = "G-552477Q8JV";

/// A labelled link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub link: &'static str,
}

/// A titled, ordered group of links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

impl Link {
    /// Off-site links open in a new tab.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http://") || self.link.starts_with("https://")
    }
}

pub const NAV_LINKS: &[Link] = &[
    Link { label: "Home", link: "/" },
    Link { label: "About", link: "/about" },
    Link { label: "Showcase", link: "/showcase" },
    Link { label: "Docs", link: "/docs" },
];

pub const FOOTER_LINK_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "About",
        links: &[
            Link { label: "Features", link: "/home#features" },
            Link { label: "Mission", link: "/about" },
            Link { label: "People", link: "/people" },
        ],
    },
    LinkGroup {
        title: "Project",
        links: &[
            Link { label: "Applications", link: "/showcase" },
            Link { label: "Contribute", link: "/contribute" },
            Link { label: "Documentation", link: "/docs" },
        ],
    },
    LinkGroup {
        title: "Community",
        links: &[
            Link { label: "Join Discord", link: "https://discord.com/invite/pjabvqrReR" },
            Link { label: "Follow on Twitter", link: "https://twitter.com/OpenAuburn" },
            Link { label: "Open source", link: "https://github.com/openauburn" },
        ],
    },
];

/// URL of the gtag loader for `measurement_id`.
pub fn analytics_loader_src(measurement_id: &str) -> String {
    format!("https://www.googletagmanager.com/gtag/js?id={measurement_id}")
}

/// Inline bootstrap script configuring gtag for `measurement_id`.
pub fn analytics_bootstrap(measurement_id: &str) -> String {
    format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{window.dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{measurement_id}');\n"
    )
}
