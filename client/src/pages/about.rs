//! Static "About" page.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

/// One block of the about page: a heading, optional prose and links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutSection {
    pub heading: &'static str,
    pub text: Option<&'static str>,
    pub links: &'static [ExternalLink],
}

/// A link that opens in a new tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    /// Prose before the link; empty for a bare link.
    pub before: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub after: &'static str,
}

pub const ABOUT_SECTIONS: &[AboutSection] = &[
    AboutSection { heading: "What is Genocrowd?", text: Some("Genocrowd is..."), links: &[] },
    AboutSection {
        heading: "Usefull links",
        text: None,
        links: &[
            ExternalLink { before: "", label: "Docs", href: "https://genocrowd.readthedocs.io", after: "" },
            ExternalLink {
                before: "",
                label: "Github repository",
                href: "https://github.com/annotons/genocrowd",
                after: "",
            },
        ],
    },
    AboutSection {
        heading: "Need help?",
        text: None,
        links: &[ExternalLink {
            before: "Use ",
            label: "Github issues",
            href: "https://github.com/annotons/genocrowd/issues",
            after: " to report a bug, get help or request for a new feature.",
        }],
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="container">
            <h2>"About"</h2>
            <hr/>
            {ABOUT_SECTIONS.iter().map(|section| view! { <AboutBlock section=*section/> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn AboutBlock(section: AboutSection) -> impl IntoView {
    view! {
        <h4>{section.heading}</h4>
        {section.text.map(|text| view! { <p>{text}</p> })}
        {section
            .links
            .iter()
            .map(|link| {
                view! {
                    <p>
                        {link.before}
                        <a target="_newtab" rel="noopener noreferrer" href=link.href>
                            {link.label}
                        </a>
                        {link.after}
                    </p>
                }
            })
            .collect::<Vec<_>>()}
    }
}
