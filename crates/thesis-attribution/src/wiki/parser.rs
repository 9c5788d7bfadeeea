//! Team page markup parsing
//!
//! ```text
//! == Staff ==
//! {{Team|
//! {{TeamMember | alvo | Alvo Aabloo | professor }}
//! }}
//! ```

use regex::Regex;

use crate::error::{AttributionError, Result};
use crate::person::Person;

/// A level-2 section of a wiki page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Compiled patterns for reading team pages.
///
/// Build once and pass it to whatever reads pages.
#[derive(Debug, Clone)]
pub struct RosterParser {
    heading: Regex,
    member: Regex,
}

impl Default for RosterParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterParser {
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?m)^==([^=\n][^\n]*?)==[ \t]*\r?$")
                .expect("heading pattern is valid"),
            member: Regex::new(
                r"\{\{\s*TeamMember\s*\|([^|{}]*)\|([^|{}]*)(?:\|([^{}]*))?\}\}",
            )
            .expect("member pattern is valid"),
        }
    }

    /// Level-2 sections in page order. Text before the first heading is skipped.
    pub fn sections<'a>(&self, wikitext: &'a str) -> Vec<Section<'a>> {
        let headings: Vec<_> = self.heading.captures_iter(wikitext).collect();
        let mut sections = Vec::with_capacity(headings.len());

        for (i, caps) in headings.iter().enumerate() {
            let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let end = headings
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(wikitext.len());
            sections.push(Section {
                title: title.as_str().trim(),
                body: &wikitext[whole.end()..end],
            });
        }

        sections
    }

    /// Body of the first section titled `title`
    pub fn section<'a>(&self, wikitext: &'a str, title: &str) -> Result<&'a str> {
        let wanted = title.trim();
        self.sections(wikitext)
            .into_iter()
            .find(|s| s.title == wanted)
            .map(|s| s.body)
            .ok_or_else(|| AttributionError::NotFound(format!("section \"{}\"", wanted)))
    }

    /// Every `{{TeamMember|username|Full Name|role}}` in `text`, in order
    pub fn members(&self, text: &str) -> Vec<Person> {
        self.member
            .captures_iter(text)
            .filter_map(|caps| {
                let full_name = caps.get(2)?.as_str().trim();
                if full_name.is_empty() {
                    return None;
                }
                let username = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
                let role = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
                Some(
                    Person::new(full_name)
                        .with_username(username)
                        .with_role(role),
                )
            })
            .collect()
    }

    pub fn section_members(&self, wikitext: &str, title: &str) -> Result<Vec<Person>> {
        Ok(self.members(self.section(wikitext, title)?))
    }
}
