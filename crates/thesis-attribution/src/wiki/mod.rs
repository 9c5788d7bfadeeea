//! Wiki roster collaborator
//!
//! Fetches the team page from a MediaWiki instance and turns its
//! `{{TeamMember|...}}` templates into people: the subjects whose theses are
//! looked up, and the advisor roster they are checked against.

pub mod client;
pub mod parser;

pub use client::WikiClient;
pub use parser::{RosterParser, Section};

use crate::config::WikiConfig;
use crate::error::Result;
use crate::person::{Person, Roster};

/// People read from the team page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub subjects: Vec<Person>,
    pub advisors: Roster,
}

impl Team {
    /// Build subjects and roster from already fetched wikitext.
    ///
    /// Sections are read in configured order; a missing section is an error.
    pub fn from_wikitext(
        parser: &RosterParser,
        wikitext: &str,
        config: &WikiConfig,
    ) -> Result<Self> {
        let mut subjects = Vec::new();
        for title in &config.subject_sections {
            subjects.extend(parser.section_members(wikitext, title)?);
        }

        let mut advisors = Roster::default();
        for title in &config.advisor_sections {
            advisors.extend(parser.section_members(wikitext, title)?);
        }

        tracing::debug!(
            subjects = subjects.len(),
            advisors = advisors.len(),
            "Read team from wiki"
        );
        Ok(Self { subjects, advisors })
    }
}

/// Fetch the configured page and read the team from it
pub async fn fetch_team(
    client: &WikiClient,
    parser: &RosterParser,
    config: &WikiConfig,
) -> Result<Team> {
    let wikitext = client.page_wikitext(&config.page).await?;
    Team::from_wikitext(parser, &wikitext, config)
}
