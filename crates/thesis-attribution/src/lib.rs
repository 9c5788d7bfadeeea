//! thesis-attribution: match repository theses to roster members
//!
//! This crate provides:
//! - Name normalization from `Given Family` to repository `Family, Given`
//! - Thesis attribution against an ordered advisor roster
//! - Team roster reading from a MediaWiki page
//! - Wiki-markup reports of the attributed theses
//!
//! Repository access goes through [`dspace_client::MetadataSource`], so the
//! resolver runs against the live repository or any in-memory source.

pub mod config;
pub mod error;
pub mod name;
pub mod person;
pub mod report;
pub mod resolver;
pub mod wiki;

pub use config::{AttributionConfig, ConfigError, FieldConfig, RepositoryConfig, WikiConfig};
pub use error::{AttributionError, Result};
pub use name::{repository_name, split_name};
pub use person::{Person, Roster};
pub use report::{render_report, render_thesis};
pub use resolver::{Attribution, Resolver, SubjectAttribution};
pub use wiki::{fetch_team, RosterParser, Team, WikiClient};

use dspace_client::{DspaceClient, HttpClient};

/// Repository client and wiki client built from one configuration
pub fn clients(config: &AttributionConfig) -> Result<(DspaceClient, WikiClient)> {
    let http = HttpClient::new(&config.repository.user_agent, config.repository.timeout())?;
    let repository = DspaceClient::with_http(&config.repository.base_url, http.clone())?;
    let wiki = WikiClient::new(&config.wiki.api_url, http);
    Ok((repository, wiki))
}
