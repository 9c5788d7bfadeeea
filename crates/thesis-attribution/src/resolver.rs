//! Thesis attribution
//!
//! Answers "which of this person's theses were supervised by someone on the
//! roster?" in three steps:
//!
//! 1. ask the repository for items authored by `Family, Given`
//! 2. keep the items whose type is exactly the thesis type (ignoring case)
//! 3. probe the roster in order, keeping the theses whose advisor field
//!    contains the advisor's `Family, Given`; the first advisor with a hit wins
//!
//! Advisor values often carry titles or co-advisor lists around the bare
//! name, hence the substring match in step 3.

use dspace_client::{filter_documents, Document, MatchMode, MetadataQuery, MetadataSource};
use serde::Serialize;

use crate::config::FieldConfig;
use crate::error::Result;
use crate::person::{Person, Roster};

/// Outcome of attributing one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Attribution {
    /// The repository lists no thesis by the subject
    NoThesis,
    /// Theses exist but no roster member is among their advisors
    ThesisWithoutKnownAdvisor { theses: Vec<Document> },
    /// Theses supervised by `advisor`, the first roster member that matched
    Matched {
        advisor: Person,
        documents: Vec<Document>,
    },
}

impl Attribution {
    /// Documents attributed to the subject; empty unless matched
    pub fn documents(&self) -> &[Document] {
        match self {
            Attribution::Matched { documents, .. } => documents,
            _ => &[],
        }
    }

    pub fn into_documents(self) -> Vec<Document> {
        match self {
            Attribution::Matched { documents, .. } => documents,
            _ => Vec::new(),
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Attribution::Matched { .. })
    }

    pub fn advisor(&self) -> Option<&Person> {
        match self {
            Attribution::Matched { advisor, .. } => Some(advisor),
            _ => None,
        }
    }
}

/// A subject together with its attribution, as produced by a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAttribution {
    pub subject: Person,
    pub attribution: Attribution,
}

pub struct Resolver<S> {
    source: S,
    fields: FieldConfig,
}

impl<S: MetadataSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_fields(source, FieldConfig::default())
    }

    pub fn with_fields(source: S, fields: FieldConfig) -> Self {
        Self { source, fields }
    }

    /// Theses the repository lists under the subject's name.
    ///
    /// A blank name has no theses and is never sent to the repository.
    pub async fn theses(&self, subject: &Person) -> Result<Vec<Document>> {
        let author = subject.repository_name();
        if author.is_empty() {
            tracing::debug!(subject = ?subject.full_name, "Blank subject name, skipping query");
            return Ok(Vec::new());
        }
        let query = MetadataQuery::new(self.fields.author.as_str(), author.as_str());
        let candidates = self.source.find_by_metadata(&query).await?;

        let theses = filter_documents(
            &candidates,
            &self.fields.type_key,
            &self.fields.thesis_type,
            MatchMode::Exact,
        );
        tracing::debug!(
            subject = %subject.full_name,
            candidates = candidates.len(),
            theses = theses.len(),
            "Filtered candidates to theses"
        );
        Ok(theses)
    }

    /// Probe `roster` in order against `theses`. No network access.
    pub fn probe_roster(&self, theses: &[Document], roster: &Roster) -> Attribution {
        if theses.is_empty() {
            return Attribution::NoThesis;
        }

        for advisor in roster {
            let name = advisor.repository_name();
            if name.is_empty() {
                tracing::debug!(advisor = ?advisor.full_name, "Skipping blank roster entry");
                continue;
            }
            let supervised =
                filter_documents(theses, &self.fields.advisor, &name, MatchMode::Contains);
            tracing::trace!(advisor = %name, hits = supervised.len(), "Probed advisor");

            if !supervised.is_empty() {
                return Attribution::Matched {
                    advisor: advisor.clone(),
                    documents: supervised,
                };
            }
        }

        Attribution::ThesisWithoutKnownAdvisor {
            theses: theses.to_vec(),
        }
    }

    /// Attribute `subject`'s theses to the first matching roster member
    pub async fn resolve(&self, subject: &Person, roster: &Roster) -> Result<Attribution> {
        let theses = self.theses(subject).await?;
        let attribution = self.probe_roster(&theses, roster);

        match &attribution {
            Attribution::NoThesis => {
                tracing::debug!(subject = %subject.full_name, "No thesis found")
            }
            Attribution::ThesisWithoutKnownAdvisor { theses } => tracing::info!(
                subject = %subject.full_name,
                theses = theses.len(),
                "Thesis found but no roster advisor matched"
            ),
            Attribution::Matched { advisor, documents } => tracing::info!(
                subject = %subject.full_name,
                advisor = %advisor.full_name,
                documents = documents.len(),
                "Attributed thesis"
            ),
        }

        Ok(attribution)
    }

    /// Resolve every subject in order.
    ///
    /// The first transport failure aborts the whole batch.
    pub async fn resolve_all(
        &self,
        subjects: &[Person],
        roster: &Roster,
    ) -> Result<Vec<SubjectAttribution>> {
        let mut results = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let attribution = self.resolve(subject, roster).await?;
            results.push(SubjectAttribution {
                subject: subject.clone(),
                attribution,
            });
        }
        Ok(results)
    }
}
