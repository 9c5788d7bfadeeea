//! People and advisor rosters

use serde::{Deserialize, Serialize};

use crate::name::{repository_name, split_name};

/// A roster member as listed on the wiki
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Wiki account name, empty when the person was given by name only
    #[serde(default)]
    pub username: String,
    pub full_name: String,
    /// Free-text role (`student`, `student (computer engineering)`, ...)
    #[serde(default)]
    pub role: String,
}

impl Person {
    /// Create a person from a display name alone
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn given_name(&self) -> String {
        split_name(&self.full_name).0
    }

    pub fn family_name(&self) -> String {
        split_name(&self.full_name).1
    }

    /// `Family, Given`, the form repository metadata uses
    pub fn repository_name(&self) -> String {
        repository_name(&self.full_name)
    }
}

/// Ordered list of eligible advisors. Order is probe order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Person>,
}

impl Roster {
    pub fn new(members: Vec<Person>) -> Self {
        Self { members }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Person::new).collect())
    }

    pub fn extend(&mut self, persons: impl IntoIterator<Item = Person>) {
        self.members.extend(persons);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
