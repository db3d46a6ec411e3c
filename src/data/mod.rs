//! Input records and the loader glue that produces them

pub mod preprocessing;
pub mod snapshot;
pub mod tsv;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Normalized cast data both graphs are built from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastRecords {
    /// Movie id to title
    pub movies: BTreeMap<String, String>,

    /// Movie id to the person ids credited on it
    pub cast: BTreeMap<String, BTreeSet<String>>,

    /// Person id to display name
    pub names: HashMap<String, String>,
}

impl CastRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a movie with its title
    pub fn add_movie(&mut self, movie_id: &str, title: &str) {
        self.movies.insert(movie_id.to_string(), title.to_string());
        self.cast.entry(movie_id.to_string()).or_default();
    }

    /// Credit a person on a movie; ignored for unknown movies
    pub fn add_credit(&mut self, movie_id: &str, person_id: &str) {
        if let Some(members) = self.cast.get_mut(movie_id) {
            members.insert(person_id.to_string());
        }
    }

    pub fn add_name(&mut self, person_id: &str, name: &str) {
        self.names.insert(person_id.to_string(), name.to_string());
    }

    /// Cast of a movie; empty for uncredited or unknown movies
    pub fn cast_of(&self, movie_id: &str) -> impl Iterator<Item = &String> + Clone {
        self.cast.get(movie_id).into_iter().flatten()
    }

    /// Distinct people credited on any movie
    pub fn credited_people(&self) -> BTreeSet<&str> {
        self.cast
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
