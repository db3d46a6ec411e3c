//! Tab-separated title, principal and name files

use crate::data::CastRecords;
use anyhow::Result;
use log;
use polars::prelude::*;
use std::path::Path;

/// Title type kept from the title basics file
pub const MOVIE_TITLE_TYPE: &str = "movie";

/// Locations of the three input tables
#[derive(Debug, Clone)]
pub struct InputPaths<'a> {
    pub titles: &'a Path,
    pub principals: &'a Path,
    pub names: &'a Path,
}

/// Lazily scan a TSV file with every column read as a string
fn scan_tsv(path: &Path) -> Result<LazyFrame> {
    if !path.exists() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    let frame = LazyCsvReader::new(path)
        .with_separator(b'\t')
        .with_has_header(true)
        .with_quote_char(None)
        .with_infer_schema_length(Some(0))
        .finish()?;
    Ok(frame)
}

/// Parse the three tables into cast records.
///
/// Only `movie` titles are kept, credits are restricted to kept movies and
/// names to credited people.
pub fn load_cast_records(paths: &InputPaths<'_>) -> Result<CastRecords> {
    let mut records = CastRecords::new();

    log::info!("Reading titles: {}", paths.titles.display());
    let titles = scan_tsv(paths.titles)?
        .filter(col("titleType").eq(lit(MOVIE_TITLE_TYPE)))
        .select([col("tconst"), col("primaryTitle")])
        .collect()?;
    let movie_ids = titles.column("tconst")?.str()?;
    let movie_titles = titles.column("primaryTitle")?.str()?;
    for i in 0..titles.height() {
        if let (Some(id), Some(title)) = (movie_ids.get(i), movie_titles.get(i)) {
            records.add_movie(id, title);
        }
    }
    log::info!("Loaded {} movies", records.movies.len());

    log::info!("Reading principals: {}", paths.principals.display());
    let principals = scan_tsv(paths.principals)?
        .select([col("tconst"), col("nconst")])
        .collect()?;
    let credit_movies = principals.column("tconst")?.str()?;
    let credit_people = principals.column("nconst")?.str()?;
    for i in 0..principals.height() {
        if let (Some(movie), Some(person)) = (credit_movies.get(i), credit_people.get(i)) {
            records.add_credit(movie, person);
        }
    }

    let credited: std::collections::HashSet<String> = records
        .credited_people()
        .into_iter()
        .map(str::to_string)
        .collect();
    log::info!("Loaded credits for {} people", credited.len());

    log::info!("Reading names: {}", paths.names.display());
    let names = scan_tsv(paths.names)?
        .select([col("nconst"), col("primaryName")])
        .collect()?;
    let person_ids = names.column("nconst")?.str()?;
    let person_names = names.column("primaryName")?.str()?;
    for i in 0..names.height() {
        if let (Some(id), Some(name)) = (person_ids.get(i), person_names.get(i)) {
            if credited.contains(id) {
                records.add_name(id, name);
            }
        }
    }
    log::info!("Resolved {} names", records.names.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tsv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_keeps_movies_and_credited_names() {
        let titles = tsv(&[
            "tconst\ttitleType\tprimaryTitle",
            "tt1\tmovie\tFirst",
            "tt2\ttvEpisode\tPilot",
            "tt3\tmovie\tSecond",
        ]);
        let principals = tsv(&[
            "tconst\tnconst\tcategory",
            "tt1\tnm1\tactor",
            "tt1\tnm2\tactress",
            "tt2\tnm3\tactor",
            "tt3\tnm2\tactress",
        ]);
        let names = tsv(&[
            "nconst\tprimaryName",
            "nm1\tAnn",
            "nm2\tBea",
            "nm3\tCal",
        ]);

        let records = load_cast_records(&InputPaths {
            titles: titles.path(),
            principals: principals.path(),
            names: names.path(),
        })
        .unwrap();

        assert_eq!(records.movies.len(), 2);
        assert!(!records.movies.contains_key("tt2"));
        assert_eq!(records.cast_of("tt1").count(), 2);
        assert_eq!(records.names.get("nm2").map(String::as_str), Some("Bea"));
        assert!(!records.names.contains_key("nm3"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/titles.tsv");
        let result = load_cast_records(&InputPaths {
            titles: missing,
            principals: missing,
            names: missing,
        });
        assert!(result.is_err());
    }
}
