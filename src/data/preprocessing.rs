//! Record preprocessing for quicker runs on a subset of the data

use crate::data::CastRecords;
use log;
use rand::Rng;

/// Keep a random `ratio` of movies, dropping names no longer credited.
///
/// A ratio of 1.0 or more returns the records unchanged.
pub fn sample_movies<R: Rng + ?Sized>(records: CastRecords, ratio: f64, rng: &mut R) -> CastRecords {
    if ratio >= 1.0 {
        return records;
    }

    let ratio = ratio.max(0.0);
    let CastRecords {
        movies,
        mut cast,
        names,
    } = records;

    let mut sampled = CastRecords::new();
    for (movie_id, title) in movies {
        if rng.gen_bool(ratio) {
            let members = cast.remove(&movie_id).unwrap_or_default();
            sampled.movies.insert(movie_id.clone(), title);
            sampled.cast.insert(movie_id, members);
        }
    }

    let kept_names = {
        let credited = sampled.credited_people();
        names
            .into_iter()
            .filter(|(id, _)| credited.contains(id.as_str()))
            .collect()
    };
    sampled.names = kept_names;

    log::info!(
        "Sampled {} movies and {} names at ratio {}",
        sampled.movies.len(),
        sampled.names.len(),
        ratio
    );

    sampled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn records(movie_count: usize) -> CastRecords {
        let mut records = CastRecords::new();
        for i in 0..movie_count {
            let movie = format!("tt{}", i);
            let person = format!("nm{}", i);
            records.add_movie(&movie, "Title");
            records.add_credit(&movie, &person);
            records.add_name(&person, "Name");
        }
        records
    }

    #[test]
    fn test_full_ratio_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_movies(records(5), 1.0, &mut rng), records(5));
    }

    #[test]
    fn test_zero_ratio_drops_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let sampled = sample_movies(records(5), 0.0, &mut rng);
        assert!(sampled.movies.is_empty());
        assert!(sampled.names.is_empty());
    }

    #[test]
    fn test_names_follow_kept_movies() {
        let mut rng = StdRng::seed_from_u64(3);
        let sampled = sample_movies(records(200), 0.5, &mut rng);

        assert!(!sampled.movies.is_empty() && sampled.movies.len() < 200);
        assert_eq!(sampled.names.len(), sampled.movies.len());
        for movie in sampled.movies.keys() {
            assert!(sampled.cast.contains_key(movie));
        }
    }
}
