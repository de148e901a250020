/// Report assembly and average-rating behavior across a full run
use tmdb_cli::api::{PopularMovie, RatedMovie};
use tmdb_cli::data::report::MovieReport;

fn rated(title: &str, user_rating: f64) -> RatedMovie {
    RatedMovie {
        title: title.to_string(),
        average_rating: 6.5,
        user_rating,
    }
}

fn popular(title: &str, average_rating: f64) -> PopularMovie {
    PopularMovie {
        title: title.to_string(),
        average_rating,
        vote_count: 1000,
    }
}

#[test]
fn test_average_matches_arithmetic_mean() {
    let report = MovieReport::new(
        Vec::new(),
        vec![rated("A", 4.0), rated("B", 7.0), rated("C", 10.0)],
    );

    let average = report.average_user_rating().unwrap();
    assert!((average - 7.0).abs() < 1e-9);
}

#[test]
fn test_average_unavailable_without_rated_movies() {
    let report = MovieReport::new(vec![popular("P", 8.0)], Vec::new());
    assert_eq!(report.average_user_rating(), None);
}

#[test]
fn test_average_is_computed_once_and_cached() {
    let mut report = MovieReport::new(Vec::new(), vec![rated("A", 2.0), rated("B", 4.0)]);

    let first = report.average_user_rating();
    assert_eq!(first, Some(3.0));

    // Editing the list afterwards does not disturb the cached value.
    report.rated.push(rated("C", 9.0));
    assert_eq!(report.average_user_rating(), first);
}

#[test]
fn test_unavailable_average_is_cached_too() {
    let mut report = MovieReport::new(Vec::new(), Vec::new());

    assert_eq!(report.average_user_rating(), None);

    report.rated.push(rated("Late", 8.0));
    assert_eq!(report.average_user_rating(), None);
}

#[test]
fn test_report_keeps_both_lists_intact() {
    let report = MovieReport::new(
        vec![popular("First", 8.1), popular("Second", 7.7)],
        vec![rated("Only", 5.0)],
    );

    assert_eq!(report.popular.len(), 2);
    assert_eq!(report.popular[0].title, "First");
    assert_eq!(report.rated.len(), 1);
    assert_eq!(report.average_user_rating(), Some(5.0));
}
