use serde::{Deserialize, Serialize};

/// One movie from the discover listing: title, the site-wide average
/// rating and how many votes produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularMovie {
    pub title: String,
    #[serde(rename = "vote_average")]
    pub average_rating: f64,
    pub vote_count: u64,
}

/// One movie from the account's rated list. `user_rating` is the score
/// this account gave; `average_rating` is the site-wide one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedMovie {
    pub title: String,
    #[serde(rename = "vote_average")]
    pub average_rating: f64,
    #[serde(rename = "rating")]
    pub user_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_popular_movie_from_discover_payload() {
        // Real discover entries carry many more fields; only three matter here.
        let payload = json!({
            "adult": false,
            "id": 278,
            "title": "The Shawshank Redemption",
            "original_language": "en",
            "popularity": 167.3,
            "vote_average": 8.7,
            "vote_count": 28551
        });

        let movie: PopularMovie = serde_json::from_value(payload).unwrap();
        assert_eq!(movie.title, "The Shawshank Redemption");
        assert_eq!(movie.average_rating, 8.7);
        assert_eq!(movie.vote_count, 28551);
    }

    #[test]
    fn test_rated_movie_maps_personal_rating() {
        let payload = json!({
            "id": 603,
            "title": "The Matrix",
            "vote_average": 8.2,
            "vote_count": 26000,
            "rating": 9.0
        });

        let movie: RatedMovie = serde_json::from_value(payload).unwrap();
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.average_rating, 8.2);
        assert_eq!(movie.user_rating, 9.0);
    }

    #[test]
    fn test_serialized_names_follow_the_wire() {
        let movie = PopularMovie {
            title: "Heat".to_string(),
            average_rating: 7.9,
            vote_count: 7000,
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert!(value.get("vote_average").is_some());
        assert!(value.get("average_rating").is_none());
    }
}
