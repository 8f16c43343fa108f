use filmorate_core::AppResult;
use filmorate_domain::{Film, PopularityLimit, rank_by_likes};

use super::FilmService;

impl FilmService {
    /// Returns at most `limit` films, most liked first.
    pub async fn most_popular(&self, limit: PopularityLimit) -> AppResult<Vec<Film>> {
        let films = self.film_repository.find_all().await?;
        Ok(rank_by_likes(films, limit))
    }
}
