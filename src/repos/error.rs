/*
 * Responsibility
 * - The meaning a repo failure carries for upper layers
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error: {0}")]
    Db(#[from] sqlx::Error),
}
