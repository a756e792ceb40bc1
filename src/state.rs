use sqlx::PgPool;

/// Shared across handlers. The pool is the only cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
