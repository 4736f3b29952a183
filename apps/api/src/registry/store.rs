use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::{Portfolio, Section, SectionFields, User};
use crate::registry::{PORTFOLIO_EXISTS, PORTFOLIO_NOT_FOUND, USER_EXISTS};

/// In-memory registry of users and portfolios.
///
/// Each create checks for the id and inserts it while holding the map's write lock,
/// so two concurrent creates with the same id cannot both succeed. Wrap in `Arc`
/// and share through `AppState`; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct PortfolioStore {
    users: RwLock<HashMap<i64, User>>,
    portfolios: RwLock<HashMap<i64, Portfolio>>,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `user` unless its id is taken.
    pub async fn create_user(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        match users.entry(user.id) {
            Entry::Occupied(_) => {
                warn!(user_id = user.id, "Rejected duplicate user id");
                Err(AppError::Conflict(USER_EXISTS.to_string()))
            }
            Entry::Vacant(slot) => {
                info!(user_id = user.id, "User registered");
                Ok(slot.insert(user).clone())
            }
        }
    }

    /// Snapshot of every stored user, ordered by id.
    pub async fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// Stores `portfolio` unless its id is taken. `user_id` is not checked.
    pub async fn create_portfolio(&self, portfolio: Portfolio) -> Result<Portfolio, AppError> {
        let mut portfolios = self.portfolios.write().await;
        match portfolios.entry(portfolio.id) {
            Entry::Occupied(_) => {
                warn!(portfolio_id = portfolio.id, "Rejected duplicate portfolio id");
                Err(AppError::Conflict(PORTFOLIO_EXISTS.to_string()))
            }
            Entry::Vacant(slot) => {
                info!(
                    portfolio_id = portfolio.id,
                    user_id = portfolio.user_id,
                    "Portfolio created"
                );
                Ok(slot.insert(portfolio).clone())
            }
        }
    }

    pub async fn get_portfolio(&self, id: i64) -> Result<Portfolio, AppError> {
        self.portfolios
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                debug!(portfolio_id = id, "Portfolio lookup missed");
                AppError::NotFound(PORTFOLIO_NOT_FOUND.to_string())
            })
    }

    /// Builds a section record for `portfolio_id` from already-validated fields.
    ///
    /// Neither map is read or written: the portfolio need not exist and the record
    /// is not retained.
    pub fn echo_section<T: SectionFields>(&self, portfolio_id: i64, fields: T) -> Section<T> {
        debug!(
            portfolio_id,
            section = T::KIND.path_segment(),
            "Section echoed"
        );
        Section {
            portfolio_id,
            fields,
        }
    }
}
