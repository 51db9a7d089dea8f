//! User profile aggregation.
//!
//! Resolves a user by name, then joins the company lookup and the global
//! status fetch into one combined profile.

use crate::directory::{DirectoryServices, ServiceError};
use crate::models::UserProfile;
use thiserror::Error;
use tracing::debug;

/// Errors raised while aggregating a user profile.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// No user in the directory matches the requested name.
    #[error("no user named '{name}' in the directory")]
    UserNotFound { name: String },

    /// A collaborator call failed; propagated unchanged.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Resolve `user_name` in the directory and combine the user's company and
/// the global status into one profile.
///
/// The user list is fetched once and the matched user is kept for the
/// result. The company lookup and the status fetch then run concurrently
/// and are awaited together: the first failure aborts the whole operation
/// and no partial profile is returned.
pub async fn fetch_user_profile(
    user_name: &str,
    services: &dyn DirectoryServices,
) -> Result<UserProfile, AggregateError> {
    debug!("Resolving user '{}'", user_name);

    let users = services.fetch_users().await?;
    let user = users
        .into_iter()
        .find(|u| u.name == user_name)
        .ok_or_else(|| AggregateError::UserNotFound {
            name: user_name.to_string(),
        })?;

    debug!("User '{}' belongs to company {}", user.name, user.company_id);

    let (company, status) = futures::try_join!(
        services.fetch_company_by_id(user.company_id),
        services.fetch_status(),
    )?;

    Ok(UserProfile {
        company,
        status,
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Company, Status, User};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;

    /// Deterministic in-memory directory.
    struct StubDirectory {
        users: Vec<User>,
        companies: HashMap<u64, Company>,
        status: Status,
        fail_companies: bool,
    }

    impl StubDirectory {
        fn with_alice() -> Self {
            Self {
                users: vec![user("alice", 1)],
                companies: HashMap::from([(1, company(1, "Acme"))]),
                status: Status(json!({"ok": true})),
                fail_companies: false,
            }
        }
    }

    fn user(name: &str, company_id: u64) -> User {
        serde_json::from_value(json!({"name": name, "companyId": company_id})).unwrap()
    }

    fn company(id: u64, name: &str) -> Company {
        serde_json::from_value(json!({"id": id, "name": name})).unwrap()
    }

    #[async_trait]
    impl DirectoryServices for StubDirectory {
        async fn fetch_users(&self) -> Result<Vec<User>, ServiceError> {
            Ok(self.users.clone())
        }

        async fn fetch_company_by_id(&self, id: u64) -> Result<Company, ServiceError> {
            if self.fail_companies {
                return Err(ServiceError::Upstream {
                    url: format!("stub://companies/{}", id),
                    status: 500,
                    body: "company lookup offline".to_string(),
                });
            }

            self.companies
                .get(&id)
                .cloned()
                .ok_or_else(|| ServiceError::Upstream {
                    url: format!("stub://companies/{}", id),
                    status: 404,
                    body: "no such company".to_string(),
                })
        }

        async fn fetch_status(&self) -> Result<Status, ServiceError> {
            Ok(self.status.clone())
        }
    }

    #[tokio::test]
    async fn test_resolves_user_company_and_status() {
        let services = StubDirectory::with_alice();
        let profile = fetch_user_profile("alice", &services).await.unwrap();

        assert_eq!(profile.user, user("alice", 1));
        assert_eq!(profile.company, company(1, "Acme"));
        assert_eq!(profile.status, Status(json!({"ok": true})));
    }

    #[tokio::test]
    async fn test_missing_user_is_a_typed_not_found() {
        let mut services = StubDirectory::with_alice();
        services.users.clear();

        let err = fetch_user_profile("alice", &services).await.unwrap_err();
        assert!(matches!(err, AggregateError::UserNotFound { ref name } if name == "alice"));
        assert!(err.to_string().contains("alice"));
    }

    #[tokio::test]
    async fn test_company_failure_aborts_the_whole_lookup() {
        let mut services = StubDirectory::with_alice();
        services.fail_companies = true;

        let err = fetch_user_profile("alice", &services).await.unwrap_err();
        assert!(matches!(
            err,
            AggregateError::Service(ServiceError::Upstream { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_company_id_propagates_upstream_error() {
        let mut services = StubDirectory::with_alice();
        services.users = vec![user("bob", 9)];

        let err = fetch_user_profile("bob", &services).await.unwrap_err();
        assert!(matches!(
            err,
            AggregateError::Service(ServiceError::Upstream { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_repeated_lookups_are_identical() {
        let services = StubDirectory::with_alice();

        let first = fetch_user_profile("alice", &services).await.unwrap();
        let second = fetch_user_profile("alice", &services).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_first_matching_user_wins() {
        let mut services = StubDirectory::with_alice();
        services.users.push(user("alice", 2));
        services.companies.insert(2, company(2, "Globex"));

        let profile = fetch_user_profile("alice", &services).await.unwrap();
        assert_eq!(profile.company.id, 1);
    }
}
