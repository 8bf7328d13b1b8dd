//! Driven port for fetching the directory's user list.
//!
//! The domain owns the response contract (a list of [`User`] records) and the
//! error vocabulary; adapters own transport and decoding details.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::User;

define_port_error! {
    /// Errors surfaced while fetching users from the remote source.
    pub enum UserSourceError {
        /// Network transport failed before a response arrived.
        Transport {
            /// Transport error description.
            message: String,
        } => "user source transport failed: {message}",
        /// The request exceeded an explicitly configured timeout.
        Timeout {
            /// Timeout error description.
            message: String,
        } => "user source timed out: {message}",
        /// The source answered with a non-success HTTP status.
        Status {
            /// HTTP status code.
            status: u16,
            /// Status line and a short body preview.
            message: String,
        } => "failed to fetch users: {message}",
        /// The response body was not a list of user records.
        Decode {
            /// Decoder error description.
            message: String,
        } => "user source response decode failed: {message}",
    }
}

/// Port for retrieving the full user list in one request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every user the source publishes, in source order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_directory::domain::ports::{FixtureUserSource, UserSource};
    ///
    /// let users = FixtureUserSource.fetch_users().await?;
    /// assert_eq!(users.len(), 2);
    /// # Ok::<(), user_directory::domain::ports::UserSourceError>(())
    /// ```
    async fn fetch_users(&self) -> Result<Vec<User>, UserSourceError>;
}

/// Fixture source returning the first two records of the public directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserSource;

#[async_trait]
impl UserSource for FixtureUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, UserSourceError> {
        Ok(fixture_users())
    }
}

fn fixture_users() -> Vec<User> {
    use crate::domain::{Address, Company, Contact, UserId};

    vec![
        User::new(UserId::new(1), "Leanne Graham", "Bret")
            .with_contact(Contact {
                email: "Sincere@april.biz".to_owned(),
                phone: "1-770-736-8031 x56442".to_owned(),
                website: "hildegard.org".to_owned(),
            })
            .with_address(Address {
                street: "Kulas Light".to_owned(),
                suite: "Apt. 556".to_owned(),
                city: "Gwenborough".to_owned(),
                zipcode: "92998-3874".to_owned(),
            })
            .with_company(Company {
                name: "Romaguera-Crona".to_owned(),
                catch_phrase: "Multi-layered client-server neural-net".to_owned(),
                bs: "harness real-time e-markets".to_owned(),
            }),
        User::new(UserId::new(2), "Ervin Howell", "Antonette")
            .with_contact(Contact {
                email: "Shanna@melissa.tv".to_owned(),
                phone: "010-692-6593 x09125".to_owned(),
                website: "anastasia.net".to_owned(),
            })
            .with_address(Address {
                street: "Victor Plains".to_owned(),
                suite: "Suite 879".to_owned(),
                city: "Wisokyburgh".to_owned(),
                zipcode: "90566-7771".to_owned(),
            })
            .with_company(Company {
                name: "Deckow-Crist".to_owned(),
                catch_phrase: "Proactive didactic contingency".to_owned(),
                bs: "synergize scalable supply-chains".to_owned(),
            }),
    ]
}
