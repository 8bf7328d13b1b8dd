//! Directory user records.
//!
//! A [`User`] is received once from the remote user source and is never
//! mutated afterwards. Filtering and presentation only ever borrow it.

use std::fmt;

/// Identifier assigned to a user by the remote user source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ways of reaching a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// Email address.
    pub email: String,
    /// Phone number as published by the source, extensions included.
    pub phone: String,
    /// Bare host name of the user's website, without a scheme.
    pub website: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// Street name and number.
    pub street: String,
    /// Suite or apartment.
    pub suite: String,
    /// City; one of the directory facets.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
}

impl Address {
    /// First display line: `"{street}, {suite}"`.
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::Address;
    ///
    /// let address = Address {
    ///     street: "Kulas Light".to_owned(),
    ///     suite: "Apt. 556".to_owned(),
    ///     city: "Gwenborough".to_owned(),
    ///     zipcode: "92998-3874".to_owned(),
    /// };
    /// assert_eq!(address.street_line(), "Kulas Light, Apt. 556");
    /// assert_eq!(address.locality_line(), "Gwenborough, 92998-3874");
    /// ```
    #[must_use]
    pub fn street_line(&self) -> String {
        format!("{}, {}", self.street, self.suite)
    }

    /// Second display line: `"{city}, {zipcode}"`.
    #[must_use]
    pub fn locality_line(&self) -> String {
        format!("{}, {}", self.city, self.zipcode)
    }
}

/// Employer of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Company {
    /// Company name; one of the directory facets.
    pub name: String,
    /// Company slogan.
    pub catch_phrase: String,
    /// Short business description.
    pub bs: String,
}

/// One person listed in the directory.
///
/// ## Invariants
/// - Fields are fixed at construction; there are no setters.
///
/// # Examples
/// ```
/// use user_directory::domain::{Address, Company, User, UserId};
///
/// let user = User::new(UserId::new(1), "Leanne Graham", "Bret")
///     .with_address(Address {
///         city: "Gwenborough".to_owned(),
///         ..Address::default()
///     })
///     .with_company(Company {
///         name: "Romaguera-Crona".to_owned(),
///         ..Company::default()
///     });
///
/// assert_eq!(user.initials(), "LG");
/// assert_eq!(user.city(), "Gwenborough");
/// assert_eq!(user.company_name(), "Romaguera-Crona");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    username: String,
    contact: Contact,
    address: Address,
    company: Company,
}

impl User {
    /// Build a user with empty contact, address, and company details.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            contact: Contact::default(),
            address: Address::default(),
            company: Company::default(),
        }
    }

    /// Attach contact details.
    #[must_use]
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    /// Attach a postal address.
    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Attach employer details.
    #[must_use]
    pub fn with_company(mut self, company: Company) -> Self {
        self.company = company;
        self
    }

    /// Source-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Login handle, without the leading `@`.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact details.
    #[must_use]
    pub const fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Postal address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Employer details.
    #[must_use]
    pub const fn company(&self) -> &Company {
        &self.company
    }

    /// City facet value.
    #[must_use]
    pub const fn city(&self) -> &str {
        self.address.city.as_str()
    }

    /// Company facet value.
    #[must_use]
    pub const fn company_name(&self) -> &str {
        self.company.name.as_str()
    }

    /// First character of each space-separated word of the name.
    ///
    /// Runs of spaces produce empty words, which contribute nothing.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Handle shown under the name: `"@{username}"`.
    #[must_use]
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }

    /// Link target for the website. The source publishes bare host names.
    #[must_use]
    pub fn website_url(&self) -> String {
        format!("http://{}", self.contact.website)
    }
}
