//! Filter engine over the loaded user set.
//!
//! Two independent pure derivations share the same source slice:
//! [`filter_users`] applies [`FilterCriteria`], while [`city_options`] and
//! [`company_options`] always look at the full set so the facet selectors do
//! not shrink while a filter is active. Everything is recomputed on demand.

use std::collections::BTreeSet;

use super::User;

/// Current search and facet selection.
///
/// Empty facet values mean "no filter" and are stored as `None`.
///
/// # Examples
/// ```
/// use user_directory::domain::FilterCriteria;
///
/// let criteria = FilterCriteria::new().with_search_text("leanne").with_city("");
/// assert_eq!(criteria.search_text(), "leanne");
/// assert_eq!(criteria.city(), None);
/// assert!(criteria.has_active_filters());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    search_text: String,
    city: Option<String>,
    company: Option<String>,
}

impl FilterCriteria {
    /// Criteria with every field empty; matches every user.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_text: String::new(),
            city: None,
            company: None,
        }
    }

    /// Replace the free-text search. The text is used as typed, untrimmed.
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Replace the city facet; an empty string clears it.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = non_empty(city.into());
        self
    }

    /// Replace the company facet; an empty string clears it.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = non_empty(company.into());
        self
    }

    /// Free-text search, possibly empty.
    #[must_use]
    pub const fn search_text(&self) -> &str {
        self.search_text.as_str()
    }

    /// Selected city, if any.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Selected company, if any.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Whether any predicate is active.
    #[must_use]
    pub const fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty() || self.city.is_some() || self.company.is_some()
    }

    /// Test one user against every active predicate.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        Matcher::new(self).matches(user)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Criteria prepared for repeated matching; the needle is lowercased once.
struct Matcher<'c> {
    needle: Option<String>,
    city: Option<&'c str>,
    company: Option<&'c str>,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        let needle = (!criteria.search_text.is_empty())
            .then(|| criteria.search_text.to_lowercase());
        Self {
            needle,
            city: criteria.city(),
            company: criteria.company(),
        }
    }

    fn matches(&self, user: &User) -> bool {
        self.matches_text(user)
            && self.city.is_none_or(|city| user.city() == city)
            && self.company.is_none_or(|name| user.company_name() == name)
    }

    fn matches_text(&self, user: &User) -> bool {
        self.needle.as_deref().is_none_or(|needle| {
            user.name().to_lowercase().contains(needle)
                || user.username().to_lowercase().contains(needle)
        })
    }
}

/// Users passing every active predicate, in source order.
///
/// # Examples
/// ```
/// use user_directory::domain::{FilterCriteria, User, UserId, filter_users};
///
/// let users = vec![
///     User::new(UserId::new(1), "Leanne Graham", "Bret"),
///     User::new(UserId::new(2), "Ervin Howell", "Antonette"),
/// ];
/// let criteria = FilterCriteria::new().with_search_text("ANTON");
///
/// let filtered = filter_users(&users, &criteria);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered.first().map(|user| user.name()), Some("Ervin Howell"));
/// ```
#[must_use]
pub fn filter_users<'a>(users: &'a [User], criteria: &FilterCriteria) -> Vec<&'a User> {
    let matcher = Matcher::new(criteria);
    users.iter().filter(|user| matcher.matches(user)).collect()
}

/// Distinct cities across all users, sorted ascending.
#[must_use]
pub fn city_options(users: &[User]) -> Vec<&str> {
    distinct_sorted(users.iter().map(User::city))
}

/// Distinct company names across all users, sorted ascending.
#[must_use]
pub fn company_options(users: &[User]) -> Vec<&str> {
    distinct_sorted(users.iter().map(User::company_name))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
