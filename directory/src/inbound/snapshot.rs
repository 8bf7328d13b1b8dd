//! Serialisable snapshot of the presentation boundary.
//!
//! A snapshot carries everything a renderer needs from one
//! [`DirectoryView`]: load status, card summaries for the filtered users,
//! facet options, the criteria echo, and the detail projection of the
//! selected user. Field names are camelCase to match the JSON the remote
//! source speaks.

use serde::Serialize;

use crate::domain::{DirectoryState, DirectoryView, LoadState, Theme, User};

/// Load status as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// The fetch is outstanding.
    Loading,
    /// The user list is available.
    Loaded,
    /// The fetch failed; see `errorMessage`.
    Error,
}

/// Colour scheme as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl From<Theme> for ThemeName {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

/// Echo of the active criteria; `None` facets render as "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaSnapshot<'a> {
    /// Free-text search.
    pub search_text: &'a str,
    /// Selected city.
    pub city: Option<&'a str>,
    /// Selected company.
    pub company: Option<&'a str>,
}

/// Summary shown on one user card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCard<'a> {
    /// Source identifier, used to request the detail view.
    pub id: u64,
    /// Avatar initials.
    pub initials: String,
    /// Full name.
    pub name: &'a str,
    /// Email address.
    pub email: &'a str,
    /// Company name.
    pub company: &'a str,
    /// City.
    pub city: &'a str,
}

impl<'a> From<&'a User> for UserCard<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id().get(),
            initials: user.initials(),
            name: user.name(),
            email: user.contact().email.as_str(),
            company: user.company_name(),
            city: user.city(),
        }
    }
}

/// Company block of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail<'a> {
    /// Company name.
    pub name: &'a str,
    /// Company slogan.
    pub catch_phrase: &'a str,
    /// Short business description.
    pub bs: &'a str,
}

/// Full detail projection of the selected user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail<'a> {
    /// Source identifier.
    pub id: u64,
    /// Avatar initials.
    pub initials: String,
    /// Full name.
    pub name: &'a str,
    /// `@username`.
    pub handle: String,
    /// Email address.
    pub email: &'a str,
    /// Phone number.
    pub phone: &'a str,
    /// Website host name.
    pub website: &'a str,
    /// Link target for the website.
    pub website_url: String,
    /// `"{street}, {suite}"` then `"{city}, {zipcode}"`.
    pub address_lines: [String; 2],
    /// Employer block.
    pub company: CompanyDetail<'a>,
}

impl<'a> From<&'a User> for UserDetail<'a> {
    fn from(user: &'a User) -> Self {
        let contact = user.contact();
        let company = user.company();
        Self {
            id: user.id().get(),
            initials: user.initials(),
            name: user.name(),
            handle: user.handle(),
            email: contact.email.as_str(),
            phone: contact.phone.as_str(),
            website: contact.website.as_str(),
            website_url: user.website_url(),
            address_lines: [user.address().street_line(), user.address().locality_line()],
            company: CompanyDetail {
                name: company.name.as_str(),
                catch_phrase: company.catch_phrase.as_str(),
                bs: company.bs.as_str(),
            },
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySnapshot<'a> {
    /// Load status.
    pub status: LoadStatus,
    /// Failure message when `status` is `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<&'a str>,
    /// Whether the renderer should offer a manual reload.
    pub reload_offered: bool,
    /// Colour scheme.
    pub theme: ThemeName,
    /// Size of the full, unfiltered user set.
    pub total_users: usize,
    /// Active criteria.
    pub criteria: CriteriaSnapshot<'a>,
    /// Whether the "clear all filters" action applies.
    pub has_active_filters: bool,
    /// City facet options, from the full set.
    pub city_options: Vec<&'a str>,
    /// Company facet options, from the full set.
    pub company_options: Vec<&'a str>,
    /// Cards for the filtered users, in source order.
    pub users: Vec<UserCard<'a>>,
    /// Loaded, but nothing matches the criteria.
    pub empty_result: bool,
    /// Detail view of the selected user, when open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_user: Option<UserDetail<'a>>,
}

impl<'a> From<DirectoryView<'a>> for DirectorySnapshot<'a> {
    fn from(view: DirectoryView<'a>) -> Self {
        let (status, error_message) = match view.load {
            LoadState::Loading => (LoadStatus::Loading, None),
            LoadState::Loaded => (LoadStatus::Loaded, None),
            LoadState::Failed(failure) => (LoadStatus::Error, Some(failure.message())),
        };
        let empty_result = view.is_empty_result();
        let has_active_filters = view.has_active_filters();
        Self {
            status,
            error_message,
            reload_offered: error_message.is_some(),
            theme: view.theme.into(),
            total_users: view.users.len(),
            criteria: CriteriaSnapshot {
                search_text: view.criteria.search_text(),
                city: view.criteria.city(),
                company: view.criteria.company(),
            },
            has_active_filters,
            city_options: view.cities,
            company_options: view.companies,
            users: view.filtered.into_iter().map(UserCard::from).collect(),
            empty_result,
            selected_user: view.selected.map(UserDetail::from),
        }
    }
}

/// Render the current state as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error if encoding fails.
///
/// # Examples
/// ```
/// use user_directory::domain::DirectoryState;
/// use user_directory::inbound::snapshot::render_json;
///
/// let json = render_json(&DirectoryState::new()).expect("render");
/// assert!(json.contains("\"status\": \"loading\""));
/// ```
pub fn render_json(state: &DirectoryState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DirectorySnapshot::from(state.view()))
}
