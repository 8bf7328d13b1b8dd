//! Directory session state and its reducer.
//!
//! All presentation state lives in one immutable [`DirectoryState`]. Inputs
//! arrive as [`DirectoryAction`]s and [`DirectoryState::reduce`] returns the
//! next state; nothing else mutates it. [`DirectoryState::view`] derives the
//! filtered users and facet options afresh on every call.

use super::filter::{city_options, company_options, filter_users};
use super::{FilterCriteria, LoadFailure, User, UserId};

/// Progress of the session's single fetch.
///
/// `Loaded` and `Failed` are terminal for a session; only a reload request
/// starts a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The fetch is outstanding.
    #[default]
    Loading,
    /// The user list arrived and is held for the session.
    Loaded,
    /// The fetch failed; the user list stays empty.
    Failed(LoadFailure),
}

impl LoadState {
    /// Whether the fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Failure details when the fetch failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Loading | Self::Loaded => None,
        }
    }
}

/// Colour scheme flag. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme; the initial value.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// The other scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark scheme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Inputs accepted by [`DirectoryState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryAction {
    /// The fetch succeeded with these users, in source order.
    UsersLoaded(Vec<User>),
    /// The fetch failed.
    LoadFailed(LoadFailure),
    /// Start a new session after a failure.
    ReloadRequested,
    /// The search box changed.
    SearchTextChanged(String),
    /// A city was picked; an empty string selects "all cities".
    CitySelected(String),
    /// A company was picked; an empty string selects "all companies".
    CompanySelected(String),
    /// Reset search text and both facets.
    FiltersCleared,
    /// Open the detail view for a user.
    UserSelected(UserId),
    /// Close the detail view.
    DetailClosed,
    /// Flip the colour scheme.
    ThemeToggled,
}

impl From<Result<Vec<User>, LoadFailure>> for DirectoryAction {
    fn from(outcome: Result<Vec<User>, LoadFailure>) -> Self {
        match outcome {
            Ok(users) => Self::UsersLoaded(users),
            Err(failure) => Self::LoadFailed(failure),
        }
    }
}

/// Complete presentation state of one directory session.
///
/// # Examples
/// ```
/// use user_directory::domain::{DirectoryAction, DirectoryState, User, UserId};
///
/// let state = DirectoryState::new()
///     .reduce(DirectoryAction::UsersLoaded(vec![
///         User::new(UserId::new(1), "Leanne Graham", "Bret"),
///         User::new(UserId::new(2), "Ervin Howell", "Antonette"),
///     ]))
///     .reduce(DirectoryAction::SearchTextChanged("leanne".to_owned()));
///
/// let view = state.view();
/// assert_eq!(view.users.len(), 2);
/// assert_eq!(view.filtered.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryState {
    load: LoadState,
    users: Vec<User>,
    criteria: FilterCriteria,
    selected: Option<UserId>,
    theme: Theme,
}

impl DirectoryState {
    /// Fresh session: loading, no users, empty criteria, light theme.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            load: LoadState::Loading,
            users: Vec::new(),
            criteria: FilterCriteria::new(),
            selected: None,
            theme: Theme::Light,
        }
    }

    /// Apply one action and return the next state.
    ///
    /// Load outcomes are only accepted while loading, so a loaded user set is
    /// never replaced within a session. Selecting an unknown user is ignored.
    #[must_use]
    pub fn reduce(self, action: DirectoryAction) -> Self {
        match action {
            DirectoryAction::UsersLoaded(users) if self.load.is_loading() => Self {
                load: LoadState::Loaded,
                users,
                ..self
            },
            DirectoryAction::LoadFailed(failure) if self.load.is_loading() => Self {
                load: LoadState::Failed(failure),
                users: Vec::new(),
                ..self
            },
            DirectoryAction::ReloadRequested if self.load.failure().is_some() => Self {
                theme: self.theme,
                ..Self::new()
            },
            DirectoryAction::SearchTextChanged(text) => Self {
                criteria: self.criteria.with_search_text(text),
                ..self
            },
            DirectoryAction::CitySelected(city) => Self {
                criteria: self.criteria.with_city(city),
                ..self
            },
            DirectoryAction::CompanySelected(company) => Self {
                criteria: self.criteria.with_company(company),
                ..self
            },
            DirectoryAction::FiltersCleared => Self {
                criteria: FilterCriteria::new(),
                ..self
            },
            DirectoryAction::UserSelected(id) if self.user(id).is_some() => Self {
                selected: Some(id),
                ..self
            },
            DirectoryAction::DetailClosed => Self {
                selected: None,
                ..self
            },
            DirectoryAction::ThemeToggled => Self {
                theme: self.theme.toggled(),
                ..self
            },
            DirectoryAction::UsersLoaded(_)
            | DirectoryAction::LoadFailed(_)
            | DirectoryAction::ReloadRequested
            | DirectoryAction::UserSelected(_) => self,
        }
    }

    /// Progress of the session's fetch.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Every loaded user in source order; empty unless loaded.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// User shown in the detail view, if it is open.
    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.selected.and_then(|id| self.user(id))
    }

    /// Current colour scheme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the presentation should offer a manual reload.
    #[must_use]
    pub const fn offers_reload(&self) -> bool {
        self.load.failure().is_some()
    }

    /// Derive everything the presentation renders from the current state.
    #[must_use]
    pub fn view(&self) -> DirectoryView<'_> {
        DirectoryView {
            load: &self.load,
            users: &self.users,
            filtered: filter_users(&self.users, &self.criteria),
            cities: city_options(&self.users),
            companies: company_options(&self.users),
            criteria: &self.criteria,
            selected: self.selected_user(),
            theme: self.theme,
        }
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }
}

/// Derived, borrowed projection of a [`DirectoryState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView<'a> {
    /// Progress of the session's fetch.
    pub load: &'a LoadState,
    /// Every loaded user.
    pub users: &'a [User],
    /// Users passing the criteria, in source order.
    pub filtered: Vec<&'a User>,
    /// Distinct cities across every loaded user, sorted.
    pub cities: Vec<&'a str>,
    /// Distinct company names across every loaded user, sorted.
    pub companies: Vec<&'a str>,
    /// Criteria the filtered list was derived from.
    pub criteria: &'a FilterCriteria,
    /// User shown in the detail view, if it is open.
    pub selected: Option<&'a User>,
    /// Colour scheme.
    pub theme: Theme,
}

impl DirectoryView<'_> {
    /// Loaded with users, yet nothing passes the criteria.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        matches!(self.load, LoadState::Loaded) && !self.users.is_empty() && self.filtered.is_empty()
    }

    /// Whether the "clear all filters" action applies.
    #[must_use]
    pub const fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters()
    }
}

#[cfg(test)]
mod tests {
    //! Reducer transitions and view derivation.

    use super::*;
    use crate::domain::{Address, Company};
    use rstest::{fixture, rstest};

    fn user(id: u64, name: &str, username: &str, city: &str, company: &str) -> User {
        User::new(UserId::new(id), name, username)
            .with_address(Address {
                city: city.to_owned(),
                ..Address::default()
            })
            .with_company(Company {
                name: company.to_owned(),
                ..Company::default()
            })
    }

    #[fixture]
    fn users() -> Vec<User> {
        vec![
            user(1, "Leanne Graham", "Bret", "Gwenborough", "Romaguera-Crona"),
            user(
                2,
                "Ervin Howell",
                "Antonette",
                "Wisokyburgh",
                "Deckow-Crist",
            ),
        ]
    }

    #[fixture]
    fn loaded(users: Vec<User>) -> DirectoryState {
        DirectoryState::new().reduce(DirectoryAction::UsersLoaded(users))
    }

    #[test]
    fn new_session_is_loading_and_empty() {
        let state = DirectoryState::new();
        let view = state.view();

        assert!(state.load_state().is_loading());
        assert!(view.users.is_empty());
        assert!(view.filtered.is_empty());
        assert!(view.cities.is_empty());
        assert!(!view.is_empty_result());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[rstest]
    fn loaded_session_exposes_full_set(loaded: DirectoryState, users: Vec<User>) {
        assert_eq!(loaded.load_state(), &LoadState::Loaded);
        assert_eq!(loaded.users(), users.as_slice());
        assert_eq!(loaded.view().filtered.len(), 2);
    }

    #[rstest]
    fn load_outcomes_after_loading_are_ignored(loaded: DirectoryState) {
        let replaced = loaded
            .clone()
            .reduce(DirectoryAction::UsersLoaded(Vec::new()))
            .reduce(DirectoryAction::LoadFailed(LoadFailure::new("late")));
        assert_eq!(replaced, loaded);
    }

    #[test]
    fn failed_session_has_empty_derivations() {
        let failure = LoadFailure::new("failed to fetch users: status 500");
        let state = DirectoryState::new().reduce(DirectoryAction::LoadFailed(failure));
        let view = state.view();

        assert_eq!(
            state.load_state().failure().map(LoadFailure::message),
            Some("failed to fetch users: status 500")
        );
        assert!(view.filtered.is_empty());
        assert!(view.cities.is_empty());
        assert!(view.companies.is_empty());
        assert!(state.offers_reload());
    }

    #[rstest]
    fn reload_only_applies_after_failure(loaded: DirectoryState) {
        let unchanged = loaded.clone().reduce(DirectoryAction::ReloadRequested);
        assert_eq!(unchanged, loaded);

        let failed = DirectoryState::new()
            .reduce(DirectoryAction::ThemeToggled)
            .reduce(DirectoryAction::SearchTextChanged("lea".to_owned()))
            .reduce(DirectoryAction::LoadFailed(LoadFailure::new("offline")));
        let reloaded = failed.reduce(DirectoryAction::ReloadRequested);

        assert!(reloaded.load_state().is_loading());
        assert!(!reloaded.criteria().has_active_filters());
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[rstest]
    fn search_then_clear_restores_full_list(loaded: DirectoryState, users: Vec<User>) {
        let searched = loaded
            .reduce(DirectoryAction::SearchTextChanged("leanne".to_owned()))
            .reduce(DirectoryAction::CitySelected("Gwenborough".to_owned()))
            .reduce(DirectoryAction::CompanySelected("Romaguera-Crona".into()));
        let view = searched.view();
        let names: Vec<&str> = view.filtered.into_iter().map(User::name).collect();
        assert_eq!(names, vec!["Leanne Graham"]);
        assert!(searched.view().has_active_filters());

        let cleared = searched.reduce(DirectoryAction::FiltersCleared);
        let expected: Vec<&User> = users.iter().collect();
        assert_eq!(cleared.view().filtered, expected);
    }

    #[rstest]
    fn options_ignore_active_filters(loaded: DirectoryState) {
        let state = loaded.reduce(DirectoryAction::CitySelected("Wisokyburgh".to_owned()));
        let view = state.view();

        assert_eq!(view.filtered.len(), 1);
        assert_eq!(view.cities, vec!["Gwenborough", "Wisokyburgh"]);
        assert_eq!(view.companies, vec!["Deckow-Crist", "Romaguera-Crona"]);
    }

    #[rstest]
    fn no_match_is_an_empty_result(loaded: DirectoryState) {
        let state = loaded.reduce(DirectoryAction::SearchTextChanged("nobody".to_owned()));
        assert!(state.view().is_empty_result());
    }

    #[rstest]
    fn selecting_opens_and_closing_clears_detail(loaded: DirectoryState) {
        let opened = loaded.reduce(DirectoryAction::UserSelected(UserId::new(2)));
        assert_eq!(opened.selected_user().map(User::name), Some("Ervin Howell"));

        let closed = opened.reduce(DirectoryAction::DetailClosed);
        assert!(closed.selected_user().is_none());
    }

    #[rstest]
    fn selecting_unknown_user_is_ignored(loaded: DirectoryState) {
        let unknown = DirectoryAction::UserSelected(UserId::new(99));
        let state = loaded.clone().reduce(unknown);
        assert_eq!(state, loaded);
    }

    #[rstest]
    fn selection_does_not_touch_data(loaded: DirectoryState) {
        let users_before = loaded.users().to_vec();
        let state = loaded.reduce(DirectoryAction::UserSelected(UserId::new(1)));
        assert_eq!(state.users(), users_before.as_slice());
        assert_eq!(state.view().filtered.len(), 2);
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        let state = DirectoryState::new().reduce(DirectoryAction::ThemeToggled);
        assert!(state.theme().is_dark());
        let toggled_back = state.reduce(DirectoryAction::ThemeToggled);
        assert_eq!(toggled_back.theme(), Theme::Light);
    }

    #[test]
    fn load_outcome_converts_into_action() {
        let ok: Result<Vec<User>, LoadFailure> = Ok(Vec::new());
        let loaded = DirectoryAction::UsersLoaded(Vec::new());
        assert_eq!(DirectoryAction::from(ok), loaded);

        let err: Result<Vec<User>, LoadFailure> = Err(LoadFailure::new("down"));
        assert_eq!(
            DirectoryAction::from(err),
            DirectoryAction::LoadFailed(LoadFailure::new("down"))
        );
    }
}
