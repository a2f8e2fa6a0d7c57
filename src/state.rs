use std::time::Instant;

use crate::color::BreedColors;
use crate::data::catalog::Catalog;
use crate::presenter::{DetailPresenter, ListPresenter, OnboardingPresenter};
use crate::router::{Route, RouteName, RouteParams, Router};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Read-only puppy catalog, built once at startup.
    pub catalog: Catalog,

    /// Active route and pending timed transitions.
    pub router: Router,

    pub onboarding: OnboardingPresenter,
    pub list: ListPresenter,
    pub detail: DetailPresenter,

    /// Chip colour per breed.
    pub breed_colors: BreedColors,

    /// Last rejected navigation, shown in the UI.
    pub status_message: Option<String>,

    /// Route whose presenter lifecycle was last synced, with its revision.
    synced: Option<(u64, Route)>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let breed_colors = BreedColors::new(&catalog.breeds());
        Self {
            catalog,
            router: Router::new(),
            onboarding: OnboardingPresenter::default(),
            list: ListPresenter::default(),
            detail: DetailPresenter,
            breed_colors,
            status_message: None,
            synced: None,
        }
    }

    /// Fire due timers, then activate or tear down presenters to match the
    /// active route. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.router.tick(now);
        self.sync_lifecycle(now);
    }

    fn sync_lifecycle(&mut self, now: Instant) {
        let revision = self.router.revision();
        let current = self.router.current();
        if self.synced.map(|(rev, _)| rev) == Some(revision) {
            return;
        }

        let previous = self.synced.map(|(_, route)| route);
        if previous == Some(Route::Onboarding) && current != Route::Onboarding {
            self.onboarding.teardown(&mut self.router);
        }
        match current {
            Route::Onboarding => self.onboarding.activate(&mut self.router, now),
            Route::PuppyDetail { puppy_id } => {
                if let Err(e) = self.catalog.find_by_id(puppy_id) {
                    log::warn!("Showing empty detail screen: {e}");
                }
            }
            Route::PuppyList => {}
        }
        self.synced = Some((revision, current));
    }

    /// Navigate, keeping any rejection visible to the user.
    pub fn navigate(&mut self, name: RouteName, params: &RouteParams) {
        match self.router.navigate(name, params) {
            Ok(()) => self.status_message = None,
            Err(e) => self.status_message = Some(format!("Error: {e}")),
        }
    }

    /// Navigate by path (`puppy_detail/1001`), the form a shell link carries.
    pub fn navigate_path(&mut self, path: &str) {
        match self.router.navigate_path(path) {
            Ok(()) => self.status_message = None,
            Err(e) => self.status_message = Some(format!("Error: {e}")),
        }
    }

    /// Host back behaviour: detail returns to the list.
    pub fn back(&mut self) {
        if matches!(self.router.current(), Route::PuppyDetail { .. }) {
            self.navigate_path(&Route::PuppyList.path());
        }
    }

    /// Select the card at `position` of the visible list.
    pub fn select_puppy(&mut self, position: usize) {
        self.list.select(&self.catalog, position, &mut self.router);
    }

    pub fn skip_onboarding(&mut self) {
        self.onboarding.skip(&mut self.router);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::data::model::PuppyId;
    use crate::presenter::onboarding::SPLASH_DELAY;
    use crate::router::PUPPY_ID;

    fn state() -> AppState {
        AppState::new(Catalog::seed().unwrap())
    }

    #[test]
    fn test_onboarding_advances_exactly_once() {
        let mut state = state();
        let t0 = Instant::now();
        // Many frames on the splash must not re-arm the timer.
        for ms in (0..2000).step_by(16) {
            state.tick(t0 + Duration::from_millis(ms));
        }
        assert_eq!(state.router.current(), Route::Onboarding);

        state.tick(t0 + SPLASH_DELAY);
        assert_eq!(state.router.current(), Route::PuppyList);
        assert_eq!(state.router.revision(), 1);

        state.tick(t0 + SPLASH_DELAY * 5);
        assert_eq!(state.router.revision(), 1);
        assert_eq!(state.router.next_deadline(), None);
    }

    #[test]
    fn test_leaving_onboarding_cancels_timer() {
        let mut state = state();
        let t0 = Instant::now();
        state.tick(t0);
        state.navigate(RouteName::PuppyDetail, &RouteParams::puppy(PuppyId(1002)));
        state.tick(t0 + Duration::from_millis(10));
        assert_eq!(state.router.next_deadline(), None);

        state.tick(t0 + SPLASH_DELAY);
        assert_eq!(
            state.router.current(),
            Route::PuppyDetail {
                puppy_id: PuppyId(1002)
            }
        );
    }

    #[test]
    fn test_skip_then_select_then_back() {
        let mut state = state();
        let t0 = Instant::now();
        state.tick(t0);
        state.skip_onboarding();
        state.tick(t0);
        assert_eq!(state.router.current(), Route::PuppyList);

        state.select_puppy(0);
        assert_eq!(
            state.router.current(),
            Route::PuppyDetail {
                puppy_id: PuppyId(1001)
            }
        );

        state.back();
        assert_eq!(state.router.current(), Route::PuppyList);
        state.tick(t0 + SPLASH_DELAY);
        assert_eq!(state.router.current(), Route::PuppyList);
    }

    #[test]
    fn test_rejected_navigation_sets_status() {
        let mut state = state();
        state.navigate(RouteName::PuppyList, &RouteParams::new().with(PUPPY_ID, 5));
        assert_eq!(state.router.current(), Route::Onboarding);
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("does not accept")));

        state.navigate(RouteName::PuppyList, &RouteParams::new());
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_back_is_noop_outside_detail() {
        let mut state = state();
        state.navigate(RouteName::PuppyList, &RouteParams::new());
        let revision = state.router.revision();
        state.back();
        assert_eq!(state.router.revision(), revision);
        assert_eq!(state.router.current(), Route::PuppyList);
    }

    #[test]
    fn test_navigate_path_decodes_puppy_id() {
        let mut state = state();
        state.navigate_path("puppy_detail/1005");
        assert_eq!(
            state.router.current(),
            Route::PuppyDetail {
                puppy_id: PuppyId(1005)
            }
        );
        assert_eq!(state.status_message, None);

        state.navigate_path("puppy_detail/nugget");
        assert_eq!(
            state.router.current(),
            Route::PuppyDetail {
                puppy_id: PuppyId(1005)
            }
        );
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("invalid value 'nugget'")));
    }

    #[test]
    fn test_returning_to_onboarding_rearms() {
        let mut state = state();
        let t0 = Instant::now();
        state.tick(t0);
        state.skip_onboarding();
        state.tick(t0);

        state.navigate(RouteName::Onboarding, &RouteParams::new());
        let t1 = t0 + Duration::from_secs(10);
        state.tick(t1);
        assert_eq!(state.router.next_deadline(), Some(t1 + SPLASH_DELAY));

        state.tick(t1 + SPLASH_DELAY);
        assert_eq!(state.router.current(), Route::PuppyList);
    }
}
