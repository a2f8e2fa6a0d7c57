use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::data::model::PuppyId;

/// Parameter key carried by the detail route.
pub const PUPPY_ID: &str = "puppyId";

// ---------------------------------------------------------------------------
// Route names and parameters
// ---------------------------------------------------------------------------

/// The closed set of screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Onboarding,
    PuppyList,
    PuppyDetail,
}

impl RouteName {
    /// First path segment of the route.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::Onboarding => "onboarding",
            RouteName::PuppyList => "puppy_list",
            RouteName::PuppyDetail => "puppy_detail",
        }
    }

    /// Parameter keys the route requires, in path order.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            RouteName::Onboarding | RouteName::PuppyList => &[],
            RouteName::PuppyDetail => &[PUPPY_ID],
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = InvalidRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onboarding" => Ok(RouteName::Onboarding),
            "puppy_list" => Ok(RouteName::PuppyList),
            "puppy_detail" => Ok(RouteName::PuppyDetail),
            other => Err(InvalidRoute::UnknownRoute(other.to_string())),
        }
    }
}

/// String-encoded route parameters, as a hosting shell would pass them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{puppyId: "<id>"}`.
    pub fn puppy(id: PuppyId) -> Self {
        Self::new().with(PUPPY_ID, id)
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A navigation request the router refused. The current route is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRoute {
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParameter { route: RouteName, param: &'static str },
    #[error("route '{route}': parameter '{param}' has invalid value '{value}'")]
    InvalidParameter {
        route: RouteName,
        param: &'static str,
        value: String,
    },
    #[error("route '{route}' does not accept parameter '{param}'")]
    UnexpectedParameter { route: RouteName, param: String },
}

// ---------------------------------------------------------------------------
// Route – the typed route state
// ---------------------------------------------------------------------------

/// Active screen plus its decoded parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    PuppyList,
    PuppyDetail { puppy_id: PuppyId },
}

impl Route {
    /// Validate `params` against the shape `name` requires.
    ///
    /// Unknown keys are rejected on every route, including the ones that take
    /// no parameters.
    pub fn resolve(name: RouteName, params: &RouteParams) -> Result<Route, InvalidRoute> {
        let required = name.required_params();
        if let Some(extra) = params.keys().find(|k| !required.contains(k)) {
            return Err(InvalidRoute::UnexpectedParameter {
                route: name,
                param: extra.to_string(),
            });
        }

        match name {
            RouteName::Onboarding => Ok(Route::Onboarding),
            RouteName::PuppyList => Ok(Route::PuppyList),
            RouteName::PuppyDetail => {
                let raw = params.get(PUPPY_ID).ok_or(InvalidRoute::MissingParameter {
                    route: name,
                    param: PUPPY_ID,
                })?;
                let puppy_id = raw.parse::<PuppyId>().map_err(|_| InvalidRoute::InvalidParameter {
                    route: name,
                    param: PUPPY_ID,
                    value: raw.to_string(),
                })?;
                Ok(Route::PuppyDetail { puppy_id })
            }
        }
    }

    /// Decode a deep-link path such as `puppy_detail/1001`.
    pub fn from_path(path: &str) -> Result<Route, InvalidRoute> {
        let mut segments = path.trim_matches('/').split('/');
        let name: RouteName = segments.next().unwrap_or_default().parse()?;

        let mut params = RouteParams::new();
        for key in name.required_params() {
            if let Some(value) = segments.next() {
                params = params.with(key, value);
            }
        }
        if let Some(extra) = segments.next() {
            return Err(InvalidRoute::UnexpectedParameter {
                route: name,
                param: extra.to_string(),
            });
        }
        Route::resolve(name, &params)
    }

    pub fn name(&self) -> RouteName {
        match self {
            Route::Onboarding => RouteName::Onboarding,
            Route::PuppyList => RouteName::PuppyList,
            Route::PuppyDetail { .. } => RouteName::PuppyDetail,
        }
    }

    /// Path form, the inverse of [`Route::from_path`].
    pub fn path(&self) -> String {
        match self {
            Route::PuppyDetail { puppy_id } => format!("{}/{puppy_id}", self.name()),
            other => other.name().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Delayed transitions
// ---------------------------------------------------------------------------

/// Handle to a scheduled one-shot transition, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct PendingTransition {
    id: TimerId,
    /// `None` when the deadline lies beyond what `Instant` can represent;
    /// such a timer never fires but can still be cancelled.
    due: Option<Instant>,
    target: Route,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Owns the active route and any pending timed transitions.
///
/// Everything runs on the caller's thread: timers only fire from [`Router::tick`].
#[derive(Debug)]
pub struct Router {
    current: Route,
    /// Bumped on every transition; the shell re-renders when it changes.
    revision: u64,
    pending: Vec<PendingTransition>,
    next_timer: u64,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Onboarding,
            revision: 0,
            pending: Vec::new(),
            next_timer: 0,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Validate and switch to `name`. On error the current route is kept.
    pub fn navigate(&mut self, name: RouteName, params: &RouteParams) -> Result<(), InvalidRoute> {
        let route = Route::resolve(name, params).inspect_err(|e| {
            log::warn!("Rejected navigation to {name}: {e}");
        })?;
        self.enter(route);
        Ok(())
    }

    /// Navigate using the path encoding, e.g. `puppy_detail/1001`.
    pub fn navigate_path(&mut self, path: &str) -> Result<(), InvalidRoute> {
        let route = Route::from_path(path).inspect_err(|e| {
            log::warn!("Rejected navigation to '{path}': {e}");
        })?;
        self.enter(route);
        Ok(())
    }

    /// Arrange a one-shot transition `delay` after `now`.
    ///
    /// The parameters are validated immediately. The transition fires even if
    /// other navigations happen first, unless [`Router::cancel`] is called.
    pub fn schedule_delayed_navigate(
        &mut self,
        name: RouteName,
        params: &RouteParams,
        delay: Duration,
        now: Instant,
    ) -> Result<TimerId, InvalidRoute> {
        let target = Route::resolve(name, params)?;
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        let due = now.checked_add(delay);
        if due.is_none() {
            log::warn!("Timer {} delay {delay:?} is out of range, it will never fire", id.0);
        }
        self.pending.push(PendingTransition { id, due, target });
        log::debug!("Armed timer {} → {} in {delay:?}", id.0, target.path());
        Ok(id)
    }

    /// Drop a pending transition. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        let removed = self.pending.len() != before;
        if removed {
            log::debug!("Cancelled timer {}", id.0);
        }
        removed
    }

    /// Fire every transition due at `now`, earliest deadline first.
    /// Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due.is_some_and(|due| due <= now));
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.id.0));
        for transition in &due {
            log::debug!("Timer {} fired", transition.id.0);
            self.enter(transition.target);
        }
        due.len()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().filter_map(|p| p.due).min()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    fn enter(&mut self, route: Route) {
        log::info!("Navigate {} → {}", self.current.path(), route.path());
        self.current = route;
        self.revision += 1;
    }
}
