use std::time::{Duration, Instant};

use crate::router::{RouteName, RouteParams, Router, TimerId};

use super::HEADLINE;

/// How long the splash stays up before moving on to the list.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingView {
    pub headline: &'static str,
}

/// Splash screen. Owns the auto-advance timer for as long as it is active.
#[derive(Debug, Default)]
pub struct OnboardingPresenter {
    timer: Option<TimerId>,
}

impl OnboardingPresenter {
    /// Arm the auto-advance. Re-activating while a timer is pending keeps the
    /// existing one.
    pub fn activate(&mut self, router: &mut Router, now: Instant) {
        if self.is_armed(router) {
            return;
        }
        match router.schedule_delayed_navigate(
            RouteName::PuppyList,
            &RouteParams::new(),
            SPLASH_DELAY,
            now,
        ) {
            Ok(id) => self.timer = Some(id),
            Err(e) => log::error!("Could not arm onboarding timer: {e}"),
        }
    }

    /// Cancel a pending auto-advance.
    pub fn teardown(&mut self, router: &mut Router) {
        if let Some(id) = self.timer.take() {
            router.cancel(id);
        }
    }

    pub fn is_armed(&self, router: &Router) -> bool {
        self.timer.is_some_and(|id| router.is_pending(id))
    }

    /// Leave the splash right away.
    pub fn skip(&mut self, router: &mut Router) {
        self.teardown(router);
        if let Err(e) = router.navigate(RouteName::PuppyList, &RouteParams::new()) {
            log::error!("Skip failed: {e}");
        }
    }

    pub fn view(&self) -> OnboardingView {
        OnboardingView { headline: HEADLINE }
    }
}
