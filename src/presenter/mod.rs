//! Screen presenters: turn catalog data and route parameters into plain view
//! models, and translate user actions into router requests. No egui here; the
//! `ui` module draws whatever these return.

pub mod detail;
pub mod list;
pub mod onboarding;

pub use detail::{DetailPresenter, DetailView};
pub use list::ListPresenter;
pub use onboarding::OnboardingPresenter;

/// Headline shared by the onboarding and list screens.
pub const HEADLINE: &str = "Adopt a Puppy";
