use crate::data::catalog::Catalog;
use crate::data::filter::visible_indices;
use crate::data::model::{PuppyId, PuppyRecord};
use crate::images::image_url;
use crate::router::{RouteName, RouteParams, Router};

use super::HEADLINE;

pub const TAGLINE: &str = "Your favourite soulmate pet";
pub const SEARCH_HINT: &str = "Search your soulmate pet";

/// One entry of the horizontal strip. There is one chip per puppy, in
/// catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub breed: String,
    pub image_url: String,
    pub selected: bool,
}

/// One card of the vertical list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: PuppyId,
    pub name: String,
    pub breed: String,
    pub color: String,
    pub sex: String,
    pub age_label: String,
    pub image_url: String,
}

impl From<&PuppyRecord> for ListItem {
    fn from(record: &PuppyRecord) -> Self {
        ListItem {
            id: record.id,
            name: record.name.clone(),
            breed: record.breed.clone(),
            color: record.color.clone(),
            sex: record.sex.clone(),
            age_label: record.age_label(),
            image_url: image_url(record).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub search_hint: &'static str,
    pub chips: Vec<FilterChip>,
    pub items: Vec<ListItem>,
}

/// List screen. The only state it keeps is the transient breed selection.
#[derive(Debug, Default)]
pub struct ListPresenter {
    selected_breed: Option<String>,
}

impl ListPresenter {
    pub fn view(&self, catalog: &Catalog) -> ListView {
        let chips = catalog
            .list()
            .iter()
            .map(|record| FilterChip {
                breed: record.breed.clone(),
                image_url: image_url(record).to_string(),
                selected: self.selected_breed.as_deref() == Some(record.breed.as_str()),
            })
            .collect();

        let items = visible_indices(catalog, self.selected_breed.as_deref())
            .into_iter()
            .map(|i| ListItem::from(&catalog.list()[i]))
            .collect();

        ListView {
            headline: HEADLINE,
            tagline: TAGLINE,
            search_hint: SEARCH_HINT,
            chips,
            items,
        }
    }

    /// Open the detail screen for the card at `position` of the visible list.
    /// Returns `false` (and stays put) when there is no such card.
    pub fn select(&self, catalog: &Catalog, position: usize, router: &mut Router) -> bool {
        let visible = visible_indices(catalog, self.selected_breed.as_deref());
        let Some(record) = visible.get(position).map(|&i| &catalog.list()[i]) else {
            log::warn!(
                "Ignoring selection at position {position}, only {} visible",
                visible.len()
            );
            return false;
        };
        router
            .navigate(RouteName::PuppyDetail, &RouteParams::puppy(record.id))
            .is_ok()
    }

    /// Restrict the list to `breed`, or clear the restriction if it is
    /// already active.
    pub fn toggle_breed(&mut self, breed: &str) {
        if self.selected_breed.as_deref() == Some(breed) {
            self.selected_breed = None;
        } else {
            self.selected_breed = Some(breed.to_string());
        }
        log::debug!("Breed filter: {:?}", self.selected_breed);
    }

    pub fn selected_breed(&self) -> Option<&str> {
        self.selected_breed.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;

    fn seeded() -> Catalog {
        Catalog::seed().unwrap()
    }

    #[test]
    fn test_strip_and_list_share_catalog_order() {
        let catalog = seeded();
        let view = ListPresenter::default().view(&catalog);

        assert_eq!(view.chips.len(), catalog.len());
        assert_eq!(view.items.len(), catalog.len());
        for ((chip, item), record) in view.chips.iter().zip(&view.items).zip(catalog.list()) {
            assert_eq!(chip.breed, record.breed);
            assert_eq!(item.id, record.id);
            assert!(!chip.selected);
        }
        assert_eq!(view.items[0].age_label, "1 year");
    }

    #[test]
    fn test_select_navigates_to_detail() {
        let catalog = seeded();
        let presenter = ListPresenter::default();
        let mut router = Router::new();

        assert!(presenter.select(&catalog, 1, &mut router));
        assert_eq!(
            router.current(),
            Route::PuppyDetail {
                puppy_id: catalog.list()[1].id
            }
        );
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let catalog = seeded();
        let mut router = Router::new();
        assert!(!ListPresenter::default().select(&catalog, 99, &mut router));
        assert_eq!(router.current(), Route::Onboarding);
        assert_eq!(router.revision(), 0);
    }

    #[test]
    fn test_breed_toggle_filters_list() {
        let catalog = seeded();
        let mut presenter = ListPresenter::default();
        presenter.toggle_breed("Pug");

        let view = presenter.view(&catalog);
        let names: Vec<&str> = view.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Wand", "Teddy"]);
        assert_eq!(view.chips.len(), catalog.len());
        assert_eq!(view.chips.iter().filter(|c| c.selected).count(), 2);

        let mut router = Router::new();
        assert!(presenter.select(&catalog, 1, &mut router));
        assert_eq!(
            router.current(),
            Route::PuppyDetail {
                puppy_id: PuppyId(1010)
            }
        );

        presenter.toggle_breed("Pug");
        assert_eq!(presenter.selected_breed(), None);
        assert_eq!(presenter.view(&catalog).items.len(), catalog.len());
    }
}
