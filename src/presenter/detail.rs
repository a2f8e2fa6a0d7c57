use crate::data::catalog::Catalog;
use crate::data::model::{PuppyId, PuppyRecord};
use crate::images::image_url;

pub const DESCRIPTION: &str = "A playful, healthy companion looking for a loving home. \
Vaccinated, microchipped and used to children and other pets. \
Come and meet them at the shelter any day of the week.";

pub const ADOPT_LABEL: &str = "Adopt Now";

/// The attribute block shown for a found puppy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub id: PuppyId,
    pub name: String,
    pub age: String,
    pub color: String,
    pub sex: String,
    pub weight: String,
    pub description: &'static str,
    pub image_url: String,
}

impl From<&PuppyRecord> for DetailFields {
    fn from(record: &PuppyRecord) -> Self {
        DetailFields {
            id: record.id,
            name: record.name.clone(),
            age: record.age.to_string(),
            color: record.color.clone(),
            sex: record.sex.clone(),
            weight: record.weight.clone(),
            description: DESCRIPTION,
            image_url: image_url(record).to_string(),
        }
    }
}

impl DetailFields {
    /// Label/value pairs in display order.
    pub fn attributes(&self) -> [(&'static str, &str); 4] {
        [
            ("Age", self.age.as_str()),
            ("Color", self.color.as_str()),
            ("Sex", self.sex.as_str()),
            ("Weight", self.weight.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found(DetailFields),
    NotFound { puppy_id: PuppyId },
}

/// Detail screen. Stateless: everything comes from the route parameter.
#[derive(Debug, Default)]
pub struct DetailPresenter;

impl DetailPresenter {
    pub fn view(&self, catalog: &Catalog, puppy_id: PuppyId) -> DetailView {
        match catalog.find_by_id(puppy_id) {
            Ok(record) => DetailView::Found(DetailFields::from(record)),
            Err(e) => {
                log::debug!("Detail view: {e}");
                DetailView::NotFound { puppy_id }
            }
        }
    }

    /// There is no adoption backend; the button only records the tap.
    pub fn adopt(&self, puppy_id: PuppyId) {
        log::info!("Adopt tapped for puppy {puppy_id}");
    }
}
