use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    pub id: u32,
    pub name: String,
}

impl PetType {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: Option<u32>,
    pub date: NaiveDate,
    pub description: String,
}

impl Visit {
    /// A new, unsaved visit dated `date` with an empty description.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            description: String::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Option<u32>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
    pub visits: Vec<Visit>,
}

impl Pet {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Appends `pet` to the collection. Pets that already carry an id are
    /// updated in place through [`Owner::pet_by_id_mut`] instead.
    pub fn add_pet(&mut self, pet: Pet) {
        if pet.is_new() {
            self.pets.push(pet);
        }
    }

    /// Case-insensitive lookup by name. With `ignore_new` set, unsaved pets
    /// are skipped.
    pub fn pet(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        let wanted = name.to_lowercase();
        self.pets
            .iter()
            .filter(|pet| !ignore_new || !pet.is_new())
            .find(|pet| pet.name.to_lowercase() == wanted)
    }

    pub fn pet_by_id(&self, pet_id: u32) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == Some(pet_id))
    }

    pub fn pet_by_id_mut(&mut self, pet_id: u32) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id == Some(pet_id))
    }
}
