use crate::domain::model::{Owner, Pet, PetType, Visit};
use crate::domain::ports::{OwnerRepository, Page, PageRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    owners: BTreeMap<u32, Owner>,
    pet_types: Vec<PetType>,
    next_owner_id: u32,
    next_pet_id: u32,
    next_visit_id: u32,
}

impl Tables {
    fn assign_ids(&mut self, owner: &mut Owner) {
        if owner.id.is_none() {
            self.next_owner_id += 1;
            owner.id = Some(self.next_owner_id);
        }
        for pet in &mut owner.pets {
            if pet.id.is_none() {
                self.next_pet_id += 1;
                pet.id = Some(self.next_pet_id);
            }
            for visit in &mut pet.visits {
                if visit.id.is_none() {
                    self.next_visit_id += 1;
                    visit.id = Some(self.next_visit_id);
                }
            }
        }
    }

    fn matching(&self, predicate: impl Fn(&Owner) -> bool) -> Vec<Owner> {
        self.owners
            .values()
            .filter(|owner| predicate(owner))
            .cloned()
            .collect()
    }
}

/// Owner aggregates held in process memory, in id order.
#[derive(Debug, Default)]
pub struct InMemoryOwnerRepository {
    tables: RwLock<Tables>,
}

impl InMemoryOwnerRepository {
    pub fn new(pet_types: Vec<PetType>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                pet_types,
                ..Tables::default()
            }),
        }
    }

    pub fn with_default_pet_types() -> Self {
        Self::new(default_pet_types())
    }

    /// The classic clinic data set: 10 owners, 13 pets and 4 visits.
    pub fn with_sample_data() -> Self {
        let pet_types = default_pet_types();
        let mut tables = Tables {
            pet_types: pet_types.clone(),
            ..Tables::default()
        };

        for mut owner in sample_owners(&pet_types) {
            tables.assign_ids(&mut owner);
            if let Some(id) = owner.id {
                tables.owners.insert(id, owner);
            }
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_pet_types(&self) -> Result<Vec<PetType>> {
        let tables = self.tables.read().await;
        let mut types = tables.pet_types.clone();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn find_by_last_name_starting_with(
        &self,
        last_name: &str,
        page: PageRequest,
    ) -> Result<Page<Owner>> {
        let tables = self.tables.read().await;
        let results = tables.matching(|owner| owner.last_name.starts_with(last_name));
        tracing::debug!(
            "Last name prefix '{}' matched {} owners",
            last_name,
            results.len()
        );
        Ok(Page::from_results(results, page))
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<Owner>> {
        let tables = self.tables.read().await;
        Ok(Page::from_results(tables.matching(|_| true), page))
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Owner>> {
        let tables = self.tables.read().await;
        Ok(tables.owners.get(&id).cloned())
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner> {
        let mut tables = self.tables.write().await;
        tables.assign_ids(&mut owner);
        if let Some(id) = owner.id {
            tables.next_owner_id = tables.next_owner_id.max(id);
            tables.owners.insert(id, owner.clone());
        }
        Ok(owner)
    }
}

pub fn default_pet_types() -> Vec<PetType> {
    ["cat", "dog", "lizard", "snake", "bird", "hamster"]
        .iter()
        .zip(1..)
        .map(|(name, id)| PetType::new(id, *name))
        .collect()
}

fn sample_owners(pet_types: &[PetType]) -> Vec<Owner> {
    let owners = [
        ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
        ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
        ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
        ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
        ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
        ("Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
        ("Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
        ("Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
        ("David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
        ("Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
    ];
    // (owner index, name, birth date, type)
    let pets = [
        (0, "Leo", (2010, 9, 7), "cat"),
        (1, "Basil", (2012, 8, 6), "hamster"),
        (2, "Rosy", (2011, 4, 17), "dog"),
        (2, "Jewel", (2010, 3, 7), "dog"),
        (3, "Iggy", (2010, 11, 30), "lizard"),
        (4, "George", (2010, 1, 20), "snake"),
        (5, "Samantha", (2012, 9, 4), "cat"),
        (5, "Max", (2012, 9, 4), "cat"),
        (6, "Lucky", (2011, 8, 6), "bird"),
        (7, "Mulligan", (2007, 2, 24), "dog"),
        (8, "Freddy", (2010, 3, 9), "bird"),
        (9, "Lucky", (2010, 6, 24), "dog"),
        (9, "Sly", (2012, 6, 8), "cat"),
    ];
    // (owner index, pet name, date, description)
    let visits = [
        (5, "Samantha", (2013, 1, 1), "rabies shot"),
        (5, "Max", (2013, 1, 2), "rabies shot"),
        (5, "Max", (2013, 1, 3), "neutered"),
        (5, "Samantha", (2013, 1, 4), "spayed"),
    ];

    let date = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d);

    let mut result: Vec<Owner> = owners
        .iter()
        .map(|(first, last, address, city, telephone)| Owner {
            id: None,
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            telephone: telephone.to_string(),
            pets: Vec::new(),
        })
        .collect();

    for (owner_index, name, birth_date, type_name) in pets {
        result[owner_index].add_pet(Pet {
            id: None,
            name: name.to_string(),
            birth_date: date(birth_date),
            pet_type: pet_types.iter().find(|t| t.name == type_name).cloned(),
            visits: Vec::new(),
        });
    }

    for (owner_index, pet_name, visit_date, description) in visits {
        let pet = result[owner_index]
            .pets
            .iter_mut()
            .find(|pet| pet.name == pet_name);
        if let (Some(pet), Some(visit_date)) = (pet, date(visit_date)) {
            pet.add_visit(Visit {
                id: None,
                date: visit_date,
                description: description.to_string(),
            });
        }
    }

    result
}
