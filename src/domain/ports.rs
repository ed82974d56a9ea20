use crate::domain::model::{Owner, PetType};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: usize,
    pub size: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    /// Slices the requested page out of the complete, already ordered result.
    pub fn from_results(results: Vec<T>, request: PageRequest) -> Self {
        let total_elements = results.len();
        let content = results
            .into_iter()
            .skip(request.offset())
            .take(request.size)
            .collect();

        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_elements.div_ceil(self.size.max(1))
    }
}

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn find_pet_types(&self) -> Result<Vec<PetType>>;

    /// Owners whose last name starts with `last_name`, in id order.
    async fn find_by_last_name_starting_with(
        &self,
        last_name: &str,
        page: PageRequest,
    ) -> Result<Page<Owner>>;

    async fn find_all(&self, page: PageRequest) -> Result<Page<Owner>>;

    /// Loads the owner aggregate with its pets and their visits.
    async fn find_by_id(&self, id: u32) -> Result<Option<Owner>>;

    /// Inserts or replaces the owner aggregate, assigning ids to the owner and
    /// to any new pets and visits. Returns the stored aggregate.
    async fn save(&self, owner: Owner) -> Result<Owner>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
