use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetClinicError {
    #[error("Owner not found with id: {id}")]
    OwnerNotFound { id: u32 },

    #[error("Pet not found with id: {pet_id} for owner {owner_id}")]
    PetNotFound { owner_id: u32, pet_id: u32 },

    #[error("Repository error: {message}")]
    RepositoryError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PetClinicError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PetClinicError::OwnerNotFound { .. } | PetClinicError::PetNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PetClinicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_lookup_failures_are_not_found() {
        assert!(PetClinicError::OwnerNotFound { id: 1 }.is_not_found());
        assert!(PetClinicError::PetNotFound { owner_id: 1, pet_id: 2 }.is_not_found());

        let repository = PetClinicError::RepositoryError {
            message: "down".to_string(),
        };
        assert!(!repository.is_not_found());
        let config = PetClinicError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!config.is_not_found());
    }

    #[test]
    fn test_toml_errors_convert() {
        let err: PetClinicError = toml::from_str::<toml::Table>("= nope").unwrap_err().into();
        assert!(err.to_string().starts_with("TOML parsing error"));
    }
}
