use crate::{
    error::{RelayError, Result},
    model::{Business, Person},
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

/// On-disk shape of the directory file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryData {
    #[serde(default)]
    pub businesses: Vec<Business>,

    #[serde(default)]
    pub people: Vec<Person>,
}

impl DirectoryData {
    /// Seed data written by `relay-node init`.
    pub fn sample() -> Self {
        Self {
            businesses: vec![
                Business::new("19", "Joe's Diner").with_city("Springfield"),
                Business::new("42", "Acme Hardware").with_city("Shelbyville"),
            ],
            people: vec![
                Person::new(1, "Ada Lovelace")
                    .with_email("ada@example.com")
                    .with_employer("19"),
                Person::new(2, "Grace Hopper").with_email("grace@example.com"),
            ],
        }
    }
}

#[derive(Clone, Default)]
struct Records {
    businesses: BTreeMap<String, Business>,
    people: BTreeMap<u64, Person>,
}

impl Records {
    fn to_data(&self) -> DirectoryData {
        DirectoryData {
            businesses: self.businesses.values().cloned().collect(),
            people: self.people.values().cloned().collect(),
        }
    }
}

/// In-memory store of businesses and people.
///
/// When loaded from a file, every successful mutation is written back to it.
pub struct Directory {
    path: Option<PathBuf>,
    records: RwLock<Records>,
}

impl Directory {
    pub fn from_data(data: DirectoryData) -> Result<Self> {
        let mut records = Records::default();

        for business in data.businesses {
            validation::validate_business_id(&business.id)?;
            validation::validate_name(&business.name)?;
            if records.businesses.contains_key(&business.id) {
                return Err(RelayError::Validation(format!(
                    "Duplicate business id: {}",
                    business.id
                )));
            }
            records.businesses.insert(business.id.clone(), business);
        }

        for person in data.people {
            validation::validate_name(&person.name)?;
            if let Some(ref employer) = person.employer {
                if !records.businesses.contains_key(employer) {
                    return Err(RelayError::Validation(format!(
                        "Person {} references unknown business {}",
                        person.id, employer
                    )));
                }
            }
            if records.people.contains_key(&person.id) {
                return Err(RelayError::Validation(format!(
                    "Duplicate person id: {}",
                    person.id
                )));
            }
            records.people.insert(person.id, person);
        }

        Ok(Self {
            path: None,
            records: RwLock::new(records),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RelayError::NotFound(format!(
                "Directory file: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let data: DirectoryData = serde_yaml::from_str(&content)?;
        let mut directory = Self::from_data(data)?;
        directory.path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "Loaded directory");
        Ok(directory)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn business(&self, id: &str) -> Option<Business> {
        self.records.read().await.businesses.get(id).cloned()
    }

    pub async fn person(&self, id: u64) -> Option<Person> {
        self.records.read().await.people.get(&id).cloned()
    }

    pub async fn businesses(&self) -> Vec<Business> {
        self.records.read().await.businesses.values().cloned().collect()
    }

    pub async fn people(&self) -> Vec<Person> {
        self.records.read().await.people.values().cloned().collect()
    }

    pub async fn employees(&self, business_id: &str) -> Vec<Person> {
        self.records
            .read()
            .await
            .people
            .values()
            .filter(|p| p.employer.as_deref() == Some(business_id))
            .cloned()
            .collect()
    }

    pub async fn rename_business(&self, id: &str, name: &str) -> Result<Business> {
        validation::validate_name(name)?;
        tracing::info!(id = %id, name = %name, "Renaming business");

        self.commit(|records| {
            let business = records
                .businesses
                .get_mut(id)
                .ok_or_else(|| RelayError::NotFound(format!("Business {}", id)))?;
            business.name = name.to_string();
            Ok(business.clone())
        })
        .await
    }

    pub async fn hire(&self, person_id: u64, business_id: &str) -> Result<Person> {
        tracing::info!(person = person_id, business = %business_id, "Hiring person");

        self.commit(|records| {
            if !records.businesses.contains_key(business_id) {
                return Err(RelayError::NotFound(format!("Business {}", business_id)));
            }
            let person = records
                .people
                .get_mut(&person_id)
                .ok_or_else(|| RelayError::NotFound(format!("Person {}", person_id)))?;
            person.employer = Some(business_id.to_string());
            Ok(person.clone())
        })
        .await
    }

    /// Applies `mutate` to a copy of the records and swaps it in once persisted.
    ///
    /// The write lock is held until the file is written, so files land in the
    /// same order as the mutations and a failed write leaves memory untouched.
    async fn commit<T>(&self, mutate: impl FnOnce(&mut Records) -> Result<T>) -> Result<T> {
        let mut records = self.records.write().await;
        let mut next = records.clone();
        let value = mutate(&mut next)?;

        self.persist(next.to_data()).await?;
        *records = next;
        Ok(value)
    }

    async fn persist(&self, data: DirectoryData) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };
        let content = serde_yaml::to_string(&data)?;
        tokio::task::spawn_blocking(move || atomic_write(&path, &content))
            .await
            .map_err(|e| RelayError::Storage(format!("Persist task failed: {}", e)))?
    }
}

/// Writes via a sibling temp file and rename, so readers never see a partial file.
pub fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = match target_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| RelayError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| RelayError::Storage(format!("Failed to write to temp file: {}", e)))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| RelayError::Storage(format!("Failed to sync temp file: {}", e)))?;
    temp_file
        .persist(target_path)
        .map_err(|e| RelayError::Storage(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
