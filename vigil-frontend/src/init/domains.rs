use crate::{error::AppError, model::domains::KnownDomains, storage::Storage};

const KNOWN_DOMAINS_KEY: &str = "domains";

pub fn load_domains_from_storage(storage: &dyn Storage) -> Result<KnownDomains, AppError> {
    match storage.get(KNOWN_DOMAINS_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(KnownDomains::default()),
    }
}

pub fn save_domains_to_storage(
    storage: &mut dyn Storage,
    domains: &KnownDomains,
) -> Result<(), AppError> {
    storage.set(KNOWN_DOMAINS_KEY, &serde_json::to_string(domains)?)
}

#[cfg(test)]
mod test {
    use crate::{model::domains::KnownDomains, storage::MemoryStorage};

    use super::{load_domains_from_storage, save_domains_to_storage};

    #[test]
    fn load_without_entry_yields_empty_set() {
        let storage = MemoryStorage::default();

        let domains = load_domains_from_storage(&storage).unwrap();

        assert!(domains.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut storage = MemoryStorage::default();

        let mut domains = KnownDomains::default();
        domains.insert("en.wikipedia.org".to_string());
        domains.insert("fr.wikipedia.org".to_string());

        save_domains_to_storage(&mut storage, &domains).unwrap();
        assert_eq!(domains, load_domains_from_storage(&storage).unwrap());
    }
}
