use serde::{Deserialize, Serialize};

/// Brand store the admin console manages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandStore {
    pub id: String,
    pub name: String,
}

/// Find a store by its identifier
pub fn find_store<'a>(stores: &'a [BrandStore], id: &str) -> Option<&'a BrandStore> {
    stores.iter().find(|store| store.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_store() {
        let stores = vec![
            BrandStore {
                id: "acme".into(),
                name: "Acme Devices".into(),
            },
            BrandStore {
                id: "globex".into(),
                name: "Globex".into(),
            },
        ];

        assert_eq!(find_store(&stores, "globex").map(|s| s.name.as_str()), Some("Globex"));
        assert!(find_store(&stores, "initech").is_none());
        assert!(find_store(&[], "acme").is_none());
    }
}
