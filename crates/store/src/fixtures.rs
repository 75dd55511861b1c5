//! Seed data for the store.
//!
//! Fixtures are a JSON array of wishlist records in the same camelCase shape
//! the API returns. Timestamps are decoded leniently, so a product with a
//! missing or malformed `changedAtDate` loads fine and simply never counts
//! as updated.

use std::path::Path;

use wishlist_core::wishlist::Wishlist;

use crate::error::StoreError;

const BUILTIN_FIXTURES: &str = include_str!("../fixtures/wishlists.json");

/// The built-in mock data set.
pub fn builtin() -> Result<Vec<Wishlist>, StoreError> {
    parse(BUILTIN_FIXTURES)
}

/// Read fixtures from a JSON file.
pub fn from_file(path: &Path) -> Result<Vec<Wishlist>, StoreError> {
    let raw = std::fs::read_to_string(path)?;
    parse(&raw)
}

pub fn parse(raw: &str) -> Result<Vec<Wishlist>, StoreError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use wishlist_core::status::ChangeStatus;

    use super::*;

    #[test]
    fn builtin_fixtures_parse() {
        let wishlists = builtin().unwrap();
        let ids: Vec<&str> = wishlists.iter().map(|w| w.wishlist_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["111", "222", "333", "444", "555", "666", "777", "888", "999", "1000"]
        );
        assert!(wishlists.iter().all(|w| w.last_seen_at.instant().is_some()));
    }

    #[test]
    fn builtin_has_updates_matches_the_mock_scenarios() {
        let expected = [
            ("111", false),
            ("222", true),
            ("333", true),
            ("444", true),
            ("555", true),
            ("666", false),
            ("777", true),
            ("888", true),
            ("999", false),
            ("1000", true),
        ];
        let wishlists = builtin().unwrap();
        for (id, has_updates) in expected {
            let w = wishlists.iter().find(|w| w.wishlist_id == id).unwrap();
            assert_eq!(w.has_updates(), has_updates, "wishlist {id}");
        }
    }

    #[test]
    fn wishlist_888_reports_both_changed_products() {
        let wishlists = builtin().unwrap();
        let w = wishlists.iter().find(|w| w.wishlist_id == "888").unwrap();
        let updated: Vec<_> = w.updated_products().collect();
        assert_eq!(updated.len(), 2);
        assert_eq!(
            updated[0].change_in_status,
            vec![ChangeStatus::Sale, ChangeStatus::BackInStock]
        );
        assert_eq!(updated[1].change_in_status, vec![ChangeStatus::HighStock]);
    }

    #[test]
    fn from_file_reads_custom_fixtures() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"wishlistId": "abc", "lastSeenAt": "2025-01-01T00:00:00Z", "products": []}}]"#
        )
        .unwrap();

        let wishlists = from_file(file.path()).unwrap();
        assert_eq!(wishlists.len(), 1);
        assert_eq!(wishlists[0].wishlist_id, "abc");
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        let result = from_file(Path::new("/definitely/not/here.json"));
        assert_matches!(result, Err(StoreError::Io(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert_matches!(parse("{ not json"), Err(StoreError::Json(_)));
    }
}
