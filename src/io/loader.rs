//! JSON-text loading entry point
//!
//! Takes raw JSON text (a dropped file, a paste buffer, the persistence
//! cache) and dispatches to the right importer: documents carrying a
//! `pattern` or `visual` section load as a full configuration, everything
//! else as a bare pattern.

use serde_json::Value;

use crate::core::types::Result;
use crate::core::Error;
use crate::cube::store::CubeStore;
use crate::io::config::import_full_config;
use crate::io::pattern::import_pattern;

/// Which importer handled a successful load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    FullConfig,
    Pattern,
}

/// Parse and import a JSON document from text.
///
/// Returns which importer succeeded, or an error describing why the
/// document was rejected (the store keeps its prior state apart from the
/// documented empty-pattern fallback).
pub fn load_pattern_str(store: &mut CubeStore, json: &str) -> Result<LoadKind> {
    let value: Value = serde_json::from_str(json)?;

    if value.get("pattern").is_some() || value.get("visual").is_some() {
        if import_full_config(store, &value) {
            Ok(LoadKind::FullConfig)
        } else {
            Err(Error::Pattern("configuration was not recognized".to_string()))
        }
    } else if import_pattern(store, &value) {
        Ok(LoadKind::Pattern)
    } else {
        Err(Error::Pattern("pattern format was not recognized".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::export_full_config;
    use crate::io::pattern::export_pattern;

    #[test]
    fn test_dispatches_full_config() {
        let source = CubeStore::default();
        let json = serde_json::to_string(&export_full_config(&source)).unwrap();

        let mut store = CubeStore::new(5);
        assert_eq!(load_pattern_str(&mut store, &json).unwrap(), LoadKind::FullConfig);
        assert_eq!(store.cubes(), source.cubes());
    }

    #[test]
    fn test_dispatches_bare_pattern() {
        let source = CubeStore::default();
        let json = serde_json::to_string(&export_pattern(&source)).unwrap();

        let mut store = CubeStore::new(5);
        assert_eq!(load_pattern_str(&mut store, &json).unwrap(), LoadKind::Pattern);
        assert_eq!(store.cubes(), source.cubes());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut store = CubeStore::default();
        let err = load_pattern_str(&mut store, "{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unrecognized_document_is_an_error() {
        let mut store = CubeStore::default();
        let err = load_pattern_str(&mut store, r#"{"foo": "bar"}"#).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }
}
