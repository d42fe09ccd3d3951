//! Search engine configuration

use crate::{
	error::{ConfigIOError, SearchError},
	logging::directive_filter,
};

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
	/// How many recommendations fit in the app bar
	pub max_appbar_filters: usize,

	/// Unnamed face clusters need at least this many files to be recommended
	pub min_cluster_size: usize,

	/// Magic groups need strictly more than this many files in the current view
	pub magic_min_matches: usize,

	/// Most applied face filters an "only them" filter can be built from
	pub only_them_max_faces: usize,

	/// Fallback tracing directive when `RUST_LOG` is unset, handed to [`crate::logging::init`]
	pub log_filter: String,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			max_appbar_filters: 7,
			min_cluster_size: 2,
			magic_min_matches: 3,
			only_them_max_faces: 4,
			log_filter: "info".to_string(),
		}
	}
}

impl SearchConfig {
	/// Loads the config at `path`, falling back to defaults when there is no file yet.
	pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SearchError> {
		let path = path.as_ref();

		if !path.exists() {
			warn!("No search config found at {}, using defaults", path.display());
			return Ok(Self::default());
		}

		info!("Loading search config from {}", path.display());
		let json = fs::read_to_string(path).map_err(|e| ConfigIOError::from((path, e)))?;
		let config: Self = serde_json::from_str(&json)?;
		config.validate()?;

		Ok(config)
	}

	pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SearchError> {
		let path = path.as_ref();
		let json = serde_json::to_string_pretty(self)?;
		fs::write(path, json).map_err(|e| ConfigIOError::from((path, e)))?;

		Ok(())
	}

	pub fn validate(&self) -> Result<(), SearchError> {
		if self.max_appbar_filters == 0 {
			return Err(SearchError::InvalidConfig(
				"max_appbar_filters must be at least 1".to_string(),
			));
		}
		if self.min_cluster_size == 0 {
			return Err(SearchError::InvalidConfig(
				"min_cluster_size must be at least 1".to_string(),
			));
		}
		if self.only_them_max_faces == 0 {
			return Err(SearchError::InvalidConfig(
				"only_them_max_faces must be at least 1".to_string(),
			));
		}

		directive_filter(&self.log_filter)?;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use tempfile::tempdir;

	#[test]
	fn missing_file_falls_back_to_defaults() {
		let dir = tempdir().unwrap();

		let config = SearchConfig::load_from(dir.path().join("search.json")).unwrap();

		assert_eq!(config, SearchConfig::default());
	}

	#[test]
	fn partial_file_keeps_defaults_for_the_rest() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("search.json");
		fs::write(&path, r#"{ "max_appbar_filters": 3 }"#).unwrap();

		let config = SearchConfig::load_from(&path).unwrap();

		assert_eq!(config.max_appbar_filters, 3);
		assert_eq!(config.min_cluster_size, 2);
		assert_eq!(config.only_them_max_faces, 4);
	}

	#[test]
	fn save_then_load() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("search.json");
		let config = SearchConfig {
			min_cluster_size: 5,
			..Default::default()
		};

		config.save_to(&path).unwrap();

		assert_eq!(SearchConfig::load_from(&path).unwrap(), config);
	}

	#[test]
	fn rejects_zero_budget() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("search.json");
		fs::write(&path, r#"{ "max_appbar_filters": 0 }"#).unwrap();

		assert!(matches!(
			SearchConfig::load_from(&path),
			Err(SearchError::InvalidConfig(_))
		));
	}

	#[test]
	fn rejects_bad_log_filter() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("search.json");
		fs::write(&path, r#"{ "log_filter": "hierarchical_search=shouting" }"#).unwrap();

		assert!(matches!(
			SearchConfig::load_from(&path),
			Err(SearchError::InvalidConfig(_))
		));
	}

	#[test]
	fn rejects_garbage() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("search.json");
		fs::write(&path, "not json").unwrap();

		assert!(matches!(
			SearchConfig::load_from(&path),
			Err(SearchError::ConfigDecode(_))
		));
	}
}
