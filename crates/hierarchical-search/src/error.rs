use std::{fmt::Display, path::Path};

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SearchError {
	// Collaborator errors
	#[error("file store error: {0}")]
	FileStore(#[source] BoxedSource),
	#[error("collections service error: {0}")]
	Collections(#[source] BoxedSource),
	#[error("face index error: {0}")]
	FaceIndex(#[source] BoxedSource),
	#[error("location tagging error: {0}")]
	Location(#[source] BoxedSource),
	#[error("magic cache error: {0}")]
	MagicCache(#[source] BoxedSource),

	// Configuration errors
	#[error(transparent)]
	ConfigIO(#[from] ConfigIOError),
	#[error("config decode error: {0}")]
	ConfigDecode(#[from] serde_json::Error),
	#[error("invalid config: {0}")]
	InvalidConfig(String),
}

impl SearchError {
	pub fn file_store(e: impl Into<BoxedSource>) -> Self {
		Self::FileStore(e.into())
	}

	pub fn collections(e: impl Into<BoxedSource>) -> Self {
		Self::Collections(e.into())
	}

	pub fn face_index(e: impl Into<BoxedSource>) -> Self {
		Self::FaceIndex(e.into())
	}

	pub fn location(e: impl Into<BoxedSource>) -> Self {
		Self::Location(e.into())
	}

	pub fn magic_cache(e: impl Into<BoxedSource>) -> Self {
		Self::MagicCache(e.into())
	}
}

/// Config file I/O error that includes the path that caused it
#[derive(Error, Debug)]
pub struct ConfigIOError {
	pub path: Box<Path>,
	#[source]
	pub source: std::io::Error,
}

impl Display for ConfigIOError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"config file I/O error: {}; path: '{}'",
			self.source,
			self.path.display()
		)
	}
}

impl<P: AsRef<Path>> From<(P, std::io::Error)> for ConfigIOError {
	fn from((path, source): (P, std::io::Error)) -> Self {
		Self {
			path: path.as_ref().into(),
			source,
		}
	}
}
