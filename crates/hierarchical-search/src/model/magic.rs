use serde::{Deserialize, Serialize};

use super::UploadedFileId;

/// A pre-computed smart grouping of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicCache {
	pub title: String,
	pub file_uploaded_ids: Vec<UploadedFileId>,
}
