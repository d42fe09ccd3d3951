use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{CollectionId, Location, UserId};

pub type UploadedFileId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FileType {
	Image,
	Video,
	LivePhoto,
	Other,
}

/// A file as seen by hierarchical search.
///
/// The file store hands out one `File` per collection membership, so the same
/// upload may show up more than once with different `collection_id`s. Anything
/// that counts or materializes files works on the uploaded id to stay
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
	pub uploaded_file_id: Option<UploadedFileId>,
	pub owner_id: Option<UserId>,
	pub collection_id: Option<CollectionId>,
	pub file_type: FileType,
	#[serde(default)]
	pub location: Option<Location>,
	#[serde(default)]
	pub title: String,
}

impl File {
	/// The uploaded id, if the file made it to the server. A missing id or the
	/// negative sentinel both mean "not uploaded yet".
	#[must_use]
	pub fn uploaded_id(&self) -> Option<UploadedFileId> {
		self.uploaded_file_id.filter(|id| *id >= 0)
	}

	#[must_use]
	pub fn is_uploaded(&self) -> bool {
		self.uploaded_id().is_some()
	}
}
