use crate::model::{
	ClusterId, CollectionId, File, FileType, LocationTag, PersonId, UploadedFileId, User,
};

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumFilter {
	pub collection_id: CollectionId,
	pub collection_name: String,
	pub occurrence: usize,
}

impl AlbumFilter {
	#[must_use]
	pub fn is_match(&self, file: &File) -> bool {
		file.collection_id == Some(self.collection_id)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTypeFilter {
	pub file_type: FileType,
	pub type_name: String,
	pub occurrence: usize,
}

impl FileTypeFilter {
	#[must_use]
	pub fn is_match(&self, file: &File) -> bool {
		file.file_type == self.file_type
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
	pub tag: LocationTag,
	pub occurrence: usize,
}

impl LocationFilter {
	#[must_use]
	pub fn is_match(&self, file: &File) -> bool {
		file.location
			.as_ref()
			.is_some_and(|location| self.tag.contains(location))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsFilter {
	pub user: User,
	pub occurrence: usize,
}

impl ContactsFilter {
	#[must_use]
	pub fn is_match(&self, file: &File) -> bool {
		file.owner_id == Some(self.user.id)
	}
}

/// Who a face filter points at: a confirmed person or a raw, unnamed cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FaceIdentity {
	Person(PersonId),
	Cluster(ClusterId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceFilter {
	pub identity: FaceIdentity,
	/// Person name; unnamed clusters have none
	pub name: Option<String>,
	pub occurrence: usize,
}

impl FaceFilter {
	#[must_use]
	pub const fn person_id(&self) -> Option<&PersonId> {
		match &self.identity {
			FaceIdentity::Person(id) => Some(id),
			FaceIdentity::Cluster(_) => None,
		}
	}

	#[must_use]
	pub const fn cluster_id(&self) -> Option<&ClusterId> {
		match &self.identity {
			FaceIdentity::Cluster(id) => Some(id),
			FaceIdentity::Person(_) => None,
		}
	}
}

/// A smart group. `matched_uploaded_ids` holds the whole group, while
/// `occurrence` only counts the part of it in view when it was curated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicFilter {
	pub title: String,
	pub occurrence: usize,
	pub matched_uploaded_ids: HashSet<UploadedFileId>,
}

/// Files in which the applied faces show up and none of the avoided ones do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlyThemFilter {
	pub face_filters: Vec<FaceFilter>,
	pub face_filters_to_avoid: Vec<FaceFilter>,
	pub name: String,
	pub occurrence: usize,
}

impl OnlyThemFilter {
	#[must_use]
	pub fn identities(&self) -> BTreeSet<FaceIdentity> {
		self.face_filters
			.iter()
			.map(|filter| filter.identity.clone())
			.collect()
	}

	#[must_use]
	pub fn identities_to_avoid(&self) -> BTreeSet<FaceIdentity> {
		self.face_filters_to_avoid
			.iter()
			.map(|filter| filter.identity.clone())
			.collect()
	}
}

/// A filter wrapping a result computed elsewhere, like a text search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelGenericFilter {
	pub name: String,
	pub occurrence: usize,
	pub matched_uploaded_ids: HashSet<UploadedFileId>,
}
