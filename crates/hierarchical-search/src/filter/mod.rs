use crate::model::{CollectionId, File, FileType, UploadedFileId, UserId};

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

mod variants;

pub use variants::{
	AlbumFilter, ContactsFilter, FaceFilter, FaceIdentity, FileTypeFilter, LocationFilter,
	MagicFilter, OnlyThemFilter, TopLevelGenericFilter,
};

/// Filter categories, declared in display priority order.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	PartialOrd,
	Ord,
	Serialize,
	Deserialize,
	Display,
	EnumIter,
	EnumCount,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FilterKind {
	OnlyThem,
	Magic,
	Face,
	FileType,
	Contacts,
	Album,
	Location,
	TopLevelGeneric,
}

/// Identity of a filter: two filters with the same key select the same files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterKey {
	Album(CollectionId),
	FileType(FileType),
	/// Tags can share a name, so the area is part of the identity, compared bit for bit
	Location {
		name: String,
		latitude_bits: u64,
		longitude_bits: u64,
		radius_bits: u64,
	},
	Contacts(UserId),
	Face(FaceIdentity),
	Magic(String),
	OnlyThem {
		wanted: BTreeSet<FaceIdentity>,
		avoid: BTreeSet<FaceIdentity>,
	},
	TopLevelGeneric {
		name: String,
		matches: BTreeSet<UploadedFileId>,
	},
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Filter {
	Album(AlbumFilter),
	FileType(FileTypeFilter),
	Location(LocationFilter),
	Contacts(ContactsFilter),
	Face(FaceFilter),
	Magic(MagicFilter),
	OnlyThem(OnlyThemFilter),
	TopLevelGeneric(TopLevelGenericFilter),
}

impl Filter {
	#[must_use]
	pub const fn kind(&self) -> FilterKind {
		match self {
			Self::Album(_) => FilterKind::Album,
			Self::FileType(_) => FilterKind::FileType,
			Self::Location(_) => FilterKind::Location,
			Self::Contacts(_) => FilterKind::Contacts,
			Self::Face(_) => FilterKind::Face,
			Self::Magic(_) => FilterKind::Magic,
			Self::OnlyThem(_) => FilterKind::OnlyThem,
			Self::TopLevelGeneric(_) => FilterKind::TopLevelGeneric,
		}
	}

	#[must_use]
	pub fn key(&self) -> FilterKey {
		match self {
			Self::Album(f) => FilterKey::Album(f.collection_id),
			Self::FileType(f) => FilterKey::FileType(f.file_type),
			Self::Location(f) => FilterKey::Location {
				name: f.tag.name.clone(),
				latitude_bits: f.tag.centre.latitude.to_bits(),
				longitude_bits: f.tag.centre.longitude.to_bits(),
				radius_bits: f.tag.radius_km.to_bits(),
			},
			Self::Contacts(f) => FilterKey::Contacts(f.user.id),
			Self::Face(f) => FilterKey::Face(f.identity.clone()),
			Self::Magic(f) => FilterKey::Magic(f.title.clone()),
			Self::OnlyThem(f) => FilterKey::OnlyThem {
				wanted: f.identities(),
				avoid: f.identities_to_avoid(),
			},
			Self::TopLevelGeneric(f) => FilterKey::TopLevelGeneric {
				name: f.name.clone(),
				matches: f.matched_uploaded_ids.iter().copied().collect(),
			},
		}
	}

	#[must_use]
	pub fn is_same_filter(&self, other: &Self) -> bool {
		self.key() == other.key()
	}

	#[must_use]
	pub fn name(&self) -> String {
		match self {
			Self::Album(f) => f.collection_name.clone(),
			Self::FileType(f) => f.type_name.clone(),
			Self::Location(f) => f.tag.name.clone(),
			Self::Contacts(f) => f.user.display_name(),
			Self::Face(f) => f.name.clone().unwrap_or_default(),
			Self::Magic(f) => f.title.clone(),
			Self::OnlyThem(f) => f.name.clone(),
			Self::TopLevelGeneric(f) => f.name.clone(),
		}
	}

	#[must_use]
	pub const fn occurrence(&self) -> usize {
		match self {
			Self::Album(AlbumFilter { occurrence, .. })
			| Self::FileType(FileTypeFilter { occurrence, .. })
			| Self::Location(LocationFilter { occurrence, .. })
			| Self::Contacts(ContactsFilter { occurrence, .. })
			| Self::Face(FaceFilter { occurrence, .. })
			| Self::Magic(MagicFilter { occurrence, .. })
			| Self::OnlyThem(OnlyThemFilter { occurrence, .. })
			| Self::TopLevelGeneric(TopLevelGenericFilter { occurrence, .. }) => *occurrence,
		}
	}

	/// Per-file predicate, for the categories that can be decided by looking at
	/// a single file. `None` for index-driven filters.
	#[must_use]
	pub fn is_match(&self, file: &File) -> Option<bool> {
		match self {
			Self::Album(f) => Some(f.is_match(file)),
			Self::FileType(f) => Some(f.is_match(file)),
			Self::Location(f) => Some(f.is_match(file)),
			Self::Contacts(f) => Some(f.is_match(file)),
			Self::Face(_) | Self::Magic(_) | Self::OnlyThem(_) | Self::TopLevelGeneric(_) => None,
		}
	}

	/// Match set known at construction time. These are read straight off the
	/// filter and never go through a [`MatchCache`](crate::MatchCache).
	#[must_use]
	pub const fn preset_matches(&self) -> Option<&HashSet<UploadedFileId>> {
		match self {
			Self::Magic(MagicFilter {
				matched_uploaded_ids,
				..
			})
			| Self::TopLevelGeneric(TopLevelGenericFilter {
				matched_uploaded_ids,
				..
			}) => Some(matched_uploaded_ids),
			_ => None,
		}
	}
}
