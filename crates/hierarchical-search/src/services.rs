//! Collaborators the search engine reads from.
//!
//! Every index here is treated as a read-only snapshot for the duration of a
//! search session. Implementations wrap their own failures with the matching
//! [`SearchError`] constructor.

use crate::{
	config::SearchConfig,
	error::SearchError,
	model::{
		ClusterId, Collection, CollectionId, File, FileType, LocationTag, MagicCache,
		PersonEntity, PersonId, UploadedFileId, User, UserId,
	},
};

use std::{
	collections::{HashMap, HashSet},
	sync::Arc,
};

use async_trait::async_trait;

#[async_trait]
pub trait FileStore: Send + Sync {
	/// Every file hierarchical search may look at, one entry per collection membership.
	async fn get_all_files_for_hierarchical_search(&self) -> Result<Vec<File>, SearchError>;

	/// Materializes uploaded ids into files, skipping the ones that only live in
	/// `collections_to_ignore`.
	async fn get_files_from_ids(
		&self,
		ids: &HashSet<UploadedFileId>,
		dedupe_by_upload_id: bool,
		collections_to_ignore: &HashSet<CollectionId>,
	) -> Result<Vec<File>, SearchError>;

	/// One collection id per (file, collection) membership of the given uploads.
	async fn get_all_collection_ids_of_files(
		&self,
		ids: &HashSet<UploadedFileId>,
	) -> Result<Vec<CollectionId>, SearchError>;
}

#[async_trait]
pub trait CollectionsService: Send + Sync {
	async fn archived_or_hidden_collection_ids(&self) -> Result<HashSet<CollectionId>, SearchError>;

	async fn get_collection_by_id(
		&self,
		id: CollectionId,
	) -> Result<Option<Collection>, SearchError>;

	/// Resolves an owner to a displayable user. `context` is the collection the
	/// file was seen in, when known.
	async fn get_file_owner(
		&self,
		owner_id: UserId,
		context: Option<CollectionId>,
	) -> Result<User, SearchError>;
}

#[async_trait]
pub trait FaceIndex: Send + Sync {
	async fn get_file_ids_of_person_id(
		&self,
		person_id: PersonId,
	) -> Result<HashSet<UploadedFileId>, SearchError>;

	async fn get_file_ids_of_cluster_id(
		&self,
		cluster_id: &ClusterId,
	) -> Result<HashSet<UploadedFileId>, SearchError>;

	async fn get_file_id_to_cluster_ids(
		&self,
	) -> Result<HashMap<UploadedFileId, HashSet<ClusterId>>, SearchError>;

	async fn get_cluster_id_to_person_id(&self) -> Result<HashMap<ClusterId, PersonId>, SearchError>;

	async fn get_persons_map(&self) -> Result<HashMap<PersonId, PersonEntity>, SearchError>;
}

#[async_trait]
pub trait LocationService: Send + Sync {
	/// Every location tag that contains at least one of `files`, with how many it contains.
	async fn get_location_tags_to_occurrence(
		&self,
		files: &[File],
	) -> Result<Vec<(LocationTag, usize)>, SearchError>;
}

#[async_trait]
pub trait MagicCacheService: Send + Sync {
	async fn get_magic_cache(&self) -> Result<Vec<MagicCache>, SearchError>;
}

/// Display names for the parts of the engine that surface text.
pub trait Localizer: Send + Sync {
	fn file_type_name(&self, file_type: FileType) -> String;

	fn only_them_name(&self, names: &[String]) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {
	fn file_type_name(&self, file_type: FileType) -> String {
		match file_type {
			FileType::Image => "Photos",
			FileType::Video => "Videos",
			FileType::LivePhoto => "Live Photos",
			FileType::Other => "Other",
		}
		.to_string()
	}

	fn only_them_name(&self, names: &[String]) -> String {
		match names {
			[] => "Only them".to_string(),
			[single] => format!("Only {single}"),
			[init @ .., last] => format!("Only {} and {last}", init.join(", ")),
		}
	}
}

/// Everything a search pass needs from the outside world.
#[derive(Clone)]
pub struct SearchContext {
	pub current_user_id: UserId,
	pub config: SearchConfig,
	pub files: Arc<dyn FileStore>,
	pub collections: Arc<dyn CollectionsService>,
	pub faces: Arc<dyn FaceIndex>,
	pub locations: Arc<dyn LocationService>,
	pub magic: Arc<dyn MagicCacheService>,
	pub localizer: Arc<dyn Localizer>,
}
