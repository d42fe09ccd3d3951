#![allow(dead_code)]

use hierarchical_search::{
	model::{
		ClusterId, Collection, CollectionId, File, FileType, Location, LocationTag, MagicCache,
		PersonEntity, PersonId, UploadedFileId, User, UserId,
	},
	services::{
		CollectionsService, DefaultLocalizer, FaceIndex, FileStore, LocationService,
		MagicCacheService,
	},
	SearchConfig, SearchContext, SearchError,
};

use std::{
	collections::{HashMap, HashSet},
	sync::{
		atomic::{AtomicUsize, Ordering},
		Arc,
	},
};

use async_trait::async_trait;
use uuid::Uuid;

pub const ME: UserId = 1;
pub const TRIP: CollectionId = 100;
pub const HOME: CollectionId = 200;

/// Everything the engine reads, held in memory.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
	pub files: Vec<File>,
	pub collections: HashMap<CollectionId, Collection>,
	pub hidden_collections: HashSet<CollectionId>,
	pub users: HashMap<UserId, User>,
	pub file_clusters: HashMap<UploadedFileId, HashSet<ClusterId>>,
	pub cluster_persons: HashMap<ClusterId, PersonId>,
	pub persons: HashMap<PersonId, PersonEntity>,
	pub location_tags: Vec<LocationTag>,
	pub magic: Vec<MagicCache>,
	pub broken_faces: bool,
	pub broken_magic: bool,
	pub full_scans: AtomicUsize,
}

impl MemoryLibrary {
	pub fn into_context(self) -> (Arc<Self>, SearchContext) {
		let library = Arc::new(self);

		let ctx = SearchContext {
			current_user_id: ME,
			config: SearchConfig::default(),
			files: library.clone(),
			collections: library.clone(),
			faces: library.clone(),
			locations: library.clone(),
			magic: library.clone(),
			localizer: Arc::new(DefaultLocalizer),
		};

		(library, ctx)
	}

	pub fn add_file(&mut self, id: UploadedFileId, collection_id: CollectionId, owner_id: UserId) {
		self.files.push(file(id, collection_id, owner_id, FileType::Image));
	}

	pub fn add_collection(&mut self, id: CollectionId, name: &str) {
		self.collections.insert(
			id,
			Collection {
				id,
				name: name.to_string(),
				owner_id: ME,
			},
		);
	}

	pub fn add_person(&mut self, name: &str, is_ignored: bool) -> PersonId {
		let id = Uuid::new_v4();
		self.persons.insert(
			id,
			PersonEntity {
				id,
				name: name.to_string(),
				is_ignored,
			},
		);
		id
	}

	pub fn tag_faces(&mut self, cluster_id: &str, file_ids: impl IntoIterator<Item = UploadedFileId>) {
		for file_id in file_ids {
			self.file_clusters
				.entry(file_id)
				.or_default()
				.insert(cluster_id.to_string());
		}
	}

	pub fn assign_cluster(&mut self, cluster_id: &str, person_id: PersonId) {
		self.cluster_persons.insert(cluster_id.to_string(), person_id);
	}

	pub fn full_scans(&self) -> usize {
		self.full_scans.load(Ordering::SeqCst)
	}

	fn faces_or_fail(&self) -> Result<(), SearchError> {
		if self.broken_faces {
			Err(SearchError::face_index("face index offline"))
		} else {
			Ok(())
		}
	}
}

pub fn file(
	id: UploadedFileId,
	collection_id: CollectionId,
	owner_id: UserId,
	file_type: FileType,
) -> File {
	File {
		uploaded_file_id: Some(id),
		owner_id: Some(owner_id),
		collection_id: Some(collection_id),
		file_type,
		location: None,
		title: format!("IMG_{id:04}.jpg"),
	}
}

pub fn paris() -> LocationTag {
	LocationTag {
		name: "Paris".to_string(),
		centre: Location {
			latitude: 48.8566,
			longitude: 2.3522,
		},
		radius_km: 10.0,
	}
}

pub fn sorted_ids(files: &[File]) -> Vec<UploadedFileId> {
	let mut ids = files
		.iter()
		.filter_map(File::uploaded_id)
		.collect::<Vec<_>>();
	ids.sort_unstable();
	ids
}

/// Ten images: 1 to 6 in "Trip", 7 to 10 in "Home", all mine.
///
/// Alice shows up in 1 to 4 through two clusters, both on file 3. An unnamed
/// cluster covers 5 and 6, a one-file cluster covers 7, ignored Bob covers 8
/// and 9, and file 10 has a cluster pointing at a person that doesn't exist.
pub fn trip_library() -> (MemoryLibrary, PersonId) {
	let mut library = MemoryLibrary::default();
	library.add_collection(TRIP, "Trip");
	library.add_collection(HOME, "Home");

	for id in 1..=6 {
		library.add_file(id, TRIP, ME);
	}
	for id in 7..=10 {
		library.add_file(id, HOME, ME);
	}

	let alice = library.add_person("Alice", false);
	library.tag_faces("alice_1", [1, 2, 3]);
	library.tag_faces("alice_2", [3, 4]);
	library.assign_cluster("alice_1", alice);
	library.assign_cluster("alice_2", alice);

	library.tag_faces("stranger", [5, 6]);
	library.tag_faces("lonely", [7]);

	let bob = library.add_person("Bob", true);
	library.tag_faces("bob_1", [8, 9]);
	library.assign_cluster("bob_1", bob);

	library.tag_faces("ghost", [10]);
	library.assign_cluster("ghost", Uuid::new_v4());

	(library, alice)
}

#[async_trait]
impl FileStore for MemoryLibrary {
	async fn get_all_files_for_hierarchical_search(&self) -> Result<Vec<File>, SearchError> {
		self.full_scans.fetch_add(1, Ordering::SeqCst);
		Ok(self.files.clone())
	}

	async fn get_files_from_ids(
		&self,
		ids: &HashSet<UploadedFileId>,
		dedupe_by_upload_id: bool,
		collections_to_ignore: &HashSet<CollectionId>,
	) -> Result<Vec<File>, SearchError> {
		let mut seen = HashSet::new();

		Ok(self
			.files
			.iter()
			.filter(|file| {
				file.uploaded_id().is_some_and(|id| ids.contains(&id))
					&& !file
						.collection_id
						.is_some_and(|id| collections_to_ignore.contains(&id))
			})
			.filter(|file| {
				!dedupe_by_upload_id || file.uploaded_id().is_some_and(|id| seen.insert(id))
			})
			.cloned()
			.collect())
	}

	async fn get_all_collection_ids_of_files(
		&self,
		ids: &HashSet<UploadedFileId>,
	) -> Result<Vec<CollectionId>, SearchError> {
		Ok(self
			.files
			.iter()
			.filter(|file| file.uploaded_id().is_some_and(|id| ids.contains(&id)))
			.filter_map(|file| file.collection_id)
			.collect())
	}
}

#[async_trait]
impl CollectionsService for MemoryLibrary {
	async fn archived_or_hidden_collection_ids(&self) -> Result<HashSet<CollectionId>, SearchError> {
		Ok(self.hidden_collections.clone())
	}

	async fn get_collection_by_id(
		&self,
		id: CollectionId,
	) -> Result<Option<Collection>, SearchError> {
		Ok(self.collections.get(&id).cloned())
	}

	async fn get_file_owner(
		&self,
		owner_id: UserId,
		_context: Option<CollectionId>,
	) -> Result<User, SearchError> {
		Ok(self
			.users
			.get(&owner_id)
			.cloned()
			.unwrap_or_else(|| User::minimal(owner_id)))
	}
}

#[async_trait]
impl FaceIndex for MemoryLibrary {
	async fn get_file_ids_of_person_id(
		&self,
		person_id: PersonId,
	) -> Result<HashSet<UploadedFileId>, SearchError> {
		self.faces_or_fail()?;

		Ok(self
			.file_clusters
			.iter()
			.filter(|(_, clusters)| {
				clusters
					.iter()
					.any(|cluster| self.cluster_persons.get(cluster) == Some(&person_id))
			})
			.map(|(file_id, _)| *file_id)
			.collect())
	}

	async fn get_file_ids_of_cluster_id(
		&self,
		cluster_id: &ClusterId,
	) -> Result<HashSet<UploadedFileId>, SearchError> {
		self.faces_or_fail()?;

		Ok(self
			.file_clusters
			.iter()
			.filter(|(_, clusters)| clusters.contains(cluster_id))
			.map(|(file_id, _)| *file_id)
			.collect())
	}

	async fn get_file_id_to_cluster_ids(
		&self,
	) -> Result<HashMap<UploadedFileId, HashSet<ClusterId>>, SearchError> {
		self.faces_or_fail()?;
		Ok(self.file_clusters.clone())
	}

	async fn get_cluster_id_to_person_id(&self) -> Result<HashMap<ClusterId, PersonId>, SearchError> {
		self.faces_or_fail()?;
		Ok(self.cluster_persons.clone())
	}

	async fn get_persons_map(&self) -> Result<HashMap<PersonId, PersonEntity>, SearchError> {
		self.faces_or_fail()?;
		Ok(self.persons.clone())
	}
}

#[async_trait]
impl LocationService for MemoryLibrary {
	async fn get_location_tags_to_occurrence(
		&self,
		files: &[File],
	) -> Result<Vec<(LocationTag, usize)>, SearchError> {
		Ok(self
			.location_tags
			.iter()
			.filter_map(|tag| {
				let inside = files
					.iter()
					.filter(|file| file.location.as_ref().is_some_and(|l| tag.contains(l)))
					.filter_map(File::uploaded_id)
					.collect::<HashSet<_>>()
					.len();

				(inside > 0).then(|| (tag.clone(), inside))
			})
			.collect())
	}
}

#[async_trait]
impl MagicCacheService for MemoryLibrary {
	async fn get_magic_cache(&self) -> Result<Vec<MagicCache>, SearchError> {
		if self.broken_magic {
			return Err(SearchError::magic_cache("magic cache unavailable"));
		}

		Ok(self.magic.clone())
	}
}
