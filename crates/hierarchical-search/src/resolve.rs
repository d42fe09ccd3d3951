//! Turning applied filters into file sets.
//!
//! Filters themselves stay immutable. Their match sets are resolved in a
//! separate pass and kept in a [`MatchCache`] keyed by filter identity, so a
//! filter is resolved once per index snapshot no matter how often it's applied.

use crate::{
	error::SearchError,
	filter::{FaceIdentity, Filter, FilterKey, OnlyThemFilter},
	model::{File, UploadedFileId},
	occurrence::uploaded_ids,
	services::{FaceIndex, SearchContext},
};

use std::collections::{BTreeSet, HashMap, HashSet};

use futures_concurrency::future::TryJoin;
use tracing::{debug, error, instrument};

#[derive(Debug, Default)]
pub struct MatchCache {
	resolved: HashMap<FilterKey, HashSet<UploadedFileId>>,
}

impl MatchCache {
	#[must_use]
	pub fn get(&self, key: &FilterKey) -> Option<&HashSet<UploadedFileId>> {
		self.resolved.get(key)
	}

	#[must_use]
	pub fn contains(&self, key: &FilterKey) -> bool {
		self.resolved.contains_key(key)
	}

	pub fn insert(&mut self, key: FilterKey, matched: HashSet<UploadedFileId>) {
		self.resolved.insert(key, matched);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.resolved.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.resolved.is_empty()
	}

	pub fn clear(&mut self) {
		self.resolved.clear();
	}
}

/// Files matched by all of `filters`, materialized without archived or hidden
/// collections. No filters means every uploaded file.
#[instrument(skip_all, fields(filters_count = filters.len()))]
pub async fn get_filtered_files(
	ctx: &SearchContext,
	filters: &[Filter],
	cache: &mut MatchCache,
) -> Result<Vec<File>, SearchError> {
	let ids = if filters.is_empty() {
		uploaded_ids(&ctx.files.get_all_files_for_hierarchical_search().await?)
	} else {
		resolve_matches(ctx, filters, cache).await?;

		let unresolved = HashSet::new();
		combine_match_sets(filters.iter().map(|filter| {
			filter
				.preset_matches()
				.or_else(|| cache.get(&filter.key()))
				.unwrap_or(&unresolved)
		}))
	};

	debug!("Filters matched {} uploaded files", ids.len());

	let ignored = ctx.collections.archived_or_hidden_collection_ids().await?;

	ctx.files.get_files_from_ids(&ids, true, &ignored).await
}

/// Fills `cache` with the match set of every filter not resolved yet.
///
/// Face lookups that fail are logged and left unresolved, so they contribute
/// nothing now and get retried on the next pass. Predicate filters are
/// resolved together in a single scan over every file. Filters carrying their
/// own match set are left out of the cache.
pub async fn resolve_matches(
	ctx: &SearchContext,
	filters: &[Filter],
	cache: &mut MatchCache,
) -> Result<(), SearchError> {
	let mut pending = Vec::<(FilterKey, &Filter)>::new();

	for filter in filters {
		if filter.preset_matches().is_some() {
			continue;
		}

		let key = filter.key();
		if cache.contains(&key) || pending.iter().any(|(pending_key, _)| *pending_key == key) {
			continue;
		}

		match filter {
			Filter::Face(face) => match face_matches(ctx.faces.as_ref(), &face.identity).await {
				Ok(matched) => cache.insert(key, matched),
				Err(e) => error!("Failed to resolve face filter {:?}: {e:#?}", face.identity),
			},

			Filter::OnlyThem(only_them) => {
				match only_them_matches(ctx.faces.as_ref(), only_them).await {
					Ok(matched) => cache.insert(key, matched),
					Err(e) => error!("Failed to resolve '{}' filter: {e:#?}", only_them.name),
				}
			}

			_ => pending.push((key, filter)),
		}
	}

	if pending.is_empty() {
		return Ok(());
	}

	let files = ctx.files.get_all_files_for_hierarchical_search().await?;

	let mut matched = vec![HashSet::new(); pending.len()];
	for file in &files {
		let Some(id) = file.uploaded_id() else {
			continue;
		};

		for ((_, filter), set) in pending.iter().zip(matched.iter_mut()) {
			if filter.is_match(file) == Some(true) {
				set.insert(id);
			}
		}
	}

	for ((key, _), set) in pending.into_iter().zip(matched) {
		cache.insert(key, set);
	}

	Ok(())
}

/// The first set seeds the result, every following set narrows it down. That
/// makes this a plain intersection over all the sets.
pub fn combine_match_sets<'s>(
	sets: impl IntoIterator<Item = &'s HashSet<UploadedFileId>>,
) -> HashSet<UploadedFileId> {
	let mut result = HashSet::new();

	for (i, set) in sets.into_iter().enumerate() {
		if i == 0 {
			result.extend(set.iter().copied());
		} else {
			result.retain(|id| set.contains(id));
		}
	}

	result
}

pub async fn face_matches(
	faces: &dyn FaceIndex,
	identity: &FaceIdentity,
) -> Result<HashSet<UploadedFileId>, SearchError> {
	match identity {
		FaceIdentity::Person(person_id) => faces.get_file_ids_of_person_id(*person_id).await,
		FaceIdentity::Cluster(cluster_id) => faces.get_file_ids_of_cluster_id(cluster_id).await,
	}
}

/// Files where every wanted face shows up and no face to avoid does. Faces
/// belonging to neither list don't matter.
pub async fn only_them_matches(
	faces: &dyn FaceIndex,
	filter: &OnlyThemFilter,
) -> Result<HashSet<UploadedFileId>, SearchError> {
	let wanted = filter.identities();
	let to_avoid = filter.identities_to_avoid();

	if wanted.is_empty() {
		return Ok(HashSet::new());
	}

	let (file_id_to_cluster_ids, cluster_id_to_person_id) = (
		faces.get_file_id_to_cluster_ids(),
		faces.get_cluster_id_to_person_id(),
	)
		.try_join()
		.await?;

	Ok(file_id_to_cluster_ids
		.into_iter()
		.filter_map(|(file_id, cluster_ids)| {
			let in_file = cluster_ids
				.into_iter()
				.map(|cluster_id| match cluster_id_to_person_id.get(&cluster_id) {
					Some(person_id) => FaceIdentity::Person(*person_id),
					None => FaceIdentity::Cluster(cluster_id),
				})
				.collect::<BTreeSet<_>>();

			(in_file.is_superset(&wanted) && in_file.is_disjoint(&to_avoid)).then_some(file_id)
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_sets_no_matches() {
		let none: [&HashSet<UploadedFileId>; 0] = [];

		assert!(combine_match_sets(none).is_empty());
	}

	#[test]
	fn single_set_is_kept_whole() {
		let only = HashSet::from([1, 2, 3]);

		assert_eq!(combine_match_sets([&only]), only);
	}

	#[test]
	fn combining_is_plain_intersection() {
		let sets = [
			HashSet::from([1, 2, 3, 4, 5]),
			HashSet::from([2, 3, 4, 9]),
			HashSet::from([3, 4, 10]),
		];

		let expected = sets
			.iter()
			.skip(1)
			.fold(sets[0].clone(), |acc, set| &acc & set);

		assert_eq!(combine_match_sets(&sets), expected);
		assert_eq!(combine_match_sets(&sets), HashSet::from([3, 4]));
	}

	#[test]
	fn empty_first_set_empties_everything() {
		let sets = [HashSet::new(), HashSet::from([1, 2])];

		assert!(combine_match_sets(&sets).is_empty());
	}

	#[test]
	fn cache_bookkeeping() {
		let mut cache = MatchCache::default();
		let key = FilterKey::Magic("Sunsets".to_string());

		assert!(cache.is_empty());
		cache.insert(key.clone(), HashSet::from([1]));
		assert!(cache.contains(&key));
		assert_eq!(cache.len(), 1);
		cache.clear();
		assert!(cache.get(&key).is_none());
	}
}
