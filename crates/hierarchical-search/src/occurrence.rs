use crate::model::{File, UploadedFileId};

use std::{
	collections::{HashMap, HashSet},
	hash::Hash,
};

/// Counts how many times each key shows up in `items`. Items for which `key`
/// returns `None` are skipped.
pub fn count_occurrences<T, K>(
	items: impl IntoIterator<Item = T>,
	key: impl Fn(&T) -> Option<K>,
) -> HashMap<K, usize>
where
	K: Eq + Hash,
{
	items
		.into_iter()
		.filter_map(|item| key(&item))
		.fold(HashMap::new(), |mut counts, key| {
			*counts.entry(key).or_default() += 1;
			counts
		})
}

/// Counts files per key, once per upload.
///
/// Files that were never uploaded are skipped, and repeated entries of the
/// same upload (one per collection membership) only count the first time.
pub fn count_file_occurrences<'f, K>(
	files: impl IntoIterator<Item = &'f File>,
	key: impl Fn(&File) -> Option<K>,
) -> HashMap<K, usize>
where
	K: Eq + Hash,
{
	let mut seen = HashSet::new();

	count_occurrences(
		files
			.into_iter()
			.filter(|file| file.uploaded_id().is_some_and(|id| seen.insert(id))),
		|file| key(file),
	)
}

/// The deduplicated uploaded ids of `files`.
pub fn uploaded_ids<'f>(files: impl IntoIterator<Item = &'f File>) -> HashSet<UploadedFileId> {
	files.into_iter().filter_map(File::uploaded_id).collect()
}
