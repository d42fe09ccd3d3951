use crate::{
	error::SearchError,
	filter::AlbumFilter,
	model::File,
	occurrence::{count_occurrences, uploaded_ids},
	services::SearchContext,
};

use tracing::{debug, error, instrument};

use super::by_occurrence;

/// One filter per collection the files live in. Collections deleted while we
/// were counting are skipped.
#[instrument(skip_all, fields(files_count = files.len()))]
pub async fn curate_album_filters(ctx: &SearchContext, files: &[File]) -> Vec<AlbumFilter> {
	match try_curate(ctx, files).await {
		Ok(filters) => filters,
		Err(e) => {
			error!("Failed to curate album filters: {e:#?}");
			vec![]
		}
	}
}

async fn try_curate(ctx: &SearchContext, files: &[File]) -> Result<Vec<AlbumFilter>, SearchError> {
	let ids = uploaded_ids(files);
	if ids.is_empty() {
		return Ok(vec![]);
	}

	let collection_ids = ctx.files.get_all_collection_ids_of_files(&ids).await?;

	let counts = count_occurrences(collection_ids, |id| Some(*id));

	let mut filters = Vec::with_capacity(counts.len());
	for (collection_id, occurrence) in by_occurrence(counts) {
		let Some(collection) = ctx.collections.get_collection_by_id(collection_id).await? else {
			debug!("Skipping album filter for missing collection <id='{collection_id}'>");
			continue;
		};

		filters.push(AlbumFilter {
			collection_id,
			collection_name: collection.name,
			occurrence,
		});
	}

	Ok(filters)
}
