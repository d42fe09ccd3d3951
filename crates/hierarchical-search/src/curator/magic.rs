use crate::{
	filter::MagicFilter, model::File, occurrence::uploaded_ids, services::SearchContext,
};

use std::collections::HashSet;

use tracing::{error, instrument, trace};

/// Smart groups that overlap the current view enough to be worth showing.
#[instrument(skip_all, fields(files_count = files.len()))]
pub async fn curate_magic_filters(ctx: &SearchContext, files: &[File]) -> Vec<MagicFilter> {
	let cache = match ctx.magic.get_magic_cache().await {
		Ok(cache) => cache,
		Err(e) => {
			error!("Failed to curate magic filters: {e:#?}");
			return vec![];
		}
	};

	let in_view = uploaded_ids(files);

	cache
		.into_iter()
		.filter_map(|group| {
			let matched_uploaded_ids = group.file_uploaded_ids.into_iter().collect::<HashSet<_>>();
			let occurrence = matched_uploaded_ids.intersection(&in_view).count();

			if occurrence > ctx.config.magic_min_matches {
				Some(MagicFilter {
					title: group.title,
					occurrence,
					matched_uploaded_ids,
				})
			} else {
				trace!("Skipping magic group '{}' with {occurrence} files in view", group.title);
				None
			}
		})
		.collect()
}
