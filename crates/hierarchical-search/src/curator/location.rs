use crate::{filter::LocationFilter, model::File, services::SearchContext};

use std::cmp::Reverse;

use tracing::{error, instrument};

#[instrument(skip_all, fields(files_count = files.len()))]
pub async fn curate_location_filters(ctx: &SearchContext, files: &[File]) -> Vec<LocationFilter> {
	let tags = match ctx.locations.get_location_tags_to_occurrence(files).await {
		Ok(tags) => tags,
		Err(e) => {
			error!("Failed to curate location filters: {e:#?}");
			return vec![];
		}
	};

	let mut filters = tags
		.into_iter()
		.filter(|(_, occurrence)| *occurrence > 0)
		.map(|(tag, occurrence)| LocationFilter { tag, occurrence })
		.collect::<Vec<_>>();

	filters.sort_by(|a, b| {
		(Reverse(a.occurrence), &a.tag.name).cmp(&(Reverse(b.occurrence), &b.tag.name))
	});

	filters
}
