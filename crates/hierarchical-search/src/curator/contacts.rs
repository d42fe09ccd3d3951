use crate::{
	filter::ContactsFilter,
	model::{File, User},
	occurrence::count_file_occurrences,
	services::SearchContext,
};

use tracing::{instrument, warn};

use super::by_occurrence;

/// One filter per other person whose files show up in `files`.
#[instrument(skip_all, fields(files_count = files.len()))]
pub async fn curate_contacts_filters(ctx: &SearchContext, files: &[File]) -> Vec<ContactsFilter> {
	let counts = count_file_occurrences(files, |file| {
		file.owner_id.filter(|owner_id| *owner_id != ctx.current_user_id)
	});

	let mut filters = Vec::with_capacity(counts.len());
	for (owner_id, occurrence) in by_occurrence(counts) {
		let user = ctx
			.collections
			.get_file_owner(owner_id, None)
			.await
			.unwrap_or_else(|e| {
				warn!("Couldn't resolve file owner <id='{owner_id}'>, using bare identity: {e:#?}");
				User::minimal(owner_id)
			});

		filters.push(ContactsFilter { user, occurrence });
	}

	filters
}
