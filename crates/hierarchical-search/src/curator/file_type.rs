use crate::{
	filter::FileTypeFilter,
	model::{File, FileType},
	occurrence::count_file_occurrences,
	services::SearchContext,
};

const BUCKETS: [FileType; 3] = [FileType::Image, FileType::Video, FileType::LivePhoto];

pub fn curate_file_type_filters(ctx: &SearchContext, files: &[File]) -> Vec<FileTypeFilter> {
	let counts = count_file_occurrences(files, |file| Some(file.file_type));

	BUCKETS
		.into_iter()
		.filter_map(|file_type| {
			counts
				.get(&file_type)
				.filter(|occurrence| **occurrence > 0)
				.map(|occurrence| FileTypeFilter {
					file_type,
					type_name: ctx.localizer.file_type_name(file_type),
					occurrence: *occurrence,
				})
		})
		.collect()
}
