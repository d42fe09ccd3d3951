use crate::{
	error::SearchError,
	filter::{FaceFilter, OnlyThemFilter},
	model::File,
	occurrence::uploaded_ids,
	resolve::only_them_matches,
	services::SearchContext,
};

use tracing::{debug, instrument};

/// Builds the "only them" filter out of the applied face filters.
///
/// Produced when between one and `only_them_max_faces` face filters are
/// applied. Recommended faces the user didn't pick become the faces to avoid.
#[instrument(skip_all, fields(applied_faces = applied_faces.len()))]
pub async fn curate_only_them_filter(
	ctx: &SearchContext,
	files: &[File],
	applied_faces: &[FaceFilter],
	recommended_faces: &[FaceFilter],
) -> Result<Option<OnlyThemFilter>, SearchError> {
	if applied_faces.is_empty() || applied_faces.len() > ctx.config.only_them_max_faces {
		debug!("No only-them filter for {} applied faces", applied_faces.len());
		return Ok(None);
	}

	let face_filters_to_avoid = recommended_faces
		.iter()
		.filter(|face| {
			!applied_faces
				.iter()
				.any(|applied| applied.identity == face.identity)
		})
		.cloned()
		.collect::<Vec<_>>();

	let names = applied_faces
		.iter()
		.filter_map(|face| face.name.clone())
		.filter(|name| !name.is_empty())
		.collect::<Vec<_>>();

	let mut filter = OnlyThemFilter {
		face_filters: applied_faces.to_vec(),
		face_filters_to_avoid,
		name: ctx.localizer.only_them_name(&names),
		occurrence: 0,
	};

	let in_view = uploaded_ids(files);
	filter.occurrence = only_them_matches(ctx.faces.as_ref(), &filter)
		.await?
		.intersection(&in_view)
		.count();

	Ok(Some(filter))
}
