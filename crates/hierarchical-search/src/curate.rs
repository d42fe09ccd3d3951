use crate::{
	curator::{
		curate_album_filters, curate_contacts_filters, curate_face_filters,
		curate_file_type_filters, curate_location_filters, curate_magic_filters,
		curate_only_them_filter,
	},
	error::SearchError,
	filter::Filter,
	model::File,
	services::SearchContext,
	session::SearchSession,
};

use futures_concurrency::future::Join;
use tracing::{debug, error, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurationOutcome {
	Updated { recommendations: usize },
	/// The applied filters changed mid-pass, so the result was thrown away
	Superseded,
}

/// Recomputes the session's recommendations for `files`.
///
/// On failure the previous recommendations are left untouched.
#[instrument(skip_all, fields(files_count = files.len()))]
pub async fn curate_filters(
	ctx: &SearchContext,
	session: &SearchSession,
	files: &[File],
) -> Result<CurationOutcome, SearchError> {
	let revision = session.revision();
	let applied = session.applied_filters().await;

	let recommendations = build_recommendations(ctx, files, &applied)
		.await
		.map_err(|e| {
			error!("Failed to curate filters, keeping the previous recommendations: {e:#?}");
			e
		})?;

	match session
		.clear_and_add_recommendations(revision, recommendations)
		.await
	{
		Some(count) => {
			debug!("Published {count} recommendations");
			Ok(CurationOutcome::Updated {
				recommendations: count,
			})
		}
		None => Ok(CurationOutcome::Superseded),
	}
}

/// Runs every curator and lays their output out in category priority order:
/// only them, magic, faces, file types, contacts, albums, locations.
pub async fn build_recommendations(
	ctx: &SearchContext,
	files: &[File],
	applied: &[Filter],
) -> Result<Vec<Filter>, SearchError> {
	let (albums, locations, contacts, magic, faces) = (
		curate_album_filters(ctx, files),
		curate_location_filters(ctx, files),
		curate_contacts_filters(ctx, files),
		curate_magic_filters(ctx, files),
		curate_face_filters(ctx, files),
	)
		.join()
		.await;

	let faces = faces?;
	let file_types = curate_file_type_filters(ctx, files);

	let applied_faces = applied
		.iter()
		.filter_map(|filter| match filter {
			Filter::Face(face) => Some(face.clone()),
			_ => None,
		})
		.collect::<Vec<_>>();

	let only_them = curate_only_them_filter(ctx, files, &applied_faces, &faces).await?;

	Ok(only_them
		.into_iter()
		.map(Filter::OnlyThem)
		.chain(magic.into_iter().map(Filter::Magic))
		.chain(faces.into_iter().map(Filter::Face))
		.chain(file_types.into_iter().map(Filter::FileType))
		.chain(contacts.into_iter().map(Filter::Contacts))
		.chain(albums.into_iter().map(Filter::Album))
		.chain(locations.into_iter().map(Filter::Location))
		.collect())
}
