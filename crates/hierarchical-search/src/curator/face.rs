use crate::{
	error::SearchError,
	filter::{FaceFilter, FaceIdentity},
	model::{ClusterId, File, PersonId},
	occurrence::uploaded_ids,
	services::SearchContext,
};

use std::collections::{HashMap, HashSet};

use futures_concurrency::future::TryJoin;
use tracing::{error, instrument, warn};

use super::by_occurrence;

/// Person filters for every named, non-ignored person in `files`, followed by
/// filters for big enough clusters nobody has been assigned to yet.
///
/// Unlike the other curators, index failures are returned to the caller so
/// the whole recommendation pass is abandoned.
#[instrument(skip_all, fields(files_count = files.len()))]
pub async fn curate_face_filters(
	ctx: &SearchContext,
	files: &[File],
) -> Result<Vec<FaceFilter>, SearchError> {
	try_curate(ctx, files).await.map_err(|e| {
		error!("Failed to curate face filters: {e:#?}");
		e
	})
}

async fn try_curate(ctx: &SearchContext, files: &[File]) -> Result<Vec<FaceFilter>, SearchError> {
	let (file_id_to_cluster_ids, cluster_id_to_person_id, persons) = (
		ctx.faces.get_file_id_to_cluster_ids(),
		ctx.faces.get_cluster_id_to_person_id(),
		ctx.faces.get_persons_map(),
	)
		.try_join()
		.await?;

	let mut person_counts = HashMap::<PersonId, usize>::new();
	let mut cluster_counts = HashMap::<ClusterId, usize>::new();
	let mut dangling_clusters = HashSet::<&ClusterId>::new();

	for file_id in uploaded_ids(files) {
		let Some(cluster_ids) = file_id_to_cluster_ids.get(&file_id) else {
			continue;
		};

		// A file with two clusters of the same person still counts once for them
		let mut persons_in_file = HashSet::new();

		for cluster_id in cluster_ids {
			match cluster_id_to_person_id.get(cluster_id) {
				Some(person_id) => match persons.get(person_id) {
					Some(person) if person.is_ignored => {}
					Some(_) => {
						persons_in_file.insert(*person_id);
					}
					None => {
						dangling_clusters.insert(cluster_id);
					}
				},
				None => *cluster_counts.entry(cluster_id.clone()).or_default() += 1,
			}
		}

		for person_id in persons_in_file {
			*person_counts.entry(person_id).or_default() += 1;
		}
	}

	for cluster_id in dangling_clusters {
		warn!(
			"Cluster <id='{cluster_id}'> is assigned to person <id='{}'> missing from the person \
			registry, leaving it out",
			cluster_id_to_person_id[cluster_id]
		);
	}

	let mut filters = by_occurrence(person_counts)
		.into_iter()
		.filter_map(|(person_id, occurrence)| {
			persons.get(&person_id).map(|person| FaceFilter {
				identity: FaceIdentity::Person(person_id),
				name: Some(person.name.clone()),
				occurrence,
			})
		})
		.collect::<Vec<_>>();

	filters.extend(
		by_occurrence(cluster_counts)
			.into_iter()
			.filter(|(_, occurrence)| *occurrence >= ctx.config.min_cluster_size)
			.map(|(cluster_id, occurrence)| FaceFilter {
				identity: FaceIdentity::Cluster(cluster_id),
				name: None,
				occurrence,
			}),
	);

	Ok(filters)
}
