//! One curator per recommendation category. Each one only reads the file set
//! and its own index, building local tallies before anything is published.

use std::{cmp::Reverse, collections::HashMap};

mod album;
mod contacts;
mod face;
mod file_type;
mod location;
mod magic;
mod only_them;

pub use album::curate_album_filters;
pub use contacts::curate_contacts_filters;
pub use face::curate_face_filters;
pub use file_type::curate_file_type_filters;
pub use location::curate_location_filters;
pub use magic::curate_magic_filters;
pub use only_them::curate_only_them_filter;

/// Most frequent first, ties broken by key so output is stable across runs.
fn by_occurrence<K: Ord>(counts: HashMap<K, usize>) -> Vec<(K, usize)> {
	let mut counts = counts.into_iter().collect::<Vec<_>>();
	counts.sort_unstable_by(|(a_key, a_count), (b_key, b_count)| {
		(Reverse(a_count), a_key).cmp(&(Reverse(b_count), b_key))
	});
	counts
}
