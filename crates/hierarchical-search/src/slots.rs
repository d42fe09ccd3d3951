use crate::filter::{Filter, FilterKind};

use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use strum::EnumCount;

/// Picks at most `max_filters` recommendations for the app bar.
///
/// The first pass grabs the first filter of each category it sees, stopping
/// once every category showed up or past the middle of the list. The second
/// pass tops the budget up in recommendation order. The picks come back in
/// category priority order.
#[must_use]
pub fn get_recommended_filters_for_app_bar(
	recommendations: &[Filter],
	max_filters: usize,
) -> Vec<Filter> {
	let mut curated = Vec::<&Filter>::with_capacity(max_filters);
	let mut seen_kinds = HashSet::with_capacity(FilterKind::COUNT);
	let midpoint = recommendations.len() / 2;

	for (i, filter) in recommendations.iter().enumerate() {
		if curated.len() >= max_filters || seen_kinds.len() == FilterKind::COUNT || i > midpoint {
			break;
		}

		if seen_kinds.insert(filter.kind()) {
			curated.push(filter);
		}
	}

	for filter in recommendations {
		if curated.len() >= max_filters {
			break;
		}

		if !curated.iter().any(|picked| picked.is_same_filter(filter)) {
			curated.push(filter);
		}
	}

	curated
		.into_iter()
		.sorted_by_key(|filter| filter.kind())
		.cloned()
		.collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetFilter {
	pub filter: Filter,
	pub applied: bool,
}

/// Every filter the user can toggle, grouped by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BottomSheetFilters {
	sections: BTreeMap<FilterKind, Vec<SheetFilter>>,
}

impl BottomSheetFilters {
	#[must_use]
	pub fn section(&self, kind: FilterKind) -> &[SheetFilter] {
		self.sections
			.get(&kind)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Non-empty sections in category priority order.
	pub fn sections(&self) -> impl Iterator<Item = (FilterKind, &[SheetFilter])> {
		self.sections
			.iter()
			.map(|(kind, filters)| (*kind, filters.as_slice()))
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}
}

/// Applied filters first in each section, then the recommendations not already applied.
#[must_use]
pub fn get_filters_for_bottom_sheet(
	applied: &[Filter],
	recommendations: &[Filter],
) -> BottomSheetFilters {
	let mut sections = BTreeMap::<FilterKind, Vec<SheetFilter>>::new();

	let recommended = recommendations
		.iter()
		.filter(|filter| !applied.iter().any(|a| a.is_same_filter(filter)));

	for (filter, is_applied) in applied
		.iter()
		.map(|filter| (filter, true))
		.chain(recommended.map(|filter| (filter, false)))
	{
		sections
			.entry(filter.kind())
			.or_default()
			.push(SheetFilter {
				filter: filter.clone(),
				applied: is_applied,
			});
	}

	BottomSheetFilters { sections }
}
