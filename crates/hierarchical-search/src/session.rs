use crate::{
	error::SearchError,
	filter::Filter,
	model::File,
	resolve::{get_filtered_files, MatchCache},
	services::SearchContext,
};

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::debug;

const EVENTS_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
	AppliedFiltersChanged,
	RecommendationsChanged,
}

/// State of one search session: what the user applied and what we suggest.
///
/// Both lists are only ever swapped as a whole, so observers never see a
/// half-updated list. Every change to the applied filters bumps the revision;
/// work started against an older revision is discarded when it lands.
#[derive(Debug)]
pub struct SearchSession {
	applied: RwLock<Vec<Filter>>,
	recommendations: RwLock<Vec<Filter>>,
	matches: Mutex<MatchCache>,
	revision: AtomicU64,
	events_tx: broadcast::Sender<SessionEvent>,
}

impl Default for SearchSession {
	fn default() -> Self {
		Self::new()
	}
}

impl SearchSession {
	#[must_use]
	pub fn new() -> Self {
		let (events_tx, _) = broadcast::channel(EVENTS_CHANNEL_CAPACITY);

		Self {
			applied: RwLock::new(vec![]),
			recommendations: RwLock::new(vec![]),
			matches: Mutex::new(MatchCache::default()),
			revision: AtomicU64::new(0),
			events_tx,
		}
	}

	pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
		self.events_tx.subscribe()
	}

	pub fn revision(&self) -> u64 {
		self.revision.load(Ordering::Acquire)
	}

	pub async fn applied_filters(&self) -> Vec<Filter> {
		self.applied.read().await.clone()
	}

	pub async fn recommendations(&self) -> Vec<Filter> {
		self.recommendations.read().await.clone()
	}

	/// Applies `filter`, taking it out of the recommendations. Returns `false`
	/// if an equivalent filter was already applied.
	pub async fn apply_filter(&self, filter: Filter) -> bool {
		let mut applied = self.applied.write().await;
		if applied.iter().any(|f| f.is_same_filter(&filter)) {
			return false;
		}

		let mut recommendations = self.recommendations.write().await;
		*recommendations = recommendations
			.iter()
			.filter(|f| !f.is_same_filter(&filter))
			.cloned()
			.collect();

		let mut next = applied.clone();
		next.push(filter);
		*applied = next;
		self.revision.fetch_add(1, Ordering::AcqRel);

		self.notify(SessionEvent::AppliedFiltersChanged);
		self.notify(SessionEvent::RecommendationsChanged);

		true
	}

	/// Returns `false` if no equivalent filter was applied.
	pub async fn remove_applied_filter(&self, filter: &Filter) -> bool {
		let mut applied = self.applied.write().await;
		let next = applied
			.iter()
			.filter(|f| !f.is_same_filter(filter))
			.cloned()
			.collect::<Vec<_>>();

		if next.len() == applied.len() {
			return false;
		}

		*applied = next;
		self.revision.fetch_add(1, Ordering::AcqRel);
		self.notify(SessionEvent::AppliedFiltersChanged);

		true
	}

	pub async fn set_applied_filters(&self, filters: Vec<Filter>) {
		let mut applied = self.applied.write().await;
		*applied = filters;
		self.revision.fetch_add(1, Ordering::AcqRel);
		self.notify(SessionEvent::AppliedFiltersChanged);
	}

	/// Replaces the recommendations, leaving out anything already applied, and
	/// returns how many were kept.
	///
	/// Rejected with `None` when the applied filters changed since `revision`
	/// was read, as the recommendations were computed for a stale view.
	pub async fn clear_and_add_recommendations(
		&self,
		revision: u64,
		filters: Vec<Filter>,
	) -> Option<usize> {
		let applied = self.applied.read().await;
		if self.revision() != revision {
			debug!(
				"Discarding recommendations for stale revision {revision}, now at {}",
				self.revision()
			);
			return None;
		}

		let filters = filters
			.into_iter()
			.filter(|filter| !applied.iter().any(|f| f.is_same_filter(filter)))
			.collect::<Vec<_>>();
		let count = filters.len();

		*self.recommendations.write().await = filters;
		self.notify(SessionEvent::RecommendationsChanged);

		Some(count)
	}

	/// Forgets every resolved match set, for when the indexes behind them changed.
	pub async fn invalidate_matches(&self) {
		self.matches.lock().await.clear();
	}

	/// Files matching the applied filters, or `None` if they changed while we
	/// were computing.
	pub async fn filtered_files(&self, ctx: &SearchContext) -> Result<Option<Vec<File>>, SearchError> {
		let revision = self.revision();
		let filters = self.applied_filters().await;

		let files = {
			let mut matches = self.matches.lock().await;
			get_filtered_files(ctx, &filters, &mut matches).await?
		};

		if self.revision() == revision {
			Ok(Some(files))
		} else {
			debug!("Applied filters changed while filtering, dropping result");
			Ok(None)
		}
	}

	fn notify(&self, event: SessionEvent) {
		// Nobody listening is fine
		self.events_tx.send(event).ok();
	}
}
