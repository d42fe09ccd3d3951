//!
//! # Hierarchical Search
//!
//! Filter curation and aggregation for a photo library. Given every file a user
//! can see and a handful of read-only indexes (albums, owners, locations, face
//! clusters and persons, smart groups) this crate:
//! - Suggests filters per category, ranked by how many files in view they match;
//! - Synthesizes an "only them" filter out of the applied face filters;
//! - Picks a small, category-diverse subset of suggestions for the app bar;
//! - Resolves applied filters to file id sets once, and intersects them into the
//!   final list of files.
//!
//! Collaborators are plugged in through the traits in [`services`], bundled into
//! a [`SearchContext`]. Per-session state lives in a [`SearchSession`].
//!
//! ## Basic example
//!
//! ```no_run
//! use hierarchical_search::{
//! 	curate_filters, get_recommended_filters_for_app_bar, SearchContext, SearchError,
//! 	SearchSession,
//! };
//!
//! async fn refresh(ctx: &SearchContext, session: &SearchSession) -> Result<(), SearchError> {
//! 	let files = session.filtered_files(ctx).await?.unwrap_or_default();
//!
//! 	curate_filters(ctx, session, &files).await?;
//!
//! 	let app_bar = get_recommended_filters_for_app_bar(
//! 		&session.recommendations().await,
//! 		ctx.config.max_appbar_filters,
//! 	);
//! 	println!("{} filters in the app bar", app_bar.len());
//!
//! 	Ok(())
//! }
//! ```

#![warn(
	clippy::all,
	clippy::pedantic,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::nursery,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	trivial_casts,
	trivial_numeric_casts,
	unused_allocation,
	clippy::unnecessary_cast,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::dbg_macro,
	clippy::deprecated_cfg_attr,
	clippy::separated_literal_suffix,
	deprecated
)]
#![forbid(deprecated_in_future)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod config;
pub mod curator;
pub mod filter;
pub mod logging;
pub mod model;
pub mod occurrence;
pub mod services;

mod curate;
mod error;
mod resolve;
mod session;
mod slots;

pub use config::SearchConfig;
pub use curate::{build_recommendations, curate_filters, CurationOutcome};
pub use error::{ConfigIOError, SearchError};
pub use filter::{Filter, FilterKey, FilterKind};
pub use resolve::{
	combine_match_sets, face_matches, get_filtered_files, only_them_matches, resolve_matches,
	MatchCache,
};
pub use services::SearchContext;
pub use session::{SearchSession, SessionEvent};
pub use slots::{
	get_filters_for_bottom_sheet, get_recommended_filters_for_app_bar, BottomSheetFilters,
	SheetFilter,
};
