use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PersonId = Uuid;
pub type ClusterId = String;

/// A user-confirmed identity, bound to one or more face clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonEntity {
	pub id: PersonId,
	pub name: String,
	#[serde(default)]
	pub is_ignored: bool,
}
