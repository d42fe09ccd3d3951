use serde::{Deserialize, Serialize};

pub type CollectionId = i64;
pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
	pub id: CollectionId,
	pub name: String,
	pub owner_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: UserId,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub name: Option<String>,
}

impl User {
	/// Identity-only user, used when the owner can't be resolved to anything richer.
	#[must_use]
	pub fn minimal(id: UserId) -> Self {
		Self {
			id,
			email: String::new(),
			name: None,
		}
	}

	#[must_use]
	pub fn display_name(&self) -> String {
		match (&self.name, self.email.is_empty()) {
			(Some(name), _) if !name.is_empty() => name.clone(),
			(_, false) => self.email.clone(),
			_ => format!("User {}", self.id),
		}
	}
}
