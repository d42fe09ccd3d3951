mod collection;
mod file;
mod location;
mod magic;
mod person;

pub use collection::{Collection, CollectionId, User, UserId};
pub use file::{File, FileType, UploadedFileId};
pub use location::{Location, LocationTag};
pub use magic::MagicCache;
pub use person::{ClusterId, PersonEntity, PersonId};
