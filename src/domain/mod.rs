mod credential;
mod resource_id;

pub use credential::{CredentialVariant, Credentials, MALFORMED_CREDENTIAL, WRONG_HASH_SUFFIX};
pub use resource_id::{RESOURCE_ID_LENGTH, ResourceId};
