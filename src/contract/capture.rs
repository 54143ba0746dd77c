use crate::dictionary_client::{DeleteAddress, DictionaryClient};
use crate::domain::{CredentialVariant, Credentials};
use crate::utils::error_chain_fmt;
use reqwest::StatusCode;
use serde_json::Value;

/// The key rewritten by the modify-key request.
pub const MODIFIED_KEY: &str = "test";
/// Path segment used when the create response carries no `id` at all.
pub const MISSING_ID_SEGMENT: &str = "undefined";

pub fn create_payload() -> Value {
    serde_json::json!({ "test": "TEST" })
}

pub fn modify_key_payload() -> Value {
    serde_json::json!({ "test": "new value" })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedResponse {
    pub status: StatusCode,
    /// Only decoded for the successful create request.
    pub body: Option<Value>,
}

impl CapturedResponse {
    pub fn status_only(status: StatusCode) -> Self {
        Self { status, body: None }
    }
}

/// Every response of one pass over the dictionary API, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRun {
    pub create: CapturedResponse,
    pub create_wrong_hash: CapturedResponse,
    pub create_malformed: CapturedResponse,
    pub create_missing: CapturedResponse,
    pub modify_key: CapturedResponse,
    pub delete_by_path: CapturedResponse,
    pub delete_by_path_and_query: CapturedResponse,
    pub delete_wrong_hash: CapturedResponse,
    pub delete_malformed: CapturedResponse,
    pub delete_missing: CapturedResponse,
}

#[derive(thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to send the {operation} request")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("The create response (status {status}) did not have a JSON body")]
    InvalidBody {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },
}

impl std::fmt::Debug for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn request_error(operation: &'static str) -> impl FnOnce(reqwest::Error) -> CaptureError {
    move |source| CaptureError::Request { operation, source }
}

/// Issue the whole request sequence once.
///
/// Requests run one after the other: modify and delete need the identifier
/// handed out by the first create, and nothing is retried. Only transport
/// failures and a create body that is not JSON end the run early. A missing
/// or odd `id` is left for [`ContractRun::verify`] to report.
#[tracing::instrument(
    name = "Capturing dictionary contract run",
    skip_all,
    fields(base_url = %client.base_url())
)]
pub async fn capture(
    client: &DictionaryClient,
    credentials: &Credentials,
) -> Result<ContractRun, CaptureError> {
    let payload = create_payload();

    let authorization = credentials.authorization(CredentialVariant::Valid);
    let response = client
        .create(&payload, authorization.as_ref())
        .await
        .map_err(request_error("create"))?;
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|source| CaptureError::InvalidBody { status, source })?;
    let id = id_segment(&body);
    tracing::info!(%status, %id, "Captured create response");
    let create = CapturedResponse {
        status,
        body: Some(body),
    };

    let create_wrong_hash = create_with(client, credentials, CredentialVariant::WrongHash).await?;
    let create_malformed = create_with(client, credentials, CredentialVariant::Malformed).await?;
    let create_missing = create_with(client, credentials, CredentialVariant::Missing).await?;

    let response = client
        .set_key(
            &id,
            MODIFIED_KEY,
            &modify_key_payload(),
            authorization.as_ref(),
        )
        .await
        .map_err(request_error("modify key"))?;
    let modify_key = CapturedResponse::status_only(response.status());

    let delete_by_path = delete_with(
        client,
        credentials,
        &id,
        DeleteAddress::Path,
        CredentialVariant::Valid,
    )
    .await?;
    let delete_by_path_and_query = delete_with(
        client,
        credentials,
        &id,
        DeleteAddress::PathAndQuery,
        CredentialVariant::Valid,
    )
    .await?;
    let delete_wrong_hash = delete_with(
        client,
        credentials,
        &id,
        DeleteAddress::Path,
        CredentialVariant::WrongHash,
    )
    .await?;
    let delete_malformed = delete_with(
        client,
        credentials,
        &id,
        DeleteAddress::Path,
        CredentialVariant::Malformed,
    )
    .await?;
    let delete_missing = delete_with(
        client,
        credentials,
        &id,
        DeleteAddress::Path,
        CredentialVariant::Missing,
    )
    .await?;

    Ok(ContractRun {
        create,
        create_wrong_hash,
        create_malformed,
        create_missing,
        modify_key,
        delete_by_path,
        delete_by_path_and_query,
        delete_wrong_hash,
        delete_malformed,
        delete_missing,
    })
}

/// How the create response's `id` is spelled in later request paths.
pub fn id_segment(body: &Value) -> String {
    match body.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => MISSING_ID_SEGMENT.to_string(),
    }
}

async fn create_with(
    client: &DictionaryClient,
    credentials: &Credentials,
    variant: CredentialVariant,
) -> Result<CapturedResponse, CaptureError> {
    let authorization = credentials.authorization(variant);
    let response = client
        .create(&create_payload(), authorization.as_ref())
        .await
        .map_err(request_error("create"))?;
    tracing::info!(status = %response.status(), credential = %variant, "Captured create response");
    Ok(CapturedResponse::status_only(response.status()))
}

async fn delete_with(
    client: &DictionaryClient,
    credentials: &Credentials,
    id: &str,
    address: DeleteAddress,
    variant: CredentialVariant,
) -> Result<CapturedResponse, CaptureError> {
    let authorization = credentials.authorization(variant);
    let response = client
        .delete(id, address, authorization.as_ref())
        .await
        .map_err(request_error("delete"))?;
    tracing::info!(
        status = %response.status(),
        credential = %variant,
        ?address,
        "Captured delete response"
    );
    Ok(CapturedResponse::status_only(response.status()))
}
