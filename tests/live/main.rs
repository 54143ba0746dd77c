//! Contract tests against the hosted dictionary API.
//!
//! They need network access and a valid credential in `REQUEST_HEADER`
//! (a `.env` file works), so they only run on request:
//! `cargo test --test live -- --ignored`

use dictionary_contract::configuration::get_configuration;
use dictionary_contract::contract::{ContractRun, capture};
use std::sync::LazyLock;
use tokio::sync::OnceCell;

// All requests are issued once and shared by every test below. A failed
// setup is kept as well, so it is reported by every test without being retried.
static CONTRACT_RUN: LazyLock<OnceCell<Result<ContractRun, String>>> =
    LazyLock::new(OnceCell::new);

async fn capture_live_run() -> Result<ContractRun, String> {
    let _ = dotenvy::dotenv();
    let configuration =
        get_configuration().map_err(|e| format!("Failed to read configuration: {}", e))?;
    let client = configuration
        .dictionary
        .client()
        .map_err(|e| format!("Failed to build the dictionary client: {}", e))?;
    capture(&client, &configuration.dictionary.credentials())
        .await
        .map_err(|e| format!("Failed to capture the dictionary API responses: {:?}", e))
}

async fn contract_run() -> &'static ContractRun {
    match CONTRACT_RUN.get_or_init(capture_live_run).await {
        Ok(run) => run,
        Err(e) => panic!("{}", e),
    }
}

mod successful_create {
    use super::contract_run;

    #[tokio::test]
    #[ignore]
    async fn returns_a_status_code_of_201() {
        assert_eq!(201, contract_run().await.create.status.as_u16());
    }

    #[tokio::test]
    #[ignore]
    async fn returns_an_object() {
        let body = contract_run().await.create.body.as_ref();
        assert!(body.is_some_and(serde_json::Value::is_object));
    }

    #[tokio::test]
    #[ignore]
    async fn the_object_contains_an_id_key() {
        let body = contract_run().await.create.body.as_ref().unwrap();
        assert!(body.get("id").is_some());
    }

    #[tokio::test]
    #[ignore]
    async fn the_value_of_the_id_property_is_a_string() {
        let body = contract_run().await.create.body.as_ref().unwrap();
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    #[ignore]
    async fn the_string_is_36_characters() {
        let body = contract_run().await.create.body.as_ref().unwrap();
        assert_eq!(body["id"].as_str().unwrap().len(), 36);
    }
}

mod unauthorized_create {
    use super::contract_run;

    #[tokio::test]
    #[ignore]
    async fn returns_a_401_if_the_credential_has_an_incorrect_hash() {
        assert_eq!(401, contract_run().await.create_wrong_hash.status.as_u16());
    }

    #[tokio::test]
    #[ignore]
    async fn returns_a_401_if_the_credential_is_missing() {
        assert_eq!(401, contract_run().await.create_missing.status.as_u16());
    }

    #[tokio::test]
    #[ignore]
    async fn returns_a_400_if_the_credential_is_malformed() {
        assert_eq!(400, contract_run().await.create_malformed.status.as_u16());
    }
}

mod successful_delete {
    use super::contract_run;

    #[tokio::test]
    #[ignore]
    async fn returns_a_200_when_addressed_by_path() {
        assert_eq!(200, contract_run().await.delete_by_path.status.as_u16());
    }

    #[tokio::test]
    #[ignore]
    async fn returns_a_200_when_addressed_by_path_and_query() {
        assert_eq!(
            200,
            contract_run().await.delete_by_path_and_query.status.as_u16()
        );
    }
}

mod unauthorized_delete {
    use super::contract_run;

    #[tokio::test]
    #[ignore]
    async fn returns_a_401_if_the_credential_is_incorrect() {
        assert_eq!(401, contract_run().await.delete_wrong_hash.status.as_u16());
    }

    #[tokio::test]
    #[ignore]
    async fn returns_a_401_if_the_credential_is_malformed() {
        assert_eq!(401, contract_run().await.delete_malformed.status.as_u16());
    }

    #[tokio::test]
    #[ignore]
    async fn returns_a_401_if_the_credential_is_missing() {
        assert_eq!(401, contract_run().await.delete_missing.status.as_u16());
    }
}

mod successful_modify_key {
    use super::contract_run;

    #[tokio::test]
    #[ignore]
    async fn returns_a_status_code_of_201() {
        assert_eq!(201, contract_run().await.modify_key.status.as_u16());
    }
}
