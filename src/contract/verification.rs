use crate::contract::capture::{CapturedResponse, ContractRun};
use crate::domain::{RESOURCE_ID_LENGTH, ResourceId};
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckGroup {
    SuccessfulCreate,
    UnauthorizedCreate,
    SuccessfulDelete,
    UnauthorizedDelete,
    SuccessfulModifyKey,
}

impl CheckGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckGroup::SuccessfulCreate => "successful POST requests to the dictionary",
            CheckGroup::UnauthorizedCreate => "unauthorized POST requests to the dictionary",
            CheckGroup::SuccessfulDelete => "successful DELETE requests to a resource",
            CheckGroup::UnauthorizedDelete => "unauthorized DELETE requests to a resource",
            CheckGroup::SuccessfulModifyKey => "successful POST requests to a resource key",
        }
    }
}

impl std::fmt::Display for CheckGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCheck {
    pub group: CheckGroup,
    pub description: &'static str,
    pub expected: String,
    pub observed: String,
    pub passed: bool,
}

impl std::fmt::Display for ContractCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: expected {}, observed {}",
            self.group, self.description, self.expected, self.observed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractReport {
    checks: Vec<ContractCheck>,
}

impl ContractReport {
    pub fn checks(&self) -> &[ContractCheck] {
        &self.checks
    }

    pub fn failures(&self) -> impl Iterator<Item = &ContractCheck> {
        self.checks.iter().filter(|check| !check.passed)
    }

    pub fn is_satisfied(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }
}

impl std::fmt::Display for ContractReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let failed = self.failures().count();
        writeln!(
            f,
            "{} of {} contract checks failed",
            failed,
            self.checks.len()
        )?;
        for check in self.failures() {
            writeln!(f, "\t{}", check)?;
        }
        Ok(())
    }
}

impl ContractRun {
    /// Evaluate every assertion against the captured responses.
    ///
    /// A malformed credential is expected to be rejected with 400 on create
    /// but with 401 on delete.
    pub fn verify(&self) -> ContractReport {
        use CheckGroup::*;

        let mut checks = vec![status_check(
            SuccessfulCreate,
            "returns a status code of 201",
            &self.create,
            StatusCode::CREATED,
        )];
        checks.extend(create_body_checks(self.create.body.as_ref()));
        checks.extend([
            status_check(
                UnauthorizedCreate,
                "returns a status code of 401 if authorization has the correct prefix but an incorrect hash",
                &self.create_wrong_hash,
                StatusCode::UNAUTHORIZED,
            ),
            status_check(
                UnauthorizedCreate,
                "returns a status code of 401 if authorization is missing",
                &self.create_missing,
                StatusCode::UNAUTHORIZED,
            ),
            status_check(
                UnauthorizedCreate,
                "returns a status code of 400 if authorization is malformed",
                &self.create_malformed,
                StatusCode::BAD_REQUEST,
            ),
            status_check(
                SuccessfulDelete,
                "returns a status code of 200 when addressed by path",
                &self.delete_by_path,
                StatusCode::OK,
            ),
            status_check(
                SuccessfulDelete,
                "returns a status code of 200 when addressed by path and query",
                &self.delete_by_path_and_query,
                StatusCode::OK,
            ),
            status_check(
                UnauthorizedDelete,
                "returns a status code of 401 if authorization is incorrect",
                &self.delete_wrong_hash,
                StatusCode::UNAUTHORIZED,
            ),
            status_check(
                UnauthorizedDelete,
                "returns a status code of 401 if authorization is malformed",
                &self.delete_malformed,
                StatusCode::UNAUTHORIZED,
            ),
            status_check(
                UnauthorizedDelete,
                "returns a status code of 401 if authorization is missing",
                &self.delete_missing,
                StatusCode::UNAUTHORIZED,
            ),
            status_check(
                SuccessfulModifyKey,
                "returns a status code of 201",
                &self.modify_key,
                StatusCode::CREATED,
            ),
        ]);
        ContractReport { checks }
    }
}

fn status_check(
    group: CheckGroup,
    description: &'static str,
    captured: &CapturedResponse,
    expected: StatusCode,
) -> ContractCheck {
    ContractCheck {
        group,
        description,
        expected: expected.as_u16().to_string(),
        observed: captured.status.as_u16().to_string(),
        passed: captured.status == expected,
    }
}

fn create_body_checks(body: Option<&Value>) -> [ContractCheck; 4] {
    let group = CheckGroup::SuccessfulCreate;
    let id = body.and_then(|body| body.get("id"));
    let id_length = id
        .and_then(Value::as_str)
        .map(|id| (id.chars().count(), ResourceId::parse(id.to_string()).is_ok()));

    [
        ContractCheck {
            group,
            description: "returns an object",
            expected: "object".into(),
            observed: json_type_name(body).into(),
            passed: body.is_some_and(Value::is_object),
        },
        ContractCheck {
            group,
            description: "the object contains an id key",
            expected: "id present".into(),
            observed: if id.is_some() { "id present" } else { "id absent" }.into(),
            passed: id.is_some() && body.is_some_and(Value::is_object),
        },
        ContractCheck {
            group,
            description: "the value of the id property is a string",
            expected: "string".into(),
            observed: json_type_name(id).into(),
            passed: id.is_some_and(Value::is_string),
        },
        ContractCheck {
            group,
            description: "the string is 36 characters",
            expected: RESOURCE_ID_LENGTH.to_string(),
            observed: id_length
                .map(|(length, _)| length.to_string())
                .unwrap_or_else(|| "no string id".into()),
            passed: id_length.is_some_and(|(_, valid)| valid),
        },
    ]
}

fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
