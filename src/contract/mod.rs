mod capture;
mod verification;

pub use capture::{
    CaptureError, CapturedResponse, ContractRun, MISSING_ID_SEGMENT, MODIFIED_KEY, capture,
    create_payload, id_segment, modify_key_payload,
};
pub use verification::{CheckGroup, ContractCheck, ContractReport};
