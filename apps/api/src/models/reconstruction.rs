use serde::{Deserialize, Serialize};

/// Structured reading of a completion reply.
///
/// Always fully populated: the parser fills absent or malformed fields with
/// empty values instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionResult {
    pub reconstruction: String,
    pub explanations: Vec<String>,
    pub keywords: Vec<String>,
}
