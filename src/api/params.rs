use crate::errors::AppError;
use crate::metrics;

/// `?contract=..&from=..` as sent. Both are optional here so a missing
/// parameter becomes our own 400 body rather than an extractor rejection.
#[derive(Debug)]
pub struct ScopeQuery {
    pub contract: Option<String>,
    pub from: Option<String>,
}

/// Validated request scope echoed back in every envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub contract_address: String,
    pub filter_address: String,
}

impl ScopeQuery {
    /// Builds the query from decoded pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = ScopeQuery {
            contract: None,
            from: None,
        };
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "contract" => &mut query.contract,
                "from" => &mut query.from,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn validate(self) -> Result<Scope, AppError> {
        match (self.contract, self.from) {
            (Some(contract), Some(from)) if !contract.is_empty() && !from.is_empty() => Ok(Scope {
                contract_address: contract,
                filter_address: from,
            }),
            _ => Err(AppError::MissingParameters),
        }
    }
}

/// Counts the request and validates its scope.
pub fn require_scope(endpoint: &'static str, query: ScopeQuery) -> Result<Scope, AppError> {
    metrics::record_request(endpoint);
    query.validate().inspect_err(|_| {
        metrics::record_validation_failure(endpoint);
        tracing::debug!(endpoint, "Rejected request without contract/filter address");
    })
}
