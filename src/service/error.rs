//! Service-layer error: wraps whichever lower layer failed, tagged with the
//! request field it came from (spec §6's `{errors: {field: message}}`).

use std::collections::BTreeMap;

use thiserror::Error;

use crate::parser::ParseError;
use crate::predicates::PredicateStoreError;
use crate::tableau::TableauError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown logic {0:?}")]
    UnknownLogic(String),

    #[error("argument.{field}: {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    PredicateStore(#[from] PredicateStoreError),

    #[error(transparent)]
    Tableau(#[from] TableauError),
}

impl ServiceError {
    /// The `{field: message}` map a 400/408 response body wants.
    pub fn to_field_errors(&self) -> BTreeMap<String, String> {
        let field = match self {
            ServiceError::UnknownLogic(_) => "logic",
            ServiceError::Parse { field, .. } => field,
            ServiceError::PredicateStore(_) => "argument.predicates",
            ServiceError::Tableau(_) => "tableau",
        };
        BTreeMap::from([(field.to_string(), self.to_string())])
    }
}
