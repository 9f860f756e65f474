//! Mutation lifecycle actions

use crate::domain_models::MutationIntent;

/// Actions of a single gated mutation
#[derive(Debug, Clone, PartialEq)]
pub enum MutationAction {
    /// Confirmed: call the mutation endpoint (handled by middleware)
    Execute(MutationIntent),
    /// The server accepted the mutation
    Succeeded {
        intent: MutationIntent,
        message: String,
    },
    /// The mutation failed; `message` is ready to show to the user
    Failed {
        intent: MutationIntent,
        message: String,
    },
}
