//! Mutation lifecycle state
//!
//! `Triggered -> PendingConfirmation -> {Executing -> Succeeded | Failed} | Cancelled`

use crate::domain_models::MutationIntent;

/// Phase of the most recent gated mutation
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MutationPhase {
    #[default]
    Idle,
    PendingConfirmation(MutationIntent),
    Executing(MutationIntent),
    Succeeded(MutationIntent),
    Failed {
        intent: MutationIntent,
        message: String,
    },
    Cancelled(MutationIntent),
}
