//! Mutation lifecycle reducer
//!
//! Tracks the most recent gated mutation:
//!
//! ```text
//! Idle -> PendingConfirmation -> Executing -> Succeeded | Failed
//!                 \-> Cancelled
//! ```

use crate::actions::{Action, AlertAction, MutationAction};
use crate::state::MutationPhase;

/// Reduce the mutation phase for any action
pub fn reduce_mutation(phase: MutationPhase, action: &Action) -> MutationPhase {
    match action {
        Action::Alert(AlertAction::Show {
            intent: Some(intent),
            ..
        }) => MutationPhase::PendingConfirmation(intent.clone()),

        // A pending confirmation is cancelled when its alert goes away
        // without being confirmed, or is replaced by another alert
        Action::Alert(AlertAction::Show { intent: None, .. }) | Action::Alert(AlertAction::Close(_)) => {
            match phase {
                MutationPhase::PendingConfirmation(intent) => MutationPhase::Cancelled(intent),
                other => other,
            }
        }

        Action::Mutation(MutationAction::Execute(intent)) => {
            MutationPhase::Executing(intent.clone())
        }
        Action::Mutation(MutationAction::Succeeded { intent, .. }) => {
            MutationPhase::Succeeded(intent.clone())
        }
        Action::Mutation(MutationAction::Failed { intent, message }) => MutationPhase::Failed {
            intent: intent.clone(),
            message: message.clone(),
        },

        _ => phase,
    }
}
