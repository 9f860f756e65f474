//! Amenity form actions

use admin_client::AmenityInput;

use crate::state::FormMode;

/// Actions for the amenity create/update form
#[derive(Debug, Clone, PartialEq)]
pub enum AmenityFormAction {
    /// Open an empty form for a new amenity
    OpenCreate,
    /// Edit the amenity under the cursor (resolved to `OpenEdit` by middleware)
    EditSelected,
    /// Look the amenity up by id, then open the form (handled by middleware)
    OpenEdit(String),
    /// Show the form with the given content
    Opened { mode: FormMode, input: AmenityInput },

    // Text input (translated from TextInputAction)
    /// Character typed into the focused field
    Char(char),
    /// Backspace in the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PreviousField,

    /// Validate and ask for confirmation (handled by middleware)
    Submit,
    /// Close the form without saving
    Close,
}
