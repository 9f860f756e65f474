//! Amenity form state

use admin_client::AmenityInput;

/// Whether the form creates a new amenity or updates an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Form fields, in focus order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Key,
    Label,
    Icon,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Key, FormField::Label, FormField::Icon];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Key => "Key",
            Self::Label => "Label",
            Self::Icon => "Icon",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Key => Self::Label,
            Self::Label => Self::Icon,
            Self::Icon => Self::Key,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Key => Self::Icon,
            Self::Label => Self::Key,
            Self::Icon => Self::Label,
        }
    }
}

/// State of the open amenity form
#[derive(Debug, Clone, PartialEq)]
pub struct AmenityFormState {
    pub mode: FormMode,
    pub key: String,
    pub label: String,
    pub icon: String,
    pub focused: FormField,
}

impl AmenityFormState {
    pub fn new(mode: FormMode, input: AmenityInput) -> Self {
        Self {
            mode,
            key: input.key,
            label: input.label,
            icon: input.icon.unwrap_or_default(),
            focused: FormField::default(),
        }
    }

    /// Mutable access to the focused field's value
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Key => &mut self.key,
            FormField::Label => &mut self.label,
            FormField::Icon => &mut self.icon,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Key => &self.key,
            FormField::Label => &self.label,
            FormField::Icon => &self.icon,
        }
    }

    /// Request payload; a blank icon is omitted
    pub fn to_input(&self) -> AmenityInput {
        let icon = self.icon.trim();
        AmenityInput {
            key: self.key.trim().to_string(),
            label: self.label.trim().to_string(),
            icon: (!icon.is_empty()).then(|| icon.to_string()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New amenity",
            FormMode::Edit { .. } => "Edit amenity",
        }
    }
}
