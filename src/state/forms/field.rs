//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Hidden boolean input, submitted as "true"/"false"
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single named input: wire name, display label and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut field = Self::text(name, label);
        field.set_text(value);
        field
    }

    /// Create a new flag field, initially unset
    pub fn flag(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: FieldValue::Flag(false),
        }
    }

    /// Get the text value (returns empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// True when the text is empty after trimming whitespace and BOMs
    pub fn is_blank(&self) -> bool {
        self.as_text()
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Flip a flag field and return the new state. Text fields are left alone.
    pub fn toggle(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Flag(b) => {
                *b = !*b;
                *b
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Flag(_) => {
                // Flags change only through toggle
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Flag(_) => {
                // Flags have no characters to remove
            }
        }
    }

    /// The value as submitted on the wire
    pub fn wire_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "true".to_string(),
            FieldValue::Flag(false) => "false".to_string(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
        }
    }
}
