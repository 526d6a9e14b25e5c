//! Form state and the binder that maps it to API payloads

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    resources::Resource,
};

/// Input widget behind a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that is sent as `null` when left empty
    OptionalText,
    Number,
    OptionalNumber,
    /// `YYYY-MM-DD`
    Date,
    /// Comma separated ids, e.g. `1, 2, 3`
    IdList,
    Checkbox,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Value restored on reset (`"true"`/`"false"` for checkboxes)
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            default: None,
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub spec: FieldSpec,
    pub value: FieldValue,
    pub disabled: bool,
}

impl Field {
    fn initial(spec: FieldSpec) -> Self {
        let value = match spec.kind {
            FieldKind::Checkbox => FieldValue::Checked(spec.default == Some("true")),
            _ => FieldValue::Text(spec.default.unwrap_or_default().to_string()),
        };
        Self {
            spec,
            value,
            disabled: false,
        }
    }
}

/// Toolkit-independent form: named fields in declaration order
#[derive(Debug, Clone)]
pub struct Form {
    fields: IndexMap<&'static str, Field>,
}

impl Form {
    pub fn new(specs: &[FieldSpec]) -> Self {
        Self {
            fields: specs.iter().map(|s| (s.name, Field::initial(*s))).collect(),
        }
    }

    /// Restore every field to its default value. Disabled flags are left alone.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.value = Field::initial(field.spec).value;
        }
    }

    /// Apply user input to a field.
    ///
    /// Disabled fields refuse input the same way a disabled control does.
    pub fn input(&mut self, name: &str, raw: &str) -> AppResult<()> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| AppError::Validation(format!("unknown field '{}'", name)))?;

        if field.disabled {
            return Err(AppError::Validation(format!("field '{}' is read-only", name)));
        }

        field.value = match field.spec.kind {
            FieldKind::Checkbox => FieldValue::Checked(parse_flag(raw).ok_or_else(|| {
                AppError::Validation(format!("field '{}' expects yes or no", name))
            })?),
            _ => FieldValue::Text(raw.to_string()),
        };
        Ok(())
    }

    /// Empty the field (unchecks checkboxes)
    pub fn clear(&mut self, name: &str) -> AppResult<()> {
        let kind = self
            .fields
            .get(name)
            .map(|f| f.spec.kind)
            .ok_or_else(|| AppError::Validation(format!("unknown field '{}'", name)))?;
        match kind {
            FieldKind::Checkbox => self.input(name, "no"),
            _ => self.input(name, ""),
        }
    }

    /// Write a value programmatically, regardless of the disabled flag.
    pub fn write(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(name) {
            field.value = FieldValue::Text(value.into());
        }
    }

    pub fn write_checked(&mut self, name: &str, checked: bool) {
        if let Some(field) = self.fields.get_mut(name) {
            field.value = FieldValue::Checked(checked);
        }
    }

    pub fn set_disabled(&mut self, name: &str, disabled: bool) {
        if let Some(field) = self.fields.get_mut(name) {
            field.disabled = disabled;
        }
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.fields.get(name).map(|f| f.disabled).unwrap_or(false)
    }

    /// Raw text of a field; empty for checkboxes and unknown names
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name).map(|f| &f.value) {
            Some(FieldValue::Text(text)) => text.as_str(),
            _ => "",
        }
    }

    pub fn checked(&self, name: &str) -> bool {
        matches!(
            self.fields.get(name).map(|f| &f.value),
            Some(FieldValue::Checked(true))
        )
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        blank_to_none(self.text(name))
    }

    pub fn int(&self, name: &str) -> AppResult<i32> {
        self.optional_int(name)?
            .ok_or_else(|| AppError::Validation(format!("{} is required", self.label(name))))
    }

    pub fn optional_int(&self, name: &str) -> AppResult<Option<i32>> {
        let raw = self.text(name).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<i32>().map(Some).map_err(|_| {
            AppError::Validation(format!("{} must be a whole number", self.label(name)))
        })
    }

    pub fn id_list(&self, name: &str) -> Vec<i32> {
        parse_id_list(self.text(name))
    }

    /// Date input as UTC midnight, `None` when empty
    pub fn date(&self, name: &str) -> AppResult<Option<DateTime<Utc>>> {
        let raw = self.text(name).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()))
            .map_err(|_| {
                AppError::Validation(format!("{} must be a date (YYYY-MM-DD)", self.label(name)))
            })
    }

    fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.fields.get(name).map(|f| f.spec.label).unwrap_or(name)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields.values() {
            let value = match &field.value {
                FieldValue::Text(text) => text.clone(),
                FieldValue::Checked(true) => "[x]".to_string(),
                FieldValue::Checked(false) => "[ ]".to_string(),
            };
            write!(f, "  {:<20} {:<16} {}", field.spec.label, field.spec.name, value)?;
            if field.disabled {
                write!(f, " (read-only)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse `"1, 2, abc, 3"` into `[1, 2, 3]`.
///
/// Each token contributes its leading integer (`"2abc"` is 2, `"1.5"` is 1);
/// tokens without one are dropped.
pub fn parse_id_list(raw: &str) -> Vec<i32> {
    raw.split(',').filter_map(leading_int).collect()
}

fn leading_int(token: &str) -> Option<i32> {
    let token = token.trim();
    let (sign, rest) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    format!("{}{}", sign, &rest[..end]).parse().ok()
}

/// Inverse of [`parse_id_list`]
pub fn join_ids(ids: impl IntoIterator<Item = i32>) -> String {
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn blank_to_none(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "on" | "1" | "x" => Some(true),
        "n" | "no" | "false" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// Binds a [`Form`] to one resource's payload and record shapes
pub struct FormBinder<R: Resource> {
    form: Form,
    mode: FormMode,
    title: &'static str,
    cancel_visible: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> FormBinder<R> {
    pub fn new() -> Self {
        let mut binder = Self {
            form: Form::new(R::FIELDS),
            mode: FormMode::Create,
            title: R::LABELS.create_title,
            cancel_visible: false,
            _resource: PhantomData,
        };
        binder.set_mode(FormMode::Create);
        binder
    }

    /// Read the current field values into a request payload
    pub fn to_payload(&self) -> AppResult<R::Payload> {
        R::payload(&self.form, self.mode)
    }

    /// Populate the fields from a fetched record
    pub fn from_record(&mut self, record: &R::Record) {
        R::fill(&mut self.form, record);
    }

    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
        self.title = match mode {
            FormMode::Create => R::LABELS.create_title,
            FormMode::Update => R::LABELS.update_title,
        };
        self.cancel_visible = mode == FormMode::Update;
        for name in R::IMMUTABLE_ON_EDIT {
            self.form.set_disabled(name, mode == FormMode::Update);
        }
    }

    /// Clear all fields, restore defaults and go back to create mode
    pub fn reset(&mut self) {
        self.form.reset();
        self.set_mode(FormMode::Create);
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn cancel_visible(&self) -> bool {
        self.cancel_visible
    }
}

impl<R: Resource> Default for FormBinder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> fmt::Display for FormBinder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(f, "{}", self.form)?;
        if self.cancel_visible {
            writeln!(f, "  (type 'cancel' to discard changes)")?;
        }
        Ok(())
    }
}
