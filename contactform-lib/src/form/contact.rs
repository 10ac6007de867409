//! The college contact form.

use crate::field::{FieldKind, FieldSpec};

/// A selectable option: submitted value and display label.
pub type Choice = (&'static str, &'static str);

/// Options for the `interest` field.
pub const INTEREST_CHOICES: &[Choice] = &[
    ("", "Select a program"),
    ("computer-science", "Computer Science & Engineering"),
    ("business", "Business Administration"),
    ("mechanical", "Mechanical Engineering"),
    ("biotechnology", "Biotechnology"),
    ("digital-marketing", "Digital Marketing"),
    ("graphic-design", "Graphic Design"),
    ("data-science", "Data Science"),
    ("psychology", "Psychology"),
    ("other", "Other"),
];

/// Options for the `inquiry_type` field.
pub const INQUIRY_TYPE_CHOICES: &[Choice] = &[
    ("admission", "Admission Information"),
    ("program", "Program Details"),
    ("financial", "Financial Aid"),
    ("campus", "Campus Visit"),
    ("other", "Other"),
];

/// Name of the submit control.
pub const SUBMIT_FIELD: &str = "submit";

/// Fields of the contact form, in display order.
pub fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("first_name", FieldKind::Text)
            .required()
            .max_length(100),
        FieldSpec::new("last_name", FieldKind::Text)
            .required()
            .max_length(100),
        FieldSpec::new("email", FieldKind::Email).required(),
        FieldSpec::new("phone", FieldKind::Phone).max_length(20),
        FieldSpec::new("interest", FieldKind::Other).choices(values(INTEREST_CHOICES)),
        FieldSpec::new("inquiry_type", FieldKind::Other).choices(values(INQUIRY_TYPE_CHOICES)),
        FieldSpec::new("message", FieldKind::Other).required(),
        FieldSpec::submit(SUBMIT_FIELD),
    ]
}

/// Labelled choices of a field, if it has any.
pub fn choices_for(field: &str) -> Option<&'static [Choice]> {
    match field {
        "interest" => Some(INTEREST_CHOICES),
        "inquiry_type" => Some(INQUIRY_TYPE_CHOICES),
        _ => None,
    }
}

fn values(choices: &'static [Choice]) -> impl Iterator<Item = &'static str> {
    choices.iter().map(|(value, _)| *value)
}
