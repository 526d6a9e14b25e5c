//! Authors screen

use crate::{
    error::AppResult,
    form::{FieldKind, FieldSpec, Form, FormMode},
    models::{Author, AuthorPayload},
    table::{format_timestamp, or_placeholder},
};

use super::{Labels, Resource};

pub struct Authors;

impl Resource for Authors {
    type Record = Author;
    type Payload = AuthorPayload;

    const BASE_PATH: &'static str = "/api/authors";
    const LABELS: Labels = Labels {
        noun: "author",
        plural: "authors",
        create_title: "Create Author",
        update_title: "Update Author",
        created: "Author created successfully",
        delete_noun: "author",
    };
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "First Name",
        "Last Name",
        "Biography",
        "Created At",
        "Updated At",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("first_name", "First name", FieldKind::Text),
        FieldSpec::new("last_name", "Last name", FieldKind::Text),
        FieldSpec::new("biography", "Biography", FieldKind::OptionalText),
    ];

    fn id(record: &Author) -> i32 {
        record.id
    }

    fn cells(author: &Author) -> Vec<String> {
        vec![
            author.id.to_string(),
            author.first_name.clone(),
            author.last_name.clone(),
            or_placeholder(author.biography.as_deref()),
            format_timestamp(&author.created_at),
            format_timestamp(&author.updated_at),
        ]
    }

    fn payload(form: &Form, _mode: FormMode) -> AppResult<AuthorPayload> {
        Ok(AuthorPayload {
            first_name: form.text("first_name").to_string(),
            last_name: form.text("last_name").to_string(),
            biography: form.optional_text("biography"),
        })
    }

    fn fill(form: &mut Form, author: &Author) {
        form.write("first_name", author.first_name.as_str());
        form.write("last_name", author.last_name.as_str());
        form.write("biography", author.biography.clone().unwrap_or_default());
    }
}
