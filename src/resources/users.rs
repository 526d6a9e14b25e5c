//! Users (library members) screen

use crate::{
    error::AppResult,
    form::{FieldKind, FieldSpec, Form, FormMode},
    models::{User, UserPayload},
    table::{format_timestamp, timestamp_or_placeholder, yes_no},
};

use super::{Labels, Resource};

pub struct Users;

impl Resource for Users {
    type Record = User;
    type Payload = UserPayload;

    const BASE_PATH: &'static str = "/api/users";
    const LABELS: Labels = Labels {
        noun: "user",
        plural: "users",
        create_title: "Create User",
        update_title: "Update User",
        created: "User created successfully",
        delete_noun: "user",
    };
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "First Name",
        "Last Name",
        "Email",
        "Active",
        "Registered",
        "Updated At",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("first_name", "First name", FieldKind::Text),
        FieldSpec::new("last_name", "Last name", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Text),
        FieldSpec::new("is_active", "Active", FieldKind::Checkbox).with_default("true"),
    ];

    fn id(record: &User) -> i32 {
        record.id
    }

    fn cells(user: &User) -> Vec<String> {
        vec![
            user.id.to_string(),
            user.first_name.clone(),
            user.last_name.clone(),
            user.email.clone(),
            yes_no(user.is_active),
            format_timestamp(&user.registration_date),
            timestamp_or_placeholder(user.updated_at.as_ref()),
        ]
    }

    fn payload(form: &Form, _mode: FormMode) -> AppResult<UserPayload> {
        Ok(UserPayload {
            first_name: form.text("first_name").to_string(),
            last_name: form.text("last_name").to_string(),
            email: form.text("email").to_string(),
            is_active: form.checked("is_active"),
        })
    }

    fn fill(form: &mut Form, user: &User) {
        form.write("first_name", user.first_name.as_str());
        form.write("last_name", user.last_name.as_str());
        form.write("email", user.email.as_str());
        form.write_checked("is_active", user.is_active);
    }
}
