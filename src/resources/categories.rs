//! Categories screen

use crate::{
    error::AppResult,
    form::{FieldKind, FieldSpec, Form, FormMode},
    models::{Category, CategoryPayload},
    table::{format_timestamp, or_placeholder},
};

use super::{Labels, Resource};

pub struct Categories;

impl Resource for Categories {
    type Record = Category;
    type Payload = CategoryPayload;

    const BASE_PATH: &'static str = "/api/categories";
    const LABELS: Labels = Labels {
        noun: "category",
        plural: "categories",
        create_title: "Create Category",
        update_title: "Update Category",
        created: "Category created successfully",
        delete_noun: "category",
    };
    const COLUMNS: &'static [&'static str] =
        &["ID", "Name", "Description", "Created At", "Updated At"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text),
        FieldSpec::new("description", "Description", FieldKind::OptionalText),
    ];

    fn id(record: &Category) -> i32 {
        record.id
    }

    fn cells(category: &Category) -> Vec<String> {
        vec![
            category.id.to_string(),
            category.name.clone(),
            or_placeholder(category.description.as_deref()),
            format_timestamp(&category.created_at),
            format_timestamp(&category.updated_at),
        ]
    }

    fn payload(form: &Form, _mode: FormMode) -> AppResult<CategoryPayload> {
        Ok(CategoryPayload {
            name: form.text("name").to_string(),
            description: form.optional_text("description"),
        })
    }

    fn fill(form: &mut Form, category: &Category) {
        form.write("name", category.name.as_str());
        form.write("description", category.description.clone().unwrap_or_default());
    }
}
