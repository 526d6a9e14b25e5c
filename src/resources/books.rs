//! Books screen

use crate::{
    error::AppResult,
    form::{join_ids, FieldKind, FieldSpec, Form, FormMode},
    models::{Book, BookPayload},
    table::{or_placeholder, summary, timestamp_or_placeholder},
};

use super::{Labels, Resource};

pub struct Books;

impl Resource for Books {
    type Record = Book;
    type Payload = BookPayload;

    const BASE_PATH: &'static str = "/api/books";
    const LABELS: Labels = Labels {
        noun: "book",
        plural: "books",
        create_title: "Create Book",
        update_title: "Update Book",
        created: "Book created successfully",
        delete_noun: "book",
    };
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Title",
        "Year",
        "ISBN",
        "Quantity",
        "Authors",
        "Categories",
        "Created At",
        "Updated At",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("publication_year", "Publication year", FieldKind::OptionalNumber),
        FieldSpec::new("isbn", "ISBN", FieldKind::Text),
        FieldSpec::new("quantity", "Quantity", FieldKind::Number).with_default("1"),
        FieldSpec::new("author_ids", "Author IDs", FieldKind::IdList),
        FieldSpec::new("category_ids", "Category IDs", FieldKind::IdList),
    ];

    fn id(record: &Book) -> i32 {
        record.id
    }

    fn cells(book: &Book) -> Vec<String> {
        vec![
            book.id.to_string(),
            or_placeholder(book.title.as_deref()),
            or_placeholder(book.publication_year),
            or_placeholder(book.isbn.as_deref()),
            or_placeholder(book.quantity),
            summary(&book.authors, |a| a.full_name(), "No authors"),
            summary(&book.categories, |c| c.name.clone(), "No categories"),
            timestamp_or_placeholder(book.created_at.as_ref()),
            timestamp_or_placeholder(book.updated_at.as_ref()),
        ]
    }

    fn payload(form: &Form, _mode: FormMode) -> AppResult<BookPayload> {
        Ok(BookPayload {
            title: form.text("title").to_string(),
            publication_year: form.optional_int("publication_year")?,
            isbn: form.text("isbn").to_string(),
            quantity: form.int("quantity")?,
            author_ids: form.id_list("author_ids"),
            category_ids: form.id_list("category_ids"),
        })
    }

    fn fill(form: &mut Form, book: &Book) {
        form.write("title", book.title.clone().unwrap_or_default());
        form.write(
            "publication_year",
            book.publication_year.map(|y| y.to_string()).unwrap_or_default(),
        );
        form.write("isbn", book.isbn.clone().unwrap_or_default());
        form.write(
            "quantity",
            book.quantity.map(|q| q.to_string()).unwrap_or_default(),
        );
        form.write("author_ids", join_ids(book.authors.iter().map(|a| a.id)));
        form.write("category_ids", join_ids(book.categories.iter().map(|c| c.id)));
    }
}
