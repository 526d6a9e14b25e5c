//! Borrowed books screen
//!
//! A borrow is created for a book and a user; after that only the return
//! date can change.

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    form::{FieldKind, FieldSpec, Form, FormMode},
    models::{BorrowPayload, BorrowedBook, CreateBorrow, UpdateBorrow},
    table::format_timestamp,
};

use super::{Labels, Resource};

pub struct BorrowedBooks;

impl Resource for BorrowedBooks {
    type Record = BorrowedBook;
    type Payload = BorrowPayload;

    const BASE_PATH: &'static str = "/api/borrowed-books";
    const LABELS: Labels = Labels {
        noun: "borrowed book",
        plural: "borrowed books",
        create_title: "Borrow a Book",
        update_title: "Update Borrow",
        created: "Book borrowed successfully",
        delete_noun: "borrowed book record",
    };
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Book ID",
        "User ID",
        "Borrowed",
        "Due",
        "Returned",
        "Created At",
        "Updated At",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("book_id", "Book ID", FieldKind::Number),
        FieldSpec::new("user_id", "User ID", FieldKind::Number),
        FieldSpec::new("return_date", "Return date", FieldKind::Date),
    ];
    const IMMUTABLE_ON_EDIT: &'static [&'static str] = &["book_id", "user_id"];

    fn id(record: &BorrowedBook) -> i32 {
        record.id
    }

    fn cells(borrow: &BorrowedBook) -> Vec<String> {
        vec![
            borrow.id.to_string(),
            borrow.book_id.to_string(),
            borrow.user_id.to_string(),
            format_timestamp(&borrow.borrow_date),
            format_timestamp(&borrow.due_date),
            borrow
                .return_date
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| "Not Returned".to_string()),
            format_timestamp(&borrow.created_at),
            format_timestamp(&borrow.updated_at),
        ]
    }

    fn payload(form: &Form, mode: FormMode) -> AppResult<BorrowPayload> {
        let return_date = form.date("return_date")?;
        Ok(match mode {
            FormMode::Create => BorrowPayload::Create(CreateBorrow {
                book_id: form.int("book_id")?,
                user_id: form.int("user_id")?,
                return_date,
            }),
            FormMode::Update => BorrowPayload::Update(UpdateBorrow { return_date }),
        })
    }

    fn fill(form: &mut Form, borrow: &BorrowedBook) {
        form.write("book_id", borrow.book_id.to_string());
        form.write("user_id", borrow.user_id.to_string());
        form.write(
            "return_date",
            borrow.return_date.as_ref().map(date_part).unwrap_or_default(),
        );
    }
}

fn date_part(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormBinder;
    use chrono::TimeZone;
    use serde_json::json;

    fn borrow(return_date: Option<DateTime<Utc>>) -> BorrowedBook {
        let at = Utc.with_ymd_and_hms(2024, 4, 17, 8, 0, 0).unwrap();
        BorrowedBook {
            id: 5,
            book_id: 1,
            user_id: 8,
            borrow_date: at,
            due_date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            return_date,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_create_payload() {
        let mut binder = FormBinder::<BorrowedBooks>::new();
        binder.form_mut().input("book_id", "1").unwrap();
        binder.form_mut().input("user_id", "8").unwrap();

        let json = serde_json::to_value(binder.to_payload().unwrap()).unwrap();
        assert_eq!(json, json!({"book_id": 1, "user_id": 8, "return_date": null}));
    }

    #[test]
    fn test_update_mode_locks_book_and_user() {
        let mut binder = FormBinder::<BorrowedBooks>::new();
        binder.from_record(&borrow(None));
        binder.set_mode(FormMode::Update);

        assert!(binder.form().is_disabled("book_id"));
        assert!(binder.form().is_disabled("user_id"));
        assert!(!binder.form().is_disabled("return_date"));
        assert!(binder.form_mut().input("book_id", "2").is_err());
        assert_eq!(binder.title(), "Update Borrow");

        binder.form_mut().input("return_date", "2024-05-01").unwrap();
        let json = serde_json::to_value(binder.to_payload().unwrap()).unwrap();
        assert_eq!(json, json!({"return_date": "2024-05-01T00:00:00.000Z"}));

        binder.reset();
        assert!(!binder.form().is_disabled("book_id"));
        assert_eq!(binder.title(), "Borrow a Book");
    }

    #[test]
    fn test_return_date_round_trip() {
        let record = borrow(Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()));
        let mut binder = FormBinder::<BorrowedBooks>::new();
        binder.from_record(&record);
        binder.set_mode(FormMode::Update);

        assert_eq!(binder.form().text("return_date"), "2024-05-01");
        assert_eq!(
            binder.to_payload().unwrap(),
            BorrowPayload::Update(UpdateBorrow::from(&record))
        );
    }

    #[test]
    fn test_not_returned_placeholder() {
        assert_eq!(BorrowedBooks::cells(&borrow(None))[5], "Not Returned");
    }
}
