//! Terminal tables for contacts and notes.
//!
//! Column widths are measured with unicode-width so Cyrillic names line up;
//! headers are bolded after padding so style codes never skew the math.

use bookz::records::Subrecord;
use bookz::store::address_book::AddressBook;
use bookz::store::notes_book::NotesBook;
use console::style;
use unicode_width::UnicodeWidthStr;

const EMPTY_CELL: &str = "-";

pub fn contacts_table(book: &AddressBook) -> String {
    let headers = [
        "Contact Name",
        "Phone Number",
        "Email",
        "Birthday",
        "Days to Birthday",
    ];

    let rows: Vec<Vec<String>> = book
        .records()
        .map(|record| {
            let phones = subrecord_column(record.phone_numbers(), |phone| phone.phone());
            let emails = subrecord_column(record.emails(), |email| email.email());

            let birthday = record
                .user()
                .birthday_date()
                .map(|date| date.format("%d-%m-%Y").to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string());

            let days = record
                .days_to_birthday(None)
                .map(|days| days.to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string());

            vec![
                record.user().name().to_string(),
                phones,
                emails,
                birthday,
                days,
            ]
        })
        .collect();

    render_table(&headers, &rows)
}

pub fn notes_table(book: &NotesBook) -> String {
    let headers = ["#", "Title", "Note", "Created"];

    let rows: Vec<Vec<String>> = book
        .iter()
        .map(|(number, record)| {
            vec![
                number.to_string(),
                record
                    .note()
                    .name_note()
                    .unwrap_or(EMPTY_CELL)
                    .to_string(),
                record.note().note().to_string(),
                record.date_of_creation().to_string(),
            ]
        })
        .collect();

    render_table(&headers, &rows)
}

/// One column cell listing every subrecord value, with its assignment label
/// as `value(label)`, one per line. `-` when the list is empty.
fn subrecord_column<T>(subrecords: &[Subrecord<T>], value: impl Fn(&T) -> &str) -> String {
    if subrecords.is_empty() {
        return EMPTY_CELL.to_string();
    }
    subrecords
        .iter()
        .map(|sub| match &sub.assignment {
            Some(assignment) => format!("{}({})", value(&sub.value), assignment.label),
            None => value(&sub.value).to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|header| header.width()).collect();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            for line in cell.lines() {
                widths[column] = widths[column].max(line.width());
            }
        }
    }

    let separator: String = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');

    out.push('|');
    for (column, header) in headers.iter().enumerate() {
        let padding = widths[column] - header.width();
        out.push_str(&format!(
            " {}{} |",
            style(header).bold(),
            " ".repeat(padding)
        ));
    }
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for row in rows {
        // Cells may span several lines (one phone/email per line).
        let height = row
            .iter()
            .map(|cell| cell.lines().count().max(1))
            .max()
            .unwrap_or(1);

        for line_index in 0..height {
            out.push('|');
            for column in 0..columns {
                let line = row[column].lines().nth(line_index).unwrap_or("");
                let padding = widths[column] - line.width();
                out.push_str(&format!(" {}{} |", line, " ".repeat(padding)));
            }
            out.push('\n');
        }
        out.push_str(&separator);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookz::entities::{Email, Phone, User};
    use bookz::records::{Assignment, RecordContact};

    #[test]
    fn test_contacts_table_lists_subrecords_with_labels() {
        let mut record = RecordContact::new(User::new("sasha").unwrap());
        record.add_phone_number(
            Phone::new("+380951234567").unwrap(),
            Some(Assignment::new(0, "home")),
        );
        record.add_email(Email::new("test_sasha@gmail.com").unwrap(), None);

        let mut book = AddressBook::new();
        book.add_record(record);

        let table = contacts_table(&book);
        assert!(table.contains("sasha"));
        assert!(table.contains("+380951234567(home)"));
        assert!(table.contains("test_sasha@gmail.com"));
    }

    #[test]
    fn test_empty_columns_show_placeholder() {
        let mut book = AddressBook::new();
        book.add_record(RecordContact::new(User::new("petro").unwrap()));

        let table = contacts_table(&book);
        assert!(table.contains("| -"));
    }
}
