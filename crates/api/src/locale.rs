// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-facing texts of the booking form.
//!
//! The form speaks one fixed language (Russian). Only the UI layer uses these
//! strings; the core reports errors as field flags.

use room_booking_domain::FormField;
use time::{Month, PrimitiveDateTime};

/// Form heading.
pub const FORM_TITLE: &str = "Бронирование переговорной";
/// Comment field label.
pub const COMMENT_LABEL: &str = "Комментарий:";
/// Submit button caption.
pub const SUBMIT_CAPTION: &str = "Отправить";
/// Reset button caption.
pub const RESET_CAPTION: &str = "Очистить";
/// Caption of the time column in the date picker.
pub const TIME_CAPTION: &str = "Время";

/// Texts attached to one required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldText {
    /// Label shown above the control; required fields carry an asterisk.
    pub label: &'static str,
    /// Placeholder shown in an empty dropdown.
    pub placeholder: Option<&'static str>,
    /// Inline error shown below an invalid field.
    pub error: &'static str,
}

/// Returns the texts for a required field.
#[must_use]
pub const fn field_text(field: FormField) -> FieldText {
    match field {
        FormField::Tower => FieldText {
            label: "Башня* :",
            placeholder: Some("Выберите башню"),
            error: "Выберите башню",
        },
        FormField::Floor => FieldText {
            label: "Этаж* :",
            placeholder: Some("Выберите этаж"),
            error: "Выберите этаж",
        },
        FormField::Room => FieldText {
            label: "Переговорка* :",
            placeholder: Some("Выберите комнату"),
            error: "Выберите комнату",
        },
        FormField::StartTime => FieldText {
            label: "Начало* :",
            placeholder: None,
            error: "Выберите дату старта",
        },
        FormField::EndTime => FieldText {
            label: "Окончание* :",
            placeholder: None,
            error: "Выберите дату окончания",
        },
    }
}

/// Month names in the genitive case, as used after a day number.
const fn month_genitive(month: Month) -> &'static str {
    match month {
        Month::January => "января",
        Month::February => "февраля",
        Month::March => "марта",
        Month::April => "апреля",
        Month::May => "мая",
        Month::June => "июня",
        Month::July => "июля",
        Month::August => "августа",
        Month::September => "сентября",
        Month::October => "октября",
        Month::November => "ноября",
        Month::December => "декабря",
    }
}

/// Formats a wall-clock value the way the date picker displays it
/// (`d MMMM yyyy HH:mm`), e.g. `1 января 2024 09:00`.
#[must_use]
pub fn format_picker_value(wall_clock: PrimitiveDateTime) -> String {
    format!(
        "{} {} {} {:02}:{:02}",
        wall_clock.day(),
        month_genitive(wall_clock.month()),
        wall_clock.year(),
        wall_clock.hour(),
        wall_clock.minute()
    )
}
