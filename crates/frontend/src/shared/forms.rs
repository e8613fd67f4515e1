use contracts::shared::validation::{message_for, FieldError};
use leptos::prelude::*;

/// Reactive validation message for one field of a form
pub fn field_error(errors: ReadSignal<Vec<FieldError>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|list| message_for(list, field).map(str::to_string)))
}
