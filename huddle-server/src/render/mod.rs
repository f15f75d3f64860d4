//! Server-rendered HTML
//!
//! Every page is a pure function of the records passed in; handlers fetch
//! fresh data right before rendering. Templates are `maud` markup, so every
//! interpolated value is escaped.

mod edit;
mod index;

pub use edit::{post_edit_form, user_edit_form};
pub use index::index_page;

use maud::{html, Markup};

use crate::models::FieldErrors;

/// Short error message with a link back to the listing.
pub fn error_fragment(message: &str) -> Markup {
    html! {
        p { "Error: " (message) }
        a href="/" { "Back" }
    }
}

/// Page listing every failing field, used when post creation fails.
pub fn validation_page(errors: &FieldErrors) -> Markup {
    html! {
        div {
            h1 { "Validation Error" }
            ul {
                @for message in errors.messages() {
                    li { (message) }
                }
            }
            a href="/" { "Go Back" }
        }
    }
}
