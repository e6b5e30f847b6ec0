mod field_list;
mod footer_bar;
mod header_bar;
mod input;

pub use field_list::{FieldList, FieldRow};
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{FALLBACK_DATE_FORMAT, HeaderBar, HeaderBarStyle, date_text, format_date};
pub use input::{TextInput, TextInputView};
