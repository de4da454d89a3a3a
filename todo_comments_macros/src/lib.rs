mod record;

use proc_macro::TokenStream;

/// Derive macro for stored records.
///
/// Implements `todo_comments::Record` and, when the struct has an owner
/// field, `todo_comments::Owned`.
///
/// # Attributes
///
/// - `#[record(collection = "comments")]` on the struct: the collection name.
///   Defaults to the snake_case struct name plus `s`.
/// - `#[record(id)]` on a field: the identifier. Defaults to a field named `id`.
/// - `#[record(owner)]` on a field: the owning user's id. Defaults to a field
///   named `user_id`; without either, no `Owned` impl is generated.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "comments")]
/// pub struct Comment {
///     pub id: String,
///     #[record(owner)]
///     pub user_id: String,
///     pub message: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
