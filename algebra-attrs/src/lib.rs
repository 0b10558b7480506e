mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait of `algebra-error` for the given struct.
///
/// The report produced for the error is customized with the `error` attribute:
/// ```
/// use algebra_attrs::ErrorKind;
/// use algebra_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "missing exponent", labels = ["add an integer after this `^`"])]
/// pub struct MissingExponent;
///
/// let report = MissingExponent.build_report("input", &[0..1]);
/// # let _ = report;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, one per span the error points at.                   |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. For structs with named fields, the fields are destructured
/// before the expressions are evaluated, so they can be referred to by name. Tuple structs are
/// rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            #target
        }
    }.into()
}
