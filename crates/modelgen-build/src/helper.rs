use proc_macro2::TokenStream;
use quote::quote;

/// Render a line of text as a doc attribute.
pub fn doc(text: impl AsRef<str>) -> TokenStream {
    let text = format!(" {}", text.as_ref());

    quote!(#[doc = #text])
}

/// Render several lines as consecutive doc attributes.
pub fn doc_lines<I, S>(lines: I) -> TokenStream
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter().map(doc);

    quote!(#(#lines)*)
}
