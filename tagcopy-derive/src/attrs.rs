use syn::{Attribute, LitStr};

/// Name of the field attribute carrying a capability declaration.
pub const TAG_KEY: &str = "tagcopy";

/// Read the declaration from a field's `#[tagcopy("...")]`.
///
/// A field without the attribute declares `""`.
pub fn field_declaration(attrs: &[Attribute]) -> syn::Result<String> {
    let mut found: Option<LitStr> = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(TAG_KEY)) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                format!("duplicate #[{TAG_KEY}] attribute; list every label in one string"),
            ));
        }
        let lit = attr.parse_args::<LitStr>().map_err(|err| {
            syn::Error::new(
                err.span(),
                format!("expected #[{TAG_KEY}(\"label,label\")]"),
            )
        })?;
        found = Some(lit);
    }
    Ok(found.map(|lit| lit.value()).unwrap_or_default())
}

/// Reject `#[tagcopy]` on the type itself.
pub fn reject_container_attr(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident(TAG_KEY)) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            format!("#[{TAG_KEY}] goes on fields, not on the type"),
        )),
        None => Ok(()),
    }
}
