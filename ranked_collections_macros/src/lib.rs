use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Fields, Generics, Type,
};

/// A struct field marked with `#[rank]`.
struct RankField {
    name: Ident,
    ty: Type,
}

/// Parsed input of `#[derive(Ranked)]`.
struct RankedStruct {
    name: Ident,
    generics: Generics,
    fields: Vec<RankField>,
}

impl TryFrom<DeriveInput> for RankedStruct {
    type Error = syn::Error;

    fn try_from(input: DeriveInput) -> syn::Result<Self> {
        let data = match input.data {
            Data::Struct(data) => data,
            Data::Enum(e) => {
                return Err(syn::Error::new(
                    e.enum_token.span,
                    "Ranked can only be derived for structs",
                ))
            }
            Data::Union(u) => {
                return Err(syn::Error::new(
                    u.union_token.span,
                    "Ranked can only be derived for structs",
                ))
            }
        };

        let named = match data.fields {
            Fields::Named(named) => named,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "Ranked requires a struct with named fields",
                ))
            }
        };

        let fields: Vec<RankField> = named
            .named
            .into_iter()
            .filter(|f| f.attrs.iter().any(|a| a.path().is_ident("rank")))
            .filter_map(|f| {
                Some(RankField {
                    name: f.ident?,
                    ty: f.ty,
                })
            })
            .collect();

        if fields.is_empty() {
            return Err(syn::Error::new(
                input.ident.span(),
                "Ranked needs at least one field marked with #[rank]",
            ));
        }

        Ok(Self {
            name: input.ident,
            generics: input.generics,
            fields,
        })
    }
}

impl RankedStruct {
    fn generate(&self) -> TokenStream {
        let name = &self.name;

        let mut generics = self.generics.clone();
        {
            let where_clause = generics.make_where_clause();
            for field in &self.fields {
                let ty = &field.ty;
                where_clause.predicates.push(parse_quote! {
                    #ty: ::core::cmp::Ord + ::core::hash::Hash + ::core::clone::Clone
                });
            }
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let names: Vec<&Ident> = self.fields.iter().map(|f| &f.name).collect();
        let types: Vec<&Type> = self.fields.iter().map(|f| &f.ty).collect();

        // A single rank field is its own key; several are keyed as a tuple.
        let (key_ty, key_expr) = if self.fields.len() == 1 {
            let ty = types[0];
            let field = names[0];
            (
                quote! { #ty },
                quote! { ::core::clone::Clone::clone(&self.#field) },
            )
        } else {
            (
                quote! { ( #( #types, )* ) },
                quote! { ( #( ::core::clone::Clone::clone(&self.#names), )* ) },
            )
        };

        quote! {
            impl #impl_generics ::ranked_collections::Ranked for #name #ty_generics #where_clause {
                type Key = #key_ty;

                fn key(&self) -> Self::Key {
                    #key_expr
                }

                fn compare(&self, other: &Self) -> ::core::cmp::Ordering {
                    ::core::cmp::Ordering::Equal
                        #( .then_with(|| ::core::cmp::Ord::cmp(&self.#names, &other.#names)) )*
                }
            }
        }
    }
}

/// Derive the `Ranked` comparator contract from one or more `#[rank]` fields.
///
/// Fields are compared lexicographically in declaration order; with several rank fields the key
/// is the tuple of their values.
///
/// Example:
///
/// ```ignore
/// #[derive(Ranked)]
/// struct Job {
///     #[rank]
///     priority: u32,
///     #[rank]
///     name: &'static str,
///     payload: Vec<u8>,
/// }
/// ```
///
#[proc_macro_derive(Ranked, attributes(rank))]
pub fn derive_ranked(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    RankedStruct::try_from(input)
        .map(|s| s.generate())
        .unwrap_or_else(|e| e.into_compile_error())
        .into()
}
