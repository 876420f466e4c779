//! Derive macros for the `quickjson` codec.
//!
//! `#[derive(JsonDecode, JsonEncode)]` generates one `Decodable`/`Encodable`
//! impl per struct, built out of `RecordDecoder`/`RecordEncoder` field
//! registrations — the same building blocks a hand-written impl would use.
//! Field attributes:
//!
//! - `#[json(rename = "...")]` — use a different JSON key than the field
//!   name.
//! - `#[json(skip)]` — exclude this field; it keeps its `Default` value on
//!   decode and is omitted on encode.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr};

struct FieldPlan {
    ident: Ident,
    json_name: String,
    skip: bool,
}

fn collect_fields(input: &DeriveInput) -> Vec<FieldPlan> {
    let Data::Struct(data) = &input.data else {
        panic!("JsonDecode/JsonEncode can only be derived for structs");
    };
    let Fields::Named(fields) = &data.fields else {
        panic!("JsonDecode/JsonEncode requires named struct fields");
    };

    fields
        .named
        .iter()
        .map(|field| {
            let ident = field.ident.clone().expect("named field has no identifier");
            let mut json_name = ident.to_string();
            let mut skip = false;

            for attr in &field.attrs {
                if !attr.path().is_ident("json") {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        let value = meta.value()?;
                        let lit: LitStr = value.parse()?;
                        json_name = lit.value();
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("unrecognized #[json(...)] attribute"))
                    }
                })
                .expect("malformed #[json(...)] attribute");
            }

            FieldPlan { ident, json_name, skip }
        })
        .collect()
}

/// `#[derive(JsonDecode)]`: builds a `Decodable` impl over a `RecordDecoder`.
#[proc_macro_derive(JsonDecode, attributes(json))]
pub fn derive_json_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_name_str = name.to_string();

    let field_registrations = collect_fields(&input)
        .into_iter()
        .filter(|f| !f.skip)
        .map(|f| {
            let ident = f.ident;
            let json_name = f.json_name;
            quote! {
                .field(::quickjson::decode::FieldDecoder {
                    name: #json_name,
                    decode: ::std::boxed::Box::new(|dest: &mut Self, tokens: &mut ::quickjson::tokenizer::Tokenizer<'_>| {
                        let mut child = ::quickjson::Decodable::build_decoder();
                        child.decode(&mut dest.#ident, tokens)
                    }),
                })
            }
        });

    let expanded = quote! {
        impl #impl_generics ::quickjson::Decodable for #name #ty_generics #where_clause {
            fn build_decoder() -> ::quickjson::decode::Decoder<Self> {
                ::quickjson::decode::RecordDecoder::new(#type_name_str)
                    #(#field_registrations)*
                    .build()
            }
        }
    };

    TokenStream::from(expanded)
}

/// `#[derive(JsonEncode)]`: builds an `Encodable` impl over a
/// `RecordEncoder`. Fields are emitted in declaration order.
#[proc_macro_derive(JsonEncode, attributes(json))]
pub fn derive_json_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_registrations = collect_fields(&input)
        .into_iter()
        .filter(|f| !f.skip)
        .map(|f| {
            let ident = f.ident;
            let json_name = f.json_name;
            quote! {
                .field(::quickjson::encode::FieldEncoder {
                    name: #json_name,
                    encode: ::std::boxed::Box::new(|src: &Self, tiler: &mut ::quickjson::tiler::Tiler| {
                        let mut child = ::quickjson::Encodable::build_encoder();
                        child.encode(&src.#ident, tiler)
                    }),
                })
            }
        });

    let expanded = quote! {
        impl #impl_generics ::quickjson::Encodable for #name #ty_generics #where_clause {
            fn build_encoder() -> ::quickjson::encode::Encoder<Self> {
                ::quickjson::encode::RecordEncoder::new()
                    #(#field_registrations)*
                    .build()
            }
        }
    };

    TokenStream::from(expanded)
}
