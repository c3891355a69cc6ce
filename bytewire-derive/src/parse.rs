//! Parsing utilities for the message derive.

use syn::{
    Attribute, Data, DeriveInput, Error, Fields, Generics, Ident, Index, LitStr, Member, Path,
    Result, Type, parse_quote,
};

/// Parsed message definition.
#[derive(Debug)]
pub struct MessageDefinition {
    /// Name of the message struct.
    pub name: Ident,
    /// Generics of the message struct.
    pub generics: Generics,
    /// Fields in declaration order.
    pub fields: Vec<FieldDefinition>,
    /// Path of the runtime crate.
    pub krate: Path,
}

/// A single message field.
#[derive(Debug)]
pub struct FieldDefinition {
    /// Field name or tuple index.
    pub member: Member,
    /// Field type.
    pub ty: Type,
}

impl MessageDefinition {
    /// Parses a derive input into a message definition.
    pub fn parse(input: DeriveInput) -> Result<Self> {
        let krate = parse_crate_path(&input.attrs)?;

        let fields = match input.data {
            Data::Struct(data) => parse_fields(data.fields)?,
            Data::Enum(data) => {
                return Err(Error::new_spanned(
                    data.enum_token,
                    "WireMessage can only be derived for structs",
                ));
            }
            Data::Union(data) => {
                return Err(Error::new_spanned(
                    data.union_token,
                    "WireMessage can only be derived for structs",
                ));
            }
        };

        Ok(Self {
            name: input.ident,
            generics: input.generics,
            fields,
            krate,
        })
    }
}

fn parse_fields(fields: Fields) -> Result<Vec<FieldDefinition>> {
    fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            if let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("wire")) {
                return Err(Error::new_spanned(
                    attr,
                    "wire attributes are only supported on the struct",
                ));
            }

            let member = match field.ident {
                Some(ident) => Member::Named(ident),
                None => Member::Unnamed(Index::from(index)),
            };
            Ok(FieldDefinition {
                member,
                ty: field.ty,
            })
        })
        .collect()
}

/// Reads `#[wire(crate = "...")]`, defaulting to `::bytewire`.
fn parse_crate_path(attrs: &[Attribute]) -> Result<Path> {
    let mut krate = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("wire")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                krate = Some(lit.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported wire attribute"))
            }
        })?;
    }

    Ok(krate.unwrap_or_else(|| parse_quote!(::bytewire)))
}
