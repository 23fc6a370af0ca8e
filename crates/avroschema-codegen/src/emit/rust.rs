//! Rust source emission.

use super::{GeneratedFile, SchemaEmitter};
use crate::naming::to_snake_case;
use crate::walker::FileSchemas;
use avroschema_core::{SchemaError, SchemaResult};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::path::PathBuf;

/// Emits `<file_stem>_avro.rs` with one accessor per message
///
/// ```text
/// pub fn avro_schema_for_order() -> &'static str { "{\"name\": \"Order\", ...}" }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RustSourceEmitter {
    header: Option<String>,
}

impl RustSourceEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the generated module doc comment
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Name of the accessor generated for `message`
    pub fn accessor_name(message: &str) -> String {
        format!("avro_schema_for_{}", to_snake_case(message))
    }

    fn render(&self, unit: &FileSchemas) -> SchemaResult<String> {
        let header = self.header.clone().unwrap_or_else(|| {
            format!(" Avro schemas generated from `{}`. Do not edit.", unit.file)
        });

        let accessors = unit
            .schemas
            .iter()
            .map(|s| {
                let name = Self::accessor_name(&s.message);
                syn::parse_str::<syn::Ident>(&name).map_err(|e| {
                    SchemaError::Emit(format!("{name} is not a valid identifier: {e}"))
                })?;
                let ident = format_ident!("{}", name);
                let doc = format!(" Avro schema for `{}`.", s.full_name);
                let schema = s.schema.as_str();
                Ok(quote! {
                    #[doc = #doc]
                    pub fn #ident() -> &'static str {
                        #schema
                    }
                })
            })
            .collect::<SchemaResult<Vec<TokenStream>>>()?;

        let tokens = quote! {
            #![doc = #header]

            #(#accessors)*
        };
        let file = syn::parse2::<syn::File>(tokens)
            .map_err(|e| SchemaError::Emit(format!("generated module does not parse: {e}")))?;
        Ok(prettyplease::unparse(&file))
    }
}

impl SchemaEmitter for RustSourceEmitter {
    fn emit(&self, unit: &FileSchemas) -> SchemaResult<Vec<GeneratedFile>> {
        let path = PathBuf::from(format!("{}_avro.rs", to_snake_case(unit.file_stem())));
        Ok(vec![GeneratedFile {
            path,
            content: self.render(unit)?,
        }])
    }
}
