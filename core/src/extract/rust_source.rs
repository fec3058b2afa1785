#![deny(missing_docs)]

//! # Rust Source Extractor
//!
//! Reads a route declaration written as plain Rust structs:
//!
//! ```ignore
//! pub struct Schema {
//!     get: GetRoute,
//! }
//!
//! pub struct GetRoute {
//!     request: GetRequest,
//!     responses: GetResponses,
//! }
//!
//! pub struct GetResponses {
//!     #[serde(rename = "200")]
//!     ok: Ok200,
//! }
//! ```
//!
//! Declarations are resolved within the same file only. Fields that are not
//! `Option<T>` are listed in their parent's `required`.

use crate::error::{AppError, AppResult};
use crate::extract::attributes::{apply_rename_rule, extract_attributes, extract_doc_comment};
use crate::extract::SchemaExtractor;
use crate::schema::SchemaNode;
use indexmap::IndexMap;
use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasGenericArgs, HasName};
use ra_ap_syntax::{AstNode, SourceFile};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Extracts schema trees from `.rs` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSourceExtractor;

impl SchemaExtractor for RustSourceExtractor {
    fn extract(&self, file: &Path, export_name: &str) -> AppResult<SchemaNode> {
        let code =
            fs::read_to_string(file).map_err(|e| AppError::extraction(file, e.to_string()))?;
        extract_schema(&code, export_name).map_err(|e| AppError::extraction(file, e))
    }

    fn default_patterns(&self) -> &'static [&'static str] {
        &["**/*.rs"]
    }
}

/// Builds the schema tree of the struct `name` declared in `code`.
///
/// # Examples
/// ```
/// use fsapi_core::extract::rust_source::extract_schema;
///
/// let code = r#"
///     struct Schema { get: Get }
///     struct Get { request: Request }
///     struct Request { search: Search }
///     struct Search { version: String, page: Option<u32> }
/// "#;
/// let tree = extract_schema(code, "Schema").unwrap();
/// let search = tree.descend(&["get", "request", "search"]).unwrap();
/// assert!(search.requires("version"));
/// assert!(!search.requires("page"));
/// ```
pub fn extract_schema(code: &str, name: &str) -> Result<SchemaNode, String> {
    let parse = SourceFile::parse(code, Edition::Edition2021);
    let declarations = Declarations::collect(&parse.tree());

    match declarations.get(name) {
        Some(Declaration::Struct(def)) => declarations.convert_struct(def, &mut vec![name.to_string()]),
        Some(_) => Err(format!("'{}' must be declared as a struct", name)),
        None => Err(format!("Struct '{}' not found", name)),
    }
}

enum Declaration {
    Struct(ast::Struct),
    Enum(ast::Enum),
    Alias(ast::TypeAlias),
}

/// Every named type declared in one file.
struct Declarations {
    items: HashMap<String, Declaration>,
}

impl Declarations {
    fn collect(file: &SourceFile) -> Self {
        let mut items = HashMap::new();

        for node in file.syntax().descendants() {
            if let Some(def) = ast::Struct::cast(node.clone()) {
                if let Some(n) = def.name() {
                    items.insert(n.text().to_string(), Declaration::Struct(def));
                }
            } else if let Some(def) = ast::Enum::cast(node.clone()) {
                if let Some(n) = def.name() {
                    items.insert(n.text().to_string(), Declaration::Enum(def));
                }
            } else if let Some(def) = ast::TypeAlias::cast(node) {
                if let Some(n) = def.name() {
                    items.insert(n.text().to_string(), Declaration::Alias(def));
                }
            }
        }

        Self { items }
    }

    fn get(&self, name: &str) -> Option<&Declaration> {
        self.items.get(name)
    }

    fn convert_struct(&self, def: &ast::Struct, stack: &mut Vec<String>) -> Result<SchemaNode, String> {
        let mut node = SchemaNode::of_type("object");
        node.description = extract_doc_comment(def.syntax());
        let rename_all = extract_attributes(def.syntax()).rename_all;

        match def.field_list() {
            Some(ast::FieldList::RecordFieldList(list)) => {
                let mut properties = IndexMap::new();
                let mut required = Vec::new();

                for field in list.fields() {
                    let (Some(fname), Some(ty)) = (field.name(), field.ty()) else {
                        continue;
                    };
                    let attrs = extract_attributes(field.syntax());
                    if attrs.is_skipped {
                        continue;
                    }

                    let key = attrs
                        .rename
                        .unwrap_or_else(|| renamed(rename_all.as_deref(), &fname.text()));
                    let (mut child, optional) = self.convert_type(&ty, stack)?;
                    if let Some(doc) = extract_doc_comment(field.syntax()) {
                        child.description = Some(doc);
                    }
                    if !optional {
                        required.push(key.clone());
                    }
                    properties.insert(key, child);
                }

                node.properties = Some(properties);
                if !required.is_empty() {
                    node.required = Some(required);
                }
                Ok(node)
            }
            // Newtype: `struct Token(String);`
            Some(ast::FieldList::TupleFieldList(list)) => {
                let mut fields = list.fields();
                match (fields.next().and_then(|f| f.ty()), fields.next()) {
                    (Some(ty), None) => Ok(self.convert_type(&ty, stack)?.0),
                    _ => Ok(SchemaNode::default()),
                }
            }
            None => Ok(node),
        }
    }

    fn convert_enum(def: &ast::Enum) -> SchemaNode {
        let Some(list) = def.variant_list() else {
            return SchemaNode::default();
        };

        let rename_all = extract_attributes(def.syntax()).rename_all;
        let mut values = Vec::new();
        for variant in list.variants() {
            // Only unit enums serialize to plain strings.
            if variant.field_list().is_some() {
                return SchemaNode::default();
            }
            let attrs = extract_attributes(variant.syntax());
            if attrs.is_skipped {
                continue;
            }
            if let Some(name) = attrs.rename.or_else(|| {
                variant
                    .name()
                    .map(|n| renamed(rename_all.as_deref(), &n.text()))
            }) {
                values.push(serde_json::Value::String(name));
            }
        }

        let mut node = SchemaNode::of_type("string");
        node.description = extract_doc_comment(def.syntax());
        node.enum_values = Some(values);
        node
    }

    /// Maps a type to its node; the flag is `true` for `Option<T>`.
    fn convert_type(&self, ty: &ast::Type, stack: &mut Vec<String>) -> Result<(SchemaNode, bool), String> {
        match ty {
            ast::Type::PathType(path_type) => {
                let segment = path_type
                    .path()
                    .and_then(|p| p.segment())
                    .ok_or_else(|| format!("Invalid type: {}", ty.syntax().text()))?;
                let name = segment
                    .name_ref()
                    .map(|n| n.text().to_string())
                    .ok_or_else(|| format!("Invalid type: {}", ty.syntax().text()))?;
                let args: Vec<ast::Type> = segment
                    .generic_arg_list()
                    .map(|list| {
                        list.generic_args()
                            .filter_map(|arg| match arg {
                                ast::GenericArg::TypeArg(t) => t.ty(),
                                _ => None,
                            })
                            .collect()
                    })
                    .unwrap_or_default();

                self.convert_named(&name, &args, stack)
            }
            ast::Type::RefType(r) => match r.ty() {
                Some(inner) => self.convert_type(&inner, stack),
                None => Ok((SchemaNode::default(), false)),
            },
            ast::Type::SliceType(s) => Ok((self.array_of(s.ty(), stack)?, false)),
            ast::Type::ArrayType(a) => Ok((self.array_of(a.ty(), stack)?, false)),
            _ => Ok((SchemaNode::default(), false)),
        }
    }

    fn convert_named(
        &self,
        name: &str,
        args: &[ast::Type],
        stack: &mut Vec<String>,
    ) -> Result<(SchemaNode, bool), String> {
        let node = match name {
            "Option" => {
                let (inner, _) = self.first_arg(name, args, stack)?;
                return Ok((inner, true));
            }
            "Box" | "Rc" | "Arc" => return self.first_arg(name, args, stack),

            "String" | "str" | "char" => SchemaNode::of_type("string"),
            "bool" => SchemaNode::of_type("boolean"),
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => SchemaNode::of_type("integer"),
            "f32" | "f64" => SchemaNode::of_type("number"),

            "Uuid" => formatted("string", "uuid"),
            "DateTime" | "NaiveDateTime" => formatted("string", "date-time"),
            "NaiveDate" => formatted("string", "date"),

            "Vec" | "VecDeque" | "HashSet" | "BTreeSet" | "IndexSet" => {
                self.array_of(args.first().cloned(), stack)?
            }
            "HashMap" | "BTreeMap" | "IndexMap" => {
                let mut node = SchemaNode::of_type("object");
                if let Some(value_ty) = args.get(1) {
                    let (value, _) = self.convert_type(value_ty, stack)?;
                    let value = serde_json::to_value(value).map_err(|e| e.to_string())?;
                    node.extra.insert("additionalProperties".to_string(), value);
                }
                node
            }

            other => match self.get(other) {
                Some(_) if stack.iter().any(|s| s == other) => {
                    return Err(format!("Recursive type '{}' is not supported", other));
                }
                Some(Declaration::Struct(def)) => {
                    stack.push(other.to_string());
                    let node = self.convert_struct(def, stack);
                    stack.pop();
                    node?
                }
                Some(Declaration::Enum(def)) => Self::convert_enum(def),
                Some(Declaration::Alias(def)) => {
                    let Some(target) = def.ty() else {
                        return Ok((SchemaNode::default(), false));
                    };
                    stack.push(other.to_string());
                    let converted = self.convert_type(&target, stack);
                    stack.pop();
                    return converted;
                }
                // `serde_json::Value` and foreign types accept anything.
                None => SchemaNode::default(),
            },
        };

        Ok((node, false))
    }

    fn first_arg(
        &self,
        wrapper: &str,
        args: &[ast::Type],
        stack: &mut Vec<String>,
    ) -> Result<(SchemaNode, bool), String> {
        let inner = args
            .first()
            .ok_or_else(|| format!("Missing generic argument for {}", wrapper))?;
        self.convert_type(inner, stack)
    }

    fn array_of(&self, item: Option<ast::Type>, stack: &mut Vec<String>) -> Result<SchemaNode, String> {
        let mut node = SchemaNode::of_type("array");
        if let Some(item) = item {
            node.items = Some(Box::new(self.convert_type(&item, stack)?.0));
        }
        Ok(node)
    }
}

/// `name` after the container's `rename_all` rule, if any.
fn renamed(rule: Option<&str>, name: &str) -> String {
    match rule {
        Some(rule) => apply_rename_rule(rule, name),
        None => name.to_string(),
    }
}

fn formatted(schema_type: &str, format: &str) -> SchemaNode {
    let mut node = SchemaNode::of_type(schema_type);
    node.extra.insert(
        "format".to_string(),
        serde_json::Value::String(format.to_string()),
    );
    node
}
