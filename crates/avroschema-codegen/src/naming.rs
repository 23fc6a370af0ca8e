//! Naming convention utilities for schema generation.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `order_events` | [`camel_case`] | `OrderEvents` |
//! | `shop/v1/order-events.proto` | [`namespace_from_file`] | `OrderEvents` |
//! | `OrderEvents` | [`to_snake_case`] | `order_events` |
//! | `.shop.v1.Order` | [`short_name`] | `Order` |

/// Convert an identifier to protobuf-style CamelCase.
///
/// An underscore followed by a lowercase letter is dropped and the letter
/// capitalised; a leading underscore becomes `X`. Other characters pass
/// through, and lowercase runs after them are kept as-is.
///
/// # Examples
///
/// ```
/// use avroschema_codegen::naming::camel_case;
///
/// assert_eq!(camel_case("created_at"), "CreatedAt");
/// assert_eq!(camel_case("_private"), "XPrivate");
/// assert_eq!(camel_case("Order"), "Order");
/// ```
pub fn camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    if chars.first() == Some(&'_') {
        out.push('X');
        i = 1;
    }

    while i < chars.len() {
        let c = chars[i];
        let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());

        if c == '_' && next_is_lower {
            i += 1;
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
            i += 1;
            continue;
        }

        out.push(c.to_ascii_uppercase());
        while chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase()) {
            i += 1;
            out.push(chars[i]);
        }
        i += 1;
    }

    out
}

/// CamelCase a message's nesting path, segments joined with `_`.
///
/// ```
/// use avroschema_codegen::naming::camel_case_path;
///
/// assert_eq!(camel_case_path(["Request", "Options"]), "Request_Options");
/// assert_eq!(camel_case_path(["order"]), "Order");
/// ```
pub fn camel_case_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    camel_case(&segments.into_iter().collect::<Vec<_>>().join("_"))
}

/// Derive a record namespace from a source file's logical name.
///
/// Directories and the `.proto` extension are dropped, `-` and `.` become
/// underscores, and the result is CamelCased.
///
/// ```
/// use avroschema_codegen::naming::namespace_from_file;
///
/// assert_eq!(namespace_from_file("shop/v1/order-events.proto"), "OrderEvents");
/// ```
pub fn namespace_from_file(file_name: &str) -> String {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    let base = base.strip_suffix(".proto").unwrap_or(base);
    camel_case(&base.replace(['-', '.'], "_"))
}

/// Convert CamelCase (or anything else) to snake_case.
///
/// ```
/// use avroschema_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("OrderEvents"), "order_events");
/// assert_eq!(to_snake_case("HTTPRequest"), "http_request");
/// assert_eq!(to_snake_case("order-line"), "order_line");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '.' || c == ' ' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Last segment of a dotted type name.
///
/// ```
/// use avroschema_codegen::naming::short_name;
///
/// assert_eq!(short_name(".shop.v1.Order"), "Order");
/// assert_eq!(short_name("Order"), "Order");
/// ```
pub fn short_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}
