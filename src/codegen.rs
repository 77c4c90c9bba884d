// src/codegen.rs

//! Renders the C header and data file from a `Catalogue`.
//!
//! Both renderers are pure: they return the complete file contents so the
//! exact byte layout can be checked without touching the filesystem.
//!
//! Array layout: every element is written as ` <item> , `, so the opening
//! brace is followed by one space and neighbouring elements are separated by
//! two. The id array ends with the sentinel instead of a closing space.

use crate::catalogue::{Catalogue, CatalogueEntry};

/// First line of both generated files.
pub const BANNER: &str = "// This file auto-generated by colours_generate.py\n";

/// Include guard macro of the header.
pub const INCLUDE_GUARD: &str = "_PPL_COLOURS";

/// Name the data file uses to include the header.
pub const HEADER_INCLUDE_NAME: &str = "ppl_colours.h";

/// Written after every array element, including the last one.
pub const ELEMENT_SEPARATOR: &str = " , ";

/// Terminates the id array.
pub const ID_SENTINEL: i32 = -1;

/// A C array symbol and the declarator text that precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArraySymbol {
    /// Type and pointer part, padded so symbols line up (e.g. `"int   "`).
    pub declarator: &'static str,
    pub name: &'static str,
}

impl ArraySymbol {
    const fn new(declarator: &'static str, name: &'static str) -> Self {
        ArraySymbol { declarator, name }
    }

    /// `extern <declarator><name>[];`
    pub fn extern_decl(&self) -> String {
        format!("extern {}{}[];", self.declarator, self.name)
    }

    /// `<declarator><name>[] = {`
    pub fn definition_open(&self) -> String {
        format!("{}{}[] = {{", self.declarator, self.name)
    }
}

pub const COLOUR_STR: ArraySymbol = ArraySymbol::new("char *", "SW_COLOUR_STR");
pub const COLOUR_DCL: ArraySymbol = ArraySymbol::new("int   ", "SW_COLOUR_DCL");
pub const COLOUR_INT: ArraySymbol = ArraySymbol::new("int   ", "SW_COLOUR_INT");

/// Channel arrays in C, M, Y, K order.
pub const COLOUR_CMYK: [ArraySymbol; 4] = [
    ArraySymbol::new("float ", "SW_COLOUR_CMYK_C"),
    ArraySymbol::new("float ", "SW_COLOUR_CMYK_M"),
    ArraySymbol::new("float ", "SW_COLOUR_CMYK_Y"),
    ArraySymbol::new("float ", "SW_COLOUR_CMYK_K"),
];

/// Formats a channel value like C's `%f`: six fractional digits.
pub fn format_channel(value: f64) -> String {
    format!("{:.6}", value)
}

/// Formats a colour name as a C string literal.
pub fn format_name_literal(name: &str) -> String {
    format!("\"{}\"", name)
}

/// `#define COLOUR_<NAME> <id>`
pub fn define_line(entry: &CatalogueEntry) -> String {
    format!("#define {} {}", entry.token(), entry.id)
}

/// Renders one array definition line (without the trailing newline).
///
/// With `sentinel` set, the sentinel value closes the list directly.
pub fn array_definition<I>(symbol: &ArraySymbol, items: I, sentinel: Option<i32>) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut line = symbol.definition_open();
    for item in items {
        line.push(' ');
        line.push_str(item.as_ref());
        line.push_str(ELEMENT_SEPARATOR);
    }
    if let Some(sentinel) = sentinel {
        line.push_str(&sentinel.to_string());
    }
    line.push_str("};");
    line
}

pub fn render_header(catalogue: &Catalogue) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("#ifndef {}\n", INCLUDE_GUARD));
    out.push_str(&format!("#define {} 1\n", INCLUDE_GUARD));

    for entry in catalogue {
        out.push_str(&define_line(entry));
        out.push('\n');
    }
    out.push('\n');

    for symbol in [COLOUR_STR, COLOUR_DCL, COLOUR_INT] {
        out.push_str(&symbol.extern_decl());
        out.push('\n');
    }
    out.push('\n');

    for symbol in &COLOUR_CMYK {
        out.push_str(&symbol.extern_decl());
        out.push('\n');
    }
    out.push('\n');

    out.push_str("#endif\n");
    out
}

pub fn render_data(catalogue: &Catalogue) -> String {
    let mut lines = vec![
        array_definition(
            &COLOUR_STR,
            catalogue.iter().map(|e| format_name_literal(&e.name)),
            None,
        ),
        array_definition(
            &COLOUR_DCL,
            catalogue.iter().map(|e| e.name_len().to_string()),
            None,
        ),
        array_definition(
            &COLOUR_INT,
            catalogue.iter().map(CatalogueEntry::token),
            Some(ID_SENTINEL),
        ),
    ];
    for (channel, symbol) in COLOUR_CMYK.iter().enumerate() {
        lines.push(array_definition(
            symbol,
            catalogue
                .iter()
                .map(|e| format_channel(e.cmyk.channels()[channel])),
            None,
        ));
    }

    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("#include \"{}\"\n", HEADER_INCLUDE_NAME));
    out.push('\n');
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests;
