// src/codegen/tests.rs

use crate::catalogue::Catalogue;
use crate::codegen::*;
use crate::color::Cmyk;
use crate::table::ColourTableBuilder;

fn small_catalogue() -> Catalogue {
    // Inserted out of order on purpose: output must follow sorted names.
    let mut builder = ColourTableBuilder::new();
    builder.insert("WHITE", Cmyk::new(0.0, 0.0, 0.0, 0.0)).unwrap();
    builder.insert("GREENYELLOW", Cmyk::new(0.15, 0.0, 0.69, 0.0)).unwrap();
    builder.insert("BLACK", Cmyk::new(0.0, 0.0, 0.0, 1.0)).unwrap();
    Catalogue::from_table(&builder.build())
}

#[test]
fn test_format_channel_matches_printf_f() {
    assert_eq!(format_channel(0.0), "0.000000");
    assert_eq!(format_channel(1.0), "1.000000");
    assert_eq!(format_channel(0.15), "0.150000");
    assert_eq!(format_channel(0.07), "0.070000");
    assert_eq!(format_channel(29.0 / 100.0), "0.290000");
}

#[test]
fn test_header_exact_bytes() {
    let expected = "\
// This file auto-generated by colours_generate.py

#ifndef _PPL_COLOURS
#define _PPL_COLOURS 1
#define COLOUR_BLACK 20000
#define COLOUR_GREENYELLOW 20001
#define COLOUR_WHITE 20002

extern char *SW_COLOUR_STR[];
extern int   SW_COLOUR_DCL[];
extern int   SW_COLOUR_INT[];

extern float SW_COLOUR_CMYK_C[];
extern float SW_COLOUR_CMYK_M[];
extern float SW_COLOUR_CMYK_Y[];
extern float SW_COLOUR_CMYK_K[];

#endif
";
    assert_eq!(render_header(&small_catalogue()), expected);
}

#[test]
fn test_data_exact_bytes() {
    let expected = concat!(
        "// This file auto-generated by colours_generate.py\n",
        "\n",
        "#include \"ppl_colours.h\"\n",
        "\n",
        "char *SW_COLOUR_STR[] = { \"BLACK\" ,  \"GREENYELLOW\" ,  \"WHITE\" , };\n",
        "int   SW_COLOUR_DCL[] = { 5 ,  11 ,  5 , };\n",
        "int   SW_COLOUR_INT[] = { COLOUR_BLACK ,  COLOUR_GREENYELLOW ,  COLOUR_WHITE , -1};\n",
        "float SW_COLOUR_CMYK_C[] = { 0.000000 ,  0.150000 ,  0.000000 , };\n",
        "float SW_COLOUR_CMYK_M[] = { 0.000000 ,  0.000000 ,  0.000000 , };\n",
        "float SW_COLOUR_CMYK_Y[] = { 0.000000 ,  0.690000 ,  0.000000 , };\n",
        "float SW_COLOUR_CMYK_K[] = { 1.000000 ,  0.000000 ,  0.000000 , };\n",
    );
    assert_eq!(render_data(&small_catalogue()), expected);
}

#[test]
fn test_empty_catalogue_arrays() {
    let catalogue = Catalogue::from_table(&ColourTableBuilder::new().build());
    let data = render_data(&catalogue);
    assert!(data.contains("char *SW_COLOUR_STR[] = {};\n"));
    assert!(data.contains("int   SW_COLOUR_INT[] = {-1};\n"));
    let header = render_header(&catalogue);
    assert!(header.contains("#define _PPL_COLOURS 1\n\nextern char *SW_COLOUR_STR[];"));
}

#[test]
fn test_array_definition_with_sentinel() {
    let line = array_definition(&COLOUR_INT, ["COLOUR_A", "COLOUR_B"], Some(ID_SENTINEL));
    assert_eq!(line, "int   SW_COLOUR_INT[] = { COLOUR_A ,  COLOUR_B , -1};");
}

#[test]
fn test_standard_data_arrays_align_with_header() {
    let catalogue = Catalogue::standard().unwrap();
    let header = render_header(catalogue);
    let data = render_data(catalogue);
    let n = catalogue.len();

    let defines = header.lines().filter(|l| l.starts_with("#define COLOUR_")).count();
    assert_eq!(defines, n);

    for line in data.lines().skip(4) {
        let body = line
            .split_once('{')
            .and_then(|(_, rest)| rest.strip_suffix("};"))
            .unwrap();
        let items: Vec<&str> = body
            .split(ELEMENT_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if line.starts_with("int   SW_COLOUR_INT") {
            assert_eq!(items.len(), n + 1);
            assert_eq!(items.last(), Some(&"-1"));
            assert_eq!(items.iter().filter(|&&s| s == "-1").count(), 1);
        } else {
            assert_eq!(items.len(), n, "wrong element count in {}", line);
        }
    }
}

#[test]
fn test_standard_lengths_match_names() {
    let catalogue = Catalogue::standard().unwrap();
    let data = render_data(catalogue);
    let line_items = |prefix: &str| -> Vec<String> {
        let line = data.lines().find(|l| l.starts_with(prefix)).unwrap();
        let body = line.split_once('{').unwrap().1.strip_suffix("};").unwrap();
        body.split(ELEMENT_SEPARATOR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    };
    let names = line_items("char *SW_COLOUR_STR");
    let lengths = line_items("int   SW_COLOUR_DCL");
    for (name, len) in names.iter().zip(&lengths) {
        assert_eq!(name.trim_matches('"').len().to_string(), *len);
    }
}
