mod common;
use common::*;
use miniasm::lang::ExtLevel;
use miniasm::mach::Program;

fn parse_err(source: &str, ext: ExtLevel) -> String {
    Program::parse(source, ext).unwrap_err().to_string()
}

#[test]
fn test_missing_line_number() {
    assert_eq!(
        parse_err("x = 0\n", ExtLevel::None),
        "SYNTAX ERROR; MISSING LINE NUMBER"
    );
    assert_eq!(
        parse_err("(1) stop\n\n", ExtLevel::None),
        "SYNTAX ERROR; MISSING LINE NUMBER"
    );
}

#[test]
fn test_duplicate_line_number() {
    assert_eq!(
        parse_err("(1) x = 0\n(2) stop\n(1) stop\n", ExtLevel::None),
        "SYNTAX ERROR IN 1; DUPLICATE LINE NUMBER"
    );
}

#[test]
fn test_non_contiguous_numbering() {
    let msg = "SYNTAX ERROR; LINE NUMBERS MUST RANGE FROM ONE UPWARDS AND INCREMENT BY ONE EACH TIME";
    assert_eq!(parse_err("(1) x = 0\n(3) stop\n", ExtLevel::None), msg);
    assert_eq!(parse_err("(2) stop\n", ExtLevel::None), msg);
    assert_eq!(parse_err("(0) stop\n", ExtLevel::None), msg);
}

#[test]
fn test_out_of_order_source_is_fine() {
    let program = Program::parse("(3) stop\n(1) x = 0\n(2) x = x + 1\n", ExtLevel::None).unwrap();
    assert_eq!(program.len(), 3);
    let numbers: Vec<u16> = program.instructions().iter().map(|i| i.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_comments_skipped_entirely() {
    // comments are not counted, not validated
    let source = "// leading remark\n(1) x = 0\n//(999) not a line\n(2) stop\n";
    let program = Program::parse(source, ExtLevel::None).unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn test_unrecognized_statement_names_the_text() {
    assert_eq!(
        parse_err("(1) x = y\n", ExtLevel::None),
        "SYNTAX ERROR IN 1; UNRECOGNIZED STATEMENT: x = y"
    );
}

#[test]
fn test_extension_gating_by_level() {
    let source = "(1) y = x\n(2) y = y + x\n(3) z = abs(x - y)\n(4) stop\n";
    assert!(Program::parse(source, ExtLevel::None).is_err());
    assert!(Program::parse(source, ExtLevel::Transfer).is_err());
    assert!(Program::parse(source, ExtLevel::Add).is_err());
    assert!(Program::parse(source, ExtLevel::AbsDiff).is_ok());
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert!(Program::parse("(1) STOP\n", ExtLevel::None).is_err());
    assert!(Program::parse("(1) Goto 1\n", ExtLevel::None).is_err());
}

#[test]
fn test_parsing_is_pure() {
    let source = "(1) if (x == 0) goto 3\n(2) X = X + 1\n(3) stop\n";
    let a = Program::parse(source, ExtLevel::None).unwrap();
    let b = Program::parse(source, ExtLevel::None).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.variables(), b.variables());
    // x and X are distinct variables
    assert_eq!(a.variables().len(), 2);
}

#[test]
fn test_instruction_display() {
    let source = "(2) z = abs(x - y)\n(1) if (q == 0) goto 2\n";
    let program = Program::parse(source, ExtLevel::AbsDiff).unwrap();
    assert_eq!(
        program.instructions()[0].to_string(),
        "(1) if (q == 0) goto 2"
    );
    assert_eq!(program.instructions()[1].to_string(), "(2) z = abs(x - y)");
}

#[test]
fn test_load_from_path() {
    init();
    let path = std::env::temp_dir().join("miniasm_parse_test.masm");
    std::fs::write(&path, "(1) x = 0\n(2) stop\n").unwrap();
    let program = Program::load(&path, ExtLevel::None).unwrap();
    assert_eq!(program.len(), 2);
    let err = Program::load(path.join("nope"), ExtLevel::None).unwrap_err();
    assert!(err.to_string().starts_with("FILE NOT FOUND"));
}

#[test]
fn test_variables_start_without_values() {
    let program = Program::parse("(1) x = x + 1\n(2) stop\n", ExtLevel::None).unwrap();
    assert_eq!(program.variables().fetch(&var('x')), None);
}
