use xopts::Parser;

use crate::modes;

#[test]
fn lists_every_option() {
    let help = modes().render_help();

    assert!(help.contains("--mode "));
    assert!(help.contains("--opt "));
    assert!(help.contains("--only_long "));
    assert!(help.contains("--verbose "));
    assert!(!help.contains("--non-existing "));
    assert_eq!(help.lines().count(), 4);
}

#[test]
fn layout() {
    let mut p = Parser::new();
    p.add_mandatory("config", 'c', "Configuration file");
    p.add_optional("count", None, "Number of iterations", "10");
    p.add_optional("threshold", 't', "Some threshold", "3.14");
    p.add_flag("help", 'h', "This help is accessible via short and long option");

    let expected = concat!(
        " -c, --config     M Configuration file\n",
        "     --count        Number of iterations (default: 10)\n",
        " -t, --threshold    Some threshold (default: 3.14)\n",
        " -h, --help         This help is accessible via short and long option\n",
    );
    assert_eq!(p.render_help(), expected);
    assert_eq!(p.to_string(), expected);
}

#[test]
fn empty_registry_renders_nothing() {
    assert_eq!(Parser::new().render_help(), "");
}
