use expect_test::expect;
use xopts::{Kind, Opt};

#[test]
fn fresh_option_is_an_unset_flag() {
    let o = Opt::new("long_name", None, "description");

    assert_eq!(o.long_name(), "long_name");
    assert_eq!(o.description(), "description");
    assert_eq!(o.short_name(), None);
    assert!(o.is_flag());
    assert!(!o.is_mandatory());
    assert!(!o.is_optional());
    assert!(!o.has_argument());
    assert!(!o.was_supplied());

    assert_eq!(o.as_int(), 0);
    assert_eq!(o.as_uint(), 0);
    assert_eq!(o.as_double(), 0.0);
    assert!(!o.as_bool());
    assert_eq!(o.as_string(), "");

    let o = Opt::new("long_name", 'l', "description");
    assert_eq!(o.short_name(), Some('l'));
    assert!(o.is_flag());
}

#[test]
fn defaults_convert_like_values() {
    let mut o = Opt::new("long_name", 'l', "description");

    o.optional("bla");
    assert!(o.is_optional());
    assert!(o.has_argument());
    assert!(!o.was_supplied());
    assert_eq!((o.as_int(), o.as_uint(), o.as_double(), o.as_bool()), (0, 0, 0.0, false));
    assert_eq!(o.as_string(), "bla");

    o.optional("5");
    assert_eq!((o.as_int(), o.as_uint(), o.as_double(), o.as_bool()), (5, 5, 5.0, true));

    o.optional("3.14");
    assert_eq!((o.as_int(), o.as_uint(), o.as_double(), o.as_bool()), (3, 3, 3.14, true));

    o.optional("true");
    assert_eq!((o.as_int(), o.as_uint(), o.as_double(), o.as_bool()), (0, 0, 0.0, true));
    assert_eq!(o.default_value(), "true");
}

#[test]
fn supplied_value_replaces_default() {
    let mut o = Opt::new("opt", None, "some description");
    o.optional("bla");
    assert_eq!(o.as_string(), "bla");

    o.assign("whatever").unwrap();
    assert!(o.was_supplied());
    assert_eq!(o.as_string(), "whatever");

    o.reset();
    assert!(!o.was_supplied());
    assert_eq!(o.as_string(), "bla");
}

#[test]
fn validator_gates_assignment() {
    let mut o = Opt::new("opt", None, "valid are strings: hello, world");
    o.optional("").validator(|v| v == "hello" || v == "world");

    let err = o.assign("whatever").unwrap_err();
    expect!["Invalid value for `--opt`: `whatever`"].assert_eq(&err.to_string());
    assert!(!o.was_supplied());
    assert_eq!(o.as_string(), "");

    o.assign("hello").unwrap();
    assert!(o.was_supplied());
    assert_eq!(o.as_string(), "hello");

    assert!(o.assign("nope").is_err());
    assert_eq!(o.as_string(), "hello");
}

#[test]
fn last_kind_wins() {
    let mut o = Opt::new("mode", 'm', "Operation mode");

    o.optional("fast").mandatory();
    assert!(o.is_mandatory());
    assert_eq!(o.kind(), &Kind::Mandatory);
    assert_eq!(o.default_value(), "");

    o.mandatory().optional("slow");
    assert!(o.is_optional());
    assert_eq!(o.kind(), &Kind::Optional("slow".to_string()));
}

#[test]
fn flag_presence() {
    let mut o = Opt::new("verbose", 'v', "Be chatty");
    o.validator(|_| false);

    o.mark_present();
    assert!(o.was_supplied());
    assert!(o.as_bool());
    assert_eq!(o.as_string(), "true");

    o.assign("anything").unwrap();
    assert_eq!(o.as_string(), "anything");
}

#[test]
fn debug() {
    let mut o = Opt::new("mode", 'm', "Operation mode");
    o.mandatory().validator(|v| v == "fast");
    o.assign("fast").unwrap();

    expect![[r#"
        Opt {
            long: "mode",
            short: Some(
                'm',
            ),
            kind: Mandatory,
            validator: true,
            value: Some(
                "fast",
            ),
        }
    "#]]
    .assert_debug_eq(&o);
}
