use xopts::{to_double, to_int, Parser};

fn flags() -> Parser {
    let mut p = Parser::new();
    p.add_flag("help", 'h', "This help is accessible via short and long option");
    p.add_flag("verbose", 'v', "Verbose - accessible via -v and --verbose");
    p.add_optional(
        "dlevel",
        None,
        "Debug level, one of none, debug, error - it is checked by the validator",
        "none",
    )
    .validator(|v| matches!(v, "none" | "debug" | "error"));
    p.add_mandatory("config", 'c', "Configuration file");
    p.add_optional("int", 'i', "Some small integer in range <-10..10>", "4")
        .validator(|s| (-10..=10).contains(&to_int(s)));
    p.add_optional("double", 'd', "Double value > 3.0", "3.14").validator(|s| to_double(s) > 3.0);
    p.add_optional("bf", None, "Boolean value", "false");
    p.add_optional("bt", None, "Boolean value", "true");
    p
}

fn main() {
    let mut p = flags();

    let res = p.try_parse_env();
    if let Err(err) = &res {
        eprintln!("error: {err}");
    }
    if res.is_err() || p.as_bool("help") {
        let prg = std::env::args().next().unwrap_or_default();
        println!("Usage: {prg} [options] [-- [positional arguments]]");
        println!("{p}");
        std::process::exit(1);
    }

    println!("Options:");
    println!(" verbose : {}", p.as_bool("verbose"));
    println!(" dlevel  : {}", p.as_string("dlevel"));
    println!(" config  : {}", p.as_string("config"));
    println!(" int     : {}", p.as_int("int"));
    println!(" double  : {}", p.as_double("double"));
    println!(" bf      : {}", p.as_bool("bf"));
    println!(" bt      : {}", p.as_bool("bt"));

    if p.positional_count() > 0 {
        println!("Positional parameters:");
        for i in 0..p.positional_count() {
            println!(" [{i}]: {}", p.positional(i));
        }
    } else {
        println!("No positional parameters.");
    }
}
