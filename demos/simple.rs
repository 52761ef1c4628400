fn main() {
    let mut p = xopts::Parser::new();
    p.add_mandatory("config", 'c', "Configuration file");
    p.add_optional("count", None, "Number of iterations", "10");
    p.add_optional("threshold", 't', "Some threshold", "3.14");
    p.add_flag("help", 'h', "This help is accessible via short and long option");

    if !p.parse_env() || p.as_bool("help") {
        let prg = std::env::args().next().unwrap_or_default();
        println!("Usage: {prg} [options] [-- [positional arguments]]");
        println!("{p}");
        std::process::exit(1);
    }

    println!("Options:");
    println!(" config    : {}", p.as_string("config"));
    println!(" count     : {}", p.as_int("count"));
    println!(" threshold : {}", p.as_double("threshold"));

    // ./simple -c config.txt -- these strings are positional arguments
    if p.positional_count() > 0 {
        println!("Positional parameters:");
        for (i, arg) in p.positionals().iter().enumerate() {
            println!(" [{i}]: {}", arg.to_string_lossy());
        }
    } else {
        println!("No positional parameters.");
    }
}
