use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", lex_dictconv::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        lex_dictconv::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: profile={}, cost.base={}, cost.max_source_cost={}, cost.divisor={}, input.source_files={}",
        s.profile,
        s.cost.base,
        s.cost.max_source_cost,
        s.cost.divisor,
        s.input.source_files.join(",")
    );
}
