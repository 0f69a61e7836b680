//! Command-line definition for the cxxfilt binary.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("cxxfilt")
        .about("Demangle Itanium C++ ABI linker symbols")
        .arg(
            Arg::new("symbols")
                .value_name("SYMBOL")
                .num_args(0..)
                .help("Mangled symbols (read line-wise from stdin when absent)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit one JSON record per symbol"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Exit non-zero if any symbol fails to demangle"),
        )
        .arg(
            Arg::new("output_limit")
                .long("output-limit")
                .value_name("BYTES")
                .value_parser(value_parser!(usize))
                .help("Cap on the demangled text per symbol"),
        )
}
