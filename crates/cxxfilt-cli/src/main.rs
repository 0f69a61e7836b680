mod cli;
mod commands;

use commands::filter::FilterArgs;
use cxxfilt_lib::DEFAULT_OUTPUT_LIMIT;

fn main() {
    let matches = cli::build_cli().get_matches();
    let args = FilterArgs {
        symbols: matches
            .get_many::<String>("symbols")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        json: matches.get_flag("json"),
        strict: matches.get_flag("strict"),
        output_limit: matches
            .get_one::<usize>("output_limit")
            .copied()
            .unwrap_or(DEFAULT_OUTPUT_LIMIT),
    };
    commands::filter::run(args);
}
