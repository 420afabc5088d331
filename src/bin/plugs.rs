use std::process::ExitCode;

use plugs::cli::Plugs;

fn main() -> ExitCode {
    Plugs::run_from_args()
}
