use std::process::ExitCode;

fn main() -> ExitCode {
    fix_image_time_lib::run()
}
