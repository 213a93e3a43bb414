#![forbid(unsafe_code)]

fn main() -> carousel::Result<()> {
    carousel_demo::cli::run_from_env()
}
