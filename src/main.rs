//! qbasic CLI entry point

fn main() {
    qbasic::cli::run();
}
