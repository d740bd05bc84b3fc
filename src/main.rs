fn main() {
    if let Err(err) = tutorchat::cli::main() {
        eprintln!("❌ Error: {err}");
        std::process::exit(1);
    }
}
