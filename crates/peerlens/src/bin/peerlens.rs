fn main() {
    if let Err(err) = peerlens::run() {
        eprintln!("{}", peerlens::format_error(&err));
        std::process::exit(1);
    }
}
