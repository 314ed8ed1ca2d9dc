fn main() {
    if let Err(err) = tmcf_wizard::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
