fn main() {
    if let Err(err) = bulk_tag::entry() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
