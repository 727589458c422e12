//! Short binary name (`bt`) that forwards to the `bulk_tag` library.

fn main() {
    if let Err(err) = bulk_tag::entry() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
