//! Stores a few phone numbers, reads them back, then removes one.
//! Set `RUST_LOG=trace` to see chain mutations.

use chained_table::ChainedHashTable;

fn show(table: &ChainedHashTable, key: &str) {
    println!("{}: {}", key, table.get(key).unwrap_or("null"));
}

fn main() {
    env_logger::init();

    let mut table = ChainedHashTable::new();

    table.set("emergency", "911");
    table.set("Vlad", "88005553535");
    table.set("Vlad", "88005553536");
    table.set("Anna", "89999999999");
    table.set("Disa", "89167214142");

    for key in ["emergency", "Vlad", "Anna", "Disa"] {
        show(&table, key);
    }

    table.remove("Anna");

    show(&table, "Anna");
}
