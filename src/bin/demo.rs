// Demonstration driver: a two-bucket table forced into chaining, then
// grown. Not part of the library contract.

use chain_hashmap::ChainHashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = ChainHashMap::with_capacity(2)?;

    table.insert("line_1", "Tiny hash table");
    table.insert("line_2", "Filled beyond capacity");
    table.insert("line_3", "Linked list saves the day!");

    for key in ["line_1", "line_2", "line_3"] {
        if let Some(value) = table.retrieve(key) {
            println!("{value}");
        }
    }

    let old_capacity = table.capacity();
    let mut table = table.resize()?;
    println!(
        "\nResizing hash table from {old_capacity} to {}.",
        table.capacity()
    );

    table.remove("line_2");
    println!("line_2 after removal: {:?}", table.retrieve("line_2"));

    Ok(())
}
