use snowcodec::{Snowflake, DISCORD_CODEC, DISCORD_GENERATOR};

fn main() {
    // Generate some IDs from the process-wide generator
    let id1 = DISCORD_GENERATOR.produce();
    let id2 = DISCORD_GENERATOR.produce();
    let id3 = DISCORD_GENERATOR.produce();

    println!("Generated IDs:");
    print_id(&id1);
    print_id(&id2);
    print_id(&id3);

    // Parse a known snowflake back into its parts
    let known = DISCORD_CODEC.parse("1073325901825187841").unwrap();
    println!("\nComponents of {known}:");
    println!("  Timestamp: {} ms since Unix epoch", known.timestamp());
    println!("  Worker ID: {}", known.internal_worker_id());
    println!("  Process ID: {}", known.internal_process_id());
    println!("  Increment: {}", known.increment());
}

fn print_id(id: &Snowflake) {
    let structure = id.structure();
    let datetime = structure
        .datetime()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "out of range".to_owned());

    println!(
        "  ID: {id}, Timestamp: {}, Human date: {datetime}, Worker: {}, Process: {}, Increment: {}",
        structure.timestamp,
        structure.internal_worker_id,
        structure.internal_process_id,
        structure.increment
    );
}
