use snowcodec::{GeneratorConfig, SnowflakeCodec, SnowflakeFields};

fn main() {
    // 2020-01-01 00:00:00 UTC
    let codec = SnowflakeCodec::new(1577836800000);

    let config = GeneratorConfig::builder()
        .worker_id(7)
        .process_id(3)
        .build();
    let generator = codec.generator_with_config(config);

    let id = generator.produce();
    println!("Generated: {id}");
    println!("  {:?}", id.structure());

    // Compose one by hand; the worker id is truncated to 5 bits
    let made = codec.make(
        SnowflakeFields::new()
            .with_timestamp(1577836800000 + 1234)
            .with_internal_worker_id(37)
            .with_increment(42),
    );
    println!("Made: {made}");
    println!("  {:?}", made.structure());
}
