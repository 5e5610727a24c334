use huffman_prefix::{build_frequency_table, HuffmanCodec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "abracadabra".to_string());

    let table = build_frequency_table(text.chars())?;
    println!("Frequencies ({} symbols):", table.total());
    for (symbol, count) in table.iter() {
        println!("  {:?}: {}", symbol, count);
    }

    let codec = HuffmanCodec::from_text(&text)?;
    println!("\n{}", codec.tree().render());

    println!("Codes:");
    for (symbol, code) in codec.code_table().iter() {
        println!("  {:?}: {}", symbol, code);
    }

    let encoded = codec.encode_text(&text)?;
    println!(
        "\nEncoded {} symbols into {} bits ({:.2} bits/symbol)",
        encoded.symbol_count,
        encoded.bits.len(),
        codec.code_table().average_code_length(&table)
    );

    let decoded = codec.decode_text(&encoded)?;
    if decoded != text {
        return Err("round trip mismatch".into());
    }
    println!("Round trip OK");

    Ok(())
}
