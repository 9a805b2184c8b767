use std::io::Read;

use laxml_parse::{Tokenizer, parse_with_recoveries};

fn main() -> std::io::Result<()> {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;

    println!("=== Tokens ===");
    for tok in Tokenizer::new(&source) {
        println!("{:?}", tok);
    }

    let (nodes, recoveries) = parse_with_recoveries(&source);
    println!("\n=== Tree ===");
    println!("{:#?}", nodes);

    println!("\n=== Recoveries ===");
    for recovery in recoveries {
        println!("{} at {:?}", recovery.kind, recovery.span);
    }
    Ok(())
}
