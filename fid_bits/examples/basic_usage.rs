use fid_bits::{FidBitsError, PackedBitVector};

fn main() {
    println!("=== Packed Bit Vector Examples ===\n");

    // Example 1: Single bits
    example_single_bits();

    // Example 2: Fixed-width codes across word boundaries
    let _ = example_codes();

    // Example 3: Error handling
    example_errors();
}

fn example_single_bits() {
    println!("Example 1: Setting and clearing single bits");

    let mut bits = PackedBitVector::new();
    bits.set_bit(0, true);
    bits.set_bit(5, true);
    bits.set_bit(9, true);
    bits.set_bit(5, false);

    println!("  Size: {}", bits.size());
    println!("  Bits: {}", bits);
    println!();
}

fn example_codes() -> Result<(), FidBitsError> {
    println!("Example 2: Packing 9-bit codes");

    let codes = [3u64, 511, 256, 42, 0, 300, 77, 128];

    let mut bits = PackedBitVector::new();
    for &code in &codes {
        bits.push_slice(9, code)?;
    }

    // Code 7 sits at bits 63..72, straddling the first two words
    println!("  Stored {} codes in {} words", codes.len(), bits.words().len());
    for i in 0..codes.len() as u64 {
        println!("  Code {}: {}", i, bits.get_slice(i * 9, 9)?);
    }

    // Overwrite in place
    bits.set_slice(7 * 9, 9, 5)?;
    println!("  Code 7 after overwrite: {}", bits.get_slice(7 * 9, 9)?);
    println!();

    Ok(())
}

fn example_errors() {
    println!("Example 3: Read errors");

    let mut bits = PackedBitVector::new();
    bits.set_slice(0, 7, 0b1010101).unwrap();

    match bits.get_slice(0, 10) {
        Ok(v) => println!("  Unexpected value {}", v),
        Err(e) => println!("  get_slice(0, 10): {}", e),
    }
    match bits.get_slice(0, 123) {
        Ok(v) => println!("  Unexpected value {}", v),
        Err(e) => println!("  get_slice(0, 123): {}", e),
    }
    println!("  get_slice(12, 0): {:?}", bits.get_slice(12, 0));
    println!();
}
