use numkey::NumKey;

fn main() {
    // Encode a US number
    let nk = NumKey::new("US", "14155552671");

    println!("Encoded key:");
    print_key(nk);

    // The canonical text form round-trips
    let parsed = NumKey::from_hex(&nk.to_hex()).unwrap();
    assert_eq!(parsed, nk);

    // Numbers longer than 15 digits degrade to a one-way encoding
    let lossy = NumKey::new("DE", "4915123456789012345");
    println!("\nLossy key (19 digits in, number not recoverable):");
    print_key(lossy);
}

fn print_key(nk: NumKey) {
    let data = nk.decode();
    println!(
        "  hex: {nk}, hi: {:#010x}, lo: {:#010x}, country: {}, number: {:?}, reversible: {}",
        nk.hi,
        nk.lo,
        data.country,
        data.number,
        nk.is_reversible()
    );
}
