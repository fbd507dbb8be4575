use numkey::{NumKey, PrefixKey};

fn main() {
    // Keys sort by country first, then by number magnitude
    let mut keys = vec![
        NumKey::new("US", "19175550000"),
        NumKey::new("DE", "49891234567"),
        NumKey::new("GB", "447700900123"),
        NumKey::new("DE", "4930123456"),
        NumKey::new("US", "12125551234"),
    ];

    keys.sort();

    println!("Country-grouped order:");
    for nk in &keys {
        let data = nk.decode();
        println!("  {nk}  {} {}", data.country, data.number);
    }

    // Prefix keys turn "starts with 1415" into an integer range
    let low = PrefixKey::new("1415");
    let high = PrefixKey::new("1416");

    let numbers = ["14155552671", "14160000000", "14159999999", "12125551234"];
    println!("\nNumbers with prefix 1415:");
    for number in numbers {
        let pk = PrefixKey::new(number);
        if low <= pk && pk < high {
            println!("  {number}");
        }
    }
}
