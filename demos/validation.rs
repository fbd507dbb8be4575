use numkey::NumKey;

fn main() {
    // The checked constructor rejects what the raw codec would
    // silently encode as garbage
    let inputs = [
        ("US", "14155552671"),
        ("usa", "14155552671"),
        ("GB", "+447700900123"),
        ("GB", ""),
    ];

    for (country, number) in inputs {
        match NumKey::try_new(country, number) {
            Ok(nk) => println!("{country} {number} -> {nk}"),
            Err(e) => println!("{country} {number:?} -> rejected: {e}"),
        }
    }
}
