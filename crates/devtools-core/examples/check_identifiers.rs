use devtools_core::{Nip, RegonKind, generate_regon, is_valid_nip, is_valid_regon};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1).peekable();
    if args.peek().is_none() {
        let mut rng = rand::rng();
        println!("nip      {}", Nip::generate(&mut rng));
        for kind in [RegonKind::Short, RegonKind::Long] {
            println!("{:<8} {}", kind.to_string(), generate_regon(kind.length(), &mut rng)?);
        }
        return Ok(());
    }

    for value in args {
        let verdict = if is_valid_nip(&value) {
            "valid NIP"
        } else if is_valid_regon(&value) {
            "valid REGON"
        } else {
            "invalid"
        };
        println!("{value}: {verdict}");
    }
    Ok(())
}
