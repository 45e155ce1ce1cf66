/// Example walking through the Hermann-Mauguin notation API
///
/// This example parses symbols written with underscores or Unicode subscripts, builds
/// symbols from explicit axes, looks up numbered space groups and prints both the long
/// and the short form of each.
use hermann_mauguin::notation::{digits_to_subscript, to_underscore};
use hermann_mauguin::{
    Axis, Dimension, HermannMauguin1D, HermannMauguin2D, HermannMauguin3D, NotationError,
    StandardSymbols, SymbolSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hermann-Mauguin Notation Tour ===\n");

    // Example 1: Single axes
    println!("1. Parsing single axes:");
    for token in ["4_2/m", "6₃", "-3", "-2", "c", ""] {
        let axis = Axis::parse(token)?;
        println!(
            "   {:>6} -> rotation {:>2}, screw {}, glide {:?}, order {} ({})",
            format!("'{}'", token),
            axis.rotation(),
            axis.screw(),
            axis.glide(),
            axis.order(),
            axis
        );
    }
    println!(
        "   Screw 21 as subscript: {} (ascii {})\n",
        digits_to_subscript(21),
        to_underscore(&digits_to_subscript(21))
    );

    // Example 2: Space and point groups from text
    println!("2. Long and short forms:");
    for notation in ["F 4_1/d -3 2/m", "P 1 2_1/c 1", "P 3 1 2", "R -3 2/m", "-6 m 2"] {
        let symbol: HermannMauguin3D = notation.parse()?;
        let kind = if symbol.is_space_group() {
            "space group"
        } else {
            "point group"
        };
        println!(
            "   {:<16} long '{}', short '{:#}', {:?} {}",
            notation,
            symbol,
            symbol,
            symbol.crystal_system(),
            kind
        );
    }
    println!();

    // Example 3: Explicit construction in lower dimensions
    println!("3. Building symbols from axes:");
    let pm = HermannMauguin1D::new(Some('P'), [Axis::MIRROR])?;
    println!("   1D: {} / {:#}", pm, pm);
    let p4mm = HermannMauguin2D::new(Some('p'), [Axis::from_rotation(4)?, Axis::MIRROR])?;
    println!("   2D: {} / {:#}\n", p4mm, p4mm);

    // Example 4: Numbered space groups
    println!("4. Looking up space groups by number:");
    for index in [1, 14, 62, 141, 166, 194, 227] {
        let symbol = HermannMauguin3D::from_index(index)?;
        println!(
            "   #{:<3} {:<20} {:<10} {:?}",
            index,
            symbol.long_form_ascii(),
            symbol.short_form(),
            symbol.crystal_system()
        );
    }
    let source = StandardSymbols;
    println!(
        "   Tables list {} line, {} plane and {} space groups\n",
        source.len(Dimension::_1D),
        source.len(Dimension::_2D),
        source.len(Dimension::_3D)
    );

    // Example 5: Rejected input
    println!("5. Errors:");
    let rejected: [(&str, Result<HermannMauguin3D, NotationError>); 4] = [
        ("P 5", "P 5".parse()),
        ("Q 2 2 2", "Q 2 2 2".parse()),
        ("P 2 2 2 2", "P 2 2 2 2".parse()),
        ("#231", HermannMauguin3D::from_index(231)),
    ];
    for (input, result) in rejected {
        if let Err(e) = result {
            println!("   {:<10} {}", input, e);
        }
    }

    println!("\n=== Tour Complete ===");
    Ok(())
}
