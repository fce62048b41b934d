use tabula::{
    BoundedArray, BoundedMatrix, Config, Result, TableauConfig, TokenInput, YoungTableau,
    partial_sort,
};

fn main() -> Result<()> {
    tabula::init();
    println!("=== Tabula Demo ===\n");

    // Demonstrate BoundedArray
    println!("1. BoundedArray with a negative origin:");
    let mut arr = BoundedArray::from_vec_with_origin(-2, vec![42, 7, 19, 3, 25])?;
    println!("   Indices [{}, {}]: {}", arr.lo(), arr.hi(), arr);

    partial_sort(&mut arr, 3);
    println!("   After sorting the first 3: {}", arr);

    match arr.at(3) {
        Ok(value) => println!("   arr[3] = {}", value),
        Err(e) => println!("   arr[3] rejected: {}", e),
    }

    // Demonstrate BoundedMatrix
    println!("\n2. BoundedMatrix arithmetic:");
    let mut a: BoundedMatrix<i32> = BoundedMatrix::new(2, 3)?;
    let mut b: BoundedMatrix<i32> = BoundedMatrix::new(3, 2)?;
    a.read_tokens(&mut TokenInput::new("1 2 3\n4 5 6"))?;
    b.read_tokens(&mut TokenInput::new("7 8\n9 10\n11 12"))?;

    print!("   A =\n{}", a);
    print!("   B =\n{}", b);

    if let Err(e) = a.add(&b) {
        println!("   A + B: {}", e);
    }
    let product = a.multiply(&b)?;
    print!("   A * B =\n{}", product);

    // Demonstrate YoungTableau
    println!("\n3. YoungTableau priority structure:");
    let config = TableauConfig::from_env()?;
    let mut tableau = YoungTableau::from_config(&config)?;
    println!(
        "   {}x{} tableau, capacity {}",
        tableau.rows(),
        tableau.cols(),
        tableau.capacity()
    );

    for value in [15, 4, 23, 8, 16, 42] {
        tableau.add(value);
    }
    println!("   Stored {} values, first row: {}", tableau.len(), tableau[0]);
    println!("   Contains 23: {}", tableau.find(23));
    println!("   Contains 24: {}", tableau.find(24));

    let mut drained = Vec::new();
    while let Some(value) = tableau.checked_min() {
        drained.push(value);
    }
    println!("   Drained in order: {:?}", drained);

    // Demonstrate tableau sort
    println!("\n4. Sorting through a tableau:");
    let mut small = YoungTableau::new(2, 2)?;
    let mut values = [5, 3, 4, 1];
    println!("   Input: {:?}", values);
    let sorted = small.sort(&mut values);
    println!("   Sorted: {}, result: {:?}", sorted, values);

    let mut too_many = [1, 2, 3, 4, 5];
    println!(
        "   Sorting {} values in a 2x2 tableau: {}",
        too_many.len(),
        small.sort(&mut too_many)
    );

    println!("\n=== Demo Complete ===");
    Ok(())
}
