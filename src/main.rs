use ubid_rs::{UbidError, decode, encode, encode_area};

fn main() -> Result<(), UbidError> {
    let code = encode(47.64, -122.14, 47.65, -122.13, 47.645, -122.135)?;
    println!("UBID: {}", code);

    let area = decode(&code)?;
    println!(
        "Bounding box: ({}, {}) to ({}, {})",
        area.west, area.south, area.east, area.north
    );
    println!(
        "Centroid cell: ({}, {}) to ({}, {})",
        area.centroid_cell.west, area.centroid_cell.south, area.centroid_cell.east,
        area.centroid_cell.north
    );

    let round_trip = encode_area(&area.resize())?;
    println!("Round trip: {}", round_trip);

    Ok(())
}
