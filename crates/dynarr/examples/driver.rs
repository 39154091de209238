//! Sequential walk through the array API.
//!
//! Builds an array from capacity 1, pushes past several growth steps,
//! then pops, inserts, resizes and erases, printing the live elements
//! after each step.
//!
//! Run with:
//!   cargo run -p dynarr --example driver

use std::error::Error;
use std::io::{self, Write};

use dynarr::DynamicArray;

fn main() -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut array = DynamicArray::with_capacity(1)?;
    for v in [1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17] {
        array.push_back(v)?;
    }
    array.print_elements(&mut out)?;

    array.pop_back();
    array.pop_back();
    array.print_elements(&mut out)?;

    array.push_back(16)?;
    array.print_elements(&mut out)?;

    let pos = array.position(4)?;
    array.insert_at(pos, 5)?;
    array.print_elements(&mut out)?;

    array.resize_with_value(20, 100)?;
    array.print_elements(&mut out)?;

    array.resize(5)?;
    array.print_elements(&mut out)?;

    let pos = array.position(2)?;
    array.erase_at(pos)?;
    array.print_elements(&mut out)?;

    write!(out, "{}", array.report())?;
    let released = array.clear();
    writeln!(out, "Released {released} bytes")?;
    Ok(())
}
