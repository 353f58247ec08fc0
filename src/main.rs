// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run the console demo with:
//   cargo run --example logic_gates
// or the live browser viewer with:
//   cargo run --bin viewer
fn main() {
    println!("lattice-nn: a tiny feedforward neural network engine.");
    println!("Run `cargo run --example logic_gates` for the OR/AND demo,");
    println!("or `cargo run --bin viewer` for the live browser viewer.");
}
