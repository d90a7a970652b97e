//! Scales command handler

use gradepoint::core::scales;

/// List the built-in grading scales and their point tables.
pub fn run() {
    println!("\n=== Built-in Grading Scales ===");

    for scale in scales::all() {
        println!("\n{} (type: {})", scale.name, scale.scale_type);
        for (label, points) in &scale.grades {
            println!("  {label:<8} {points:.1}");
        }
    }
}
