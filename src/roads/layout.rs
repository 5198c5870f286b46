//! The default city grid.
//!
//! Two main avenues cross at the origin, with shorter ring corridors at
//! 25-unit intervals. All corridors are 6 units wide.

use super::Road;

/// Build the fixed 14-corridor grid.
pub fn city_grid() -> Vec<Road> {
    vec![
        // Main crossing
        Road::horizontal(0.0, 0.0, 6.0, 200.0),
        Road::vertical(0.0, 0.0, 6.0, 200.0),
        // Horizontal rings
        Road::horizontal(0.0, 25.0, 6.0, 160.0),
        Road::horizontal(0.0, -25.0, 6.0, 160.0),
        Road::horizontal(0.0, 50.0, 6.0, 120.0),
        Road::horizontal(0.0, -50.0, 6.0, 120.0),
        Road::horizontal(0.0, 75.0, 6.0, 80.0),
        Road::horizontal(0.0, -75.0, 6.0, 80.0),
        // Vertical rings
        Road::vertical(25.0, 0.0, 6.0, 160.0),
        Road::vertical(-25.0, 0.0, 6.0, 160.0),
        Road::vertical(50.0, 0.0, 6.0, 120.0),
        Road::vertical(-50.0, 0.0, 6.0, 120.0),
        Road::vertical(75.0, 0.0, 6.0, 80.0),
        Road::vertical(-75.0, 0.0, 6.0, 80.0),
    ]
}
